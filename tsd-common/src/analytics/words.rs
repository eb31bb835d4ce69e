//! Word statistics over cleaned post text

use serde::Serialize;

use super::SummaryStats;
use crate::text::WordCounter;
use crate::{AnalyzedPost, SentimentClass};

pub const MIN_TOP_WORDS: usize = 5;
pub const MAX_TOP_WORDS: usize = 50;
pub const DEFAULT_TOP_WORDS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: u64,
}

/// Word figures for the posts of one class
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassWords {
    pub class: SentimentClass,
    pub word_count: SummaryStats,
    pub top_words: Vec<WordFrequency>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSummary {
    /// Words per post
    pub word_count: SummaryStats,
    pub unique_words: usize,
    pub top_words: Vec<WordFrequency>,
    pub by_class: Vec<ClassWords>,
}

/// Clamp a requested list length into `MIN_TOP_WORDS..=MAX_TOP_WORDS`
pub fn clamp_top(requested: usize) -> usize {
    requested.clamp(MIN_TOP_WORDS, MAX_TOP_WORDS)
}

/// `top` is clamped with [`clamp_top`]
pub fn text_summary(posts: &[AnalyzedPost], top: usize) -> TextSummary {
    let top = clamp_top(top);
    let (word_count, counter) = tally(posts.iter());

    let by_class = SentimentClass::ALL
        .iter()
        .map(|&class| {
            let (word_count, counter) = tally(posts.iter().filter(|p| p.sentiment == class));
            ClassWords {
                class,
                word_count,
                top_words: frequencies(&counter, top),
            }
        })
        .collect();

    TextSummary {
        word_count,
        unique_words: counter.unique(),
        top_words: frequencies(&counter, top),
        by_class,
    }
}

fn tally<'a, I>(posts: I) -> (SummaryStats, WordCounter)
where
    I: Iterator<Item = &'a AnalyzedPost>,
{
    let mut counter = WordCounter::new();
    let mut lengths = Vec::new();
    for post in posts {
        counter.add(&post.cleaned_text);
        lengths.push(post.word_count as f64);
    }
    (SummaryStats::from_values(&lengths), counter)
}

fn frequencies(counter: &WordCounter, n: usize) -> Vec<WordFrequency> {
    counter
        .most_common(n)
        .into_iter()
        .map(|(word, count)| WordFrequency { word, count })
        .collect()
}
