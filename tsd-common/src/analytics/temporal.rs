//! Activity over dates, hours, weekdays and months

use chrono::{Datelike, NaiveDate, Timelike, Weekday};
use serde::Serialize;
use std::collections::BTreeMap;

use super::mean;
use super::sentiment::class_slot;
use crate::AnalyzedPost;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Class counts on one date, zero-filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateSentiment {
    pub date: NaiveDate,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourCount {
    pub hour: u32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayCount {
    pub weekday: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyEngagement {
    /// `YYYY-MM`
    pub month: String,
    pub posts: usize,
    pub mean_likes: f64,
    pub mean_retweets: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemporalSummary {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Whole days between the first and last timestamp
    pub span_days: i64,
    /// Dates with at least one post, ascending
    pub by_date: Vec<DateCount>,
    pub sentiment_by_date: Vec<DateSentiment>,
    /// All 24 hours
    pub by_hour: Vec<HourCount>,
    /// Monday first
    pub by_weekday: Vec<WeekdayCount>,
    pub monthly: Vec<MonthlyEngagement>,
}

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn temporal_summary(posts: &[AnalyzedPost]) -> TemporalSummary {
    let first = posts.iter().map(|p| p.post.timestamp).min();
    let last = posts.iter().map(|p| p.post.timestamp).max();
    let span_days = match (first, last) {
        (Some(a), Some(b)) => (b - a).num_days(),
        _ => 0,
    };

    let mut dates: BTreeMap<NaiveDate, [usize; 3]> = BTreeMap::new();
    let mut hours = [0usize; 24];
    let mut weekdays = [0usize; 7];
    let mut months: BTreeMap<String, Vec<&AnalyzedPost>> = BTreeMap::new();

    for p in posts {
        let ts = p.post.timestamp;
        dates.entry(ts.date()).or_default()[class_slot(p.sentiment)] += 1;
        hours[ts.hour() as usize] += 1;
        weekdays[ts.weekday().num_days_from_monday() as usize] += 1;
        months.entry(ts.format("%Y-%m").to_string()).or_default().push(p);
    }

    TemporalSummary {
        start_date: first.map(|t| t.date()),
        end_date: last.map(|t| t.date()),
        span_days,
        by_date: dates
            .iter()
            .map(|(&date, c)| DateCount {
                date,
                count: c.iter().sum(),
            })
            .collect(),
        sentiment_by_date: dates
            .iter()
            .map(|(&date, c)| DateSentiment {
                date,
                positive: c[0],
                negative: c[1],
                neutral: c[2],
            })
            .collect(),
        by_hour: hours
            .iter()
            .enumerate()
            .map(|(hour, &count)| HourCount {
                hour: hour as u32,
                count,
            })
            .collect(),
        by_weekday: WEEK
            .iter()
            .zip(weekdays.iter())
            .map(|(&day, &count)| WeekdayCount {
                weekday: weekday_name(day).to_string(),
                count,
            })
            .collect(),
        monthly: months
            .into_iter()
            .map(|(month, group)| MonthlyEngagement {
                month,
                posts: group.len(),
                mean_likes: mean(group.iter().map(|p| p.post.likes as f64)),
                mean_retweets: mean(group.iter().map(|p| p.post.retweets as f64)),
            })
            .collect(),
    }
}
