//! Commit time report.

use std::fmt;

use crate::{
    buckets::{BucketCounts, TimeBucket},
    chart::{render_bar, REPORT_BAR_WIDTH},
};

const LABEL_COLUMN_WIDTH: usize = 10;
const COMMITS_COLUMN_WIDTH: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportTitle {
    EarlyRiser,
    NightOwl,
}

impl ReportTitle {
    /// Ties go to night owls.
    pub fn from_counts(counts: &BucketCounts) -> Self {
        if counts.early_total() > counts.late_total() {
            Self::EarlyRiser
        } else {
            Self::NightOwl
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Self::EarlyRiser => "I'm an early 🐤",
            Self::NightOwl => "I'm a night 🦉",
        }
    }
}

impl fmt::Display for ReportTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub bucket: TimeBucket,
    pub commits: u64,
    pub bar: String,
    pub percent: f64,
    /// Percentage in tenths, rounded half up.
    pub percent_tenths: u64,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {:>5}%",
            pad_end(&self.bucket.label(), LABEL_COLUMN_WIDTH),
            pad_end(&format!("{:>5} commits", self.commits), COMMITS_COLUMN_WIDTH),
            self.bar,
            format!("{}.{}", self.percent_tenths / 10, self.percent_tenths % 10)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: ReportTitle,
    pub lines: Vec<ReportLine>,
}

impl Report {
    /// Build the report, or nothing when no commit happened from morning to night.
    pub fn assemble(counts: &BucketCounts) -> Option<Self> {
        if counts.active_total() == 0 {
            return None;
        }

        let total_commits = counts.total();
        let total = total_commits as f64;
        let lines = TimeBucket::ALL
            .iter()
            .map(|&bucket| {
                let commits = counts.get(bucket);
                let percent = commits as f64 / total * 100.0;

                ReportLine {
                    bucket,
                    commits,
                    bar: render_bar(percent, REPORT_BAR_WIDTH),
                    percent,
                    percent_tenths: percent_tenths(commits, total_commits),
                }
            })
            .collect();

        Some(Self {
            title: ReportTitle::from_counts(counts),
            lines,
        })
    }

    /// Lines joined with newlines, as published.
    pub fn content(&self) -> String {
        self.lines
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// Exact on the count ratio, so 0.25% shows as 0.3%.
fn percent_tenths(commits: u64, total: u64) -> u64 {
    (commits * 2000 + total) / (2 * total)
}

// Columns are measured in UTF-16 units, so emoji take two columns.
fn pad_end(text: &str, width: usize) -> String {
    let len = text.encode_utf16().count();
    let mut padded = text.to_string();
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    padded
}
