use serde::Serialize;

use crate::roster::StudentRecord;

/// Letter grade bands. Thresholds are inclusive on the lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    Fail,
}

impl Grade {
    pub fn as_str(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::Fail => "Fail",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 2-decimal rounding, half away from zero.
pub fn round_2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

pub fn grade(percentage: f64) -> Grade {
    if percentage >= 90.0 {
        Grade::APlus
    } else if percentage >= 80.0 {
        Grade::A
    } else if percentage >= 70.0 {
        Grade::B
    } else if percentage >= 60.0 {
        Grade::C
    } else if percentage >= 50.0 {
        Grade::D
    } else {
        Grade::Fail
    }
}

/// Unclamped: a percentage above 100 yields a GPA above 10.
pub fn gpa(percentage: f64) -> f64 {
    round_2(percentage / 10.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreCard {
    pub total: f64,
    pub percentage: f64,
    pub grade: Grade,
    pub gpa: f64,
}

/// Derived fields for one student's marks. Grade and GPA come from the
/// unrounded percentage; only the stored percentage is rounded.
pub fn score_card(marks: &[f64]) -> ScoreCard {
    let total: f64 = marks.iter().sum();
    let percentage = if marks.is_empty() {
        0.0
    } else {
        total / (marks.len() as f64)
    };
    ScoreCard {
        total,
        percentage: round_2(percentage),
        grade: grade(percentage),
        gpa: gpa(percentage),
    }
}

pub fn class_average(records: &[StudentRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: f64 = records.iter().map(|r| r.percentage).sum();
    round_2(sum / (records.len() as f64))
}

/// Highest percentage; the earliest record wins a tie.
pub fn topper(records: &[StudentRecord]) -> Option<&StudentRecord> {
    let mut best: Option<&StudentRecord> = None;
    for r in records {
        match best {
            Some(b) if r.percentage <= b.percentage => {}
            _ => best = Some(r),
        }
    }
    best
}

pub fn average_per_subject(records: &[StudentRecord], subject_count: usize) -> Vec<f64> {
    (0..subject_count)
        .map(|idx| {
            if records.is_empty() {
                return 0.0;
            }
            let sum: f64 = records
                .iter()
                .map(|r| r.marks.get(idx).copied().unwrap_or(0.0))
                .sum();
            round_2(sum / (records.len() as f64))
        })
        .collect()
}
