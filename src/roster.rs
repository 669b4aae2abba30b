use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, warn};

use crate::calc::{self, Grade};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub name: String,
    pub father_name: String,
    pub roll_number: String,
    pub marks: Vec<f64>,
    pub total: f64,
    pub percentage: f64,
    pub grade: Grade,
    pub gpa: f64,
}

impl StudentRecord {
    /// Derived fields are computed here once and never refreshed.
    pub fn new(
        name: impl Into<String>,
        father_name: impl Into<String>,
        roll_number: impl Into<String>,
        marks: Vec<f64>,
    ) -> Self {
        let card = calc::score_card(&marks);
        Self {
            name: name.into(),
            father_name: father_name.into(),
            roll_number: roll_number.into(),
            marks,
            total: card.total,
            percentage: card.percentage,
            grade: card.grade,
            gpa: card.gpa,
        }
    }
}

/// Append-only, insertion-ordered class roster.
#[derive(Debug, Default)]
pub struct Roster {
    records: Vec<StudentRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Duplicate roll numbers are accepted; lookups return the earliest.
    pub fn append(&mut self, record: StudentRecord) {
        if self.find_by_roll(&record.roll_number).is_some() {
            warn!(
                roll = %record.roll_number,
                "roll number already on roster; lookups keep the first"
            );
        }
        debug!(roll = %record.roll_number, position = self.records.len(), "student appended");
        self.records.push(record);
    }

    /// Exact, case-sensitive match.
    pub fn find_by_roll(&self, roll: &str) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.roll_number == roll)
    }

    pub fn all(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub type SharedRoster = Arc<RwLock<Roster>>;

pub fn shared(roster: Roster) -> SharedRoster {
    Arc::new(RwLock::new(roster))
}

/// Search terms; each non-empty field is a case-insensitive substring test
/// and a record matches if any field does.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub name: String,
    pub father: String,
    pub roll: String,
}

impl SearchQuery {
    /// Builds a query from raw parameters. A repeated key keeps its first
    /// value; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut name = None;
        let mut father = None;
        let mut roll = None;
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "name" => &mut name,
                "father" => &mut father,
                "roll" => &mut roll,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        Self {
            name: name.unwrap_or_default(),
            father: father.unwrap_or_default(),
            roll: roll.unwrap_or_default(),
        }
    }

    pub fn matches(&self, record: &StudentRecord) -> bool {
        contains_ci(&record.name, &self.name)
            || contains_ci(&record.father_name, &self.father)
            || contains_ci(&record.roll_number, &self.roll)
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && haystack.to_lowercase().contains(&needle.to_lowercase())
}
