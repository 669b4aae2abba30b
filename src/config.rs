use std::collections::HashSet;
use std::net::SocketAddr;
use std::path::Path;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

/// Form fields the add-student form already uses; subjects may not shadow them.
const RESERVED_FIELDS: [&str; 3] = ["name", "father", "roll"];

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub bind: SocketAddr,
    pub institute_name: String,
    pub class_name: String,
    pub subjects: Vec<String>,
    pub credentials: CredentialConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CredentialConfig {
    pub username: String,
    pub password: String,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            username: "teacher".to_string(),
            password: "1234".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            institute_name: "Sunrise International School".to_string(),
            class_name: "12th Grade Science".to_string(),
            subjects: [
                "Math",
                "English",
                "Science",
                "History",
                "Geography",
                "Computer",
                "Physics",
                "Chemistry",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            credentials: CredentialConfig::default(),
        }
    }
}

impl AppConfig {
    /// Defaults when `path` is `None`; otherwise a JSON file whose missing
    /// keys fall back to the defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let cfg = match path {
            None => Self::default(),
            Some(p) => {
                let text = std::fs::read_to_string(p)
                    .with_context(|| format!("reading config {}", p.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing config {}", p.display()))?
            }
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.subjects.is_empty() {
            bail!("at least one subject is required");
        }
        let mut seen = HashSet::new();
        for s in &self.subjects {
            let s = s.trim();
            if s.is_empty() {
                bail!("subject names must not be blank");
            }
            if RESERVED_FIELDS.contains(&s) {
                bail!("subject name {s:?} clashes with a student form field");
            }
            if !seen.insert(s) {
                bail!("duplicate subject name {s:?}");
            }
        }
        Ok(())
    }
}

/// Header details shown on every page and report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolInfo {
    pub institute_name: String,
    pub class_name: String,
    pub subjects: Vec<String>,
}

impl From<&AppConfig> for SchoolInfo {
    fn from(cfg: &AppConfig) -> Self {
        Self {
            institute_name: cfg.institute_name.clone(),
            class_name: cfg.class_name.clone(),
            subjects: cfg.subjects.iter().map(|s| s.trim().to_string()).collect(),
        }
    }
}
