use crate::excerpt::ExcerptWindow;
use crate::translation::DEFAULT_LOCALE;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

pub const DEFAULT_KEYWORDS: [&str; 4] = ["项目概述", "功能需求", "技术架构", "数据结构"];

/// One keyword search. The label names the section in printed lines and
/// defaults to the keyword itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub keyword: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Section {
    pub fn new<S: Into<String>>(keyword: S) -> Self {
        Self {
            keyword: keyword.into(),
            label: None,
        }
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.keyword)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExcerptConfig {
    pub sections: Vec<Section>,
    pub window: ExcerptWindow,
    pub locale: String,
}

impl Default for ExcerptConfig {
    fn default() -> Self {
        Self {
            sections: DEFAULT_KEYWORDS.iter().copied().map(Section::new).collect(),
            window: ExcerptWindow::default(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl ExcerptConfig {
    /// Loads a JSON config; fields left out keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }
}
