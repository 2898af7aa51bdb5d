use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use sys_locale::get_locale;
use tracing::{debug, error};

pub const DEFAULT_LOCALE: &str = "zh-CN";
pub const AUTO_LOCALE: &str = "auto";

/// Line templates for one locale. `{section}` and `{error}` are substituted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Messages {
    pub header: String,
    pub not_found: String,
    pub read_error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            header: "=== 寻找{section}部分 ===".to_string(),
            not_found: "未找到{section}部分".to_string(),
            read_error: "读取文档时出错: {error}".to_string(),
        }
    }
}

impl Messages {
    pub fn header(&self, section: &str) -> String {
        self.header.replace("{section}", section)
    }

    pub fn not_found(&self, section: &str) -> String {
        self.not_found.replace("{section}", section)
    }

    pub fn read_error(&self, error: &dyn std::fmt::Display) -> String {
        self.read_error.replace("{error}", &error.to_string())
    }
}

// Extra locales shipped alongside the built-in zh-CN messages.
pub static TRANSLATIONS: Lazy<HashMap<String, Messages>> = Lazy::new(|| {
    load_translations(include_str!("../resources/translations.json")).unwrap_or_else(|e| {
        error!("failed to load translations: {e}");
        HashMap::new()
    })
});

/// Parses a catalog of `locale -> Messages`.
pub fn load_translations(json: &str) -> Result<HashMap<String, Messages>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Resolves a locale tag to its messages, falling back to zh-CN.
///
/// `auto` asks the operating system. Otherwise the tag is tried as given,
/// with `_` normalized to `-`, then by its language prefix.
pub fn messages_for(locale: &str) -> Messages {
    let requested = if locale.eq_ignore_ascii_case(AUTO_LOCALE) {
        get_locale().unwrap_or_else(|| DEFAULT_LOCALE.to_string())
    } else {
        locale.to_string()
    };

    match lookup(&TRANSLATIONS, &requested) {
        Some(messages) => {
            debug!(locale = %requested, "using translated messages");
            messages.clone()
        }
        None => Messages::default(),
    }
}

fn lookup<'a>(catalog: &'a HashMap<String, Messages>, locale: &str) -> Option<&'a Messages> {
    let normalized = locale.replace('_', "-");
    catalog
        .get(locale)
        .or_else(|| catalog.get(&normalized))
        .or_else(|| {
            let language = normalized.split('-').next()?;
            catalog.get(language)
        })
}
