//! Profile options that drive permission requirements.
//!
//! Only the options that decide which permissions are needed are modelled.
//! Options are read as the host application exports them (camelCase keys),
//! from either TOML or JSON; unknown keys are ignored and missing sections
//! fall back to their defaults (every feature disabled, no card fields).

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A read-only snapshot of the options of one profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileOptions {
    /// Text parsing options.
    #[serde(default)]
    pub parsing: ParsingOptions,

    /// Clipboard monitoring options.
    #[serde(default)]
    pub clipboard: ClipboardOptions,

    /// Card creation options.
    #[serde(default)]
    pub anki: AnkiOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsingOptions {
    /// Parse text with MeCab through a native messaging helper.
    #[serde(default)]
    pub enable_mecab_parser: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipboardOptions {
    /// Watch the clipboard from the background page.
    #[serde(default)]
    pub enable_background_monitor: bool,

    /// Watch the clipboard while the search page is open.
    #[serde(default)]
    pub enable_search_page_monitor: bool,
}

/// Card templates, one set per card category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnkiOptions {
    #[serde(default)]
    pub terms: CardOptions,

    #[serde(default)]
    pub kanji: CardOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardOptions {
    /// Card field name to template string.
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl ProfileOptions {
    /// Load options from a file.
    ///
    /// Files ending in `.json` are read as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::parse_json(&content),
            _ => Self::parse_toml(&content),
        }
    }

    /// Parse options from a TOML string.
    pub fn parse_toml(toml: &str) -> Result<Self> {
        toml::from_str(toml).map_err(|e| Error::Parse(e.to_string()))
    }

    /// Parse options from a JSON string.
    pub fn parse_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Parse(e.to_string()))
    }

    /// Both card field collections: terms first, then kanji.
    pub fn card_field_collections(&self) -> [&BTreeMap<String, String>; 2] {
        [&self.anki.terms.fields, &self.anki.kanji.fields]
    }
}
