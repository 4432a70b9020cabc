//! Converter settings loaded from RON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::trainer::TrainerContext;
use crate::errors::SettingsError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterSettings {
    /// Permits raw clones and field copies when no official route exists.
    pub allow_incompatible_conversion: bool,
    /// Seeds the trainer cache.
    pub trainer: Option<TrainerContext>,
}

impl ConverterSettings {
    pub fn from_ron_str(text: &str) -> Result<Self, SettingsError> {
        Ok(ron::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }
}
