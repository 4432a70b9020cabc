//! The receiving trainer: a caller-scoped cache of the last loaded trainer,
//! consulted only for fields a source record cannot provide.

use serde::{Deserialize, Serialize};

use crate::entity::codes::version;
use crate::entity::Entity;
use schema::LanguageId;

/// 3DS-era console region and home location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionOrigin {
    pub console_region: u8,
    pub country: u8,
    pub region: u8,
}

impl Default for RegionOrigin {
    /// Americas console, United States, Kentucky.
    fn default() -> Self {
        Self {
            console_region: 1,
            country: 49,
            region: 7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerContext {
    pub ot_name: String,
    pub gender: u8,
    pub language: LanguageId,
    pub generation: u8,
    /// Shared version id of the trainer's game.
    pub game: u8,
    pub tid: u16,
    pub sid: u16,
    /// Only 3DS-era and later trainers carry region data.
    pub region: Option<RegionOrigin>,
    /// Loaded from a Luminescent save.
    pub luminescent: bool,
}

impl Default for TrainerContext {
    fn default() -> Self {
        Self {
            ot_name: "TRAINER".to_string(),
            gender: 0,
            language: LanguageId::English,
            generation: 7,
            game: version::SN,
            tid: 12345,
            sid: 54321,
            region: None,
            luminescent: false,
        }
    }
}

impl TrainerContext {
    /// Fallback trainer for region-only lookups.
    pub fn default_3ds() -> Self {
        Self {
            region: Some(RegionOrigin::default()),
            ..Self::default()
        }
    }
}

/// Last-seen trainer, plus the last one that carried region data.
///
/// One cache belongs to one session; share it between threads only behind
/// the caller's own synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentTrainerCache {
    trainer: TrainerContext,
    trainer_3ds: TrainerContext,
}

impl Default for RecentTrainerCache {
    fn default() -> Self {
        Self {
            trainer: TrainerContext::default(),
            trainer_3ds: TrainerContext::default_3ds(),
        }
    }
}

impl RecentTrainerCache {
    pub fn new(trainer: TrainerContext) -> Self {
        let mut cache = Self::default();
        cache.set_recent_trainer(trainer);
        cache
    }

    /// Replaces the cached trainer wholesale. The region slot only moves when
    /// the new trainer has region data.
    pub fn set_recent_trainer(&mut self, trainer: TrainerContext) {
        if trainer.region.is_some() {
            self.trainer_3ds = trainer.clone();
        }
        self.trainer = trainer;
    }

    pub fn trainer(&self) -> &TrainerContext {
        &self.trainer
    }

    pub fn ot_name(&self) -> &str {
        &self.trainer.ot_name
    }

    pub fn ot_gender(&self) -> u8 {
        self.trainer.gender
    }

    pub fn language(&self) -> LanguageId {
        self.trainer.language
    }

    pub fn generation(&self) -> u8 {
        self.trainer.generation
    }

    pub fn game(&self) -> u8 {
        self.trainer.game
    }

    pub fn is_luminescent(&self) -> bool {
        self.trainer.luminescent
    }

    pub fn region_origin(&self) -> RegionOrigin {
        self.trainer_3ds.region.unwrap_or_default()
    }

    pub fn apply_console_region(&self, entity: &mut Entity) {
        let origin = self.region_origin();
        entity.set_region_origin(origin.console_region, origin.country, origin.region);
    }

    pub fn apply_first_country_region(&self, entity: &mut Entity) {
        let origin = self.region_origin();
        entity.set_geo1(origin.country, origin.region);
    }

    /// The receiving trainer becomes the current handler.
    pub fn apply_handler(&self, entity: &mut Entity) {
        entity.set_handler(&self.trainer.ot_name, self.trainer.gender);
        entity.set_current_handler(1);
    }
}
