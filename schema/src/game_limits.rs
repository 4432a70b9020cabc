use crate::EntityFormat;
use serde::{Deserialize, Serialize};

/// Maximum valid values for a single entity format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLimits {
    pub max_species_id: u16,
    pub max_move_id: u16,
    pub max_item_id: u16,
    pub max_ability_id: u16,
    pub max_ball_id: u8,
    pub max_game_id: u8,
    /// Maximum nickname length in characters.
    pub nick_length: u8,
    /// Maximum original trainer name length in characters.
    pub ot_length: u8,
    pub max_ev: u16,
    pub max_iv: u8,
}

impl GameLimits {
    pub fn allows_species(&self, species: u16) -> bool {
        species <= self.max_species_id
    }

    pub fn allows_move(&self, move_id: u16) -> bool {
        move_id <= self.max_move_id
    }

    pub fn allows_item(&self, item: u16) -> bool {
        item <= self.max_item_id
    }
}

/// One row of `data/limits.ron`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitEntry {
    pub format: EntityFormat,
    pub limits: GameLimits,
}
