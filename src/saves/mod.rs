//! Save containers: classification, the save factory and wrapper handling.

pub mod checksums;
pub mod classifier;
pub mod handlers;
pub mod sizes;

#[cfg(test)]
mod tests;

pub use classifier::{bdsp_revision_suffix, candidates, classify, is_backup, is_size_valid};
pub use handlers::{SaveHandler, SaveReader, SaveRecognizer, SplitSave};

use schema::{EntityFormat, SaveType};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Static facts about a save type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SaveProfile {
    pub save_type: SaveType,
    pub label: &'static str,
    pub generation: u8,
    /// Record format stored in the container. `None` for layouts whose
    /// records are not modeled.
    pub entity_format: Option<EntityFormat>,
    /// Storage and side-game containers rather than a main-series adventure.
    pub is_storage: bool,
}

const fn profile_row(
    save_type: SaveType,
    label: &'static str,
    generation: u8,
    entity_format: Option<EntityFormat>,
    is_storage: bool,
) -> SaveProfile {
    SaveProfile {
        save_type,
        label,
        generation,
        entity_format,
        is_storage,
    }
}

use EntityFormat as F;

static PROFILES: [SaveProfile; 32] = [
    profile_row(SaveType::RBY, "Red/Blue/Yellow", 1, Some(F::PK1), false),
    profile_row(SaveType::GS, "Gold/Silver", 2, Some(F::PK2), false),
    profile_row(SaveType::C, "Crystal", 2, Some(F::PK2), false),
    profile_row(SaveType::RS, "Ruby/Sapphire", 3, Some(F::PK3), false),
    profile_row(SaveType::E, "Emerald", 3, Some(F::PK3), false),
    profile_row(SaveType::FRLG, "FireRed/LeafGreen", 3, Some(F::PK3), false),
    profile_row(SaveType::DP, "Diamond/Pearl", 4, Some(F::PK4), false),
    profile_row(SaveType::Pt, "Platinum", 4, Some(F::PK4), false),
    profile_row(SaveType::HGSS, "HeartGold/SoulSilver", 4, Some(F::PK4), false),
    profile_row(SaveType::BW, "Black/White", 5, Some(F::PK5), false),
    profile_row(SaveType::B2W2, "Black 2/White 2", 5, Some(F::PK5), false),
    profile_row(SaveType::XY, "X/Y", 6, Some(F::PK6), false),
    profile_row(SaveType::ORAS, "Omega Ruby/Alpha Sapphire", 6, Some(F::PK6), false),
    profile_row(SaveType::ORASDEMO, "Omega Ruby/Alpha Sapphire Demo", 6, Some(F::PK6), false),
    profile_row(SaveType::SM, "Sun/Moon", 7, Some(F::PK7), false),
    profile_row(SaveType::USUM, "Ultra Sun/Ultra Moon", 7, Some(F::PK7), false),
    profile_row(SaveType::GG, "Let's Go Pikachu/Eevee", 7, Some(F::PB7), false),
    profile_row(SaveType::SWSH, "Sword/Shield", 8, Some(F::PK8), false),
    profile_row(SaveType::BDSP, "Brilliant Diamond/Shining Pearl", 8, Some(F::PB8), false),
    profile_row(SaveType::BDSPLUMI, "Luminescent Platinum", 8, Some(F::PB8LUMI), false),
    profile_row(SaveType::PLA, "Legends: Arceus", 8, None, false),
    profile_row(SaveType::COLO, "Colosseum", 3, Some(F::CK3), true),
    profile_row(SaveType::XD, "XD: Gale of Darkness", 3, Some(F::XK3), true),
    profile_row(SaveType::RSBOX, "Box Ruby & Sapphire", 3, Some(F::PK3), true),
    profile_row(SaveType::BATREV, "Battle Revolution", 4, Some(F::BK4), true),
    profile_row(SaveType::Stadium2, "Stadium 2", 2, Some(F::SK2), true),
    profile_row(SaveType::Stadium, "Stadium", 1, Some(F::PK1), true),
    profile_row(SaveType::StadiumJ, "Stadium (J)", 1, Some(F::PK1), true),
    profile_row(SaveType::Bank3, "Bank (Gen 3)", 3, Some(F::PK3), true),
    profile_row(SaveType::Bank4, "Bank (Gen 4)", 4, Some(F::PK4), true),
    profile_row(SaveType::Bank7, "Bank (Gen 7)", 7, Some(F::PK7), true),
    profile_row(SaveType::Ranch4, "My Pokémon Ranch", 4, Some(F::PK4), true),
];

pub fn profile(save_type: SaveType) -> &'static SaveProfile {
    PROFILES
        .iter()
        .find(|row| row.save_type == save_type)
        .unwrap_or_else(|| panic!("save profile table is missing {}", save_type))
}

/// Wrapper bytes and origin of a loaded save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveMetadata {
    pub header: Vec<u8>,
    pub footer: Vec<u8>,
    pub file_path: Option<PathBuf>,
}

impl SaveMetadata {
    pub fn set_wrapper(&mut self, header: Vec<u8>, footer: Vec<u8>) {
        self.header = header;
        self.footer = footer;
    }

    pub fn set_file_path(&mut self, path: &Path) {
        self.file_path = Some(path.to_path_buf());
    }

    pub fn has_wrapper(&self) -> bool {
        !self.header.is_empty() || !self.footer.is_empty()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_path
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
    }
}

/// A classified save container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFile {
    save_type: SaveType,
    data: Vec<u8>,
    metadata: SaveMetadata,
}

impl SaveFile {
    pub fn save_type(&self) -> SaveType {
        self.save_type
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn profile(&self) -> &'static SaveProfile {
        profile(self.save_type)
    }

    pub fn generation(&self) -> u8 {
        self.profile().generation
    }

    pub fn entity_format(&self) -> Option<EntityFormat> {
        self.profile().entity_format
    }

    pub fn metadata(&self) -> &SaveMetadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut SaveMetadata {
        &mut self.metadata
    }

    /// Revision tag appended to the type name, only set for Luminescent saves.
    pub fn revision_suffix(&self) -> Option<&'static str> {
        match self.save_type {
            SaveType::BDSPLUMI => bdsp_revision_suffix(&self.data),
            _ => None,
        }
    }

    /// Type name with the revision suffix, e.g. `BDSPLUMI-1.3.0`.
    pub fn display_name(&self) -> String {
        format!("{}{}", self.save_type, self.revision_suffix().unwrap_or(""))
    }

    /// Original bytes with any emulator wrapper restored.
    pub fn to_wrapped_bytes(&self) -> Vec<u8> {
        let mut out =
            Vec::with_capacity(self.metadata.header.len() + self.data.len() + self.metadata.footer.len());
        out.extend_from_slice(&self.metadata.header);
        out.extend_from_slice(&self.data);
        out.extend_from_slice(&self.metadata.footer);
        out
    }
}

/// Builds the container for an already classified buffer. No probe is rerun.
pub fn create(save_type: SaveType, data: Vec<u8>) -> SaveFile {
    SaveFile {
        save_type,
        data,
        metadata: SaveMetadata::default(),
    }
}

/// Classifies and builds in one step.
pub fn load(data: Vec<u8>) -> Option<SaveFile> {
    classify(&data).map(|save_type| create(save_type, data))
}
