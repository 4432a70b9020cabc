// In: src/lib.rs

//! Pokemon Transfer
//!
//! Save-file recognition and record transfer between game generations.
//! Raw save bytes are classified by structural evidence alone, and single
//! stored records move between generation-specific layouts through a static
//! conversion graph that mirrors the official transfer tools.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod conversion;
pub mod entity;
pub mod errors;
pub mod limits;
pub mod saves;
pub mod species;
pub mod text;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `pokemon-transfer` crate,
// making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export the shared format tags and limit records.
pub use schema::{EntityFormat, GameLimits, LanguageId, SaveType};

// --- From this crate's modules (`src/`) ---

// Save recognition and the save factory.
pub use saves::{classify, create, is_backup, is_size_valid, SaveFile, SaveProfile, SaveRecognizer};

// Stored records.
pub use entity::detect::detect_entity_format;
pub use entity::Entity;

// Conversion engine and its context.
pub use conversion::settings::ConverterSettings;
pub use conversion::trainer::{RecentTrainerCache, RegionOrigin, TrainerContext};
pub use conversion::{ConversionResult, Converted, EntityConverter, TransferTarget};

// Primary data access functions.
pub use conversion::sanitizer::sanitize;
pub use limits::limits;

// Crate-specific error and result types.
pub use errors::{
    ConversionError, ConvertResult, EntityError, EntityResult, GraphError, SettingsError,
    TransferError, TransferResult,
};
