use crate::conversion::ConversionResult;
use schema::EntityFormat;
use thiserror::Error;

/// Main error type for the Pokemon transfer toolkit
#[derive(Debug, Error)]
pub enum TransferError {
    /// Error related to wrapping a stored record
    #[error("Entity error: {0}")]
    Entity(#[from] EntityError),
    /// A conversion between record formats was refused
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),
    /// Error related to loading converter settings
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
    /// A save or record file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to stored records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityError {
    /// Buffer length does not match the claimed format
    #[error("{format} records are {expected:#X} bytes, got {actual:#X}")]
    InvalidLength {
        format: EntityFormat,
        expected: usize,
        actual: usize,
    },
}

/// Reasons a conversion produced no record. None of these are fatal; the
/// caller decides whether to retry with best-effort conversion enabled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The species/form pair is frozen to its default form in the source format
    #[error("species {species} form {form} cannot leave {format}")]
    IncompatibleForm {
        format: EntityFormat,
        species: u16,
        form: u8,
    },
    /// The species does not exist in the destination format
    #[error("species {species} exceeds the {destination} maximum of {max}")]
    IncompatibleSpecies {
        destination: EntityFormat,
        species: u16,
        max: u16,
    },
    /// Game Boy records cannot cross between Japanese and international games
    #[error("{source_format} record language does not match the destination region")]
    IncompatibleLanguage { source_format: EntityFormat },
    /// No conversion path exists and no fallback applied
    #[error("no conversion route from {from} to {to}")]
    NoRoute { from: EntityFormat, to: EntityFormat },
}

impl ConversionError {
    /// Result code reported to callers.
    pub fn code(&self) -> ConversionResult {
        match self {
            ConversionError::IncompatibleForm { .. } => ConversionResult::IncompatibleForm,
            ConversionError::IncompatibleSpecies { .. } => ConversionResult::IncompatibleSpecies,
            ConversionError::IncompatibleLanguage { .. } => ConversionResult::IncompatibleLanguage,
            ConversionError::NoRoute { .. } => ConversionResult::NoRoute,
        }
    }
}

/// Errors related to converter settings
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    /// The settings file is not valid RON
    #[error("failed to parse settings: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Errors in the static conversion graph. Seeing one is a build defect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("edge {0} -> {0} loops back to itself")]
    SelfLoop(EntityFormat),
    #[error("edge {from} -> {to} is declared twice")]
    DuplicateEdge { from: EntityFormat, to: EntityFormat },
    #[error("{format} has no edge back to {parent}")]
    MissingReturn {
        format: EntityFormat,
        parent: EntityFormat,
    },
    #[error("{format} has no edge forward to {successor}")]
    MissingSuccessor {
        format: EntityFormat,
        successor: EntityFormat,
    },
}

/// Result type for operations that can fail across the toolkit
pub type TransferResult<T> = Result<T, TransferError>;

/// Result type for record construction
pub type EntityResult<T> = Result<T, EntityError>;

/// Result type for conversions
pub type ConvertResult<T> = Result<T, ConversionError>;
