// Pokemon Transfer Schema - Shared type definitions
// This crate contains the format tags and limit records that are shared between
// the main pokemon-transfer crate and its build script, enabling the limit table
// to be compiled into a postcard blob at build time.

// Re-export the main types
pub use entity_formats::*;
pub use game_limits::*;
pub use language::*;
pub use save_types::*;
pub use strum::IntoEnumIterator;

pub mod entity_formats;
pub mod game_limits;
pub mod language;
pub mod save_types;
