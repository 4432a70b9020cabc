//! Guess the format of a stored record from its length.

use super::codes::version;
use schema::EntityFormat;

const MAX_GEN4_SPECIES: u16 = 493;

fn le_word(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn be_word(data: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([data[offset], data[offset + 1]])
}

/// Picks the most likely format for a standalone record. Lengths shared by
/// several formats are split on the stored version byte.
pub fn detect_entity_format(data: &[u8]) -> Option<EntityFormat> {
    let format = match data.len() {
        0x45 | 0x3B => EntityFormat::PK1,
        0x49 | 0x3F => EntityFormat::PK2,
        0x48 => EntityFormat::SK2,
        0x50 => EntityFormat::PK3,
        0x138 => EntityFormat::CK3,
        0xC4 => EntityFormat::XK3,
        0x88 => match data[0x5F] {
            version::W..=version::B2 => EntityFormat::PK5,
            // Battle Revolution stores big-endian: only one byte order yields
            // a Gen 4 species id.
            _ if le_word(data, 0x08) > MAX_GEN4_SPECIES && be_word(data, 0x08) <= MAX_GEN4_SPECIES => {
                EntityFormat::BK4
            }
            _ => EntityFormat::PK4,
        },
        0xE8 => match data[0xDF] {
            version::SN..=version::UM | version::RD..=version::C => EntityFormat::PK7,
            _ => EntityFormat::PK6,
        },
        0x104 => EntityFormat::PB7,
        0x148 => match data[0xDE] {
            version::BD | version::SP => EntityFormat::PB8,
            _ => EntityFormat::PK8,
        },
        _ => return None,
    };
    log::debug!("Detected {} from a {:#X} byte record", format, data.len());
    Some(format)
}
