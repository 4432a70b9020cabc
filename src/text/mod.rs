//! String codecs for the in-record name fields.

mod gameboy;
mod gen3;
mod gen4;

use crate::entity::Endian;
use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Character encoding of a fixed-size name field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCodec {
    /// Game Boy charset, 0x50 terminated. Japanese records use the kana table.
    GameBoy,
    /// Gen 3 charset, 0xFF terminated; a full field carries no terminator.
    /// Japanese records use the kana table.
    Gen3,
    /// Gen 4 16-bit charset, 0xFFFF terminated.
    Gen4,
    /// UTF-16 code units with a per-generation terminator.
    Utf16 { terminator: u16 },
}

impl TextCodec {
    /// Characters a field of `bytes` length can hold.
    pub const fn capacity(self, bytes: usize) -> usize {
        match self {
            TextCodec::GameBoy => bytes.saturating_sub(1),
            TextCodec::Gen3 => bytes,
            TextCodec::Gen4 | TextCodec::Utf16 { .. } => (bytes / 2).saturating_sub(1),
        }
    }
}

pub fn decode(codec: TextCodec, endian: Endian, japanese: bool, field: &[u8]) -> String {
    match codec {
        TextCodec::GameBoy => field
            .iter()
            .take_while(|&&b| b != gameboy::TERMINATOR)
            .filter_map(|&b| gameboy::decode_char(b, japanese))
            .collect(),
        TextCodec::Gen3 => field
            .iter()
            .take_while(|&&b| b != gen3::TERMINATOR)
            .filter_map(|&b| gen3::decode_char(b, japanese))
            .collect(),
        TextCodec::Gen4 => units(field, endian)
            .take_while(|&u| u != gen4::TERMINATOR)
            .filter_map(gen4::decode_char)
            .collect(),
        TextCodec::Utf16 { terminator } => {
            let raw: Vec<u16> = units(field, endian).take_while(|&u| u != terminator).collect();
            char::decode_utf16(raw).filter_map(Result::ok).collect()
        }
    }
}

/// Writes `text` into `field`, truncating to `max_chars` and to what the
/// field can physically hold. The remainder is padded per codec.
pub fn encode(
    codec: TextCodec,
    endian: Endian,
    japanese: bool,
    text: &str,
    field: &mut [u8],
    max_chars: usize,
) {
    let limit = max_chars.min(codec.capacity(field.len()));
    match codec {
        TextCodec::GameBoy => {
            field.fill(gameboy::TERMINATOR);
            let encoded = text.chars().filter_map(|c| gameboy::encode_char(c, japanese));
            for (slot, byte) in field.iter_mut().zip(encoded.take(limit)) {
                *slot = byte;
            }
        }
        TextCodec::Gen3 => {
            field.fill(gen3::TERMINATOR);
            let encoded = text.chars().filter_map(|c| gen3::encode_char(c, japanese));
            for (slot, byte) in field.iter_mut().zip(encoded.take(limit)) {
                *slot = byte;
            }
        }
        TextCodec::Gen4 => {
            let encoded: Vec<u16> = text.chars().filter_map(gen4::encode_char).take(limit).collect();
            write_units(field, endian, &encoded, gen4::TERMINATOR);
        }
        TextCodec::Utf16 { terminator } => {
            let encoded: Vec<u16> = text
                .chars()
                .take(limit)
                .flat_map(|c| {
                    let mut buf = [0u16; 2];
                    c.encode_utf16(&mut buf).to_vec()
                })
                .collect();
            write_units(field, endian, &encoded, terminator);
        }
    }
}

/// Truncates a decoded name to `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn units(field: &[u8], endian: Endian) -> impl Iterator<Item = u16> + '_ {
    field.chunks_exact(2).map(move |pair| match endian {
        Endian::Little => LittleEndian::read_u16(pair),
        Endian::Big => BigEndian::read_u16(pair),
    })
}

fn write_units(field: &mut [u8], endian: Endian, encoded: &[u16], terminator: u16) {
    field.fill(0);
    let slots = field.len() / 2;
    let terminated = encoded.iter().copied().chain(std::iter::once(terminator));
    for (i, unit) in terminated.take(slots).enumerate() {
        let pair = &mut field[i * 2..i * 2 + 2];
        match endian {
            Endian::Little => LittleEndian::write_u16(pair, unit),
            Endian::Big => BigEndian::write_u16(pair, unit),
        }
    }
}
