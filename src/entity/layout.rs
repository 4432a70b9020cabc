//! Field registry describing where each semantic field lives in a record.
//!
//! Every format is a single [`Layout`] value. Variant formats are built from
//! their parent layout with struct update syntax, so a layout that only
//! differs in endianness or in one field carries just that difference.

use crate::text::TextCodec;
use byteorder::{BigEndian, ByteOrder, LittleEndian};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    U8,
    U16,
    U24,
    U32,
}

impl Width {
    pub const fn max_value(self) -> u32 {
        match self {
            Width::U8 => 0xFF,
            Width::U16 => 0xFFFF,
            Width::U24 => 0xFF_FFFF,
            Width::U32 => 0xFFFF_FFFF,
        }
    }
}

/// A value stored at `offset`, read with `width` and endianness, then
/// shifted right by `shift` and masked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    pub offset: usize,
    pub width: Width,
    pub shift: u8,
    pub mask: u32,
}

impl BitField {
    pub const fn byte(offset: usize) -> Self {
        Self::bits(offset, Width::U8, 0, 0xFF)
    }

    pub const fn word(offset: usize) -> Self {
        Self::bits(offset, Width::U16, 0, 0xFFFF)
    }

    pub const fn tribyte(offset: usize) -> Self {
        Self::bits(offset, Width::U24, 0, 0xFF_FFFF)
    }

    pub const fn dword(offset: usize) -> Self {
        Self::bits(offset, Width::U32, 0, 0xFFFF_FFFF)
    }

    pub const fn bits(offset: usize, width: Width, shift: u8, mask: u32) -> Self {
        Self {
            offset,
            width,
            shift,
            mask,
        }
    }

    /// Largest value the field can hold.
    pub const fn max_value(&self) -> u32 {
        self.mask
    }

    pub fn read(&self, data: &[u8], endian: Endian) -> u32 {
        (load(data, self.offset, self.width, endian) >> self.shift) & self.mask
    }

    /// Writes the low bits of `value`, leaving neighbouring bits untouched.
    pub fn write(&self, data: &mut [u8], endian: Endian, value: u32) {
        let current = load(data, self.offset, self.width, endian);
        let cleared = current & !(self.mask << self.shift);
        let merged = cleared | ((value & self.mask) << self.shift);
        store(data, self.offset, self.width, endian, merged);
    }

    /// Writes `value`, saturating at the field's capacity.
    pub fn write_saturating(&self, data: &mut [u8], endian: Endian, value: u32) {
        self.write(data, endian, value.min(self.mask));
    }

    /// Writes `value`, or 0 when it does not fit.
    pub fn write_or_clear(&self, data: &mut [u8], endian: Endian, value: u32) {
        self.write(data, endian, if value > self.mask { 0 } else { value });
    }
}

pub fn load(data: &[u8], offset: usize, width: Width, endian: Endian) -> u32 {
    let bytes = &data[offset..];
    match (width, endian) {
        (Width::U8, _) => bytes[0] as u32,
        (Width::U16, Endian::Little) => LittleEndian::read_u16(bytes) as u32,
        (Width::U16, Endian::Big) => BigEndian::read_u16(bytes) as u32,
        (Width::U24, Endian::Little) => LittleEndian::read_u24(bytes),
        (Width::U24, Endian::Big) => BigEndian::read_u24(bytes),
        (Width::U32, Endian::Little) => LittleEndian::read_u32(bytes),
        (Width::U32, Endian::Big) => BigEndian::read_u32(bytes),
    }
}

pub fn store(data: &mut [u8], offset: usize, width: Width, endian: Endian, value: u32) {
    let bytes = &mut data[offset..];
    match (width, endian) {
        (Width::U8, _) => bytes[0] = value as u8,
        (Width::U16, Endian::Little) => LittleEndian::write_u16(bytes, value as u16),
        (Width::U16, Endian::Big) => BigEndian::write_u16(bytes, value as u16),
        (Width::U24, Endian::Little) => LittleEndian::write_u24(bytes, value & 0xFF_FFFF),
        (Width::U24, Endian::Big) => BigEndian::write_u24(bytes, value & 0xFF_FFFF),
        (Width::U32, Endian::Little) => LittleEndian::write_u32(bytes, value),
        (Width::U32, Endian::Big) => BigEndian::write_u32(bytes, value),
    }
}

/// How the stored species index maps to the national dex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeciesCodec {
    National,
    Gen1Internal,
    Gen3Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesField {
    pub field: BitField,
    pub codec: SpeciesCodec,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    None,
    /// Unown letter derived from the Game Boy DVs.
    UnownDv,
    /// Unown letter derived from the PID.
    UnownPid,
    Stored(BitField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShinyRule {
    /// Game Boy DV pattern.
    Dv,
    /// PID/ID xor below the threshold.
    Xor(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSlots {
    pub offset: usize,
    pub width: Width,
    pub stride: usize,
}

impl MoveSlots {
    pub const fn slot(&self, index: usize) -> BitField {
        let offset = self.offset + index * self.stride;
        match self.width {
            Width::U8 => BitField::byte(offset),
            _ => BitField::word(offset),
        }
    }
}

/// Effort value encoding. Stat indexes are HP, Atk, Def, Spe, SpA, SpD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvField {
    /// Five big-endian stat experience words; SpA and SpD share Special.
    StatExp(usize),
    /// One byte per stat, in stat-index order.
    Bytes(usize),
    /// One word per stat, ordered HP, Atk, Def, SpA, SpD, Spe.
    Words(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IvField {
    /// Game Boy DV word: Atk, Def, Spe, Special nibbles. HP is derived.
    Dv16(usize),
    /// Six 5-bit values in stat-index order.
    Packed32(usize),
    /// One word per stat, ordered HP, Atk, Def, SpA, SpD, Spe.
    Words(usize),
}

/// Word slot of each stat index for the GameCube stat order.
pub const WORD_STAT_SLOT: [usize; 6] = [0, 1, 2, 5, 3, 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EggField {
    None,
    /// Game Boy party list: the species byte of the list reads 0xFD.
    ListMarker,
    Flag(BitField),
}

pub const GB_EGG_MARKER: u8 = 0xFD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextField {
    pub offset: usize,
    pub bytes: usize,
    pub codec: TextCodec,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameFields {
    /// Party-list record: OT name then nickname after `data_end`, each
    /// 11 bytes (international) or 6 bytes (Japanese).
    GameBoyList { data_end: usize },
    Fixed { ot: TextField, nickname: TextField },
}

/// Translation between the stored code and the shared numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeTable {
    Native,
    GameCubeLanguage,
    GameCubeVersion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodedField {
    pub field: BitField,
    pub codes: CodeTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerFields {
    pub name: TextField,
    pub gender: BitField,
    pub current: BitField,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionFields {
    pub country: BitField,
    pub region: BitField,
    pub console_region: BitField,
}

/// First entry of the geolocation memory list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeoFields {
    pub country: BitField,
    pub region: BitField,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub size: usize,
    /// Length of the Japanese variant of a Game Boy record.
    pub size_japanese: Option<usize>,
    pub endian: Endian,
    /// Game Boy party-list header: count, species (or egg marker), terminator.
    pub list_header: bool,
    pub species: SpeciesField,
    pub form: FormField,
    pub gender: Option<BitField>,
    pub shiny: ShinyRule,
    pub held_item: Option<BitField>,
    pub moves: MoveSlots,
    pub evs: EvField,
    pub ivs: IvField,
    pub egg: EggField,
    pub nicknamed: Option<BitField>,
    pub names: NameFields,
    pub language: Option<CodedField>,
    pub version: Option<CodedField>,
    pub pid: Option<BitField>,
    pub encryption_constant: Option<BitField>,
    pub tid: BitField,
    pub sid: Option<BitField>,
    pub exp: BitField,
    pub friendship: Option<BitField>,
    pub level: Option<BitField>,
    pub level_mirror: Option<BitField>,
    pub met_level: Option<BitField>,
    pub met_location: Option<BitField>,
    pub egg_location: Option<BitField>,
    pub ball: Option<BitField>,
    /// Second ball slot only HeartGold/SoulSilver writes.
    pub alt_ball: Option<BitField>,
    pub ot_gender: Option<BitField>,
    pub nature: Option<BitField>,
    pub ability: Option<BitField>,
    pub ability_number: Option<BitField>,
    pub hidden_ability: Option<BitField>,
    pub catch_rate: Option<BitField>,
    pub handler: Option<HandlerFields>,
    pub region: Option<RegionFields>,
    pub geo1: Option<GeoFields>,
}

impl Layout {
    /// Sizes a buffer of this layout may have.
    pub fn accepts_size(&self, len: usize) -> bool {
        len == self.size || self.size_japanese == Some(len)
    }
}
