//! Stored creature records.
//!
//! An [`Entity`] is a fixed-length buffer tagged with its [`EntityFormat`].
//! Accessors decode through the format's [`Layout`] and setters write back
//! into the buffer immediately. Fields a format does not store read as 0
//! and ignore writes.

pub mod codes;
pub mod detect;
mod formats;
pub mod layout;

pub use formats::layout_of;
pub use layout::{BitField, Endian, Layout, Width};

use crate::errors::{EntityError, EntityResult};
use crate::species::{self, UNOWN};
use crate::text::{self, TextCodec};
use layout::{
    EggField, EvField, FormField, IvField, NameFields, ShinyRule, SpeciesCodec, TextField,
    GB_EGG_MARKER, WORD_STAT_SLOT,
};
use schema::{EntityFormat, GameLimits, LanguageId};

/// Number of move slots in every format.
pub const MOVE_SLOTS: usize = 4;
/// Stat indexes: HP, Atk, Def, Spe, SpA, SpD.
pub const STAT_COUNT: usize = 6;

const GB_NAME_LENGTH: usize = 11;
const GB_NAME_LENGTH_JAPANESE: usize = 6;
const GB_LIST_TERMINATOR: u8 = 0xFF;
/// Empty location marker of the BDSP layouts.
pub const LOCATION_NONE_8B: u16 = 0xFFFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameKind {
    Ot,
    Nickname,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    format: EntityFormat,
    data: Vec<u8>,
}

impl Entity {
    /// Wraps a stored record. The buffer must have the exact size of the format.
    pub fn from_bytes(format: EntityFormat, data: Vec<u8>) -> EntityResult<Self> {
        let layout = layout_of(format);
        if !layout.accepts_size(data.len()) {
            return Err(EntityError::InvalidLength {
                format,
                expected: layout.size,
                actual: data.len(),
            });
        }
        Ok(Self { format, data })
    }

    /// An empty international record.
    pub fn blank(format: EntityFormat) -> Self {
        Self::blank_with_region(format, false)
    }

    /// An empty record; `japanese` selects the short Game Boy layout.
    pub fn blank_with_region(format: EntityFormat, japanese: bool) -> Self {
        let layout = layout_of(format);
        let size = match layout.size_japanese {
            Some(size) if japanese => size,
            _ => layout.size,
        };
        let mut entity = Self {
            format,
            data: vec![0; size],
        };
        if layout.list_header {
            entity.data[0] = 1;
            entity.data[2] = GB_LIST_TERMINATOR;
        }
        entity.set_ot_name("");
        entity.set_nickname("");
        if matches!(format, EntityFormat::PB8 | EntityFormat::PB8LUMI) {
            entity.set_egg_location(LOCATION_NONE_8B);
            entity.set_met_location(LOCATION_NONE_8B);
        }
        entity
    }

    /// Reinterprets the same bytes as another format of identical size.
    pub fn clone_as(&self, format: EntityFormat) -> EntityResult<Self> {
        Self::from_bytes(format, self.data.clone())
    }

    pub fn format(&self) -> EntityFormat {
        self.format
    }

    pub fn layout(&self) -> &'static Layout {
        layout_of(self.format)
    }

    pub fn limits(&self) -> &'static GameLimits {
        crate::limits::limits(self.format)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Whether a Game Boy record uses the Japanese layout.
    pub fn is_japanese(&self) -> bool {
        self.layout().size_japanese == Some(self.data.len())
    }

    /// Charset region of a Game Boy record. `None` for region-neutral formats.
    pub fn gameboy_region(&self) -> Option<bool> {
        self.layout()
            .size_japanese
            .map(|_| self.is_japanese())
    }

    fn read(&self, field: BitField) -> u32 {
        field.read(&self.data, self.layout().endian)
    }

    fn read_opt(&self, field: Option<BitField>) -> u32 {
        field.map_or(0, |f| self.read(f))
    }

    fn write(&mut self, field: BitField, value: u32) {
        let endian = self.layout().endian;
        field.write(&mut self.data, endian, value);
    }

    fn write_opt(&mut self, field: Option<BitField>, value: u32) {
        if let Some(field) = field {
            self.write(field, value);
        }
    }

    fn write_opt_or_clear(&mut self, field: Option<BitField>, value: u32) {
        if let Some(field) = field {
            let endian = self.layout().endian;
            field.write_or_clear(&mut self.data, endian, value);
        }
    }

    fn write_opt_saturating(&mut self, field: Option<BitField>, value: u32) {
        if let Some(field) = field {
            let endian = self.layout().endian;
            field.write_saturating(&mut self.data, endian, value);
        }
    }

    // --- Identity ---

    /// National dex number.
    pub fn species(&self) -> u16 {
        let species = self.layout().species;
        let stored = self.read(species.field);
        match species.codec {
            SpeciesCodec::National => stored as u16,
            SpeciesCodec::Gen1Internal => species::gen1_to_national(stored as u8),
            SpeciesCodec::Gen3Internal => species::gen3_to_national(stored as u16),
        }
    }

    /// Species the format cannot index are stored as 0.
    pub fn set_species(&mut self, value: u16) {
        let layout = self.layout();
        let stored = match layout.species.codec {
            SpeciesCodec::National => value as u32,
            SpeciesCodec::Gen1Internal => species::national_to_gen1(value) as u32,
            SpeciesCodec::Gen3Internal => species::national_to_gen3(value) as u32,
        };
        let endian = layout.endian;
        layout.species.field.write_saturating(&mut self.data, endian, stored);
        if layout.list_header && !self.is_egg() {
            self.data[1] = self.read(layout.species.field) as u8;
        }
    }

    pub fn form(&self) -> u8 {
        match self.layout().form {
            FormField::None => 0,
            FormField::UnownDv if self.species() == UNOWN => {
                let [_, atk, def, spe, spc, _] = self.ivs();
                let letter = ((atk & 6) << 5) | ((def & 6) << 3) | ((spe & 6) << 1) | ((spc & 6) >> 1);
                letter / 10
            }
            FormField::UnownPid if self.species() == UNOWN => unown_form_from_pid(self.pid()),
            FormField::UnownDv | FormField::UnownPid => 0,
            FormField::Stored(field) => self.read(field) as u8,
        }
    }

    /// Derived forms ignore writes.
    pub fn set_form(&mut self, value: u8) {
        if let FormField::Stored(field) = self.layout().form {
            self.write(field, value as u32);
        }
    }

    /// Stored gender (0 male, 1 female, 2 genderless). Formats that derive
    /// gender from species data return `None`.
    pub fn gender(&self) -> Option<u8> {
        self.layout().gender.map(|f| self.read(f) as u8)
    }

    pub fn set_gender(&mut self, value: u8) {
        self.write_opt(self.layout().gender, value as u32);
    }

    pub fn is_shiny(&self) -> bool {
        match self.layout().shiny {
            ShinyRule::Dv => {
                let [_, atk, def, spe, spc, _] = self.ivs();
                def == 10 && spe == 10 && spc == 10 && (atk & 2) == 2
            }
            ShinyRule::Xor(threshold) => shiny_xor(self.pid(), self.tid(), self.sid()) < threshold,
        }
    }

    pub fn pid(&self) -> u32 {
        self.read_opt(self.layout().pid)
    }

    pub fn set_pid(&mut self, value: u32) {
        self.write_opt(self.layout().pid, value);
    }

    pub fn encryption_constant(&self) -> u32 {
        self.read_opt(self.layout().encryption_constant)
    }

    pub fn set_encryption_constant(&mut self, value: u32) {
        self.write_opt(self.layout().encryption_constant, value);
    }

    pub fn tid(&self) -> u16 {
        self.read(self.layout().tid) as u16
    }

    pub fn set_tid(&mut self, value: u16) {
        self.write(self.layout().tid, value as u32);
    }

    pub fn sid(&self) -> u16 {
        self.read_opt(self.layout().sid) as u16
    }

    pub fn set_sid(&mut self, value: u16) {
        self.write_opt(self.layout().sid, value as u32);
    }

    // --- Battle data ---

    /// Move id in `slot` (0..4).
    pub fn move_id(&self, slot: usize) -> u16 {
        assert!(slot < MOVE_SLOTS, "move slot {} out of range", slot);
        self.read(self.layout().moves.slot(slot)) as u16
    }

    pub fn set_move(&mut self, slot: usize, value: u16) {
        assert!(slot < MOVE_SLOTS, "move slot {} out of range", slot);
        let field = self.layout().moves.slot(slot);
        self.write_opt_or_clear(Some(field), value as u32);
    }

    pub fn moves(&self) -> [u16; MOVE_SLOTS] {
        std::array::from_fn(|slot| self.move_id(slot))
    }

    pub fn set_moves(&mut self, moves: [u16; MOVE_SLOTS]) {
        for (slot, id) in moves.into_iter().enumerate() {
            self.set_move(slot, id);
        }
    }

    pub fn held_item(&self) -> u16 {
        self.read_opt(self.layout().held_item) as u16
    }

    /// An item id the layout cannot store is written as no item.
    pub fn set_held_item(&mut self, value: u16) {
        self.write_opt_or_clear(self.layout().held_item, value as u32);
    }

    pub fn ev(&self, stat: usize) -> u16 {
        assert!(stat < STAT_COUNT, "stat index {} out of range", stat);
        self.read(ev_field(self.layout().evs, stat)) as u16
    }

    /// Saturates at the storage capacity of the EV encoding.
    pub fn set_ev(&mut self, stat: usize, value: u16) {
        assert!(stat < STAT_COUNT, "stat index {} out of range", stat);
        let field = ev_field(self.layout().evs, stat);
        self.write_opt_saturating(Some(field), value as u32);
    }

    pub fn evs(&self) -> [u16; STAT_COUNT] {
        std::array::from_fn(|stat| self.ev(stat))
    }

    pub fn set_evs(&mut self, evs: [u16; STAT_COUNT]) {
        for (stat, value) in evs.into_iter().enumerate() {
            self.set_ev(stat, value);
        }
    }

    pub fn iv(&self, stat: usize) -> u8 {
        assert!(stat < STAT_COUNT, "stat index {} out of range", stat);
        match self.layout().ivs {
            IvField::Dv16(offset) if stat == 0 => {
                let dv = self.read(BitField::word(offset));
                // HP takes the low bit of each other DV.
                (((dv >> 12) & 1) << 3 | ((dv >> 8) & 1) << 2 | ((dv >> 4) & 1) << 1 | (dv & 1)) as u8
            }
            ivs => self.read(iv_field(ivs, stat)) as u8,
        }
    }

    /// Saturates at the storage capacity. The Game Boy HP DV is derived and
    /// ignores writes.
    pub fn set_iv(&mut self, stat: usize, value: u8) {
        assert!(stat < STAT_COUNT, "stat index {} out of range", stat);
        let ivs = self.layout().ivs;
        if matches!(ivs, IvField::Dv16(_)) && stat == 0 {
            return;
        }
        self.write_opt_saturating(Some(iv_field(ivs, stat)), value as u32);
    }

    pub fn ivs(&self) -> [u8; STAT_COUNT] {
        std::array::from_fn(|stat| self.iv(stat))
    }

    pub fn set_ivs(&mut self, ivs: [u8; STAT_COUNT]) {
        for (stat, value) in ivs.into_iter().enumerate() {
            self.set_iv(stat, value);
        }
    }

    pub fn exp(&self) -> u32 {
        self.read(self.layout().exp)
    }

    pub fn set_exp(&mut self, value: u32) {
        self.write_opt_saturating(Some(self.layout().exp), value);
    }

    pub fn friendship(&self) -> u8 {
        self.read_opt(self.layout().friendship) as u8
    }

    pub fn set_friendship(&mut self, value: u8) {
        self.write_opt(self.layout().friendship, value as u32);
    }

    /// Stored level; only Game Boy records carry one.
    pub fn level(&self) -> u8 {
        self.read_opt(self.layout().level) as u8
    }

    pub fn set_level(&mut self, value: u8) {
        let layout = self.layout();
        self.write_opt(layout.level, value as u32);
        self.write_opt(layout.level_mirror, value as u32);
    }

    /// Nature id; formats without a nature byte derive it from the PID.
    pub fn nature(&self) -> Option<u8> {
        let layout = self.layout();
        match (layout.nature, layout.pid) {
            (Some(field), _) => Some(self.read(field) as u8),
            (None, Some(_)) => Some((self.pid() % 25) as u8),
            (None, None) => None,
        }
    }

    pub fn set_nature(&mut self, value: u8) {
        self.write_opt(self.layout().nature, value as u32);
    }

    pub fn ability(&self) -> u16 {
        self.read_opt(self.layout().ability) as u16
    }

    pub fn set_ability(&mut self, value: u16) {
        self.write_opt_saturating(self.layout().ability, value as u32);
    }

    pub fn ability_number(&self) -> u8 {
        self.read_opt(self.layout().ability_number) as u8
    }

    pub fn set_ability_number(&mut self, value: u8) {
        self.write_opt(self.layout().ability_number, value as u32);
    }

    pub fn hidden_ability(&self) -> bool {
        self.read_opt(self.layout().hidden_ability) != 0
    }

    pub fn set_hidden_ability(&mut self, value: bool) {
        self.write_opt(self.layout().hidden_ability, value as u32);
    }

    pub fn catch_rate(&self) -> u8 {
        self.read_opt(self.layout().catch_rate) as u8
    }

    pub fn set_catch_rate(&mut self, value: u8) {
        self.write_opt(self.layout().catch_rate, value as u32);
    }

    // --- Flags ---

    pub fn is_egg(&self) -> bool {
        match self.layout().egg {
            EggField::None => false,
            EggField::ListMarker => self.data[1] == GB_EGG_MARKER,
            EggField::Flag(field) => self.read(field) != 0,
        }
    }

    pub fn set_is_egg(&mut self, value: bool) {
        let layout = self.layout();
        match layout.egg {
            EggField::None => {}
            EggField::ListMarker => {
                self.data[1] = if value {
                    GB_EGG_MARKER
                } else {
                    self.read(layout.species.field) as u8
                };
            }
            EggField::Flag(field) => self.write(field, value as u32),
        }
    }

    /// Game Boy and Gen 3 records have no flag and read as not nicknamed.
    pub fn is_nicknamed(&self) -> bool {
        self.read_opt(self.layout().nicknamed) != 0
    }

    pub fn set_is_nicknamed(&mut self, value: bool) {
        self.write_opt(self.layout().nicknamed, value as u32);
    }

    // --- Names ---

    fn name_field(&self, kind: NameKind) -> TextField {
        match self.layout().names {
            NameFields::GameBoyList { data_end } => {
                let bytes = if self.is_japanese() {
                    GB_NAME_LENGTH_JAPANESE
                } else {
                    GB_NAME_LENGTH
                };
                let offset = match kind {
                    NameKind::Ot => data_end,
                    NameKind::Nickname => data_end + bytes,
                };
                TextField {
                    offset,
                    bytes,
                    codec: TextCodec::GameBoy,
                }
            }
            NameFields::Fixed { ot, nickname } => match kind {
                NameKind::Ot => ot,
                NameKind::Nickname => nickname,
            },
        }
    }

    /// Game Boy records pick a charset by size, Gen 3 records by language.
    fn japanese_text(&self, codec: TextCodec) -> bool {
        match codec {
            TextCodec::Gen3 => self.language() == LanguageId::Japanese.raw(),
            _ => self.is_japanese(),
        }
    }

    fn read_name(&self, field: TextField) -> String {
        let slice = &self.data[field.offset..field.offset + field.bytes];
        text::decode(field.codec, self.layout().endian, self.japanese_text(field.codec), slice)
    }

    fn write_name(&mut self, field: TextField, value: &str) {
        let endian = self.layout().endian;
        let japanese = self.japanese_text(field.codec);
        let slice = &mut self.data[field.offset..field.offset + field.bytes];
        text::encode(field.codec, endian, japanese, value, slice, usize::MAX);
    }

    pub fn ot_name(&self) -> String {
        self.read_name(self.name_field(NameKind::Ot))
    }

    pub fn set_ot_name(&mut self, value: &str) {
        self.write_name(self.name_field(NameKind::Ot), value);
    }

    pub fn nickname(&self) -> String {
        self.read_name(self.name_field(NameKind::Nickname))
    }

    pub fn set_nickname(&mut self, value: &str) {
        self.write_name(self.name_field(NameKind::Nickname), value);
    }

    /// Character capacity of the nickname field.
    pub fn nickname_capacity(&self) -> usize {
        let field = self.name_field(NameKind::Nickname);
        field.codec.capacity(field.bytes)
    }

    /// Codec of the name fields.
    pub fn name_codec(&self) -> TextCodec {
        self.name_field(NameKind::Nickname).codec
    }

    /// Raw encoded OT name, for copies between Game Boy charsets.
    pub fn ot_name_bytes(&self) -> &[u8] {
        let field = self.name_field(NameKind::Ot);
        &self.data[field.offset..field.offset + field.bytes]
    }

    pub fn nickname_bytes(&self) -> &[u8] {
        let field = self.name_field(NameKind::Nickname);
        &self.data[field.offset..field.offset + field.bytes]
    }

    /// Copies raw name bytes; the last byte of the field stays a terminator.
    pub fn set_name_bytes(&mut self, ot: &[u8], nickname: &[u8]) {
        for (kind, source) in [(NameKind::Ot, ot), (NameKind::Nickname, nickname)] {
            let field = self.name_field(kind);
            let slice = &mut self.data[field.offset..field.offset + field.bytes];
            slice.fill(0x50);
            let count = source.len().min(field.bytes - 1);
            slice[..count].copy_from_slice(&source[..count]);
        }
    }

    pub fn language(&self) -> u8 {
        self.layout()
            .language
            .map_or(0, |c| codes::to_shared(c.codes, self.read(c.field) as u8))
    }

    pub fn set_language(&mut self, value: u8) {
        if let Some(coded) = self.layout().language {
            self.write(coded.field, codes::to_stored(coded.codes, value) as u32);
        }
    }

    // --- Origin ---

    pub fn version(&self) -> u8 {
        self.layout()
            .version
            .map_or(0, |c| codes::to_shared(c.codes, self.read(c.field) as u8))
    }

    pub fn set_version(&mut self, value: u8) {
        if let Some(coded) = self.layout().version {
            self.write(coded.field, codes::to_stored(coded.codes, value) as u32);
        }
    }

    pub fn met_level(&self) -> u8 {
        self.read_opt(self.layout().met_level) as u8
    }

    pub fn set_met_level(&mut self, value: u8) {
        self.write_opt_saturating(self.layout().met_level, value as u32);
    }

    pub fn met_location(&self) -> u16 {
        self.read_opt(self.layout().met_location) as u16
    }

    pub fn set_met_location(&mut self, value: u16) {
        self.write_opt(self.layout().met_location, value as u32);
    }

    pub fn egg_location(&self) -> u16 {
        self.read_opt(self.layout().egg_location) as u16
    }

    pub fn set_egg_location(&mut self, value: u16) {
        self.write_opt(self.layout().egg_location, value as u32);
    }

    pub fn ball(&self) -> u8 {
        self.read_opt(self.layout().ball) as u8
    }

    pub fn set_ball(&mut self, value: u8) {
        self.write_opt_saturating(self.layout().ball, value as u32);
    }

    /// HeartGold/SoulSilver ball slot.
    pub fn alt_ball(&self) -> u8 {
        self.read_opt(self.layout().alt_ball) as u8
    }

    pub fn set_alt_ball(&mut self, value: u8) {
        self.write_opt(self.layout().alt_ball, value as u32);
    }

    pub fn ot_gender(&self) -> u8 {
        self.read_opt(self.layout().ot_gender) as u8
    }

    pub fn set_ot_gender(&mut self, value: u8) {
        self.write_opt(self.layout().ot_gender, value as u32);
    }

    // --- Handler and geolocation ---

    pub fn has_handler(&self) -> bool {
        self.layout().handler.is_some()
    }

    pub fn handler_name(&self) -> String {
        self.layout()
            .handler
            .map(|h| self.read_name(h.name))
            .unwrap_or_default()
    }

    pub fn set_handler(&mut self, name: &str, gender: u8) {
        if let Some(handler) = self.layout().handler {
            self.write_name(handler.name, name);
            self.write(handler.gender, gender as u32);
        }
    }

    pub fn handler_gender(&self) -> u8 {
        self.read_opt(self.layout().handler.map(|h| h.gender)) as u8
    }

    pub fn current_handler(&self) -> u8 {
        self.read_opt(self.layout().handler.map(|h| h.current)) as u8
    }

    pub fn set_current_handler(&mut self, value: u8) {
        self.write_opt(self.layout().handler.map(|h| h.current), value as u32);
    }

    pub fn has_region(&self) -> bool {
        self.layout().region.is_some()
    }

    pub fn console_region(&self) -> u8 {
        self.read_opt(self.layout().region.map(|r| r.console_region)) as u8
    }

    pub fn country(&self) -> u8 {
        self.read_opt(self.layout().region.map(|r| r.country)) as u8
    }

    pub fn region(&self) -> u8 {
        self.read_opt(self.layout().region.map(|r| r.region)) as u8
    }

    pub fn set_region_origin(&mut self, console_region: u8, country: u8, region: u8) {
        if let Some(fields) = self.layout().region {
            self.write(fields.console_region, console_region as u32);
            self.write(fields.country, country as u32);
            self.write(fields.region, region as u32);
        }
    }

    pub fn geo1_country(&self) -> u8 {
        self.read_opt(self.layout().geo1.map(|g| g.country)) as u8
    }

    pub fn geo1_region(&self) -> u8 {
        self.read_opt(self.layout().geo1.map(|g| g.region)) as u8
    }

    pub fn set_geo1(&mut self, country: u8, region: u8) {
        if let Some(geo) = self.layout().geo1 {
            self.write(geo.country, country as u32);
            self.write(geo.region, region as u32);
        }
    }
}

fn ev_field(evs: EvField, stat: usize) -> BitField {
    match evs {
        EvField::StatExp(offset) => BitField::word(offset + 2 * stat.min(4)),
        EvField::Bytes(offset) => BitField::byte(offset + stat),
        EvField::Words(offset) => BitField::word(offset + 2 * WORD_STAT_SLOT[stat]),
    }
}

/// Field of a stored IV. The Game Boy HP DV has no field of its own.
fn iv_field(ivs: IvField, stat: usize) -> BitField {
    match ivs {
        // Atk, Def, Spe, Special from the high nibble down.
        IvField::Dv16(offset) => {
            let shift = 12 - 4 * (stat.clamp(1, 4) - 1) as u8;
            BitField::bits(offset, Width::U16, shift, 0xF)
        }
        IvField::Packed32(offset) => BitField::bits(offset, Width::U32, 5 * stat as u8, 0x1F),
        IvField::Words(offset) => BitField::word(offset + 2 * WORD_STAT_SLOT[stat]),
    }
}

pub fn shiny_xor(pid: u32, tid: u16, sid: u16) -> u32 {
    (tid as u32) ^ (sid as u32) ^ (pid >> 16) ^ (pid & 0xFFFF)
}

pub fn unown_form_from_pid(pid: u32) -> u8 {
    let letter = ((pid >> 24) & 3) << 6 | ((pid >> 16) & 3) << 4 | ((pid >> 8) & 3) << 2 | (pid & 3);
    (letter % 28) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::IntoEnumIterator;

    #[test]
    fn test_blank_records_have_layout_size() {
        for format in EntityFormat::iter() {
            let entity = Entity::blank(format);
            assert_eq!(entity.data().len(), layout_of(format).size, "{}", format);
            assert_eq!(entity.species(), 0);
            assert_eq!(entity.nickname(), "");
        }
    }

    #[test]
    fn test_bdsp_blank_uses_empty_location_marker() {
        for format in [EntityFormat::PB8, EntityFormat::PB8LUMI] {
            let entity = Entity::blank(format);
            assert_eq!(entity.met_location(), LOCATION_NONE_8B);
            assert_eq!(entity.egg_location(), LOCATION_NONE_8B);
        }
        assert_eq!(Entity::blank(EntityFormat::PK8).met_location(), 0);
    }

    #[test]
    fn test_from_bytes_rejects_wrong_length() {
        let result = Entity::from_bytes(EntityFormat::PK4, vec![0; 0x87]);
        assert_eq!(
            result,
            Err(EntityError::InvalidLength {
                format: EntityFormat::PK4,
                expected: 0x88,
                actual: 0x87,
            })
        );
        assert!(Entity::from_bytes(EntityFormat::PK1, vec![0; 0x3B]).is_ok());
    }

    #[rstest]
    #[case("Game Boy list", EntityFormat::PK1)]
    #[case("Gen 2 list", EntityFormat::PK2)]
    #[case("Stadium 2", EntityFormat::SK2)]
    #[case("Gen 3 internal index", EntityFormat::PK3)]
    #[case("Colosseum big endian", EntityFormat::CK3)]
    #[case("XD big endian", EntityFormat::XK3)]
    #[case("Gen 4", EntityFormat::PK4)]
    #[case("Battle Revolution", EntityFormat::BK4)]
    #[case("Gen 5", EntityFormat::PK5)]
    #[case("Gen 6", EntityFormat::PK6)]
    #[case("Let's Go", EntityFormat::PB7)]
    #[case("Gen 8", EntityFormat::PK8)]
    #[case("BDSP", EntityFormat::PB8)]
    fn test_core_fields_write_through(#[case] desc: &str, #[case] format: EntityFormat) {
        let mut entity = Entity::blank(format);
        entity.set_species(25);
        entity.set_moves([85, 86, 0, 98]);
        entity.set_nickname("Sparky");
        entity.set_ot_name("ASH");
        entity.set_tid(12345);

        let reloaded = Entity::from_bytes(format, entity.clone().into_bytes()).unwrap();
        assert_eq!(reloaded.species(), 25, "{}", desc);
        assert_eq!(reloaded.moves(), [85, 86, 0, 98], "{}", desc);
        assert_eq!(reloaded.nickname(), "Sparky", "{}", desc);
        assert_eq!(reloaded.ot_name(), "ASH", "{}", desc);
        assert_eq!(reloaded.tid(), 12345, "{}", desc);
    }

    #[test]
    fn test_gameboy_list_header_tracks_species() {
        let mut pk1 = Entity::blank(EntityFormat::PK1);
        pk1.set_species(25);
        assert_eq!(pk1.data()[0], 1);
        assert_eq!(pk1.data()[1], 0x54);
        assert_eq!(pk1.data()[2], 0xFF);

        let mut pk2 = Entity::blank(EntityFormat::PK2);
        pk2.set_species(175);
        pk2.set_is_egg(true);
        assert_eq!(pk2.data()[1], GB_EGG_MARKER);
        assert!(pk2.is_egg());
        pk2.set_is_egg(false);
        assert_eq!(pk2.data()[1], 175);
    }

    #[test]
    fn test_dv_word_and_derived_hp() {
        let mut pk2 = Entity::blank(EntityFormat::PK2);
        pk2.set_ivs([0, 15, 10, 10, 10, 10]);
        assert_eq!(pk2.ivs(), [8, 15, 10, 10, 10, 10]);
        assert!(pk2.is_shiny());

        pk2.set_iv(1, 31);
        assert_eq!(pk2.iv(1), 15);
    }

    #[test]
    fn test_packed_ivs_keep_flags() {
        let mut pk4 = Entity::blank(EntityFormat::PK4);
        pk4.set_is_egg(true);
        pk4.set_is_nicknamed(true);
        pk4.set_ivs([31, 30, 29, 28, 27, 26]);
        assert!(pk4.is_egg());
        assert!(pk4.is_nicknamed());
        assert_eq!(pk4.ivs(), [31, 30, 29, 28, 27, 26]);
    }

    #[test]
    fn test_gamecube_stat_order() {
        let mut ck3 = Entity::blank(EntityFormat::CK3);
        ck3.set_evs([1, 2, 3, 4, 5, 6]);
        // Stored order is HP, Atk, Def, SpA, SpD, Spe.
        assert_eq!(&ck3.data()[0x98..0xA4], &[0, 1, 0, 2, 0, 3, 0, 5, 0, 6, 0, 4]);
        assert_eq!(ck3.evs(), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_setters_saturate_at_storage_width() {
        let mut pk2 = Entity::blank(EntityFormat::PK2);
        pk2.set_move(0, 900);
        pk2.set_move(1, 251);
        pk2.set_held_item(1000);
        assert_eq!(pk2.moves(), [0, 251, 0, 0]);
        assert_eq!(pk2.held_item(), 0);

        pk2.set_held_item(255);
        assert_eq!(pk2.held_item(), 255);

        let mut pk6 = Entity::blank(EntityFormat::PK6);
        pk6.set_ev(0, 300);
        assert_eq!(pk6.ev(0), 255);
    }

    #[test]
    fn test_shiny_thresholds() {
        let mut pk5 = Entity::blank(EntityFormat::PK5);
        pk5.set_tid(0);
        pk5.set_sid(0);
        pk5.set_pid(0x000A_0000);
        assert!(!pk5.is_shiny());

        let mut pk6 = Entity::blank(EntityFormat::PK6);
        pk6.set_pid(0x000A_0000);
        assert!(pk6.is_shiny());
    }

    #[test]
    fn test_gamecube_codes_are_translated() {
        let mut xk3 = Entity::blank(EntityFormat::XK3);
        xk3.set_language(5);
        xk3.set_version(codes::version::E);
        assert_eq!(xk3.data()[0x37], 3);
        assert_eq!(xk3.data()[0x34], 10);
        assert_eq!(xk3.language(), 5);
    }

    #[test]
    fn test_missing_fields_read_zero_and_ignore_writes() {
        let mut pk1 = Entity::blank(EntityFormat::PK1);
        pk1.set_held_item(5);
        pk1.set_language(2);
        pk1.set_pid(99);
        assert_eq!(pk1.held_item(), 0);
        assert_eq!(pk1.language(), 0);
        assert_eq!(pk1.pid(), 0);
        assert_eq!(pk1.nature(), None);
        assert_eq!(pk1.gender(), None);
    }

    #[test]
    #[should_panic(expected = "move slot 4 out of range")]
    fn test_move_slot_out_of_range_panics() {
        Entity::blank(EntityFormat::PK3).move_id(4);
    }

    #[test]
    fn test_unown_forms() {
        let mut pk3 = Entity::blank(EntityFormat::PK3);
        pk3.set_species(crate::species::UNOWN);
        pk3.set_pid(0x0000_0001);
        assert_eq!(pk3.form(), 1);
        assert_eq!(unown_form_from_pid(0x0303_0303), 255 % 28);
    }
}
