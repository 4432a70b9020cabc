//! Layout of every entity format.

use super::layout::{
    BitField, CodeTable, CodedField, EggField, Endian, EvField, FormField, GeoFields,
    HandlerFields, IvField, Layout, MoveSlots, NameFields, RegionFields, ShinyRule,
    SpeciesCodec, SpeciesField, TextField, Width,
};
use crate::text::TextCodec;
use schema::EntityFormat;

const fn native(field: BitField) -> Option<CodedField> {
    Some(CodedField {
        field,
        codes: CodeTable::Native,
    })
}

const fn text(offset: usize, bytes: usize, codec: TextCodec) -> TextField {
    TextField {
        offset,
        bytes,
        codec,
    }
}

const UTF16_GEN6: TextCodec = TextCodec::Utf16 { terminator: 0 };
const UTF16_GEN5: TextCodec = TextCodec::Utf16 { terminator: 0xFFFF };

// Game Boy party records are stored as a one-entry party list: count,
// species, terminator, then the party struct, OT name and nickname.
const PK1: Layout = Layout {
    size: 0x45,
    size_japanese: Some(0x3B),
    endian: Endian::Big,
    list_header: true,
    species: SpeciesField {
        field: BitField::byte(0x03),
        codec: SpeciesCodec::Gen1Internal,
    },
    form: FormField::None,
    gender: None,
    shiny: ShinyRule::Dv,
    held_item: None,
    moves: MoveSlots {
        offset: 0x0B,
        width: Width::U8,
        stride: 1,
    },
    evs: EvField::StatExp(0x14),
    ivs: IvField::Dv16(0x1E),
    egg: EggField::None,
    nicknamed: None,
    names: NameFields::GameBoyList { data_end: 0x2F },
    language: None,
    version: None,
    pid: None,
    encryption_constant: None,
    tid: BitField::word(0x0F),
    sid: None,
    exp: BitField::tribyte(0x11),
    friendship: None,
    level: Some(BitField::byte(0x24)),
    level_mirror: Some(BitField::byte(0x06)),
    met_level: None,
    met_location: None,
    egg_location: None,
    ball: None,
    alt_ball: None,
    ot_gender: None,
    nature: None,
    ability: None,
    ability_number: None,
    hidden_ability: None,
    catch_rate: Some(BitField::byte(0x0A)),
    handler: None,
    region: None,
    geo1: None,
};

const PK2: Layout = Layout {
    size: 0x49,
    size_japanese: Some(0x3F),
    species: SpeciesField {
        field: BitField::byte(0x03),
        codec: SpeciesCodec::National,
    },
    form: FormField::UnownDv,
    held_item: Some(BitField::byte(0x04)),
    moves: MoveSlots {
        offset: 0x05,
        width: Width::U8,
        stride: 1,
    },
    tid: BitField::word(0x09),
    exp: BitField::tribyte(0x0B),
    evs: EvField::StatExp(0x0E),
    ivs: IvField::Dv16(0x18),
    friendship: Some(BitField::byte(0x1E)),
    // Crystal caught data: level and time of day, then OT gender and location.
    met_level: Some(BitField::bits(0x20, Width::U16, 8, 0x3F)),
    ot_gender: Some(BitField::bits(0x20, Width::U16, 7, 1)),
    met_location: Some(BitField::bits(0x20, Width::U16, 0, 0x7F)),
    level: Some(BitField::byte(0x22)),
    level_mirror: None,
    egg: EggField::ListMarker,
    names: NameFields::GameBoyList { data_end: 0x33 },
    catch_rate: None,
    ..PK1
};

const SK2: Layout = Layout {
    size: 0x48,
    size_japanese: None,
    list_header: false,
    species: SpeciesField {
        field: BitField::byte(0x00),
        codec: SpeciesCodec::National,
    },
    held_item: Some(BitField::byte(0x01)),
    moves: MoveSlots {
        offset: 0x02,
        width: Width::U8,
        stride: 1,
    },
    tid: BitField::word(0x06),
    exp: BitField::bits(0x08, Width::U32, 0, 0xFF_FFFF),
    evs: EvField::StatExp(0x0C),
    ivs: IvField::Dv16(0x16),
    friendship: Some(BitField::byte(0x1C)),
    met_level: Some(BitField::bits(0x1E, Width::U16, 8, 0x3F)),
    ot_gender: Some(BitField::bits(0x1E, Width::U16, 7, 1)),
    met_location: Some(BitField::bits(0x1E, Width::U16, 0, 0x7F)),
    level: Some(BitField::byte(0x20)),
    egg: EggField::Flag(BitField::bits(0x21, Width::U8, 0, 1)),
    names: NameFields::Fixed {
        ot: text(0x24, 0x0B, TextCodec::GameBoy),
        nickname: text(0x30, 0x0B, TextCodec::GameBoy),
    },
    ..PK2
};

const PK3: Layout = Layout {
    size: 0x50,
    size_japanese: None,
    endian: Endian::Little,
    list_header: false,
    species: SpeciesField {
        field: BitField::word(0x20),
        codec: SpeciesCodec::Gen3Internal,
    },
    form: FormField::UnownPid,
    gender: None,
    shiny: ShinyRule::Xor(8),
    held_item: Some(BitField::word(0x22)),
    moves: MoveSlots {
        offset: 0x2C,
        width: Width::U16,
        stride: 2,
    },
    evs: EvField::Bytes(0x38),
    ivs: IvField::Packed32(0x48),
    egg: EggField::Flag(BitField::bits(0x48, Width::U32, 30, 1)),
    nicknamed: None,
    names: NameFields::Fixed {
        ot: text(0x14, 7, TextCodec::Gen3),
        nickname: text(0x08, 10, TextCodec::Gen3),
    },
    language: native(BitField::byte(0x12)),
    version: native(BitField::bits(0x46, Width::U16, 7, 0xF)),
    pid: Some(BitField::dword(0x00)),
    encryption_constant: None,
    tid: BitField::word(0x04),
    sid: Some(BitField::word(0x06)),
    exp: BitField::dword(0x24),
    friendship: Some(BitField::byte(0x29)),
    level: None,
    level_mirror: None,
    met_level: Some(BitField::bits(0x46, Width::U16, 0, 0x7F)),
    met_location: Some(BitField::byte(0x45)),
    egg_location: None,
    ball: Some(BitField::bits(0x46, Width::U16, 11, 0xF)),
    alt_ball: None,
    ot_gender: Some(BitField::bits(0x46, Width::U16, 15, 1)),
    nature: None,
    ability: None,
    ability_number: None,
    hidden_ability: None,
    catch_rate: None,
    handler: None,
    region: None,
    geo1: None,
};

const CK3: Layout = Layout {
    size: 0x138,
    endian: Endian::Big,
    species: SpeciesField {
        field: BitField::word(0x00),
        codec: SpeciesCodec::Gen3Internal,
    },
    pid: Some(BitField::dword(0x04)),
    version: Some(CodedField {
        field: BitField::byte(0x08),
        codes: CodeTable::GameCubeVersion,
    }),
    language: Some(CodedField {
        field: BitField::byte(0x0B),
        codes: CodeTable::GameCubeLanguage,
    }),
    met_location: Some(BitField::word(0x0C)),
    met_level: Some(BitField::byte(0x0E)),
    ball: Some(BitField::byte(0x0F)),
    ot_gender: Some(BitField::byte(0x10)),
    sid: Some(BitField::word(0x14)),
    tid: BitField::word(0x16),
    names: NameFields::Fixed {
        ot: text(0x18, 0x16, UTF16_GEN6),
        nickname: text(0x2E, 0x16, UTF16_GEN6),
    },
    exp: BitField::dword(0x5C),
    moves: MoveSlots {
        offset: 0x78,
        width: Width::U16,
        stride: 4,
    },
    held_item: Some(BitField::word(0x88)),
    evs: EvField::Words(0x98),
    ivs: IvField::Words(0xA4),
    friendship: Some(BitField::word(0xB0)),
    egg: EggField::Flag(BitField::bits(0xCB, Width::U8, 0, 1)),
    ..PK3
};

const XK3: Layout = Layout {
    size: 0xC4,
    held_item: Some(BitField::word(0x02)),
    friendship: Some(BitField::word(0x06)),
    met_location: Some(BitField::word(0x08)),
    egg: EggField::Flag(BitField::bits(0x1D, Width::U8, 7, 1)),
    sid: Some(BitField::word(0x24)),
    tid: BitField::word(0x26),
    pid: Some(BitField::dword(0x28)),
    version: Some(CodedField {
        field: BitField::byte(0x34),
        codes: CodeTable::GameCubeVersion,
    }),
    language: Some(CodedField {
        field: BitField::byte(0x37),
        codes: CodeTable::GameCubeLanguage,
    }),
    names: NameFields::Fixed {
        ot: text(0x38, 0x16, UTF16_GEN6),
        nickname: text(0x4E, 0x16, UTF16_GEN6),
    },
    exp: BitField::dword(0x7C),
    moves: MoveSlots {
        offset: 0x80,
        width: Width::U16,
        stride: 4,
    },
    evs: EvField::Words(0x9C),
    ivs: IvField::Words(0xA8),
    ..CK3
};

const PK4: Layout = Layout {
    size: 0x88,
    size_japanese: None,
    endian: Endian::Little,
    list_header: false,
    species: SpeciesField {
        field: BitField::word(0x08),
        codec: SpeciesCodec::National,
    },
    form: FormField::Stored(BitField::bits(0x40, Width::U8, 3, 0x1F)),
    gender: Some(BitField::bits(0x40, Width::U8, 1, 3)),
    shiny: ShinyRule::Xor(8),
    held_item: Some(BitField::word(0x0A)),
    moves: MoveSlots {
        offset: 0x28,
        width: Width::U16,
        stride: 2,
    },
    evs: EvField::Bytes(0x18),
    ivs: IvField::Packed32(0x38),
    egg: EggField::Flag(BitField::bits(0x38, Width::U32, 30, 1)),
    nicknamed: Some(BitField::bits(0x38, Width::U32, 31, 1)),
    names: NameFields::Fixed {
        ot: text(0x68, 0x10, TextCodec::Gen4),
        nickname: text(0x48, 0x16, TextCodec::Gen4),
    },
    language: native(BitField::byte(0x17)),
    version: native(BitField::byte(0x5F)),
    pid: Some(BitField::dword(0x00)),
    encryption_constant: None,
    tid: BitField::word(0x0C),
    sid: Some(BitField::word(0x0E)),
    exp: BitField::dword(0x10),
    friendship: Some(BitField::byte(0x14)),
    level: None,
    level_mirror: None,
    met_level: Some(BitField::bits(0x84, Width::U8, 0, 0x7F)),
    met_location: Some(BitField::word(0x80)),
    egg_location: Some(BitField::word(0x7E)),
    ball: Some(BitField::byte(0x83)),
    alt_ball: Some(BitField::byte(0x86)),
    ot_gender: Some(BitField::bits(0x84, Width::U8, 7, 1)),
    nature: None,
    ability: Some(BitField::byte(0x15)),
    ability_number: None,
    hidden_ability: None,
    catch_rate: None,
    handler: None,
    region: None,
    geo1: None,
};

const BK4: Layout = Layout {
    endian: Endian::Big,
    ..PK4
};

const PK5: Layout = Layout {
    names: NameFields::Fixed {
        ot: text(0x68, 0x10, UTF16_GEN5),
        nickname: text(0x48, 0x16, UTF16_GEN5),
    },
    nature: Some(BitField::byte(0x41)),
    hidden_ability: Some(BitField::bits(0x42, Width::U8, 0, 1)),
    alt_ball: None,
    ..PK4
};

const PK6: Layout = Layout {
    size: 0xE8,
    encryption_constant: Some(BitField::dword(0x00)),
    species: SpeciesField {
        field: BitField::word(0x08),
        codec: SpeciesCodec::National,
    },
    held_item: Some(BitField::word(0x0A)),
    tid: BitField::word(0x0C),
    sid: Some(BitField::word(0x0E)),
    exp: BitField::dword(0x10),
    ability: Some(BitField::byte(0x14)),
    ability_number: Some(BitField::byte(0x15)),
    pid: Some(BitField::dword(0x18)),
    nature: Some(BitField::byte(0x1C)),
    gender: Some(BitField::bits(0x1D, Width::U8, 1, 3)),
    form: FormField::Stored(BitField::bits(0x1D, Width::U8, 3, 0x1F)),
    evs: EvField::Bytes(0x1E),
    moves: MoveSlots {
        offset: 0x5A,
        width: Width::U16,
        stride: 2,
    },
    ivs: IvField::Packed32(0x74),
    egg: EggField::Flag(BitField::bits(0x74, Width::U32, 30, 1)),
    nicknamed: Some(BitField::bits(0x74, Width::U32, 31, 1)),
    names: NameFields::Fixed {
        ot: text(0xB0, 0x1A, UTF16_GEN6),
        nickname: text(0x40, 0x1A, UTF16_GEN6),
    },
    handler: Some(HandlerFields {
        name: text(0x78, 0x1A, UTF16_GEN6),
        gender: BitField::byte(0x92),
        current: BitField::byte(0x93),
    }),
    geo1: Some(GeoFields {
        region: BitField::byte(0x94),
        country: BitField::byte(0x95),
    }),
    friendship: Some(BitField::byte(0xCA)),
    egg_location: Some(BitField::word(0xD8)),
    met_location: Some(BitField::word(0xDA)),
    ball: Some(BitField::byte(0xDC)),
    alt_ball: None,
    met_level: Some(BitField::bits(0xDD, Width::U8, 0, 0x7F)),
    ot_gender: Some(BitField::bits(0xDD, Width::U8, 7, 1)),
    version: native(BitField::byte(0xDF)),
    region: Some(RegionFields {
        country: BitField::byte(0xE0),
        region: BitField::byte(0xE1),
        console_region: BitField::byte(0xE2),
    }),
    language: native(BitField::byte(0xE3)),
    hidden_ability: None,
    shiny: ShinyRule::Xor(16),
    ..PK5
};

const PK7: Layout = PK6;

// Let's Go dropped the 3DS geolocation block.
const PB7: Layout = Layout {
    size: 0x104,
    region: None,
    geo1: None,
    ..PK6
};

const PK8: Layout = Layout {
    size: 0x148,
    ability: Some(BitField::word(0x14)),
    ability_number: Some(BitField::bits(0x16, Width::U8, 0, 7)),
    pid: Some(BitField::dword(0x1C)),
    nature: Some(BitField::byte(0x20)),
    gender: Some(BitField::bits(0x22, Width::U8, 2, 3)),
    form: FormField::Stored(BitField::word(0x24)),
    evs: EvField::Bytes(0x26),
    names: NameFields::Fixed {
        ot: text(0xF8, 0x1A, UTF16_GEN6),
        nickname: text(0x58, 0x1A, UTF16_GEN6),
    },
    moves: MoveSlots {
        offset: 0x72,
        width: Width::U16,
        stride: 2,
    },
    ivs: IvField::Packed32(0x8C),
    egg: EggField::Flag(BitField::bits(0x8C, Width::U32, 30, 1)),
    nicknamed: Some(BitField::bits(0x8C, Width::U32, 31, 1)),
    handler: Some(HandlerFields {
        name: text(0xA8, 0x1A, UTF16_GEN6),
        gender: BitField::byte(0xC2),
        current: BitField::byte(0xC4),
    }),
    version: native(BitField::byte(0xDE)),
    language: native(BitField::byte(0xE2)),
    friendship: Some(BitField::byte(0x112)),
    egg_location: Some(BitField::word(0x120)),
    met_location: Some(BitField::word(0x122)),
    ball: Some(BitField::byte(0x124)),
    met_level: Some(BitField::bits(0x125, Width::U8, 0, 0x7F)),
    ot_gender: Some(BitField::bits(0x125, Width::U8, 7, 1)),
    region: None,
    geo1: None,
    ..PK6
};

const PB8: Layout = PK8;

pub const fn layout_of(format: EntityFormat) -> &'static Layout {
    match format {
        EntityFormat::PK1 => &PK1,
        EntityFormat::PK2 => &PK2,
        EntityFormat::SK2 => &SK2,
        EntityFormat::PK3 => &PK3,
        EntityFormat::CK3 => &CK3,
        EntityFormat::XK3 => &XK3,
        EntityFormat::PK4 => &PK4,
        EntityFormat::BK4 => &BK4,
        EntityFormat::PK5 => &PK5,
        EntityFormat::PK6 => &PK6,
        EntityFormat::PK7 => &PK7,
        EntityFormat::PB7 => &PB7,
        EntityFormat::PK8 => &PK8,
        EntityFormat::PB8 | EntityFormat::PB8LUMI => &PB8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schema::IntoEnumIterator;

    fn field_end(field: &BitField) -> usize {
        let width = match field.width {
            Width::U8 => 1,
            Width::U16 => 2,
            Width::U24 => 3,
            Width::U32 => 4,
        };
        field.offset + width
    }

    #[test]
    fn test_every_field_fits_inside_the_record() {
        for format in EntityFormat::iter() {
            let layout = layout_of(format);
            let smallest = layout.size_japanese.unwrap_or(layout.size).min(layout.size);
            let mut fields = vec![layout.species.field, layout.tid, layout.exp, layout.moves.slot(3)];
            fields.extend(
                [
                    layout.held_item,
                    layout.pid,
                    layout.friendship,
                    layout.met_location,
                    layout.egg_location,
                    layout.ball,
                    layout.nature,
                    layout.level,
                ]
                .into_iter()
                .flatten(),
            );
            for field in fields {
                assert!(field_end(&field) <= smallest, "{} field at {:#X}", format, field.offset);
            }
            if let NameFields::Fixed { ot, nickname } = layout.names {
                assert!(ot.offset + ot.bytes <= layout.size, "{} OT name", format);
                assert!(nickname.offset + nickname.bytes <= layout.size, "{} nickname", format);
            }
        }
    }

    #[test]
    fn test_gameboy_sizes() {
        assert_eq!(layout_of(EntityFormat::PK1).size, 0x45);
        assert_eq!(layout_of(EntityFormat::PK1).size_japanese, Some(0x3B));
        assert_eq!(layout_of(EntityFormat::PK2).size, 0x49);
        assert_eq!(layout_of(EntityFormat::PK2).size_japanese, Some(0x3F));
    }

    #[test]
    fn test_battle_revolution_mirrors_gen4_offsets() {
        let pk4 = layout_of(EntityFormat::PK4);
        let bk4 = layout_of(EntityFormat::BK4);
        assert_eq!(bk4.endian, Endian::Big);
        assert_eq!(bk4.species, pk4.species);
        assert_eq!(bk4.ivs, pk4.ivs);
    }
}
