//! Field registry shared by the transfer hops and the best-effort copy.
//!
//! Each entry reads a semantic field from one record and writes it into
//! another through the accessors, so the per-format offsets stay in the
//! layouts. Fields a format does not store read as 0 and ignore writes.

use crate::entity::Entity;
use crate::text::TextCodec;

pub struct FieldCopy {
    pub name: &'static str,
    pub copy: fn(&Entity, &mut Entity),
}

pub static FIELD_REGISTRY: [FieldCopy; 27] = [
    FieldCopy { name: "species", copy: |s, d| d.set_species(s.species()) },
    FieldCopy { name: "form", copy: |s, d| d.set_form(s.form()) },
    FieldCopy {
        name: "gender",
        copy: |s, d| {
            if let Some(gender) = s.gender() {
                d.set_gender(gender);
            }
        },
    },
    FieldCopy { name: "pid", copy: |s, d| d.set_pid(s.pid()) },
    FieldCopy { name: "encryption_constant", copy: |s, d| d.set_encryption_constant(s.encryption_constant()) },
    FieldCopy { name: "tid", copy: |s, d| d.set_tid(s.tid()) },
    FieldCopy { name: "sid", copy: |s, d| d.set_sid(s.sid()) },
    FieldCopy { name: "held_item", copy: |s, d| d.set_held_item(s.held_item()) },
    FieldCopy { name: "moves", copy: |s, d| d.set_moves(s.moves()) },
    FieldCopy { name: "evs", copy: |s, d| d.set_evs(s.evs()) },
    FieldCopy { name: "ivs", copy: |s, d| d.set_ivs(s.ivs()) },
    FieldCopy { name: "exp", copy: |s, d| d.set_exp(s.exp()) },
    FieldCopy { name: "friendship", copy: |s, d| d.set_friendship(s.friendship()) },
    FieldCopy { name: "level", copy: |s, d| d.set_level(s.level()) },
    FieldCopy {
        name: "nature",
        copy: |s, d| {
            if let Some(nature) = s.nature() {
                d.set_nature(nature);
            }
        },
    },
    FieldCopy { name: "ability", copy: |s, d| d.set_ability(s.ability()) },
    FieldCopy { name: "ability_number", copy: |s, d| d.set_ability_number(s.ability_number()) },
    FieldCopy { name: "hidden_ability", copy: |s, d| d.set_hidden_ability(s.hidden_ability()) },
    FieldCopy { name: "is_nicknamed", copy: |s, d| d.set_is_nicknamed(s.is_nicknamed()) },
    FieldCopy { name: "language", copy: |s, d| d.set_language(s.language()) },
    FieldCopy { name: "names", copy: copy_names },
    FieldCopy { name: "version", copy: |s, d| d.set_version(s.version()) },
    FieldCopy { name: "met_level", copy: |s, d| d.set_met_level(s.met_level()) },
    FieldCopy { name: "met_location", copy: |s, d| d.set_met_location(s.met_location()) },
    FieldCopy { name: "egg_location", copy: |s, d| d.set_egg_location(s.egg_location()) },
    FieldCopy { name: "ball", copy: |s, d| d.set_ball(s.ball()) },
    FieldCopy { name: "ot_gender", copy: |s, d| d.set_ot_gender(s.ot_gender()) },
];

/// Game Boy charsets differ per region, so names move between them as raw
/// bytes; everything else goes through text. Language is registered first
/// because it selects the Gen 3 table.
fn copy_names(source: &Entity, dest: &mut Entity) {
    if source.name_codec() == TextCodec::GameBoy && dest.name_codec() == TextCodec::GameBoy {
        let ot = source.ot_name_bytes().to_vec();
        let nickname = source.nickname_bytes().to_vec();
        dest.set_name_bytes(&ot, &nickname);
    } else {
        dest.set_ot_name(&source.ot_name());
        dest.set_nickname(&source.nickname());
    }
}

/// Copies every registered field.
pub fn copy_all(source: &Entity, dest: &mut Entity) {
    for field in &FIELD_REGISTRY {
        (field.copy)(source, dest);
    }
}

/// Copies every registered field except the named ones.
pub fn copy_except(source: &Entity, dest: &mut Entity, skip: &[&str]) {
    for field in FIELD_REGISTRY.iter().filter(|f| !skip.contains(&f.name)) {
        (field.copy)(source, dest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schema::EntityFormat;
    use std::collections::HashSet;

    #[test]
    fn test_registry_names_are_unique() {
        let names: HashSet<_> = FIELD_REGISTRY.iter().map(|f| f.name).collect();
        assert_eq!(names.len(), FIELD_REGISTRY.len());
    }

    #[test]
    fn test_copy_between_byte_orders() {
        let mut pk4 = Entity::blank(EntityFormat::PK4);
        pk4.set_species(448);
        pk4.set_pid(0xDEAD_BEEF);
        pk4.set_moves([396, 14, 370, 98]);
        pk4.set_nickname("Lucario");
        pk4.set_ivs([31, 30, 29, 28, 27, 26]);

        let mut bk4 = Entity::blank(EntityFormat::BK4);
        copy_all(&pk4, &mut bk4);
        assert_eq!(bk4.species(), 448);
        assert_eq!(bk4.pid(), 0xDEAD_BEEF);
        assert_eq!(bk4.moves(), [396, 14, 370, 98]);
        assert_eq!(bk4.nickname(), "Lucario");
        assert_eq!(bk4.ivs(), [31, 30, 29, 28, 27, 26]);
        assert_ne!(bk4.data(), pk4.data());
    }

    #[test]
    fn test_gameboy_names_copy_raw() {
        let mut pk1 = Entity::blank_with_region(EntityFormat::PK1, true);
        pk1.set_name_bytes(&[0x80, 0x81, 0x50], &[0x82, 0x50]);
        let mut pk2 = Entity::blank_with_region(EntityFormat::PK2, true);
        copy_except(&pk1, &mut pk2, &["species"]);
        assert_eq!(&pk2.ot_name_bytes()[..3], &[0x80, 0x81, 0x50]);
        assert_eq!(&pk2.nickname_bytes()[..2], &[0x82, 0x50]);
    }
}
