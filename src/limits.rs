//! Per-format limit table, compiled from `data/limits.ron` by the build script.

use schema::{EntityFormat, GameLimits, LimitEntry};
use std::sync::LazyLock;

include!(concat!(env!("OUT_DIR"), "/limits_index.rs"));

static LIMIT_BLOB: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/limits.postcard"));

// Decoded once; the build script already checked that every format has a row.
static LIMIT_ENTRIES: LazyLock<Vec<LimitEntry>> = LazyLock::new(|| {
    postcard::from_bytes(LIMIT_BLOB)
        .unwrap_or_else(|e| panic!("Compiled limit table is corrupt: {}", e))
});

/// Look up the limits of a format.
pub fn limits(format: EntityFormat) -> &'static GameLimits {
    let name: &'static str = format.into();
    let position = LIMIT_INDEX
        .get(name)
        .copied()
        .unwrap_or_else(|| panic!("No limit entry compiled for {}", format));
    &LIMIT_ENTRIES[position].limits
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::IntoEnumIterator;

    #[test]
    fn test_every_format_has_limits() {
        for format in EntityFormat::iter() {
            let entry = limits(format);
            assert!(entry.max_species_id > 0, "{} has no species", format);
            assert!(entry.nick_length >= entry.ot_length || format.generation() >= 6);
        }
    }

    #[rstest]
    #[case("Gen 1 stops at Mew", EntityFormat::PK1, 151, 165)]
    #[case("Gen 2 stops at Celebi", EntityFormat::PK2, 251, 251)]
    #[case("Gen 3 stops at Deoxys", EntityFormat::PK3, 386, 354)]
    #[case("BDSP keeps the Sinnoh dex", EntityFormat::PB8, 493, 850)]
    #[case("Luminescent extends the dex", EntityFormat::PB8LUMI, 905, 850)]
    fn test_species_and_move_caps(
        #[case] desc: &str,
        #[case] format: EntityFormat,
        #[case] species: u16,
        #[case] moves: u16,
    ) {
        let entry = limits(format);
        assert_eq!(entry.max_species_id, species, "{}", desc);
        assert_eq!(entry.max_move_id, moves, "{}", desc);
    }

    #[test]
    fn test_gameboy_caps_use_stat_experience() {
        let entry = limits(EntityFormat::PK2);
        assert_eq!(entry.max_ev, 65535);
        assert_eq!(entry.max_iv, 15);
        assert_eq!(limits(EntityFormat::PK6).max_ev, 252);
    }
}
