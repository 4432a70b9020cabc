//! National dex ids used by transfer rules, and the internal index orders of
//! the Gen 1 and Gen 3 games.

pub const BULBASAUR: u16 = 1;
pub const PIKACHU: u16 = 25;
pub const EEVEE: u16 = 133;
pub const MEW: u16 = 151;
pub const PICHU: u16 = 172;
pub const UNOWN: u16 = 201;
pub const CELEBI: u16 = 251;

/// Red/Blue/Yellow internal index to national dex id. Zero marks a glitch slot.
const GEN1_INTERNAL_TO_NATIONAL: [u8; 191] = [
    0, 112, 115, 32, 35, 21, 100, 34, 80, 2, 103, 108, 102, 88, 94, 29,
    31, 104, 111, 131, 59, 151, 130, 90, 72, 92, 123, 120, 9, 127, 114, 0,
    0, 58, 95, 22, 16, 79, 64, 75, 113, 67, 122, 106, 107, 24, 47, 54,
    96, 76, 0, 126, 0, 125, 82, 109, 0, 56, 86, 50, 128, 0, 0, 0,
    83, 48, 149, 0, 0, 0, 84, 60, 124, 146, 144, 145, 132, 52, 98, 0,
    0, 0, 37, 38, 25, 26, 0, 0, 147, 148, 140, 141, 116, 117, 0, 0,
    27, 28, 138, 139, 39, 40, 133, 136, 135, 134, 66, 41, 23, 46, 61, 62,
    13, 14, 15, 0, 85, 57, 51, 49, 87, 0, 0, 10, 11, 12, 68, 0,
    55, 97, 42, 150, 143, 129, 0, 0, 89, 0, 99, 91, 0, 101, 36, 110,
    53, 105, 0, 93, 63, 65, 17, 18, 121, 1, 3, 73, 0, 118, 119, 0,
    0, 0, 0, 77, 78, 19, 20, 33, 30, 74, 137, 142, 0, 81, 0, 0,
    4, 7, 5, 8, 6, 0, 0, 0, 0, 43, 44, 45, 69, 70, 71,
];

/// First Gen 3 internal index of the Hoenn block.
const GEN3_HOENN_START: u16 = 277;

/// National dex ids of Gen 3 internal indexes 277..=411.
const GEN3_HOENN_TO_NATIONAL: [u16; 135] = [
    252, 253, 254, 255, 256, 257, 258, 259, 260, 261, 262, 263, 264, 265, 266,
    267, 268, 269, 270, 271, 272, 273, 274, 275, 290, 291, 292, 276, 277, 285,
    286, 327, 278, 279, 283, 284, 320, 321, 300, 301, 352, 343, 344, 299, 324,
    302, 339, 340, 370, 341, 342, 349, 350, 318, 319, 328, 329, 330, 296, 297,
    309, 310, 322, 323, 363, 364, 365, 331, 332, 361, 362, 337, 338, 298, 325,
    326, 311, 312, 303, 307, 308, 333, 334, 360, 355, 356, 315, 287, 288, 289,
    316, 317, 357, 293, 294, 295, 366, 367, 368, 359, 353, 354, 336, 335, 369,
    304, 305, 306, 351, 313, 314, 345, 346, 347, 348, 280, 281, 282, 371, 372,
    373, 374, 375, 376, 377, 378, 379, 382, 383, 384, 380, 381, 385, 386, 358,
];

pub fn gen1_to_national(internal: u8) -> u16 {
    GEN1_INTERNAL_TO_NATIONAL
        .get(internal as usize)
        .map_or(0, |&n| n as u16)
}

/// Returns 0 when the species does not exist in Gen 1.
pub fn national_to_gen1(species: u16) -> u8 {
    if species == 0 || species > MEW {
        return 0;
    }
    GEN1_INTERNAL_TO_NATIONAL
        .iter()
        .position(|&n| n as u16 == species)
        .map_or(0, |i| i as u8)
}

pub fn gen3_to_national(internal: u16) -> u16 {
    match internal {
        0..=CELEBI => internal,
        GEN3_HOENN_START..=411 => GEN3_HOENN_TO_NATIONAL[(internal - GEN3_HOENN_START) as usize],
        _ => 0,
    }
}

/// Returns 0 when the species does not exist in Gen 3.
pub fn national_to_gen3(species: u16) -> u16 {
    match species {
        0..=CELEBI => species,
        _ => GEN3_HOENN_TO_NATIONAL
            .iter()
            .position(|&n| n == species)
            .map_or(0, |i| i as u16 + GEN3_HOENN_START),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_gen1_index_is_a_bijection() {
        for species in 1..=MEW {
            let internal = national_to_gen1(species);
            assert_ne!(internal, 0, "species {} has no internal index", species);
            assert_eq!(gen1_to_national(internal), species);
        }
        assert_eq!(national_to_gen1(CELEBI), 0);
    }

    #[test]
    fn test_gen3_index_is_a_bijection() {
        for species in 1..=386 {
            let internal = national_to_gen3(species);
            assert_eq!(gen3_to_national(internal), species);
        }
        assert_eq!(national_to_gen3(387), 0);
    }

    #[rstest]
    #[case("Rhydon is index one", 0x01, 112)]
    #[case("Bulbasaur sits late", 0x99, BULBASAUR)]
    #[case("Pikachu", 0x54, PIKACHU)]
    #[case("Mew", 0x15, MEW)]
    #[case("Missingno slot", 0x1F, 0)]
    fn test_gen1_known_indexes(#[case] desc: &str, #[case] internal: u8, #[case] species: u16) {
        assert_eq!(gen1_to_national(internal), species, "{}", desc);
    }

    #[test]
    fn test_gen3_hoenn_block() {
        assert_eq!(gen3_to_national(277), 252);
        assert_eq!(gen3_to_national(411), 358);
        assert_eq!(gen3_to_national(260), 0);
    }
}
