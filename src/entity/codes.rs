//! Version ids and the GameCube code tables.

use super::layout::CodeTable;

pub mod version {
    pub const S: u8 = 1;
    pub const R: u8 = 2;
    pub const E: u8 = 3;
    pub const FR: u8 = 4;
    pub const LG: u8 = 5;
    pub const HG: u8 = 7;
    pub const SS: u8 = 8;
    pub const D: u8 = 10;
    pub const P: u8 = 11;
    pub const PT: u8 = 12;
    pub const CXD: u8 = 15;
    pub const W: u8 = 20;
    pub const B: u8 = 21;
    pub const W2: u8 = 22;
    pub const B2: u8 = 23;
    pub const X: u8 = 24;
    pub const Y: u8 = 25;
    pub const AS: u8 = 26;
    pub const OR: u8 = 27;
    pub const SN: u8 = 30;
    pub const MN: u8 = 31;
    pub const US: u8 = 32;
    pub const UM: u8 = 33;
    pub const RD: u8 = 35;
    pub const GN: u8 = 36;
    pub const BU: u8 = 37;
    pub const YW: u8 = 38;
    pub const GD: u8 = 39;
    pub const SV: u8 = 40;
    pub const C: u8 = 41;
    pub const GP: u8 = 42;
    pub const GE: u8 = 43;
    pub const SW: u8 = 44;
    pub const SH: u8 = 45;
    pub const BD: u8 = 48;
    pub const SP: u8 = 49;
}

/// Stored GameCube code and the shared code it stands for.
const GC_LANGUAGES: [(u8, u8); 6] = [(1, 1), (2, 2), (3, 5), (4, 3), (5, 4), (6, 7)];

const GC_VERSIONS: [(u8, u8); 6] = [
    (1, version::FR),
    (2, version::LG),
    (8, version::S),
    (9, version::R),
    (10, version::E),
    (11, version::CXD),
];

fn table(codes: CodeTable) -> &'static [(u8, u8)] {
    match codes {
        CodeTable::Native => &[],
        CodeTable::GameCubeLanguage => &GC_LANGUAGES,
        CodeTable::GameCubeVersion => &GC_VERSIONS,
    }
}

/// Stored code to shared code. Unknown GameCube codes read as 0.
pub fn to_shared(codes: CodeTable, stored: u8) -> u8 {
    match codes {
        CodeTable::Native => stored,
        _ => table(codes)
            .iter()
            .find(|(gc, _)| *gc == stored)
            .map_or(0, |(_, shared)| *shared),
    }
}

/// Shared code to stored code. Codes with no GameCube equivalent store 0.
pub fn to_stored(codes: CodeTable, shared: u8) -> u8 {
    match codes {
        CodeTable::Native => shared,
        _ => table(codes)
            .iter()
            .find(|(_, s)| *s == shared)
            .map_or(0, |(gc, _)| *gc),
    }
}
