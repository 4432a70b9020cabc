//! Exact byte lengths of every recognized save container.

pub const SIZE_G8LA: usize = 0x136DDE;
pub const SIZE_G8LA_1: usize = 0x13AD06;

pub const SIZE_G8BDSP: usize = 0xE9828;
pub const SIZE_G8BDSP_1: usize = 0xEDC20;
pub const SIZE_G8BDSP_2: usize = 0xEED8C;
pub const SIZE_G8BDSP_3: usize = 0xEF0A4;

pub const SIZE_G8BDSPLUMI_1: usize = 0xEDC20;
pub const SIZE_G8BDSPLUMI_3: usize = 0xEF0A4;

/// Every Sword/Shield revision and patch path.
pub const SIZES_G8SWSH: [usize; 8] = [
    0x1716B3, // 1.0
    0x17195E, // 1.0 -> 1.1
    0x180B19, // 1.0 -> 1.1 -> 1.2
    0x180AD0, // 1.0 -> 1.2
    0x1876B1, // 1.0 -> 1.1 -> 1.2 -> 1.3
    0x187693, // 1.0 -> 1.1 -> 1.3
    0x187668, // 1.0 -> 1.2 -> 1.3
    0x18764A, // 1.0 -> 1.3
];

pub const SIZE_G7GG: usize = 0x100000;
pub const SIZE_G7USUM: usize = 0x6CC00;
pub const SIZE_G7SM: usize = 0x6BE00;
pub const SIZE_G6XY: usize = 0x65600;
pub const SIZE_G6ORAS: usize = 0x76000;
pub const SIZE_G6ORASDEMO: usize = 0x5A00;
pub const SIZE_G5RAW: usize = 0x80000;
pub const SIZE_G5BW: usize = 0x24000;
pub const SIZE_G5B2W2: usize = 0x26000;
pub const SIZE_G4BR: usize = 0x380000;
pub const SIZE_G4RAW: usize = 0x80000;
pub const SIZE_G3BOX: usize = 0x76000;
pub const SIZE_G3COLO: usize = 0x60000;
pub const SIZE_G3XD: usize = 0x56000;
pub const SIZE_G3RAW: usize = 0x20000;
pub const SIZE_G3RAWHALF: usize = 0x10000;
pub const SIZE_G2STAD: usize = 0x20000;
pub const SIZE_G2STADF: usize = 0x1FF00;
pub const SIZE_G2RAW_U: usize = 0x8000;
pub const SIZE_G2VC_U: usize = 0x8010;
pub const SIZE_G2BAT_U: usize = 0x802C;
pub const SIZE_G2EMU_U: usize = 0x8030;
pub const SIZE_G2RAW_J: usize = 0x10000;
pub const SIZE_G2VC_J: usize = 0x10010;
pub const SIZE_G2BAT_J: usize = 0x1002C;
pub const SIZE_G2EMU_J: usize = 0x10030;
pub const SIZE_G1STAD: usize = 0x20000;
pub const SIZE_G1STADF: usize = 0x1FF00;
pub const SIZE_G1STADJ: usize = 0x8000;
pub const SIZE_G1RAW: usize = 0x8000;
pub const SIZE_G1BAT: usize = 0x802C;

// Bank binaries
pub const SIZE_G7BANK: usize = 0xACA48;
pub const SIZE_G4BANK: usize = 0x405C4;
pub const SIZE_G4RANCH: usize = 0x54000;
pub const SIZE_G4RANCH_PLAT: usize = 0x7C000;

pub const SIZES_G2: [usize; 8] = [
    SIZE_G2RAW_U,
    SIZE_G2VC_U,
    SIZE_G2BAT_U,
    SIZE_G2EMU_U,
    SIZE_G2RAW_J,
    SIZE_G2VC_J,
    SIZE_G2BAT_J,
    SIZE_G2EMU_J,
];

/// Lengths that can hold a save without an emulator wrapper.
const SIZES_OTHER: [usize; 31] = [
    SIZE_G8LA,
    SIZE_G8LA_1,
    SIZE_G8BDSP,
    SIZE_G8BDSP_1,
    SIZE_G8BDSP_2,
    SIZE_G8BDSP_3,
    SIZE_G7SM,
    SIZE_G7USUM,
    SIZE_G7GG,
    SIZE_G6XY,
    SIZE_G6ORAS,
    SIZE_G6ORASDEMO,
    SIZE_G5RAW,
    SIZE_G5BW,
    SIZE_G5B2W2,
    SIZE_G4BR,
    SIZE_G4RAW,
    SIZE_G3BOX,
    SIZE_G3COLO,
    SIZE_G3XD,
    SIZE_G3RAW,
    SIZE_G3RAWHALF,
    SIZE_G2STADF,
    SIZE_G1RAW,
    SIZE_G1BAT,
    SIZE_G7BANK,
    SIZE_G4BANK,
    SIZE_G4RANCH,
    SIZE_G4RANCH_PLAT,
    SIZE_G1STADJ,
    SIZE_G2STAD,
];

pub fn is_known_size(len: usize) -> bool {
    SIZES_G2.contains(&len) || SIZES_G8SWSH.contains(&len) || SIZES_OTHER.contains(&len)
}
