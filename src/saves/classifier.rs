//! Structural save classification.
//!
//! [`classify`] walks a fixed cascade of probes, oldest generation first and
//! storage formats last. Every probe is gated on exact lengths before it
//! looks at any structure, and the first probe that matches wins. Several
//! unrelated formats share a length; the order below together with each
//! probe's structural check keeps them apart, so reordering requires
//! re-checking every collision in `tests/test_collisions.rs`.

use std::path::Path;

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use log::{debug, trace};
use schema::SaveType;

use super::checksums::{
    checksum16_big_invert, checksum32_words, crc16_ccitt, genius_decrypt,
    is_sha256_footer_valid,
};
use super::sizes::*;

/// Footer marker of the 3DS block table.
pub const BEEF: u32 = 0x4245_4546;

const GB_LIST_TERMINATOR: u8 = 0xFF;

// Gen 3 sector footer
pub const G3_SECTOR_SIZE: usize = 0x1000;
pub const G3_SECTOR_COUNT: usize = 14;
pub const G3_SLOT_SIZE: usize = G3_SECTOR_SIZE * G3_SECTOR_COUNT;
pub const G3_SECTOR_ID: usize = 0xFF4;
pub const G3_SECTOR_SIGNATURE: usize = 0xFF8;
pub const G3_SIGNATURE: u32 = 0x0801_2025;

// Gen 4 block footer dates
pub const G4_SDK_DATE: u32 = 0x2006_0623;
pub const G4_SDK_DATE_KOREAN: u32 = 0x2007_0903;
pub const G4_FOOTER_DP: usize = 0x4C100;
pub const G4_FOOTER_PT: usize = 0x4CF2C;
pub const G4_FOOTER_HGSS: usize = 0x4F628;

// Gen 5 checksum footers
pub const G5_INFO_BW: usize = 0x8C;
pub const G5_INFO_B2W2: usize = 0x94;

// Battle Revolution slots
pub const BR_SLOT_SIZE: usize = SIZE_G4BR / 2;
pub const BR_KEY_OFFSET: usize = 0x08;
pub const BR_DATA_OFFSET: usize = 0x10;
pub const BR_CHECKSUM_OFFSET: usize = 0x1B_FF80;

// Stadium team magic
pub const STADIUM_MAGIC: u32 = 0x504F_4B45; // "POKE"
pub const STADIUM2_TEAM_SIZE: usize = 0x660;
pub const STADIUM1_TEAM_SIZE: usize = 0x1AC;
pub const STADIUMJ_TEAM_SIZE: usize = 0x160;

pub const BANK4_BOX_NAME: usize = 0x3FC00;
pub const RANCH_DP_MARKER: usize = 0x22AC;
pub const RANCH_PT_MARKER: usize = 0x268C;

/// BDSP player-data revisions.
pub const BDSP_REVISIONS: [u32; 4] = [0x25, 0x2C, 0x32, 0x34];
const LUMI_MARKER: u32 = 0xFFFF_0000;

struct Probe {
    family: &'static str,
    accepts: fn(usize) -> bool,
    check: fn(&[u8]) -> Option<SaveType>,
}

const CASCADE: [Probe; 23] = [
    Probe { family: "G1", accepts: |len| len == SIZE_G1RAW || len == SIZE_G1BAT, check: probe_g1 },
    Probe { family: "G2", accepts: |len| SIZES_G2.contains(&len), check: probe_g2 },
    Probe { family: "G3", accepts: |len| len == SIZE_G3RAW || len == SIZE_G3RAWHALF, check: probe_g3 },
    Probe { family: "G4", accepts: |len| len == SIZE_G4RAW, check: probe_g4 },
    Probe { family: "G5", accepts: |len| len == SIZE_G5RAW, check: probe_g5 },
    Probe {
        family: "G6",
        accepts: |len| matches!(len, SIZE_G6XY | SIZE_G6ORAS | SIZE_G6ORASDEMO),
        check: probe_g6,
    },
    Probe { family: "G7", accepts: |len| len == SIZE_G7SM || len == SIZE_G7USUM, check: probe_g7 },
    Probe { family: "GG", accepts: |len| len == SIZE_G7GG, check: probe_beluga },
    Probe { family: "COLO", accepts: |len| len == SIZE_G3COLO, check: probe_colosseum },
    Probe { family: "XD", accepts: |len| len == SIZE_G3XD, check: probe_xd },
    Probe { family: "RSBOX", accepts: |len| len == SIZE_G3BOX, check: probe_rsbox },
    Probe { family: "BATREV", accepts: |len| len == SIZE_G4BR, check: probe_battle_revolution },
    Probe { family: "Bank7", accepts: |len| len == SIZE_G7BANK, check: probe_bank7 },
    Probe { family: "Bank4", accepts: |len| len == SIZE_G4BANK, check: probe_bank4 },
    Probe { family: "Bank3", accepts: |len| len == SIZE_G4BANK, check: probe_bank3 },
    Probe {
        family: "Ranch4",
        accepts: |len| len == SIZE_G4RANCH || len == SIZE_G4RANCH_PLAT,
        check: probe_ranch4,
    },
    Probe {
        family: "Stadium2",
        accepts: |len| len == SIZE_G2STAD || len == SIZE_G2STADF,
        check: probe_stadium2,
    },
    Probe {
        family: "Stadium",
        accepts: |len| len == SIZE_G1STAD || len == SIZE_G1STADF,
        check: probe_stadium1,
    },
    Probe { family: "StadiumJ", accepts: |len| len == SIZE_G1STADJ, check: probe_stadium_japanese },
    Probe { family: "SWSH", accepts: |len| SIZES_G8SWSH.contains(&len), check: probe_swsh },
    Probe {
        family: "BDSPLUMI",
        accepts: |len| len == SIZE_G8BDSPLUMI_1 || len == SIZE_G8BDSPLUMI_3,
        check: probe_bdsp_luminescent,
    },
    Probe {
        family: "BDSP",
        accepts: |len| {
            matches!(len, SIZE_G8BDSP | SIZE_G8BDSP_1 | SIZE_G8BDSP_2 | SIZE_G8BDSP_3)
        },
        check: probe_bdsp,
    },
    Probe { family: "PLA", accepts: |len| len == SIZE_G8LA || len == SIZE_G8LA_1, check: probe_legends },
];

/// Detects the save type of a raw buffer. `None` means no probe matched.
pub fn classify(data: &[u8]) -> Option<SaveType> {
    let len = data.len();
    let result = CASCADE
        .iter()
        .filter(|probe| (probe.accepts)(len))
        .find_map(|probe| {
            trace!("{} probe accepted length {:#X}", probe.family, len);
            (probe.check)(data)
        });
    match result {
        Some(save_type) => debug!("Classified {:#X} bytes as {}", len, save_type),
        None => debug!("No probe matched {:#X} bytes", len),
    }
    result
}

/// Every type whose probe accepts the buffer, in cascade order. A buffer
/// that fits more than one probe is only ever reported as the first.
pub fn candidates(data: &[u8]) -> Vec<SaveType> {
    CASCADE
        .iter()
        .filter(|probe| (probe.accepts)(data.len()))
        .filter_map(|probe| (probe.check)(data))
        .collect()
}

/// Whether a file of this length could hold a save, wrapped or not.
pub fn is_size_valid(len: usize) -> bool {
    is_known_size(len) || super::handlers::default_handlers().iter().any(|h| h.is_recognized(len))
}

/// Backup copies made by save managers.
pub fn is_backup(path: &Path) -> bool {
    let stem_is_backup = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.eq_ignore_ascii_case("backup"));
    let extension_is_bak = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("bak"));
    stem_is_backup || extension_is_bak
}

/// A Game Boy list is a count byte, `count` species bytes and a terminator.
fn is_gb_list_valid(data: &[u8], offset: usize, capacity: u8) -> bool {
    let count = data[offset];
    count <= capacity && data.get(offset + 1 + count as usize) == Some(&GB_LIST_TERMINATOR)
}

fn probe_g1(data: &[u8]) -> Option<SaveType> {
    let international = is_gb_list_valid(data, 0x2F2C, 20) && is_gb_list_valid(data, 0x30C0, 20);
    let japanese = is_gb_list_valid(data, 0x2ED5, 30) && is_gb_list_valid(data, 0x302D, 30);
    (international || japanese).then_some(SaveType::RBY)
}

fn probe_g2(data: &[u8]) -> Option<SaveType> {
    // International
    if is_gb_list_valid(data, 0x288A, 20) && is_gb_list_valid(data, 0x2D6C, 20) {
        return Some(SaveType::GS);
    }
    if is_gb_list_valid(data, 0x2865, 20) && is_gb_list_valid(data, 0x2D10, 20) {
        return Some(SaveType::C);
    }
    // Japanese
    if is_gb_list_valid(data, 0x2D10, 30) {
        if is_gb_list_valid(data, 0x283E, 30) {
            return Some(SaveType::GS);
        }
        if is_gb_list_valid(data, 0x281A, 30) {
            return Some(SaveType::C);
        }
    }
    // Korean
    if is_gb_list_valid(data, 0x2DAE, 20) && is_gb_list_valid(data, 0x28CC, 20) {
        return Some(SaveType::GS);
    }
    None
}

fn probe_g3(data: &[u8]) -> Option<SaveType> {
    let slots = data.len() / SIZE_G3RAWHALF;
    (0..slots)
        .find_map(|slot| small_block_offset(data, slot))
        .map(|small| gen3_version(&data[small..]))
}

/// Offset of sector 0 when all fourteen sectors of a slot are present.
pub fn small_block_offset(data: &[u8], slot: usize) -> Option<usize> {
    let start = slot * G3_SLOT_SIZE;
    let mut present = 0u32;
    let mut small = None;
    for sector in 0..G3_SECTOR_COUNT {
        let offset = start + sector * G3_SECTOR_SIZE;
        let id = LittleEndian::read_u16(&data[offset + G3_SECTOR_ID..]) as usize;
        if id >= G3_SECTOR_COUNT {
            return None;
        }
        let signature = LittleEndian::read_u32(&data[offset + G3_SECTOR_SIGNATURE..]);
        if signature != G3_SIGNATURE {
            return None;
        }
        present |= 1 << id;
        if id == 0 {
            small = Some(offset);
        }
    }
    if present != (1 << G3_SECTOR_COUNT) - 1 {
        return None;
    }
    small
}

/// Tells RS, E and FRLG apart from the small block.
fn gen3_version(small: &[u8]) -> SaveType {
    // FRLG stores a constant here; RS keeps battle tower data, E the security key.
    match LittleEndian::read_u32(&small[0xAC..]) {
        1 => SaveType::FRLG,
        0 => SaveType::RS,
        _ => {
            let extended = (0x890..0xF2C)
                .step_by(4)
                .any(|offset| LittleEndian::read_u64(&small[offset..]) != 0);
            if extended {
                SaveType::E
            } else {
                SaveType::RS
            }
        }
    }
}

fn is_g4_footer_valid(data: &[u8], offset: usize) -> bool {
    let size = LittleEndian::read_u32(&data[offset - 0xC..]);
    if size != (offset & 0xFFFF) as u32 {
        return false;
    }
    let sdk = LittleEndian::read_u32(&data[offset - 0x8..]);
    sdk == G4_SDK_DATE || sdk == G4_SDK_DATE_KOREAN
}

fn probe_g4(data: &[u8]) -> Option<SaveType> {
    // The second half holds a full copy; its footers are enough.
    [
        (G4_FOOTER_DP, SaveType::DP),
        (G4_FOOTER_PT, SaveType::Pt),
        (G4_FOOTER_HGSS, SaveType::HGSS),
    ]
    .into_iter()
    .find(|&(offset, _)| is_g4_footer_valid(data, offset))
    .map(|(_, save_type)| save_type)
}

fn is_g5_footer_valid(data: &[u8], main_size: usize, info_length: usize) -> bool {
    let start = main_size - 0x100;
    let footer = &data[start..start + info_length + 0x10];
    let stored = LittleEndian::read_u16(&footer[footer.len() - 2..]);
    stored == crc16_ccitt(&footer[..info_length])
}

fn probe_g5(data: &[u8]) -> Option<SaveType> {
    if is_g5_footer_valid(data, SIZE_G5BW, G5_INFO_BW) {
        Some(SaveType::BW)
    } else if is_g5_footer_valid(data, SIZE_G5B2W2, G5_INFO_B2W2) {
        Some(SaveType::B2W2)
    } else {
        None
    }
}

fn has_beef_footer(data: &[u8], end: usize) -> bool {
    LittleEndian::read_u32(&data[end - 0x1F0..]) == BEEF
}

fn probe_g6(data: &[u8]) -> Option<SaveType> {
    if !has_beef_footer(data, data.len()) {
        return None;
    }
    Some(match data.len() {
        SIZE_G6XY => SaveType::XY,
        SIZE_G6ORAS => SaveType::ORAS,
        _ => SaveType::ORASDEMO,
    })
}

fn probe_g7(data: &[u8]) -> Option<SaveType> {
    if !has_beef_footer(data, data.len()) {
        return None;
    }
    Some(if data.len() == SIZE_G7SM {
        SaveType::SM
    } else {
        SaveType::USUM
    })
}

/// Let's Go pads its 0xB8800 bytes of data to a full megabyte.
pub const BELUGA_USED_LENGTH: usize = 0xB8800;

fn probe_beluga(data: &[u8]) -> Option<SaveType> {
    let block_check = LittleEndian::read_u16(&data[BELUGA_USED_LENGTH - 0x200 + 0xB0..]);
    (has_beef_footer(data, BELUGA_USED_LENGTH) && block_check == 0x13).then_some(SaveType::GG)
}

fn probe_colosseum(data: &[u8]) -> Option<SaveType> {
    (0..3)
        .all(|slot| LittleEndian::read_u32(&data[0x6000 + 0x1E000 * slot..]) == 0x101)
        .then_some(SaveType::COLO)
}

fn probe_xd(data: &[u8]) -> Option<SaveType> {
    (0..2)
        .all(|slot| {
            LittleEndian::read_u32(&data[0x6000 + 0x28000 * slot..]) & 0xFFFE_FFFF == 0x101
        })
        .then_some(SaveType::XD)
}

fn probe_rsbox(data: &[u8]) -> Option<SaveType> {
    let block = &data[0x2000..0x2000 + 0x1FFC];
    let stored = BigEndian::read_u32(block);
    (stored == checksum16_big_invert(&block[4..])).then_some(SaveType::RSBOX)
}

/// Decrypts one Battle Revolution slot and compares its stored checksum.
pub fn is_battle_revolution_slot_valid(slot: &[u8]) -> bool {
    let mut keys = [0u16; 4];
    BigEndian::read_u16_into(&slot[BR_KEY_OFFSET..BR_DATA_OFFSET], &mut keys);
    let mut body = slot[BR_DATA_OFFSET..].to_vec();
    genius_decrypt(&mut body, keys);
    let checksum_at = BR_CHECKSUM_OFFSET - BR_DATA_OFFSET;
    let stored = BigEndian::read_u32(&body[checksum_at..]);
    stored == checksum32_words(&body[..checksum_at])
}

fn probe_battle_revolution(data: &[u8]) -> Option<SaveType> {
    data.chunks_exact(BR_SLOT_SIZE)
        .all(is_battle_revolution_slot_valid)
        .then_some(SaveType::BATREV)
}

fn probe_bank7(data: &[u8]) -> Option<SaveType> {
    (data[0] != 0).then_some(SaveType::Bank7)
}

// Bank4 and Bank3 share a length; only Bank4 names its first box.
fn probe_bank4(data: &[u8]) -> Option<SaveType> {
    (LittleEndian::read_u32(&data[BANK4_BOX_NAME..]) != 0).then_some(SaveType::Bank4)
}

fn probe_bank3(data: &[u8]) -> Option<SaveType> {
    (LittleEndian::read_u32(&data[BANK4_BOX_NAME..]) == 0).then_some(SaveType::Bank3)
}

fn probe_ranch4(data: &[u8]) -> Option<SaveType> {
    let marker = match data.len() {
        SIZE_G4RANCH => RANCH_DP_MARKER,
        _ => RANCH_PT_MARKER,
    };
    (BigEndian::read_u32(&data[marker..]) != 0).then_some(SaveType::Ranch4)
}

/// The first team of a Stadium save ends its header with "POKE", stored in
/// either byte order depending on the dumper.
fn has_stadium_magic(data: &[u8], team_size: usize) -> bool {
    let offset = team_size - 0x10;
    BigEndian::read_u32(&data[offset..]) == STADIUM_MAGIC
        || LittleEndian::read_u32(&data[offset..]) == STADIUM_MAGIC
}

fn probe_stadium2(data: &[u8]) -> Option<SaveType> {
    has_stadium_magic(data, STADIUM2_TEAM_SIZE).then_some(SaveType::Stadium2)
}

fn probe_stadium1(data: &[u8]) -> Option<SaveType> {
    has_stadium_magic(data, STADIUM1_TEAM_SIZE).then_some(SaveType::Stadium)
}

fn probe_stadium_japanese(data: &[u8]) -> Option<SaveType> {
    has_stadium_magic(data, STADIUMJ_TEAM_SIZE).then_some(SaveType::StadiumJ)
}

fn probe_swsh(data: &[u8]) -> Option<SaveType> {
    is_sha256_footer_valid(data).then_some(SaveType::SWSH)
}

fn probe_bdsp_luminescent(data: &[u8]) -> Option<SaveType> {
    (LittleEndian::read_u32(data) & LUMI_MARKER == LUMI_MARKER).then_some(SaveType::BDSPLUMI)
}

fn probe_bdsp(data: &[u8]) -> Option<SaveType> {
    BDSP_REVISIONS
        .contains(&LittleEndian::read_u32(data))
        .then_some(SaveType::BDSP)
}

fn probe_legends(data: &[u8]) -> Option<SaveType> {
    is_sha256_footer_valid(data).then_some(SaveType::PLA)
}

/// Luminescent saves tag the revision their player data was written with.
pub fn bdsp_revision_suffix(data: &[u8]) -> Option<&'static str> {
    if data.len() < 4 {
        return None;
    }
    match LittleEndian::read_u32(data) & 0xFFFF {
        0x2C => Some("-1.1.0"),
        0x34 => Some("-1.3.0"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::path::PathBuf;

    #[rstest]
    #[case("empty", 0)]
    #[case("one byte short of G1", SIZE_G1RAW - 1)]
    #[case("random length", 0x12345)]
    fn test_unknown_lengths_are_unrecognized(#[case] desc: &str, #[case] len: usize) {
        assert_eq!(classify(&vec![0u8; len]), None, "{}", desc);
    }

    #[rstest]
    #[case("blank G1", SIZE_G1RAW)]
    #[case("blank G3", SIZE_G3RAW)]
    #[case("blank G4/G5", SIZE_G4RAW)]
    #[case("blank ORAS/RSBOX", SIZE_G6ORAS)]
    #[case("blank SWSH", SIZES_G8SWSH[0])]
    #[case("blank BDSP", SIZE_G8BDSP)]
    fn test_zeroed_buffers_are_unrecognized(#[case] desc: &str, #[case] len: usize) {
        assert_eq!(classify(&vec![0u8; len]), None, "{}", desc);
    }

    #[test]
    fn test_gb_list_validity() {
        let mut data = vec![0u8; 0x40];
        data[0x10] = 2;
        data[0x13] = GB_LIST_TERMINATOR;
        assert!(is_gb_list_valid(&data, 0x10, 20));
        data[0x10] = 21;
        assert!(!is_gb_list_valid(&data, 0x10, 20));
    }

    #[test]
    fn test_size_filter() {
        assert!(is_size_valid(SIZE_G4RAW));
        assert!(is_size_valid(SIZES_G8SWSH[7]));
        assert!(is_size_valid(SIZE_G2EMU_J));
        assert!(!is_size_valid(0x1234));
    }

    #[rstest]
    #[case("backup stem", "saves/BACKUP.sav", true)]
    #[case("bak extension", "saves/main.Bak", true)]
    #[case("plain save", "saves/main.sav", false)]
    #[case("backup inside a name", "saves/my_backup.sav", false)]
    fn test_backup_detection(#[case] desc: &str, #[case] path: &str, #[case] expected: bool) {
        assert_eq!(is_backup(&PathBuf::from(path)), expected, "{}", desc);
    }

    #[rstest]
    #[case("1.1.0", 0xFFFF_002C, Some("-1.1.0"))]
    #[case("1.3.0", 0xFFFF_0034, Some("-1.3.0"))]
    #[case("unknown", 0xFFFF_0025, None)]
    fn test_bdsp_revision_suffix(
        #[case] desc: &str,
        #[case] revision: u32,
        #[case] expected: Option<&str>,
    ) {
        let mut data = vec![0u8; 8];
        LittleEndian::write_u32(&mut data, revision);
        assert_eq!(bdsp_revision_suffix(&data), expected, "{}", desc);
    }
}
