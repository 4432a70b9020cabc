//! Builders for minimal buffers that satisfy exactly one probe.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::saves::checksums::{
    checksum16_big_invert, checksum32_words, crc16_ccitt, genius_encrypt, sha256_footer,
    SHA256_LEN,
};
use crate::saves::classifier::{
    BEEF, BELUGA_USED_LENGTH, BR_CHECKSUM_OFFSET, BR_DATA_OFFSET, BR_KEY_OFFSET, BR_SLOT_SIZE,
    G3_SECTOR_COUNT, G3_SECTOR_ID, G3_SECTOR_SIGNATURE, G3_SECTOR_SIZE, G3_SIGNATURE,
    G3_SLOT_SIZE, G4_SDK_DATE, STADIUM_MAGIC,
};
use crate::saves::sizes::*;

/// Writes a Game Boy list holding `count` Bulbasaurs.
pub fn write_gb_list(data: &mut [u8], offset: usize, count: u8) {
    data[offset] = count;
    for i in 0..count as usize {
        data[offset + 1 + i] = 0x99;
    }
    data[offset + 1 + count as usize] = 0xFF;
}

pub fn g1_international(len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    write_gb_list(&mut data, 0x2F2C, 1);
    write_gb_list(&mut data, 0x30C0, 3);
    data
}

pub fn g1_japanese(len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    write_gb_list(&mut data, 0x2ED5, 2);
    write_gb_list(&mut data, 0x302D, 25);
    data
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gen2Region {
    International,
    Japanese,
    Korean,
}

pub fn g2(len: usize, crystal: bool, region: Gen2Region) -> Vec<u8> {
    let mut data = vec![0u8; len];
    let (party, boxed) = match (region, crystal) {
        (Gen2Region::International, false) => (0x288A, 0x2D6C),
        (Gen2Region::International, true) => (0x2865, 0x2D10),
        (Gen2Region::Japanese, false) => (0x283E, 0x2D10),
        (Gen2Region::Japanese, true) => (0x281A, 0x2D10),
        (Gen2Region::Korean, _) => (0x28CC, 0x2DAE),
    };
    write_gb_list(&mut data, party, 2);
    write_gb_list(&mut data, boxed, 0);
    data
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gen3Kind {
    RubySapphire,
    Emerald,
    FireRedLeafGreen,
}

/// Slot 0 carries all fourteen sectors, rotated so sector 0 is not first.
pub fn g3(len: usize, kind: Gen3Kind) -> Vec<u8> {
    let mut data = vec![0u8; len];
    let mut small = 0;
    for sector in 0..G3_SECTOR_COUNT {
        let offset = sector * G3_SECTOR_SIZE;
        let id = (sector + 11) % G3_SECTOR_COUNT;
        LittleEndian::write_u16(&mut data[offset + G3_SECTOR_ID..], id as u16);
        LittleEndian::write_u32(&mut data[offset + G3_SECTOR_SIGNATURE..], G3_SIGNATURE);
        if id == 0 {
            small = offset;
        }
    }
    match kind {
        Gen3Kind::FireRedLeafGreen => LittleEndian::write_u32(&mut data[small + 0xAC..], 1),
        Gen3Kind::RubySapphire => LittleEndian::write_u32(&mut data[small + 0xAC..], 0x1234),
        Gen3Kind::Emerald => {
            LittleEndian::write_u32(&mut data[small + 0xAC..], 0x1234);
            LittleEndian::write_u32(&mut data[small + 0x900..], 0xCAFE);
        }
    }
    assert!(small + G3_SECTOR_SIZE <= G3_SLOT_SIZE);
    data
}

pub fn g4(footer: usize) -> Vec<u8> {
    let mut data = vec![0u8; SIZE_G4RAW];
    LittleEndian::write_u32(&mut data[footer - 0xC..], (footer & 0xFFFF) as u32);
    LittleEndian::write_u32(&mut data[footer - 0x8..], G4_SDK_DATE);
    data
}

pub fn g5(main_size: usize, info_length: usize) -> Vec<u8> {
    let mut data = vec![0u8; SIZE_G5RAW];
    let start = main_size - 0x100;
    for (i, byte) in data[start..start + info_length].iter_mut().enumerate() {
        *byte = i as u8 ^ 0x5A;
    }
    let crc = crc16_ccitt(&data[start..start + info_length]);
    LittleEndian::write_u16(&mut data[start + info_length + 0xE..], crc);
    data
}

pub fn beef_footer(len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    LittleEndian::write_u32(&mut data[len - 0x1F0..], BEEF);
    data
}

pub fn beluga() -> Vec<u8> {
    let mut data = vec![0u8; SIZE_G7GG];
    LittleEndian::write_u32(&mut data[BELUGA_USED_LENGTH - 0x1F0..], BEEF);
    LittleEndian::write_u16(&mut data[BELUGA_USED_LENGTH - 0x200 + 0xB0..], 0x13);
    data
}

pub fn colosseum() -> Vec<u8> {
    let mut data = vec![0u8; SIZE_G3COLO];
    for slot in 0..3 {
        LittleEndian::write_u32(&mut data[0x6000 + 0x1E000 * slot..], 0x101);
    }
    data
}

pub fn xd() -> Vec<u8> {
    let mut data = vec![0u8; SIZE_G3XD];
    LittleEndian::write_u32(&mut data[0x6000..], 0x101);
    LittleEndian::write_u32(&mut data[0x6000 + 0x28000..], 0x1_0101);
    data
}

pub fn rsbox() -> Vec<u8> {
    let mut data = vec![0u8; SIZE_G3BOX];
    for (i, byte) in data[0x2004..0x2100].iter_mut().enumerate() {
        *byte = i as u8;
    }
    let checksum = checksum16_big_invert(&data[0x2004..0x2000 + 0x1FFC]);
    BigEndian::write_u32(&mut data[0x2000..], checksum);
    data
}

pub fn battle_revolution() -> Vec<u8> {
    let mut data = vec![0u8; SIZE_G4BR];
    let keys = [0x1357, 0x2468, 0x9ABC, 0xDEF0];
    for slot in data.chunks_exact_mut(BR_SLOT_SIZE) {
        BigEndian::write_u16_into(&keys, &mut slot[BR_KEY_OFFSET..BR_DATA_OFFSET]);
        let mut body = vec![0u8; BR_SLOT_SIZE - BR_DATA_OFFSET];
        for (i, byte) in body[..0x400].iter_mut().enumerate() {
            *byte = (i * 7) as u8;
        }
        let checksum_at = BR_CHECKSUM_OFFSET - BR_DATA_OFFSET;
        let checksum = checksum32_words(&body[..checksum_at]);
        BigEndian::write_u32(&mut body[checksum_at..], checksum);
        genius_encrypt(&mut body, keys);
        slot[BR_DATA_OFFSET..].copy_from_slice(&body);
    }
    data
}

pub fn bank7() -> Vec<u8> {
    let mut data = vec![0u8; SIZE_G7BANK];
    data[0] = 1;
    data
}

/// A Gen 4 bank with its first box named, or a Gen 3 bank without.
pub fn bank4(box_named: bool) -> Vec<u8> {
    let mut data = vec![0u8; SIZE_G4BANK];
    if box_named {
        data[0x3FC00..0x3FC04].copy_from_slice(&[0x2B, 0x01, 0x2C, 0x01]);
    }
    data
}

pub fn ranch(platinum: bool) -> Vec<u8> {
    let (len, marker) = if platinum {
        (SIZE_G4RANCH_PLAT, 0x268C)
    } else {
        (SIZE_G4RANCH, 0x22AC)
    };
    let mut data = vec![0u8; len];
    BigEndian::write_u32(&mut data[marker..], 1);
    data
}

pub fn stadium(len: usize, team_size: usize, big_endian: bool) -> Vec<u8> {
    let mut data = vec![0u8; len];
    let offset = team_size - 0x10;
    if big_endian {
        BigEndian::write_u32(&mut data[offset..], STADIUM_MAGIC);
    } else {
        LittleEndian::write_u32(&mut data[offset..], STADIUM_MAGIC);
    }
    data
}

pub fn hashed(len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    let body_len = len - SHA256_LEN;
    for (i, byte) in data[..0x1000].iter_mut().enumerate() {
        *byte = (i % 251) as u8;
    }
    let hash = sha256_footer(&data[..body_len]);
    data[body_len..].copy_from_slice(&hash);
    data
}

pub fn bdsp(len: usize, revision: u32) -> Vec<u8> {
    let mut data = vec![0u8; len];
    LittleEndian::write_u32(&mut data, revision);
    data
}
