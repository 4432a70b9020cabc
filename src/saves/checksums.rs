//! Checksums and ciphers used by the structural probes.

use byteorder::{BigEndian, ByteOrder};
use sha2::{Digest, Sha256};

/// CRC-16/CCITT with initial value 0xFFFF and no final xor.
pub fn crc16_ccitt(data: &[u8]) -> u16 {
    let mut crc: u16 = 0xFFFF;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }
    crc
}

/// Sum of big-endian words in the high half, its complement against 0xF004
/// in the low half.
pub fn checksum16_big_invert(data: &[u8]) -> u32 {
    let chk = data
        .chunks_exact(2)
        .fold(0u16, |acc, pair| acc.wrapping_add(BigEndian::read_u16(pair)));
    ((chk as u32) << 16) | (0xF004u16.wrapping_sub(chk) as u32)
}

/// Wrapping sum of big-endian words.
pub fn checksum32_words(data: &[u8]) -> u32 {
    data.chunks_exact(2)
        .fold(0u32, |acc, pair| acc.wrapping_add(BigEndian::read_u16(pair) as u32))
}

pub const SHA256_LEN: usize = 0x20;

/// Hash-footer saves end with the SHA-256 of everything before it.
pub fn is_sha256_footer_valid(data: &[u8]) -> bool {
    if data.len() < SHA256_LEN {
        return false;
    }
    let (body, stored) = data.split_at(data.len() - SHA256_LEN);
    Sha256::digest(body).as_slice() == stored
}

pub fn sha256_footer(body: &[u8]) -> [u8; SHA256_LEN] {
    Sha256::digest(body).into()
}

/// Stream cipher over big-endian words, four rolling keys per 8-byte block.
pub fn genius_decrypt(data: &mut [u8], keys: [u16; 4]) {
    genius_apply(data, keys, u16::wrapping_sub);
}

pub fn genius_encrypt(data: &mut [u8], keys: [u16; 4]) {
    genius_apply(data, keys, u16::wrapping_add);
}

fn genius_apply(data: &mut [u8], mut keys: [u16; 4], op: fn(u16, u16) -> u16) {
    for block in data.chunks_exact_mut(8) {
        for (i, key) in keys.iter().enumerate() {
            let word = &mut block[i * 2..i * 2 + 2];
            let value = op(BigEndian::read_u16(word), *key);
            BigEndian::write_u16(word, value);
        }
        advance_keys(&mut keys);
    }
}

fn advance_keys(keys: &mut [u16; 4]) {
    keys[0] = keys[0].wrapping_add(0x43);
    keys[1] = keys[1].wrapping_add(0x29);
    keys[2] = keys[2].wrapping_add(0x17);
    keys[3] = keys[3].wrapping_add(0x13);
    let [k0, k1, k2, k3] = *keys;
    // Transpose the nibbles of the four keys.
    *keys = [
        (k0 & 0xF) | ((k1 << 4) & 0xF0) | ((k2 << 8) & 0xF00) | ((k3 << 12) & 0xF000),
        ((k0 >> 4) & 0xF) | (k1 & 0xF0) | ((k2 << 4) & 0xF00) | ((k3 << 8) & 0xF000),
        ((k0 >> 8) & 0xF) | ((k1 >> 4) & 0xF0) | (k2 & 0xF00) | ((k3 << 4) & 0xF000),
        ((k0 >> 12) & 0xF) | ((k1 >> 8) & 0xF0) | ((k2 >> 4) & 0xF00) | (k3 & 0xF000),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_crc16_check_value() {
        assert_eq!(crc16_ccitt(b"123456789"), 0x29B1);
        assert_eq!(crc16_ccitt(&[]), 0xFFFF);
    }

    #[test]
    fn test_checksum16_big_invert() {
        assert_eq!(checksum16_big_invert(&[0, 0]), 0x0000_F004);
        assert_eq!(checksum16_big_invert(&[0x00, 0x04, 0x00, 0x01]), 0x0005_EFFF);
    }

    #[test]
    fn test_genius_round_trip() {
        let plain: Vec<u8> = (0..64u8).collect();
        let mut data = plain.clone();
        let keys = [0x1234, 0xABCD, 0x0F0F, 0x8001];
        genius_encrypt(&mut data, keys);
        assert_ne!(data, plain);
        genius_decrypt(&mut data, keys);
        assert_eq!(data, plain);
    }

    #[test]
    fn test_sha256_footer() {
        let mut data = vec![7u8; 0x40];
        let hash = sha256_footer(&data);
        data.extend_from_slice(&hash);
        assert!(is_sha256_footer_valid(&data));
        data[0] ^= 1;
        assert!(!is_sha256_footer_valid(&data));
    }
}
