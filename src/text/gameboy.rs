pub const TERMINATOR: u8 = 0x50;

const SPACE: u8 = 0x7F;
const DIGITS: u8 = 0xF6;

// Katakana block shared by the Japanese Red/Green/Blue and Gold/Silver charsets.
const KATAKANA: [char; 43] = [
    'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ', 'タ',
    'チ', 'ツ', 'テ', 'ト', 'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', 'ハ', 'ヒ', 'フ', 'ホ', 'マ', 'ミ', 'ム',
    'メ', 'モ', 'ヤ', 'ユ', 'ヨ', 'ラ', 'ル', 'レ', 'ロ', 'ワ', 'ヲ',
];

const PUNCTUATION: [(u8, char); 16] = [
    (0x9A, '('),
    (0x9B, ')'),
    (0x9C, ':'),
    (0x9D, ';'),
    (0x9E, '['),
    (0x9F, ']'),
    (0xE3, '-'),
    (0xE6, '?'),
    (0xE7, '!'),
    (0xE8, '.'),
    (0xEF, '♂'),
    (0xF1, '×'),
    (0xF3, '/'),
    (0xF4, ','),
    (0xF5, '♀'),
    (0xE0, '\''),
];

pub fn decode_char(byte: u8, japanese: bool) -> Option<char> {
    match byte {
        SPACE => Some(' '),
        DIGITS..=0xFF => Some((b'0' + (byte - DIGITS)) as char),
        0x80..=0xAA if japanese => Some(KATAKANA[(byte - 0x80) as usize]),
        0x80..=0x99 => Some((b'A' + (byte - 0x80)) as char),
        0xA0..=0xB9 if !japanese => Some((b'a' + (byte - 0xA0)) as char),
        _ => PUNCTUATION
            .iter()
            .find(|(code, _)| *code == byte)
            .map(|(_, c)| *c),
    }
}

pub fn encode_char(c: char, japanese: bool) -> Option<u8> {
    match c {
        ' ' => Some(SPACE),
        '0'..='9' => Some(DIGITS + (c as u8 - b'0')),
        'A'..='Z' if !japanese => Some(0x80 + (c as u8 - b'A')),
        'a'..='z' if !japanese => Some(0xA0 + (c as u8 - b'a')),
        _ if japanese && KATAKANA.contains(&c) => KATAKANA
            .iter()
            .position(|&k| k == c)
            .map(|i| 0x80 + i as u8),
        _ => PUNCTUATION
            .iter()
            .find(|(_, ch)| *ch == c)
            .map(|(code, _)| *code),
    }
}
