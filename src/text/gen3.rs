pub const TERMINATOR: u8 = 0xFF;

const DIGITS: u8 = 0xA1;
const UPPER: u8 = 0xBB;
const LOWER: u8 = 0xD5;

// 0x01..=0x50 hiragana, 0x51..=0xA0 katakana, both in table order.
const HIRAGANA: &str = "あいうえおかきくけこさしすせそたちつてとなにぬねのはひふへほまみむめもやゆよらりるれろわをんぁぃぅぇぉゃゅょがぎぐげござじずぜぞだぢづでどばびぶべぼぱぴぷぺぽっ";
const KATAKANA: &str = "アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲンァィゥェォャュョガギグゲゴザジズゼゾダヂヅデドバビブベボパピプペポッ";
const KANA_START: u8 = 0x01;
const KANA_LEN: u8 = 80;

const JAPANESE_SYMBOLS: [(u8, char); 17] = [
    (0x00, '　'),
    (0xAB, '！'),
    (0xAC, '？'),
    (0xAD, '。'),
    (0xAE, 'ー'),
    (0xAF, '・'),
    (0xB0, '‥'),
    (0xB1, '『'),
    (0xB2, '』'),
    (0xB3, '「'),
    (0xB4, '」'),
    (0xB5, '♂'),
    (0xB6, '♀'),
    (0xB7, '円'),
    (0xB8, '．'),
    (0xB9, '×'),
    (0xBA, '／'),
];

const INTERNATIONAL_SYMBOLS: [(u8, char); 75] = [
    (0x00, ' '),
    (0x01, 'À'),
    (0x02, 'Á'),
    (0x03, 'Â'),
    (0x04, 'Ç'),
    (0x05, 'È'),
    (0x06, 'É'),
    (0x07, 'Ê'),
    (0x08, 'Ë'),
    (0x09, 'Ì'),
    (0x0B, 'Î'),
    (0x0C, 'Ï'),
    (0x0D, 'Ò'),
    (0x0E, 'Ó'),
    (0x0F, 'Ô'),
    (0x10, 'Œ'),
    (0x11, 'Ù'),
    (0x12, 'Ú'),
    (0x13, 'Û'),
    (0x14, 'Ñ'),
    (0x15, 'ß'),
    (0x16, 'à'),
    (0x17, 'á'),
    (0x19, 'ç'),
    (0x1A, 'è'),
    (0x1B, 'é'),
    (0x1C, 'ê'),
    (0x1D, 'ë'),
    (0x1E, 'ì'),
    (0x20, 'î'),
    (0x21, 'ï'),
    (0x22, 'ò'),
    (0x23, 'ó'),
    (0x24, 'ô'),
    (0x25, 'œ'),
    (0x26, 'ù'),
    (0x27, 'ú'),
    (0x28, 'û'),
    (0x29, 'ñ'),
    (0x2A, 'º'),
    (0x2B, 'ª'),
    (0x2D, '&'),
    (0x2E, '+'),
    (0x35, '='),
    (0x51, '¿'),
    (0x52, '¡'),
    (0x5A, 'Í'),
    (0x5B, '%'),
    (0x5C, '('),
    (0x5D, ')'),
    (0x68, 'â'),
    (0x6F, 'í'),
    (0xAB, '!'),
    (0xAC, '?'),
    (0xAD, '.'),
    (0xAE, '-'),
    (0xAF, '·'),
    (0xB0, '…'),
    (0xB1, '“'),
    (0xB2, '”'),
    (0xB3, '‘'),
    (0xB4, '’'),
    (0xB5, '♂'),
    (0xB6, '♀'),
    (0xB7, '$'),
    (0xB8, ','),
    (0xB9, '×'),
    (0xBA, '/'),
    (0xF0, ':'),
    (0xF1, 'Ä'),
    (0xF2, 'Ö'),
    (0xF3, 'Ü'),
    (0xF4, 'ä'),
    (0xF5, 'ö'),
    (0xF6, 'ü'),
];

/// Japanese cartridges use the kana table and full-width Latin glyphs in
/// the same slots the international table gives to ASCII.
pub fn decode_char(byte: u8, japanese: bool) -> Option<char> {
    if japanese {
        return match byte {
            KANA_START..=0x50 => HIRAGANA.chars().nth((byte - KANA_START) as usize),
            0x51..=0xA0 => KATAKANA.chars().nth((byte - KANA_START - KANA_LEN) as usize),
            DIGITS..=0xAA => char::from_u32('０' as u32 + (byte - DIGITS) as u32),
            UPPER..=0xD4 => char::from_u32('Ａ' as u32 + (byte - UPPER) as u32),
            LOWER..=0xEE => char::from_u32('ａ' as u32 + (byte - LOWER) as u32),
            _ => lookup(&JAPANESE_SYMBOLS, byte),
        };
    }
    match byte {
        DIGITS..=0xAA => Some((b'0' + (byte - DIGITS)) as char),
        UPPER..=0xD4 => Some((b'A' + (byte - UPPER)) as char),
        LOWER..=0xEE => Some((b'a' + (byte - LOWER)) as char),
        _ => lookup(&INTERNATIONAL_SYMBOLS, byte),
    }
}

/// Half-width ASCII is accepted for Japanese records and stored in the
/// full-width slots.
pub fn encode_char(c: char, japanese: bool) -> Option<u8> {
    match c {
        '0'..='9' => Some(DIGITS + (c as u8 - b'0')),
        'A'..='Z' => Some(UPPER + (c as u8 - b'A')),
        'a'..='z' => Some(LOWER + (c as u8 - b'a')),
        _ if japanese => encode_japanese(c),
        _ => reverse(&INTERNATIONAL_SYMBOLS, c),
    }
}

fn encode_japanese(c: char) -> Option<u8> {
    if let Some(i) = HIRAGANA.chars().position(|k| k == c) {
        return Some(KANA_START + i as u8);
    }
    if let Some(i) = KATAKANA.chars().position(|k| k == c) {
        return Some(KANA_START + KANA_LEN + i as u8);
    }
    match c {
        '０'..='９' => Some(DIGITS + (c as u32 - '０' as u32) as u8),
        'Ａ'..='Ｚ' => Some(UPPER + (c as u32 - 'Ａ' as u32) as u8),
        'ａ'..='ｚ' => Some(LOWER + (c as u32 - 'ａ' as u32) as u8),
        ' ' => Some(0x00),
        _ => reverse(&JAPANESE_SYMBOLS, c),
    }
}

fn lookup(table: &[(u8, char)], byte: u8) -> Option<char> {
    table.iter().find(|(code, _)| *code == byte).map(|(_, c)| *c)
}

fn reverse(table: &[(u8, char)], c: char) -> Option<u8> {
    table.iter().find(|(_, ch)| *ch == c).map(|(code, _)| *code)
}
