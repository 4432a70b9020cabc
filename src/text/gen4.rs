pub const TERMINATOR: u16 = 0xFFFF;

const HIRAGANA: &str = "ぁあぃいぅうぇえぉおかがきぎくぐけげこごさざしじすずせぜそぞただちぢっつづてでとどなにぬねのはばぱひびぴふぶぷへべぺほぼぽまみむめもゃやゅゆょよらりるれろわをん";
const KATAKANA: &str = "ァアィイゥウェエォオカガキギクグケゲコゴサザシジスズセゼソゾタダチヂッツヅテデトドナニヌネノハバパヒビピフブプヘベペホボポマミムメモャヤュユョヨラリルレロワヲン";
const HIRAGANA_START: u16 = 0x0002;
const KATAKANA_START: u16 = 0x0052;

const WIDE_DIGITS: u16 = 0x00A2;
const WIDE_UPPER: u16 = 0x00AC;
const WIDE_LOWER: u16 = 0x00C6;

const DIGITS: u16 = 0x0121;
const UPPER: u16 = 0x012B;
const LOWER: u16 = 0x0145;

// U+00C0..=U+00FF in order.
const LATIN1: u16 = 0x0163;
const LATIN1_END: u16 = LATIN1 + 0x3F;

const TABLE: [(u16, char); 27] = [
    (0x0001, '　'),
    (0x00E1, '！'),
    (0x00E2, '？'),
    (0x00E3, '、'),
    (0x00E4, '。'),
    (0x00E5, '…'),
    (0x00E6, '・'),
    (0x00E7, '／'),
    (0x00E8, '「'),
    (0x00E9, '」'),
    (0x00EA, '『'),
    (0x00EB, '』'),
    (0x00EC, '（'),
    (0x00ED, '）'),
    (0x00EE, '♂'),
    (0x00EF, '♀'),
    (0x00F0, '＋'),
    (0x00F1, 'ー'),
    (0x01DE, ' '),
    (0x01AB, '!'),
    (0x01AC, '?'),
    (0x01AD, ','),
    (0x01AE, '.'),
    (0x01BE, '-'),
    (0x01BB, '♂'),
    (0x01BC, '♀'),
    (0x01B1, '/'),
];

pub fn decode_char(unit: u16) -> Option<char> {
    match unit {
        HIRAGANA_START..=0x0051 => HIRAGANA.chars().nth((unit - HIRAGANA_START) as usize),
        KATAKANA_START..=0x00A1 => KATAKANA.chars().nth((unit - KATAKANA_START) as usize),
        WIDE_DIGITS..=0x00AB => char::from_u32('０' as u32 + (unit - WIDE_DIGITS) as u32),
        WIDE_UPPER..=0x00C5 => char::from_u32('Ａ' as u32 + (unit - WIDE_UPPER) as u32),
        WIDE_LOWER..=0x00DF => char::from_u32('ａ' as u32 + (unit - WIDE_LOWER) as u32),
        DIGITS..=0x012A => char::from_u32('0' as u32 + (unit - DIGITS) as u32),
        UPPER..=0x0144 => char::from_u32('A' as u32 + (unit - UPPER) as u32),
        LOWER..=0x015E => char::from_u32('a' as u32 + (unit - LOWER) as u32),
        LATIN1..=LATIN1_END => char::from_u32(0xC0 + (unit - LATIN1) as u32),
        _ => TABLE.iter().find(|(code, _)| *code == unit).map(|(_, c)| *c),
    }
}

/// The first matching table entry wins, so the half-width gender signs
/// encode to their full-width slots.
pub fn encode_char(c: char) -> Option<u16> {
    if let Some(i) = HIRAGANA.chars().position(|k| k == c) {
        return Some(HIRAGANA_START + i as u16);
    }
    if let Some(i) = KATAKANA.chars().position(|k| k == c) {
        return Some(KATAKANA_START + i as u16);
    }
    match c {
        '０'..='９' => Some(WIDE_DIGITS + (c as u32 - '０' as u32) as u16),
        'Ａ'..='Ｚ' => Some(WIDE_UPPER + (c as u32 - 'Ａ' as u32) as u16),
        'ａ'..='ｚ' => Some(WIDE_LOWER + (c as u32 - 'ａ' as u32) as u16),
        '0'..='9' => Some(DIGITS + (c as u16 - '0' as u16)),
        'A'..='Z' => Some(UPPER + (c as u16 - 'A' as u16)),
        'a'..='z' => Some(LOWER + (c as u16 - 'a' as u16)),
        '\u{C0}'..='\u{FF}' => Some(LATIN1 + (c as u32 - 0xC0) as u16),
        _ => TABLE.iter().find(|(_, ch)| *ch == c).map(|(code, _)| *code),
    }
}
