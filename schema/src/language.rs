use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Language ids as stored by Gen 3 handheld games and every later game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum LanguageId {
    Hacker = 0,
    Japanese = 1,
    #[default]
    English = 2,
    French = 3,
    Italian = 4,
    German = 5,
    Spanish = 7,
    Korean = 8,
    ChineseS = 9,
    ChineseT = 10,
}

impl LanguageId {
    pub const fn from_raw(value: u8) -> Option<LanguageId> {
        Some(match value {
            0 => LanguageId::Hacker,
            1 => LanguageId::Japanese,
            2 => LanguageId::English,
            3 => LanguageId::French,
            4 => LanguageId::Italian,
            5 => LanguageId::German,
            7 => LanguageId::Spanish,
            8 => LanguageId::Korean,
            9 => LanguageId::ChineseS,
            10 => LanguageId::ChineseT,
            _ => return None,
        })
    }

    pub const fn raw(self) -> u8 {
        self as u8
    }
}
