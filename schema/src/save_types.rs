use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Save container layouts the classifier can recognize.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, IntoStaticStr,
)]
pub enum SaveType {
    /// Red/Blue/Yellow (all regions).
    RBY,
    /// Gold/Silver.
    GS,
    /// Crystal.
    C,
    /// Ruby/Sapphire.
    RS,
    /// Emerald.
    E,
    /// FireRed/LeafGreen.
    FRLG,
    /// Diamond/Pearl.
    DP,
    /// Platinum.
    Pt,
    /// HeartGold/SoulSilver.
    HGSS,
    /// Black/White.
    BW,
    /// Black 2/White 2.
    B2W2,
    /// X/Y.
    XY,
    /// Omega Ruby/Alpha Sapphire.
    ORAS,
    /// Omega Ruby/Alpha Sapphire special demo.
    ORASDEMO,
    /// Sun/Moon.
    SM,
    /// Ultra Sun/Ultra Moon.
    USUM,
    /// Let's Go Pikachu/Eevee.
    GG,
    /// Sword/Shield.
    SWSH,
    /// Brilliant Diamond/Shining Pearl.
    BDSP,
    /// Brilliant Diamond/Shining Pearl, Luminescent hack.
    BDSPLUMI,
    /// Legends: Arceus.
    PLA,
    /// Colosseum.
    COLO,
    /// XD: Gale of Darkness.
    XD,
    /// Pokémon Box Ruby & Sapphire.
    RSBOX,
    /// Battle Revolution.
    BATREV,
    /// Stadium 2.
    Stadium2,
    /// Stadium (international).
    Stadium,
    /// Stadium (Japan).
    StadiumJ,
    /// Bank storage holding Gen 3 records.
    Bank3,
    /// Pokémon Bank for Gen 4 records (pokestock).
    Bank4,
    /// Pokémon Bank for Gen 6/7 records.
    Bank7,
    /// My Pokémon Ranch.
    Ranch4,
}

impl fmt::Display for SaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &'static str = self.into();
        f.write_str(name)
    }
}
