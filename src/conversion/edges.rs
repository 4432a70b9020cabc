//! Single-hop transfers. Every hop builds a new record in its destination
//! format and leaves the source untouched.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};

use super::fields::{copy_all, copy_except};
use super::trainer::RecentTrainerCache;
use crate::entity::codes::version;
use crate::entity::{shiny_xor, Entity, STAT_COUNT};
use crate::errors::{ConversionError, ConvertResult};
use crate::species::{CELEBI, MEW};
use schema::{EntityFormat, LanguageId};

pub type HopFn = fn(&Entity, &RecentTrainerCache) -> ConvertResult<Entity>;

/// Met locations stamped by the official transfer tools.
pub mod location {
    pub const PAL_PARK: u16 = 55;
    pub const POKE_TRANSFER: u16 = 30001;
    pub const VIRTUAL_CONSOLE_GEN1: u16 = 30013;
    pub const VIRTUAL_CONSOLE_GEN2: u16 = 30017;
}

pub const POKE_BALL: u8 = 4;
pub const BASE_FRIENDSHIP: u8 = 70;
const MAX_IV: u8 = 31;
const HIDDEN_ABILITY: u8 = 4;

fn retag(source: &Entity, format: EntityFormat) -> ConvertResult<Entity> {
    source.clone_as(format).map_err(|_| ConversionError::NoRoute {
        from: source.format(),
        to: format,
    })
}

// --- Game Boy ---

/// Gen 1 catch rate and Gen 2 held item share a byte; trading between the
/// generations reinterprets it.
pub fn pk1_to_pk2(source: &Entity, _: &RecentTrainerCache) -> ConvertResult<Entity> {
    let mut dest = Entity::blank_with_region(EntityFormat::PK2, source.is_japanese());
    copy_except(source, &mut dest, &["held_item", "friendship"]);
    dest.set_held_item(source.catch_rate() as u16);
    dest.set_friendship(BASE_FRIENDSHIP);
    Ok(dest)
}

pub fn pk2_to_pk1(source: &Entity, _: &RecentTrainerCache) -> ConvertResult<Entity> {
    let max = crate::limits::limits(EntityFormat::PK1).max_species_id;
    if source.species() > max {
        return Err(ConversionError::IncompatibleSpecies {
            destination: EntityFormat::PK1,
            species: source.species(),
            max,
        });
    }
    let mut dest = Entity::blank_with_region(EntityFormat::PK1, source.is_japanese());
    copy_except(source, &mut dest, &["held_item"]);
    dest.set_catch_rate(source.held_item() as u8);
    Ok(dest)
}

pub fn pk2_to_sk2(source: &Entity, _: &RecentTrainerCache) -> ConvertResult<Entity> {
    let mut dest = Entity::blank(EntityFormat::SK2);
    copy_all(source, &mut dest);
    Ok(dest)
}

/// Stadium 2 records carry no region; the receiving trainer decides.
pub fn sk2_to_pk2(source: &Entity, trainers: &RecentTrainerCache) -> ConvertResult<Entity> {
    let japanese = trainers.language() == LanguageId::Japanese;
    let mut dest = Entity::blank_with_region(EntityFormat::PK2, japanese);
    copy_all(source, &mut dest);
    Ok(dest)
}

/// Virtual Console transfer into Sun/Moon.
pub fn gameboy_to_pk7(source: &Entity, trainers: &RecentTrainerCache) -> ConvertResult<Entity> {
    let mut rng = StdRng::seed_from_u64(transfer_seed(source));
    let mut dest = Entity::blank(EntityFormat::PK7);

    dest.set_species(source.species());
    dest.set_form(source.form());
    dest.set_tid(source.tid());
    dest.set_sid(0);
    dest.set_exp(source.exp());
    dest.set_moves(source.moves());
    dest.set_friendship(BASE_FRIENDSHIP);
    dest.set_ability_number(HIDDEN_ABILITY);
    dest.set_nature((source.exp() % 25) as u8);

    dest.set_encryption_constant(rng.random());
    let mut pid: u32 = rng.random();
    if source.is_shiny() {
        pid = force_shiny(pid, dest.tid(), dest.sid());
    } else if shiny_xor(pid, dest.tid(), dest.sid()) < 16 {
        pid ^= 0x1000_0000;
    }
    dest.set_pid(pid);
    dest.set_ivs(virtual_console_ivs(&mut rng, source.species()));

    let gen1 = source.format() == EntityFormat::PK1;
    dest.set_met_location(if gen1 {
        location::VIRTUAL_CONSOLE_GEN1
    } else {
        location::VIRTUAL_CONSOLE_GEN2
    });
    dest.set_met_level(source.level());
    dest.set_ball(POKE_BALL);
    dest.set_version(match (gen1, source.met_location()) {
        (true, _) => version::RD,
        (false, 0) => version::GD,
        (false, _) => version::C,
    });
    dest.set_ot_gender(source.ot_gender());

    let language = if source.is_japanese() {
        LanguageId::Japanese
    } else if trainers.language() == LanguageId::Japanese {
        LanguageId::English
    } else {
        trainers.language()
    };
    dest.set_language(language.raw());
    dest.set_ot_name(&source.ot_name());
    let nickname = source.nickname();
    dest.set_is_nicknamed(!nickname.is_empty());
    dest.set_nickname(&nickname);

    trainers.apply_handler(&mut dest);
    trainers.apply_console_region(&mut dest);
    trainers.apply_first_country_region(&mut dest);
    Ok(dest)
}

/// Same record, same random values: the seed comes from the source bytes.
fn transfer_seed(source: &Entity) -> u64 {
    let digest = Sha256::digest(source.data());
    let mut seed = [0u8; 8];
    seed.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(seed)
}

/// Three perfect IVs, five for the mythicals.
fn virtual_console_ivs(rng: &mut StdRng, species: u16) -> [u8; STAT_COUNT] {
    let flawless = if species == MEW || species == CELEBI { 5 } else { 3 };
    let mut ivs: [u8; STAT_COUNT] = std::array::from_fn(|_| rng.random_range(0..=MAX_IV));
    for stat in index::sample(rng, STAT_COUNT, flawless).iter() {
        ivs[stat] = MAX_IV;
    }
    ivs
}

/// Keeps the low half of `pid` and picks the high half that makes it shiny.
pub fn force_shiny(pid: u32, tid: u16, sid: u16) -> u32 {
    let low = pid & 0xFFFF;
    let high = (low ^ tid as u32 ^ sid as u32) & 0xFFFF;
    (high << 16) | low
}

// --- Gen 3 and its GameCube storage ---

/// Pal Park.
pub fn pk3_to_pk4(source: &Entity, _: &RecentTrainerCache) -> ConvertResult<Entity> {
    let mut dest = Entity::blank(EntityFormat::PK4);
    copy_except(
        source,
        &mut dest,
        &["met_location", "egg_location", "friendship", "is_nicknamed"],
    );
    dest.set_form(source.form());
    dest.set_met_location(location::PAL_PARK);
    dest.set_egg_location(0);
    dest.set_friendship(BASE_FRIENDSHIP);
    Ok(dest)
}

pub fn pk3_to_ck3(source: &Entity, _: &RecentTrainerCache) -> ConvertResult<Entity> {
    field_transfer(source, EntityFormat::CK3)
}

pub fn pk3_to_xk3(source: &Entity, _: &RecentTrainerCache) -> ConvertResult<Entity> {
    field_transfer(source, EntityFormat::XK3)
}

pub fn gamecube_to_pk3(source: &Entity, _: &RecentTrainerCache) -> ConvertResult<Entity> {
    field_transfer(source, EntityFormat::PK3)
}

// --- Gen 4 and Battle Revolution ---

pub fn pk4_to_bk4(source: &Entity, _: &RecentTrainerCache) -> ConvertResult<Entity> {
    field_transfer(source, EntityFormat::BK4)
}

pub fn bk4_to_pk4(source: &Entity, _: &RecentTrainerCache) -> ConvertResult<Entity> {
    field_transfer(source, EntityFormat::PK4)
}

/// Poké Transfer into Black/White.
pub fn pk4_to_pk5(source: &Entity, _: &RecentTrainerCache) -> ConvertResult<Entity> {
    let mut dest = Entity::blank(EntityFormat::PK5);
    copy_except(source, &mut dest, &["met_location", "friendship"]);
    dest.set_met_location(location::POKE_TRANSFER);
    dest.set_friendship(BASE_FRIENDSHIP);
    if source.alt_ball() != 0 {
        dest.set_ball(source.alt_ball());
    }
    dest.set_hidden_ability(false);
    Ok(dest)
}

// --- 3DS and later ---

/// Poké Transporter into X/Y. Gen 6 widened the shiny window, so a PID that
/// was not shiny in Gen 5 but would be now gets its top bit flipped.
pub fn pk5_to_pk6(source: &Entity, trainers: &RecentTrainerCache) -> ConvertResult<Entity> {
    let mut dest = Entity::blank(EntityFormat::PK6);
    copy_all(source, &mut dest);

    let pid = source.pid();
    dest.set_encryption_constant(pid);
    let xor = shiny_xor(pid, source.tid(), source.sid());
    if (8..16).contains(&xor) {
        dest.set_pid(pid ^ 0x8000_0000);
    }
    dest.set_ability_number(if source.hidden_ability() {
        HIDDEN_ABILITY
    } else {
        1 << ((pid >> 16) & 1)
    });

    trainers.apply_handler(&mut dest);
    trainers.apply_console_region(&mut dest);
    trainers.apply_first_country_region(&mut dest);
    Ok(dest)
}

/// Pokémon Bank stores Gen 6 records unchanged for Gen 7.
pub fn pk6_to_pk7(source: &Entity, _: &RecentTrainerCache) -> ConvertResult<Entity> {
    retag(source, EntityFormat::PK7)
}

/// Pokémon HOME.
pub fn home_to_pk8(source: &Entity, trainers: &RecentTrainerCache) -> ConvertResult<Entity> {
    let mut dest = Entity::blank(EntityFormat::PK8);
    copy_all(source, &mut dest);
    trainers.apply_handler(&mut dest);
    Ok(dest)
}

/// Luminescent keeps the retail layout; only the handler changes.
pub fn pb8_to_pb8lumi(source: &Entity, trainers: &RecentTrainerCache) -> ConvertResult<Entity> {
    let mut dest = retag(source, EntityFormat::PB8LUMI)?;
    trainers.apply_handler(&mut dest);
    Ok(dest)
}

fn field_transfer(source: &Entity, format: EntityFormat) -> ConvertResult<Entity> {
    let mut dest = Entity::blank(format);
    copy_all(source, &mut dest);
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_force_shiny_zeroes_the_xor() {
        for pid in [0u32, 0x1234_5678, 0xFFFF_FFFF] {
            let shiny = force_shiny(pid, 12345, 54321);
            assert_eq!(shiny_xor(shiny, 12345, 54321), 0);
            assert_eq!(shiny & 0xFFFF, pid & 0xFFFF);
        }
    }

    #[test]
    fn test_virtual_console_ivs_have_perfect_stats() {
        let mut rng = StdRng::seed_from_u64(7);
        let ivs = virtual_console_ivs(&mut rng, 25);
        assert!(ivs.iter().filter(|&&iv| iv == MAX_IV).count() >= 3);
        let ivs = virtual_console_ivs(&mut rng, MEW);
        assert!(ivs.iter().filter(|&&iv| iv == MAX_IV).count() >= 5);
        assert!(ivs.iter().all(|&iv| iv <= MAX_IV));
    }

    #[test]
    fn test_transporter_flips_newly_shiny_pid() {
        let trainers = RecentTrainerCache::default();
        let mut pk5 = Entity::blank(EntityFormat::PK5);
        pk5.set_species(25);
        pk5.set_tid(0);
        pk5.set_sid(0);
        // xor of the halves is 10: not shiny in Gen 5, shiny in Gen 6.
        pk5.set_pid(0x0000_000A);
        assert!(!pk5.is_shiny());

        let pk6 = pk5_to_pk6(&pk5, &trainers).expect("transporter hop");
        assert_eq!(pk6.encryption_constant(), 0x0000_000A);
        assert_eq!(pk6.pid(), 0x8000_000A);
        assert!(!pk6.is_shiny());
    }

    #[test]
    fn test_bank_hop_keeps_bytes() {
        let mut pk6 = Entity::blank(EntityFormat::PK6);
        pk6.set_species(658);
        let pk7 = pk6_to_pk7(&pk6, &RecentTrainerCache::default()).expect("bank hop");
        assert_eq!(pk7.format(), EntityFormat::PK7);
        assert_eq!(pk7.data(), pk6.data());
    }
}
