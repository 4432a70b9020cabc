//! Checks that run before any hop.

use crate::entity::Entity;
use crate::errors::{ConversionError, ConvertResult};
use crate::limits::limits;
use crate::species::{EEVEE, PICHU, PIKACHU};
use schema::EntityFormat;

/// Species/form pairs that are frozen to the default form in their format:
/// the Spiky-eared Pichu event, cosplay Pikachu and the Let's Go starters.
pub fn check_form(entity: &Entity) -> ConvertResult<()> {
    let locked = match entity.format() {
        EntityFormat::PK4 => entity.species() == PICHU,
        EntityFormat::PK6 => entity.species() == PIKACHU,
        EntityFormat::PB7 => matches!(entity.species(), PIKACHU | EEVEE),
        _ => false,
    };
    if locked && entity.form() != 0 {
        return Err(ConversionError::IncompatibleForm {
            format: entity.format(),
            species: entity.species(),
            form: entity.form(),
        });
    }
    Ok(())
}

pub fn check_species(entity: &Entity, destination: EntityFormat) -> ConvertResult<()> {
    let max = limits(destination).max_species_id;
    if entity.species() > max {
        return Err(ConversionError::IncompatibleSpecies {
            destination,
            species: entity.species(),
            max,
        });
    }
    Ok(())
}

/// Whether the official tools can move a record to `generation` at all.
/// Gen 3 and later only move forward; Game Boy records skip Gens 3 to 6.
pub fn is_convertible_to_format(entity: &Entity, generation: u8) -> bool {
    let source = entity.format().generation();
    if source >= 3 && source > generation {
        return false;
    }
    !(source <= 2 && generation > 2 && generation < 7)
}

/// Game Boy games only trade within their own region. Stadium 2 storage is
/// region-neutral on both ends.
pub fn is_incompatible_gameboy(target: EntityFormat, target_japanese: bool, entity: &Entity) -> bool {
    if target.generation() > 2 || target == EntityFormat::SK2 {
        return false;
    }
    entity
        .gameboy_region()
        .is_some_and(|japanese| japanese != target_japanese)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn entity(format: EntityFormat, species: u16, form: u8) -> Entity {
        let mut entity = Entity::blank(format);
        entity.set_species(species);
        entity.set_form(form);
        entity
    }

    #[rstest]
    #[case("spiky-eared pichu", EntityFormat::PK4, PICHU, 1, false)]
    #[case("plain pichu", EntityFormat::PK4, PICHU, 0, true)]
    #[case("cosplay pikachu", EntityFormat::PK6, PIKACHU, 3, false)]
    #[case("partner eevee", EntityFormat::PB7, EEVEE, 1, false)]
    #[case("alolan form elsewhere", EntityFormat::PK7, PIKACHU, 1, true)]
    fn test_check_form(
        #[case] desc: &str,
        #[case] format: EntityFormat,
        #[case] species: u16,
        #[case] form: u8,
        #[case] allowed: bool,
    ) {
        let result = check_form(&entity(format, species, form));
        assert_eq!(result.is_ok(), allowed, "{}", desc);
    }

    #[test]
    fn test_check_species_reports_limit() {
        let totodile = entity(EntityFormat::PK2, 158, 0);
        assert_eq!(
            check_species(&totodile, EntityFormat::PK1),
            Err(ConversionError::IncompatibleSpecies {
                destination: EntityFormat::PK1,
                species: 158,
                max: 151,
            })
        );
        assert_eq!(check_species(&totodile, EntityFormat::PK7), Ok(()));
    }

    #[rstest]
    #[case("gen 3 forward", EntityFormat::PK3, 5, true)]
    #[case("gen 5 backward", EntityFormat::PK5, 4, false)]
    #[case("gen 1 to gen 4", EntityFormat::PK1, 4, false)]
    #[case("gen 2 to gen 7", EntityFormat::PK2, 7, true)]
    #[case("gen 2 to gen 1", EntityFormat::PK2, 1, true)]
    fn test_is_convertible_to_format(
        #[case] desc: &str,
        #[case] format: EntityFormat,
        #[case] generation: u8,
        #[case] expected: bool,
    ) {
        let record = Entity::blank(format);
        assert_eq!(is_convertible_to_format(&record, generation), expected, "{}", desc);
    }

    #[test]
    fn test_gameboy_region_mismatch() {
        let japanese = Entity::blank_with_region(EntityFormat::PK1, true);
        assert!(is_incompatible_gameboy(EntityFormat::PK2, false, &japanese));
        assert!(!is_incompatible_gameboy(EntityFormat::PK2, true, &japanese));
        assert!(!is_incompatible_gameboy(EntityFormat::SK2, false, &japanese));
        assert!(!is_incompatible_gameboy(EntityFormat::PK7, false, &japanese));

        let stadium = Entity::blank(EntityFormat::SK2);
        assert!(!is_incompatible_gameboy(EntityFormat::PK2, true, &stadium));
    }
}
