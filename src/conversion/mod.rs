//! Moving a record between formats.
//!
//! [`EntityConverter`] walks the static [`graph::EDGES`] table one hop at a
//! time along a shortest route, so every conversion finishes within
//! [`graph::ConversionGraph::diameter`] hops. When no official route exists
//! and the converter allows it, a best-effort record is built instead.

pub mod edges;
pub mod fields;
pub mod graph;
pub mod sanitizer;
pub mod settings;
pub mod trainer;
pub mod validation;

#[cfg(test)]
mod tests;

use log::{debug, warn};
use serde::Serialize;

use crate::entity::Entity;
use crate::errors::{ConversionError, ConvertResult};
use crate::limits::limits;
use fields::copy_all;
use graph::GRAPH;
use sanitizer::sanitize;
use schema::EntityFormat;
use settings::ConverterSettings;
use trainer::RecentTrainerCache;

/// Outcome codes reported for a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConversionResult {
    Success,
    /// Raw clone between two layouts known to be equivalent.
    SuccessBestEffortManual,
    /// Blank destination record filled field by field.
    SuccessBestEffortFieldCopy,
    IncompatibleForm,
    IncompatibleSpecies,
    IncompatibleLanguage,
    NoRoute,
}

impl ConversionResult {
    pub fn is_success(self) -> bool {
        matches!(
            self,
            ConversionResult::Success
                | ConversionResult::SuccessBestEffortManual
                | ConversionResult::SuccessBestEffortFieldCopy
        )
    }

    pub fn is_best_effort(self) -> bool {
        matches!(
            self,
            ConversionResult::SuccessBestEffortManual | ConversionResult::SuccessBestEffortFieldCopy
        )
    }
}

/// A converted record and how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted {
    pub entity: Entity,
    pub result: ConversionResult,
}

impl Converted {
    fn new(entity: Entity, result: ConversionResult) -> Self {
        Self { entity, result }
    }
}

/// Destination of a trade into a save, with its region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferTarget {
    pub format: EntityFormat,
    /// Only meaningful for Game Boy destinations.
    pub japanese: bool,
}

/// Layout pairs that share one byte layout and can be cloned directly.
const MANUAL_PAIRS: [(EntityFormat, EntityFormat); 2] = [
    (EntityFormat::PK8, EntityFormat::PB8),
    (EntityFormat::PB8, EntityFormat::PK8),
];

#[derive(Debug, Clone, Default)]
pub struct EntityConverter {
    allow_incompatible: bool,
    trainers: RecentTrainerCache,
}

impl EntityConverter {
    pub fn new(allow_incompatible: bool, trainers: RecentTrainerCache) -> Self {
        Self {
            allow_incompatible,
            trainers,
        }
    }

    pub fn from_settings(settings: &ConverterSettings) -> Self {
        let trainers = settings
            .trainer
            .clone()
            .map(RecentTrainerCache::new)
            .unwrap_or_default();
        Self::new(settings.allow_incompatible_conversion, trainers)
    }

    pub fn allow_incompatible(&self) -> bool {
        self.allow_incompatible
    }

    pub fn set_allow_incompatible(&mut self, allow: bool) {
        self.allow_incompatible = allow;
    }

    pub fn trainers(&self) -> &RecentTrainerCache {
        &self.trainers
    }

    pub fn trainers_mut(&mut self) -> &mut RecentTrainerCache {
        &mut self.trainers
    }

    pub fn is_convertible_to_format(&self, entity: &Entity, generation: u8) -> bool {
        validation::is_convertible_to_format(entity, generation)
    }

    /// Converts `source` into `destination`. The source is never modified.
    pub fn convert_to_format(&self, source: &Entity, destination: EntityFormat) -> ConvertResult<Converted> {
        let from = source.format();
        if from == destination {
            return Ok(Converted::new(source.clone(), ConversionResult::Success));
        }
        debug!("Trying to convert {} to {}", from, destination);
        validation::check_form(source)?;

        let mut entity = source.clone();
        if entity.is_egg() {
            debug!("Force hatching species {} before transfer", entity.species());
            force_hatch(&mut entity);
        }

        match self.convert_official(&entity, destination) {
            Ok(converted) => Ok(Converted::new(converted, ConversionResult::Success)),
            Err(error) if self.allow_incompatible => {
                debug!("Official route failed ({}), trying best effort", error);
                if MANUAL_PAIRS.contains(&(from, destination)) {
                    return manual_clone(source, destination);
                }
                self.convert_best_effort(&entity, destination)
            }
            Err(error) => Err(error),
        }
    }

    /// Adds the Game Boy region check in front of [`Self::convert_to_format`].
    pub fn try_make_compatible(&self, source: &Entity, target: TransferTarget) -> ConvertResult<Converted> {
        if !self.allow_incompatible && !self.is_convertible_to_format(source, target.format.generation()) {
            return Err(ConversionError::NoRoute {
                from: source.format(),
                to: target.format,
            });
        }
        if validation::is_incompatible_gameboy(target.format, target.japanese, source) {
            return Err(ConversionError::IncompatibleLanguage {
                source_format: source.format(),
            });
        }
        self.convert_to_format(source, target.format)
    }

    fn convert_official(&self, entity: &Entity, destination: EntityFormat) -> ConvertResult<Entity> {
        validation::check_species(entity, destination)?;
        let no_route = ConversionError::NoRoute {
            from: entity.format(),
            to: destination,
        };

        let mut current = entity.clone();
        for _ in 0..GRAPH.diameter() {
            if current.format() == destination {
                break;
            }
            let edge = GRAPH
                .next_edge(current.format(), destination)
                .ok_or_else(|| no_route.clone())?;
            debug!("Hop {} -> {}", edge.from, edge.to);
            current = (edge.hop)(&current, &self.trainers)?;
        }
        if current.format() != destination {
            return Err(no_route);
        }

        if !sanitize(&mut current, limits(destination)) {
            return Err(no_route);
        }
        Ok(current)
    }

    fn convert_best_effort(&self, entity: &Entity, destination: EntityFormat) -> ConvertResult<Converted> {
        let from = entity.format();
        let no_route = ConversionError::NoRoute { from, to: destination };
        let limits = limits(destination);

        // Checked on the source: formats with an internal species index
        // store unknown species as 0.
        if !limits.allows_species(entity.species()) {
            warn!(
                "Species {} exceeds the {} maximum of {}",
                entity.species(),
                destination,
                limits.max_species_id
            );
            return Err(no_route);
        }

        let mut converted = Entity::blank_with_region(destination, entity.is_japanese());
        copy_all(entity, &mut converted);
        if !sanitize(&mut converted, limits) {
            return Err(no_route);
        }
        let result = ConversionResult::SuccessBestEffortFieldCopy;
        warn!("Converted {} to {} without an official route ({:?})", from, destination, result);
        Ok(Converted::new(converted, result))
    }
}

/// Byte-for-byte copy of the untouched source into an equivalent layout.
/// No limit checks run on this path.
fn manual_clone(source: &Entity, destination: EntityFormat) -> ConvertResult<Converted> {
    let clone = source.clone_as(destination).map_err(|_| ConversionError::NoRoute {
        from: source.format(),
        to: destination,
    })?;
    let result = ConversionResult::SuccessBestEffortManual;
    warn!("Converted {} to {} without an official route ({:?})", source.format(), destination, result);
    Ok(Converted::new(clone, result))
}

/// Eggs cannot be transferred; the record hatches with base friendship and
/// no nickname.
pub fn force_hatch(entity: &mut Entity) {
    entity.set_is_egg(false);
    entity.set_is_nicknamed(false);
    entity.set_nickname("");
    entity.set_friendship(edges::BASE_FRIENDSHIP);
}
