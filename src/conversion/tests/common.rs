use crate::conversion::trainer::{RecentTrainerCache, TrainerContext};
use crate::conversion::EntityConverter;
use crate::entity::{Entity, STAT_COUNT};
use schema::EntityFormat;

/// A builder for test records with values every format can hold.
///
/// # Example
/// ```
/// let pikachu = TestEntityBuilder::new(EntityFormat::PK3, 25)
///     .with_moves([84, 45, 0, 0])
///     .build();
/// ```
pub struct TestEntityBuilder {
    format: EntityFormat,
    species: u16,
    japanese: bool,
    moves: [u16; 4],
    ivs: [u8; STAT_COUNT],
    pid: u32,
    egg: bool,
    form: u8,
}

impl TestEntityBuilder {
    pub fn new(format: EntityFormat, species: u16) -> Self {
        Self {
            format,
            species,
            japanese: false,
            moves: [33, 45, 0, 0],
            ivs: [12, 10, 9, 8, 7, 7],
            pid: 0x1234_5678,
            egg: false,
            form: 0,
        }
    }

    pub fn japanese(mut self) -> Self {
        self.japanese = true;
        self
    }

    pub fn with_moves(mut self, moves: [u16; 4]) -> Self {
        self.moves = moves;
        self
    }

    pub fn with_ivs(mut self, ivs: [u8; STAT_COUNT]) -> Self {
        self.ivs = ivs;
        self
    }

    pub fn with_pid(mut self, pid: u32) -> Self {
        self.pid = pid;
        self
    }

    pub fn with_form(mut self, form: u8) -> Self {
        self.form = form;
        self
    }

    pub fn as_egg(mut self) -> Self {
        self.egg = true;
        self
    }

    pub fn build(self) -> Entity {
        let mut entity = Entity::blank_with_region(self.format, self.japanese);
        entity.set_species(self.species);
        entity.set_form(self.form);
        entity.set_moves(self.moves);
        entity.set_ivs(self.ivs);
        entity.set_pid(self.pid);
        entity.set_tid(24680);
        entity.set_sid(13579);
        entity.set_exp(1_000);
        entity.set_level(10);
        if self.egg {
            entity.set_is_egg(true);
        }
        entity
    }
}

pub fn converter(allow_incompatible: bool) -> EntityConverter {
    EntityConverter::new(allow_incompatible, RecentTrainerCache::default())
}

pub fn converter_for(trainer: TrainerContext) -> EntityConverter {
    EntityConverter::new(false, RecentTrainerCache::new(trainer))
}
