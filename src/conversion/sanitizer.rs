//! Clamps a record to a destination's limit table.

use log::warn;

use crate::entity::{Entity, MOVE_SLOTS, STAT_COUNT};
use crate::text::truncate_chars;
use schema::GameLimits;

/// Applies the compatibility rules in order and reports whether the record
/// is acceptable afterwards. Only an out-of-range species is fatal; every
/// other field is cleared, truncated or clamped in place.
pub fn sanitize(entity: &mut Entity, limits: &GameLimits) -> bool {
    if !limits.allows_species(entity.species()) {
        warn!(
            "Species {} exceeds the {} maximum of {}",
            entity.species(),
            entity.format(),
            limits.max_species_id
        );
        return false;
    }

    if !limits.allows_item(entity.held_item()) {
        entity.set_held_item(0);
    }

    let nickname = entity.nickname();
    if nickname.chars().count() > limits.nick_length as usize {
        entity.set_nickname(&truncate_chars(&nickname, limits.nick_length as usize));
    }
    let ot_name = entity.ot_name();
    if ot_name.chars().count() > limits.ot_length as usize {
        entity.set_ot_name(&truncate_chars(&ot_name, limits.ot_length as usize));
    }

    // Cleared in place; the remaining moves keep their slots.
    for slot in 0..MOVE_SLOTS {
        if !limits.allows_move(entity.move_id(slot)) {
            entity.set_move(slot, 0);
        }
    }

    for stat in 0..STAT_COUNT {
        if entity.ev(stat) > limits.max_ev {
            entity.set_ev(stat, limits.max_ev);
        }
        if entity.iv(stat) > limits.max_iv {
            entity.set_iv(stat, limits.max_iv);
        }
    }
    true
}
