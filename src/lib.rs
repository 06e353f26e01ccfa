//! Builds groups of a target size from a list of people, using the groups
//! from past sessions to keep repeat pairings to a minimum.

mod grouping;
mod history;
mod placement;
mod structure;
mod types;

pub use grouping::{Grouping, Report};
pub use history::past_groupmates;
pub use types::{GroupOptions, GroupmateMap};

use anyhow::{ensure, Result};
use std::hash::Hash;

/// Group size used when the options leave `target_size` unset.
pub const DEFAULT_GROUP_SIZE: usize = 4;

/// Splits `list` into groups, steering people away from their past
/// groupmates. `seed` drives the shuffle; the same inputs and seed always
/// produce the same grouping.
pub fn make_groups<T: Clone + Eq + Hash>(
    list: &[T],
    options: &GroupOptions<T>,
    seed: u64,
) -> Result<Grouping<T>> {
    ensure!(
        options.target_size != Some(0),
        "target_size must be at least 1"
    );
    let target_size = options.target_size.unwrap_or(DEFAULT_GROUP_SIZE);

    let groupmates = past_groupmates(list, options.past_groups.as_deref());
    let structure = structure::empty_structure(list.len(), target_size);
    let structure = structure::correct_for_size_difference(structure, options.max_difference);
    let ordered = placement::placement_order(list, &groupmates, seed);
    let groups = placement::fill_structure(structure, ordered, &groupmates)?;

    Ok(Grouping::new(groups, list.to_vec(), groupmates))
}
