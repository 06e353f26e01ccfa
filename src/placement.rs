use crate::types::{GroupStructure, GroupmateMap};
use anyhow::{bail, Result};
use rand::prelude::SliceRandom;
use rand::SeedableRng;
use std::cmp::Reverse;
use std::collections::HashSet;
use std::hash::Hash;

/// Shuffles the list with a seeded rng, then stable-sorts it so participants
/// with more past groupmates are placed first. Earlier placements see more
/// open groups, so the people hardest to place go while there is still room
/// to steer them. The sort is a no-op when nobody has history.
pub(crate) fn placement_order<T: Clone + Eq + Hash>(
    list: &[T],
    groupmates: &GroupmateMap<T>,
    seed: u64,
) -> Vec<T> {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
    let mut ordered = list.to_vec();
    ordered.shuffle(&mut rng);
    ordered.sort_by_key(|member| Reverse(groupmates.get(member).map_or(0, HashSet::len)));
    ordered
}

/// Places every participant, in order, into the open group sharing the
/// fewest of their past groupmates. Errors if the structure's capacity does
/// not match the number of participants.
pub(crate) fn fill_structure<T: Clone + Eq + Hash>(
    mut structure: GroupStructure<T>,
    ordered: Vec<T>,
    groupmates: &GroupmateMap<T>,
) -> Result<Vec<Vec<T>>> {
    for member in ordered {
        place_in_best_group(member, &mut structure, groupmates)?;
    }
    let filled: Option<Vec<Vec<T>>> = structure
        .into_iter()
        .map(|group| group.into_iter().collect())
        .collect();
    let Some(groups) = filled else {
        bail!("group structure has more slots than participants");
    };
    Ok(groups)
}

fn place_in_best_group<T: Clone + Eq + Hash>(
    member: T,
    structure: &mut GroupStructure<T>,
    groupmates: &GroupmateMap<T>,
) -> Result<()> {
    let no_history = HashSet::new();
    let past = groupmates.get(&member).unwrap_or(&no_history);

    // first open group with the fewest repeats; ties keep the earlier group
    let mut best: Option<(usize, usize)> = None;
    for (index, group) in structure.iter().enumerate() {
        if !group.contains(&None) {
            continue;
        }
        let repeats = group
            .iter()
            .flatten()
            .filter(|occupant| past.contains(*occupant))
            .count();
        if best.map_or(true, |(fewest, _)| repeats < fewest) {
            best = Some((repeats, index));
        }
    }
    let Some((_, index)) = best else {
        bail!("ran out of open groups; the group structure is smaller than the list");
    };

    let slot = structure[index]
        .iter_mut()
        .find(|slot| slot.is_none())
        .expect("best group was chosen for having an empty slot");
    *slot = Some(member);
    Ok(())
}
