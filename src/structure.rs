use crate::types::GroupStructure;
use itertools::Itertools;
use itertools::MinMaxResult::MinMax;

/// Partitions `list_size` empty slots into consecutive groups of
/// `target_size`; the last group holds the remainder and may be shorter.
pub(crate) fn empty_structure<T: Clone>(list_size: usize, target_size: usize) -> GroupStructure<T> {
    let mut structure = Vec::with_capacity(list_size.div_ceil(target_size));
    let mut remaining = list_size;
    while remaining > 0 {
        let size = remaining.min(target_size);
        structure.push(vec![None; size]);
        remaining -= size;
    }
    structure
}

/// Applies the one-pass size correction: if the gap between the biggest and
/// smallest group exceeds `max_difference`, the last group's slots are
/// dispersed into the preceding groups. Never iterated, even if a gap
/// remains afterwards.
pub(crate) fn correct_for_size_difference<T>(
    mut structure: GroupStructure<T>,
    max_difference: Option<usize>,
) -> GroupStructure<T> {
    let Some(max_difference) = max_difference else {
        return structure;
    };
    if size_difference(&structure) > max_difference {
        disperse_last_group(&mut structure);
    }
    structure
}

fn size_difference<T>(structure: &GroupStructure<T>) -> usize {
    match structure.iter().map(Vec::len).minmax() {
        MinMax(smallest, biggest) => biggest - smallest,
        _ => 0,
    }
}

/// Removes the last group and hands its slots out one per preceding group,
/// starting from group 0 and cycling if it runs past the end.
fn disperse_last_group<T>(structure: &mut GroupStructure<T>) {
    let Some(last) = structure.pop() else {
        return;
    };
    if structure.is_empty() {
        structure.push(last);
        return;
    }
    let receivers = structure.len();
    for (index, slot) in last.into_iter().enumerate() {
        structure[index % receivers].push(slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(structure: &GroupStructure<String>) -> Vec<usize> {
        structure.iter().map(Vec::len).collect()
    }

    #[test]
    fn evenly_divisible_list_makes_uniform_groups() {
        let structure = empty_structure::<String>(12, 4);
        assert_eq!(sizes(&structure), vec![4, 4, 4]);
    }

    #[test]
    fn remainder_goes_into_a_shorter_last_group() {
        let structure = empty_structure::<String>(12, 5);
        assert_eq!(sizes(&structure), vec![5, 5, 2]);
    }

    #[test]
    fn list_smaller_than_target_makes_one_group() {
        let structure = empty_structure::<String>(3, 4);
        assert_eq!(sizes(&structure), vec![3]);
    }

    #[test]
    fn empty_list_makes_no_groups() {
        let structure = empty_structure::<String>(0, 4);
        assert!(structure.is_empty());
    }

    #[test]
    fn no_max_difference_leaves_uneven_groups() {
        let structure = correct_for_size_difference(empty_structure::<String>(12, 5), None);
        assert_eq!(sizes(&structure), vec![5, 5, 2]);
    }

    #[test]
    fn difference_within_tolerance_is_left_alone() {
        let structure = correct_for_size_difference(empty_structure::<String>(12, 5), Some(3));
        assert_eq!(sizes(&structure), vec![5, 5, 2]);
    }

    #[test]
    fn exceeded_difference_disperses_the_last_group() {
        let structure = correct_for_size_difference(empty_structure::<String>(12, 5), Some(2));
        assert_eq!(sizes(&structure), vec![6, 6]);
    }

    #[test]
    fn dispersal_hands_slots_out_in_group_order() {
        // 7 with target 3 gives [3, 3, 1]; the lone leftover slot lands in
        // group 0.
        let structure = correct_for_size_difference(empty_structure::<String>(7, 3), Some(1));
        assert_eq!(sizes(&structure), vec![4, 3]);
    }
}
