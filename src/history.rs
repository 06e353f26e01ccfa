use crate::types::GroupmateMap;
use std::collections::HashSet;
use std::hash::Hash;

/// Maps every member of `list` to the set of people it has shared a past
/// group with. Participants with no recorded history (including everyone,
/// when `past_groups` is absent) map to an empty set.
pub fn past_groupmates<T: Clone + Eq + Hash>(
    list: &[T],
    past_groups: Option<&[Vec<T>]>,
) -> GroupmateMap<T> {
    list.iter()
        .map(|member| (member.clone(), groupmates_for(member, past_groups)))
        .collect()
}

fn groupmates_for<T: Clone + Eq + Hash>(member: &T, past_groups: Option<&[Vec<T>]>) -> HashSet<T> {
    let Some(past_groups) = past_groups else {
        return HashSet::new();
    };
    past_groups
        .iter()
        .filter(|group| group.contains(member))
        .flatten()
        .filter(|mate| *mate != member)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn set(members: &[&str]) -> HashSet<String> {
        members.iter().map(|m| m.to_string()).collect()
    }

    fn strings(members: &[&str]) -> Vec<String> {
        members.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn maps_members_to_their_previous_groupmates() {
        let list = strings(&["a", "b", "c", "d"]);
        let past = vec![strings(&["a", "b"]), strings(&["a", "c"])];

        let map = past_groupmates(&list, Some(&past));

        assert_eq!(map["a"], set(&["b", "c"]));
        assert_eq!(map["b"], set(&["a"]));
        assert_eq!(map["c"], set(&["a"]));
        assert!(map["d"].is_empty());
    }

    #[test]
    fn no_history_yields_empty_sets() {
        let list = strings(&["a", "b"]);

        let map = past_groupmates(&list, None);

        assert_eq!(map.len(), 2);
        assert!(map.values().all(HashSet::is_empty));
    }

    #[test]
    fn repeated_past_groupmates_are_deduplicated() {
        let list = strings(&["a", "b"]);
        let past = vec![strings(&["a", "b"]), strings(&["a", "b", "c"])];

        let map = past_groupmates(&list, Some(&past));

        assert_eq!(map["a"], set(&["b", "c"]));
    }
}
