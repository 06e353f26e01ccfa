use std::collections::{HashMap, HashSet};

/// Each participant mapped to everyone they have previously shared a group
/// with, aggregated across all past sessions.
pub type GroupmateMap<T> = HashMap<T, HashSet<T>>;

/// Groups in progress: fixed-capacity slots, `None` until a participant is
/// placed.
pub(crate) type GroupStructure<T> = Vec<Vec<Option<T>>>;

/// Options accepted by [`make_groups`](crate::make_groups).
#[derive(Debug, Clone)]
pub struct GroupOptions<T> {
    /// Groups from prior sessions. Absent means no history.
    pub past_groups: Option<Vec<Vec<T>>>,
    /// Desired members per group. Defaults to [`DEFAULT_GROUP_SIZE`](crate::DEFAULT_GROUP_SIZE).
    pub target_size: Option<usize>,
    /// Largest tolerable gap between the biggest and smallest group before
    /// the last group is dispersed into the others. Absent means no
    /// rebalancing.
    pub max_difference: Option<usize>,
}

// derive(Default) would demand T: Default for no reason
impl<T> Default for GroupOptions<T> {
    fn default() -> Self {
        GroupOptions {
            past_groups: None,
            target_size: None,
            max_difference: None,
        }
    }
}
