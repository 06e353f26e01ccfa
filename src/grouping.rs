use crate::types::GroupmateMap;
use anyhow::{Context, Result};
use itertools::Itertools;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// The outcome of one grouping session. Immutable once built; every field is
/// computed at construction.
#[derive(Debug, Clone)]
pub struct Grouping<T> {
    groups: Vec<Vec<T>>,
    list: Vec<T>,
    past_groupmates: GroupmateMap<T>,
    repeat_pairs: GroupmateMap<T>,
}

/// Borrowing view of a [`Grouping`], shaped for JSON.
#[derive(Debug, Serialize)]
pub struct Report<'a, T> {
    groups: &'a [Vec<T>],
    list: &'a [T],
    past_groupmates: MappingView<'a, T>,
    repeat_pairs: MappingView<'a, T>,
}

/// Groupmate mapping with entries pinned to list order, so repeated renders
/// of the same grouping come out byte-identical.
#[derive(Debug)]
pub struct MappingView<'a, T>(Vec<(&'a T, Vec<&'a T>)>);

impl<T: Serialize> Serialize for MappingView<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (member, mates) in &self.0 {
            map.serialize_entry(member, mates)?;
        }
        map.end()
    }
}

fn mapping_view<'a, T: Eq + Hash>(list: &'a [T], map: &'a GroupmateMap<T>) -> MappingView<'a, T> {
    let mut seen = HashSet::new();
    let entries = list
        .iter()
        .filter(|member| seen.insert(*member))
        .map(|member| {
            let mates = map.get(member).map_or_else(Vec::new, |m| m.iter().collect());
            (member, mates)
        })
        .collect();
    MappingView(entries)
}

impl<T: Clone + Eq + Hash> Grouping<T> {
    pub(crate) fn new(groups: Vec<Vec<T>>, list: Vec<T>, past_groupmates: GroupmateMap<T>) -> Self {
        let repeat_pairs = derive_repeat_pairs(&groups, &list, &past_groupmates);
        Grouping {
            groups,
            list,
            past_groupmates,
            repeat_pairs,
        }
    }

    pub fn groups(&self) -> &[Vec<T>] {
        &self.groups
    }

    pub fn list(&self) -> &[T] {
        &self.list
    }

    pub fn past_groupmates(&self) -> &GroupmateMap<T> {
        &self.past_groupmates
    }

    /// For each participant, the past groupmates who ended up in their group
    /// again this session.
    pub fn repeat_pairs(&self) -> &GroupmateMap<T> {
        &self.repeat_pairs
    }

    /// Numbered listing, one line per group, members in slot order:
    /// `1. a, b` — no trailing newline.
    pub fn render_text(&self) -> String
    where
        T: fmt::Display,
    {
        self.groups
            .iter()
            .enumerate()
            .map(|(index, group)| format!("{}. {}", index + 1, group.iter().join(", ")))
            .join("\n")
    }

    /// Serializable snapshot with the groups, the original list, and both
    /// groupmate mappings.
    pub fn render_structured(&self) -> Report<'_, T> {
        Report {
            groups: &self.groups,
            list: &self.list,
            past_groupmates: mapping_view(&self.list, &self.past_groupmates),
            repeat_pairs: mapping_view(&self.list, &self.repeat_pairs),
        }
    }

    pub fn to_json(&self) -> Result<String>
    where
        T: Serialize,
    {
        serde_json::to_string(&self.render_structured()).context("unable to encode grouping")
    }
}

impl<T: fmt::Display + Clone + Eq + Hash> fmt::Display for Grouping<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_text())
    }
}

fn derive_repeat_pairs<T: Clone + Eq + Hash>(
    groups: &[Vec<T>],
    list: &[T],
    past_groupmates: &GroupmateMap<T>,
) -> GroupmateMap<T> {
    list.iter()
        .map(|member| {
            let repeats = groups
                .iter()
                .find(|group| group.contains(member))
                .map(|group| {
                    group
                        .iter()
                        .filter(|mate| {
                            past_groupmates
                                .get(member)
                                .is_some_and(|past| past.contains(*mate))
                        })
                        .cloned()
                        .collect()
                })
                .unwrap_or_default();
            (member.clone(), repeats)
        })
        .collect()
}
