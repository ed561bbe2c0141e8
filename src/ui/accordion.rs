// src/ui/accordion.rs
//! Expand/collapse state for grouped panels.
//!
//! Panels are keyed by a structured `(group, item)` pair. Over the wire the
//! open set travels as `group/item` pairs separated by commas, with both parts
//! percent-encoded so neither separator can appear inside a part.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelKey {
    pub group: String,
    pub item: String,
}

impl PanelKey {
    pub fn new(group: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            item: item.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionState {
    panels: BTreeMap<PanelKey, bool>,
}

impl AccordionState {
    /// Known panels, grouped. Only the first item of each group starts open;
    /// a repeated key keeps the state of its first occurrence.
    pub fn new<G, I>(groups: G) -> Self
    where
        G: IntoIterator<Item = (String, I)>,
        I: IntoIterator<Item = String>,
    {
        let mut panels = BTreeMap::new();
        for (group, items) in groups {
            for (position, item) in items.into_iter().enumerate() {
                panels
                    .entry(PanelKey::new(group.clone(), item))
                    .or_insert(position == 0);
            }
        }
        Self { panels }
    }

    /// Defaults, overridden by an explicit open set when one was sent.
    /// Keys that name no known panel are ignored.
    pub fn restore(mut self, encoded: Option<&str>) -> Self {
        let Some(encoded) = encoded else {
            return self;
        };
        for open in self.panels.values_mut() {
            *open = false;
        }
        for key in decode(encoded) {
            if let Some(open) = self.panels.get_mut(&key) {
                *open = true;
            }
        }
        self
    }

    pub fn is_open(&self, key: &PanelKey) -> bool {
        self.panels.get(key).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, key: &PanelKey) {
        if let Some(open) = self.panels.get_mut(key) {
            *open = !*open;
        }
    }

    /// Copy of this state with one panel flipped, for building links.
    pub fn toggled(&self, key: &PanelKey) -> Self {
        let mut next = self.clone();
        next.toggle(key);
        next
    }

    pub fn encode(&self) -> String {
        self.panels
            .iter()
            .filter(|(_, open)| **open)
            .map(|(key, _)| {
                format!(
                    "{}/{}",
                    urlencoding::encode(&key.group),
                    urlencoding::encode(&key.item)
                )
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn decode(encoded: &str) -> Vec<PanelKey> {
    encoded
        .split(',')
        .filter_map(|pair| pair.split_once('/'))
        .filter_map(|(group, item)| {
            let group = urlencoding::decode(group).ok()?;
            let item = urlencoding::decode(item).ok()?;
            Some(PanelKey::new(group.into_owned(), item.into_owned()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(layout: &[(&str, &[&str])]) -> AccordionState {
        AccordionState::new(layout.iter().map(|(group, items)| {
            (
                group.to_string(),
                items.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
            )
        }))
    }

    #[test]
    fn test_first_item_of_each_group_open_by_default() {
        let state = groups(&[("camp-a", &["north", "south"]), ("camp-b", &["east", "west"])]);
        assert!(state.is_open(&PanelKey::new("camp-a", "north")));
        assert!(!state.is_open(&PanelKey::new("camp-a", "south")));
        assert!(state.is_open(&PanelKey::new("camp-b", "east")));
        assert!(!state.is_open(&PanelKey::new("camp-b", "west")));
    }

    #[test]
    fn test_toggle_is_independent_per_key() {
        let mut state = groups(&[("g", &["one", "two"])]);
        state.toggle(&PanelKey::new("g", "two"));
        assert!(state.is_open(&PanelKey::new("g", "one")));
        assert!(state.is_open(&PanelKey::new("g", "two")));
        state.toggle(&PanelKey::new("g", "one"));
        assert!(!state.is_open(&PanelKey::new("g", "one")));
        assert!(state.is_open(&PanelKey::new("g", "two")));
    }

    #[test]
    fn test_repeated_key_keeps_first_item_open() {
        let state = groups(&[("events", &["2023", "2023", "2022"])]);
        assert!(state.is_open(&PanelKey::new("events", "2023")));
        assert!(!state.is_open(&PanelKey::new("events", "2022")));
    }

    // "a-b"+"c" and "a"+"b-c" would collide under string concatenation.
    #[test]
    fn test_structured_keys_do_not_collide() {
        let mut state = groups(&[("a-b", &["x", "c"]), ("a", &["y", "b-c"])]);
        state.toggle(&PanelKey::new("a-b", "c"));
        assert!(state.is_open(&PanelKey::new("a-b", "c")));
        assert!(!state.is_open(&PanelKey::new("a", "b-c")));
    }

    #[test]
    fn test_encode_restore_keeps_open_set() {
        let base = groups(&[("g/1", &["a,b", "c"]), ("g2", &["d", "e"])]);
        let changed = base
            .toggled(&PanelKey::new("g/1", "c"))
            .toggled(&PanelKey::new("g2", "d"));
        let restored = base.clone().restore(Some(&changed.encode()));
        assert_eq!(restored, changed);
    }

    #[test]
    fn test_explicit_empty_set_closes_everything() {
        let state = groups(&[("g", &["one", "two"])]).restore(Some(""));
        assert!(!state.is_open(&PanelKey::new("g", "one")));
        assert!(!state.is_open(&PanelKey::new("g", "two")));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let state = groups(&[("g", &["one"])]).restore(Some("nope/zip,g/one"));
        assert!(state.is_open(&PanelKey::new("g", "one")));
        assert!(!state.is_open(&PanelKey::new("nope", "zip")));
    }
}
