//! Recently selected colors, most recent first.
//!
//! The list is stored as a JSON array of hex strings under a fixed key.
//! Storage failures are logged and otherwise ignored; the in-memory list keeps
//! working.

use serde::Deserialize;

use crate::error::Error;
use crate::hex::Hex;
use crate::store::Store;

/// Where and how many recent colors are kept.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RecentOptions {
    /// The maximum number of colors remembered.
    pub capacity: usize,
    /// The key the list is stored under.
    pub key: String,
}

impl Default for RecentOptions {
    fn default() -> Self {
        Self {
            capacity: 16,
            key: "colorpick-recent-colors".to_owned(),
        }
    }
}

/// A deduplicated, capped list of recently used colors backed by a [`Store`].
#[derive(Clone, Debug)]
pub struct RecentColors<S> {
    store: S,
    options: RecentOptions,
    colors: Vec<Hex>,
}

impl<S: Store> RecentColors<S> {
    /// Load the list saved in `store`. A missing, unreadable or corrupt entry
    /// starts an empty list.
    pub fn load(store: S, options: RecentOptions) -> Self {
        let mut colors = match store.get(&options.key) {
            Ok(Some(json)) => serde_json::from_str::<Vec<Hex>>(&json).unwrap_or_else(|err| {
                log::warn!("Ignoring corrupt recent colors under {:?}: {err}", options.key);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(err) => {
                log::warn!("Could not load recent colors: {err}");
                Vec::new()
            }
        };

        let mut seen = Vec::with_capacity(colors.len());
        colors.retain(|color| {
            if seen.contains(color) {
                false
            } else {
                seen.push(*color);
                true
            }
        });
        colors.truncate(options.capacity);

        Self {
            store,
            options,
            colors,
        }
    }

    /// Move `color` to the front of the list, dropping the oldest entry when
    /// the list is full, and save the result.
    pub fn add(&mut self, color: Hex) {
        self.colors.retain(|c| *c != color);
        self.colors.insert(0, color);
        self.colors.truncate(self.options.capacity);

        if let Err(err) = self.save() {
            log::warn!("Could not save recent colors: {err}");
        }
    }

    fn save(&mut self) -> Result<(), Error> {
        let json = serde_json::to_string(&self.colors)?;
        self.store.set(&self.options.key, json)
    }

    /// The remembered colors, most recent first.
    pub fn colors(&self) -> &[Hex] {
        &self.colors
    }

    /// Whether no colors are remembered.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The store backing this list.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn hex(s: &str) -> Hex {
        s.parse().unwrap()
    }

    fn empty() -> RecentColors<MemoryStore> {
        RecentColors::load(MemoryStore::new(), RecentOptions::default())
    }

    #[test]
    fn most_recent_first_without_duplicates() {
        let mut recent = empty();
        assert!(recent.is_empty());

        recent.add(hex("#FF0000"));
        recent.add(hex("#00FF00"));
        recent.add(hex("#ff0000"));

        assert_eq!(recent.colors(), &[hex("#FF0000"), hex("#00FF00")]);
    }

    #[test]
    fn capped_at_capacity() {
        let mut recent = empty();
        for i in 0..20_u32 {
            recent.add(Hex::from_u32(i));
        }
        assert_eq!(recent.colors().len(), 16);
        assert_eq!(recent.colors()[0], Hex::from_u32(19));
        assert_eq!(recent.colors()[15], Hex::from_u32(4));
    }

    #[test]
    fn saved_list_is_reloaded() {
        let mut recent = empty();
        recent.add(hex("#123456"));
        recent.add(hex("#abcdef"));

        let stored = recent
            .store()
            .get("colorpick-recent-colors")
            .unwrap()
            .unwrap();
        assert_eq!(stored, r##"["#ABCDEF","#123456"]"##);

        let reloaded = RecentColors::load(recent.store().clone(), RecentOptions::default());
        assert_eq!(reloaded.colors(), recent.colors());
    }

    #[test]
    fn corrupt_or_oversized_entries_are_cleaned_on_load() {
        let mut store = MemoryStore::new();
        store
            .set("colorpick-recent-colors", "not json".to_owned())
            .unwrap();
        assert!(RecentColors::load(store, RecentOptions::default()).is_empty());

        let mut store = MemoryStore::new();
        store
            .set("recent", r##"["#111","#222","#111","#333"]"##.to_owned())
            .unwrap();
        let options = RecentOptions {
            capacity: 2,
            key: "recent".to_owned(),
        };
        let recent = RecentColors::load(store, options);
        assert_eq!(recent.colors(), &[hex("#111"), hex("#222")]);
    }

    #[test]
    fn storage_failures_do_not_lose_selections() {
        let mut recent = RecentColors::load(MemoryStore::with_quota(0), RecentOptions::default());
        recent.add(hex("#FF0000"));
        assert_eq!(recent.colors(), &[hex("#FF0000")]);
        assert_eq!(recent.store().get("colorpick-recent-colors").unwrap(), None);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: RecentOptions = serde_json::from_str(r#"{"capacity": 4}"#).unwrap();
        assert_eq!(options.capacity, 4);
        assert_eq!(options.key, "colorpick-recent-colors");
    }
}
