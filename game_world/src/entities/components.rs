//! Containers shared by rooms, the player and items.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::Item;
use crate::mechanics::UseEffect;

/// An ordered collection of items.
///
/// Lookups act on the first item with a matching name; an item is moved
/// between lists by taking it out of one and pushing it onto another.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemList(Vec<Item>);

impl ItemList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// First item called `name`.
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.0.iter().find(|item| item.name == name)
    }

    /// Whether any item is called `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Remove and return the first item called `name`.
    pub fn take(&mut self, name: &str) -> Option<Item> {
        self.take_where(|item| item.name == name)
    }

    /// Remove and return the first item matching `predicate`.
    pub fn take_where(&mut self, predicate: impl FnMut(&Item) -> bool) -> Option<Item> {
        let index = self.0.iter().position(predicate)?;
        Some(self.0.remove(index))
    }

    /// Append an item at the end of the list.
    pub fn push(&mut self, item: Item) {
        self.0.push(item);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Item names in list order.
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|item| item.name.as_str()).collect()
    }
}

impl FromIterator<Item> for ItemList {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Item>> for ItemList {
    fn from(items: Vec<Item>) -> Self {
        Self(items)
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// An item's use-effects, keyed by effect name.
///
/// Keys carry no meaning beyond grouping; entries keep the order in which
/// they appear in the world description.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UseEffects {
    entries: Vec<(String, UseEffect)>,
}

impl UseEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an effect. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, effect: UseEffect) {
        let key = key.into();
        match self.entries.iter().position(|(existing, _)| *existing == key) {
            Some(index) => self.entries[index].1 = effect,
            None => self.entries.push((key, effect)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&UseEffect> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, effect)| effect)
    }

    /// Effects in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UseEffect)> {
        self.entries
            .iter()
            .map(|(key, effect)| (key.as_str(), effect))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for UseEffects {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, effect) in &self.entries {
            map.serialize_entry(key, effect)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for UseEffects {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EffectsVisitor;

        impl<'a> Visitor<'a> for EffectsVisitor {
            type Value = UseEffects;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of use-effects")
            }

            fn visit_map<A: MapAccess<'a>>(self, mut access: A) -> Result<UseEffects, A::Error> {
                let mut effects = UseEffects::new();
                while let Some((key, effect)) = access.next_entry::<String, UseEffect>()? {
                    effects.insert(key, effect);
                }
                Ok(effects)
            }
        }

        deserializer.deserialize_map(EffectsVisitor)
    }
}
