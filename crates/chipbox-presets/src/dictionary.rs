use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Items that can be stored in a [`NamedOrdinalDictionary`].
pub trait Named {
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DictionaryError {
    #[error("duplicate name '{name}' at positions {first} and {second}")]
    DuplicateName {
        name: String,
        first: usize,
        second: usize,
    },
}

/// Ordered collection of uniquely named items.
///
/// Items keep their insertion order, which is their ordinal. A name index is
/// built once at construction so lookups by position and by name are both O(1).
/// The collection cannot be mutated after it is built.
#[derive(Clone)]
pub struct NamedOrdinalDictionary<T> {
    items: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Named> NamedOrdinalDictionary<T> {
    /// Builds the dictionary, failing on the first repeated name.
    pub fn new(items: Vec<T>) -> Result<Self, DictionaryError> {
        let mut index = HashMap::with_capacity(items.len());
        for (ordinal, item) in items.iter().enumerate() {
            if let Some(&first) = index.get(item.name()) {
                return Err(DictionaryError::DuplicateName {
                    name: item.name().to_owned(),
                    first,
                    second: ordinal,
                });
            }
            index.insert(item.name().to_owned(), ordinal);
        }
        Ok(Self { items, index })
    }

    pub fn by_ordinal(&self, ordinal: usize) -> Option<&T> {
        self.items.get(ordinal)
    }

    pub fn by_name(&self, name: &str) -> Option<&T> {
        self.index
            .get(name)
            .and_then(|&ordinal| self.items.get(ordinal))
    }

    pub fn ordinal_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name())
    }
}

impl<T> NamedOrdinalDictionary<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for NamedOrdinalDictionary<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

// The name index is derived from `items`, so comparing the items is enough.
impl<T: PartialEq> PartialEq for NamedOrdinalDictionary<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: fmt::Debug> fmt::Debug for NamedOrdinalDictionary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<'a, T> IntoIterator for &'a NamedOrdinalDictionary<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Named> TryFrom<Vec<T>> for NamedOrdinalDictionary<T> {
    type Error = DictionaryError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl<T: Serialize> Serialize for NamedOrdinalDictionary<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}

impl<'de, T> Deserialize<'de> for NamedOrdinalDictionary<T>
where
    T: Named + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Self::new(items).map_err(serde::de::Error::custom)
    }
}
