//! Live control values and the preview generation counter.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::control::{ControlDescriptor, ControlValue};

/// Mapping from control name to current value.
///
/// Entries keep declaration order so anything derived from the mapping is
/// deterministic. Keys are fixed once built; only existing entries can be
/// replaced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueMap {
    entries: Vec<(String, ControlValue)>,
}

impl ValueMap {
    /// Build a mapping holding every control's default.
    pub fn from_defaults(controls: &[ControlDescriptor]) -> Self {
        controls
            .iter()
            .map(|c| (c.name.clone(), c.default_value()))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&ControlValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Replace the value of an existing key. Returns false if the key is absent.
    pub(crate) fn replace(&mut self, name: &str, value: ControlValue) -> bool {
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ControlValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, ControlValue)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (K, ControlValue)>>(iter: I) -> Self {
        let mut map = ValueMap::default();
        for (key, value) in iter {
            let key = key.into();
            if !map.replace(&key, value.clone()) {
                map.entries.push((key, value));
            }
        }
        map
    }
}

impl Serialize for ValueMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Generation of the preview subtree. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, serde::Serialize)]
#[serde(transparent)]
pub struct RemountToken(u64);

impl RemountToken {
    pub fn get(self) -> u64 {
        self.0
    }

    /// The following generation.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}
