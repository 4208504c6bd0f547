//! Query parameter mapping.
//!
//! [`QueryParams`] is an insertion-ordered mapping from parameter name to a
//! single value or a list of values. Builders carry one of these and merge
//! new parameters into it at every chain step.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::Error;

#[cfg(test)]
mod tests;

/// A query parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// A single value, encoded as `key=value`.
    Single(String),
    /// A list of values, encoded as `key[0]=a&key[1]=b`.
    Many(Vec<String>),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(value) => write!(f, "{}", value),
            Self::Many(values) => write!(f, "{}", values.join(",")),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ParamValue {
    fn from(values: [&str; N]) -> Self {
        Self::Many(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Insertion-ordered query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, ParamValue)>,
}

impl QueryParams {
    /// Creates an empty parameter mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter. An existing key keeps its position and gets the
    /// new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns a copy with the parameter inserted.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merges `other` into a copy of `self`.
    ///
    /// An empty `other` leaves `self` unchanged and an empty `self` yields
    /// `other`. Otherwise the result holds the entries of `self` followed by
    /// the new entries of `other`, with `other` winning where keys coincide.
    /// With `unique`, entries repeating an earlier entry's value are dropped.
    #[must_use]
    pub fn merge(&self, other: &QueryParams, unique: bool) -> QueryParams {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }

        let mut merged = self.clone();
        for (key, value) in &other.entries {
            merged.insert(key.clone(), value.clone());
        }

        if unique {
            let mut seen: Vec<&ParamValue> = Vec::with_capacity(merged.len());
            let mut kept = Vec::with_capacity(merged.len());
            for (key, value) in &merged.entries {
                if !seen.contains(&value) {
                    seen.push(value);
                    kept.push((key.clone(), value.clone()));
                }
            }
            merged.entries = kept;
        }

        merged
    }

    /// Encodes the parameters as an `application/x-www-form-urlencoded`
    /// query string.
    ///
    /// # Errors
    /// Returns [`Error::Encode`] if the serializer rejects a pair.
    pub fn to_query_string(&self) -> Result<String, Error> {
        let mut pairs: Vec<(String, &str)> = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            match value {
                ParamValue::Single(v) => pairs.push((key.clone(), v.as_str())),
                ParamValue::Many(values) => {
                    for (i, v) in values.iter().enumerate() {
                        pairs.push((format!("{}[{}]", key, i), v.as_str()));
                    }
                }
            }
        }
        Ok(serde_urlencoded::to_string(&pairs)?)
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for QueryParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl Serialize for QueryParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for QueryParams {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ParamsVisitor;

        impl<'de> Visitor<'de> for ParamsVisitor {
            type Value = QueryParams;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of string or string-list values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut params = QueryParams::new();
                while let Some((key, value)) = access.next_entry::<String, ParamValue>()? {
                    params.insert(key, value);
                }
                Ok(params)
            }
        }

        deserializer.deserialize_map(ParamsVisitor)
    }
}
