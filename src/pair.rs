//! Key/value pair where either element may be absent.

use crate::entry::MapEntry;
use crate::error::{Error, Result};
use bincode::{deserialize, serialize};
use serde::de::DeserializeOwned;
use serde::ser::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// An immutable key/value pair where the key, the value, or both may be absent.
///
/// A pair is in one of four presence states: complete (both present), key-only, value-only, or
/// empty (both absent). Pairs are ordered by key, then by value, with absent elements sorting
/// after present ones and the empty pair sorting last.
///
/// # Examples
///
/// ```
/// use pair::Pair;
///
/// let complete = Pair::new("aKey", "aValue");
/// assert!(complete.is_complete());
/// assert_eq!(complete.to_string(), "Pair{key=aKey, value=aValue}");
///
/// let key_only: Pair<&str, &str> = Pair::of_nullable(Some("aKey"), None);
/// assert!(key_only.is_incomplete());
/// assert_eq!(key_only.to_string(), "Pair{key=aKey, value=null}");
///
/// assert!(complete < key_only);
/// ```
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Pair<K, V> {
    key: Option<K>,
    value: Option<V>,
}

impl<K, V> Pair<K, V> {
    /// Constructs a complete `Pair<K, V>` from a key and a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use pair::Pair;
    ///
    /// let pair = Pair::new(1, 'a');
    /// assert_eq!(pair.get_key(), Some(&1));
    /// assert_eq!(pair.get_value(), Some(&'a'));
    /// ```
    pub fn new(key: K, value: V) -> Self {
        Pair {
            key: Some(key),
            value: Some(value),
        }
    }

    /// Constructs a complete `Pair<K, V>`, failing if either the key or the value is absent. The
    /// key is checked first.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` naming the first absent argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use pair::Pair;
    ///
    /// assert!(Pair::of(Some("aKey"), Some("aValue")).is_ok());
    /// assert!(Pair::<&str, &str>::of(Some("aKey"), None).is_err());
    /// ```
    pub fn of(key: Option<K>, value: Option<V>) -> Result<Self> {
        match (key, value) {
            (Some(key), Some(value)) => Ok(Pair::new(key, value)),
            (None, _) => {
                debug!("rejected pair with an absent key");
                Err(Error::InvalidArgument("key"))
            },
            (_, None) => {
                debug!("rejected pair with an absent value");
                Err(Error::InvalidArgument("value"))
            },
        }
    }

    /// Constructs a `Pair<K, V>` in whichever presence state the arguments imply. Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use pair::Pair;
    ///
    /// let pair: Pair<u32, u32> = Pair::of_nullable(None, None);
    /// assert!(pair.is_empty());
    /// ```
    pub fn of_nullable(key: Option<K>, value: Option<V>) -> Self {
        Pair { key, value }
    }

    /// Returns a reference to the key if it is present.
    pub fn get_key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    /// Returns a reference to the value if it is present.
    pub fn get_value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Returns `true` if both the key and the value are present.
    pub fn is_complete(&self) -> bool {
        self.key.is_some() && self.value.is_some()
    }

    /// Returns `true` if at least one of the key and the value is absent.
    pub fn is_incomplete(&self) -> bool {
        !self.is_complete()
    }

    /// Returns `true` if both the key and the value are absent.
    pub fn is_empty(&self) -> bool {
        self.key.is_none() && self.value.is_none()
    }

    pub fn into_parts(self) -> (Option<K>, Option<V>) {
        (self.key, self.value)
    }

    /// Converts the pair into a `MapEntry` holding the key and the value as-is.
    pub fn into_map_entry(self) -> MapEntry<Option<K>, Option<V>> {
        MapEntry::new(self.key, self.value)
    }
}

impl<K, V> Pair<K, V>
where
    K: Clone,
    V: Clone,
{
    /// Returns a `MapEntry` holding copies of the key and the value as-is, including absent
    /// fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use pair::Pair;
    ///
    /// let pair: Pair<&str, &str> = Pair::of_nullable(None, Some("aValue"));
    /// let entry = pair.to_map_entry();
    /// assert_eq!(entry.key, None);
    /// assert_eq!(entry.value, Some("aValue"));
    /// ```
    pub fn to_map_entry(&self) -> MapEntry<Option<K>, Option<V>> {
        MapEntry::new(self.key.clone(), self.value.clone())
    }
}

impl<K, V> Pair<K, V>
where
    K: Ord,
    V: Ord,
{
    /// Compares two pairs with the legacy rule set.
    ///
    /// Agrees with `Ord::cmp` except when both pairs are empty: an empty pair is always
    /// `Ordering::Greater` here, even against another empty pair. Prefer `Ord::cmp` when sorting.
    ///
    /// # Examples
    ///
    /// ```
    /// use pair::Pair;
    /// use std::cmp::Ordering;
    ///
    /// let empty: Pair<u32, u32> = Pair::of_nullable(None, None);
    /// assert_eq!(empty.compare_to(&empty), Ordering::Greater);
    /// assert_eq!(empty.cmp(&empty), Ordering::Equal);
    /// ```
    pub fn compare_to(&self, other: &Pair<K, V>) -> Ordering {
        if self.is_empty() {
            return Ordering::Greater;
        }

        match (&self.key, &other.key) {
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            // self has a value here since it is not empty
            (None, None) => Self::compare_values(&self.value, &other.value),
            (Some(key), Some(other_key)) => key
                .cmp(other_key)
                .then_with(|| Self::compare_values(&self.value, &other.value)),
        }
    }

    fn compare_values(value: &Option<V>, other_value: &Option<V>) -> Ordering {
        match (value, other_value) {
            (Some(value), Some(other_value)) => value.cmp(other_value),
            (Some(_), None) => Ordering::Less,
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
        }
    }
}

impl<K, V> Pair<K, V>
where
    K: Serialize,
    V: Serialize,
{
    /// Encodes the pair with `bincode`.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serialize(self)?)
    }
}

impl<K, V> Pair<K, V>
where
    K: DeserializeOwned,
    V: DeserializeOwned,
{
    /// Decodes a pair previously encoded with `to_bytes`. Any presence state is accepted.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        deserialize(bytes).map_err(|error| {
            debug!("failed to decode pair: {}", error);
            Error::SerdeError(error)
        })
    }
}

impl<K, V> Ord for Pair<K, V>
where
    K: Ord,
    V: Ord,
{
    fn cmp(&self, other: &Pair<K, V>) -> Ordering {
        if self.is_empty() && other.is_empty() {
            Ordering::Equal
        } else {
            self.compare_to(other)
        }
    }
}

impl<K, V> PartialOrd for Pair<K, V>
where
    K: Ord,
    V: Ord,
{
    fn partial_cmp(&self, other: &Pair<K, V>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn fmt_field<T>(field: &Option<T>, f: &mut fmt::Formatter) -> fmt::Result
where
    T: fmt::Display,
{
    match field {
        Some(field) => write!(f, "{}", field),
        None => f.write_str("null"),
    }
}

impl<K, V> fmt::Display for Pair<K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Pair{key=")?;
        fmt_field(&self.key, f)?;
        f.write_str(", value=")?;
        fmt_field(&self.value, f)?;
        f.write_str("}")
    }
}

impl<K, V> From<Pair<K, V>> for (Option<K>, Option<V>) {
    fn from(pair: Pair<K, V>) -> Self {
        pair.into_parts()
    }
}
