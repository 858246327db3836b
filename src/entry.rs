//! Plain key-value entry.

/// A key-value entry holding both fields as-is.
///
/// Unlike the entries kept inside ordered maps, a `MapEntry<T, U>` compares and hashes both its
/// key and its value.
///
/// # Examples
///
/// ```
/// use pair::MapEntry;
///
/// let entry = MapEntry::from((1, "one"));
/// assert_eq!(entry.key, 1);
/// assert_eq!(entry.value, "one");
/// ```
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MapEntry<T, U> {
    pub key: T,
    pub value: U,
}

impl<T, U> MapEntry<T, U> {
    pub fn new(key: T, value: U) -> Self {
        MapEntry { key, value }
    }

    pub fn get_key(&self) -> &T {
        &self.key
    }

    pub fn get_value(&self) -> &U {
        &self.value
    }
}

impl<T, U> From<(T, U)> for MapEntry<T, U> {
    fn from((key, value): (T, U)) -> Self {
        MapEntry { key, value }
    }
}

impl<T, U> From<MapEntry<T, U>> for (T, U) {
    fn from(entry: MapEntry<T, U>) -> Self {
        (entry.key, entry.value)
    }
}
