//! Validation on top of [`seqmap::Map`].
//!
//! A [`ValidatingMap`] runs caller-supplied checks against every key and
//! value before they are inserted. The checks are fixed at construction and
//! cannot be changed afterwards. Reads and deletions are never validated.

use seqmap::Map;

/// A check run against a candidate key or value before insertion.
///
/// Returning `Err` rejects the insertion with the given reason and leaves
/// the map untouched.
pub type Validator<T> = Box<dyn Fn(&T) -> Result<(), String>>;

#[derive(Debug, PartialEq)]
pub enum Error {
    /// A validator rejected the key or value, with its reason.
    Rejected(String),
    Map(seqmap::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(reason) => {
                f.write_fmt(format_args!("validation rejected: {}", reason))
            }
            Self::Map(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rejected(_) => None,
            Self::Map(e) => Some(e),
        }
    }
}

impl From<seqmap::Error> for Error {
    fn from(e: seqmap::Error) -> Self {
        Self::Map(e)
    }
}

/// An insertion-ordered map that validates new keys and values.
///
/// Wraps an owned [`Map`] and exposes the same operations. `add` and `set`
/// run the key check, then the value check, then delegate; everything else
/// passes straight through.
///
/// Validators see one key or value at a time and nothing else, so checks
/// that span entries (say, keys must be increasing) cannot be expressed
/// here.
pub struct ValidatingMap<K, V> {
    map: Map<K, V>,
    key_validator: Option<Validator<K>>,
    value_validator: Option<Validator<V>>,
}

impl<K: PartialEq, V> ValidatingMap<K, V> {
    /// A map with no validators; behaves like a plain [`Map`].
    pub fn new() -> Self {
        Self::with_validators(None, None)
    }

    /// A map checking every inserted key and value against the given
    /// validators. `None` skips that check entirely.
    pub fn with_validators(
        key_validator: Option<Validator<K>>,
        value_validator: Option<Validator<V>>,
    ) -> Self {
        Self {
            map: Map::new(),
            key_validator,
            value_validator,
        }
    }

    // Key first, then value. Runs strictly before any mutation.
    fn validate(&self, key: &K, value: &V) -> Result<(), Error> {
        if let Some(check) = &self.key_validator {
            check(key).map_err(Error::Rejected)?;
        }
        if let Some(check) = &self.value_validator {
            check(value).map_err(Error::Rejected)?;
        }
        Ok(())
    }

    pub fn add(&mut self, key: K, value: V) -> Result<(), Error> {
        self.validate(&key, &value)?;
        self.map.add(key, value)?;
        Ok(())
    }

    pub fn set(&mut self, key: K, value: V) -> Result<Option<V>, Error> {
        self.validate(&key, &value)?;
        Ok(self.map.set(key, value))
    }

    pub fn get(&self, key: &K) -> Result<&V, Error> {
        Ok(self.map.get(key)?)
    }

    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, Error> {
        Ok(self.map.get_mut(key)?)
    }

    pub fn remove(&mut self, key: &K) -> Result<V, Error> {
        Ok(self.map.remove(key)?)
    }

    pub fn remove_at(&mut self, index: usize) -> Result<(K, V), Error> {
        Ok(self.map.remove_at(index)?)
    }

    pub fn key_at(&self, index: usize) -> Result<&K, Error> {
        Ok(self.map.key_at(index)?)
    }

    pub fn value_at(&self, index: usize) -> Result<&V, Error> {
        Ok(self.map.value_at(index)?)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    pub fn contains_index(&self, index: usize) -> bool {
        self.map.contains_index(index)
    }

    pub fn position(&self, key: &K) -> Result<usize, Error> {
        Ok(self.map.position(key)?)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear()
    }

    pub fn keys(&self) -> &[K] {
        self.map.keys()
    }

    pub fn values(&self) -> &[V] {
        self.map.values()
    }

    pub fn iter(&self) -> std::iter::Zip<std::slice::Iter<'_, K>, std::slice::Iter<'_, V>> {
        self.map.iter()
    }

    /// Releases the wrapped map, discarding the validators.
    pub fn into_inner(self) -> Map<K, V> {
        self.map
    }
}

impl<K: PartialEq, V> Default for ValidatingMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: std::fmt::Debug, V: std::fmt::Debug> std::fmt::Debug for ValidatingMap<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatingMap")
            .field("map", &self.map)
            .field("key_validator", &self.key_validator.is_some())
            .field("value_validator", &self.value_validator.is_some())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn even_keys() -> Option<Validator<i32>> {
        Some(Box::new(|key| {
            if key % 2 == 0 {
                Ok(())
            } else {
                Err(format!("key {} is not even", key))
            }
        }))
    }

    fn short_values() -> Option<Validator<String>> {
        Some(Box::new(|value: &String| {
            if value.len() <= 3 {
                Ok(())
            } else {
                Err("value too long".to_string())
            }
        }))
    }

    #[test]
    fn no_validators_passes_everything_through() {
        let mut map = ValidatingMap::new();
        map.add(1, 2).unwrap();
        assert_eq!(map.keys(), &[1]);
        assert_eq!(map.values(), &[2]);
    }

    #[test]
    fn rejected_key_leaves_the_map_empty() {
        let mut map = ValidatingMap::with_validators(even_keys(), None);
        let result = map.add(1, "x".to_string());
        assert_eq!(
            result,
            Err(Error::Rejected("key 1 is not even".to_string()))
        );
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
    }

    #[test]
    fn accepted_key_is_inserted() {
        let mut map = ValidatingMap::with_validators(even_keys(), None);
        map.add(2, "x".to_string()).unwrap();
        assert_eq!(map.keys(), &[2]);
        assert_eq!(map.values(), &["x".to_string()]);
    }

    #[test]
    fn rejected_value_leaves_the_map_empty() {
        let mut map = ValidatingMap::with_validators(None, short_values());
        let result = map.add(1, "too long for this map".to_string());
        assert_eq!(result, Err(Error::Rejected("value too long".to_string())));
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn accepted_value_is_inserted() {
        let mut map = ValidatingMap::with_validators(None, short_values());
        map.add(1, "ok".to_string()).unwrap();
        assert_eq!(map.keys(), &[1]);
        assert_eq!(map.values(), &["ok".to_string()]);
    }

    #[test]
    fn key_check_runs_before_value_check() {
        let mut map = ValidatingMap::with_validators(even_keys(), short_values());
        // both would fail; the key's reason must win
        let result = map.add(3, "too long for this map".to_string());
        assert_eq!(
            result,
            Err(Error::Rejected("key 3 is not even".to_string()))
        );
    }

    #[test]
    fn set_is_validated_too() {
        let mut map = ValidatingMap::with_validators(even_keys(), None);
        assert!(map.set(1, "x".to_string()).is_err());
        assert_eq!(map.len(), 0);

        assert_eq!(map.set(2, "x".to_string()).unwrap(), None);
        assert_eq!(
            map.set(2, "y".to_string()).unwrap(),
            Some("x".to_string())
        );
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn duplicate_add_surfaces_the_map_error() {
        let mut map = ValidatingMap::with_validators(even_keys(), None);
        map.add(2, "x".to_string()).unwrap();
        let result = map.add(2, "y".to_string());
        assert_eq!(result, Err(Error::Map(seqmap::Error::DuplicateKey)));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn reads_and_deletions_skip_validation() {
        // a validator that rejects everything still allows reads and removal
        let reject_all: Option<Validator<i32>> =
            Some(Box::new(|_| Err("no".to_string())));
        let mut map = ValidatingMap {
            map: Map::from_pairs([(1, 10)]).unwrap(),
            key_validator: reject_all,
            value_validator: None,
        };

        assert_eq!(map.get(&1), Ok(&10));
        assert_eq!(map.position(&1), Ok(0));
        assert!(map.contains_key(&1));
        assert_eq!(map.remove(&1), Ok(10));
        assert!(map.is_empty());
    }

    #[test]
    fn into_inner_releases_the_wrapped_map() {
        let mut map = ValidatingMap::with_validators(even_keys(), None);
        map.add(2, "x".to_string()).unwrap();
        let inner = map.into_inner();
        assert_eq!(inner.keys(), &[2]);
    }

    #[test]
    fn missing_key_reports_key_not_found() {
        let map: ValidatingMap<i32, i32> = ValidatingMap::new();
        assert_eq!(map.get(&1), Err(Error::Map(seqmap::Error::KeyNotFound)));
    }
}
