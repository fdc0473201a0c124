use crate::Error;

/// A key/value mapping that keeps the relative insertion order of its keys.
///
/// Keys are compared with `PartialEq` only, so nearly any type can act as a
/// key. Every lookup is a linear scan over the keys: the trade-off is
/// generality over speed, and it keeps non-hashable, non-ordered key types
/// usable.
///
/// Index positions start at 0. Deleting an entry shifts every later entry
/// down by one, so absolute positions move but relative order never does.
/// [`Map::add`] refuses a key that is already present; [`Map::set`]
/// overwrites the value in place without moving the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
}

impl<K, V> Map<K, V> {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }

    /// The keys in insertion order.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// The values, parallel to [`Map::keys`].
    pub fn values(&self) -> &[V] {
        &self.values
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.keys.len()
    }

    pub fn key_at(&self, index: usize) -> Result<&K, Error> {
        self.keys.get(index).ok_or(Error::IndexOutOfRange(index))
    }

    pub fn value_at(&self, index: usize) -> Result<&V, Error> {
        self.values.get(index).ok_or(Error::IndexOutOfRange(index))
    }

    /// Removes the entry at `index`. Later entries shift down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<(K, V), Error> {
        if index >= self.keys.len() {
            return Err(Error::IndexOutOfRange(index));
        }
        Ok((self.keys.remove(index), self.values.remove(index)))
    }

    pub fn iter(&self) -> std::iter::Zip<std::slice::Iter<'_, K>, std::slice::Iter<'_, V>> {
        self.keys.iter().zip(self.values.iter())
    }
}

impl<K: PartialEq, V> Map<K, V> {
    /// Builds a map from `(key, value)` pairs, keeping the iteration order.
    ///
    /// A repeated key is an error; a well-formed source mapping cannot
    /// contain one. Use `collect()` instead for last-write-wins semantics.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::new();
        for (key, value) in pairs {
            map.add(key, value)?;
        }
        Ok(map)
    }

    /// Builds a map pairing `keys[i]` with `values[i]`.
    ///
    /// Only the lengths are checked. The caller is responsible for the keys
    /// being distinct.
    pub fn from_vecs(keys: Vec<K>, values: Vec<V>) -> Result<Self, Error> {
        if keys.len() != values.len() {
            return Err(Error::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }
        Ok(Self { keys, values })
    }

    fn scan(&self, key: &K) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.scan(key).is_some()
    }

    pub fn position(&self, key: &K) -> Result<usize, Error> {
        self.scan(key).ok_or(Error::KeyNotFound)
    }

    pub fn get(&self, key: &K) -> Result<&V, Error> {
        let index = self.scan(key).ok_or(Error::KeyNotFound)?;
        Ok(&self.values[index])
    }

    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, Error> {
        let index = self.scan(key).ok_or(Error::KeyNotFound)?;
        Ok(&mut self.values[index])
    }

    /// Appends a new entry, erroring if the key is already present.
    pub fn add(&mut self, key: K, value: V) -> Result<(), Error> {
        if self.contains_key(&key) {
            return Err(Error::DuplicateKey);
        }
        self.keys.push(key);
        self.values.push(value);
        Ok(())
    }

    /// Overwrites the value for `key` in place, returning the old value, or
    /// appends a new entry if the key is absent.
    ///
    /// An existing key keeps its position.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        match self.scan(&key) {
            Some(index) => Some(std::mem::replace(&mut self.values[index], value)),
            None => {
                self.keys.push(key);
                self.values.push(value);
                None
            }
        }
    }

    /// Removes the entry for `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Result<V, Error> {
        let index = self.scan(key).ok_or(Error::KeyNotFound)?;
        self.keys.remove(index);
        Ok(self.values.remove(index))
    }
}

impl<K, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> IntoIterator for Map<K, V> {
    type Item = (K, V);
    type IntoIter = std::iter::Zip<std::vec::IntoIter<K>, std::vec::IntoIter<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter().zip(self.values)
    }
}

impl<'a, K, V> IntoIterator for &'a Map<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = std::iter::Zip<std::slice::Iter<'a, K>, std::slice::Iter<'a, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: PartialEq, V> Extend<(K, V)> for Map<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

// A derive would generate the two vectors independently and break the
// equal-length invariant, so build from pairs instead.
#[cfg(feature = "fuzz")]
impl<'a, K, V> arbitrary::Arbitrary<'a> for Map<K, V>
where
    K: arbitrary::Arbitrary<'a> + PartialEq,
    V: arbitrary::Arbitrary<'a>,
{
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut map = Map::new();
        for (key, value) in Vec::<(K, V)>::arbitrary(u)? {
            map.set(key, value);
        }
        Ok(map)
    }
}
