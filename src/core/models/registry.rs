//! Ordered, keyed collection used for students, instructors, and courses

use std::fmt::Display;

/// An entity identified by a key (numeric id or course code)
pub trait Keyed {
    /// Key type, e.g. `i64` for people and `str` for courses
    type Key: ?Sized + PartialEq + Display;

    /// The entity's key
    fn key(&self) -> &Self::Key;
}

/// Insertion-ordered collection of keyed entities
///
/// Lookups scan linearly and return the first match, so if duplicate keys
/// were pushed the earliest entity wins.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    items: Vec<T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Keyed> Registry<T> {
    /// Create an empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append without checking for an existing key
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Append only if no entity already has this key
    ///
    /// # Errors
    /// Returns the rejected item when the key is taken
    pub fn insert(&mut self, item: T) -> Result<(), T> {
        if self.contains_key(item.key()) {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove every entity with this key, keeping the others in order
    ///
    /// # Returns
    /// The removed entities, in their original order
    pub fn remove_by_key(&mut self, key: &T::Key) -> Vec<T> {
        let (removed, kept): (Vec<T>, Vec<T>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| item.key() == key);
        self.items = kept;
        removed
    }

    /// First entity with this key
    #[must_use]
    pub fn find(&self, key: &T::Key) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    /// Mutable reference to the first entity with this key
    pub fn find_mut(&mut self, key: &T::Key) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.key() == key)
    }

    /// Whether any entity has this key
    #[must_use]
    pub fn contains_key(&self, key: &T::Key) -> bool {
        self.find(key).is_some()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterate mutably in insertion order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Number of entities
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the registry holds no entities
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T: Keyed> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        key: i64,
        label: &'static str,
    }

    impl Keyed for Item {
        type Key = i64;

        fn key(&self) -> &i64 {
            &self.key
        }
    }

    fn item(key: i64, label: &'static str) -> Item {
        Item { key, label }
    }

    #[test]
    fn test_push_allows_duplicates_and_find_returns_first() {
        let mut registry = Registry::new();
        registry.push(item(1, "first"));
        registry.push(item(1, "second"));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find(&1).unwrap().label, "first");
    }

    #[test]
    fn test_insert_rejects_duplicate() {
        let mut registry = Registry::new();
        assert!(registry.insert(item(1, "first")).is_ok());

        let rejected = registry.insert(item(1, "second")).unwrap_err();
        assert_eq!(rejected.label, "second");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_by_key_is_stable() {
        let mut registry = Registry::new();
        registry.push(item(1, "a"));
        registry.push(item(2, "b"));
        registry.push(item(1, "c"));
        registry.push(item(3, "d"));

        let removed = registry.remove_by_key(&1);

        assert_eq!(removed, vec![item(1, "a"), item(1, "c")]);
        let remaining: Vec<&str> = registry.iter().map(|i| i.label).collect();
        assert_eq!(remaining, vec!["b", "d"]);
        assert!(registry.find(&1).is_none());
    }

    #[test]
    fn test_remove_missing_key() {
        let mut registry = Registry::new();
        registry.push(item(1, "a"));

        assert!(registry.remove_by_key(&9).is_empty());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_find_mut() {
        let mut registry = Registry::new();
        registry.push(item(5, "old"));

        registry.find_mut(&5).unwrap().label = "new";
        assert_eq!(registry.find(&5).unwrap().label, "new");
        assert!(registry.find_mut(&6).is_none());
    }
}
