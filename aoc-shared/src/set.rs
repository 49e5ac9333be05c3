use std::collections::HashSet;
use std::collections::hash_set;
use std::fmt;
use std::hash::Hash;

/// Unordered collection of distinct values.
///
/// Iteration order is unspecified; callers that need a stable order sort the
/// result of [`Set::items`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Set<T: Eq + Hash> {
    inner: HashSet<T>,
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> Set<T> {
    pub fn new() -> Self {
        Self {
            inner: HashSet::new(),
        }
    }

    /// Inserts `value`; returns `true` if it was not already present.
    pub fn add(&mut self, value: T) -> bool {
        self.inner.insert(value)
    }

    /// Removes `value`; returns `true` if it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.inner.remove(value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.inner.contains(value)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.inner.iter()
    }

    /// Moves every element of `other` into `self`.
    pub fn absorb(&mut self, other: Set<T>) {
        self.inner.extend(other.inner);
    }

    /// Arbitrary element, left in place.
    pub fn peek(&self) -> Option<&T> {
        self.inner.iter().next()
    }
}

impl<T: Eq + Hash + Clone> Set<T> {
    /// Snapshot of the members in unspecified order.
    pub fn items(&self) -> Vec<T> {
        self.inner.iter().cloned().collect()
    }

    /// Elements of `self` not in `other`.
    pub fn difference(&self, other: &Set<T>) -> Set<T> {
        self.inner.difference(&other.inner).cloned().collect()
    }

    /// Removes and returns an arbitrary element.
    pub fn pop(&mut self) -> Option<T> {
        let value = self.inner.iter().next()?.clone();
        self.inner.remove(&value);
        Some(value)
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T: Eq + Hash> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T: Eq + Hash + fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, item) in self.inner.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}

/// Distinct values of `items`, keeping the first occurrence of each.
pub fn unique<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}
