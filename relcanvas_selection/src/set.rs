// Copyright 2025 the Relcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered, duplicate-free storage for the selected objects.

use alloc::vec::Vec;

/// The set of selected objects, in the order they were added.
///
/// `SelectedSet` does not impose hashing or ordering constraints on `T`; it
/// only requires equality. Keys live in a small `Vec<T>` and uniqueness is
/// enforced by scanning, which suits the handful of objects a canvas selection
/// typically holds.
///
/// A revision counter bumps whenever the contents change, and only then, so
/// observers can cheaply tell whether anything happened.
#[derive(Clone, Debug, Default)]
pub struct SelectedSet<T> {
    items: Vec<T>,
    revision: u64,
}

impl<T> SelectedSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of selected objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the selected objects in insertion order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the selected objects.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the most recently added object, if any.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the current revision counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Removes everything. Bumps the revision only if something was selected.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.bump_revision();
    }

    /// Removes and returns everything, in insertion order.
    pub fn take_all(&mut self) -> Vec<T> {
        if self.items.is_empty() {
            return Vec::new();
        }
        self.bump_revision();
        core::mem::take(&mut self.items)
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T> SelectedSet<T>
where
    T: PartialEq,
{
    /// Returns `true` if `key` is selected.
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.position_of(key).is_some()
    }

    /// Adds `key` at the end. Returns `false` if it was already present.
    pub fn insert(&mut self, key: T) -> bool {
        if self.contains(&key) {
            return false;
        }
        self.items.push(key);
        self.bump_revision();
        true
    }

    /// Removes `key`. Returns `false` if it was not present.
    pub fn remove(&mut self, key: &T) -> bool {
        let Some(idx) = self.position_of(key) else {
            return false;
        };
        self.items.remove(idx);
        self.bump_revision();
        true
    }

    fn position_of(&self, key: &T) -> Option<usize> {
        self.items.iter().position(|k| k == key)
    }
}

impl<'a, T> IntoIterator for &'a SelectedSet<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
