// Copyright 2025 the Relcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection classes: one capability object per kind of selectable object.

use alloc::boxed::Box;
use core::fmt;

use kurbo::Point;

/// Behaviour of one kind of selectable object (for example "nodes" or "edges").
///
/// `O` is the object handle shared by every class registered with a manager;
/// `D` is the manager's data, typically the canvas that owns the manager. Hit
/// testing and enumeration only read `D`; the four visual callbacks get it
/// mutably so the view can update emphasis and schedule a repaint.
///
/// Classes are immutable once registered.
pub trait SelectionClass<O, D> {
    /// Returns `true` if `pt` lies within the sensor region of `object`.
    fn is_over(&self, data: &D, object: O, pt: Point) -> bool;

    /// Enumerates every live object of this kind, in probe order.
    fn live_objects<'a>(&'a self, data: &'a D) -> Box<dyn Iterator<Item = O> + 'a>;

    /// `object` became the highlighted object.
    fn highlight(&self, data: &mut D, object: O);

    /// `object` stopped being the highlighted object.
    fn unhighlight(&self, data: &mut D, object: O);

    /// `object` joined the selection.
    fn select(&self, data: &mut D, object: O);

    /// `object` left the selection.
    fn unselect(&self, data: &mut D, object: O);
}

/// Registration parameters of a selection class.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassSpec<T> {
    /// Classes with a larger priority are probed first.
    pub priority: i32,
    /// Whether objects of this class can be added to a non-empty selection
    /// with the multi-select modifier.
    pub multiple: bool,
    /// Caller-defined discriminator reported with the selection.
    pub tag: T,
}

impl<T> ClassSpec<T> {
    /// Creates a spec.
    #[must_use]
    pub const fn new(priority: i32, multiple: bool, tag: T) -> Self {
        Self {
            priority,
            multiple,
            tag,
        }
    }
}

/// Handle of a registered class, assigned in registration order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassId(pub(crate) u32);

impl ClassId {
    /// Zero-based registration index of the class.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Error returned by [`SelectionManager::register_class`](crate::SelectionManager::register_class).
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum RegisterError {
    /// A class with an equal tag is already registered.
    DuplicateTag {
        /// The class already holding the tag.
        existing: ClassId,
    },
}

impl fmt::Debug for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTag { existing } => write!(
                f,
                "RegisterError::DuplicateTag {{ existing: {} }}",
                existing.0
            ),
        }
    }
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTag { existing } => write!(
                f,
                "a selection class with this tag is already registered as class {}",
                existing.0
            ),
        }
    }
}

impl core::error::Error for RegisterError {}
