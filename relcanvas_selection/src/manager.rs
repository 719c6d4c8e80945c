// Copyright 2025 the Relcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selection manager: pointer events in, highlight/selection transitions out.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;

use crate::class::{ClassId, ClassSpec, RegisterError, SelectionClass};
use crate::set::SelectedSet;

struct Registered<O, T, D> {
    id: ClassId,
    spec: ClassSpec<T>,
    class: Box<dyn SelectionClass<O, D>>,
}

/// A copy of the current selection together with its class tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionSnapshot<'a, O, T> {
    /// Selected objects in the order they were added.
    pub objects: Vec<O>,
    /// Tag of the class every selected object belongs to; `None` when empty.
    pub tag: Option<&'a T>,
}

/// Tracks the highlighted object and the selected set of a canvas.
///
/// Classes are registered once, each describing one kind of object. Pointer
/// events are resolved against them in descending priority order (ties in
/// registration order); within a class objects are probed in the order the
/// class enumerates them, and the first hit wins.
///
/// - At most one object is highlighted at a time, across all classes.
/// - The selection is empty or homogeneous: every member belongs to the
///   same class.
///
/// The manager stores object handles only. Whoever owns the objects must call
/// [`SelectionManager::unref`] before a handle becomes invalid or is reused.
///
/// `D` is the manager's data, usually the canvas that owns it. It is handed to
/// every class callback.
pub struct SelectionManager<O, T, D> {
    classes: Vec<Registered<O, T, D>>,
    next_class: u32,
    highlighted: Option<(O, ClassId)>,
    selected: SelectedSet<O>,
    selected_class: Option<ClassId>,
    data: D,
}

impl<O, T, D> fmt::Debug for SelectionManager<O, T, D>
where
    O: fmt::Debug,
    T: fmt::Debug,
    D: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let classes: Vec<_> = self
            .classes
            .iter()
            .map(|entry| (entry.id, &entry.spec))
            .collect();
        f.debug_struct("SelectionManager")
            .field("classes", &classes)
            .field("next_class", &self.next_class)
            .field("highlighted", &self.highlighted)
            .field("selected", &self.selected)
            .field("selected_class", &self.selected_class)
            .field("data", &self.data)
            .finish()
    }
}

impl<O, T, D> SelectionManager<O, T, D>
where
    O: Copy + PartialEq,
{
    /// Creates a manager with no classes, nothing highlighted and nothing selected.
    pub fn new(data: D) -> Self {
        Self {
            classes: Vec::new(),
            next_class: 0,
            highlighted: None,
            selected: SelectedSet::new(),
            selected_class: None,
            data,
        }
    }

    /// Registers a class.
    ///
    /// The class is inserted after every class with a greater or equal
    /// priority, so probing runs in descending priority and equal priorities
    /// keep their registration order.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError::DuplicateTag`] if a class with an equal tag is
    /// already registered; the new class is dropped.
    pub fn register_class(
        &mut self,
        spec: ClassSpec<T>,
        class: impl SelectionClass<O, D> + 'static,
    ) -> Result<ClassId, RegisterError>
    where
        T: PartialEq,
    {
        if let Some(existing) = self.classes.iter().find(|entry| entry.spec.tag == spec.tag) {
            return Err(RegisterError::DuplicateTag {
                existing: existing.id,
            });
        }
        let id = ClassId(self.next_class);
        self.next_class += 1;
        let at = self
            .classes
            .iter()
            .position(|entry| entry.spec.priority < spec.priority)
            .unwrap_or(self.classes.len());
        self.classes.insert(
            at,
            Registered {
                id,
                spec,
                class: Box::new(class),
            },
        );
        Ok(id)
    }

    /// Number of registered classes.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Registered classes in probe order.
    pub fn class_ids(&self) -> impl Iterator<Item = ClassId> + '_ {
        self.classes.iter().map(|entry| entry.id)
    }

    /// Tag of class `id`.
    #[must_use]
    pub fn class_tag(&self, id: ClassId) -> Option<&T> {
        self.entry(id).map(|entry| &entry.spec.tag)
    }

    /// Finds the object under `pt`.
    ///
    /// Classes are probed in priority order and objects in enumeration order;
    /// the first object whose sensor contains `pt` wins.
    #[must_use]
    pub fn first_hit(&self, pt: Point) -> Option<(O, ClassId)> {
        let data = &self.data;
        self.classes.iter().find_map(|entry| {
            entry
                .class
                .live_objects(data)
                .find(|&object| entry.class.is_over(data, object, pt))
                .map(|object| (object, entry.id))
        })
    }

    /// Updates the highlight for a pointer at `pt`.
    ///
    /// Returns `true` if the highlighted object changed. The previous object
    /// (if any) is unhighlighted before the new one (if any) is highlighted.
    pub fn pointer_moved(&mut self, pt: Point) -> bool {
        let hit = self.first_hit(pt);
        if hit.map(|(object, _)| object) == self.highlighted() {
            return false;
        }
        if let Some((old, class)) = self.highlighted.take() {
            self.invoke(class, |c, data| c.unhighlight(data, old));
        }
        if let Some((object, class)) = hit {
            self.highlighted = Some((object, class));
            self.invoke(class, |c, data| c.highlight(data, object));
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            class = hit.map(|(_, class)| class.0),
            "highlight changed"
        );
        true
    }

    /// Handles a primary-button press at `pt`.
    ///
    /// `multi` is the multi-select modifier (usually Ctrl). Returns `true` if
    /// the selection changed.
    ///
    /// - Pressing on nothing clears the selection.
    /// - Pressing on a selected object removes just that object.
    /// - With `multi`, a non-empty selection and a class that allows multiple
    ///   selection, the object is added, unless it belongs to a different
    ///   class than the current selection, in which case nothing changes.
    /// - Otherwise the selection is replaced by the object.
    pub fn pointer_pressed(&mut self, pt: Point, multi: bool) -> bool {
        let Some((object, class)) = self.first_hit(pt) else {
            return self.unselect_all();
        };

        if self.selected.remove(&object) {
            if self.selected.is_empty() {
                self.selected_class = None;
            }
            self.invoke(class, |c, data| c.unselect(data, object));
            return true;
        }

        let multiple = self.entry(class).is_some_and(|entry| entry.spec.multiple);
        if multiple && multi && !self.selected.is_empty() {
            if self.selected_class != Some(class) {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    class = class.0,
                    selected_class = self.selected_class.map(|c| c.0),
                    "refusing to mix classes in one selection"
                );
                return false;
            }
            self.selected.insert(object);
            self.invoke(class, |c, data| c.select(data, object));
            return true;
        }

        self.unselect_all();
        self.selected_class = Some(class);
        self.selected.insert(object);
        self.invoke(class, |c, data| c.select(data, object));
        #[cfg(feature = "tracing")]
        tracing::debug!(class = class.0, "selection replaced");
        true
    }

    /// Forgets `object` before its handle becomes invalid.
    ///
    /// If it is highlighted it is unhighlighted; if it is selected it is
    /// unselected and removed, leaving other members alone. Otherwise this
    /// does nothing.
    pub fn unref(&mut self, object: O) {
        if let Some((highlighted, class)) = self.highlighted
            && highlighted == object
        {
            self.highlighted = None;
            self.invoke(class, |c, data| c.unhighlight(data, object));
        }
        if self.selected.remove(&object) {
            let class = self.selected_class;
            if self.selected.is_empty() {
                self.selected_class = None;
            }
            if let Some(class) = class {
                self.invoke(class, |c, data| c.unselect(data, object));
            }
        }
    }

    /// Returns a copy of the selection and the tag of its class.
    #[must_use]
    pub fn selection(&self) -> SelectionSnapshot<'_, O, T> {
        SelectionSnapshot {
            objects: self.selected.items().to_vec(),
            tag: self.selection_class(),
        }
    }

    /// Selected objects in the order they were added.
    #[must_use]
    pub fn selected(&self) -> &[O] {
        self.selected.items()
    }

    /// Returns `true` if anything is selected.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Returns `true` if `object` is selected.
    #[must_use]
    pub fn is_selected(&self, object: O) -> bool {
        self.selected.contains(&object)
    }

    /// Tag of the class of the current selection; `None` when nothing is selected.
    #[must_use]
    pub fn selection_class(&self) -> Option<&T> {
        self.selected_class.and_then(|id| self.class_tag(id))
    }

    /// Revision of the selected set; bumps on every change.
    #[must_use]
    pub fn selection_revision(&self) -> u64 {
        self.selected.revision()
    }

    /// Empties the selection without calling `unselect` on anything.
    ///
    /// Meant for teardown, when the view is going away anyway.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
        self.selected_class = None;
    }

    /// The highlighted object, if any.
    #[must_use]
    pub fn highlighted(&self) -> Option<O> {
        self.highlighted.map(|(object, _)| object)
    }

    /// Tag of the highlighted object's class, if anything is highlighted.
    #[must_use]
    pub fn highlighted_class(&self) -> Option<&T> {
        self.highlighted.and_then(|(_, id)| self.class_tag(id))
    }

    /// Drops the highlight without calling `unhighlight`. Meant for teardown.
    pub fn clear_highlight(&mut self) {
        self.highlighted = None;
    }

    /// The manager's data.
    #[must_use]
    pub fn data(&self) -> &D {
        &self.data
    }

    /// The manager's data, mutably.
    pub fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }

    /// Replaces the manager's data and returns the previous value.
    pub fn set_data(&mut self, data: D) -> D {
        core::mem::replace(&mut self.data, data)
    }

    /// Consumes the manager and returns its data.
    pub fn into_data(self) -> D {
        self.data
    }

    fn entry(&self, id: ClassId) -> Option<&Registered<O, T, D>> {
        self.classes.iter().find(|entry| entry.id == id)
    }

    /// Calls `f` with class `id` and the data.
    fn invoke(&mut self, id: ClassId, f: impl FnOnce(&dyn SelectionClass<O, D>, &mut D)) {
        if let Some(entry) = self.classes.iter().find(|entry| entry.id == id) {
            f(entry.class.as_ref(), &mut self.data);
        }
    }

    /// Unselects and removes every member. Returns `true` if there were any.
    fn unselect_all(&mut self) -> bool {
        let members = self.selected.take_all();
        let Some(class) = self.selected_class.take() else {
            return !members.is_empty();
        };
        let changed = !members.is_empty();
        for object in members {
            self.invoke(class, |c, data| c.unselect(data, object));
        }
        changed
    }
}
