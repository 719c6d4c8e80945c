// Copyright 2025 the Relcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Relcanvas Selection: highlight and selection state for interactive canvases.
//!
//! This crate decides _which_ object a pointer is over and keeps track of what
//! is highlighted and selected. It does not draw anything: each kind of object
//! is described by a [`SelectionClass`] which knows how to enumerate live
//! objects, test them against a point, and turn visual emphasis on and off.
//!
//! [`SelectionManager`] turns pointer events into transitions:
//! - [`SelectionManager::pointer_moved`] moves the single highlight.
//! - [`SelectionManager::pointer_pressed`] replaces, toggles or extends the
//!   selection, never mixing classes in one selection.
//! - [`SelectionManager::unref`] forgets an object before its handle dies.
//!
//! Classes are probed in descending priority (ties in registration order); the
//! first object that reports a hit wins.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use relcanvas_selection::{ClassSpec, SelectionClass, SelectionManager};
//!
//! /// Boxes on a canvas, addressed by index; `lit` records emphasis changes.
//! #[derive(Default)]
//! struct Canvas {
//!     boxes: Vec<Rect>,
//!     lit: Vec<(usize, &'static str)>,
//! }
//!
//! struct Boxes;
//!
//! impl SelectionClass<usize, Canvas> for Boxes {
//!     fn is_over(&self, canvas: &Canvas, object: usize, pt: Point) -> bool {
//!         canvas.boxes[object].contains(pt)
//!     }
//!     fn live_objects<'a>(&'a self, canvas: &'a Canvas) -> Box<dyn Iterator<Item = usize> + 'a> {
//!         Box::new(0..canvas.boxes.len())
//!     }
//!     fn highlight(&self, canvas: &mut Canvas, object: usize) { canvas.lit.push((object, "hi")); }
//!     fn unhighlight(&self, canvas: &mut Canvas, object: usize) { canvas.lit.push((object, "lo")); }
//!     fn select(&self, canvas: &mut Canvas, object: usize) { canvas.lit.push((object, "sel")); }
//!     fn unselect(&self, canvas: &mut Canvas, object: usize) { canvas.lit.push((object, "unsel")); }
//! }
//!
//! let canvas = Canvas {
//!     boxes: vec![Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(20.0, 0.0, 30.0, 10.0)],
//!     ..Canvas::default()
//! };
//! let mut manager = SelectionManager::new(canvas);
//! manager.register_class(ClassSpec::new(0, true, "boxes"), Boxes).unwrap();
//!
//! assert!(manager.pointer_pressed(Point::new(5.0, 5.0), false));
//! assert!(manager.pointer_pressed(Point::new(25.0, 5.0), true));
//! assert_eq!(manager.selected(), &[0, 1]);
//! assert_eq!(manager.selection_class(), Some(&"boxes"));
//!
//! // Pressing on empty space clears everything.
//! assert!(manager.pointer_pressed(Point::new(50.0, 50.0), false));
//! assert!(!manager.has_selection());
//! assert_eq!(manager.data().lit.len(), 4);
//! ```
//!
//! ## Features
//!
//! - `graph` (default): node and edge classes for `relcanvas_graph` layouts,
//!   see the [`graph`] module.
//! - `tracing`: emit `tracing` events for highlight and selection changes.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod class;
mod manager;
mod set;

#[cfg(feature = "graph")]
pub mod graph;

pub use class::{ClassId, ClassSpec, RegisterError, SelectionClass};
pub use manager::{SelectionManager, SelectionSnapshot};
pub use set::SelectedSet;
