// Copyright 2026 the Annular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for rendering embeddings.
//!
//! Annular splits platform-specific work into *backend* crates. Each
//! backend provides the following pieces:
//!
//! - **Pointer delivery** — Translates platform input into widget-local
//!   coordinates and feeds [`RingAllocator::pointer_down`], `pointer_move`,
//!   and `pointer_up`. Down events go through normal element hit paths;
//!   move/up listeners belong on the global input surface (window or
//!   document) for the duration of a gesture, per the
//!   [`CaptureOp`](crate::drag::CaptureOp) values in each
//!   [`InputResponse`](crate::ring::InputResponse), so fast drags that leave
//!   the widget bounds are not lost. Touch backends must also suppress
//!   default scrolling while a gesture is captured.
//!
//! - **Weight forwarding** — Hands each emitted weight vector to whatever
//!   parent state owns the allocation. The widget guarantees the vector is
//!   normalized; it never surfaces errors through this path.
//!
//! - **Presenter** — Implements the [`Presenter`] trait to apply drained
//!   changes to a native scene (SVG document, DOM elements, a GPU plan).
//!
//! # Crate boundaries
//!
//! `annular_core` owns the data model, interaction, evaluation, and this
//! contract module. Backend crates depend on `annular_core` (and usually
//! `annular_render` for plan building) and provide platform glue.

use crate::ring::{RingAllocator, RingChanges};

/// Applies evaluated widget changes to a backing presentation.
///
/// Presenters may be incremental (consume the index lists in
/// [`RingChanges`]) or rebuild wholesale on any change; both are valid.
/// Generic update loops and test doubles program against this trait.
///
/// # Update loop pseudocode
///
/// ```rust,ignore
/// fn on_pointer_move(point: Point) {
///     let response = ring.pointer_move(point);
///     if let Some(weights) = response.weights {
///         owner.store(weights);
///     }
///     let changes = ring.evaluate();
///     presenter.apply(&ring, &changes);
/// }
/// ```
pub trait Presenter {
    /// Applies the given [`RingChanges`], reading current state from `ring`
    /// as needed.
    fn apply(&mut self, ring: &RingAllocator, changes: &RingChanges);
}
