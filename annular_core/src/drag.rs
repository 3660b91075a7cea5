// Copyright 2026 the Annular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture state machine.
//!
//! A drag has two phases: `Idle` and `Dragging(boundary)`. The controller
//! owns the transitions; the widget owns the boundary values and applies
//! [`clamp_to_neighbors`] on every movement so boundaries can meet but never
//! cross.
//!
//! # Capture discipline
//!
//! Real embeddings register their move/up listeners on the global input
//! surface (window or document, not the handle element) so that fast drags
//! leaving the widget bounds are not lost, and must suppress default touch
//! scrolling for the gesture's duration. The controller encodes the listener
//! lifecycle as [`CaptureOp`] values: every gesture yields exactly one
//! `Acquire` on entry and exactly one `Release` on every exit path,
//! including cancellation by an external state reset. A second pointer-down
//! while a drag is active is not a defined input and is ignored.

/// A global-listener operation the embedder must perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureOp {
    /// Attach global move/up listeners for the starting gesture.
    Acquire,
    /// Detach the listeners attached for the ending gesture.
    Release,
}

/// Interaction phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Boundary `boundary` is held and follows the pointer.
    Dragging {
        /// Index of the held boundary.
        boundary: usize,
    },
}

/// Owns the drag phase and its transitions.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragController {
    phase: DragPhase,
}

impl DragController {
    /// Creates an idle controller.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
        }
    }

    /// Current phase.
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> DragPhase {
        self.phase
    }

    /// The boundary currently being dragged, if any.
    #[inline]
    #[must_use]
    pub const fn active_boundary(&self) -> Option<usize> {
        match self.phase {
            DragPhase::Dragging { boundary } => Some(boundary),
            DragPhase::Idle => None,
        }
    }

    /// Begins a gesture on `boundary`.
    ///
    /// Returns `Some(Acquire)` on the `Idle → Dragging` transition. A
    /// pointer-down while already dragging (second simultaneous pointer) is
    /// ignored and returns `None`.
    pub fn begin(&mut self, boundary: usize) -> Option<CaptureOp> {
        match self.phase {
            DragPhase::Idle => {
                self.phase = DragPhase::Dragging { boundary };
                Some(CaptureOp::Acquire)
            }
            DragPhase::Dragging { .. } => None,
        }
    }

    /// Ends the active gesture (pointer-up anywhere, or external cancel).
    ///
    /// Returns `Some(Release)` on the `Dragging → Idle` transition, `None`
    /// if no gesture was active.
    pub fn end(&mut self) -> Option<CaptureOp> {
        match self.phase {
            DragPhase::Dragging { .. } => {
                self.phase = DragPhase::Idle;
                Some(CaptureOp::Release)
            }
            DragPhase::Idle => None,
        }
    }
}

/// Clamps a requested fraction for boundary `index` to its neighbors.
///
/// The left bound is `boundaries[index − 1]` (or 0 for the first boundary),
/// the right bound `boundaries[index + 1]` (or 1 for the last). This clamp
/// is what keeps the boundary sequence sorted: a boundary can meet a
/// neighbor (zero-size segment) but never pass it.
///
/// # Panics
///
/// Panics if `index` is out of range for `boundaries`.
#[must_use]
pub fn clamp_to_neighbors(fraction: f64, index: usize, boundaries: &[f64]) -> f64 {
    let left = if index == 0 {
        0.0
    } else {
        boundaries[index - 1]
    };
    let right = if index + 1 == boundaries.len() {
        1.0
    } else {
        boundaries[index + 1]
    };
    fraction.clamp(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_then_end_pairs_capture() {
        let mut drag = DragController::new();
        assert_eq!(drag.begin(1), Some(CaptureOp::Acquire));
        assert_eq!(drag.active_boundary(), Some(1));
        assert_eq!(drag.end(), Some(CaptureOp::Release));
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn second_pointer_is_ignored() {
        let mut drag = DragController::new();
        assert_eq!(drag.begin(0), Some(CaptureOp::Acquire));
        assert_eq!(drag.begin(2), None);
        // The original gesture is untouched.
        assert_eq!(drag.active_boundary(), Some(0));
        assert_eq!(drag.end(), Some(CaptureOp::Release));
    }

    #[test]
    fn end_while_idle_is_inert() {
        let mut drag = DragController::new();
        assert_eq!(drag.end(), None);
    }

    #[test]
    fn clamp_middle_boundary() {
        let b = [0.25, 0.5, 0.75];
        assert_eq!(clamp_to_neighbors(0.3, 1, &b), 0.3);
        assert_eq!(clamp_to_neighbors(0.1, 1, &b), 0.25);
        assert_eq!(clamp_to_neighbors(0.9, 1, &b), 0.75);
    }

    #[test]
    fn clamp_edge_boundaries() {
        let b = [0.25, 0.5, 0.75];
        assert_eq!(clamp_to_neighbors(-0.2, 0, &b), 0.0);
        assert_eq!(clamp_to_neighbors(0.6, 0, &b), 0.5);
        assert_eq!(clamp_to_neighbors(1.3, 2, &b), 1.0);
        assert_eq!(clamp_to_neighbors(0.4, 2, &b), 0.5);
    }

    #[test]
    fn clamp_single_boundary_spans_whole_ring() {
        let b = [0.5];
        assert_eq!(clamp_to_neighbors(0.01, 0, &b), 0.01);
        assert_eq!(clamp_to_neighbors(0.99, 0, &b), 0.99);
    }
}
