// Copyright 2026 the Annular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ring allocator widget state.
//!
//! [`RingAllocator`] composes the geometry, allocation, and drag modules
//! into one stateful widget. Pointer events go in (widget-local
//! coordinates), [`InputResponse`] values come out: the freshly normalized
//! weight vector on every drag movement, plus the capture operation the
//! embedder must perform on its global input surface.
//!
//! Boundary state is owned here. Between external resets it is mutated only
//! by the drag path, one boundary at a time, under the neighbor clamp —
//! so the sequence stays sorted without ever being re-sorted.

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;
use understory_dirty::{CycleHandling, DirtyTracker};

use crate::allocation::{self, NormalizeConfig};
use crate::dirty;
use crate::drag::{CaptureOp, DragController, DragPhase, clamp_to_neighbors};
use crate::geometry;
use crate::metrics::RingMetrics;
use crate::palette::{Color, color_for};
use crate::trace::{GestureEndEvent, GestureMoveEvent, GestureStartEvent, ResetEvent, Tracer};

/// Fill opacity of non-hovered sectors while another sector is hovered.
pub const SECTOR_DIM_OPACITY: f64 = 0.4;

/// Opacity of non-hovered legend rows while another row is hovered.
pub const LEGEND_DIM_OPACITY: f64 = 0.5;

#[expect(clippy::cast_possible_truncation, reason = "sector counts are tiny")]
const fn key(index: usize) -> u32 {
    index as u32
}

/// What the embedder must do after feeding the widget an input event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputResponse {
    /// A freshly normalized weight vector (length N, entries ≥ 0, summing to
    /// 1.0), present on every drag movement and never otherwise.
    pub weights: Option<Vec<f64>>,
    /// Global-listener operation required by a gesture transition, if any.
    pub capture: Option<CaptureOp>,
}

/// One legend row: category label, palette color, live percentage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendRow<'a> {
    /// Category name.
    pub label: &'a str,
    /// Sector fill color.
    pub color: Color,
    /// Segment share rounded to the nearest whole percent.
    pub percent: u32,
    /// Row opacity under the current hover state.
    pub opacity: f64,
}

/// The set of changes produced by a single [`RingAllocator::evaluate`] call.
///
/// Each field contains the sector (or handle) indices that changed in the
/// corresponding category. Presenters use these to apply incremental
/// updates.
#[derive(Clone, Debug, Default)]
pub struct RingChanges {
    /// Sectors whose arc geometry changed.
    pub fills: Vec<u32>,
    /// Handles that moved.
    pub handles: Vec<u32>,
    /// Sectors whose hover opacity changed.
    pub opacities: Vec<u32>,
    /// Sectors whose legend percentage changed.
    pub legend: Vec<u32>,
    /// Whether the category set or weight vector was replaced wholesale.
    pub structure_changed: bool,
}

impl RingChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.fills.clear();
        self.handles.clear();
        self.opacities.clear();
        self.legend.clear();
        self.structure_changed = false;
    }
}

/// A proportional ring allocator.
///
/// Divides the whole among N categories; boundary handles between adjacent
/// sectors are dragged to reallocate. See the [module docs](self) for the
/// input/output contract.
#[derive(Debug)]
pub struct RingAllocator {
    categories: Vec<String>,
    /// Last externally supplied weights, kept for the value-equality reset
    /// check in [`set_weights`](Self::set_weights).
    values: Vec<f64>,
    boundaries: Vec<f64>,
    drag: DragController,
    hover: Option<usize>,
    metrics: RingMetrics,
    config: NormalizeConfig,
    dirty: DirtyTracker<u32>,
}

impl RingAllocator {
    /// Creates a widget for `categories` with initial raw weights `values`.
    ///
    /// Weights need not sum to 1; they are coerced through the allocation
    /// module's fallbacks (length mismatch or zero sum → uniform split).
    #[must_use]
    pub fn new(
        categories: Vec<String>,
        values: &[f64],
        metrics: RingMetrics,
        config: NormalizeConfig,
    ) -> Self {
        let boundaries = allocation::boundaries_from_weights(values, categories.len(), &config);
        let mut ring = Self {
            categories,
            values: values.to_vec(),
            boundaries,
            drag: DragController::new(),
            hover: None,
            metrics,
            config,
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
        };
        ring.mark_all();
        ring
    }

    // -- Accessors --

    /// Number of categories (N).
    #[inline]
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// `true` when there are no categories (the inert empty state).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Category names, in ring order.
    #[inline]
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The boundary sequence: N−1 cut points in `[0, 1)`, sorted ascending.
    #[inline]
    #[must_use]
    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    /// Ring dimensions.
    #[inline]
    #[must_use]
    pub fn metrics(&self) -> &RingMetrics {
        &self.metrics
    }

    /// Current interaction phase.
    #[inline]
    #[must_use]
    pub fn drag_phase(&self) -> DragPhase {
        self.drag.phase()
    }

    /// Currently hovered sector, if any.
    #[inline]
    #[must_use]
    pub fn hover(&self) -> Option<usize> {
        self.hover
    }

    /// Derived segment sizes, one per category, each in `[0, 1]`.
    #[must_use]
    pub fn segments(&self) -> Vec<f64> {
        allocation::segments_from_boundaries(&self.boundaries, self.categories.len())
    }

    /// The normalized weight vector for the current boundaries.
    #[must_use]
    pub fn weights(&self) -> Vec<f64> {
        allocation::normalized(&self.segments())
    }

    /// Fill opacity of sector `index` under the current hover state.
    #[must_use]
    pub fn sector_opacity(&self, index: usize) -> f64 {
        match self.hover {
            Some(h) if h != index => SECTOR_DIM_OPACITY,
            _ => 1.0,
        }
    }

    /// Legend rows with live percentages, in category order.
    #[must_use]
    pub fn legend(&self) -> Vec<LegendRow<'_>> {
        let segments = self.segments();
        self.categories
            .iter()
            .zip(&segments)
            .enumerate()
            .map(|(i, (label, &segment))| LegendRow {
                label,
                color: color_for(i),
                percent: round_percent(segment),
                opacity: match self.hover {
                    Some(h) if h != i => LEGEND_DIM_OPACITY,
                    _ => 1.0,
                },
            })
            .collect()
    }

    // -- External resets --

    /// Replaces the weight vector from outside.
    ///
    /// A vector equal to the last supplied one is a no-op. Otherwise the
    /// boundary state is re-derived, discarding any in-progress drag (the
    /// response carries the matching capture release). No weights are
    /// emitted; programmatic resets are not user changes.
    pub fn set_weights(&mut self, values: &[f64]) -> InputResponse {
        self.set_weights_traced(values, &mut Tracer::none())
    }

    /// [`set_weights`](Self::set_weights) with tracing.
    pub fn set_weights_traced(&mut self, values: &[f64], tracer: &mut Tracer<'_>) -> InputResponse {
        if self.values == values {
            return InputResponse::default();
        }
        self.values = values.to_vec();
        self.reset_state(tracer)
    }

    /// Replaces the category set (and weights) from outside.
    ///
    /// Always re-initializes boundary state, discarding any in-progress
    /// drag.
    pub fn set_categories(&mut self, categories: Vec<String>, values: &[f64]) -> InputResponse {
        self.set_categories_traced(categories, values, &mut Tracer::none())
    }

    /// [`set_categories`](Self::set_categories) with tracing.
    pub fn set_categories_traced(
        &mut self,
        categories: Vec<String>,
        values: &[f64],
        tracer: &mut Tracer<'_>,
    ) -> InputResponse {
        let old_count = self.categories.len();
        self.categories = categories;
        self.values = values.to_vec();
        // Keys past the new count would otherwise linger in the tracker.
        for stale in self.categories.len()..old_count {
            self.dirty.remove_key(key(stale));
        }
        self.hover = None;
        self.reset_state(tracer)
    }

    fn reset_state(&mut self, tracer: &mut Tracer<'_>) -> InputResponse {
        let boundary = self.drag.active_boundary();
        let capture = self.drag.end();
        if let (Some(boundary), Some(_)) = (boundary, capture) {
            tracer.gesture_end(&GestureEndEvent {
                boundary,
                cancelled: true,
            });
        }
        self.boundaries =
            allocation::boundaries_from_weights(&self.values, self.categories.len(), &self.config);
        self.mark_all();
        tracer.reset(&ResetEvent {
            category_count: self.categories.len(),
            drag_cancelled: capture.is_some(),
        });
        InputResponse {
            weights: None,
            capture,
        }
    }

    // -- Pointer input --

    /// Feeds a pointer-down at `point` (widget-local coordinates).
    ///
    /// Hitting a handle starts a gesture and performs one immediate position
    /// update, so a click without movement still moves the handle to the
    /// clicked ring position. Misses, and pointer-downs while a gesture is
    /// already active (second simultaneous pointer), are ignored.
    pub fn pointer_down(&mut self, point: Point) -> InputResponse {
        self.pointer_down_traced(point, &mut Tracer::none())
    }

    /// [`pointer_down`](Self::pointer_down) with tracing.
    pub fn pointer_down_traced(&mut self, point: Point, tracer: &mut Tracer<'_>) -> InputResponse {
        if self.is_empty() {
            return InputResponse::default();
        }
        let Some(boundary) = geometry::handle_hit(point, &self.boundaries, &self.metrics) else {
            return InputResponse::default();
        };
        let Some(capture) = self.drag.begin(boundary) else {
            return InputResponse::default();
        };
        tracer.gesture_start(&GestureStartEvent { boundary });
        let weights = self.apply_drag_position(point, tracer);
        InputResponse {
            weights,
            capture: Some(capture),
        }
    }

    /// Feeds a pointer movement.
    ///
    /// Emits a normalized weight vector while a gesture is active; inert
    /// otherwise (hovering never emits).
    pub fn pointer_move(&mut self, point: Point) -> InputResponse {
        self.pointer_move_traced(point, &mut Tracer::none())
    }

    /// [`pointer_move`](Self::pointer_move) with tracing.
    pub fn pointer_move_traced(&mut self, point: Point, tracer: &mut Tracer<'_>) -> InputResponse {
        if self.drag.active_boundary().is_none() {
            return InputResponse::default();
        }
        InputResponse {
            weights: self.apply_drag_position(point, tracer),
            capture: None,
        }
    }

    /// Feeds a pointer release, delivered from the global input surface (the
    /// pointer need not be over the widget).
    pub fn pointer_up(&mut self) -> InputResponse {
        self.pointer_up_traced(&mut Tracer::none())
    }

    /// [`pointer_up`](Self::pointer_up) with tracing.
    pub fn pointer_up_traced(&mut self, tracer: &mut Tracer<'_>) -> InputResponse {
        let boundary = self.drag.active_boundary();
        let capture = self.drag.end();
        if let (Some(boundary), Some(_)) = (boundary, capture) {
            tracer.gesture_end(&GestureEndEvent {
                boundary,
                cancelled: false,
            });
        }
        InputResponse {
            weights: None,
            capture,
        }
    }

    /// Sets the hovered sector (from the ring or its legend row).
    ///
    /// Pure presentation: dims the other sectors, never emits weights.
    pub fn set_hover(&mut self, hover: Option<usize>) {
        if self.hover == hover {
            return;
        }
        self.hover = hover;
        for i in 0..self.categories.len() {
            self.dirty.mark(key(i), dirty::OPACITY);
        }
    }

    fn apply_drag_position(&mut self, point: Point, tracer: &mut Tracer<'_>) -> Option<Vec<f64>> {
        let boundary = self.drag.active_boundary()?;
        let requested = geometry::ring_fraction(point, self.metrics.center);
        let clamped = clamp_to_neighbors(requested, boundary, &self.boundaries);
        self.boundaries[boundary] = clamped;
        tracer.gesture_move(&GestureMoveEvent {
            boundary,
            requested,
            clamped,
        });

        // Handle `boundary` separates sectors `boundary` and `boundary + 1`.
        self.dirty.mark(key(boundary), dirty::FILL);
        self.dirty.mark(key(boundary + 1), dirty::FILL);
        self.dirty.mark(key(boundary), dirty::LEGEND);
        self.dirty.mark(key(boundary + 1), dirty::LEGEND);
        self.dirty.mark(key(boundary), dirty::HANDLE);

        let weights = self.weights();
        tracer.weights(&weights);
        Some(weights)
    }

    fn mark_all(&mut self) {
        for i in 0..self.categories.len() {
            let k = key(i);
            self.dirty.mark(k, dirty::FILL);
            self.dirty.mark(k, dirty::OPACITY);
            self.dirty.mark(k, dirty::LEGEND);
            self.dirty.mark(k, dirty::STRUCTURE);
        }
        for i in 0..self.boundaries.len() {
            self.dirty.mark(key(i), dirty::HANDLE);
        }
    }

    // -- Evaluation --

    /// Drains all dirty channels into a [`RingChanges`] for presenters.
    pub fn evaluate(&mut self) -> RingChanges {
        let fills = self.dirty.drain(dirty::FILL).deterministic().run().collect();
        let handles = self
            .dirty
            .drain(dirty::HANDLE)
            .deterministic()
            .run()
            .collect();
        let opacities = self
            .dirty
            .drain(dirty::OPACITY)
            .deterministic()
            .run()
            .collect();
        let legend = self
            .dirty
            .drain(dirty::LEGEND)
            .deterministic()
            .run()
            .collect();
        let structure: Vec<u32> = self
            .dirty
            .drain(dirty::STRUCTURE)
            .deterministic()
            .run()
            .collect();
        RingChanges {
            fills,
            handles,
            opacities,
            legend,
            structure_changed: !structure.is_empty(),
        }
    }
}

/// Rounds a segment size to the nearest whole percent.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "segment is clamped to [0, 1], so the rounded percent fits in 0..=100"
)]
fn round_percent(segment: f64) -> u32 {
    (segment * 100.0).round() as u32
}
