// Copyright 2026 the Annular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture instrumentation.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! widget calls at each interaction stage. All method bodies default to
//! no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a handle is grabbed and a gesture begins.
#[derive(Clone, Copy, Debug)]
pub struct GestureStartEvent {
    /// Index of the grabbed boundary.
    pub boundary: usize,
}

/// Emitted on every drag movement, including the immediate update on
/// pointer-down.
#[derive(Clone, Copy, Debug)]
pub struct GestureMoveEvent {
    /// Index of the held boundary.
    pub boundary: usize,
    /// Ring fraction at the pointer, before clamping.
    pub requested: f64,
    /// The fraction actually stored, after the neighbor clamp.
    pub clamped: f64,
}

/// Emitted when a gesture ends.
#[derive(Clone, Copy, Debug)]
pub struct GestureEndEvent {
    /// Index of the released boundary.
    pub boundary: usize,
    /// Whether the gesture ended by external cancellation (state reset)
    /// rather than pointer release.
    pub cancelled: bool,
}

/// Emitted when the widget's state is replaced from outside (new weight
/// vector or category set).
#[derive(Clone, Copy, Debug)]
pub struct ResetEvent {
    /// Category count after the reset.
    pub category_count: usize,
    /// Whether an in-progress drag was cancelled by the reset.
    pub drag_cancelled: bool,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the widget.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a gesture begins.
    fn on_gesture_start(&mut self, e: &GestureStartEvent) {
        _ = e;
    }

    /// Called on every drag movement.
    fn on_gesture_move(&mut self, e: &GestureMoveEvent) {
        _ = e;
    }

    /// Called when a gesture ends.
    fn on_gesture_end(&mut self, e: &GestureEndEvent) {
        _ = e;
    }

    /// Called with each emitted normalized weight vector.
    fn on_weights(&mut self, weights: &[f64]) {
        _ = weights;
    }

    /// Called on an external state reset.
    fn on_reset(&mut self, e: &ResetEvent) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`GestureStartEvent`].
    #[inline]
    pub fn gesture_start(&mut self, e: &GestureStartEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_gesture_start(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`GestureMoveEvent`].
    #[inline]
    pub fn gesture_move(&mut self, e: &GestureMoveEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_gesture_move(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`GestureEndEvent`].
    #[inline]
    pub fn gesture_end(&mut self, e: &GestureEndEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_gesture_end(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a weight vector.
    #[inline]
    pub fn weights(&mut self, weights: &[f64]) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_weights(weights);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = weights;
        }
    }

    /// Emits a [`ResetEvent`].
    #[inline]
    pub fn reset(&mut self, e: &ResetEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_reset(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
