// Copyright 2026 the Annular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted pointer-gesture playback and invariant checking.
//!
//! Tests and demos drive a [`RingAllocator`] with a [`GestureScript`] — a
//! flat list of pointer, hover, and reset steps — and get back a
//! [`ScriptReport`] that records every weight emission and capture
//! operation, plus whether the boundary-ordering invariant held after every
//! single step. The report's checks encode the widget's contract:
//!
//! - boundaries stay sorted ascending under any input sequence;
//! - every emission is a normalized vector (entries ≥ 0, sum 1.0 ± 1e-9);
//! - capture operations strictly alternate Acquire/Release and end balanced.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

use annular_core::drag::CaptureOp;
use annular_core::geometry::handle_point;
use annular_core::ring::{InputResponse, RingAllocator};

/// One step of a scripted interaction.
#[derive(Clone, Debug)]
pub enum GestureStep {
    /// Pointer-down at a widget-local point.
    Down(Point),
    /// Pointer movement (dragging or not).
    Move(Point),
    /// Pointer release, anywhere.
    Up,
    /// Hover a sector or legend row (or clear the hover).
    Hover(Option<usize>),
    /// External weight-vector reset mid-script.
    ResetWeights(Vec<f64>),
}

/// A flat list of [`GestureStep`]s.
#[derive(Clone, Debug, Default)]
pub struct GestureScript {
    /// Steps, applied in order.
    pub steps: Vec<GestureStep>,
}

impl GestureScript {
    /// Creates an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pointer-down step.
    #[must_use]
    pub fn down(mut self, point: Point) -> Self {
        self.steps.push(GestureStep::Down(point));
        self
    }

    /// Appends a pointer-move step.
    #[must_use]
    pub fn move_to(mut self, point: Point) -> Self {
        self.steps.push(GestureStep::Move(point));
        self
    }

    /// Appends a pointer-up step.
    #[must_use]
    pub fn up(mut self) -> Self {
        self.steps.push(GestureStep::Up);
        self
    }

    /// Appends a hover step.
    #[must_use]
    pub fn hover(mut self, sector: Option<usize>) -> Self {
        self.steps.push(GestureStep::Hover(sector));
        self
    }

    /// Appends an external weight reset.
    #[must_use]
    pub fn reset(mut self, weights: Vec<f64>) -> Self {
        self.steps.push(GestureStep::ResetWeights(weights));
        self
    }
}

/// The point on the handle orbit at `fraction`, for building scripts.
#[must_use]
pub fn orbit_point(ring: &RingAllocator, fraction: f64) -> Point {
    handle_point(fraction, ring.metrics())
}

/// Builds a grab-drag-release script: pointer-down on boundary `boundary` at
/// its current position, one move per entry in `targets` (ring fractions),
/// then release.
///
/// # Panics
///
/// Panics if `boundary` is out of range.
#[must_use]
pub fn drag_script(ring: &RingAllocator, boundary: usize, targets: &[f64]) -> GestureScript {
    let start = ring.boundaries()[boundary];
    let mut script = GestureScript::new().down(orbit_point(ring, start));
    for &target in targets {
        script = script.move_to(orbit_point(ring, target));
    }
    script.up()
}

/// Everything observed while replaying a script.
#[derive(Clone, Debug, Default)]
pub struct ScriptReport {
    /// Every weight vector the widget emitted, in order.
    pub emissions: Vec<Vec<f64>>,
    /// Every capture operation the widget requested, in order.
    pub capture_ops: Vec<CaptureOp>,
    /// Whether `boundary[i] <= boundary[i+1]` held after every step.
    pub ordering_ok: bool,
}

impl ScriptReport {
    /// `true` when capture operations strictly alternate starting with
    /// `Acquire` and the script ended with no capture outstanding.
    #[must_use]
    pub fn capture_balanced(&self) -> bool {
        let mut held = false;
        for op in &self.capture_ops {
            match op {
                CaptureOp::Acquire if !held => held = true,
                CaptureOp::Release if held => held = false,
                _ => return false,
            }
        }
        !held
    }

    /// `true` when every emission has non-negative entries summing to
    /// 1.0 ± `tolerance`.
    #[must_use]
    pub fn emissions_normalized(&self, tolerance: f64) -> bool {
        self.emissions.iter().all(|weights| {
            let sum: f64 = weights.iter().sum();
            (sum - 1.0).abs() <= tolerance && weights.iter().all(|&w| w >= 0.0)
        })
    }
}

/// Replays `script` against `ring`, collecting a [`ScriptReport`].
pub fn replay(ring: &mut RingAllocator, script: &GestureScript) -> ScriptReport {
    let mut report = ScriptReport {
        ordering_ok: true,
        ..ScriptReport::default()
    };
    for step in &script.steps {
        let response = match step {
            GestureStep::Down(point) => ring.pointer_down(*point),
            GestureStep::Move(point) => ring.pointer_move(*point),
            GestureStep::Up => ring.pointer_up(),
            GestureStep::Hover(sector) => {
                ring.set_hover(*sector);
                InputResponse::default()
            }
            GestureStep::ResetWeights(weights) => ring.set_weights(weights),
        };
        if let Some(weights) = response.weights {
            report.emissions.push(weights);
        }
        if let Some(op) = response.capture {
            report.capture_ops.push(op);
        }
        if !ring.boundaries().windows(2).all(|w| w[0] <= w[1]) {
            report.ordering_ok = false;
        }
    }
    report
}
