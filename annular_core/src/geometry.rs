// Copyright 2026 the Annular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure ring geometry.
//!
//! A position on the ring is a **fraction** in `[0, 1)`: fraction 0 points
//! straight up from the center and fractions increase clockwise (screen
//! coordinates, y-down). This module converts between widget-local points and
//! fractions, and builds annular-sector outlines for rendering. All functions
//! are deterministic and side-effect-free.

use core::f64::consts::{FRAC_PI_2, TAU};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Arc, BezPath, Point, Vec2};

use crate::metrics::RingMetrics;

/// Flattening tolerance when converting arcs to cubic Béziers.
const ARC_TOLERANCE: f64 = 0.1;

/// Converts a fraction in `[0, 1)` to the corresponding angle in radians.
///
/// Fraction 0 maps to −π/2 (straight up in y-down coordinates).
#[inline]
#[must_use]
pub fn fraction_to_angle(fraction: f64) -> f64 {
    fraction * TAU - FRAC_PI_2
}

/// Computes the ring fraction of `point` relative to `center`.
///
/// Uses `atan2` and rotates so that fraction 0 points up, wrapping negative
/// raw angles into `[0, 1)`. Defined for every point except `center` itself,
/// where `atan2(0, 0)` still yields a conventional (if arbitrary) fraction.
#[must_use]
pub fn ring_fraction(point: Point, center: Point) -> f64 {
    let d = point - center;
    let angle = d.y.atan2(d.x);
    let mut fraction = (angle + FRAC_PI_2) / TAU;
    if fraction < 0.0 {
        fraction += 1.0;
    }
    fraction
}

/// Inverse of [`ring_fraction`] at a fixed radius.
///
/// Round-trips: `ring_fraction(fraction_to_point(f, r, c), c)` reproduces `f`
/// within 1e-6 for any `f` in `[0, 1)` and `r > 0`.
#[must_use]
pub fn fraction_to_point(fraction: f64, radius: f64, center: Point) -> Point {
    let angle = fraction_to_angle(fraction);
    #[cfg(feature = "std")]
    let (s, c) = angle.sin_cos();
    #[cfg(not(feature = "std"))]
    let (s, c) = (angle.sin(), angle.cos());
    center + Vec2::new(c * radius, s * radius)
}

/// Position of the boundary handle at `fraction`: on the orbit circle midway
/// between the rims.
#[inline]
#[must_use]
pub fn handle_point(fraction: f64, metrics: &RingMetrics) -> Point {
    fraction_to_point(fraction, metrics.handle_orbit_radius(), metrics.center)
}

/// Hit-tests `point` against the handle circles at `fractions`.
///
/// Returns the index of the hit handle. When handles overlap, the
/// last-indexed one wins, matching paint order (later handles draw on top).
#[must_use]
pub fn handle_hit(point: Point, fractions: &[f64], metrics: &RingMetrics) -> Option<usize> {
    let mut hit = None;
    for (i, &fraction) in fractions.iter().enumerate() {
        if (point - handle_point(fraction, metrics)).hypot() <= metrics.handle_radius {
            hit = Some(i);
        }
    }
    hit
}

/// An annular-sector (donut slice) outline between two ring fractions.
///
/// The descriptor carries everything needed to render the shape: the four
/// corner points, both radii, and the large-arc flag. [`to_path`](Self::to_path)
/// produces a closed outline (outer rim clockwise, inner rim back).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectorArc {
    /// Ring center.
    pub center: Point,
    /// Start fraction in `[0, 1]`.
    pub start: f64,
    /// End fraction in `[0, 1]`, `start <= end`.
    pub end: f64,
    /// Outer rim radius.
    pub outer_radius: f64,
    /// Inner rim radius.
    pub inner_radius: f64,
}

impl SectorArc {
    /// Builds the sector between `start` and `end` using the ring's metrics.
    #[must_use]
    pub fn new(start: f64, end: f64, metrics: &RingMetrics) -> Self {
        debug_assert!(start <= end, "sector fractions out of order");
        Self {
            center: metrics.center,
            start,
            end,
            outer_radius: metrics.outer_radius,
            inner_radius: metrics.inner_radius,
        }
    }

    /// Outer-rim corner at the start fraction.
    #[must_use]
    pub fn outer_start(&self) -> Point {
        fraction_to_point(self.start, self.outer_radius, self.center)
    }

    /// Outer-rim corner at the end fraction.
    #[must_use]
    pub fn outer_end(&self) -> Point {
        fraction_to_point(self.end, self.outer_radius, self.center)
    }

    /// Inner-rim corner at the end fraction.
    #[must_use]
    pub fn inner_end(&self) -> Point {
        fraction_to_point(self.end, self.inner_radius, self.center)
    }

    /// Inner-rim corner at the start fraction.
    #[must_use]
    pub fn inner_start(&self) -> Point {
        fraction_to_point(self.start, self.inner_radius, self.center)
    }

    /// SVG large-arc flag: set when the angular span exceeds half the ring.
    ///
    /// Required for sectors wider than 180° to render the long way around.
    #[inline]
    #[must_use]
    pub fn large_arc(&self) -> bool {
        self.end - self.start > 0.5
    }

    /// Builds the closed sector outline as a Bézier path.
    ///
    /// Traces the outer rim clockwise from start to end, a line to the inner
    /// rim, the inner rim counter-clockwise back, then closes.
    #[must_use]
    pub fn to_path(&self) -> BezPath {
        let sweep = (self.end - self.start) * TAU;
        let start_angle = fraction_to_angle(self.start);
        let end_angle = fraction_to_angle(self.end);

        let mut path = BezPath::new();
        path.move_to(self.outer_start());
        Arc::new(
            self.center,
            Vec2::new(self.outer_radius, self.outer_radius),
            start_angle,
            sweep,
            0.0,
        )
        .to_cubic_beziers(ARC_TOLERANCE, |p1, p2, p| {
            path.curve_to(p1, p2, p);
        });
        path.line_to(self.inner_end());
        Arc::new(
            self.center,
            Vec2::new(self.inner_radius, self.inner_radius),
            end_angle,
            -sweep,
            0.0,
        )
        .to_cubic_beziers(ARC_TOLERANCE, |p1, p2, p| {
            path.curve_to(p1, p2, p);
        });
        path.close_path();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn metrics() -> RingMetrics {
        RingMetrics::default()
    }

    #[test]
    fn fraction_zero_points_up() {
        let m = metrics();
        let p = fraction_to_point(0.0, 100.0, m.center);
        assert!((p.x - m.center.x).abs() < EPS);
        assert!((p.y - (m.center.y - 100.0)).abs() < EPS);
    }

    #[test]
    fn quarter_fraction_points_right() {
        let m = metrics();
        let p = fraction_to_point(0.25, 100.0, m.center);
        assert!((p.x - (m.center.x + 100.0)).abs() < EPS);
        assert!((p.y - m.center.y).abs() < EPS);
    }

    #[test]
    fn round_trip_fractions() {
        let m = metrics();
        for i in 0..100 {
            let f = f64::from(i) / 100.0;
            let p = fraction_to_point(f, 97.5, m.center);
            let back = ring_fraction(p, m.center);
            assert!((back - f).abs() < EPS, "round trip failed for {f}: {back}");
        }
    }

    #[test]
    fn negative_raw_angle_wraps() {
        let m = metrics();
        // A point up-and-left has a raw atan2 angle below −π/2.
        let p = Point::new(m.center.x - 10.0, m.center.y - 10.0);
        let f = ring_fraction(p, m.center);
        assert!((f - 0.875).abs() < EPS);
        assert!((0.0..1.0).contains(&f));
    }

    #[test]
    fn large_arc_flag() {
        let m = metrics();
        assert!(!SectorArc::new(0.0, 0.5, &m).large_arc());
        assert!(SectorArc::new(0.0, 0.51, &m).large_arc());
        assert!(SectorArc::new(0.2, 0.9, &m).large_arc());
    }

    #[test]
    fn sector_corners() {
        let m = metrics();
        let s = SectorArc::new(0.0, 0.25, &m);
        let os = s.outer_start();
        assert!((os.x - m.center.x).abs() < EPS);
        assert!((os.y - (m.center.y - m.outer_radius)).abs() < EPS);
        let ie = s.inner_end();
        assert!((ie.x - (m.center.x + m.inner_radius)).abs() < EPS);
        assert!((ie.y - m.center.y).abs() < EPS);
    }

    #[test]
    fn sector_path_is_closed() {
        let m = metrics();
        let path = SectorArc::new(0.1, 0.7, &m).to_path();
        let svg = path.to_svg();
        assert!(svg.ends_with('Z'), "path should close: {svg}");
    }

    #[test]
    fn handle_hit_last_wins() {
        let m = metrics();
        // Two handles at nearly the same fraction overlap; index 1 is on top.
        let fractions = [0.25, 0.2501];
        let p = handle_point(0.25, &m);
        assert_eq!(handle_hit(p, &fractions, &m), Some(1));
    }

    #[test]
    fn handle_hit_misses_outside_radius() {
        let m = metrics();
        let fractions = [0.25];
        let p = m.center;
        assert_eq!(handle_hit(p, &fractions, &m), None);
        assert_eq!(handle_hit(handle_point(0.25, &m), &fractions, &m), Some(0));
    }
}
