// Copyright 2026 the Annular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring dimensions and handle sizing.

use kurbo::Point;

/// Dimensions of the rendered ring, in widget-local coordinates.
///
/// All pointer positions handed to the widget are interpreted against
/// [`center`](Self::center). The defaults reproduce a 300×300 canvas with a
/// centered ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingMetrics {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// Ring center.
    pub center: Point,
    /// Outer rim radius.
    pub outer_radius: f64,
    /// Inner rim radius (the hole).
    pub inner_radius: f64,
    /// Radius of a draggable boundary handle.
    pub handle_radius: f64,
    /// Stroke width separating adjacent sectors.
    pub stroke_width: f64,
}

impl RingMetrics {
    /// Radius of the circle the handles sit on: midway between the rims.
    #[inline]
    #[must_use]
    pub fn handle_orbit_radius(&self) -> f64 {
        (self.outer_radius + self.inner_radius) / 2.0
    }
}

impl Default for RingMetrics {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 300.0,
            center: Point::new(150.0, 150.0),
            outer_radius: 120.0,
            inner_radius: 75.0,
            handle_radius: 10.0,
            stroke_width: 3.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_orbit_is_mid_radius() {
        let m = RingMetrics::default();
        assert_eq!(m.handle_orbit_radius(), 97.5);
    }
}
