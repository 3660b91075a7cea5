// Copyright 2026 the Annular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render plan: an ordered sequence of draw items for one widget state.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use annular_core::drag::DragPhase;
use annular_core::geometry::{SectorArc, handle_point};
use annular_core::palette::{Color, color_for};
use annular_core::ring::RingAllocator;
use kurbo::{BezPath, Point};

/// Center-disk and sector-separator stroke color.
pub const DISK_STROKE: Color = Color::rgb(0xE5, 0xE7, 0xEB);

/// Handle outline color.
pub const HANDLE_STROKE: Color = Color::rgb(0x6B, 0x72, 0x80);

/// Center title and handle-dot color.
pub const TEXT_COLOR: Color = Color::rgb(0x37, 0x41, 0x51);

/// Center subtitle color.
pub const SUBTITLE_COLOR: Color = Color::rgb(0x9C, 0xA3, 0xAF);

/// Title shown inside the ring.
pub const CENTER_TITLE: &str = "Balance";

/// Hint shown under the title.
pub const CENTER_SUBTITLE: &str = "Drag to adjust";

/// Placeholder shown when there are no categories.
pub const EMPTY_STATE_TEXT: &str = "No categories configured";

/// A filled annular sector.
#[derive(Clone, Debug)]
pub struct SectorItem {
    /// Sector (category) index.
    pub index: usize,
    /// Closed outline of the sector.
    pub path: BezPath,
    /// Palette fill color.
    pub color: Color,
    /// Fill opacity under the current hover state.
    pub opacity: f64,
    /// Separator stroke width.
    pub stroke_width: f64,
}

/// The disk covering the ring's hole.
#[derive(Clone, Copy, Debug)]
pub struct CenterDiskItem {
    /// Disk center.
    pub center: Point,
    /// Disk radius (the ring's inner radius).
    pub radius: f64,
    /// Outline color.
    pub stroke: Color,
}

/// A line of text inside the ring.
#[derive(Clone, Debug)]
pub struct CenterLabelItem {
    /// Text anchor position (centered).
    pub position: Point,
    /// The text.
    pub text: String,
    /// Text color.
    pub color: Color,
    /// Whether this is the emphasized title line.
    pub emphasis: bool,
}

/// A draggable boundary handle.
#[derive(Clone, Copy, Debug)]
pub struct HandleItem {
    /// Boundary index.
    pub index: usize,
    /// Handle center, on the mid-radius orbit.
    pub center: Point,
    /// Handle radius.
    pub radius: f64,
    /// Whether this handle is currently being dragged.
    pub active: bool,
}

/// A legend row for one category.
#[derive(Clone, Debug)]
pub struct LegendRowItem {
    /// Category index.
    pub index: usize,
    /// Category name.
    pub label: String,
    /// Swatch and sector color.
    pub color: Color,
    /// Share rounded to the nearest whole percent.
    pub percent: u32,
    /// Row opacity under the current hover state.
    pub opacity: f64,
}

/// The zero-category placeholder.
#[derive(Clone, Debug)]
pub struct EmptyStateItem {
    /// Placeholder text.
    pub text: String,
}

/// A single draw command.
///
/// Items are produced in paint order: sectors back-to-front, center content,
/// handles on top, then legend rows (which live outside the canvas).
#[derive(Clone, Debug)]
pub enum RenderItem {
    /// A filled annular sector.
    Sector(SectorItem),
    /// The center disk.
    CenterDisk(CenterDiskItem),
    /// A text line inside the ring.
    CenterLabel(CenterLabelItem),
    /// A boundary handle.
    Handle(HandleItem),
    /// A legend row.
    LegendRow(LegendRowItem),
    /// The zero-category placeholder.
    EmptyState(EmptyStateItem),
}

/// An ordered list of draw commands for a single widget state.
#[derive(Clone, Debug, Default)]
pub struct RenderPlan {
    /// Draw items in paint order.
    pub items: Vec<RenderItem>,
}

impl RenderPlan {
    /// Clears the plan for reuse.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Builds a full render plan for the widget's current state.
#[must_use]
pub fn build_plan(ring: &RingAllocator) -> RenderPlan {
    let mut plan = RenderPlan::default();
    if ring.is_empty() {
        plan.items.push(RenderItem::EmptyState(EmptyStateItem {
            text: EMPTY_STATE_TEXT.to_string(),
        }));
        return plan;
    }

    let metrics = ring.metrics();

    let mut start = 0.0;
    for (index, &segment) in ring.segments().iter().enumerate() {
        let end = start + segment;
        plan.items.push(RenderItem::Sector(SectorItem {
            index,
            path: SectorArc::new(start, end, metrics).to_path(),
            color: color_for(index),
            opacity: ring.sector_opacity(index),
            stroke_width: metrics.stroke_width,
        }));
        start = end;
    }

    plan.items.push(RenderItem::CenterDisk(CenterDiskItem {
        center: metrics.center,
        radius: metrics.inner_radius,
        stroke: DISK_STROKE,
    }));
    plan.items.push(RenderItem::CenterLabel(CenterLabelItem {
        position: Point::new(metrics.center.x, metrics.center.y - 5.0),
        text: CENTER_TITLE.to_string(),
        color: TEXT_COLOR,
        emphasis: true,
    }));
    plan.items.push(RenderItem::CenterLabel(CenterLabelItem {
        position: Point::new(metrics.center.x, metrics.center.y + 12.0),
        text: CENTER_SUBTITLE.to_string(),
        color: SUBTITLE_COLOR,
        emphasis: false,
    }));

    for (index, &boundary) in ring.boundaries().iter().enumerate() {
        plan.items.push(RenderItem::Handle(HandleItem {
            index,
            center: handle_point(boundary, metrics),
            radius: metrics.handle_radius,
            active: ring.drag_phase() == DragPhase::Dragging { boundary: index },
        }));
    }

    for (index, row) in ring.legend().iter().enumerate() {
        plan.items.push(RenderItem::LegendRow(LegendRowItem {
            index,
            label: row.label.to_string(),
            color: row.color,
            percent: row.percent,
            opacity: row.opacity,
        }));
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use annular_core::allocation::NormalizeConfig;
    use annular_core::metrics::RingMetrics;

    fn ring() -> RingAllocator {
        RingAllocator::new(
            ["health", "work", "growth", "relationships"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            &[0.25, 0.25, 0.25, 0.25],
            RingMetrics::default(),
            NormalizeConfig::default(),
        )
    }

    fn count(plan: &RenderPlan, pred: impl Fn(&RenderItem) -> bool) -> usize {
        plan.items.iter().filter(|i| pred(i)).count()
    }

    #[test]
    fn plan_has_expected_item_counts() {
        let plan = build_plan(&ring());
        assert_eq!(count(&plan, |i| matches!(i, RenderItem::Sector(_))), 4);
        assert_eq!(count(&plan, |i| matches!(i, RenderItem::Handle(_))), 3);
        assert_eq!(count(&plan, |i| matches!(i, RenderItem::LegendRow(_))), 4);
        assert_eq!(count(&plan, |i| matches!(i, RenderItem::CenterLabel(_))), 2);
        assert_eq!(count(&plan, |i| matches!(i, RenderItem::CenterDisk(_))), 1);
    }

    #[test]
    fn sectors_precede_handles() {
        let plan = build_plan(&ring());
        let last_sector = plan
            .items
            .iter()
            .rposition(|i| matches!(i, RenderItem::Sector(_)))
            .unwrap();
        let first_handle = plan
            .items
            .iter()
            .position(|i| matches!(i, RenderItem::Handle(_)))
            .unwrap();
        assert!(last_sector < first_handle, "handles must paint above sectors");
    }

    #[test]
    fn hover_dims_other_sectors() {
        let mut r = ring();
        r.set_hover(Some(2));
        let plan = build_plan(&r);
        let opacities: Vec<f64> = plan
            .items
            .iter()
            .filter_map(|i| match i {
                RenderItem::Sector(s) => Some(s.opacity),
                _ => None,
            })
            .collect();
        assert_eq!(opacities, [0.4, 0.4, 1.0, 0.4]);
    }

    #[test]
    fn legend_rows_carry_percentages() {
        let plan = build_plan(&ring());
        for item in &plan.items {
            if let RenderItem::LegendRow(row) = item {
                assert_eq!(row.percent, 25);
                assert_eq!(row.color, color_for(row.index));
            }
        }
    }

    #[test]
    fn empty_ring_yields_placeholder_only() {
        let r = RingAllocator::new(
            Vec::new(),
            &[],
            RingMetrics::default(),
            NormalizeConfig::default(),
        );
        let plan = build_plan(&r);
        assert_eq!(plan.items.len(), 1);
        assert!(matches!(&plan.items[0], RenderItem::EmptyState(e) if e.text == EMPTY_STATE_TEXT));
    }
}
