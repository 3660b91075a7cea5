// Copyright 2026 the Annular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG document presenter for the annular ring allocator.
//!
//! [`SvgPresenter`] is the reference backend: it rebuilds a standalone SVG
//! document from the full render plan on every
//! [`apply`](annular_core::backend::Presenter::apply). It is deliberately
//! non-incremental — the document is small and a wholesale rebuild keeps the
//! backend trivial; incremental presenters (DOM, GPU) consume the per-sector
//! index lists in [`RingChanges`](annular_core::ring::RingChanges) instead.
//!
//! The legend is rendered as text rows below the ring, which extends the
//! document beyond the ring canvas height.

use std::fmt::Write as _;

use annular_core::backend::Presenter;
use annular_core::ring::{RingAllocator, RingChanges};
use annular_render::plan::{HANDLE_STROKE, RenderItem, SUBTITLE_COLOR, TEXT_COLOR, build_plan};

/// Vertical space per legend row, in pixels.
const LEGEND_ROW_HEIGHT: f64 = 24.0;

/// Padding between the ring canvas and the legend block.
const LEGEND_PADDING: f64 = 12.0;

/// Side length of a legend swatch.
const SWATCH_SIZE: f64 = 12.0;

/// Renders the widget's current state as a standalone SVG document.
#[must_use]
pub fn render_svg(ring: &RingAllocator) -> String {
    let plan = build_plan(ring);
    let metrics = ring.metrics();
    let legend_rows = ring.category_count();
    #[expect(clippy::cast_precision_loss, reason = "category counts are tiny")]
    let legend_height = if legend_rows == 0 {
        0.0
    } else {
        LEGEND_PADDING + legend_rows as f64 * LEGEND_ROW_HEIGHT
    };
    let height = metrics.height + legend_height;

    let mut doc = String::new();
    _ = write!(
        doc,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{height}" viewBox="0 0 {} {height}">"#,
        metrics.width, metrics.width
    );

    for item in &plan.items {
        match item {
            RenderItem::Sector(s) => {
                _ = write!(
                    doc,
                    r#"<path d="{}" fill="{}" fill-opacity="{}" stroke="white" stroke-width="{}"/>"#,
                    s.path.to_svg(),
                    s.color,
                    s.opacity,
                    s.stroke_width
                );
            }
            RenderItem::CenterDisk(d) => {
                _ = write!(
                    doc,
                    r#"<circle cx="{}" cy="{}" r="{}" fill="white" stroke="{}" stroke-width="2"/>"#,
                    d.center.x, d.center.y, d.radius, d.stroke
                );
            }
            RenderItem::CenterLabel(l) => {
                let (size, weight) = if l.emphasis { (14, 600) } else { (11, 400) };
                _ = write!(
                    doc,
                    r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-size="{size}" font-weight="{weight}" fill="{}">{}</text>"#,
                    l.position.x,
                    l.position.y,
                    l.color,
                    escape(&l.text)
                );
            }
            RenderItem::Handle(h) => {
                let class = if h.active { "handle active" } else { "handle" };
                _ = write!(
                    doc,
                    r#"<g class="{class}"><circle cx="{x}" cy="{y}" r="{r}" fill="white" stroke="{stroke}" stroke-width="2"/><circle cx="{x}" cy="{y}" r="3" fill="{dot}"/></g>"#,
                    x = h.center.x,
                    y = h.center.y,
                    r = h.radius,
                    stroke = HANDLE_STROKE,
                    dot = TEXT_COLOR,
                );
            }
            RenderItem::LegendRow(row) => {
                #[expect(clippy::cast_precision_loss, reason = "category counts are tiny")]
                let y = metrics.height + LEGEND_PADDING + row.index as f64 * LEGEND_ROW_HEIGHT;
                _ = write!(
                    doc,
                    r#"<g class="legend-row" opacity="{}"><rect x="12" y="{}" width="{SWATCH_SIZE}" height="{SWATCH_SIZE}" rx="3" fill="{}"/><text x="{}" y="{}" font-size="13" fill="{TEXT_COLOR}">{}</text><text x="{}" y="{}" text-anchor="end" font-size="13" font-weight="600" fill="{TEXT_COLOR}">{}%</text></g>"#,
                    row.opacity,
                    y,
                    row.color,
                    12.0 + SWATCH_SIZE + 8.0,
                    y + SWATCH_SIZE - 1.0,
                    escape(&row.label),
                    metrics.width - 12.0,
                    y + SWATCH_SIZE - 1.0,
                    row.percent
                );
            }
            RenderItem::EmptyState(e) => {
                _ = write!(
                    doc,
                    r#"<text x="{}" y="{}" text-anchor="middle" font-size="14" fill="{}">{}</text>"#,
                    metrics.width / 2.0,
                    metrics.height / 2.0,
                    SUBTITLE_COLOR,
                    escape(&e.text)
                );
            }
        }
    }

    doc.push_str("</svg>");
    doc
}

/// Escapes text content for embedding in XML.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// A [`Presenter`] that keeps a full SVG document in sync with the widget.
#[derive(Clone, Debug, Default)]
pub struct SvgPresenter {
    document: String,
}

impl SvgPresenter {
    /// Creates a presenter with an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The document produced by the last [`apply`](Presenter::apply).
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }
}

impl Presenter for SvgPresenter {
    fn apply(&mut self, ring: &RingAllocator, changes: &RingChanges) {
        // Full rebuild on any change; the index lists are only consulted to
        // skip work when nothing changed at all.
        if changes.fills.is_empty()
            && changes.handles.is_empty()
            && changes.opacities.is_empty()
            && changes.legend.is_empty()
            && !changes.structure_changed
            && !self.document.is_empty()
        {
            return;
        }
        self.document = render_svg(ring);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use annular_core::allocation::NormalizeConfig;
    use annular_core::geometry::handle_point;
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

    #[test]
    fn document_structure() {
        let svg = render_svg(&ring());
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<path ").count(), 4);
        assert_eq!(svg.matches(r#"class="handle""#).count(), 3);
        assert_eq!(svg.matches("legend-row").count(), 4);
        assert!(svg.contains("#3B82F6"), "palette color missing");
        assert!(svg.contains(">25%<"), "percentages missing");
        assert!(svg.contains("Balance"));
    }

    #[test]
    fn labels_are_escaped() {
        let r = RingAllocator::new(
            vec!["food & drink".to_string()],
            &[1.0],
            RingMetrics::default(),
            NormalizeConfig::default(),
        );
        let svg = render_svg(&r);
        assert!(svg.contains("food &amp; drink"));
        assert!(!svg.contains("food & drink"));
    }

    #[test]
    fn empty_state_document() {
        let r = RingAllocator::new(
            Vec::new(),
            &[],
            RingMetrics::default(),
            NormalizeConfig::default(),
        );
        let svg = render_svg(&r);
        assert!(svg.contains("No categories configured"));
        assert!(!svg.contains("<path "));
    }

    #[test]
    fn presenter_skips_quiet_frames() {
        let mut r = ring();
        let mut presenter = SvgPresenter::new();
        let changes = r.evaluate();
        presenter.apply(&r, &changes);
        let first = presenter.document().to_string();
        assert!(!first.is_empty());

        // No input: evaluate drains nothing, the document is untouched.
        let quiet = r.evaluate();
        presenter.apply(&r, &quiet);
        assert_eq!(presenter.document(), first);

        // A drag updates the document.
        let m = *r.metrics();
        r.pointer_down(handle_point(0.25, &m));
        r.pointer_move(handle_point(0.10, &m));
        let dragged = r.evaluate();
        presenter.apply(&r, &dragged);
        assert_ne!(presenter.document(), first);
    }
}
