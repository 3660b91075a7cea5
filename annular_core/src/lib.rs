// Copyright 2026 the Annular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core math and interaction state machine for the annular ring allocator.
//!
//! `annular_core` implements a proportional allocator widget: a user divides
//! a whole (100%) among N named categories by dragging boundary handles
//! around an annular ring, and the widget reports a normalized weight vector
//! on every movement. It is `no_std` compatible (with `alloc`) and keeps the
//! pure math separate from the interaction state machine so both are
//! independently testable.
//!
//! # Architecture
//!
//! The crate is organized around a pointer-event loop that turns platform
//! input into incremental widget updates:
//!
//! ```text
//!   Embedder (pointer events, widget-local coordinates)
//!       │
//!       ▼
//!   RingAllocator::pointer_down/move/up ──► InputResponse
//!       │                                      │ weights → caller
//!       │                                      │ capture → global listeners
//!       ▼
//!   RingAllocator::evaluate() ──► RingChanges ──► Presenter::apply()
//! ```
//!
//! **[`geometry`]** — Pure conversions between widget-local points, ring
//! fractions in `[0, 1)`, and annular-sector arc outlines.
//!
//! **[`allocation`]** — The canonical mapping between weight vectors and
//! boundary sequences, plus normalization with degenerate-input fallbacks.
//!
//! **[`drag`]** — The `Idle`/`Dragging` gesture state machine with
//! neighbor-clamped boundary movement and paired capture acquire/release.
//!
//! **[`ring`]** — The [`RingAllocator`](ring::RingAllocator) widget state
//! composing the above, with hover dimming and legend derivation.
//!
//! **[`dirty`]** — Multi-channel sector invalidation via `understory_dirty`.
//! Boundary movement marks the two adjacent sectors; hover transitions mark
//! opacity; external resets mark structure.
//!
//! **[`metrics`]** — Ring dimensions and handle sizing configuration.
//!
//! **[`palette`]** — The fixed 4-color sector palette, cycling for N > 4.
//!
//! **[`backend`]** — The [`Presenter`](backend::Presenter) trait that
//! rendering embeddings implement to apply drained changes.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! gesture instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod allocation;
pub mod backend;
pub mod dirty;
pub mod drag;
pub mod geometry;
pub mod metrics;
pub mod palette;
pub mod ring;
pub mod trace;
