// Copyright 2026 the Annular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! The widget uses multi-channel dirty tracking (via [`understory_dirty`])
//! keyed by sector index, so presenters can update only what a gesture
//! actually touched. The ring is flat — no channel propagates to other keys;
//! the widget marks every affected sector explicitly:
//!
//! - Moving boundary `i` marks sectors `i` and `i + 1` on [`FILL`] and
//!   [`LEGEND`], and sector `i` on [`HANDLE`] (handle `i` sits between those
//!   two sectors).
//! - A hover transition marks every sector on [`OPACITY`] (all sectors dim
//!   or undim together).
//! - Replacing the weight vector or category set marks every sector on
//!   [`STRUCTURE`] plus all other channels.
//!
//! # Consumption
//!
//! Callers never query dirty state directly. Each
//! [`RingAllocator::evaluate`](crate::ring::RingAllocator::evaluate) call
//! drains all channels into a [`RingChanges`](crate::ring::RingChanges),
//! which presenters [consume](crate::backend::Presenter::apply) to apply
//! incremental updates.

use understory_dirty::Channel;

/// Sector arc geometry changed — the fill path must be rebuilt.
pub const FILL: Channel = Channel::new(0);

/// The handle between this sector and the next moved.
pub const HANDLE: Channel = Channel::new(1);

/// Hover dimming changed — only the fill opacity needs updating.
pub const OPACITY: Channel = Channel::new(2);

/// The sector's legend percentage changed.
pub const LEGEND: Channel = Channel::new(3);

/// The category set or weight vector was replaced wholesale.
pub const STRUCTURE: Channel = Channel::new(4);
