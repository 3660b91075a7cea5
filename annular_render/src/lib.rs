// Copyright 2026 the Annular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-plan definitions for the annular ring allocator.
//!
//! `annular_render` turns [`RingAllocator`](annular_core::ring::RingAllocator)
//! state into an ordered sequence of draw items that backends translate into
//! their native scene (SVG elements, DOM nodes, GPU draw calls). Items are
//! produced back-to-front: sectors first, then the center disk and labels,
//! then handles on top, with legend rows listed after the ring.
//!
//! Building a plan is a full rebuild; presenters that want incremental
//! updates can instead consume
//! [`RingChanges`](annular_core::ring::RingChanges) directly and use the
//! plan only for initial construction.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod plan;
