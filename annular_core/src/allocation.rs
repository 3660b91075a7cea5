// Copyright 2026 the Annular Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Weight-vector ⇄ boundary-sequence mapping and normalization.
//!
//! The external contract is a **weight vector**: N non-negative reals, one
//! per category, conceptually summing to 1. Internally the widget stores a
//! **boundary sequence**: N−1 cumulative cut points in `[0, 1)`, sorted
//! ascending. The implicit boundaries at 0 and 1 are not stored.
//!
//! Degenerate input never fails; it falls back to defined recoveries:
//! a length mismatch or an (approximately) zero sum yields a uniform split.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Normalization tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizeConfig {
    /// How close a weight sum must be to 1.0 to be accepted as-is, without
    /// renormalization. Sums further away are divided through.
    pub unit_tolerance: f64,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            unit_tolerance: 0.01,
        }
    }
}

/// Returns the uniform split: `category_count` entries of `1/N`.
///
/// Empty for a zero category count.
#[must_use]
pub fn uniform(category_count: usize) -> Vec<f64> {
    let mut v = Vec::with_capacity(category_count);
    #[expect(clippy::cast_precision_loss, reason = "category counts are tiny")]
    let share = 1.0 / (category_count.max(1) as f64);
    v.resize(category_count, share);
    v
}

/// Coerces raw caller weights into unit fractions summing to 1.
///
/// - Length mismatch against `category_count` (including empty input):
///   uniform split.
/// - Sum within [`NormalizeConfig::unit_tolerance`] of 1.0: used as-is.
/// - Sum approximately 0: uniform split (division-by-zero guard).
/// - Otherwise: every entry divided by the sum.
#[must_use]
pub fn unit_weights(weights: &[f64], category_count: usize, config: &NormalizeConfig) -> Vec<f64> {
    if weights.len() != category_count {
        return uniform(category_count);
    }
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() < config.unit_tolerance {
        return weights.to_vec();
    }
    if sum.abs() < f64::EPSILON {
        return uniform(category_count);
    }
    weights.iter().map(|w| w / sum).collect()
}

/// Derives the boundary sequence for `weights` via cumulative sum.
///
/// The final (always-1.0) entry is dropped, so the result has N−1 entries.
/// Input is coerced through [`unit_weights`] first.
#[must_use]
pub fn boundaries_from_weights(
    weights: &[f64],
    category_count: usize,
    config: &NormalizeConfig,
) -> Vec<f64> {
    if category_count == 0 {
        return Vec::new();
    }
    let fractions = unit_weights(weights, category_count, config);
    let mut boundaries = Vec::with_capacity(category_count - 1);
    let mut acc = 0.0;
    for &f in fractions.iter().take(category_count - 1) {
        acc += f;
        boundaries.push(acc);
    }
    boundaries
}

/// Inverse of [`boundaries_from_weights`]: successive differences with
/// implicit endpoints at 0 and 1.
///
/// Each segment is clamped to `[0, 1]` to guard against transient
/// out-of-range intermediate states during a drag.
#[must_use]
pub fn segments_from_boundaries(boundaries: &[f64], category_count: usize) -> Vec<f64> {
    if category_count == 0 {
        return Vec::new();
    }
    debug_assert_eq!(
        boundaries.len(),
        category_count - 1,
        "boundary count must be one less than the category count"
    );
    let mut segments = Vec::with_capacity(category_count);
    let mut prev = 0.0;
    for &b in boundaries {
        segments.push((b - prev).clamp(0.0, 1.0));
        prev = b;
    }
    segments.push((1.0 - prev).clamp(0.0, 1.0));
    segments
}

/// Divides every segment by the total so the result sums to 1.0 ± 1e-9
/// regardless of accumulated floating-point drift.
///
/// A total of (approximately) zero is treated as 1, leaving the segments
/// untouched.
#[must_use]
pub fn normalized(segments: &[f64]) -> Vec<f64> {
    let total: f64 = segments.iter().sum();
    let total = if total.abs() < f64::EPSILON { 1.0 } else { total };
    segments.iter().map(|s| s / total).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const EPS: f64 = 1e-9;

    fn cfg() -> NormalizeConfig {
        NormalizeConfig::default()
    }

    #[test]
    fn uniform_fallback_on_empty() {
        assert_eq!(unit_weights(&[], 4, &cfg()), vec![0.25; 4]);
    }

    #[test]
    fn uniform_fallback_on_length_mismatch() {
        assert_eq!(unit_weights(&[0.5, 0.5], 4, &cfg()), vec![0.25; 4]);
    }

    #[test]
    fn uniform_fallback_on_zero_sum() {
        assert_eq!(unit_weights(&[0.0, 0.0, 0.0], 3, &cfg()), vec![1.0 / 3.0; 3]);
    }

    #[test]
    fn near_unit_sum_taken_as_is() {
        let w = [0.25, 0.251, 0.25, 0.25];
        assert_eq!(unit_weights(&w, 4, &cfg()), w.to_vec());
    }

    #[test]
    fn renormalizes_arbitrary_sums() {
        // Raw scores summing to 50 become fractions of the whole.
        let w = unit_weights(&[10.0, 10.0, 20.0, 10.0], 4, &cfg());
        assert_eq!(w, vec![0.2, 0.2, 0.4, 0.2]);
    }

    #[test]
    fn boundaries_are_cumulative() {
        let b = boundaries_from_weights(&[0.25, 0.25, 0.25, 0.25], 4, &cfg());
        assert_eq!(b, vec![0.25, 0.5, 0.75]);
    }

    #[test]
    fn zero_categories_have_no_boundaries() {
        assert!(boundaries_from_weights(&[], 0, &cfg()).is_empty());
        assert!(segments_from_boundaries(&[], 0).is_empty());
    }

    #[test]
    fn single_category_is_trivial() {
        let b = boundaries_from_weights(&[3.0], 1, &cfg());
        assert!(b.is_empty());
        assert_eq!(segments_from_boundaries(&b, 1), vec![1.0]);
        assert_eq!(normalized(&[1.0]), vec![1.0]);
    }

    #[test]
    fn segments_invert_boundaries() {
        let s = segments_from_boundaries(&[0.1, 0.5, 0.75], 4);
        assert_eq!(s, vec![0.1, 0.4, 0.25, 0.25]);
    }

    #[test]
    fn segments_clamp_negative_spans() {
        // A transiently out-of-order boundary pair must not yield a negative
        // segment.
        let s = segments_from_boundaries(&[0.6, 0.5], 3);
        assert_eq!(s[1], 0.0);
        assert!(s.iter().all(|&x| (0.0..=1.0).contains(&x)));
    }

    #[test]
    fn normalized_sums_to_one() {
        let n = normalized(&[0.3, 0.29999, 0.2, 0.2]);
        let sum: f64 = n.iter().sum();
        assert!((sum - 1.0).abs() < EPS);
    }

    #[test]
    fn round_trip_preserves_proportions() {
        // Normalization idempotence: init → segments → normalize reproduces
        // a vector proportional to the input.
        let inputs: [&[f64]; 4] = [
            &[1.0, 2.0, 3.0, 4.0],
            &[0.5, 0.5],
            &[10.0, 10.0, 20.0, 10.0],
            &[0.2, 0.2, 0.2, 0.2, 0.2],
        ];
        for input in inputs {
            let n = input.len();
            let b = boundaries_from_weights(input, n, &cfg());
            let out = normalized(&segments_from_boundaries(&b, n));
            let in_sum: f64 = input.iter().sum();
            for (o, i) in out.iter().zip(input) {
                assert!((o - i / in_sum).abs() < EPS, "{out:?} vs {input:?}");
            }
            let sum: f64 = out.iter().sum();
            assert!((sum - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn tolerance_is_configurable() {
        let strict = NormalizeConfig {
            unit_tolerance: 1e-12,
        };
        // 1.005 passes the default 0.01 tolerance but not the strict one.
        let w = [0.5, 0.505];
        assert_eq!(unit_weights(&w, 2, &cfg()), w.to_vec());
        let renorm = unit_weights(&w, 2, &strict);
        let sum: f64 = renorm.iter().sum();
        assert!((sum - 1.0).abs() < EPS);
    }
}
