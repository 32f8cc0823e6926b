// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.

use thiserror::Error;

/// Errors reported when building a [`BoundingBox`][crate::BoundingBox] or a
/// [`QuadTree`][crate::QuadTree] from invalid parameters.
///
/// Inserting and querying never fail: a point outside the tree is reported by
/// [`QuadTree::insert`][crate::QuadTree::insert] returning `false`, and a
/// disjoint range simply yields no points.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// The half-dimension was zero, negative, NaN, or infinite.
    #[error("half-dimension must be finite and strictly positive, got {0}")]
    InvalidHalfDimension(f64),
    /// The center had a NaN or infinite coordinate.
    #[error("bounding box center must have finite coordinates")]
    NonFiniteCenter,
    /// A node capacity of zero was requested.
    #[error("node capacity must be at least 1")]
    ZeroCapacity,
}
