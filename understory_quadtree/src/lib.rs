// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: a point quadtree over a square 2D region.
//!
//! - Insert points into a tree covering a fixed [`BoundingBox`].
//! - Query every point inside an axis-aligned square range, boundary included.
//! - Inspect the tree's shape through [`Node`] views (leaf points, quadrant children).
//!
//! Leaves hold up to [`Config::node_capacity`] points (4 by default). The insert that
//! would exceed this splits the leaf into four [`Quadrant`] children and moves its
//! points down; splits are permanent. Range queries prune every subtree whose boundary
//! does not touch the range.
//!
//! Points are [`kurbo::Point`] values, re-exported as [`Point`].
//!
//! # Example
//!
//! ```rust
//! use understory_quadtree::{BoundingBox, Point, QuadTree};
//!
//! let world = BoundingBox::new(Point::new(0.0, 0.0), 5.0).unwrap();
//! let mut tree = QuadTree::new(world);
//! let coords = [
//!     (1.0, 1.0),
//!     (2.0, 1.0),
//!     (3.0, 1.0),
//!     (4.0, 1.0),
//!     (3.0, 3.0),
//!     (4.0, 3.0),
//!     (4.0, 4.0),
//! ];
//! for (x, y) in coords {
//!     assert!(tree.insert(Point::new(x, y)));
//! }
//!
//! // The fifth insert split the root; the matches come back in traversal order.
//! assert!(!tree.root().is_leaf());
//! let range = BoundingBox::new(Point::new(3.0, 3.0), 1.0).unwrap();
//! let hits = tree.query_range(&range);
//! assert_eq!(
//!     hits,
//!     [Point::new(3.0, 3.0), Point::new(4.0, 3.0), Point::new(4.0, 4.0)]
//! );
//!
//! // A range outside the tree finds nothing.
//! let far = BoundingBox::new(Point::new(55.0, 3.0), 1.0).unwrap();
//! assert!(tree.query_range(&far).is_empty());
//! ```
//!
//! ## Ordering
//!
//! Insertion, redistribution on split, and queries all visit children in
//! [`Quadrant::ALL`] order (north-west, north-east, south-west, south-east), and each
//! leaf keeps its points in insertion order. Query results are therefore reproducible,
//! and a point lying exactly on an edge shared by two quadrants is stored in the first
//! of them in that order.
//!
//! ## Depth limit
//!
//! More than `node_capacity` identical points can never be separated by splitting. A
//! leaf at [`Config::max_depth`] stops splitting and keeps accepting points past its
//! capacity instead.
//!
//! ## Features
//!
//! - `std` *(default)*: enables `kurbo/std`.
//! - `libm`: enables `kurbo/libm` for `no_std` targets.
//! - `tracing`: emits [`tracing`](https://docs.rs/tracing) events when nodes split and when
//!   points are rejected.
//!
//! ### Float semantics
//!
//! Boxes must have finite coordinates and a positive half-dimension; [`BoundingBox::new`]
//! rejects anything else. Points with NaN coordinates are never contained in any box and
//! are therefore refused by [`QuadTree::insert`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod tree;
mod types;
pub(crate) mod util;

pub use config::{Config, DEFAULT_MAX_DEPTH, DEFAULT_NODE_CAPACITY};
pub use error::Error;
pub use kurbo::Point;
pub use tree::{Node, Points, QuadTree};
pub use types::{BoundingBox, Quadrant};
