// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree construction parameters.

use crate::error::Error;

/// Default number of points a leaf holds before it subdivides.
pub const DEFAULT_NODE_CAPACITY: usize = 4;

/// Default maximum node depth. The root is at depth 0.
pub const DEFAULT_MAX_DEPTH: u32 = 32;

/// Parameters controlling when nodes subdivide.
///
/// ```rust
/// use understory_quadtree::Config;
///
/// let config = Config::new().with_node_capacity(8).with_max_depth(12);
/// assert_eq!(config.node_capacity, 8);
/// assert_eq!(config.max_depth, 12);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of points held by a leaf before it subdivides. Must be at least 1.
    pub node_capacity: usize,
    /// Depth at which leaves stop subdividing.
    ///
    /// A leaf at this depth keeps accepting points past `node_capacity`. Without a
    /// limit, more than `node_capacity` coincident points would subdivide forever.
    pub max_depth: u32,
}

impl Config {
    /// Create the default configuration.
    pub const fn new() -> Self {
        Self {
            node_capacity: DEFAULT_NODE_CAPACITY,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the leaf capacity.
    #[must_use]
    pub const fn with_node_capacity(mut self, node_capacity: usize) -> Self {
        self.node_capacity = node_capacity;
        self
    }

    /// Set the maximum subdivision depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub(crate) const fn validate(&self) -> Result<(), Error> {
        if self.node_capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
