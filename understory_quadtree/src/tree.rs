// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The quadtree container and its nodes.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem;

use kurbo::Point;
use smallvec::SmallVec;

use crate::config::{Config, DEFAULT_NODE_CAPACITY};
use crate::error::Error;
use crate::types::{BoundingBox, Quadrant};
use crate::util::trace_event;

/// Leaf point storage. Leaves at the default capacity never spill to the heap.
type LeafPoints = SmallVec<[Point; DEFAULT_NODE_CAPACITY]>;

#[derive(Clone, Debug)]
enum NodeKind {
    Leaf(LeafPoints),
    /// Children indexed by [`Quadrant::index`].
    Internal(Box<[Node; 4]>),
}

/// A region of the tree: either a leaf holding points or an internal node
/// owning four children.
///
/// Nodes are read-only views obtained from [`QuadTree::root`]; all mutation goes
/// through [`QuadTree::insert`].
#[derive(Clone, Debug)]
pub struct Node {
    boundary: BoundingBox,
    kind: NodeKind,
}

impl Node {
    fn leaf(boundary: BoundingBox) -> Self {
        Self {
            boundary,
            kind: NodeKind::Leaf(SmallVec::new()),
        }
    }

    /// The region covered by this node. Fixed for the node's lifetime.
    #[inline]
    pub fn boundary(&self) -> BoundingBox {
        self.boundary
    }

    /// Whether this node holds points directly rather than children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    /// Points stored in this leaf, in insertion order.
    ///
    /// Returns `None` once the node has subdivided.
    pub fn points(&self) -> Option<&[Point]> {
        match &self.kind {
            NodeKind::Leaf(points) => Some(points.as_slice()),
            NodeKind::Internal(_) => None,
        }
    }

    /// The four children in [`Quadrant::ALL`] order, or `None` for a leaf.
    pub fn children(&self) -> Option<&[Self; 4]> {
        match &self.kind {
            NodeKind::Leaf(_) => None,
            NodeKind::Internal(children) => Some(&**children),
        }
    }

    /// The child covering `quadrant`, or `None` for a leaf.
    pub fn child(&self, quadrant: Quadrant) -> Option<&Self> {
        self.children().map(|children| &children[quadrant.index()])
    }

    /// Whether a leaf at `depth` is allowed to split.
    fn can_subdivide(&self, config: &Config, depth: u32) -> bool {
        // The second check stops halving once it would underflow to zero.
        depth < config.max_depth && self.boundary.half_dimension() * 0.5 > 0.0
    }

    /// Store `p`, which must lie inside this node's boundary.
    ///
    /// Children are chosen by comparing `p` with the center rather than by testing
    /// their boxes, so a point accepted by the root is always stored.
    fn insert(&mut self, p: Point, config: &Config, depth: u32) {
        let splittable = self.can_subdivide(config, depth);
        if let NodeKind::Leaf(points) = &mut self.kind {
            if points.len() < config.node_capacity {
                points.push(p);
                return;
            }
            if !splittable {
                trace_event!(
                    debug,
                    depth,
                    held = points.len(),
                    "quadtree leaf at depth limit, storing past capacity"
                );
                points.push(p);
                return;
            }
            let held = mem::take(points);
            self.kind = NodeKind::Internal(self.subdivide(held, config, depth));
        }
        let center = self.boundary.center();
        if let NodeKind::Internal(children) = &mut self.kind {
            children[Quadrant::of_point(center, p).index()].insert(p, config, depth + 1);
        }
    }

    /// Build the four quadrant children and move `held` into them.
    ///
    /// Redistribution routes points exactly like insertion, so a point on a shared
    /// edge lands in the same child whether it arrived before or after the split.
    fn subdivide(&self, held: LeafPoints, config: &Config, depth: u32) -> Box<[Self; 4]> {
        trace_event!(
            trace,
            depth,
            center_x = self.boundary.center().x,
            center_y = self.boundary.center().y,
            half_dimension = self.boundary.half_dimension(),
            redistributed = held.len(),
            "subdividing quadtree node"
        );
        let mut children = Box::new(Quadrant::ALL.map(|q| Self::leaf(self.boundary.quadrant(q))));
        let center = self.boundary.center();
        for p in held {
            children[Quadrant::of_point(center, p).index()].insert(p, config, depth + 1);
        }
        children
    }

    fn visit_range<F: FnMut(Point)>(&self, range: &BoundingBox, f: &mut F) {
        if !self.boundary.intersects(range) {
            return;
        }
        match &self.kind {
            NodeKind::Leaf(points) => {
                for &p in points {
                    if range.contains_point(p) {
                        f(p);
                    }
                }
            }
            NodeKind::Internal(children) => {
                for child in children.iter() {
                    child.visit_range(range, f);
                }
            }
        }
    }

    fn node_count(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(_) => 1,
            NodeKind::Internal(children) => {
                1 + children.iter().map(Self::node_count).sum::<usize>()
            }
        }
    }

    fn depth(&self) -> usize {
        match &self.kind {
            NodeKind::Leaf(_) => 0,
            NodeKind::Internal(children) => {
                1 + children.iter().map(Self::depth).max().unwrap_or_default()
            }
        }
    }
}

/// A point quadtree over a fixed square region.
///
/// Leaves hold up to [`Config::node_capacity`] points. The first insert past that
/// capacity splits the leaf into four quadrant children and moves its points into
/// them; splits are never undone. Range queries skip every subtree whose boundary
/// misses the query box.
///
/// Children are always visited in [`Quadrant::ALL`] order, so the order of query
/// results depends only on the sequence of inserts.
///
/// # Example
///
/// ```rust
/// use understory_quadtree::{BoundingBox, Point, QuadTree};
///
/// let boundary = BoundingBox::new(Point::new(0.0, 0.0), 5.0).unwrap();
/// let mut tree = QuadTree::new(boundary);
/// for (x, y) in [(1.0, 1.0), (2.0, 1.0), (3.0, 1.0), (4.0, 1.0)] {
///     assert!(tree.insert(Point::new(x, y)));
/// }
/// assert!(tree.root().is_leaf());
///
/// // The fifth point splits the root.
/// assert!(tree.insert(Point::new(4.0, 4.0)));
/// assert!(!tree.root().is_leaf());
///
/// // Points outside the root boundary are refused.
/// assert!(!tree.insert(Point::new(6.0, 0.0)));
///
/// let range = BoundingBox::new(Point::new(3.0, 3.0), 1.0).unwrap();
/// assert_eq!(tree.query_range(&range), [Point::new(4.0, 4.0)]);
/// ```
#[derive(Clone, Debug)]
pub struct QuadTree {
    config: Config,
    root: Node,
    len: usize,
}

impl QuadTree {
    /// Create an empty tree covering `boundary` with the default [`Config`].
    pub fn new(boundary: BoundingBox) -> Self {
        Self {
            config: Config::default(),
            root: Node::leaf(boundary),
            len: 0,
        }
    }

    /// Create an empty tree covering `boundary` with explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroCapacity`] if `config.node_capacity` is zero.
    pub fn with_config(boundary: BoundingBox, config: Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            config,
            root: Node::leaf(boundary),
            len: 0,
        })
    }

    /// The parameters this tree was built with.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The region covered by the tree.
    #[inline]
    pub fn boundary(&self) -> BoundingBox {
        self.root.boundary
    }

    /// The root node, for inspecting the tree's shape.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of points stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no point has been stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes, leaves and internal nodes alike.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Number of levels below the root. A tree that never split has depth 0.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Store `p`.
    ///
    /// Returns `false`, leaving the tree untouched, if `p` lies outside the tree's
    /// boundary (or has a NaN coordinate). Duplicate points are stored again.
    pub fn insert(&mut self, p: Point) -> bool {
        if !self.root.boundary.contains_point(p) {
            trace_event!(trace, x = p.x, y = p.y, "point outside quadtree boundary");
            return false;
        }
        self.root.insert(p, &self.config, 0);
        self.len += 1;
        true
    }

    /// Collect the stored points inside `range`, boundary included.
    ///
    /// Results are ordered by a depth-first walk over [`Quadrant::ALL`], and by
    /// insertion order within each leaf. A range disjoint from the tree yields an
    /// empty vector.
    pub fn query_range(&self, range: &BoundingBox) -> Vec<Point> {
        let mut out = Vec::new();
        self.visit_range(range, |p| out.push(p));
        out
    }

    /// Visit the stored points inside `range` without allocating result storage.
    ///
    /// Calls `f` in the same order [`query_range`][Self::query_range] returns.
    pub fn visit_range<F: FnMut(Point)>(&self, range: &BoundingBox, mut f: F) {
        self.root.visit_range(range, &mut f);
    }

    /// Iterate over every stored point in traversal order.
    pub fn iter(&self) -> Points<'_> {
        Points {
            stack: Vec::from([&self.root]),
            current: core::slice::Iter::default(),
        }
    }
}

impl<'a> IntoIterator for &'a QuadTree {
    type Item = Point;
    type IntoIter = Points<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over all points of a [`QuadTree`], returned by [`QuadTree::iter`].
#[derive(Clone, Debug)]
pub struct Points<'a> {
    /// Nodes still to visit; the next one is on top.
    stack: Vec<&'a Node>,
    current: core::slice::Iter<'a, Point>,
}

impl Iterator for Points<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        loop {
            if let Some(&p) = self.current.next() {
                return Some(p);
            }
            let node = self.stack.pop()?;
            match &node.kind {
                NodeKind::Leaf(points) => self.current = points.iter(),
                NodeKind::Internal(children) => self.stack.extend(children.iter().rev()),
            }
        }
    }
}
