//! Search node structures.
//!
//! Nodes live in the `SearchTree` arena and refer to each other by `NodeId`.
//! Every node owns its own `BoardState` snapshot.

use smallvec::SmallVec;

use crate::core::{BoardState, Move};

/// Index into the `SearchTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Arena index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the lookahead tree.
#[derive(Clone, Debug)]
pub struct SearchNode {
    /// State after `precursor` was applied to the parent's state.
    pub state: BoardState,

    /// Move that produced this node (None for root).
    pub precursor: Option<Move>,

    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Children in move enumeration order.
    pub children: SmallVec<[NodeId; 6]>,

    /// Worst leaf score reachable below this node.
    /// Leaves hold their own evaluation.
    pub floor_value: f64,
}

impl SearchNode {
    /// Create a child node.
    pub fn new(state: BoardState, precursor: Move, parent: NodeId, depth: u16) -> Self {
        Self {
            state,
            precursor: Some(precursor),
            parent,
            depth,
            children: SmallVec::new(),
            floor_value: 0.0,
        }
    }

    /// Create a root node.
    pub fn root(state: BoardState) -> Self {
        Self {
            state,
            precursor: None,
            parent: NodeId::NONE,
            depth: 0,
            children: SmallVec::new(),
            floor_value: 0.0,
        }
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
