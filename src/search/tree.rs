//! Arena-based lookahead tree.
//!
//! Uses a flat `Vec<SearchNode>` with index-based references. Children are
//! always allocated after their parent, so walking the arena backwards visits
//! every child before its parent; `backup` relies on that.

use log::trace;

use super::node::{NodeId, SearchNode};
use crate::core::{BoardState, GameError, Move};

/// Exhaustive fixed-depth tree of board states.
#[derive(Clone, Debug)]
pub struct SearchTree {
    /// All nodes in the tree.
    nodes: Vec<SearchNode>,

    /// The root node ID (always 0).
    root: NodeId,
}

impl SearchTree {
    /// Create a tree holding only a root.
    pub fn new(root_state: BoardState) -> Self {
        Self {
            nodes: vec![SearchNode::root(root_state)],
            root: NodeId::new(0),
        }
    }

    /// Build the full tree below a copy of `state` and compute floor values.
    ///
    /// Every legal move is expanded at every level down to `max_depth`.
    /// Terminal states are leaves. Each child is a fresh `clone_state` of its
    /// parent, so each branch samples its own infection draw.
    pub fn build(state: &BoardState, max_depth: u32) -> Result<Self, GameError> {
        let mut tree = Self::new(state.clone());
        tree.expand(tree.root, max_depth)?;
        tree.backup();
        Ok(tree)
    }

    /// Expand a node and its descendants, `remaining` plies deep.
    fn expand(&mut self, id: NodeId, remaining: u32) -> Result<(), GameError> {
        if remaining == 0 || self.get(id).state.is_terminal() {
            return Ok(());
        }

        let moves = self.get(id).state.valid_moves();
        let depth = self.get(id).depth + 1;

        for mv in moves {
            let mut child_state = self.get_mut(id).state.clone_state();
            child_state.apply(mv)?;
            trace!("expand {} -> {} at depth {}", id, mv, depth);

            let child = self.alloc(SearchNode::new(child_state, mv, id, depth));
            self.get_mut(id).children.push(child);
            self.expand(child, remaining - 1)?;
        }

        Ok(())
    }

    /// Propagate floor values bottom-up.
    ///
    /// Leaves take `evaluate()`; internal nodes take the minimum over their
    /// children.
    fn backup(&mut self) {
        for i in (0..self.nodes.len()).rev() {
            let floor = if self.nodes[i].is_leaf() {
                self.nodes[i].state.evaluate()
            } else {
                self.nodes[i]
                    .children
                    .iter()
                    .map(|c| self.nodes[c.index()].floor_value)
                    .fold(f64::INFINITY, f64::min)
            };
            self.nodes[i].floor_value = floor;
        }
    }

    /// Root child with the strictly greatest floor; the first one wins ties.
    #[must_use]
    pub fn best_child(&self) -> Option<&SearchNode> {
        let mut best: Option<&SearchNode> = None;
        for child in self.children(self.root) {
            if best.map_or(true, |b| child.floor_value > b.floor_value) {
                best = Some(child);
            }
        }
        best
    }

    /// The move leading to `best_child`.
    pub fn best_move(&self) -> Option<Move> {
        self.best_child().and_then(|n| n.precursor)
    }

    /// (move, floor value) for every root child, in enumeration order.
    pub fn root_values(&self) -> impl Iterator<Item = (Move, f64)> + '_ {
        self.children(self.root)
            .filter_map(|n| n.precursor.map(|mv| (mv, n.floor_value)))
    }

    /// Children of a node.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &SearchNode> + '_ {
        self.get(id).children.iter().map(move |c| self.get(*c))
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &SearchNode {
        self.get(self.root)
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.index()]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let leaf_count = self.nodes.iter().filter(|n| n.is_leaf()).count();
        let terminal_count = self.nodes.iter().filter(|n| n.state.is_terminal()).count();
        let total_children: usize = self.nodes.iter().map(|n| n.children.len()).sum();

        TreeStats {
            node_count: self.nodes.len(),
            leaf_count,
            terminal_count,
            max_depth,
            total_children,
        }
    }
}

/// Statistics about a built tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Nodes without children.
    pub leaf_count: usize,

    /// Nodes whose state is won or lost.
    pub terminal_count: usize,

    /// Deepest node.
    pub max_depth: u16,

    /// Sum of child counts over all nodes.
    pub total_children: usize,
}

impl TreeStats {
    /// Average children per internal node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        let internal = self.node_count - self.leaf_count;
        if internal == 0 {
            0.0
        } else {
            self.total_children as f64 / internal as f64
        }
    }
}
