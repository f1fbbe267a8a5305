use arrayvec::ArrayVec;
use thiserror::Error;

use crate::board::Board;
use crate::constants::DIRS;
use crate::types::{Square, Stone};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveGenError {
    #[error("square out of bounds")]
    OutOfBounds,
    #[error("no stone on square")]
    NotAStone,
}

pub type NodeId = usize;

pub const ROOT: NodeId = 0;

/// One reachable landing square for the selected stone. `captured` holds
/// the square of the stone jumped over to get here; it is `None` on the
/// root and on simple steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveNode {
    pub landing: Square,
    pub captured: Option<Square>,
    pub children: ArrayVec<NodeId, 4>,
}

/// The full tree of legal continuations for one stone, stored as an arena
/// indexed by `NodeId`. The root's landing is the stone's current square
/// and its children are the first-ply moves; a node without children is a
/// terminal leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTree {
    nodes: Vec<MoveNode>,
}

impl MoveTree {
    fn with_root(origin: Square) -> Self {
        Self {
            nodes: vec![MoveNode {
                landing: origin,
                captured: None,
                children: ArrayVec::new(),
            }],
        }
    }

    fn push(&mut self, parent: NodeId, landing: Square, captured: Option<Square>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(MoveNode {
            landing,
            captured,
            children: ArrayVec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    pub fn root(&self) -> &MoveNode {
        &self.nodes[ROOT]
    }

    pub fn node(&self, id: NodeId) -> &MoveNode {
        &self.nodes[id]
    }

    /// The square the stone currently stands on.
    pub fn origin(&self) -> Square {
        self.root().landing
    }

    pub fn has_moves(&self) -> bool {
        !self.root().children.is_empty()
    }

    pub fn root_has_capture(&self) -> bool {
        self.root()
            .children
            .iter()
            .any(|&child| self.nodes[child].captured.is_some())
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes[id].children.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MoveNode)> {
        self.nodes.iter().enumerate()
    }

    /// The path of nodes a commit to `destination` walks, honoring capture
    /// precedence: with a capturing child at the root only exhausted
    /// capture chains qualify, otherwise only direct simple steps. Returns
    /// the first qualifying path in generation order; its nodes carry the
    /// squares of every stone the commit removes.
    pub fn chain_to(&self, destination: Square) -> Option<Vec<NodeId>> {
        if self.root_has_capture() {
            let mut path = Vec::new();
            if self.capture_path(ROOT, destination, &mut path) {
                Some(path)
            } else {
                None
            }
        } else {
            self.root()
                .children
                .iter()
                .copied()
                .find(|&id| self.nodes[id].landing == destination)
                .map(|id| vec![id])
        }
    }

    fn capture_path(&self, from: NodeId, destination: Square, path: &mut Vec<NodeId>) -> bool {
        for &child in &self.nodes[from].children {
            let node = &self.nodes[child];
            if node.captured.is_none() {
                continue;
            }
            path.push(child);
            if node.children.is_empty() && node.landing == destination {
                return true;
            }
            if self.capture_path(child, destination, path) {
                return true;
            }
            path.pop();
        }
        false
    }
}

/// Builds the move tree for the stone on `square`. Construction never
/// touches the board: captures along the path in progress are tracked in
/// an exclusion set, and the vacated origin square counts as free, so the
/// same stone is never captured twice and chains may cross their own
/// start.
pub fn generate(board: &Board, square: Square) -> Result<MoveTree, MoveGenError> {
    if Square::new(square.row, square.col).is_none() {
        return Err(MoveGenError::OutOfBounds);
    }
    let stone = board.get(square).ok_or(MoveGenError::NotAStone)?;
    let mut tree = MoveTree::with_root(square);

    let mut captured = ArrayVec::<Square, 12>::new();
    extend_captures(board, stone, square, square, ROOT, &mut captured, &mut tree);

    // Simple steps exist only at the root, and only for a stone without a
    // capture; a stone that can jump must jump, and once a chain has
    // captured it must keep capturing or stop.
    if !tree.root_has_capture() {
        for dir in step_dirs(stone) {
            if let Some(to) = square.offset(dir, 1) {
                if board.get(to).is_none() {
                    tree.push(ROOT, to, None);
                }
            }
        }
    }

    Ok(tree)
}

/// Probes every diagonal from `from` for a jump, appending capture nodes
/// under `parent` and recursing from each landing square. Men capture
/// backward as well as forward, so all four directions are probed for
/// every stone.
fn extend_captures(
    board: &Board,
    stone: Stone,
    origin: Square,
    from: Square,
    parent: NodeId,
    captured: &mut ArrayVec<Square, 12>,
    tree: &mut MoveTree,
) {
    for dir in DIRS {
        let Some(mid) = from.offset(dir, 1) else {
            continue;
        };
        let Some(landing) = from.offset(dir, 2) else {
            continue;
        };
        let Some(target) = occupant(board, mid, origin, captured) else {
            continue;
        };
        if target.owner == stone.owner {
            continue;
        }
        if occupant(board, landing, origin, captured).is_some() {
            continue;
        }

        let node = tree.push(parent, landing, Some(mid));
        captured.push(mid);
        extend_captures(board, stone, origin, landing, node, captured, tree);
        captured.pop();
    }
}

/// The stone occupying `square` in the logical mid-chain view: the origin
/// is vacant (the mover left it) and stones already jumped in this path
/// neither block a landing nor offer a second capture.
fn occupant(board: &Board, square: Square, origin: Square, captured: &[Square]) -> Option<Stone> {
    if square == origin || captured.contains(&square) {
        return None;
    }
    board.get(square)
}

fn step_dirs(stone: Stone) -> impl Iterator<Item = (i8, i8)> {
    let forward = stone.owner.forward();
    DIRS.into_iter()
        .filter(move |dir| stone.king || dir.0 == forward)
}
