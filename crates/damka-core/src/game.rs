use std::collections::HashMap;

use thiserror::Error;

use crate::board::Board;
use crate::dropzone::drop_zones;
use crate::fen::{encode_fen, parse_fen, FenError, START_POSITION};
use crate::movegen::{generate, MoveTree};
use crate::types::{Player, Rules, Square, Stone};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("no movable stone on {0:?}")]
    NoSuchStone(Square),
    #[error("{to:?} is not a legal drop zone for the stone on {from:?}")]
    IllegalDestination { from: Square, to: Square },
    #[error(transparent)]
    Fen(#[from] FenError),
}

/// A running game. Owns the board and the side to move, plus the per-turn
/// derived state: the turn move table (one tree per movable stone of the
/// side to move), the advisory selection, and the drop-zone memo. The
/// derived state is rebuilt wholesale after every committed move; the memo
/// never survives a turn switch.
#[derive(Debug, Clone)]
pub struct Damka {
    board: Board,
    turn: Player,
    rules: Rules,
    move_trees: HashMap<String, MoveTree>,
    selected: Option<Square>,
    zone_cache: HashMap<String, Vec<Square>>,
}

impl Default for Damka {
    fn default() -> Self {
        Self::new()
    }
}

impl Damka {
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    pub fn with_rules(rules: Rules) -> Self {
        Self::from_fen_with_rules(START_POSITION, rules)
            .expect("start position notation must be valid")
    }

    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        Self::from_fen_with_rules(fen, Rules::default())
    }

    pub fn from_fen_with_rules(fen: &str, rules: Rules) -> Result<Self, GameError> {
        let parsed = parse_fen(fen)?;
        let mut game = Self {
            board: parsed.board,
            turn: parsed.turn,
            rules,
            move_trees: HashMap::new(),
            selected: None,
            zone_cache: HashMap::new(),
        };
        game.recompute();
        Ok(game)
    }

    pub fn fen(&self) -> String {
        encode_fen(&self.board, self.turn)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// The turn move table: one move tree per stone of the side to move
    /// that has at least one legal move, keyed by `Square::key`. A stone
    /// absent from the table cannot move this turn.
    pub fn move_trees(&self) -> &HashMap<String, MoveTree> {
        &self.move_trees
    }

    pub fn tree_for(&self, square: Square) -> Option<&MoveTree> {
        self.move_trees.get(&square.key())
    }

    /// Movable stones of the side to move, sorted.
    pub fn movable(&self) -> Vec<Square> {
        let mut squares: Vec<Square> = self
            .move_trees
            .values()
            .map(|tree| tree.origin())
            .collect();
        squares.sort_unstable();
        squares
    }

    /// Picks a stone up. Selecting another movable stone replaces the
    /// previous selection; selection alone never mutates the board.
    pub fn select(&mut self, square: Square) -> Result<(), GameError> {
        if !self.move_trees.contains_key(&square.key()) {
            return Err(GameError::NoSuchStone(square));
        }
        self.selected = Some(square);
        Ok(())
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Legal drop targets for the stone on `square`, memoized until the
    /// turn switches.
    pub fn drop_zones_for(&mut self, square: Square) -> Result<Vec<Square>, GameError> {
        let key = square.key();
        if let Some(zones) = self.zone_cache.get(&key) {
            return Ok(zones.clone());
        }
        let tree = self
            .move_trees
            .get(&key)
            .ok_or(GameError::NoSuchStone(square))?;
        let zones = drop_zones(tree);
        self.zone_cache.insert(key, zones.clone());
        Ok(zones)
    }

    /// Commits the stone on `selected` to `destination`: removes every
    /// stone captured along the chosen chain, relocates the mover,
    /// promotes on the crown row, passes the turn, and rebuilds the turn
    /// move table. A rejected commit leaves every piece of state
    /// untouched.
    pub fn commit_move(&mut self, selected: Square, destination: Square) -> Result<(), GameError> {
        let key = selected.key();
        let tree = self
            .move_trees
            .get(&key)
            .ok_or(GameError::NoSuchStone(selected))?;
        let zones = match self.zone_cache.get(&key) {
            Some(zones) => zones.clone(),
            None => drop_zones(tree),
        };
        if !zones.contains(&destination) {
            return Err(GameError::IllegalDestination {
                from: selected,
                to: destination,
            });
        }

        let path = tree
            .chain_to(destination)
            .expect("validated destination must terminate a chain");
        let captured: Vec<Square> = path
            .iter()
            .filter_map(|&id| tree.node(id).captured)
            .collect();

        for square in captured {
            let taken = self
                .board
                .remove(square)
                .expect("captured squares are in bounds");
            debug_assert!(taken.is_some(), "captured square must hold a stone");
        }

        let stone = self
            .board
            .remove(selected)
            .expect("table keys are in bounds")
            .expect("table keys are occupied squares");
        let king = stone.king || destination.row == stone.owner.crown_row();
        self.board
            .put(Stone { owner: stone.owner, king }, destination)
            .expect("drop zones are free playable squares");

        self.turn = self.turn.opponent();
        self.recompute();
        Ok(())
    }

    /// The side to move loses when it has no legal move, whether out of
    /// stones or fully blocked.
    pub fn is_game_over(&self) -> bool {
        self.move_trees.is_empty()
    }

    pub fn winner(&self) -> Option<Player> {
        if self.is_game_over() {
            Some(self.turn.opponent())
        } else {
            None
        }
    }

    pub fn count(&self, player: Player) -> usize {
        self.board.count(player)
    }

    fn recompute(&mut self) {
        self.selected = None;
        self.zone_cache.clear();
        self.move_trees.clear();

        for (square, stone) in self.board.stones() {
            if stone.owner != self.turn {
                continue;
            }
            let tree =
                generate(&self.board, square).expect("stone squares are occupied and in bounds");
            if tree.has_moves() {
                self.move_trees.insert(square.key(), tree);
            }
        }

        if self.rules.forced_capture
            && self.move_trees.values().any(MoveTree::root_has_capture)
        {
            self.move_trees.retain(|_, tree| tree.root_has_capture());
        }
    }
}
