//! Checkers/draughts rules engine.
//!
//! The heart of the crate is [`movegen::generate`], which builds the full
//! tree of legal continuations for one stone (simple steps and mandatory
//! multi-capture chains), [`dropzone::drop_zones`], which reduces a tree
//! to the squares the stone may legally stop on, and [`game::Damka`],
//! which owns the board, the per-turn move table, and the commit path.

pub mod board;
pub mod constants;
pub mod dropzone;
pub mod fen;
pub mod game;
pub mod movegen;
pub mod types;

pub use constants::{DIRS, SIZE, SQUARES};
