//! Implementation of the type elimination chess variant: board, pieces, their
//! movement rules and the game engine.

pub mod board;
pub mod core;
pub mod counter;
pub mod game;
pub mod rules;
