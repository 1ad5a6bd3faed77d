//! Bookkeeping of the surviving pieces of each kind.
//!
//! The counts are maintained by [`crate::chess::game::Game`] independently of
//! the board: they are never recomputed by scanning it, so they reflect the
//! engine's update rules rather than the actual piece placement.

use std::fmt;

use strum::{EnumCount, IntoEnumIterator};
use thiserror::Error;

use crate::chess::core::{PieceKind, Player};

/// Attempt to take away a piece that the counter believes is already gone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{player} has no {kind} left to remove")]
pub struct CountError {
    #[allow(missing_docs)]
    pub player: Player,
    #[allow(missing_docs)]
    pub kind: PieceKind,
}

/// Remaining number of pieces of each kind for both players.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PieceCounts {
    counts: [[u8; PieceKind::COUNT]; 2],
}

impl PieceCounts {
    /// Full standard complement for both players: 8 pawns, 2 rooks, 2 knights,
    /// 2 bishops, 1 queen and 1 king.
    #[must_use]
    pub fn starting() -> Self {
        let mut complement = [0; PieceKind::COUNT];
        for kind in PieceKind::iter() {
            complement[kind.index()] = kind.starting_count();
        }
        Self {
            counts: [complement; 2],
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn remaining(&self, player: Player, kind: PieceKind) -> u8 {
        self.counts[player.index()][kind.index()]
    }

    /// Lowers the count of player's pieces of the given kind by one.
    ///
    /// # Errors
    ///
    /// Returns [`CountError`] without changing anything if the count is
    /// already zero.
    pub fn decrement(&mut self, player: Player, kind: PieceKind) -> Result<(), CountError> {
        let count = &mut self.counts[player.index()][kind.index()];
        *count = count.checked_sub(1).ok_or(CountError { player, kind })?;
        Ok(())
    }

    /// Returns the first piece kind (in [`PieceKind`] order) the player has no
    /// pieces of left, which means the player has lost.
    #[must_use]
    pub fn eliminated_kind(&self, player: Player) -> Option<PieceKind> {
        PieceKind::iter().find(|&kind| self.remaining(player, kind) == 0)
    }

    /// True while the player keeps at least one piece of every kind. A single
    /// exhausted kind is enough to lose, even if other pieces remain.
    #[must_use]
    pub fn has_any_remaining(&self, player: Player) -> bool {
        self.eliminated_kind(player).is_none()
    }

    /// Checks the players in order (White first) and returns the opponent of
    /// the first one that has been eliminated.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        Player::iter()
            .find(|&player| !self.has_any_remaining(player))
            .map(Player::opponent)
    }
}

impl Default for PieceCounts {
    fn default() -> Self {
        Self::starting()
    }
}

impl fmt::Debug for PieceCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for player in Player::iter() {
            write!(f, "{player}:")?;
            for kind in PieceKind::iter() {
                write!(f, " {kind}={}", self.remaining(player, kind))?;
            }
            if player == Player::White {
                f.write_str("; ")?;
            }
        }
        Ok(())
    }
}
