//! Victory conditions.

use serde::{Deserialize, Serialize};

use crate::core::config::CONTROL_VICTORY_THRESHOLD;
use crate::core::{Game, PlayerId};

/// How a game was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VictoryKind {
    /// Five or more nexus spaces controlled at a nexus check.
    Control,
    /// A Champion reached the opponent's home base.
    Arrival,
    /// Round limit reached; decided on score.
    Tiebreaker,
}

impl std::fmt::Display for VictoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VictoryKind::Control => f.write_str("Control"),
            VictoryKind::Arrival => f.write_str("Arrival"),
            VictoryKind::Tiebreaker => f.write_str("Tiebreaker"),
        }
    }
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Victory {
    pub winner: PlayerId,
    pub kind: VictoryKind,
}

impl Victory {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Control and Arrival checks, in that order, player A first.
///
/// Expects control counts to be current.
#[must_use]
pub fn check_victory(game: &Game) -> Option<Victory> {
    let by_control = PlayerId::all()
        .find(|&p| game.controlled_nexus_count(p) >= CONTROL_VICTORY_THRESHOLD)
        .map(|winner| Victory {
            winner,
            kind: VictoryKind::Control,
        });

    by_control.or_else(|| {
        PlayerId::all()
            .find(|&p| game.champion(p).position() == game.player(p).opponent_home_base())
            .map(|winner| Victory {
                winner,
                kind: VictoryKind::Arrival,
            })
    })
}

/// `2 × controlled nexus + Champion distance traveled`.
#[must_use]
pub fn tiebreaker_score(game: &Game, player: PlayerId) -> u32 {
    2 * u32::from(game.controlled_nexus_count(player)) + game.champion(player).distance_traveled()
}

/// Strictly higher score wins; an exact tie goes to player A.
#[must_use]
pub fn tiebreaker_winner(game: &Game) -> PlayerId {
    let a = tiebreaker_score(game, PlayerId::A);
    let b = tiebreaker_score(game, PlayerId::B);
    if b > a {
        PlayerId::B
    } else {
        PlayerId::A
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;
    use crate::pieces::PieceId;

    #[test]
    fn test_no_victory_at_start() {
        let game = Game::with_seed(1);
        assert!(check_victory(&game).is_none());
    }

    #[test]
    fn test_control_checked_before_arrival() {
        let mut game = Game::with_seed(1);
        for pos in [3, 6, 9, 12, 15] {
            game.set_controller(Position(pos), Some(PlayerId::B));
        }
        game.place_piece(PieceId(0), Position(11));

        let victory = check_victory(&game).unwrap();
        assert_eq!(victory.winner, PlayerId::B);
        assert_eq!(victory.kind, VictoryKind::Control);
    }

    #[test]
    fn test_four_nexus_is_not_enough() {
        let mut game = Game::with_seed(1);
        for pos in [3, 6, 9, 12] {
            game.set_controller(Position(pos), Some(PlayerId::A));
        }
        assert!(check_victory(&game).is_none());
    }

    #[test]
    fn test_arrival() {
        let mut game = Game::with_seed(1);
        game.place_piece(PieceId(7), Position(1));

        let victory = check_victory(&game).unwrap();
        assert!(victory.is_winner(PlayerId::B));
        assert_eq!(victory.kind, VictoryKind::Arrival);
    }

    #[test]
    fn test_tiebreaker_score() {
        let mut game = Game::with_seed(1);
        game.set_controller(Position(3), Some(PlayerId::A));
        game.pieces[0].distance_traveled = 7;

        assert_eq!(tiebreaker_score(&game, PlayerId::A), 9);
        assert_eq!(tiebreaker_score(&game, PlayerId::B), 0);
        assert_eq!(tiebreaker_winner(&game), PlayerId::A);
    }

    #[test]
    fn test_tiebreaker_tie_goes_to_a() {
        let mut game = Game::with_seed(1);
        game.pieces[0].distance_traveled = 4;
        game.pieces[7].distance_traveled = 4;
        assert_eq!(tiebreaker_winner(&game), PlayerId::A);

        game.pieces[7].distance_traveled = 5;
        assert_eq!(tiebreaker_winner(&game), PlayerId::B);
    }
}
