use std::sync::Arc;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::{
    dictionary::Lexicon,
    game::{
        board::Board,
        error::GameError,
        pool::TilePool,
        premium::PremiumSquares,
        rack::Rack,
        validator::{MoveEvaluation, MoveValidator},
    },
    models::{
        GameStatus, Letter, Placement, PlayerId, PlayerScore, ScoreEntry, ScoredWord, MAX_PLAYERS,
        MIN_PLAYERS, RACK_SIZE,
    },
};

/// How tile exchanges interact with turn order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangePolicy {
    /// Whether an exchange passes the turn to the next player
    pub ends_turn: bool,
    /// Exchanges allowed per player over the whole game, `None` for no cap
    pub max_per_player: Option<u32>,
}

#[derive(Debug, Clone)]
struct Player {
    id: PlayerId,
    score: u32,
    eliminated: bool,
    rack: Rack,
    exchanges: u32,
}

/// Result of a committed move
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnOutcome {
    pub player: PlayerId,
    pub score: u32,
    pub words: Vec<ScoredWord>,
    pub bingo: bool,
    pub total_score: u32,
    pub next_player: PlayerId,
    pub status: GameStatus,
}

/// Result of a successful tile exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeOutcome {
    pub player: PlayerId,
    pub rack: Rack,
    pub next_player: PlayerId,
}

/// Owns one game: board, bag, players and whose turn it is.
///
/// Every transition takes the acting player explicitly and either commits in
/// full or returns an error with nothing changed.
#[derive(Debug)]
pub struct TurnController {
    board: Board,
    pool: TilePool,
    players: Vec<Player>,
    current: usize,
    move_count: u32,
    status: GameStatus,
    lexicon: Arc<Lexicon>,
    premiums: PremiumSquares,
    policy: ExchangePolicy,
}

impl TurnController {
    /// Start a game on the standard board with a standard bag. Every player
    /// draws a full rack.
    pub fn new(
        player_count: usize,
        lexicon: Arc<Lexicon>,
        policy: ExchangePolicy,
        rng: StdRng,
    ) -> Result<Self, GameError> {
        Self::check_player_count(player_count)?;

        let mut pool = TilePool::standard(rng);
        let racks = (0..player_count)
            .map(|_| Rack::new(pool.draw(RACK_SIZE)))
            .collect();

        Self::from_parts(lexicon, PremiumSquares::standard(), pool, racks, policy)
    }

    /// Start a game from explicit pieces. Racks are used as given.
    pub fn from_parts(
        lexicon: Arc<Lexicon>,
        premiums: PremiumSquares,
        pool: TilePool,
        racks: Vec<Rack>,
        policy: ExchangePolicy,
    ) -> Result<Self, GameError> {
        Self::check_player_count(racks.len())?;

        let players = racks
            .into_iter()
            .enumerate()
            .map(|(idx, rack)| Player {
                id: PlayerId::from_index(idx),
                score: 0,
                eliminated: false,
                rack,
                exchanges: 0,
            })
            .collect::<Vec<_>>();

        tracing::info!(
            "Game created with {} players, {} tiles in the bag",
            players.len(),
            pool.remaining()
        );

        Ok(Self {
            board: Board::new(),
            pool,
            players,
            current: 0,
            move_count: 0,
            status: GameStatus::Active,
            lexicon,
            premiums,
            policy,
        })
    }

    fn check_player_count(count: usize) -> Result<(), GameError> {
        if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            Ok(())
        } else {
            Err(GameError::InvalidPlayerCount(count))
        }
    }

    /// Validate, score and commit a move for `player`.
    ///
    /// On success the tiles are on the board, the rack is refilled, the score
    /// is added and the turn has moved on. On failure nothing changed and
    /// the same player is still up.
    pub fn submit_turn(
        &mut self,
        player: PlayerId,
        placements: &[Placement],
    ) -> Result<TurnOutcome, GameError> {
        let idx = self.check_turn(player)?;

        let evaluation = self.evaluate(idx, placements)?;
        let letters: Vec<Letter> = placements.iter().map(|p| p.letter).collect();
        let mut rack = self.players[idx]
            .rack
            .without(&letters)
            .ok_or(GameError::IllegalRackUse)?;

        // Everything below this point is the commit and cannot fail
        self.board.commit(placements);
        rack.add(self.pool.draw(rack.missing()));
        let seat = &mut self.players[idx];
        seat.rack = rack;
        seat.score += evaluation.score;
        let total_score = seat.score;
        self.move_count += 1;

        tracing::info!(
            "{} played {:?} for {} points (total {})",
            player,
            evaluation.words.iter().map(|w| w.word.as_str()).collect::<Vec<_>>(),
            evaluation.score,
            total_score
        );

        if self.pool.remaining() == 0 && self.players[idx].rack.is_empty() {
            self.finish();
        } else {
            self.advance();
        }

        Ok(TurnOutcome {
            player,
            score: evaluation.score,
            words: evaluation.words,
            bingo: evaluation.bingo,
            total_score,
            next_player: self.current_player(),
            status: self.status,
        })
    }

    /// Score a move for the player whose turn it is without committing it
    pub fn preview_turn(
        &self,
        player: PlayerId,
        placements: &[Placement],
    ) -> Result<MoveEvaluation, GameError> {
        let idx = self.check_turn(player)?;
        self.evaluate(idx, placements)
    }

    fn evaluate(&self, idx: usize, placements: &[Placement]) -> Result<MoveEvaluation, GameError> {
        MoveValidator::new(&self.board, &self.lexicon, &self.premiums).validate(
            &self.players[idx].rack,
            placements,
            self.move_count == 0,
        )
    }

    /// Swap `letters` from the player's rack for fresh tiles from the bag.
    ///
    /// Replacements are drawn before the old tiles go back, so a player
    /// never gets their own tiles straight back.
    pub fn exchange_tiles(
        &mut self,
        player: PlayerId,
        letters: &[Letter],
    ) -> Result<ExchangeOutcome, GameError> {
        let idx = self.check_turn(player)?;

        if letters.is_empty() {
            return Err(GameError::EmptyExchange);
        }
        if let Some(limit) = self.policy.max_per_player {
            if self.players[idx].exchanges >= limit {
                return Err(GameError::ExchangeLimitReached { limit });
            }
        }
        let mut rack = self.players[idx]
            .rack
            .without(letters)
            .ok_or(GameError::IllegalRackUse)?;
        if letters.len() > self.pool.remaining() {
            return Err(GameError::InsufficientPoolForExchange {
                requested: letters.len(),
                remaining: self.pool.remaining(),
            });
        }

        rack.add(self.pool.draw(letters.len()));
        self.pool.return_tiles(letters.iter().copied());
        let seat = &mut self.players[idx];
        seat.rack = rack;
        seat.exchanges += 1;

        tracing::info!("{} exchanged {} tiles", player, letters.len());

        if self.policy.ends_turn {
            self.advance();
        }

        Ok(ExchangeOutcome {
            player,
            rack: self.players[idx].rack.clone(),
            next_player: self.current_player(),
        })
    }

    /// Give up the turn without playing
    pub fn pass_turn(&mut self, player: PlayerId) -> Result<PlayerId, GameError> {
        self.check_turn(player)?;
        tracing::info!("{} passed", player);
        self.advance();
        Ok(self.current_player())
    }

    /// Knock a player out of the game. Their rack stays out of play.
    pub fn remove_player(&mut self, player: PlayerId) -> Result<(), GameError> {
        self.ensure_active()?;
        let idx = self.slot(player)?;
        if self.players[idx].eliminated {
            return Ok(());
        }

        self.players[idx].eliminated = true;
        tracing::info!("{} eliminated", player);

        if self.current == idx {
            self.advance();
        }
        if self.active_count() <= 1 {
            self.finish();
        }
        Ok(())
    }

    pub fn get_scores(&self) -> Vec<PlayerScore> {
        self.players
            .iter()
            .map(|p| PlayerScore {
                player: p.id,
                score: if p.eliminated {
                    ScoreEntry::Eliminated
                } else {
                    ScoreEntry::Points(p.score)
                },
            })
            .collect()
    }

    pub fn get_rack(&self, player: PlayerId) -> Result<&Rack, GameError> {
        let idx = self.slot(player)?;
        Ok(&self.players[idx].rack)
    }

    pub fn get_racks(&self) -> Vec<(PlayerId, &Rack)> {
        self.players.iter().map(|p| (p.id, &p.rack)).collect()
    }

    pub fn current_player(&self) -> PlayerId {
        self.players[self.current].id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn premiums(&self) -> &PremiumSquares {
        &self.premiums
    }

    pub fn tiles_remaining(&self) -> usize {
        self.pool.remaining()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn policy(&self) -> ExchangePolicy {
        self.policy
    }

    /// Common entry for turn actions: the game must be running and it must be
    /// `player`'s turn. Returns the player's slot.
    ///
    /// `current` never points at an eliminated seat while the game is active,
    /// since `remove_player` moves the turn on before returning.
    fn check_turn(&self, player: PlayerId) -> Result<usize, GameError> {
        self.ensure_active()?;
        let idx = self.slot(player)?;
        if self.current != idx {
            return Err(GameError::NotPlayersTurn {
                player,
                current: self.current_player(),
            });
        }
        Ok(idx)
    }

    fn ensure_active(&self) -> Result<(), GameError> {
        match self.status {
            GameStatus::Active => Ok(()),
            GameStatus::Finished { .. } => Err(GameError::GameOver),
        }
    }

    fn slot(&self, player: PlayerId) -> Result<usize, GameError> {
        player
            .index()
            .filter(|&idx| idx < self.players.len())
            .ok_or(GameError::UnknownPlayer(player))
    }

    fn active_count(&self) -> usize {
        self.players.iter().filter(|p| !p.eliminated).count()
    }

    /// Move to the next player who is still in, wrapping around
    fn advance(&mut self) {
        let n = self.players.len();
        for step in 1..=n {
            let idx = (self.current + step) % n;
            if !self.players[idx].eliminated {
                self.current = idx;
                return;
            }
        }
    }

    fn finish(&mut self) {
        let winner = self
            .players
            .iter()
            .filter(|p| !p.eliminated)
            .fold(None::<&Player>, |best, p| match best {
                Some(b) if b.score >= p.score => Some(b),
                _ => Some(p),
            })
            .map(|p| p.id);

        self.status = GameStatus::Finished { winner };
        match winner {
            Some(id) => tracing::info!("Game finished, {} wins", id),
            None => tracing::info!("Game finished with no players left"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn lexicon() -> Arc<Lexicon> {
        Arc::new(
            Lexicon::from_words(&["AT", "CAT", "CATS", "DOG", "DOGS", "RETAINS", "TA"]).unwrap(),
        )
    }

    fn letters(s: &str) -> Vec<Letter> {
        Letter::parse_all(s).unwrap()
    }

    fn rack(s: &str) -> Rack {
        Rack::new(letters(s))
    }

    fn across(row: usize, col: usize, word: &str) -> Vec<Placement> {
        letters(word)
            .into_iter()
            .enumerate()
            .map(|(i, l)| Placement::new(row, col + i, l))
            .collect()
    }

    fn down(row: usize, col: usize, word: &str) -> Vec<Placement> {
        letters(word)
            .into_iter()
            .enumerate()
            .map(|(i, l)| Placement::new(row + i, col, l))
            .collect()
    }

    /// Game with fixed racks and a small known bag
    fn game(racks: &[&str], bag: &str, policy: ExchangePolicy) -> TurnController {
        TurnController::from_parts(
            lexicon(),
            PremiumSquares::standard(),
            TilePool::from_letters(letters(bag), StdRng::seed_from_u64(7)),
            racks.iter().map(|r| rack(r)).collect(),
            policy,
        )
        .unwrap()
    }

    fn tile_total(game: &TurnController) -> usize {
        game.tiles_remaining()
            + game.get_racks().iter().map(|(_, r)| r.len()).sum::<usize>()
            + game.board().occupied_count()
    }

    #[test]
    fn test_new_game_deals_full_racks() {
        let game = TurnController::new(3, lexicon(), ExchangePolicy::default(), StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(game.player_count(), 3);
        assert!(game.get_racks().iter().all(|(_, r)| r.len() == RACK_SIZE));
        assert_eq!(game.tiles_remaining(), 100 - 3 * RACK_SIZE);
        assert_eq!(game.current_player(), PlayerId(1));
        assert_eq!(game.status(), GameStatus::Active);
    }

    #[test]
    fn test_player_count_bounds() {
        for count in [0, 1, 5] {
            let result = TurnController::new(
                count,
                lexicon(),
                ExchangePolicy::default(),
                StdRng::seed_from_u64(1),
            );
            assert_eq!(result.err(), Some(GameError::InvalidPlayerCount(count)));
        }
    }

    #[test]
    fn test_valid_turn_commits_and_rotates() {
        let mut game = game(&["CATXXXX", "DOGXXXX"], "EEEEEEEEEE", ExchangePolicy::default());

        let outcome = game.submit_turn(PlayerId(1), &across(7, 7, "CAT")).unwrap();
        assert_eq!(outcome.score, 10);
        assert_eq!(outcome.total_score, 10);
        assert_eq!(outcome.next_player, PlayerId(2));

        assert_eq!(game.board().get(7, 8), Some(Letter::new('A').unwrap()));
        assert_eq!(game.get_rack(PlayerId(1)).unwrap().len(), RACK_SIZE);
        assert_eq!(game.tiles_remaining(), 7);
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.get_scores()[0].score, ScoreEntry::Points(10));
    }

    #[test]
    fn test_wrong_player_rejected() {
        let mut game = game(&["CATXXXX", "DOGXXXX"], "", ExchangePolicy::default());
        let result = game.submit_turn(PlayerId(2), &across(7, 7, "DOG"));
        assert_eq!(
            result.err(),
            Some(GameError::NotPlayersTurn {
                player: PlayerId(2),
                current: PlayerId(1)
            })
        );
    }

    #[test]
    fn test_unknown_player_rejected() {
        let mut game = game(&["CAT", "DOG"], "", ExchangePolicy::default());
        assert_eq!(
            game.submit_turn(PlayerId(9), &across(7, 7, "CAT")).err(),
            Some(GameError::UnknownPlayer(PlayerId(9)))
        );
        assert_eq!(game.get_rack(PlayerId(0)).err(), Some(GameError::UnknownPlayer(PlayerId(0))));
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = game(&["CATXXXX", "DOGXXXX"], "EEEEE", ExchangePolicy::default());
        let bad = across(3, 3, "CAT");

        for _ in 0..2 {
            let result = game.submit_turn(PlayerId(1), &bad);
            assert_eq!(result.err(), Some(GameError::DisconnectedFromBoard));
            assert!(game.board().is_empty());
            assert_eq!(game.get_rack(PlayerId(1)).unwrap(), &rack("CATXXXX"));
            assert_eq!(game.tiles_remaining(), 5);
            assert_eq!(game.current_player(), PlayerId(1));
            assert_eq!(game.move_count(), 0);
            assert_eq!(game.get_scores()[0].score, ScoreEntry::Points(0));
        }

        // Same player can try again
        assert!(game.submit_turn(PlayerId(1), &across(7, 7, "CAT")).is_ok());
    }

    #[test]
    fn test_rotation_wraps_and_skips_eliminated() {
        let mut game = game(&["CATXXXX", "SXXXXXX", "SXXXXXX"], "", ExchangePolicy::default());

        assert_eq!(game.pass_turn(PlayerId(1)).unwrap(), PlayerId(2));
        assert_eq!(game.pass_turn(PlayerId(2)).unwrap(), PlayerId(3));
        assert_eq!(game.pass_turn(PlayerId(3)).unwrap(), PlayerId(1));

        game.remove_player(PlayerId(2)).unwrap();
        assert_eq!(game.pass_turn(PlayerId(1)).unwrap(), PlayerId(3));
        assert_eq!(game.pass_turn(PlayerId(3)).unwrap(), PlayerId(1));
    }

    #[test]
    fn test_submissions_rotate_through_three_players() {
        let mut game = game(&["CATXXXX", "SXXXXXX", "SXXXXXX"], "EEEEEEEEEE", ExchangePolicy::default());

        let first = game.submit_turn(PlayerId(1), &across(7, 7, "CAT")).unwrap();
        assert_eq!(first.next_player, PlayerId(2));
        let second = game.submit_turn(PlayerId(2), &across(7, 10, "S")).unwrap();
        assert_eq!(second.words[0].word, "CATS");
        assert_eq!(second.next_player, PlayerId(3));
        let pass = game.pass_turn(PlayerId(3)).unwrap();
        assert_eq!(pass, PlayerId(1));
    }

    #[test]
    fn test_removing_current_player_advances() {
        let mut game = game(&["CAT", "DOG", "CAT"], "", ExchangePolicy::default());
        game.remove_player(PlayerId(1)).unwrap();
        assert_eq!(game.current_player(), PlayerId(2));
        assert_eq!(game.get_scores()[0].score, ScoreEntry::Eliminated);
        assert_eq!(game.status(), GameStatus::Active);

        // Removing again is a no-op
        game.remove_player(PlayerId(1)).unwrap();
        assert_eq!(game.current_player(), PlayerId(2));
    }

    #[test]
    fn test_eliminated_seat_never_holds_the_turn() {
        let mut game = game(&["CATXXXX", "DOGXXXX", "CATXXXX"], "EEEEE", ExchangePolicy::default());
        game.remove_player(PlayerId(1)).unwrap();

        assert_eq!(
            game.submit_turn(PlayerId(1), &across(7, 7, "CAT")).err(),
            Some(GameError::NotPlayersTurn {
                player: PlayerId(1),
                current: PlayerId(2)
            })
        );
        let outcome = game.submit_turn(PlayerId(2), &across(7, 7, "DOG")).unwrap();
        assert_eq!(outcome.next_player, PlayerId(3));
        // Rotation wraps past the eliminated first seat
        assert_eq!(game.pass_turn(PlayerId(3)).unwrap(), PlayerId(2));
    }

    #[test]
    fn test_out_of_turn_preview_leaves_turn_alone() {
        let game = game(&["CATXXXX", "DOGXXXX"], "EEEEE", ExchangePolicy::default());
        assert_eq!(
            game.preview_turn(PlayerId(2), &across(7, 7, "DOG")).err(),
            Some(GameError::NotPlayersTurn {
                player: PlayerId(2),
                current: PlayerId(1)
            })
        );
        assert_eq!(game.current_player(), PlayerId(1));
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_last_player_standing_wins() {
        let mut game = game(&["CAT", "DOG"], "", ExchangePolicy::default());
        game.remove_player(PlayerId(2)).unwrap();
        assert_eq!(
            game.status(),
            GameStatus::Finished {
                winner: Some(PlayerId(1))
            }
        );
        assert_eq!(game.pass_turn(PlayerId(1)).err(), Some(GameError::GameOver));
    }

    #[test]
    fn test_exchange_swaps_tiles() {
        let mut game = game(&["CATXXXX", "DOGXXXX"], "EEEEE", ExchangePolicy::default());
        let outcome = game.exchange_tiles(PlayerId(1), &letters("XX")).unwrap();

        let rack = game.get_rack(PlayerId(1)).unwrap();
        assert_eq!(rack.len(), RACK_SIZE);
        assert_eq!(rack.letters().iter().filter(|l| l.as_char() == 'E').count(), 2);
        assert_eq!(rack.letters().iter().filter(|l| l.as_char() == 'X').count(), 2);
        assert_eq!(game.tiles_remaining(), 5);
        // Default policy keeps the turn
        assert_eq!(outcome.next_player, PlayerId(1));
    }

    #[test]
    fn test_exchange_larger_than_bag_changes_nothing() {
        let mut game = game(&["CATXXXX", "DOGXXXX"], "EE", ExchangePolicy::default());
        let result = game.exchange_tiles(PlayerId(1), &letters("XXX"));
        assert_eq!(
            result.err(),
            Some(GameError::InsufficientPoolForExchange {
                requested: 3,
                remaining: 2
            })
        );
        assert_eq!(game.get_rack(PlayerId(1)).unwrap(), &rack("CATXXXX"));
        assert_eq!(game.tiles_remaining(), 2);
    }

    #[test]
    fn test_exchange_requires_tiles_in_rack() {
        let mut game = game(&["CATXXXX", "DOGXXXX"], "EEEEE", ExchangePolicy::default());
        assert_eq!(
            game.exchange_tiles(PlayerId(1), &letters("QQ")).err(),
            Some(GameError::IllegalRackUse)
        );
        assert_eq!(game.exchange_tiles(PlayerId(1), &[]).err(), Some(GameError::EmptyExchange));
    }

    #[test]
    fn test_exchange_policy_ends_turn_and_caps() {
        let policy = ExchangePolicy {
            ends_turn: true,
            max_per_player: Some(1),
        };
        let mut game = game(&["CATXXXX", "DOGXXXX"], "EEEEEEEE", policy);

        let outcome = game.exchange_tiles(PlayerId(1), &letters("X")).unwrap();
        assert_eq!(outcome.next_player, PlayerId(2));
        game.pass_turn(PlayerId(2)).unwrap();

        assert_eq!(
            game.exchange_tiles(PlayerId(1), &letters("X")).err(),
            Some(GameError::ExchangeLimitReached { limit: 1 })
        );
    }

    #[test]
    fn test_bingo_adds_fifty_to_player_score() {
        let mut game = game(&["RETAINS", "DOGXXXX"], "EEEEEEE", ExchangePolicy::default());
        let outcome = game.submit_turn(PlayerId(1), &across(7, 1, "RETAINS")).unwrap();
        assert!(outcome.bingo);
        assert_eq!(outcome.score, 66);
        assert_eq!(game.get_scores()[0].score, ScoreEntry::Points(66));
    }

    #[test]
    fn test_scores_accumulate_per_player() {
        let mut game = game(&["CATXXXX", "SXXXXXX"], "EEEEEEEEEE", ExchangePolicy::default());
        game.submit_turn(PlayerId(1), &across(7, 7, "CAT")).unwrap();
        game.submit_turn(PlayerId(2), &across(7, 10, "S")).unwrap();

        let scores = game.get_scores();
        assert_eq!(scores[0].score, ScoreEntry::Points(10));
        assert_eq!(scores[1].score, ScoreEntry::Points(6));
    }

    #[test]
    fn test_game_ends_when_bag_and_rack_run_out() {
        let mut game = game(&["CAT", "DOG"], "", ExchangePolicy::default());
        let outcome = game.submit_turn(PlayerId(1), &across(7, 7, "CAT")).unwrap();
        assert_eq!(
            outcome.status,
            GameStatus::Finished {
                winner: Some(PlayerId(1))
            }
        );
        assert_eq!(
            game.submit_turn(PlayerId(2), &down(6, 8, "DOG")).err(),
            Some(GameError::GameOver)
        );
    }

    #[test]
    fn test_tiles_are_conserved() {
        let mut game = TurnController::new(2, lexicon(), ExchangePolicy::default(), StdRng::seed_from_u64(3))
            .unwrap();
        let initial = tile_total(&game);
        assert_eq!(initial, 100);

        // Whatever the racks hold, these calls keep every tile accounted for
        let current = game.current_player();
        let rack = game.get_rack(current).unwrap().letters().to_vec();
        let _ = game.exchange_tiles(current, &rack[..3]);
        assert_eq!(tile_total(&game), initial);

        let _ = game.submit_turn(current, &[Placement::new(7, 7, rack[3])]);
        assert_eq!(tile_total(&game), initial);

        game.pass_turn(current).unwrap();
        game.remove_player(PlayerId(1)).unwrap();
        assert_eq!(tile_total(&game), initial);
    }

    #[test]
    fn test_conservation_across_committed_turns() {
        let mut game = game(&["CATXXXX", "SXXXXXX"], "EEEEEEEEEE", ExchangePolicy::default());
        let initial = tile_total(&game);
        game.submit_turn(PlayerId(1), &across(7, 7, "CAT")).unwrap();
        assert_eq!(tile_total(&game), initial);
        game.submit_turn(PlayerId(2), &across(7, 10, "S")).unwrap();
        assert_eq!(tile_total(&game), initial);
    }

    #[test]
    fn test_preview_does_not_commit() {
        let game = game(&["CATXXXX", "DOGXXXX"], "EEEEE", ExchangePolicy::default());
        let preview = game.preview_turn(PlayerId(1), &across(7, 7, "CAT")).unwrap();
        assert_eq!(preview.score, 10);
        assert!(game.board().is_empty());
        assert_eq!(game.current_player(), PlayerId(1));
    }
}
