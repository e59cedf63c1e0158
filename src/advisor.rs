use crate::board::{Board, CENTER, CORNERS, Mark};
use crate::game_state::GameState;
use crate::random::{RandomGenerator, StandardRandomGenerator};
use tracing::{debug, instrument};

/// Picks a move for a computer-controlled player.
pub trait MoveAdvisor {
    /// Returns the cell `mark` should take on `board`, or `None` if the board is full.
    fn recommend(&mut self, board: &Board, mark: Mark) -> Option<usize>;
}

/// A fixed-priority opponent: win, block, center, random corner, first empty cell.
///
/// It does not search the game tree, so a careful player can beat it with a
/// fork. Only the corner choice is random; it is drawn from `K`, which tests
/// replace with a seeded or scripted generator.
#[derive(Debug, Default, Clone)]
pub struct HeuristicAdvisor<K: RandomGenerator> {
    random: K,
}

impl<K: RandomGenerator> HeuristicAdvisor<K> {
    pub fn new(random: K) -> Self {
        Self { random }
    }
}

impl HeuristicAdvisor<StandardRandomGenerator> {
    pub fn with_thread_rng() -> Self {
        HeuristicAdvisor::new(StandardRandomGenerator)
    }
}

impl<K: RandomGenerator> MoveAdvisor for HeuristicAdvisor<K> {
    #[instrument(skip(self, board))]
    fn recommend(&mut self, board: &Board, mark: Mark) -> Option<usize> {
        let empty = board.empty_cells();
        let first_empty = *empty.first()?;

        if let Some(index) = empty
            .iter()
            .copied()
            .find(|&i| board.completes_line(i, mark))
        {
            debug!(index, "taking the winning cell");
            return Some(index);
        }

        let opponent = mark.opponent();
        if let Some(index) = empty
            .iter()
            .copied()
            .find(|&i| board.completes_line(i, opponent))
        {
            debug!(index, "blocking the opponent");
            return Some(index);
        }

        if board.is_empty_at(CENTER) {
            debug!(index = CENTER, "taking the center");
            return Some(CENTER);
        }

        let corners: Vec<usize> = CORNERS
            .iter()
            .copied()
            .filter(|&i| board.is_empty_at(i))
            .collect();
        if let Some(&index) = self.random.choose(&corners) {
            debug!(index, free = corners.len(), "taking a corner");
            return Some(index);
        }

        debug!(index = first_empty, "falling back to the first empty cell");
        Some(first_empty)
    }
}

/// Asks `advisor` for a move on behalf of the player whose turn it is.
///
/// Returns `None` once the game is over.
pub fn recommend_move<A: MoveAdvisor + ?Sized>(
    advisor: &mut A,
    state: &GameState,
) -> Option<usize> {
    if state.is_over() {
        return None;
    }

    advisor.recommend(state.board(), state.current_player())
}
