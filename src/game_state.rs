use crate::board::{Board, CELL_COUNT, Mark};
use crate::error::InvalidMove;
use tracing::{debug, instrument};

/// Where a game stands.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Status {
    /// Moves are still accepted.
    InProgress,
    /// `winner` completed `line`, one of the [`WIN_LINES`](crate::board::WIN_LINES).
    Won { winner: Mark, line: [usize; 3] },
    /// The board is full and no line is complete.
    Draw,
}

impl Status {
    /// Returns `true` for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::InProgress)
    }

    /// Returns the outcome of a finished game, `None` while it is in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Status::InProgress => None,
            Status::Won { winner, .. } => Some(Outcome::Win(*winner)),
            Status::Draw => Some(Outcome::Draw),
        }
    }
}

/// The result of a finished game, as reported to score keepers.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Outcome {
    Win(Mark),
    Draw,
}

/// The complete state of one game: board, whose turn it is, and status.
///
/// A fresh state has an empty board, `X` to move and [`Status::InProgress`].
/// The only way to change it is [`GameState::apply_move`] or a full
/// [`GameState::reset`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GameState {
    board: Board,
    current_player: Mark,
    status: Status,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl GameState {
    pub const fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            status: Status::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next. Frozen at the last mover once the game is over.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the indices still open for play; empty once the game is over.
    pub fn empty_cells(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }

        self.board.empty_cells()
    }

    /// Places the current player's mark on `index`.
    ///
    /// After the mark is placed the board is checked for a win and then for a
    /// draw; the turn passes to the other player only if the game goes on.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the game is over, `index` is not in `0..9`
    /// or the cell is taken. The state is not modified in that case.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, index: usize) -> Result<Status, InvalidMove> {
        if self.is_over() {
            debug!("move rejected, game is over");
            return Err(InvalidMove::GameOver);
        }
        if index >= CELL_COUNT {
            debug!("move rejected, index out of range");
            return Err(InvalidMove::OutOfRange(index));
        }
        if !self.board.is_empty_at(index) {
            debug!("move rejected, cell occupied");
            return Err(InvalidMove::CellOccupied(index));
        }

        self.board.set(index, self.current_player);
        self.status = evaluate_termination(&self.board);
        if !self.is_over() {
            self.current_player = self.current_player.opponent();
        }

        debug!(status = ?self.status, "move applied");
        Ok(self.status)
    }

    /// Restores the initial state.
    pub fn reset(&mut self) {
        *self = GameState::new();
    }
}

/// Classifies a board. A complete line always wins, even on a full board.
pub fn evaluate_termination(board: &Board) -> Status {
    if let Some((winner, line)) = board.winning_line() {
        return Status::Won { winner, line };
    }

    if board.is_full() {
        Status::Draw
    } else {
        Status::InProgress
    }
}

/// Starts a new game with `X` to move.
pub fn new_game() -> GameState {
    GameState::new()
}

/// Applies `index` to an owned state and hands it back.
///
/// On error the state is dropped; clone it first if it has to survive a rejected move.
pub fn apply_move(mut state: GameState, index: usize) -> Result<GameState, InvalidMove> {
    state.apply_move(index)?;
    Ok(state)
}

pub fn status(state: &GameState) -> Status {
    state.status()
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, CELL_COUNT, Mark, WIN_LINES};
    use crate::error::InvalidMove;
    use crate::game_state::{
        GameState, Outcome, Status, apply_move, evaluate_termination, new_game, status,
    };

    fn play(moves: &[usize]) -> GameState {
        let mut state = new_game();
        for &index in moves {
            state.apply_move(index).unwrap();
        }
        state
    }

    #[test]
    fn new_game_is_empty_with_x_to_move() {
        let state = new_game();

        assert_eq!(*state.board(), Board::new());
        assert_eq!(state.current_player(), Mark::X);
        assert_eq!(state.status(), Status::InProgress);
    }

    #[test]
    fn x_wins_down_the_first_column() {
        // arrange
        let state = new_game();

        // act
        let state = [0, 1, 3, 2, 6]
            .into_iter()
            .try_fold(state, apply_move)
            .unwrap();

        // assert
        assert_eq!(
            status(&state),
            Status::Won {
                winner: Mark::X,
                line: [0, 3, 6]
            }
        );
        assert_eq!(state.current_player(), Mark::X);
    }

    #[test]
    fn o_completes_the_middle_row_on_the_eighth_move() {
        // arrange
        let mut state = play(&[0, 1, 2, 4, 6, 3, 8]);

        // act
        let result = state.apply_move(5);
        let late_move = state.apply_move(7);

        // assert
        assert_eq!(
            result,
            Ok(Status::Won {
                winner: Mark::O,
                line: [3, 4, 5]
            })
        );
        assert_eq!(late_move, Err(InvalidMove::GameOver));
        assert!(state.board().is_empty_at(7));
    }

    #[test]
    fn full_board_without_a_line_is_a_draw() {
        let state = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert_eq!(state.status(), Status::Draw);
        assert!(state.board().is_full());
        assert!(state.empty_cells().is_empty());
    }

    #[test]
    fn line_completed_on_the_ninth_move_is_a_win() {
        let state = play(&[0, 1, 2, 3, 4, 5, 7, 6, 8]);

        assert!(state.board().is_full());
        assert_eq!(
            state.status(),
            Status::Won {
                winner: Mark::X,
                line: [0, 4, 8]
            }
        );
    }

    #[test]
    fn reset_after_a_win_restores_the_initial_state() {
        // arrange
        let mut state = play(&[0, 1, 3, 2, 6]);
        assert!(state.is_over());

        // act
        state.reset();

        // assert
        assert_eq!(state, new_game());
    }

    #[test]
    fn turn_flips_once_per_non_terminal_move() {
        let mut state = new_game();

        state.apply_move(4).unwrap();
        assert_eq!(state.current_player(), Mark::O);

        state.apply_move(0).unwrap();
        assert_eq!(state.current_player(), Mark::X);
    }

    #[test]
    fn turn_does_not_flip_after_the_winning_move() {
        let mut state = play(&[0, 3, 1, 4]);

        let result = state.apply_move(2).unwrap();

        assert!(result.is_terminal());
        assert_eq!(state.current_player(), Mark::X);
    }

    #[test]
    fn occupied_cell_is_rejected_without_changes() {
        // arrange
        let mut state = play(&[4]);
        let before = state.clone();

        // act
        let result = state.apply_move(4);

        // assert
        assert_eq!(result, Err(InvalidMove::CellOccupied(4)));
        assert_eq!(state, before);
    }

    #[test]
    fn out_of_range_index_is_rejected_without_changes() {
        let mut state = play(&[0, 1]);
        let before = state.clone();

        assert_eq!(state.apply_move(9), Err(InvalidMove::OutOfRange(9)));
        assert_eq!(state.apply_move(usize::MAX), Err(InvalidMove::OutOfRange(usize::MAX)));
        assert_eq!(state, before);
    }

    #[test]
    fn moves_after_a_draw_are_rejected() {
        let mut state = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        let before = state.clone();

        assert_eq!(state.apply_move(0), Err(InvalidMove::GameOver));
        assert_eq!(state, before);
    }

    #[test]
    fn status_query_is_idempotent() {
        let state = play(&[0, 4, 8]);
        let before = state.clone();

        for _ in 0..5 {
            assert_eq!(status(&state), Status::InProgress);
        }
        assert_eq!(state, before);
    }

    #[test]
    fn by_value_apply_move_reports_errors() {
        let state = play(&[0]);

        assert_eq!(apply_move(state, 0), Err(InvalidMove::CellOccupied(0)));
    }

    #[test]
    fn outcome_follows_status() {
        assert_eq!(Status::InProgress.outcome(), None);
        assert_eq!(Status::Draw.outcome(), Some(Outcome::Draw));
        assert_eq!(
            Status::Won {
                winner: Mark::O,
                line: [2, 4, 6]
            }
            .outcome(),
            Some(Outcome::Win(Mark::O))
        );
    }

    #[test]
    fn termination_matches_line_and_fullness_on_every_board() {
        let mut cells = [None; CELL_COUNT];
        for code in 0..3u32.pow(CELL_COUNT as u32) {
            let mut rest = code;
            for cell in cells.iter_mut() {
                *cell = match rest % 3 {
                    0 => None,
                    1 => Some(Mark::X),
                    _ => Some(Mark::O),
                };
                rest /= 3;
            }
            let board = Board::from_cells(cells);

            let complete = WIN_LINES.iter().find(|line| {
                cells[line[0]].is_some()
                    && cells[line[0]] == cells[line[1]]
                    && cells[line[0]] == cells[line[2]]
            });
            let expected = match complete {
                Some(&line) => Status::Won {
                    winner: cells[line[0]].unwrap(),
                    line,
                },
                None if cells.iter().all(Option::is_some) => Status::Draw,
                None => Status::InProgress,
            };

            assert_eq!(evaluate_termination(&board), expected, "board {code}");
        }
    }
}
