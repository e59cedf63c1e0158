use crate::advisor::{HeuristicAdvisor, recommend_move};
use crate::board::Mark;
use crate::error::InvalidMove;
use crate::game_state::{GameState, Status};
use crate::random::{RandomGenerator, StandardRandomGenerator};
use crate::scoreboard::Scoreboard;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Pause a presentation layer should leave before showing the computer's move.
pub const DEFAULT_COMPUTER_DELAY: Duration = Duration::from_millis(260);

/// Who controls the two marks.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum Mode {
    /// Both marks are played by people.
    #[default]
    TwoPlayer,
    /// `computer` is played by the advisor. Choosing `X` makes the computer open the game.
    VsComputer { computer: Mark },
}

impl Mode {
    /// The usual setup: the human opens with `X`, the computer answers with `O`.
    pub const fn vs_computer() -> Self {
        Mode::VsComputer { computer: Mark::O }
    }

    pub fn computer(&self) -> Option<Mark> {
        match self {
            Mode::TwoPlayer => None,
            Mode::VsComputer { computer } => Some(*computer),
        }
    }
}

/// Ties a [`GameState`] to a mode, an advisor and a running [`Scoreboard`].
///
/// The session never renders, sleeps or stores anything. A presentation
/// layer forwards clicks to [`GameSession::play`], waits
/// [`GameSession::computer_delay`] while [`GameSession::is_computer_turn`]
/// holds and then calls [`GameSession::play_computer_turn`].
pub struct GameSession<K: RandomGenerator> {
    state: GameState,
    mode: Mode,
    advisor: HeuristicAdvisor<K>,
    scoreboard: Scoreboard,
    computer_delay: Duration,
}

impl<K: RandomGenerator> Default for GameSession<K> {
    fn default() -> Self {
        GameSessionBuilder::new().build()
    }
}

/// A builder for creating instances of `GameSession`.
pub struct GameSessionBuilder<K: RandomGenerator> {
    mode: Mode,
    random_generator: K,
    computer_delay: Duration,
}

impl<K: RandomGenerator> Default for GameSessionBuilder<K> {
    fn default() -> Self {
        GameSessionBuilder::new()
    }
}

impl<K: RandomGenerator> GameSessionBuilder<K> {
    /// Creates a builder for a two-player session with the default delay.
    pub fn new() -> Self {
        Self {
            mode: Mode::default(),
            random_generator: K::default(),
            computer_delay: DEFAULT_COMPUTER_DELAY,
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the random source used for the computer's corner choice.
    pub fn with_random_generator(mut self, rg: K) -> Self {
        self.random_generator = rg;
        self
    }

    pub fn with_computer_delay(mut self, delay: Duration) -> Self {
        self.computer_delay = delay;
        self
    }

    pub fn build(self) -> GameSession<K> {
        GameSession::new(self.mode, self.random_generator, self.computer_delay)
    }
}

impl<K: RandomGenerator> GameSession<K> {
    pub fn builder() -> GameSessionBuilder<K> {
        GameSessionBuilder::new()
    }

    /// Creates a session. Prefer `GameSession::builder()`.
    pub fn new(mode: Mode, rg: K, computer_delay: Duration) -> Self {
        Self {
            state: GameState::new(),
            mode,
            advisor: HeuristicAdvisor::new(rg),
            scoreboard: Scoreboard::new(),
            computer_delay,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn computer_delay(&self) -> Duration {
        self.computer_delay
    }

    /// Returns `true` while the game is running and the computer holds the move.
    pub fn is_computer_turn(&self) -> bool {
        !self.state.is_over() && self.mode.computer() == Some(self.state.current_player())
    }

    /// Applies a human move.
    ///
    /// # Errors
    ///
    /// Everything [`GameState::apply_move`] rejects, plus
    /// [`InvalidMove::NotYourTurn`] when the computer is due to move.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<Status, InvalidMove> {
        if self.is_computer_turn() {
            debug!("move rejected, waiting for the computer");
            return Err(InvalidMove::NotYourTurn(self.state.current_player()));
        }

        self.apply(index)
    }

    /// Lets the computer move. Returns `None` when it is not the computer's turn.
    #[instrument(skip(self))]
    pub fn play_computer_turn(&mut self) -> Option<Result<Status, InvalidMove>> {
        if !self.is_computer_turn() {
            return None;
        }

        let index = recommend_move(&mut self.advisor, &self.state)?;
        Some(self.apply(index))
    }

    /// Starts a new game. The scoreboard is kept.
    pub fn restart(&mut self) {
        self.state.reset();
        debug!(mode = ?self.mode, "game restarted");
    }

    /// Switches the mode and starts a new game.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.restart();
    }

    pub fn clear_scores(&mut self) {
        self.scoreboard.clear();
    }

    fn apply(&mut self, index: usize) -> Result<Status, InvalidMove> {
        let status = self.state.apply_move(index)?;
        if let Some(outcome) = status.outcome() {
            self.scoreboard.record(outcome);
            info!(
                ?outcome,
                played = self.scoreboard.games_played(),
                "game over"
            );
        }

        Ok(status)
    }
}

impl GameSession<StandardRandomGenerator> {
    pub fn from_mode(mode: Mode) -> Self {
        GameSessionBuilder::new().with_mode(mode).build()
    }
}
