use crate::board::Mark;
use crate::game_state::Outcome;

/// Running totals of finished games.
///
/// Only kept in memory; a caller that wants the tally to survive a restart
/// reads the counters and stores them itself.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Mark::X) => self.x_wins += 1,
            Outcome::Win(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    pub fn clear(&mut self) {
        *self = Scoreboard::default();
    }
}
