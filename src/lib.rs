//! Game state, win detection and a heuristic computer opponent for 3x3 tic-tac-toe.
//!
//! The crate holds only the rules. Rendering, sound and storing scores belong
//! to the caller, which drives a [`GameState`](game_state::GameState) (or a
//! [`GameSession`](session::GameSession) when a computer opponent is wanted)
//! and reacts to the [`Status`](game_state::Status) it gets back.
//!
//! # Example
//!
//! ```rust
//! use tictactoe_core::advisor::{HeuristicAdvisor, recommend_move};
//! use tictactoe_core::board::Mark;
//! use tictactoe_core::game_state::{Status, new_game};
//! use tictactoe_core::random::SeededGenerator;
//!
//! // X opens in a corner
//! let mut state = new_game();
//! state.apply_move(0).unwrap();
//!
//! // Ask the computer for O's answer
//! let mut advisor = HeuristicAdvisor::new(SeededGenerator::default());
//! let answer = recommend_move(&mut advisor, &state).unwrap();
//! assert_eq!(answer, 4);
//!
//! let status = state.apply_move(answer).unwrap();
//! assert_eq!(status, Status::InProgress);
//! assert_eq!(state.current_player(), Mark::X);
//! ```

/// The move-picking strategy used for a computer opponent.
pub mod advisor;
/// Marks, the 3x3 board and the fixed set of winning lines.
pub mod board;
/// The error returned for rejected moves.
pub mod error;
/// Game state, move application and win/draw evaluation.
pub mod game_state;
/// Contains traits and implementations for random number generation.
pub mod random;
/// Cumulative win/draw counters.
pub mod scoreboard;
/// A game plus its mode, computer opponent and score tally.
pub mod session;
