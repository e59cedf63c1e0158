use std::error::Error;
use std::thread;
use std::time::Duration;

use tictactoe_core::advisor::{HeuristicAdvisor, recommend_move};
use tictactoe_core::board::Mark;
use tictactoe_core::game_state::{Status, new_game};
use tictactoe_core::random::StandardRandomGenerator;
use tictactoe_core::session::{GameSession, Mode};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Two advisors playing each other on a bare game state
    let mut x = HeuristicAdvisor::with_thread_rng();
    let mut o = HeuristicAdvisor::with_thread_rng();
    let mut state = new_game();
    while let Some(index) = match state.current_player() {
        Mark::X => recommend_move(&mut x, &state),
        Mark::O => recommend_move(&mut o, &state),
    } {
        println!("{} takes {}", state.current_player(), index);
        state.apply_move(index)?;
    }
    println!("{}\n", state.board());
    print_status(state.status());

    // A session against the computer, where the "human" always takes the first free cell
    let mut session: GameSession<StandardRandomGenerator> = GameSession::builder()
        .with_mode(Mode::VsComputer { computer: Mark::X })
        .with_computer_delay(Duration::from_millis(20))
        .build();
    for _ in 0..3 {
        while !session.state().is_over() {
            if session.is_computer_turn() {
                thread::sleep(session.computer_delay());
                if let Some(result) = session.play_computer_turn() {
                    result?;
                }
            } else if let Some(&index) = session.state().empty_cells().first() {
                session.play(index)?;
            }
        }
        println!("{}\n", session.state().board());
        print_status(session.status());
        session.restart();
    }

    let scores = session.scoreboard();
    info!(
        x_wins = scores.wins(Mark::X),
        o_wins = scores.wins(Mark::O),
        draws = scores.draws(),
        "session finished"
    );

    Ok(())
}

fn print_status(status: Status) {
    match status {
        Status::Won { winner, line } => println!("{winner} wins on {line:?}"),
        Status::Draw => println!("Draw"),
        Status::InProgress => println!("Still in progress"),
    }
}
