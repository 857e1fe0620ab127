//! Gorillas headless shell
//!
//! Reads `angle velocity` lines from stdin and drives the match core. Also
//! understands `show`, `reset` and `quit`.
//!
//! Run with `--help` for the flags.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use clap::Parser;
use gorillas::Settings;
use gorillas::audio::{AudioCues, LogSoundPlayer};
use gorillas::scene::{prompt, wind_label};
use gorillas::sim::{GamePhase, MatchState, ReplayFrame, ThrowOutcome, ThrowRequest, Verdict};

/// Rooftop artillery duel for two players at one terminal.
#[derive(Debug, Parser)]
#[command(name = "gorillas", version)]
struct Options {
    /// Fixed RNG seed, overriding the settings file.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
    /// Print the snapshot as JSON after every throw.
    #[arg(long)]
    json: bool,
    /// Replay each trajectory point by point.
    #[arg(long)]
    animate: bool,
    /// Silence sound cues.
    #[arg(long)]
    mute: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let opts = Options::parse();
    let settings = Settings::load()?;
    let seed = opts
        .seed
        .or(settings.seed)
        .unwrap_or_else(rand::random::<u64>);
    let delay = Duration::from_millis(settings.animation_delay_ms);

    let mut cues = AudioCues::new(LogSoundPlayer);
    cues.set_master_volume(settings.master_volume);
    cues.set_sfx_volume(settings.sfx_volume);
    cues.set_muted(opts.mute);

    log::info!("Gorillas (headless) starting with seed {}", seed);
    let mut state = MatchState::new(settings, seed)?;
    cues.handle(&state.drain_events());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print_status(&state);

    loop {
        if state.phase() == GamePhase::AwaitingInput {
            println!("{}", prompt(state.active_player()));
        }
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => continue,
            ["quit" | "q" | "exit"] => break,
            ["show"] => {
                print_status(&state);
                continue;
            }
            ["reset"] => {
                state.reset_match();
                cues.handle(&state.drain_events());
                print_status(&state);
                continue;
            }
            [angle, velocity] => {
                let request = match ThrowRequest::parse(angle, velocity) {
                    Ok(request) => request,
                    Err(e) => {
                        println!("Rejected: {}", e);
                        continue;
                    }
                };
                match state.throw(request) {
                    Ok(outcome) => {
                        if opts.animate {
                            animate(&state, delay);
                        }
                        cues.handle(&state.drain_events());
                        report(&state, &outcome);
                        if opts.json {
                            println!("{}", serde_json::to_string(&state.snapshot())?);
                        }
                    }
                    Err(e) => println!("Rejected: {}", e),
                }
            }
            _ => println!("Enter an angle and a velocity, or show/reset/quit"),
        }
    }

    log::info!("Goodbye");
    Ok(())
}

fn print_status(state: &MatchState) {
    let (s1, s2) = state.scores();
    println!(
        "Round {} | Player 1: {}  Player 2: {} | {}",
        state.round(),
        s1,
        s2,
        wind_label(state.wind())
    );
    let heights: Vec<String> = state
        .buildings()
        .iter()
        .map(|b| b.height.to_string())
        .collect();
    println!("Skyline: {}", heights.join(" "));
}

fn animate(state: &MatchState, delay: Duration) {
    for frame in state.replay_last_throw() {
        match frame {
            ReplayFrame::Point(p) => println!("  ({}, {})", p.x, p.y),
            ReplayFrame::Impact(p) => println!("  * impact at ({}, {})", p.x, p.y),
            ReplayFrame::Miss => println!("  ~ out of the arena"),
        }
        thread::sleep(delay);
    }
}

fn report(state: &MatchState, outcome: &ThrowOutcome) {
    match outcome.verdict {
        Verdict::None => println!("Missed."),
        Verdict::Building => println!("Hit a building."),
        Verdict::Player1 | Verdict::Player2 => {
            if let Some(scorer) = outcome.scorer {
                let (s1, s2) = state.scores();
                println!(
                    "{} wins this round! Score: Player 1: {} - Player 2: {}",
                    scorer, s1, s2
                );
            }
        }
    }

    if let Some(winner) = outcome.winner {
        println!("{} wins the game! Type 'reset' to play again or 'quit'.", winner);
    } else if outcome.scorer.is_some() {
        print_status(state);
    }
}
