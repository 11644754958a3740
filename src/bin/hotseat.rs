//! Terminal hot-seat chess.
//!
//! Two players share one terminal. The active clock is charged one tick per
//! whole second of wall-clock time between commands.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use hotseat_chess::display::{clock_line, status_line};
use hotseat_chess::{Coord, GameSession, Phase, Rejection, Tick, TimeControl};

/// Play chess against someone sitting next to you.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Minutes on each clock.
    #[arg(long, default_value_t = TimeControl::default().total_minutes)]
    minutes: u32,

    /// Seconds added after each move.
    #[arg(long, default_value_t = TimeControl::default().increment_seconds)]
    increment: u32,
}

enum Command {
    Move(Coord, Coord),
    Undo,
    Pause,
    Resign,
    Reset,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    match line {
        "undo" => return Ok(Command::Undo),
        "pause" | "resume" => return Ok(Command::Pause),
        "resign" => return Ok(Command::Resign),
        "reset" => return Ok(Command::Reset),
        "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let squares: Vec<&str> = if line.contains(char::is_whitespace) {
        line.split_whitespace().collect()
    } else if line.len() == 4 && line.is_ascii() {
        vec![&line[..2], &line[2..]]
    } else {
        return Err(format!("unrecognised command {line:?}"));
    };

    let [from, to] = squares.as_slice() else {
        return Err(format!("expected two squares, got {line:?}"));
    };
    let from = from.parse::<Coord>().map_err(|e| e.to_string())?;
    let to = to.parse::<Coord>().map_err(|e| e.to_string())?;
    Ok(Command::Move(from, to))
}

/// Converts elapsed wall-clock time into whole-second ticks.
struct Ticker {
    since: Instant,
}

impl Ticker {
    fn new() -> Self {
        Self {
            since: Instant::now(),
        }
    }

    /// Deliver the whole seconds elapsed since the last call to the running
    /// clock. Leftover fractions carry over.
    fn catch_up(&mut self, game: &mut GameSession) {
        let elapsed = self.since.elapsed().as_secs();
        self.since += Duration::from_secs(elapsed);

        if game.phase() != Phase::Running {
            return;
        }
        let Some(active) = game.clock().active() else {
            return;
        };
        for _ in 0..elapsed {
            match game.tick(active) {
                Ok(Tick::Counting { .. }) => {}
                Ok(Tick::Flagged(outcome)) => {
                    println!("Time! {outcome}");
                    return;
                }
                Err(_) => return,
            }
        }
    }
}

fn render(game: &GameSession) {
    println!();
    for (row, line) in game.board().to_rows().iter().enumerate() {
        println!("{} {}", 8 - row, line);
    }
    println!("  abcdefgh");
    println!("{}", clock_line(game));
    println!("{}", status_line(game));
}

fn start(game: &mut GameSession, time_control: TimeControl) -> bool {
    match game.configure(time_control) {
        Ok(()) => true,
        Err(rejection) => {
            eprintln!("{rejection}");
            false
        }
    }
}

fn report(result: Result<(), Rejection>) {
    if let Err(rejection) = result {
        println!("{rejection}");
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let time_control = TimeControl::new(args.minutes, args.increment);

    let mut game = GameSession::new();
    if !start(&mut game, time_control) {
        return Ok(());
    }
    let mut ticker = Ticker::new();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        render(&game);
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        ticker.catch_up(&mut game);

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match command {
            Command::Move(from, to) => report(game.attempt_move(from, to).map(|record| {
                if let Some(outcome) = record.outcome {
                    println!("{outcome}");
                }
            })),
            Command::Undo => report(game.undo()),
            Command::Pause => report(game.pause_or_resume().map(|_| ())),
            Command::Resign => report(game.resign().map(|outcome| println!("{outcome}"))),
            Command::Reset => {
                game.reset();
                if !start(&mut game, time_control) {
                    warn!(%time_control, "could not restart");
                    break;
                }
                ticker = Ticker::new();
            }
            Command::Quit => break,
        }
    }
    Ok(())
}
