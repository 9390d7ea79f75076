//! Headless simulation harness.
//!
//! Runs a seeded session for a fixed number of ticks, optionally feeding a
//! comma-separated action tape (one action every ten ticks), and prints the
//! event trace plus a final JSON snapshot. Useful for eyeballing driver
//! behavior and for driving the core from scripts without a renderer.
//!
//! ```text
//! blockfall-sim --seed 7 --ticks 2000 --tape left,left,cw,drop
//! ```

use anyhow::{anyhow, Result};

use blockfall::core::{EventSink, GameSession};
use blockfall::types::{GameAction, TICK_SECONDS};

/// Ticks between two tape actions
const TAPE_STRIDE: u64 = 10;

#[derive(Debug)]
struct SimConfig {
    seed: u32,
    ticks: u64,
    tape: Vec<GameAction>,
}

/// Sink that narrates gameplay facts to stdout
#[derive(Debug, Default)]
struct TraceSink {
    locks: u32,
    cleared: u32,
}

impl EventSink for TraceSink {
    fn on_lines_cleared(&mut self, count: u32) {
        self.cleared += count;
        println!("event: cleared {} line(s), total {}", count, self.cleared);
    }

    fn on_piece_locked(&mut self) {
        self.locks += 1;
    }

    fn on_game_over(&mut self) {
        println!("event: game over after {} locked pieces", self.locks);
    }
}

fn parse_args(args: &[String]) -> Result<SimConfig> {
    let mut config = SimConfig {
        seed: 1,
        ticks: 3600,
        tape: Vec::new(),
    };

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--ticks" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --ticks"))?;
                config.ticks = v
                    .parse::<u64>()
                    .map_err(|_| anyhow!("invalid --ticks value: {}", v))?;
            }
            "--tape" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --tape"))?;
                for token in v.split(',').filter(|t| !t.is_empty()) {
                    let action = GameAction::from_str(token)
                        .ok_or_else(|| anyhow!("unknown tape action: {}", token))?;
                    config.tape.push(action);
                }
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;

    let mut session = GameSession::new(config.seed);
    let mut sink = TraceSink::default();
    session.reset();

    let mut tape = config.tape.iter();
    for tick in 0..config.ticks {
        session.advance_clock(TICK_SECONDS);
        session.tick(&mut sink);

        if session.running() && tick % TAPE_STRIDE == 0 {
            if let Some(&action) = tape.next() {
                session.apply_action(action, &mut sink);
            }
        }

        if session.game_over() {
            break;
        }
    }

    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    Ok(())
}
