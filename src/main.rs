#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # nota
//!
//! A weighted grade calculator for the console. Collects up to 10 weighted
//! evaluations, an attendance flag, and teacher votes, then reports the final
//! grade either interactively or in one shot via `nota calc`.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use bpaf::*;
use nota::{Evaluation, GradeCalculator, report};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Calculate a final grade from command-line arguments
    Calc {
        /// Evaluations as `SCORE/WEIGHT` strings
        evals:  Vec<String>,
        /// Whether minimum attendance was missed
        absent: bool,
        /// Teacher votes as yes/no strings
        votes:  Vec<String>,
        /// Emit JSON instead of a table
        json:   bool,
    },
    /// Menu-driven entry, one step at a time
    Interactive,
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    let calc = {
        let evals = long("eval")
            .short('e')
            .help("An evaluation as SCORE/WEIGHT, eg. 15/50; repeatable")
            .argument::<String>("SCORE/WEIGHT")
            .many();
        let absent = long("absent")
            .help("Minimum attendance was not met")
            .switch();
        let votes = long("vote")
            .help("A teacher vote (yes/no); repeatable")
            .argument::<String>("YES|NO")
            .many();
        let json = long("json").help("Emit the result as JSON").switch();
        construct!(Cmd::Calc {
            evals,
            absent,
            votes,
            json
        })
    }
    .to_options()
    .command("calc")
    .help("Calculate a final grade in one shot");

    let interactive = pure(Cmd::Interactive)
        .to_options()
        .command("interactive")
        .help("Collect evaluations, attendance, and votes from a menu");

    construct!([calc, interactive])
        .fallback(Cmd::Interactive)
        .to_options()
        .descr("Weighted grade calculator")
        .run()
}

/// Parses a yes/no style answer into a boolean vote.
fn parse_vote(answer: &str) -> Result<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" => Ok(true),
        "n" | "no" | "false" => Ok(false),
        other => bail!("Expected yes or no, got `{other}`"),
    }
}

/// Prints a prompt and reads the next line from the given input, returning
/// `None` once the input is exhausted.
fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>, message: &str) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush().context("Could not flush stdout")?;
    match lines.next() {
        Some(line) => Ok(Some(line.context("Could not read from stdin")?)),
        None => Ok(None),
    }
}

/// Runs the menu loop: add evaluations, set attendance, record votes,
/// calculate, quit. Bad input is reported and the menu shown again.
fn interactive() -> Result<()> {
    let calculator = GradeCalculator::new();
    let mut evaluations: Vec<Evaluation> = Vec::new();
    let mut attendance_met = true;
    let mut votes: Vec<bool> = Vec::new();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n=== nota ===");
        println!("1. Add evaluation ({} held)", evaluations.len());
        println!(
            "2. Set attendance (current: {})",
            if attendance_met { "met" } else { "not met" }
        );
        println!("3. Record teacher votes ({} cast)", votes.len());
        println!("4. Calculate final grade");
        println!("5. Quit");

        let Some(choice) = prompt(&mut lines, "Select an option: ")? else {
            break;
        };

        match choice.trim() {
            "1" => {
                // Client-side gate; the calculator enforces its own bound.
                if evaluations.len() >= GradeCalculator::MAX_EVALUATIONS {
                    println!("Error: at most {} evaluations allowed.", GradeCalculator::MAX_EVALUATIONS);
                    continue;
                }
                let Some(score) = prompt(&mut lines, "Score (0-20): ")? else {
                    break;
                };
                let Some(weight) = prompt(&mut lines, "Weight (%): ")? else {
                    break;
                };
                match format!("{}/{}", score.trim(), weight.trim()).parse::<Evaluation>() {
                    Ok(evaluation) => {
                        println!("Added {evaluation}.");
                        evaluations.push(evaluation);
                    }
                    Err(e) => println!("Error: {e:#}"),
                }
            }
            "2" => {
                let Some(answer) = prompt(&mut lines, "Was minimum attendance met? (yes/no): ")?
                else {
                    break;
                };
                match parse_vote(&answer) {
                    Ok(met) => attendance_met = met,
                    Err(e) => println!("Error: {e}"),
                }
            }
            "3" => {
                println!("Enter teacher votes (yes/no), empty line to finish.");
                votes.clear();
                loop {
                    let Some(answer) = prompt(&mut lines, "Vote: ")? else {
                        break;
                    };
                    if answer.trim().is_empty() {
                        break;
                    }
                    match parse_vote(&answer) {
                        Ok(vote) => votes.push(vote),
                        Err(e) => println!("Error: {e}"),
                    }
                }
            }
            "4" => match calculator.calculate(&evaluations, attendance_met, &votes) {
                Ok(result) => println!("\n{}", report::render_table(&result)),
                Err(e) => println!("Error: {e}"),
            },
            "5" => break,
            other => println!("Unknown option `{other}`."),
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    match options() {
        Cmd::Calc {
            evals,
            absent,
            votes,
            json,
        } => {
            let evaluations = evals
                .iter()
                .map(|e| e.parse::<Evaluation>())
                .collect::<Result<Vec<_>>>()?;
            let votes = votes.iter().map(|v| parse_vote(v)).collect::<Result<Vec<_>>>()?;

            let result = GradeCalculator::new().calculate(&evaluations, !absent, &votes)?;

            if json {
                println!("{}", report::render_json(&result)?);
            } else {
                println!("{}", report::render_table(&result));
            }
        }
        Cmd::Interactive => interactive()?,
    }

    Ok(())
}
