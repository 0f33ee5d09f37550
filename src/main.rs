mod report;
mod session;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rig::consts::DEFAULT_POSITION;
use rig::definition::{self, LoadError};
use rig::engine::Engine;
use rig::figure::Figure;
use rig::geom::Point;
use rig::render::DrawCmd;

use crate::report::Report;
use crate::session::SessionError;

#[derive(Debug, thiserror::Error)]
enum PivotError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("failed to open session input {path}: {source}")]
    Input { path: String, source: io::Error },
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("failed to render report: {0}")]
    Report(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "pivot", about = "Pose, drag and record articulated stick figures")]
struct Cli {
    #[arg(long, env = "PIVOT_FIGURE", default_value = "figures/man.yaml")]
    figure: PathBuf,

    #[arg(long, env = "PIVOT_ORIGIN_X", default_value_t = DEFAULT_POSITION.x)]
    origin_x: f64,

    #[arg(long, env = "PIVOT_ORIGIN_Y", default_value_t = DEFAULT_POSITION.y)]
    origin_y: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the figure, run one tick and print its report.
    Inspect,
    /// Replay a JSON-lines input session and print the resulting report.
    Replay {
        #[arg(long, default_value = "-", help = "Session file path, or - for stdin")]
        input: String,
    },
}

fn main() -> Result<(), PivotError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let cli = Cli::parse();

    let definition = definition::load(&cli.figure)?;
    let origin = Point::new(cli.origin_x, cli.origin_y);
    let mut engine = Engine::new(Figure::from_definition(&definition, origin)?);

    let cmds = match cli.command {
        Command::Inspect => engine.tick(&[], origin),
        Command::Replay { input } => run_replay(&mut engine, &input)?,
    };
    print_json(&Report::new(engine.figure(), &cmds))
}

fn run_replay(engine: &mut Engine, input: &str) -> Result<Vec<DrawCmd>, PivotError> {
    let reader: Box<dyn BufRead> = if input == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(input).map_err(|source| PivotError::Input { path: input.to_owned(), source })?;
        Box::new(BufReader::new(file))
    };

    let steps = session::read_steps(reader)?;
    let summary = session::replay(engine, &steps);
    tracing::info!(ticks = summary.ticks, captures = summary.captures, "session replayed");
    Ok(summary.last_draw)
}

fn print_json(report: &Report) -> Result<(), PivotError> {
    let rendered = serde_json::to_string_pretty(report)?;
    println!("{rendered}");
    Ok(())
}
