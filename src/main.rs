use std::time::Instant;

use anyhow::{Context, Result, bail};
use rookery_core::{Position, STARTING_FEN, divide, perft};
use tracing::info;

const USAGE: &str = "usage: rookery <perft|divide> <depth> [fen]";

#[derive(Debug)]
enum Command {
    Perft { depth: usize, fen: String },
    Divide { depth: usize, fen: String },
}

impl Command {
    fn parse(args: &[String]) -> Result<Command> {
        let [name, depth, rest @ ..] = args else {
            bail!(USAGE);
        };
        let depth = depth
            .parse::<usize>()
            .with_context(|| format!("invalid depth \"{depth}\""))?;
        let fen = if rest.is_empty() {
            STARTING_FEN.to_string()
        } else {
            rest.join(" ")
        };
        match name.as_str() {
            "perft" => Ok(Command::Perft { depth, fen }),
            "divide" => Ok(Command::Divide { depth, fen }),
            other => bail!("unknown command \"{other}\"\n{USAGE}"),
        }
    }
}

fn load(fen: &str) -> Result<Position> {
    Position::from_fen(fen).with_context(|| format!("cannot load \"{fen}\""))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;
    info!(?command, "rookery starting");

    let start = Instant::now();
    let nodes = match command {
        Command::Perft { depth, fen } => perft(&mut load(&fen)?, depth),
        Command::Divide { depth, fen } => {
            let results = divide(&mut load(&fen)?, depth);
            for (mv, count) in &results {
                println!("{mv}: {count}");
            }
            results.iter().map(|(_, count)| count).sum()
        }
    };
    let elapsed = start.elapsed();
    println!("\nnodes: {nodes}");
    info!(nodes, elapsed_ms = elapsed.as_millis() as u64, "done");
    Ok(())
}
