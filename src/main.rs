//! Gift Packing Checker
//!
//! Reads a gift catalogue and a list of regions from a text file, runs one
//! backtracking search per region, and reports how many regions can hold
//! every gift required of them.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use giftpack::pieces::Gift;
use giftpack::{parser, solver, Error};

/// Counts the regions that can fit all of their required gifts.
#[derive(Parser)]
#[command(name = "giftpack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the gifts-and-regions input file.
    input: PathBuf,

    /// Print a verdict line for every region.
    #[arg(long)]
    regions: bool,

    /// Print the parsed gift catalogue with all orientations.
    #[arg(long)]
    gifts: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let input = fs::read_to_string(&cli.input)?;
    let (gifts, regions) = parser::parse_input(&input)?;

    if cli.gifts {
        print!("{}", format_catalogue(&gifts));
    }

    let verdicts = solver::feasible_regions(&regions, &gifts)?;

    if cli.regions {
        for (region, &feasible) in regions.iter().zip(&verdicts) {
            let verdict = if feasible { "feasible" } else { "infeasible" };
            println!(
                "region {} ({}x{}): {}",
                region.id, region.width, region.height, verdict
            );
        }
    }

    let feasible_count = verdicts.iter().filter(|&&feasible| feasible).count();
    println!("{feasible_count}");
    Ok(())
}

/// Renders every gift with each of its unique orientations.
fn format_catalogue(gifts: &[Gift]) -> String {
    let mut output = String::new();
    for gift in gifts {
        output.push_str(&format!(
            "gift {} (area {}, {} orientations):\n",
            gift.id,
            gift.area,
            gift.shapes.len()
        ));
        for (index, shape) in gift.shapes.iter().enumerate() {
            output.push_str(&format!("- {index}:\n"));
            output.push_str(&shape.to_string());
        }
        output.push('\n');
    }
    output
}
