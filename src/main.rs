use anyhow::{Context, Result};
use console::{style, Term};
use indicatif::ProgressBar;

use breach_solver::{solve, Maze};

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .context("Missing map file argument")?;
    let map_data = std::fs::read_to_string(path).context("Failed to read the map")?;
    let maze = map_data
        .parse::<Maze>()
        .context("Failed to parse the map")?;

    let bar = ProgressBar::new(maze.walls().count() as u64);
    let breach = solve::best_breach(&maze, || bar.inc(1))?;
    bar.finish_and_clear();

    let term = Term::stdout();
    term.write_line(&maze.render_path(&breach.path))?;
    term.write_line(&format!(
        "{} removed wall ({}, {}), {} cells",
        style("shortest:").green().bold(),
        breach.removed.0,
        breach.removed.1,
        breach.path_len(),
    ))?;
    Ok(())
}
