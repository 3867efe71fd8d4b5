//! Brute-force single-wall removal driver.

use rayon::prelude::*;

use crate::{search, Cell, Maze, Pos, SolveError};

/// Outcome of the removal search: the wall that was cleared and the
/// shortest path it enables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breach {
    pub removed: Pos,
    pub path: Vec<Pos>,
}

impl Breach {
    /// Number of cells on the path, both endpoints included.
    pub fn path_len(&self) -> usize {
        self.path.len()
    }
}

/// Clear each wall in turn and keep the removal with the shortest
/// resulting path.
///
/// Every trial searches its own copy of the maze, so the input is never
/// observed mutated and trials run in parallel. `on_trial` is invoked
/// once per finished trial. Dead-end trials are discarded; ties between
/// equal path lengths resolve to the smallest removed coordinate, so the
/// result does not depend on scheduling.
pub fn best_breach(maze: &Maze, on_trial: impl Fn() + Sync) -> Result<Breach, SolveError> {
    let candidates = maze.walls().collect::<Vec<_>>();
    if candidates.is_empty() {
        return Err(SolveError::NoWalls);
    }

    candidates
        .into_par_iter()
        .filter_map(|pos| {
            #[cfg(feature = "coz")]
            coz::scope!("trial");

            let mut trial = maze.clone();
            trial[pos] = Cell::Open;
            let path = search::shortest_path(&trial);
            on_trial();
            path.map(|path| Breach { removed: pos, path })
        })
        .min_by_key(|breach| (breach.path.len(), breach.removed))
        .ok_or(SolveError::Unsolvable)
}
