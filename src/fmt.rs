use std::fmt;

use fxhash::FxHashSet;

use crate::{Cell, Maze, Pos, SolveError};

impl Cell {
    fn icon(self) -> char {
        match self {
            Cell::Open => '.',
            Cell::Wall => '#',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.icon().fmt(f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, cell) in self.cells() {
            if pos.1 == 0 && pos.0 != 0 {
                "\n".fmt(f)?;
            }
            cell.fmt(f)?;
        }
        Ok(())
    }
}

impl Maze {
    /// Render the maze with every cell on `path` marked `!`.
    pub fn render_path(&self, path: &[Pos]) -> String {
        let on_path = path.iter().copied().collect::<FxHashSet<_>>();
        let mut out = String::new();
        for (pos, cell) in self.cells() {
            if pos.1 == 0 && pos.0 != 0 {
                out.push('\n');
            }
            out.push(if on_path.contains(&pos) { '!' } else { cell.icon() });
        }
        out
    }
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::NoWalls => "no wall to remove".fmt(f),
            SolveError::Unsolvable => "no single removal opens a path".fmt(f),
        }
    }
}

impl std::error::Error for SolveError {}

#[cfg(test)]
mod tests {
    use crate::{Maze, Pos, SolveError};

    #[test]
    fn display_round_trips() {
        let m = ".##.\n...#\n##..\n###.".parse::<Maze>().unwrap();
        assert_eq!(m.to_string().parse::<Maze>().unwrap(), m);
    }

    #[test]
    fn render_path_marks_cells() {
        let m = "..#\n...".parse::<Maze>().unwrap();
        let path = [Pos(0, 0), Pos(1, 0), Pos(1, 1), Pos(1, 2)];
        assert_eq!(m.render_path(&path), "!.#\n!!!");
    }

    #[test]
    fn render_empty_path_is_plain_display() {
        let m = ".#\n#.".parse::<Maze>().unwrap();
        assert_eq!(m.render_path(&[]), m.to_string());
    }

    #[test]
    fn error_messages() {
        assert_eq!(SolveError::NoWalls.to_string(), "no wall to remove");
        assert_eq!(
            SolveError::Unsolvable.to_string(),
            "no single removal opens a path"
        );
    }
}
