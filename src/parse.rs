use std::str::FromStr;

use anyhow::{bail, ensure, Context, Result};

use crate::{Cell, Maze};

impl FromStr for Maze {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().map(str::trim).filter(|line| !line.is_empty());

        let first = lines.next().context("Empty map")?;
        let width = first.chars().count();

        let mut grid = Vec::new();
        let mut parse_line = |line: &str| -> Result<()> {
            for ch in line.chars() {
                let cell = match ch {
                    '.' | '0' => Cell::Open,
                    '#' | '1' => Cell::Wall,
                    _ => bail!("Invalid cell: {ch:?}"),
                };
                grid.push(cell);
            }
            Ok(())
        };

        parse_line(first)?;
        let mut height = 1usize;
        for line in lines {
            ensure!(
                line.chars().count() == width,
                "Width mismatch at line {height}, expecting width {width}"
            );
            parse_line(line)?;
            height += 1;
        }

        Maze::new(height, width, grid)
    }
}

impl Maze {
    /// Build a maze from a row-major 0/1 matrix: 0 = open, 1 = wall.
    pub fn from_matrix<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        ensure!(!rows.is_empty(), "Empty map");
        let width = rows[0].as_ref().len();

        let mut grid = Vec::with_capacity(rows.len() * width);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            ensure!(
                row.len() == width,
                "Width mismatch at row {i}, expecting width {width}"
            );
            for &value in row {
                let cell = match value {
                    0 => Cell::Open,
                    1 => Cell::Wall,
                    _ => bail!("Invalid cell value: {value}"),
                };
                grid.push(cell);
            }
        }

        Maze::new(rows.len(), width, grid)
    }

    fn new(height: usize, width: usize, grid: Vec<Cell>) -> Result<Self> {
        ensure!(width > 0, "Empty map");
        let height = u16::try_from(height).context("Map too tall")?;
        let width = u16::try_from(width).context("Map too wide")?;
        Ok(Maze {
            height,
            width,
            grid: grid.into(),
        })
    }
}
