//! A* shortest-path search over a [`Maze`].

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use indexmap::map::Entry;

use crate::{Cell, Maze, Pos};

type IndexMap<K, V> = indexmap::IndexMap<K, V, fxhash::FxBuildHasher>;

/// Per-cell bookkeeping, owned by a single search run.
struct Node {
    g: u32,
    parent: Option<Pos>,
    closed: bool,
}

/// Heap entry ordered by full cost `g + h`.
#[derive(Clone, Copy, PartialEq, Eq)]
struct HeapEntry {
    f: u32,
    pos: Pos,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (a max-heap) pops the smallest full cost
        // first; ties fall back to position to keep the order total.
        other.f.cmp(&self.f).then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Estimated remaining cost from `pos` to the exit corner.
///
/// Measured to `(height, width)`, one past the exit: the offset is the
/// same for every cell, so full-cost ordering and path optimality are
/// unchanged.
fn estimate(maze: &Maze, Pos(row, col): Pos) -> u32 {
    u32::from(maze.height() - row) + u32::from(maze.width() - col)
}

/// Shortest path from the top-left to the bottom-right corner, walls
/// impassable and every step unit cost.
///
/// Returns the full path, both endpoints included, or `None` when the
/// exit cannot be reached. A walled entrance or exit is unreachable.
pub fn shortest_path(maze: &Maze) -> Option<Vec<Pos>> {
    let start = Pos(0, 0);
    let goal = Pos(maze.height() - 1, maze.width() - 1);
    if maze[start] != Cell::Open || maze[goal] != Cell::Open {
        return None;
    }

    let mut nodes: IndexMap<Pos, Node> = IndexMap::default();
    nodes.insert(
        start,
        Node {
            g: 0,
            parent: None,
            closed: false,
        },
    );
    let mut open = BinaryHeap::new();
    open.push(HeapEntry {
        f: estimate(maze, start),
        pos: start,
    });

    let found = 'search: loop {
        let Some(HeapEntry { pos, .. }) = open.pop() else {
            break 'search false;
        };

        #[cfg(feature = "coz")]
        coz::progress!("expand");

        let node = &mut nodes[&pos];
        // A closed node here means a superseded duplicate entry.
        if node.closed {
            continue;
        }
        node.closed = true;

        if pos == goal {
            break 'search true;
        }

        let g = node.g;
        for next in maze.neighbors(pos) {
            if maze[next] != Cell::Open {
                continue;
            }
            let tentative = g + 1;
            match nodes.entry(next) {
                Entry::Vacant(entry) => {
                    entry.insert(Node {
                        g: tentative,
                        parent: Some(pos),
                        closed: false,
                    });
                    open.push(HeapEntry {
                        f: tentative + estimate(maze, next),
                        pos: next,
                    });
                }
                Entry::Occupied(mut entry) => {
                    let node = entry.get_mut();
                    if !node.closed && tentative < node.g {
                        node.g = tentative;
                        node.parent = Some(pos);
                        // The stale entry stays queued and is skipped on pop.
                        open.push(HeapEntry {
                            f: tentative + estimate(maze, next),
                            pos: next,
                        });
                    }
                }
            }
        }
    };

    if !found {
        return None;
    }

    let mut path = std::iter::successors(Some(goal), |&pos| nodes[&pos].parent)
        .collect::<Vec<_>>();
    path.reverse();
    Some(path)
}
