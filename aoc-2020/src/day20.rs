use std::collections::HashSet;

use itertools::Itertools;
use miette::{miette, IntoDiagnostic, Result};

type Image = Vec<Vec<bool>>;

const SEA_MONSTER: [&str; 3] = [
    "                  # ",
    "#    ##    ##    ###",
    " #  #  #  #  #  #   ",
];

#[derive(Debug, Clone)]
struct Tile {
    id: u64,
    image: Image,
}

fn parse_input(input: &str) -> Result<Vec<Tile>> {
    input
        .split("\n\n")
        .map(|block| {
            let mut lines = block.lines();
            let header = lines.next().ok_or_else(|| miette!("Empty tile block"))?;
            let id = header
                .trim()
                .strip_prefix("Tile ")
                .and_then(|rest| rest.strip_suffix(':'))
                .ok_or_else(|| miette!("Bad tile header {header:?}"))?
                .parse::<u64>()
                .into_diagnostic()?;
            let image = lines
                .map(|line| line.trim().chars().map(|c| c == '#').collect::<Vec<_>>())
                .collect::<Vec<_>>();
            if image.is_empty() || image.iter().any(|row| row.len() != image.len()) {
                return Err(miette!("Tile {id} is not square"));
            }
            Ok(Tile { id, image })
        })
        .collect()
}

/// Quarter turn clockwise.
fn rotate(image: &Image) -> Image {
    let n = image.len();
    (0..n)
        .map(|i| (0..n).map(|j| image[n - 1 - j][i]).collect())
        .collect()
}

/// Mirror left to right.
fn flip(image: &Image) -> Image {
    image
        .iter()
        .map(|row| row.iter().rev().copied().collect())
        .collect()
}

/// All eight rotations and reflections.
fn orientations(image: &Image) -> Vec<Image> {
    let mut all = Vec::with_capacity(8);
    for start in [image.clone(), flip(image)] {
        let mut current = start;
        for _ in 0..4 {
            let next = rotate(&current);
            all.push(current);
            current = next;
        }
    }
    all
}

fn left_edge(image: &Image) -> Vec<bool> {
    image.iter().map(|row| row[0]).collect()
}

fn right_edge(image: &Image) -> Vec<bool> {
    image.iter().map(|row| row[row.len() - 1]).collect()
}

fn edges(image: &Image) -> [Vec<bool>; 4] {
    [
        image[0].clone(),
        right_edge(image),
        image[image.len() - 1].clone(),
        left_edge(image),
    ]
}

/// Edges of `tile` no other tile shares in any orientation. Corners have two.
fn unmatched_edges(tiles: &[Tile], index: usize) -> usize {
    let others = tiles
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .flat_map(|(_, t)| edges(&t.image))
        .flat_map(|edge| {
            let reversed = edge.iter().rev().copied().collect::<Vec<_>>();
            [edge, reversed]
        })
        .collect::<HashSet<_>>();
    edges(&tiles[index].image)
        .iter()
        .filter(|edge| !others.contains(*edge))
        .count()
}

/// Tiles laid out row-major as (tile index, oriented image).
struct Assembly {
    side: usize,
    placed: Vec<(usize, Image)>,
}

struct Solver<'a> {
    side: usize,
    oriented: &'a [Vec<Image>],
    used: Vec<bool>,
    placement: Vec<(usize, usize)>,
}

impl Solver<'_> {
    fn fits(&self, position: usize, candidate: &Image) -> bool {
        let (row, col) = (position / self.side, position % self.side);
        if col > 0 {
            let (tile, o) = self.placement[position - 1];
            if right_edge(&self.oriented[tile][o]) != left_edge(candidate) {
                return false;
            }
        }
        if row > 0 {
            let (tile, o) = self.placement[position - self.side];
            if self.oriented[tile][o].last() != candidate.first() {
                return false;
            }
        }
        true
    }

    fn place(&mut self, position: usize, order: &[usize]) -> bool {
        if position == self.side * self.side {
            return true;
        }
        for &tile in order {
            if self.used[tile] {
                continue;
            }
            for o in 0..self.oriented[tile].len() {
                if !self.fits(position, &self.oriented[tile][o]) {
                    continue;
                }
                self.used[tile] = true;
                self.placement.push((tile, o));
                if self.place(position + 1, order) {
                    return true;
                }
                self.placement.pop();
                self.used[tile] = false;
            }
        }
        false
    }
}

/// Backtracking layout, trying likely corners first for the top-left slot.
fn assemble(tiles: &[Tile]) -> Result<Assembly> {
    let side = (1..=tiles.len())
        .find(|s| s * s >= tiles.len())
        .filter(|s| s * s == tiles.len())
        .ok_or_else(|| miette!("{} tiles do not form a square", tiles.len()))?;

    let oriented = tiles.iter().map(|t| orientations(&t.image)).collect::<Vec<_>>();
    let order = (0..tiles.len())
        .sorted_by_key(|&i| std::cmp::Reverse(unmatched_edges(tiles, i)))
        .collect::<Vec<_>>();

    let mut solver = Solver {
        side,
        oriented: &oriented,
        used: vec![false; tiles.len()],
        placement: Vec::with_capacity(tiles.len()),
    };
    if !solver.place(0, &order) {
        return Err(miette!("Tiles cannot be assembled into an image"));
    }
    let placed = solver
        .placement
        .iter()
        .map(|&(tile, o)| (tile, oriented[tile][o].clone()))
        .collect();
    Ok(Assembly { side, placed })
}

impl Assembly {
    fn corner_tiles(&self) -> [usize; 4] {
        let last = self.side * self.side - 1;
        [0, self.side - 1, last + 1 - self.side, last].map(|p| self.placed[p].0)
    }

    /// The stitched picture with every tile's border stripped.
    fn image(&self) -> Image {
        let mut image = Vec::new();
        for tile_row in self.placed.chunks(self.side) {
            let inner = tile_row[0].1.len() - 2;
            for r in 1..=inner {
                image.push(
                    tile_row
                        .iter()
                        .flat_map(|(_, img)| img[r][1..=inner].iter().copied())
                        .collect(),
                );
            }
        }
        image
    }
}

fn monster_offsets() -> Vec<(usize, usize)> {
    SEA_MONSTER
        .iter()
        .enumerate()
        .flat_map(|(r, line)| {
            line.chars()
                .enumerate()
                .filter(|&(_, c)| c == '#')
                .map(move |(c, _)| (r, c))
        })
        .collect()
}

/// Cells belonging to any sea monster found in this orientation.
fn monster_cells(image: &Image, monster: &[(usize, usize)]) -> HashSet<(usize, usize)> {
    let height = monster.iter().map(|&(r, _)| r).max().unwrap_or(0) + 1;
    let width = monster.iter().map(|&(_, c)| c).max().unwrap_or(0) + 1;
    let mut cells = HashSet::new();
    let n = image.len();
    for row in 0..n.saturating_sub(height - 1) {
        for col in 0..n.saturating_sub(width - 1) {
            if monster.iter().all(|&(r, c)| image[row + r][col + c]) {
                cells.extend(monster.iter().map(|&(r, c)| (row + r, col + c)));
            }
        }
    }
    cells
}

/// Product of the four corner tile ids.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let tiles = parse_input(input)?;
    let assembly = assemble(&tiles)?;
    let product: u64 = assembly.corner_tiles().iter().map(|&i| tiles[i].id).product();
    Ok(product.to_string())
}

/// Water roughness: `#` cells that are not part of a sea monster.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let tiles = parse_input(input)?;
    let image = assemble(&tiles)?.image();
    let monster = monster_offsets();
    let total = image.iter().flatten().filter(|&&c| c).count();

    let covered = orientations(&image)
        .iter()
        .map(|oriented| monster_cells(oriented, &monster).len())
        .find(|&cells| cells > 0)
        .ok_or_else(|| miette!("No sea monsters in any orientation"))?;
    tracing::debug!(total, covered);
    Ok((total - covered).to_string())
}
