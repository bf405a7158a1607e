use miette::{miette, Result};
use pathfinding::prelude::dijkstra;

const HALLWAY: usize = 11;
const ENTRANCES: [usize; 4] = [2, 4, 6, 8];
const ENERGY: [u32; 4] = [1, 10, 100, 1000];
const EMPTY: u8 = 0;

/// Rows folded into the diagram for the full burrow.
const UNFOLDED: [[u8; 4]; 2] = [[4, 3, 2, 1], [4, 2, 1, 3]];

/// Hallway cells and `D`-deep side rooms, top slot first. Amphipods are
/// 1..=4 for A..D, and room `r` belongs to amphipod `r + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Burrow<const D: usize> {
    hallway: [u8; HALLWAY],
    rooms: [[u8; D]; 4],
}

impl<const D: usize> Burrow<D> {
    fn new(hallway: [u8; HALLWAY], rows: &[[u8; 4]]) -> Result<Self> {
        if rows.len() != D {
            return Err(miette!("Expected rooms {D} deep, found {}", rows.len()));
        }
        Ok(Burrow {
            hallway,
            rooms: std::array::from_fn(|r| std::array::from_fn(|d| rows[d][r])),
        })
    }

    fn is_organized(&self) -> bool {
        self.rooms
            .iter()
            .enumerate()
            .all(|(r, room)| room.iter().all(|&a| usize::from(a) == r + 1))
    }

    /// Hallway cells strictly after `from` up to and including `to` are empty.
    fn path_clear(&self, from: usize, to: usize) -> bool {
        let (lo, hi) = if from < to { (from + 1, to) } else { (to, from - 1) };
        self.hallway[lo..=hi].iter().all(|&c| c == EMPTY)
    }

    fn moves(&self) -> Vec<(Self, u32)> {
        let mut next = Vec::new();

        // into the destination room, as deep as possible
        for (h, &a) in self.hallway.iter().enumerate() {
            if a == EMPTY {
                continue;
            }
            let r = usize::from(a) - 1;
            let room = &self.rooms[r];
            if room.iter().any(|&o| o != EMPTY && o != a) || !self.path_clear(h, ENTRANCES[r]) {
                continue;
            }
            let Some(slot) = room.iter().rposition(|&o| o == EMPTY) else {
                continue;
            };
            let mut burrow = self.clone();
            burrow.hallway[h] = EMPTY;
            burrow.rooms[r][slot] = a;
            let steps = h.abs_diff(ENTRANCES[r]) + slot + 1;
            next.push((burrow, steps as u32 * ENERGY[r]));
        }

        // out of a room that still holds strangers
        for (r, room) in self.rooms.iter().enumerate() {
            let Some(slot) = room.iter().position(|&o| o != EMPTY) else {
                continue;
            };
            if room[slot..].iter().all(|&o| usize::from(o) == r + 1) {
                continue;
            }
            let a = room[slot];
            let energy = ENERGY[usize::from(a) - 1];
            for h in (0..HALLWAY).filter(|h| !ENTRANCES.contains(h)) {
                if !self.path_clear(ENTRANCES[r], h) {
                    continue;
                }
                let mut burrow = self.clone();
                burrow.rooms[r][slot] = EMPTY;
                burrow.hallway[h] = a;
                let steps = slot + 1 + h.abs_diff(ENTRANCES[r]);
                next.push((burrow, steps as u32 * energy));
            }
        }
        next
    }

    fn least_energy(&self) -> Result<u32> {
        dijkstra(self, Self::moves, Self::is_organized)
            .map(|(path, energy)| {
                tracing::debug!(moves = path.len() - 1, energy);
                energy
            })
            .ok_or_else(|| miette!("The amphipods cannot be organized"))
    }
}

fn amphipod(c: char) -> Result<u8> {
    match c {
        '.' => Ok(EMPTY),
        'A'..='D' => Ok(c as u8 - b'A' + 1),
        _ => Err(miette!("Unexpected cell {c:?}")),
    }
}

/// The hallway and each row of rooms, top row first.
fn parse_input(input: &str) -> Result<([u8; HALLWAY], Vec<[u8; 4]>)> {
    let lines = input.lines().collect::<Vec<_>>();
    let hallway_line = lines
        .get(1)
        .ok_or_else(|| miette!("Burrow diagram is missing its hallway"))?;
    let cells = hallway_line
        .trim()
        .trim_matches('#')
        .chars()
        .map(amphipod)
        .collect::<Result<Vec<_>>>()?;
    let hallway: [u8; HALLWAY] = cells
        .try_into()
        .map_err(|_| miette!("Hallway must be {HALLWAY} cells wide"))?;

    let rows = lines[2..]
        .iter()
        .take_while(|line| line.chars().any(|c| c.is_ascii_alphabetic()))
        .map(|line| {
            let chars = line.chars().collect::<Vec<_>>();
            let mut row = [EMPTY; 4];
            for (r, &e) in ENTRANCES.iter().enumerate() {
                let c = chars
                    .get(e + 1)
                    .ok_or_else(|| miette!("Room row too short: {line:?}"))?;
                row[r] = amphipod(*c)?;
            }
            Ok(row)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((hallway, rows))
}

/// Least energy to organize the amphipods as drawn.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let (hallway, rows) = parse_input(input)?;
    Ok(Burrow::<2>::new(hallway, &rows)?.least_energy()?.to_string())
}

/// Least energy once the two folded rows are inserted.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let (hallway, mut rows) = parse_input(input)?;
    if rows.is_empty() {
        return Err(miette!("No room rows in diagram"));
    }
    rows.splice(1..1, UNFOLDED);
    Ok(Burrow::<4>::new(hallway, &rows)?.least_energy()?.to_string())
}
