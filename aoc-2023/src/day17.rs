use glam::IVec2;
use miette::{miette, Result};
use pathfinding::prelude::dijkstra;

/// A crucible standing on `position`, about to turn off the axis it
/// arrived along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Crucible {
    position: IVec2,
    vertical: bool,
}

struct City {
    heat_loss: Vec<Vec<u32>>,
    size: IVec2,
}

impl City {
    fn parse(input: &str) -> Result<Self> {
        let heat_loss = input
            .lines()
            .map(|line| {
                line.trim()
                    .chars()
                    .map(|c| c.to_digit(10).ok_or_else(|| miette!("Invalid heat loss {c:?}")))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        let width = heat_loss.first().map_or(0, Vec::len);
        if width == 0 || heat_loss.iter().any(|row| row.len() != width) {
            return Err(miette!("City map must be a non-empty rectangle"));
        }
        let size = IVec2::new(width as i32, heat_loss.len() as i32);
        Ok(Self { heat_loss, size })
    }

    fn loss(&self, p: IVec2) -> Option<u32> {
        if p.cmplt(IVec2::ZERO).any() || p.cmpge(self.size).any() {
            return None;
        }
        Some(self.heat_loss[p.y as usize][p.x as usize])
    }

    /// Every run of `min..=max` blocks at right angles to the way the
    /// crucible came in, with the heat lost along it.
    fn moves(&self, from: &Crucible, min: i32, max: i32) -> Vec<(Crucible, u32)> {
        let turns = if from.vertical {
            [IVec2::X, IVec2::NEG_X]
        } else {
            [IVec2::Y, IVec2::NEG_Y]
        };
        let mut next = Vec::new();
        for dir in turns {
            let mut lost = 0;
            for steps in 1..=max {
                let position = from.position + dir * steps;
                let Some(loss) = self.loss(position) else {
                    break;
                };
                lost += loss;
                if steps >= min {
                    let vertical = dir.x == 0;
                    next.push((Crucible { position, vertical }, lost));
                }
            }
        }
        next
    }

    /// Least heat lost from the top-left block to the bottom-right one,
    /// moving between `min` and `max` blocks before each turn.
    fn least_heat_loss(&self, min: i32, max: i32) -> Result<u32> {
        let goal = self.size - IVec2::ONE;
        [true, false]
            .into_iter()
            .filter_map(|vertical| {
                let start = Crucible { position: IVec2::ZERO, vertical };
                dijkstra(&start, |c| self.moves(c, min, max), |c| c.position == goal)
            })
            .map(|(_, loss)| loss)
            .min()
            .ok_or_else(|| miette!("The crucible cannot reach the factory"))
    }
}

#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    Ok(City::parse(input)?.least_heat_loss(1, 3)?.to_string())
}

/// Ultra crucibles need four blocks before turning or stopping and turn
/// within ten.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    Ok(City::parse(input)?.least_heat_loss(4, 10)?.to_string())
}
