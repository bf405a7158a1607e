use glam::IVec2;
use miette::{miette, Result};
use pathfinding::prelude::bfs;

const STEPS: [IVec2; 4] = [IVec2::X, IVec2::NEG_X, IVec2::Y, IVec2::NEG_Y];

struct Heightmap {
    heights: Vec<Vec<u8>>,
    start: IVec2,
    end: IVec2,
}

impl Heightmap {
    fn parse(input: &str) -> Result<Self> {
        let (mut start, mut end) = (None, None);
        let heights = input
            .lines()
            .enumerate()
            .map(|(y, line)| {
                line.trim()
                    .bytes()
                    .enumerate()
                    .map(|(x, c)| {
                        let here = IVec2::new(x as i32, y as i32);
                        match c {
                            b'S' => {
                                start = Some(here);
                                Ok(0)
                            }
                            b'E' => {
                                end = Some(here);
                                Ok(25)
                            }
                            b'a'..=b'z' => Ok(c - b'a'),
                            _ => Err(miette!("Unexpected square {:?}", c as char)),
                        }
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            heights,
            start: start.ok_or_else(|| miette!("Missing start S"))?,
            end: end.ok_or_else(|| miette!("Missing signal E"))?,
        })
    }

    fn height(&self, p: IVec2) -> Option<u8> {
        let row = self.heights.get(usize::try_from(p.y).ok()?)?;
        row.get(usize::try_from(p.x).ok()?).copied()
    }

    /// Walks downhill from the signal, so one search serves every start.
    fn descents(&self, p: &IVec2) -> Vec<IVec2> {
        let here = self.height(*p).unwrap_or(0);
        STEPS
            .iter()
            .map(|step| *p + *step)
            .filter(|&next| self.height(next).is_some_and(|h| h + 1 >= here))
            .collect()
    }

    fn steps_until(&self, goal: impl Fn(IVec2) -> bool) -> Result<usize> {
        bfs(&self.end, |p| self.descents(p), |&p| goal(p))
            .map(|path| path.len() - 1)
            .ok_or_else(|| miette!("No route to the signal"))
    }
}

/// Fewest steps from S to E.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let map = Heightmap::parse(input)?;
    Ok(map.steps_until(|p| p == map.start)?.to_string())
}

/// Fewest steps to E from any square at elevation a.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let map = Heightmap::parse(input)?;
    Ok(map.steps_until(|p| map.height(p) == Some(0))?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "Sabqponm\nabcryxxl\naccszExk\nacctuvwj\nabdefghi";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("31", part1(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("29", part2(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_missing_signal() {
        assert!(Heightmap::parse("Sab").is_err());
    }
}
