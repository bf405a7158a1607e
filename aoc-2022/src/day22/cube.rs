use std::collections::{HashMap, VecDeque};

use glam::{IVec2, IVec3};
use miette::{miette, Result};

use super::{Board, DIRECTIONS};

/// One face of the folded cube, with the 3D axes its map `x` and `y` run
/// along and the direction it faces. `right × down == normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Face {
    origin: IVec2,
    right: IVec3,
    down: IVec3,
    normal: IVec3,
}

impl Face {
    fn axis(&self, facing: usize) -> IVec3 {
        [self.right, self.down, -self.right, -self.down][facing]
    }

    /// The face across the net edge in `facing`, once folded.
    fn fold(&self, facing: usize, origin: IVec2) -> Face {
        let Face { right, down, normal, .. } = *self;
        let (right, down, normal) = match facing {
            0 => (-normal, down, right),
            1 => (right, -normal, down),
            2 => (normal, down, -right),
            _ => (right, normal, -down),
        };
        Face { origin, right, down, normal }
    }
}

/// Wraps moves around the edges of a board folded into a cube.
#[derive(Debug)]
pub struct Cube {
    size: i32,
    faces: HashMap<IVec2, Face>,
}

impl Cube {
    /// Folds the net, starting from its first face in reading order.
    pub fn fold(board: &Board) -> Result<Self> {
        let tiles = board.tile_count();
        let size = (1..=tiles)
            .find(|n| 6 * n * n >= tiles)
            .filter(|n| 6 * n * n == tiles)
            .ok_or_else(|| miette!("{tiles} tiles cannot form six square faces"))?
            as i32;
        let blocks = (0..board.height() as i32 / size)
            .flat_map(|y| (0..board.width() as i32 / size).map(move |x| IVec2::new(x, y)))
            .filter(|block| board.tile(*block * size).is_some())
            .collect::<Vec<_>>();
        let first = *blocks.first().ok_or_else(|| miette!("Board is empty"))?;
        let mut faces = HashMap::from([(
            first,
            Face {
                origin: first * size,
                right: IVec3::X,
                down: IVec3::Y,
                normal: IVec3::Z,
            },
        )]);
        let mut queue = VecDeque::from([first]);
        while let Some(block) = queue.pop_front() {
            let face = faces[&block];
            for (facing, step) in DIRECTIONS.iter().enumerate() {
                let next = block + *step;
                if blocks.contains(&next) && !faces.contains_key(&next) {
                    faces.insert(next, face.fold(facing, next * size));
                    queue.push_back(next);
                }
            }
        }
        if faces.len() != 6 {
            return Err(miette!("Net has {} connected faces, not 6", faces.len()));
        }
        tracing::debug!(size, "folded cube");
        Ok(Self { size, faces })
    }

    /// Position and facing after stepping off the edge of a face.
    pub fn wrap(&self, pos: IVec2, facing: usize) -> Result<(IVec2, usize)> {
        let n = self.size;
        let from = self
            .faces
            .get(&(pos / n))
            .ok_or_else(|| miette!("{pos} is not on the cube"))?;
        let local = pos - from.origin;
        // Cell centres in doubled units, so the cube spans -n..=n.
        let centre = from.normal * n
            + from.right * (2 * local.x + 1 - n)
            + from.down * (2 * local.y + 1 - n);
        let motion = from.axis(facing);
        let to = self
            .faces
            .values()
            .find(|f| f.normal == motion)
            .ok_or_else(|| miette!("No face looks along {motion}"))?;
        let landed = centre - from.normal + motion;
        let x = (landed.dot(to.right) + n - 1) / 2;
        let y = (landed.dot(to.down) + n - 1) / 2;
        let heading = -from.normal;
        let facing = (0..4)
            .find(|&f| to.axis(f) == heading)
            .ok_or_else(|| miette!("Cannot head along {heading} on the next face"))?;
        Ok((to.origin + IVec2::new(x, y), facing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_keeps_handedness() {
        let top = Face {
            origin: IVec2::ZERO,
            right: IVec3::X,
            down: IVec3::Y,
            normal: IVec3::Z,
        };
        for facing in 0..4 {
            let face = top.fold(facing, IVec2::ZERO);
            assert_eq!(face.normal, face.right.cross(face.down));
            assert_eq!(top.axis(facing), face.normal);
        }
    }
}
