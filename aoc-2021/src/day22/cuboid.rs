/// Inclusive ranges on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cuboid {
    pub x: (i64, i64),
    pub y: (i64, i64),
    pub z: (i64, i64),
}

/// Splits `range` into the parts below, inside and above `cut`, dropping
/// empty parts. The flag marks the part inside.
fn segments(range: (i64, i64), cut: (i64, i64)) -> Vec<((i64, i64), bool)> {
    let (lo, hi) = range;
    let inner = (lo.max(cut.0), hi.min(cut.1));
    let mut parts = Vec::with_capacity(3);
    if lo < inner.0 {
        parts.push(((lo, inner.0 - 1), false));
    }
    if inner.0 <= inner.1 {
        parts.push((inner, true));
    }
    if inner.1 < hi {
        parts.push(((inner.1 + 1, hi), false));
    }
    parts
}

impl Cuboid {
    pub fn new(x: (i64, i64), y: (i64, i64), z: (i64, i64)) -> Self {
        Cuboid { x, y, z }
    }

    fn axes(&self) -> [(i64, i64); 3] {
        [self.x, self.y, self.z]
    }

    pub fn volume(&self) -> i64 {
        self.axes().iter().map(|(lo, hi)| hi - lo + 1).product()
    }

    pub fn overlaps(&self, other: &Cuboid) -> bool {
        self.axes()
            .iter()
            .zip(other.axes())
            .all(|(a, b)| a.0 <= b.1 && b.0 <= a.1)
    }

    pub fn contains(&self, other: &Cuboid) -> bool {
        self.axes()
            .iter()
            .zip(other.axes())
            .all(|(a, b)| a.0 <= b.0 && b.1 <= a.1)
    }

    /// The part of `self` inside `region`, if any.
    pub fn crop(&self, region: &Cuboid) -> Option<Cuboid> {
        if !self.overlaps(region) {
            return None;
        }
        let clamp = |a: (i64, i64), b: (i64, i64)| (a.0.max(b.0), a.1.min(b.1));
        Some(Cuboid::new(
            clamp(self.x, region.x),
            clamp(self.y, region.y),
            clamp(self.z, region.z),
        ))
    }

    /// Disjoint pieces covering `self` minus `cutter`: at most 26.
    pub fn subtract(&self, cutter: &Cuboid) -> Vec<Cuboid> {
        if !self.overlaps(cutter) {
            return vec![*self];
        }
        let xs = segments(self.x, cutter.x);
        let ys = segments(self.y, cutter.y);
        let zs = segments(self.z, cutter.z);
        let mut pieces = Vec::new();
        for &(x, in_x) in &xs {
            for &(y, in_y) in &ys {
                for &(z, in_z) in &zs {
                    if !(in_x && in_y && in_z) {
                        pieces.push(Cuboid::new(x, y, z));
                    }
                }
            }
        }
        pieces
    }
}

/// Lit cubes kept as pairwise disjoint cuboids.
#[derive(Debug, Default)]
pub struct Reactor {
    lit: Vec<Cuboid>,
}

impl Reactor {
    /// Adds only the parts of `cuboid` not already lit.
    pub fn turn_on(&mut self, cuboid: Cuboid) {
        if self.lit.iter().any(|existing| existing.contains(&cuboid)) {
            return;
        }
        let mut fresh = vec![cuboid];
        for existing in &self.lit {
            if fresh.is_empty() {
                return;
            }
            fresh = fresh
                .into_iter()
                .flat_map(|piece| piece.subtract(existing))
                .collect();
        }
        self.lit.extend(fresh);
    }

    pub fn turn_off(&mut self, cuboid: Cuboid) {
        self.lit = self
            .lit
            .iter()
            .flat_map(|existing| existing.subtract(&cuboid))
            .collect();
    }

    pub fn lit_cubes(&self) -> i64 {
        self.lit.iter().map(Cuboid::volume).sum()
    }

    pub fn pieces(&self) -> usize {
        self.lit.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn cube(lo: i64, hi: i64) -> Cuboid {
        Cuboid::new((lo, hi), (lo, hi), (lo, hi))
    }

    fn reactor_with(cuboids: &[Cuboid]) -> Reactor {
        let mut reactor = Reactor::default();
        for &c in cuboids {
            reactor.turn_on(c);
        }
        reactor
    }

    #[rstest]
    #[case::equal(cube(0, 100), 1)]
    #[case::enclosed(Cuboid::new((10, 90), (10, 100), (10, 70)), 1)]
    #[case::half(Cuboid::new((10, 200), (0, 100), (0, 100)), 2)]
    #[case::three(Cuboid::new((-100, 200), (10, 50), (10, 50)), 3)]
    #[case::eight(cube(70, 150), 8)]
    #[case::twenty_seven(cube(-100, 200), 27)]
    fn test_turn_on_fragments(#[case] second: Cuboid, #[case] pieces: usize) {
        let base = cube(0, 100);
        let reactor = reactor_with(&[base, second]);
        assert_eq!(pieces, reactor.pieces());
        assert!(reactor.lit.contains(&base));
    }

    #[test]
    fn test_fragments_outside_base() {
        let reactor = reactor_with(&[cube(0, 100), Cuboid::new((-100, 200), (10, 50), (10, 50))]);
        assert!(reactor
            .lit
            .contains(&Cuboid::new((-100, -1), (10, 50), (10, 50))));
        assert!(reactor
            .lit
            .contains(&Cuboid::new((101, 200), (10, 50), (10, 50))));
        let reactor = reactor_with(&[cube(0, 100), cube(70, 150)]);
        assert!(reactor
            .lit
            .contains(&Cuboid::new((70, 100), (70, 100), (101, 150))));
    }

    #[test]
    fn test_three_cuboids() {
        let reactor = reactor_with(&[
            cube(0, 100),
            Cuboid::new((10, 100), (10, 100), (10, 100)),
            Cuboid::new((30, 90), (20, 100), (10, 80)),
        ]);
        assert_eq!(1, reactor.pieces());

        let reactor = reactor_with(&[
            cube(0, 100),
            Cuboid::new((10, 200), (0, 100), (0, 100)),
            Cuboid::new((-10, 50), (0, 100), (0, 100)),
        ]);
        assert_eq!(3, reactor.pieces());

        let reactor = reactor_with(&[
            cube(0, 100),
            Cuboid::new((-100, 400), (10, 50), (10, 50)),
            Cuboid::new((200, 300), (0, 100), (0, 100)),
        ]);
        assert_eq!(11, reactor.pieces());
    }

    #[test]
    fn test_turn_off() {
        let mut reactor = reactor_with(&[cube(0, 100)]);
        reactor.turn_off(cube(0, 100));
        assert_eq!(0, reactor.pieces());

        let mut reactor = reactor_with(&[cube(0, 100)]);
        let hole = Cuboid::new((20, 70), (10, 80), (20, 70));
        reactor.turn_off(hole);
        assert_eq!(26, reactor.pieces());
        assert_eq!(cube(0, 100).volume() - hole.volume(), reactor.lit_cubes());
    }

    #[test]
    fn test_turn_on_inside_lit() {
        let mut reactor = reactor_with(&[cube(0, 100)]);
        assert!(cube(0, 100).contains(&cube(10, 20)));
        assert!(!cube(10, 20).contains(&cube(0, 100)));
        reactor.turn_on(cube(10, 20));
        assert_eq!(1, reactor.pieces());
        assert_eq!(cube(0, 100).volume(), reactor.lit_cubes());
    }

    #[test]
    fn test_crop() {
        let region = cube(-50, 50);
        assert_eq!(Some(cube(10, 50)), cube(10, 70).crop(&region));
        assert_eq!(None, cube(60, 70).crop(&region));
    }
}
