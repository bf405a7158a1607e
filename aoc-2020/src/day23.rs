use itertools::Itertools;
use miette::{miette, Result};

pub const DEFAULT_MOVES: usize = 100;
pub const DEFAULT_TOTAL: usize = 1_000_000;

/// A ring of cups stored as successor links: `next[label]` is the label of
/// the cup clockwise of `label`. Index 0 is unused.
struct Circle {
    next: Vec<usize>,
    current: usize,
}

impl Circle {
    fn new(labels: &[usize], total: usize) -> Self {
        let total = total.max(labels.len());
        let order = labels
            .iter()
            .copied()
            .chain(labels.len() + 1..=total)
            .collect::<Vec<_>>();
        let mut next = vec![0; total + 1];
        for (&cup, &after) in order.iter().circular_tuple_windows() {
            next[cup] = after;
        }
        Circle {
            next,
            current: order[0],
        }
    }

    fn max_label(&self) -> usize {
        self.next.len() - 1
    }

    fn play(&mut self) {
        let a = self.next[self.current];
        let b = self.next[a];
        let c = self.next[b];
        self.next[self.current] = self.next[c];

        let mut destination = self.current;
        loop {
            destination = if destination == 1 {
                self.max_label()
            } else {
                destination - 1
            };
            if destination != a && destination != b && destination != c {
                break;
            }
        }

        self.next[c] = self.next[destination];
        self.next[destination] = a;
        self.current = self.next[self.current];
    }

    /// Labels clockwise after cup 1.
    fn after_one(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(Some(self.next[1]), |&cup| Some(self.next[cup]))
            .take_while(|&cup| cup != 1)
    }
}

fn parse_input(input: &str) -> Result<Vec<usize>> {
    let labels = input
        .trim()
        .chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as usize)
                .ok_or_else(|| miette!("Invalid cup label {c:?}"))
        })
        .collect::<Result<Vec<_>>>()?;
    if labels.len() < 4 {
        return Err(miette!("Need at least 4 cups, found {}", labels.len()));
    }
    let expected = (1..=labels.len()).collect::<Vec<_>>();
    if labels.iter().copied().sorted().collect::<Vec<_>>() != expected {
        return Err(miette!("Cup labels must be 1..={} exactly once", labels.len()));
    }
    Ok(labels)
}

/// Labels after cup 1 once `moves` moves have been played.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str, moves: usize) -> Result<String> {
    let labels = parse_input(input)?;
    let mut circle = Circle::new(&labels, labels.len());
    for _ in 0..moves {
        circle.play();
    }
    let labels = circle.after_one().join("");
    Ok(labels)
}

/// With `total` cups and ten times as many moves, the product of the two
/// labels right after cup 1.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str, total: usize) -> Result<String> {
    let labels = parse_input(input)?;
    let mut circle = Circle::new(&labels, total);
    for _ in 0..total * 10 {
        circle.play();
    }
    let product: usize = circle.after_one().take(2).product();
    Ok(product.to_string())
}
