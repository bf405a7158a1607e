use std::collections::BTreeMap;

use miette::{miette, IntoDiagnostic, Result};

const DISK: u64 = 70_000_000;
const NEEDED: u64 = 30_000_000;
const SMALL: u64 = 100_000;

/// Total size of every directory, keyed by its path from the root.
fn directory_sizes(input: &str) -> Result<BTreeMap<Vec<&str>, u64>> {
    let mut cwd: Vec<&str> = Vec::new();
    let mut sizes = BTreeMap::from([(Vec::new(), 0)]);
    for line in input.lines().map(str::trim) {
        if let Some(target) = line.strip_prefix("$ cd ") {
            match target {
                "/" => cwd.clear(),
                ".." => {
                    cwd.pop().ok_or_else(|| miette!("cd .. above the root"))?;
                }
                name => {
                    cwd.push(name);
                    sizes.entry(cwd.clone()).or_insert(0);
                }
            }
        } else if line == "$ ls" || line.starts_with("dir ") {
            continue;
        } else {
            let (size, _) = line
                .split_once(' ')
                .ok_or_else(|| miette!("Unexpected terminal output {line:?}"))?;
            let size = size.parse::<u64>().into_diagnostic()?;
            for depth in 0..=cwd.len() {
                *sizes.entry(cwd[..depth].to_vec()).or_insert(0) += size;
            }
        }
    }
    Ok(sizes)
}

/// Sum of the directories holding at most 100000.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let sum: u64 = directory_sizes(input)?
        .values()
        .filter(|&&size| size <= SMALL)
        .sum();
    Ok(sum.to_string())
}

/// Smallest directory that frees enough space for the update.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let sizes = directory_sizes(input)?;
    let root: Vec<&str> = Vec::new();
    let used = sizes[&root];
    let missing = (NEEDED + used).saturating_sub(DISK);
    tracing::debug!(used, missing);
    let smallest = sizes
        .values()
        .filter(|&&size| size >= missing)
        .min()
        .ok_or_else(|| miette!("No directory is large enough"))?;
    Ok(smallest.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("95437", part1(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("24933642", part2(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_sizes() -> Result<()> {
        let sizes = directory_sizes(INPUT)?;
        assert_eq!(584, sizes[&vec!["a", "e"]]);
        assert_eq!(48381165, sizes[&Vec::<&str>::new()]);
        Ok(())
    }
}
