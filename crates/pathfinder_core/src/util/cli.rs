use clap::{Parser, ValueEnum};

use crate::{
    constants::Weight,
    graph::Point,
    heuristic::{Euclidean, Heuristic, Manhattan, NullHeuristic},
    util::test_graphs::MAX_GRID_SIDE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeuristicKind {
    Null,
    Euclidean,
    Manhattan,
}

impl Heuristic<Point> for HeuristicKind {
    fn estimate(&self, from: &Point, to: &Point) -> Weight {
        match self {
            HeuristicKind::Null => NullHeuristic.estimate(from, to),
            HeuristicKind::Euclidean => Euclidean.estimate(from, to),
            HeuristicKind::Manhattan => Manhattan.estimate(from, to),
        }
    }
}

#[derive(Parser)]
#[command(version, about = "Weighted A* on a generated grid", long_about = None)]
struct Cli {
    /// Width of the generated grid
    #[arg(long, default_value_t = 64, value_parser = grid_side)]
    width: usize,

    /// Height of the generated grid
    #[arg(long, default_value_t = 64, value_parser = grid_side)]
    height: usize,

    /// Share of blocked grid cells in [0, 1]
    #[arg(short, long, value_name = "ratio", default_value_t = 0.2, value_parser = ratio)]
    obstacles: f64,

    /// Blend between accumulated weight (1.0) and heuristic (0.0)
    #[arg(short, long, value_name = "coeff", default_value_t = 1.0)]
    coefficient: f64,

    /// Heuristic used to estimate the remaining cost
    #[arg(long, value_enum, default_value_t = HeuristicKind::Manhattan)]
    heuristic: HeuristicKind,

    /// Seed of the grid generator
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Abort a search after this many expansions
    #[arg(short, long, value_name = "limit")]
    max_expansions: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub width: usize,
    pub height: usize,
    pub obstacles: f64,
    pub coefficient: f64,
    pub heuristic: HeuristicKind,
    pub seed: u64,
    pub max_expansions: Option<usize>,
}

/// Grid side in `1..=MAX_GRID_SIDE`
pub fn grid_side(s: &str) -> Result<usize, String> {
    let side: usize = s.parse().map_err(|e| format!("{}", e))?;
    if (1..=MAX_GRID_SIDE).contains(&side) {
        Ok(side)
    } else {
        Err(format!("grid side must be in 1..={}", MAX_GRID_SIDE))
    }
}

/// Finite share in `[0, 1]`
fn ratio(s: &str) -> Result<f64, String> {
    let ratio: f64 = s.parse().map_err(|e| format!("{}", e))?;
    // Also rejects NaN
    if (0.0..=1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err("ratio must be in [0, 1]".to_string())
    }
}

pub fn parse() -> Cfg {
    let cli = Cli::parse();

    Cfg {
        width: cli.width,
        height: cli.height,
        obstacles: cli.obstacles,
        coefficient: cli.coefficient,
        heuristic: cli.heuristic,
        seed: cli.seed,
        max_expansions: cli.max_expansions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_arguments() {
        let cli = Cli::try_parse_from([
            "demo",
            "--width",
            "10",
            "-c",
            "0.5",
            "--heuristic",
            "euclidean",
            "-m",
            "100",
        ])
        .unwrap();

        assert_eq!(cli.width, 10);
        assert_eq!(cli.height, 64);
        assert_eq!(cli.coefficient, 0.5);
        assert_eq!(cli.heuristic, HeuristicKind::Euclidean);
        assert_eq!(cli.max_expansions, Some(100));
    }

    #[test]
    fn reject_invalid_grid() {
        for obstacles in ["NaN", "inf", "1.5", "abc"] {
            assert!(Cli::try_parse_from(["demo", "--obstacles", obstacles]).is_err());
        }
        assert!(Cli::try_parse_from(["demo", "--width", "0"]).is_err());
        assert!(Cli::try_parse_from(["demo", "--height", "1000"]).is_err());

        let cli = Cli::try_parse_from(["demo", "--obstacles", "0.5", "--height", "100"]).unwrap();
        assert_eq!(cli.obstacles, 0.5);
        assert_eq!(cli.height, MAX_GRID_SIDE);
    }

    #[test]
    fn grid_side_bounds() {
        assert_eq!(grid_side("1"), Ok(1));
        assert!(grid_side("101").is_err());
        assert!(grid_side("-3").is_err());
    }

    #[test]
    fn heuristic_kind_dispatch() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);

        assert_eq!(HeuristicKind::Null.estimate(&a, &b), 0.0);
        assert_eq!(HeuristicKind::Euclidean.estimate(&a, &b), 5.0);
        assert_eq!(HeuristicKind::Manhattan.estimate(&a, &b), 7.0);
    }
}
