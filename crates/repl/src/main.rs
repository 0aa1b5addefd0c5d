//! Interactive shell to run searches on a generated grid
use std::path::PathBuf;

use indicatif::ProgressBar;
use pathfinder_core::{
    graph::{vertex_index, Graph, Point},
    heuristic::Manhattan,
    search::{dijkstra::Dijkstra, path::Path, path_finder::PathFinder},
    statistics::{average_in_degree, average_out_degree},
    util::{
        cli::grid_side,
        test_graphs::{grid_graph, MAX_GRID_SIDE},
    },
};
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "{} ({}x{} grid), avg. out degree {:.2}, avg. in degree {:.2}",
        context.graph,
        context.width,
        context.height,
        average_out_degree(&context.graph),
        average_in_degree(&context.graph)
    )))
}

fn format_path(g: &Graph<Point>, path: &Path) -> String {
    let mut res = String::new();
    for vertex in path.vertices(g) {
        let p = g[vertex];
        res.push_str(&format!("{} ({}, {})\n", vertex.index(), p.x, p.y));
    }
    res.push_str(&format!("Weight: {}", path.weight));
    res
}

fn run_find(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src = *args.get_one::<usize>("src").unwrap();
    let dst = *args.get_one::<usize>("dst").unwrap();
    let coeff = *args.get_one::<f64>("coeff").unwrap_or(&1.0);

    let mut pf = PathFinder::new(&context.graph);
    let res = pf.find_path(vertex_index(src), vertex_index(dst), &Manhattan, coeff);

    Ok(Some(match res {
        Ok(Some(path)) => format!("{}\n{}", format_path(&context.graph, &path), pf.stats),
        Ok(None) => format!("No path found\n{}", pf.stats),
        Err(e) => format!("Error: {}", e),
    }))
}

fn run_dijkstra(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src = *args.get_one::<usize>("src").unwrap();
    let dst = *args.get_one::<usize>("dst").unwrap();

    let mut dijkstra = Dijkstra::new(&context.graph);
    let res = dijkstra.search(vertex_index(src), vertex_index(dst));

    Ok(Some(match res {
        Ok(Some(path)) => format!(
            "{}\n{}",
            format_path(&context.graph, &path),
            dijkstra.stats
        ),
        Ok(None) => "No path found".to_string(),
        Err(e) => format!("Error: {}", e),
    }))
}

fn measure(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::Rng;

    let n = *args.get_one::<usize>("n").unwrap_or(&10);
    let num_vertices = context.graph.num_vertices();

    // Select n random start and end vertices
    let mut rng = rand::thread_rng();
    let pairs: Vec<(usize, usize)> = (0..n)
        .map(|_| (rng.gen_range(0..num_vertices), rng.gen_range(0..num_vertices)))
        .collect();

    let mut res = String::new();
    for coeff in [1.0, 0.5, 0.0] {
        let mut settled = 0;
        let mut weight = 0.0;
        let mut found = 0;

        let bar = ProgressBar::new(n as u64);
        for (src, dst) in pairs.iter() {
            let mut pf = PathFinder::new(&context.graph);
            if let Ok(Some(path)) =
                pf.find_path(vertex_index(*src), vertex_index(*dst), &Manhattan, coeff)
            {
                found += 1;
                weight += path.weight;
                settled += pf.stats.nodes_settled;
            }
            bar.inc(1);
        }
        bar.finish_and_clear();

        res.push_str(&format!(
            "c = {}: {} paths, avg. weight {:.2}, avg. nodes settled {:.1}\n",
            coeff,
            found,
            weight / found.max(1) as f64,
            settled as f64 / found.max(1) as f64
        ));
    }

    Ok(Some(res))
}

/// `[width] [height] [seed]`, sides outside of `1..=MAX_GRID_SIDE` fall back
/// to the default
fn grid_args(mut args: impl Iterator<Item = String>) -> (usize, usize, u64) {
    let mut side = |default: usize| {
        args.next()
            .map_or(Ok(default), |arg| grid_side(&arg))
            .unwrap_or_else(|e| {
                eprintln!("{}, using {}", e, default);
                default
            })
    };
    let width = side(32);
    let height = side(32);
    let seed = args.next().and_then(|a| a.parse().ok()).unwrap_or(0);
    (width, height, seed)
}

struct Context {
    graph: Graph<Point>,
    width: usize,
    height: usize,
}

impl Context {
    fn new(width: usize, height: usize, seed: u64) -> Self {
        Self {
            graph: grid_graph(width, height, 0.2, seed),
            width,
            height,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // Init Graph
    let (width, height, seed) = grid_args(std::env::args().skip(1));
    let context = Context::new(width, height, seed);

    let src_dst = || {
        [
            Arg::new("src")
                .value_parser(value_parser!(usize))
                .required(true)
                .help("Index of source vertex"),
            Arg::new("dst")
                .value_parser(value_parser!(usize))
                .required(true)
                .help("Index of destination vertex"),
        ]
    };

    let mut repl = Repl::new(context)
        .with_name("Pathfinder")
        .with_version("v0.1.0")
        .with_description("Simple REPL to test weighted A* searches")
        .with_banner("Welcome to Pathfinder")
        .with_history(PathBuf::from(r".\history"), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            Command::new("find")
                .args(src_dst())
                .arg(
                    Arg::new("coeff")
                        .value_parser(value_parser!(f64))
                        .required(false)
                        .help("Coefficient in [0, 1], 1 = Dijkstra, 0 = greedy"),
                )
                .about("Find a path using weighted A* with the Manhattan heuristic"),
            run_find,
        )
        .with_command(
            Command::new("dijk")
                .args(src_dst())
                .about("Calculate shortest path using Dijkstra's algorithm"),
            run_dijkstra,
        )
        .with_command(
            Command::new("measure")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random searches per coefficient"),
                )
                .about("Compare coefficients on `n` random vertex pairs"),
            measure,
        );

    repl.run()
}
