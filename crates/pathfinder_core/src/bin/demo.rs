use anyhow::Context;
use log::info;
use pathfinder_core::{
    graph::vertex_index,
    search::{dijkstra::Dijkstra, path_finder::PathFinder},
    search_params::SearchParams,
    util::{cli, test_graphs::grid_graph},
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse();
    info!("Config: {:?}", cfg);

    let g = grid_graph(cfg.width, cfg.height, cfg.obstacles, cfg.seed);
    g.print_info();

    // Opposite corners, never blocked
    let source = vertex_index(0);
    let target = vertex_index(g.num_vertices() - 1);

    let mut params = SearchParams::new()
        .heuristic(&cfg.heuristic)
        .coefficient(cfg.coefficient);
    if let Some(limit) = cfg.max_expansions {
        params = params.max_expansions(limit);
    }

    let mut pf = PathFinder::new(&g);
    let path = pf
        .search(source, target, &params)
        .context("Weighted A* search failed")?;

    let mut dijkstra = Dijkstra::new(&g);
    let reference = dijkstra
        .search(source, target)
        .context("Dijkstra search failed")?;

    match (path, reference) {
        (Some(path), Some(reference)) => {
            println!(
                "Weighted A* (c = {}): {} edges, weight {}, {}",
                cfg.coefficient,
                path.len(),
                path.weight,
                pf.stats
            );
            println!(
                "Dijkstra:            {} edges, weight {}, {}",
                reference.len(),
                reference.weight,
                dijkstra.stats
            );
            println!(
                "Suboptimality: {:.3}",
                path.weight / reference.weight.max(f64::MIN_POSITIVE)
            );
        }
        _ => println!("No path found: {}", pf.stats),
    }

    Ok(())
}
