//! Jump Point Search demo on the built-in map or a JSON scene.
//!
//! Run: cargo run --bin jps-demo -- [--scene demo/scenes/detour.json]

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use jumpgrid_demo::{DemoError, Scene, format_steps, render};
use jumpgrid_paths::Planner;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON scene file; the built-in demo map is used when omitted.
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Do not print the map.
    #[arg(long, default_value_t = false)]
    no_render: bool,

    /// Print every route cell as `row,col`.
    #[arg(long, default_value_t = false)]
    steps: bool,

    /// Print the plan as JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn run(cli: &Cli) -> Result<bool, DemoError> {
    let scene = match &cli.scene {
        Some(path) => Scene::load(path)?,
        None => Scene::default(),
    };
    let grid = scene.build_grid()?;
    let (start, goal) = (scene.start(), scene.goal());
    log::info!(
        "planning {start} -> {goal} on a {}x{} grid",
        grid.width(),
        grid.height()
    );

    let t0 = Instant::now();
    let plan = Planner::with_config(&grid, scene.planner).plan(start, goal)?;
    log::info!(
        "search finished in {:.2?}: {} expansions, {} stale entries, {} jump points traced",
        t0.elapsed(),
        plan.expanded,
        plan.stale,
        plan.trace.len()
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(plan.found());
    }

    match &plan.route {
        Some(route) => {
            log::debug!("route clear: {}", route.is_clear(&grid));
            println!("Found a path with cost {:.4}", route.cost);
            let waypoints: Vec<String> = route.path.iter().map(|p| p.to_string()).collect();
            println!("Jump points: {}", waypoints.join(" -> "));
        }
        None => println!("Failed to find a path from {start} to {goal}"),
    }
    if !cli.no_render {
        print!("{}", render(&grid, &plan));
    }
    if cli.steps {
        print!("{}", format_steps(&plan));
    }
    Ok(plan.found())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
