use std::path::Path;

use anyhow::Context;
use log::{info, warn};
use rush_hour_solver::{move_log, Puzzle, Solver, SolverConfig};

// Format:
// one line per row, `.` is an empty cell,
// any other character is part of the vehicle with that id,
// `X` is the vehicle that has to reach the right edge.
//
// Files named *.json are read as {"size": N, "vehicles": [...]} instead.
const EXAMPLES: &[&str] = &[
    "
......
...A..
XX.AB.
....B.
......
......
",
    "
..A.
XXA.
....
....
",
    "
..AB
XXAB
..AB
..AB
",
];

// Used when RUSH_HOUR_MAX_EXPANSIONS is not set; without it a hard card can
// run until memory runs out.
const DEFAULT_MAX_EXPANSIONS: usize = 200_000;

fn load(path: &Path) -> anyhow::Result<Puzzle> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let puzzle = if path.extension().map_or(false, |ext| ext == "json") {
        Puzzle::from_json(&text)
    } else {
        text.parse()
    };

    puzzle.with_context(|| format!("parsing {}", path.display()))
}

fn run(solver: &Solver, puzzle: &Puzzle) -> anyhow::Result<()> {
    println!("----");
    println!("Puzzle ({0}x{0}):", puzzle.size);
    println!("{}", puzzle);
    println!("----");

    let solution = solver.solve_with_stats(puzzle.size, &puzzle.state)?;
    let stats = solution.stats;

    match solution.path.last() {
        Some(goal) => {
            println!("Found a solution in {} moves:", solution.moves());
            println!(
                "Expanded {} board positions (generated {} total, {} distinct).",
                stats.expanded, stats.generated, stats.visited
            );

            let steps = move_log(&solution.path)?;
            for (ix, step) in steps.iter().enumerate() {
                println!("{:>3}. {}", ix + 1, step);
            }

            println!("----");
            println!("{}", goal.display(puzzle.size));
            println!();
        }
        None => {
            println!("No solution found");
            println!("Expanded {} board positions.", stats.expanded);
            println!();
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = SolverConfig::from_env();
    if config.max_expansions.is_none() {
        config = config.with_max_expansions(DEFAULT_MAX_EXPANSIONS);
    }
    let solver = Solver::new(config);
    info!("solver config: {:?}", solver.config());

    let files: Vec<String> = std::env::args().skip(1).collect();
    let puzzles = if files.is_empty() {
        info!("no puzzle files given, running {} built-in examples", EXAMPLES.len());
        EXAMPLES
            .iter()
            .map(|text| text.parse::<Puzzle>())
            .collect::<Result<Vec<_>, _>>()?
    } else {
        files
            .iter()
            .map(|file| load(Path::new(file)))
            .collect::<anyhow::Result<Vec<_>>>()?
    };

    let mut failures = 0;
    for puzzle in &puzzles {
        if let Err(e) = run(&solver, puzzle) {
            warn!("{:#}", e);
            failures += 1;
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} puzzles could not be solved", failures, puzzles.len());
    }

    Ok(())
}
