use std::io::{Write, stdout};

use clap::{Parser, ValueEnum};
use crossterm::{
    queue,
    style::{self, Attribute, Color, Stylize},
};
use tracing_subscriber::EnvFilter;

use mazegraph::{
    generators::{Generator, generate_maze, get_rng},
    hard_maze::generate_hard_maze,
    metrics::ORIGIN,
    render::{path_overlay, render_with_overlay},
    solvers::{Solver, solve_maze},
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    BinaryTree,
    Sidewinder,
    Fusion,
    Exploration,
    Wilson,
}

impl From<Algorithm> for Generator {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::BinaryTree => Generator::BinaryTree,
            Algorithm::Sidewinder => Generator::Sidewinder,
            Algorithm::Fusion => Generator::Fusion,
            Algorithm::Exploration => Generator::Exploration,
            Algorithm::Wilson => Generator::Wilson,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SolverArg {
    Dfs,
    Bfs,
    WallFollower,
}

impl From<SolverArg> for Solver {
    fn from(solver: SolverArg) -> Self {
        match solver {
            SolverArg::Dfs => Solver::Dfs,
            SolverArg::Bfs => Solver::Bfs,
            SolverArg::WallFollower => Solver::WallFollower,
        }
    }
}

/// Generate a maze, solve it from the top-left to the bottom-right corner and
/// print it with some metrics.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Number of rows
    #[arg(long, default_value_t = 8)]
    height: usize,
    /// Number of columns
    #[arg(long, default_value_t = 12)]
    width: usize,
    /// Generation algorithm (ignored with --hard)
    #[arg(long, value_enum, default_value_t = Algorithm::Wilson)]
    algorithm: Algorithm,
    /// Solving algorithm
    #[arg(long, value_enum, default_value_t = SolverArg::Bfs)]
    solver: SolverArg,
    /// Seed for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,
    /// Search this many Wilson mazes for the one with the longest solution
    #[arg(long, value_name = "DIFFICULTY")]
    hard: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Log to a file so log lines never mix with the maze on stdout
    let file_appender = tracing_appender::rolling::never(".", "mazegraph.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let mut rng = get_rng(cli.seed);
    let maze = match cli.hard {
        Some(difficulty) => {
            tracing::info!(difficulty, "searching for a hard maze");
            generate_hard_maze(cli.height, cli.width, difficulty, None, &mut rng, |progress| {
                tracing::debug!(
                    "[search] {}/{} best distance {}",
                    progress.iteration,
                    progress.difficulty,
                    progress.best_distance
                );
            })?
        }
        None => generate_maze(cli.algorithm.into(), cli.height, cli.width, &mut rng)?,
    };

    let solver = Solver::from(cli.solver);
    let goal = (cli.height - 1, cli.width - 1);
    let path = solve_maze(&maze, solver, ORIGIN, goal);

    let overlay = path.as_deref().map(|p| path_overlay(p, "•")).unwrap_or_default();
    let mut stdout = stdout();
    queue!(stdout, style::Print(render_with_overlay(&maze, &overlay)))?;

    let title = match cli.hard {
        Some(difficulty) => format!("Hard maze (difficulty {difficulty})"),
        None => format!("{}", Generator::from(cli.algorithm)),
    };
    queue!(
        stdout,
        style::PrintStyledContent(
            format!("{title}, solved with {solver}\n")
                .with(Color::Yellow)
                .attribute(Attribute::Bold)
        ),
    )?;

    match &path {
        Some(path) => queue!(
            stdout,
            style::PrintStyledContent(
                format!("Path found: {} cells\n", path.len()).with(Color::Green)
            )
        )?,
        None => queue!(
            stdout,
            style::PrintStyledContent("No path found.\n".to_string().with(Color::Red))
        )?,
    }

    let stats = [
        ("Geodesic distance", maze.geodesic_distance(ORIGIN, goal)?),
        ("Manhattan distance", maze.manhattan_distance(ORIGIN, goal)),
        ("Dead ends", maze.dead_end_count()),
        ("Worst dead-end path", maze.worst_dead_end_path_length()),
    ];
    for (label, value) in stats {
        queue!(
            stdout,
            style::PrintStyledContent(format!("  {label}: ").with(Color::Cyan)),
            style::Print(format!("{value}\n")),
        )?;
    }
    stdout.flush()?;
    Ok(())
}
