use std::time::Instant;

use mazegraph::{
    generators::{Generator, generate_maze, get_rng},
    metrics::ORIGIN,
};
use tracing_subscriber::EnvFilter;

const SIZE: usize = 100;

fn main() -> anyhow::Result<()> {
    let file_appender = tracing_appender::rolling::never(".", "mazegraph-profile.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);

    let mut rng = get_rng(Some(0));
    for generator in Generator::ALL {
        let started = Instant::now();
        let mut total_distance = 0;
        for _ in 0..num_iters {
            let maze = generate_maze(generator, SIZE, SIZE, &mut rng)?;
            total_distance += maze.geodesic_distance(ORIGIN, (SIZE - 1, SIZE - 1))?;
        }
        let elapsed = started.elapsed();
        tracing::info!(%generator, num_iters, ?elapsed, total_distance, "profiled generator");
        println!(
            "{generator}: {num_iters} mazes of {SIZE}x{SIZE} in {elapsed:?} (mean distance {})",
            total_distance / num_iters.max(1)
        );
    }
    Ok(())
}
