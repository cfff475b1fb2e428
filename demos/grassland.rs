use ecopico::report::TracingReporter;
use ecopico::Simulation;

use tracing_subscriber::EnvFilter;

fn main() -> ecopico::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut sim = Simulation::from_parameters("demos/parameters/grassland.yaml")?;
    let turns = sim.run(&mut TracingReporter)?;

    match sim.statistics().best() {
        Some(best) => println!(
            "{turns} turns, best agent {} with {}¢ {}",
            best.name, best.fitness, best.gene_summary
        ),
        None => println!("{turns} turns, no agents recorded"),
    }
    Ok(())
}
