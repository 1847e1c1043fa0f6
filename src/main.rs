use sparse_life::{Renderer, Simulation, Viewport, presets};

/// Demo driver: seed a classic pattern and watch it evolve in the terminal.
/// All loop state lives here; the core only computes one step at a time.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let pattern = presets::r_pentomino();
    let mut simulation = Simulation::new(pattern.to_grid());
    let renderer = Renderer::default();

    println!("{} - {}", pattern.name, pattern.description);
    for _ in 0..20 {
        let viewport = Viewport::bounding(simulation.grid())
            .unwrap_or(Viewport::new(0, 0, 0, 0))
            .padded(1);
        println!(
            "generation {} (population {}):",
            simulation.generation(),
            simulation.population()
        );
        println!("{}\n", renderer.draw(simulation.grid(), viewport));
        simulation.step();
        if simulation.is_extinct() {
            println!("extinct at generation {}", simulation.generation());
            break;
        }
    }
}
