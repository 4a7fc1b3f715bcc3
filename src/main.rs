use std::io;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use plant_care::cli::{self, Cli};
use plant_care::models::today;
use plant_care::registry::PlantRegistry;
use plant_care::shell::Shell;
use plant_care::store::PlantStore;

/// Logs go to stderr so the menu and listings on stdout stay clean.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "plant_care=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let store = PlantStore::open_default();
    let mut stdout = io::stdout().lock();

    let Some(command) = cli.command else {
        // The interactive menu starts empty on a broken file and reports it.
        let mut registry = PlantRegistry::open(store, today());
        let stdin = io::stdin().lock();
        return Shell::new(&mut registry, stdin, stdout).run();
    };

    // One-shot commands refuse to run on a file they can't read, so a save
    // never replaces it with an empty list.
    let plants = store.load(today())?;
    let mut registry = PlantRegistry::new(store, plants);

    cli::execute(command, &mut registry, today(), &mut stdout)
}
