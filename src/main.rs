use pit_log::config::AppConfig;
use pit_log::{logging, App};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;

fn clock_seed() -> u64 {
    let now = chrono::Utc::now();
    now.timestamp_nanos_opt()
        .map(|n| n as u64)
        .unwrap_or_else(|| now.timestamp() as u64)
}

fn main() -> Result<(), anyhow::Error> {
    let config = AppConfig::load().unwrap_or_default();
    if let Err(e) = logging::init(&config) {
        eprintln!("logging disabled: {e}");
    }

    let seed = clock_seed();
    tracing::info!(seed, version = env!("CARGO_PKG_VERSION"), "starting");

    let stdin = io::stdin();
    let mut app = App::new(stdin.lock(), io::stdout(), StdRng::seed_from_u64(seed))
        .with_banner(config.show_banner);
    app.run()?;

    Ok(())
}
