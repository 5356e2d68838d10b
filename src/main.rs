use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("heroes_vs=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    std::process::exit(heroes_vs::cli::run_from_env());
}
