use std::path::Path;

// This main function is the entry point when running `cargo run -p web-server`.
// It loads `perfboard.toml` (if present) and hands over to the crate's library.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = configuration::load_config(Path::new(configuration::DEFAULT_CONFIG_FILE))?;
    let _guard = configuration::init_tracing(&settings.logging)?;
    let rates = settings.points.rate_table()?;
    web_server::run_server(&settings.server, rates).await
}
