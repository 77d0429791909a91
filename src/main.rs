use anyhow::Context;
use hotel_ledger::{config::load_config, console::Console, store::hotel::Store};
use tokio::io::{self, BufReader};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;

    let level: tracing::Level = config
        .log_level()
        .parse()
        .with_context(|| format!("invalid log_level {:?}", config.log_level()))?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let store = Store::new(config.data_file());
    let mut console = Console::new(BufReader::new(io::stdin()), io::stdout(), store);
    console.start().await?;

    Ok(())
}
