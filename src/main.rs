use adapter_registry::{AdapterFactoryManager, Config};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Validate an adapter configuration and list its factories")]
struct Args {
    /// Path to the YAML configuration file
    config: PathBuf,
}

fn print_registry(manager: &AdapterFactoryManager) {
    let mut ids: Vec<&str> = manager.ids().collect();
    ids.sort_unstable();
    for id in ids {
        if let Some(factory) = manager.get(id) {
            match factory.server_address() {
                Some(addr) => println!("{}: {} {}", id, factory.protocol_type(), addr),
                None => println!("{}: {}", id, factory.protocol_type()),
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_file(&args.config)?;
    // RUST_LOG, when set, overrides the configured level.
    env_logger::Builder::new()
        .filter_level(config.log().level.to_level_filter())
        .parse_default_env()
        .init();
    let manager = config
        .build_adapter_factory_manager()
        .with_context(|| format!("invalid adapters in {}", args.config.display()))?;
    print_registry(&manager);
    Ok(())
}
