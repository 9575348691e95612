use anyhow::Result;
use idiom_tools::{PathConfig, run_normalize};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> Result<()> {
    env_logger::init();
    // paths are relative to the working directory
    let config = PathConfig::default();
    run_normalize(&config)?;
    Ok(())
}
