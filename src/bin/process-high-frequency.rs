use anyhow::Result;
use idiom_tools::{PathConfig, run_high_frequency};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> Result<()> {
    env_logger::init();
    // reads the output of `normalize-raw`, run that first
    let config = PathConfig::default();
    run_high_frequency(&config)?;
    Ok(())
}
