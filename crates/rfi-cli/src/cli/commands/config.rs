//! `rfi config` – show the effective configuration.

use anyhow::Result;
use rfi_core::config::{self, RfiConfig, TransferConfig};

pub fn run_config(cfg: &RfiConfig) -> Result<()> {
    println!("config file: {}", config::config_path()?.display());
    println!("staging_prefix = {:?}", cfg.staging_prefix);
    let transfer = cfg.transfer.clone().unwrap_or_else(TransferConfig::default);
    println!(
        "transfer.endpoint = {}",
        transfer.endpoint.as_deref().unwrap_or("(unset)")
    );
    println!("transfer.connect_timeout_secs = {}", transfer.connect_timeout_secs);
    println!("transfer.timeout_secs = {}", transfer.timeout_secs);
    Ok(())
}
