//! `linkscan health` – probe a running server for liveness.

use anyhow::Result;
use linkscan_core::config::LinkscanConfig;
use std::path::PathBuf;

use super::resolve_socket;
use crate::cli::socket;

pub async fn run_health(cfg: &LinkscanConfig, socket_flag: Option<PathBuf>) -> Result<()> {
    let path = resolve_socket(cfg, socket_flag)?;
    let reply = socket::send_request(&path, r#"{"op":"health"}"#).await?;
    println!("{reply}");
    Ok(())
}
