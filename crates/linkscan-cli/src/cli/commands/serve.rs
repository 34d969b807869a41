//! `linkscan serve` – load the artifact and serve the classification socket.

use anyhow::Result;
use linkscan_core::config::LinkscanConfig;
use linkscan_core::service::Service;
use std::path::PathBuf;
use std::sync::Arc;

use super::{load_artifact, resolve_socket};
use crate::cli::socket;

pub async fn run_serve(
    cfg: &LinkscanConfig,
    socket_flag: Option<PathBuf>,
    model_flag: Option<PathBuf>,
) -> Result<()> {
    // Load-or-fail before binding: the process must not accept a single
    // request without a loaded model.
    let artifact = load_artifact(cfg, model_flag)?;
    let service = Arc::new(Service::new(Arc::new(artifact)));

    let socket_path = resolve_socket(cfg, socket_flag)?;
    socket::serve(service, &socket_path).await
}
