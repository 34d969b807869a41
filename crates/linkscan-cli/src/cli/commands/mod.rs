//! CLI command handlers. Each command is in its own file for clarity.

mod classify;
mod health;
mod model;
mod serve;

pub use classify::run_classify;
pub use health::run_health;
pub use model::{run_model_check, run_model_inspect};
pub use serve::run_serve;

use anyhow::{Context, Result};
use linkscan_core::config::{self, LinkscanConfig};
use linkscan_core::model::ForestModel;
use std::path::PathBuf;

/// Resolves the artifact path (flag > config > XDG default) and loads it.
/// A load failure here is fatal to the invoking command: the service must
/// not start serving without a model, and the `ModelError` display carries
/// the remediation hint for format mismatches.
pub(super) fn load_artifact(cfg: &LinkscanConfig, flag: Option<PathBuf>) -> Result<ForestModel> {
    let path = match flag.or_else(|| cfg.model_path.clone()) {
        Some(p) => p,
        None => config::default_model_path()?,
    };
    let model = ForestModel::from_file(&path)
        .with_context(|| format!("failed to load classifier artifact from {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        model_id = %model.model_id,
        trees = model.trees.len(),
        "classifier artifact loaded"
    );
    Ok(model)
}

/// Resolves the serving socket path (flag > config > XDG default).
pub(super) fn resolve_socket(cfg: &LinkscanConfig, flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag.or_else(|| cfg.socket_path.clone()) {
        Some(p) => Ok(p),
        None => config::default_socket_path(),
    }
}
