//! `linkscan classify <url>` – one-shot in-process classification.

use anyhow::Result;
use linkscan_core::config::LinkscanConfig;
use linkscan_core::service::Service;
use std::path::PathBuf;
use std::sync::Arc;

use super::load_artifact;

pub fn run_classify(cfg: &LinkscanConfig, url: &str, model_flag: Option<PathBuf>) -> Result<()> {
    let artifact = load_artifact(cfg, model_flag)?;
    let service = Service::new(Arc::new(artifact));

    match service.classify_url(url) {
        Ok(resp) => {
            println!("{}", serde_json::to_string_pretty(&resp)?);
            Ok(())
        }
        Err(err) => {
            println!("{}", serde_json::to_string_pretty(&err.to_error_response())?);
            anyhow::bail!("classification failed: {err}")
        }
    }
}
