//! `linkscan model check|inspect` – artifact utilities for operators.

use anyhow::{Context, Result};
use linkscan_core::model::ForestModel;
use std::path::Path;

pub fn run_model_check(path: &Path) -> Result<()> {
    let model = ForestModel::from_file(path)
        .with_context(|| format!("artifact {} failed validation", path.display()))?;
    let s = model.summary();
    println!(
        "OK: {} (format v{}, {} trees, {} nodes, {} classes)",
        if s.model_id.is_empty() { "<unnamed>" } else { s.model_id.as_str() },
        s.format_version,
        s.tree_count,
        s.node_count,
        s.n_classes
    );
    Ok(())
}

pub fn run_model_inspect(path: &Path) -> Result<()> {
    let model = ForestModel::from_file(path)
        .with_context(|| format!("cannot load artifact {}", path.display()))?;
    let s = model.summary();
    println!(
        "{:<16} {}",
        "model_id",
        if s.model_id.is_empty() { "<unnamed>" } else { s.model_id.as_str() }
    );
    println!("{:<16} {}", "format_version", s.format_version);
    println!("{:<16} {}", "classes", s.n_classes);
    println!("{:<16} {}", "trees", s.tree_count);
    println!("{:<16} {}", "nodes", s.node_count);
    if !model.feature_names.is_empty() {
        println!("{:<16} {}", "features", model.feature_names.join(", "));
    }
    Ok(())
}
