//! Classifier artifact: a versioned JSON decision forest.
//!
//! Loaded once at process start and shared read-only (`Arc`) by all
//! requests. Load errors distinguish a missing/corrupt file from an
//! artifact whose format version this build cannot read, so operators get
//! an actionable diagnostic instead of a bare parse failure.

mod predict;

pub use predict::{PredictError, Predictor};

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::features::{FEATURE_COUNT, FEATURE_NAMES};

/// Artifact format tag expected in the JSON header.
pub const ARTIFACT_FORMAT: &str = "linkscan-forest";

/// Format versions this build can load.
pub const SUPPORTED_FORMAT_VERSIONS: &[u32] = &[1];

/// One node of a decision tree, flat-array encoded. A leaf carries `class`
/// and nothing else; an internal node carries `feature`, `threshold`, and
/// both child indices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature: Option<usize>,
    #[serde(default)]
    pub threshold: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<usize>,
}

/// A single decision tree; node 0 is the root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

/// The loadable artifact: header plus the tree ensemble.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestModel {
    pub format: String,
    pub format_version: u32,
    #[serde(default)]
    pub model_id: String,
    pub n_classes: usize,
    #[serde(default)]
    pub feature_names: Vec<String>,
    pub trees: Vec<DecisionTree>,
}

impl ForestModel {
    /// Loads and validates an artifact from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let data = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&data)
    }

    /// Parses and validates an artifact from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let model: Self = serde_json::from_str(json).map_err(ModelError::Parse)?;
        model.check_format()?;
        model.validate()?;
        Ok(model)
    }

    fn check_format(&self) -> Result<(), ModelError> {
        if self.format != ARTIFACT_FORMAT {
            return Err(ModelError::Format {
                detail: format!(
                    "unknown artifact format {:?} (expected {:?})",
                    self.format, ARTIFACT_FORMAT
                ),
            });
        }
        if !SUPPORTED_FORMAT_VERSIONS.contains(&self.format_version) {
            return Err(ModelError::Format {
                detail: format!(
                    "artifact format version {} is not supported by this build (supported: {:?})",
                    self.format_version, SUPPORTED_FORMAT_VERSIONS
                ),
            });
        }
        Ok(())
    }

    /// Structural validation: column schema, tree shape, child bounds.
    /// Leaf class values are deliberately NOT checked against the label
    /// table here; mapping the predicted index to a label is the service's
    /// responsibility.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.trees.is_empty() {
            return Err(ModelError::Validate("artifact contains no trees".to_string()));
        }
        if !self.feature_names.is_empty() && self.feature_names != FEATURE_NAMES {
            return Err(ModelError::Validate(format!(
                "artifact feature columns do not match this build's schema ({} columns expected)",
                FEATURE_COUNT
            )));
        }
        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(ModelError::Validate(format!("tree {t} has no nodes")));
            }
            for (i, node) in tree.nodes.iter().enumerate() {
                if node.class.is_some() {
                    continue;
                }
                let feature = node.feature.ok_or_else(|| {
                    ModelError::Validate(format!("tree {t} node {i}: neither leaf nor split"))
                })?;
                if feature >= FEATURE_COUNT {
                    return Err(ModelError::Validate(format!(
                        "tree {t} node {i}: feature index {feature} out of range"
                    )));
                }
                if !node.threshold.is_finite() {
                    return Err(ModelError::Validate(format!(
                        "tree {t} node {i}: non-finite threshold {}",
                        node.threshold
                    )));
                }
                for (side, child) in [("left", node.left), ("right", node.right)] {
                    match child {
                        Some(c) if c < tree.nodes.len() => {}
                        Some(c) => {
                            return Err(ModelError::Validate(format!(
                                "tree {t} node {i}: {side} child {c} out of bounds"
                            )))
                        }
                        None => {
                            return Err(ModelError::Validate(format!(
                                "tree {t} node {i}: split is missing its {side} child"
                            )))
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Operator-facing summary for `linkscan model inspect`.
    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            model_id: self.model_id.clone(),
            format_version: self.format_version,
            n_classes: self.n_classes,
            tree_count: self.trees.len(),
            node_count: self.trees.iter().map(|t| t.nodes.len()).sum(),
        }
    }
}

/// Summary fields printed by the ops CLI.
#[derive(Debug, Clone, Serialize)]
pub struct ModelSummary {
    pub model_id: String,
    pub format_version: u32,
    pub n_classes: usize,
    pub tree_count: usize,
    pub node_count: usize,
}

/// Artifact load/validation failure. `Io` and `Parse` mean the file is
/// missing or corrupt; `Format` means the file is readable but this build
/// cannot interpret it; `Validate` means the decoded structure is unsound.
#[derive(Debug)]
pub enum ModelError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
    Format { detail: String },
    Validate(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Io { path, source } => {
                write!(f, "cannot read artifact {}: {}", path.display(), source)
            }
            ModelError::Parse(e) => write!(f, "artifact is not valid JSON: {}", e),
            ModelError::Format { detail } => write!(
                f,
                "{detail}; re-export the model in a supported format version or upgrade linkscan"
            ),
            ModelError::Validate(detail) => write!(f, "artifact failed validation: {detail}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Io { source, .. } => Some(source),
            ModelError::Parse(e) => Some(e),
            ModelError::Format { .. } | ModelError::Validate(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn leaf(class: usize) -> TreeNode {
        TreeNode {
            feature: None,
            threshold: 0.0,
            left: None,
            right: None,
            class: Some(class),
        }
    }

    fn split(feature: usize, threshold: f64, left: usize, right: usize) -> TreeNode {
        TreeNode {
            feature: Some(feature),
            threshold,
            left: Some(left),
            right: Some(right),
            class: None,
        }
    }

    fn sample_model() -> ForestModel {
        ForestModel {
            format: ARTIFACT_FORMAT.to_string(),
            format_version: 1,
            model_id: "test-forest".to_string(),
            n_classes: 4,
            feature_names: Vec::new(),
            trees: vec![DecisionTree {
                nodes: vec![split(0, 30.0, 1, 2), leaf(0), leaf(2)],
            }],
        }
    }

    #[test]
    fn json_roundtrip_loads() {
        let json = serde_json::to_string(&sample_model()).unwrap();
        let model = ForestModel::from_json(&json).unwrap();
        assert_eq!(model.trees.len(), 1);
        assert_eq!(model.summary().node_count, 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ForestModel::from_file(Path::new("/nonexistent/model.json")).unwrap_err();
        assert!(matches!(err, ModelError::Io { .. }));
    }

    #[test]
    fn truncated_json_is_parse_error() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"{\"format\": \"linkscan-fo").unwrap();
        f.flush().unwrap();
        let err = ForestModel::from_file(f.path()).unwrap_err();
        assert!(matches!(err, ModelError::Parse(_)));
    }

    #[test]
    fn unsupported_format_version_names_supported_ones() {
        let mut model = sample_model();
        model.format_version = 99;
        let json = serde_json::to_string(&model).unwrap();
        let err = ForestModel::from_json(&json).unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, ModelError::Format { .. }));
        assert!(msg.contains("99"), "message: {msg}");
        assert!(msg.contains("[1]"), "message: {msg}");
        assert!(msg.contains("re-export"), "message: {msg}");
    }

    #[test]
    fn wrong_format_tag_rejected() {
        let mut model = sample_model();
        model.format = "joblib".to_string();
        let json = serde_json::to_string(&model).unwrap();
        assert!(matches!(
            ForestModel::from_json(&json).unwrap_err(),
            ModelError::Format { .. }
        ));
    }

    #[test]
    fn child_out_of_bounds_rejected() {
        let mut model = sample_model();
        model.trees[0].nodes[0].right = Some(7);
        assert!(matches!(model.validate().unwrap_err(), ModelError::Validate(_)));
    }

    #[test]
    fn feature_index_out_of_range_rejected() {
        let mut model = sample_model();
        model.trees[0].nodes[0].feature = Some(crate::features::FEATURE_COUNT);
        assert!(matches!(model.validate().unwrap_err(), ModelError::Validate(_)));
    }

    #[test]
    fn empty_forest_rejected() {
        let mut model = sample_model();
        model.trees.clear();
        assert!(matches!(model.validate().unwrap_err(), ModelError::Validate(_)));
    }

    #[test]
    fn mismatched_feature_names_rejected() {
        let mut model = sample_model();
        model.feature_names = vec!["url_len".to_string()];
        assert!(matches!(model.validate().unwrap_err(), ModelError::Validate(_)));
    }

    #[test]
    fn leaf_class_above_label_table_is_not_a_load_error() {
        // Bounds-checking the class against the label table is the
        // service's job, not the loader's.
        let mut model = sample_model();
        model.trees[0].nodes[1].class = Some(99);
        assert!(model.validate().is_ok());
    }
}
