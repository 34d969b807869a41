//! The predictor capability: feature vector in, label index out.

use std::collections::BTreeMap;
use std::fmt;

use crate::features::FeatureVector;
use crate::model::{DecisionTree, ForestModel};

/// Opaque prediction capability. Deterministic for a fixed artifact and
/// column order; implementations never mutate shared state, so one instance
/// is shared read-only across all concurrent requests.
pub trait Predictor {
    fn predict(&self, features: &FeatureVector) -> Result<usize, PredictError>;
}

/// Inference failure inside the predictor. Structural problems can only
/// arise from artifacts constructed without going through validation.
#[derive(Debug)]
pub enum PredictError {
    EmptyForest,
    MalformedTree { tree: usize, node: usize },
    WalkExceeded { tree: usize },
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::EmptyForest => write!(f, "forest has no trees"),
            PredictError::MalformedTree { tree, node } => {
                write!(f, "malformed node {node} in tree {tree}")
            }
            PredictError::WalkExceeded { tree } => {
                write!(f, "tree {tree} walk exceeded node count (cycle?)")
            }
        }
    }
}

impl std::error::Error for PredictError {}

impl ForestModel {
    /// Walks one tree root→leaf. Split rule: `value <= threshold` goes left.
    fn tree_class(&self, tree_idx: usize, tree: &DecisionTree, features: &FeatureVector) -> Result<usize, PredictError> {
        let values = features.values();
        let mut node_idx = 0usize;
        let mut steps = 0usize;
        loop {
            let node = tree.nodes.get(node_idx).ok_or(PredictError::MalformedTree {
                tree: tree_idx,
                node: node_idx,
            })?;
            if let Some(class) = node.class {
                return Ok(class);
            }
            let feature = node.feature.ok_or(PredictError::MalformedTree {
                tree: tree_idx,
                node: node_idx,
            })?;
            let value = *values.get(feature).ok_or(PredictError::MalformedTree {
                tree: tree_idx,
                node: node_idx,
            })? as f64;
            node_idx = if value <= node.threshold {
                node.left
            } else {
                node.right
            }
            .ok_or(PredictError::MalformedTree {
                tree: tree_idx,
                node: node_idx,
            })?;
            steps += 1;
            if steps > tree.nodes.len() {
                return Err(PredictError::WalkExceeded { tree: tree_idx });
            }
        }
    }
}

impl Predictor for ForestModel {
    /// Majority vote across trees; ties break to the lowest class index
    /// (argmax-first behavior).
    fn predict(&self, features: &FeatureVector) -> Result<usize, PredictError> {
        if self.trees.is_empty() {
            return Err(PredictError::EmptyForest);
        }
        let mut votes: BTreeMap<usize, usize> = BTreeMap::new();
        for (i, tree) in self.trees.iter().enumerate() {
            let class = self.tree_class(i, tree, features)?;
            *votes.entry(class).or_default() += 1;
        }
        let mut best: Option<(usize, usize)> = None;
        for (&class, &count) in &votes {
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((class, count));
            }
        }
        // votes is non-empty because trees is non-empty
        best.map(|(class, _)| class).ok_or(PredictError::EmptyForest)
    }
}
