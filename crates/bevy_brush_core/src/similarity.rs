//! Similarity groups of interchangeable decoration templates

use serde::{Deserialize, Serialize};

/// A fixed partition of template names into visually interchangeable sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimilarityGroups {
    groups: Vec<Vec<String>>,
}

impl Default for SimilarityGroups {
    /// Trees and crate clutter
    fn default() -> Self {
        Self::new(vec![
            names(&["t01", "t02", "t05", "t06", "t07", "t08", "tc01", "tc03", "tc04"]),
            names(&["t10", "t11", "t12", "t13", "t14", "t15"]),
            names(&[
                "boxes01", "boxes02", "boxes03", "boxes04", "boxes05", "boxes06", "boxes07",
                "boxes08", "boxes09",
            ]),
        ])
    }
}

fn names(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

impl SimilarityGroups {
    pub fn new(groups: Vec<Vec<String>>) -> Self {
        Self { groups }
    }

    /// No groups; substitution never happens
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// The first group listing `name`
    pub fn group_containing(&self, name: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|group| group.iter().any(|member| member == name))
            .map(Vec::as_slice)
    }

    pub fn groups(&self) -> &[Vec<String>] {
        &self.groups
    }
}
