use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use super::backend::PlotBackend;

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("Could not parse style sheet: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RcValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl From<bool> for RcValue {
    fn from(v: bool) -> Self {
        RcValue::Bool(v)
    }
}

impl From<f64> for RcValue {
    fn from(v: f64) -> Self {
        RcValue::Number(v)
    }
}

impl From<&str> for RcValue {
    fn from(v: &str) -> Self {
        RcValue::Text(v.to_owned())
    }
}

impl From<Vec<String>> for RcValue {
    fn from(v: Vec<String>) -> Self {
        RcValue::List(v)
    }
}

/// Global style parameters, keyed like `font.family`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RcParams(BTreeMap<String, RcValue>);

impl RcParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computer Modern serif fonts with LaTeX rendering all text
    pub fn latex() -> Self {
        let mut params = Self::new();
        params.insert("text.usetex", true);
        params.insert("font.family", "serif");
        params.insert(
            "font.sans-serif",
            vec!["Computer Modern Roman".to_string()],
        );
        params
    }

    /// Parses a style sheet mapping keys to values, e.g.
    ///
    /// ```yaml
    /// font.size: 12
    /// axes.grid: true
    /// ```
    pub fn from_yaml(contents: &str) -> Result<Self, StyleError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn insert<V: Into<RcValue>>(&mut self, key: &str, value: V) -> Option<RcValue> {
        self.0.insert(key.to_owned(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&RcValue> {
        self.0.get(key)
    }

    /// Overrides entries with those of `other`
    pub fn merge(&mut self, other: &RcParams) {
        self.0
            .extend(other.0.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RcValue)> {
        self.0.iter()
    }
}

pub fn use_style<B: PlotBackend>(backend: &mut B, params: &RcParams) {
    log::debug!("Updating {} style parameters", params.len());
    backend.update_rc(params);
}

/// Switches the backend to Computer Modern fonts with LaTeX math rendering.
pub fn use_latex_style<B: PlotBackend>(backend: &mut B) {
    use_style(backend, &RcParams::latex());
}
