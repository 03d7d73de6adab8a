use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;
use ndarray::ArrayD;
use serde_json::Value;

use crate::predictor::Predictor;

/// Mount point the host provisions read/write for model artifacts.
pub const MODEL_ROOT: &str = "/mnt/model";

/// Identity scoring model.
///
/// Placeholder wired into the host until a trained model replaces it; loads
/// nothing and echoes its input. Deployment parameters arrive later from the
/// host, so construction takes no arguments.
pub struct MlScore {
    root_path: PathBuf,
}

impl MlScore {
    pub fn new() -> Self {
        info!("initializing, model store at {MODEL_ROOT}");
        Self {
            root_path: PathBuf::from(MODEL_ROOT),
        }
    }

    /// Directory future model artifacts are loaded from. Unused for now.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }
}

impl Default for MlScore {
    fn default() -> Self {
        Self::new()
    }
}

impl Predictor for MlScore {
    fn predict(
        &self,
        features: ArrayD<f64>,
        _names: &[String],
        _meta: &[Value],
    ) -> Result<ArrayD<f64>> {
        info!("predict called, running identity function");
        Ok(features)
    }
}
