//! Embeddable scoring component for model-serving hosts.
//!
//! A host instantiates [`MlScore`] and drives it through the [`Predictor`]
//! trait once per inference request. The current model is the identity
//! function; replace the `predict` body once a trained artifact is mounted
//! under [`model::MODEL_ROOT`].

pub mod model;
pub mod predictor;

pub use model::MlScore;
pub use predictor::{features_from_json, features_to_json, Predictor};
