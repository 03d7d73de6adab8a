use anyhow::{bail, Context, Result};
use ndarray::{ArrayD, IxDyn};
use serde_json::Value;

/// Per-request inference interface a model-serving host drives.
///
/// Implement this trait to plug a model into the host without coupling it to
/// any concrete model runtime. The host constructs the model, calls
/// [`predict`](Predictor::predict) once per request, and serializes the
/// returned features itself.
pub trait Predictor: Send + Sync {
    /// Score a batch of feature vectors.
    ///
    /// `names` carries optional feature names and `meta` optional request
    /// metadata; both may be ignored by the model.
    fn predict(
        &self,
        features: ArrayD<f64>,
        names: &[String],
        meta: &[Value],
    ) -> Result<ArrayD<f64>>;

    /// Raw-mode entry point: the host hands over the decoded JSON payload
    /// without converting it to an array first.
    ///
    /// The default mirrors the host's own auto-conversion, so models that
    /// only implement [`predict`](Predictor::predict) behave identically in
    /// both modes.
    fn predict_raw(&self, features: Value, names: &[String], meta: &[Value]) -> Result<Value> {
        let array = features_from_json(&features)?;
        let output = self.predict(array, names, meta)?;
        Ok(features_to_json(&output))
    }
}

/// Decode a JSON feature payload into a dynamic-dimension array.
///
/// Accepts a sequence of numbers (1-D) or a nested sequence of equal-length
/// numeric rows (2-D).
pub fn features_from_json(value: &Value) -> Result<ArrayD<f64>> {
    match value {
        Value::Array(items) if items.iter().all(Value::is_number) => {
            let data = items
                .iter()
                .map(cell_value)
                .collect::<Result<Vec<_>>>()?;
            ArrayD::from_shape_vec(IxDyn(&[data.len()]), data)
                .context("failed to shape 1-D feature payload")
        }
        Value::Array(rows) if rows.iter().all(Value::is_array) => {
            let mut width = None;
            let mut data = Vec::new();
            for (index, row) in rows.iter().enumerate() {
                let Some(cells) = row.as_array() else {
                    bail!("row {index} is not a sequence");
                };
                match width {
                    None => width = Some(cells.len()),
                    Some(expected) if expected != cells.len() => {
                        bail!(
                            "row {index} has {} values, expected {expected}",
                            cells.len()
                        );
                    }
                    Some(_) => {}
                }
                for cell in cells {
                    data.push(cell_value(cell)?);
                }
            }
            let shape = [rows.len(), width.unwrap_or(0)];
            ArrayD::from_shape_vec(IxDyn(&shape), data)
                .context("failed to shape 2-D feature payload")
        }
        other => bail!("features must be a sequence or nested sequence of numbers, got {other}"),
    }
}

/// Encode an array of features back into the JSON shape the host serializes.
pub fn features_to_json(array: &ArrayD<f64>) -> Value {
    match array.ndim() {
        0 => array.first().copied().map(Value::from).unwrap_or(Value::Null),
        1 => Value::Array(array.iter().copied().map(Value::from).collect()),
        _ => Value::Array(
            array
                .outer_iter()
                .map(|row| features_to_json(&row.to_owned()))
                .collect(),
        ),
    }
}

fn cell_value(cell: &Value) -> Result<f64> {
    match cell.as_f64() {
        Some(number) => Ok(number),
        None => bail!("feature values must be numeric, got {cell}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_flat_sequence() {
        let array = features_from_json(&json!([1.0, 2.0, 3.0])).expect("decode");
        assert_eq!(array.shape(), &[3]);
        assert_eq!(array.as_slice(), Some([1.0, 2.0, 3.0].as_slice()));
    }

    #[test]
    fn decodes_nested_sequence() {
        let array = features_from_json(&json!([[1, 2], [3, 4], [5, 6]])).expect("decode");
        assert_eq!(array.shape(), &[3, 2]);
        assert_eq!(array[[2, 1]], 6.0);
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = features_from_json(&json!([[1, 2], [3]])).unwrap_err();
        assert!(err.to_string().contains("expected 2"));
    }

    #[test]
    fn rejects_non_numeric_values() {
        assert!(features_from_json(&json!(["a", "b"])).is_err());
        assert!(features_from_json(&json!([[1, "b"]])).is_err());
    }

    #[test]
    fn rejects_non_sequence_payloads() {
        assert!(features_from_json(&json!({"X": [1]})).is_err());
        assert!(features_from_json(&json!(5)).is_err());
    }

    #[test]
    fn encodes_nested_shape() {
        let array = features_from_json(&json!([[0.5, 1.5]])).expect("decode");
        assert_eq!(features_to_json(&array), json!([[0.5, 1.5]]));
    }
}
