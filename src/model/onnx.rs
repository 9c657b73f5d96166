//! ONNX Runtime inference. One input tensor per graph input, matched to row columns by name:
//! numeric columns as f32 [1, 1], text as string [1, 1]. The first output is the label.

use super::{Classifier, VerifiedArtifact};
use crate::error::{ConfigurationFault, InferenceError};
use crate::features::{column_kind, Column, ColumnKind, ColumnValue};
use ndarray::Array2;
use ort::session::{Session, SessionInputValue};
use ort::tensor::TensorElementType;
use ort::value::{Tensor, ValueType};
use std::borrow::Cow;
use std::path::Path;

/// Graph input as declared by the model: name and tensor element type, if it is a tensor.
#[derive(Debug, Clone, PartialEq)]
struct GraphInput {
    name: String,
    ty: Option<TensorElementType>,
}

pub struct OnnxClassifier {
    session: Session,
    input_names: Vec<String>,
}

impl OnnxClassifier {
    /// Build a session for a verified bundle. Every graph input must name a row column and
    /// declare the element type that column is fed as.
    pub fn load(artifact: &VerifiedArtifact) -> Result<Self, ConfigurationFault> {
        let path = artifact.model_path.as_path();
        let load_err = |reason: String| ConfigurationFault::ModelLoad {
            path: path.to_path_buf(),
            reason,
        };
        let session = Session::builder()
            .and_then(|b| b.commit_from_file(path))
            .map_err(|e| load_err(e.to_string()))?;

        let inputs: Vec<GraphInput> = session
            .inputs
            .iter()
            .map(|i| GraphInput {
                name: i.name.clone(),
                ty: match &i.input_type {
                    ValueType::Tensor { ty, .. } => Some(*ty),
                    _ => None,
                },
            })
            .collect();
        check_inputs(path, &inputs, &artifact.manifest.columns)?;
        if session.outputs.is_empty() {
            return Err(load_err("graph declares no outputs".to_string()));
        }

        tracing::info!(
            path = %path.display(),
            inputs = inputs.len(),
            outputs = session.outputs.len(),
            "ONNX model loaded"
        );
        Ok(Self {
            session,
            input_names: inputs.into_iter().map(|i| i.name).collect(),
        })
    }

    fn tensor_for(
        &self,
        name: &str,
        row: &[Column<'_>],
    ) -> Result<SessionInputValue<'static>, InferenceError> {
        let column = row
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| InferenceError(format!("row has no column for graph input {name}")))?;
        let value = match column.value {
            ColumnValue::Number(v) => {
                Tensor::<f32>::from_array(Array2::from_elem((1, 1), v as f32))
                    .map(|t| t.into_dyn())
            }
            ColumnValue::Text(t) => {
                Tensor::<String>::from_string_array(Array2::from_elem((1, 1), t.to_string()))
                    .map(|t| t.into_dyn())
            }
        };
        value
            .map(SessionInputValue::from)
            .map_err(|e| InferenceError(e.to_string()))
    }
}

fn expected_type(kind: ColumnKind) -> TensorElementType {
    match kind {
        ColumnKind::Text => TensorElementType::String,
        ColumnKind::Number => TensorElementType::Float32,
    }
}

fn check_inputs(
    path: &Path,
    inputs: &[GraphInput],
    columns: &[String],
) -> Result<(), ConfigurationFault> {
    if inputs.is_empty() {
        return Err(ConfigurationFault::ModelLoad {
            path: path.to_path_buf(),
            reason: "graph declares no inputs".to_string(),
        });
    }
    for input in inputs {
        let kind = column_kind(&input.name)
            .filter(|_| columns.contains(&input.name))
            .ok_or_else(|| {
                ConfigurationFault::SchemaMismatch(format!(
                    "graph input {} is not a feature column",
                    input.name
                ))
            })?;
        let expected = expected_type(kind);
        if input.ty != Some(expected) {
            return Err(ConfigurationFault::SchemaMismatch(format!(
                "graph input {} is {:?}, extractor feeds {:?}",
                input.name, input.ty, expected
            )));
        }
    }
    Ok(())
}

impl Classifier for OnnxClassifier {
    fn predict(&self, row: &[Column<'_>]) -> Result<i64, InferenceError> {
        let inputs = self
            .input_names
            .iter()
            .map(|name| Ok((Cow::from(name.as_str()), self.tensor_for(name, row)?)))
            .collect::<Result<Vec<_>, InferenceError>>()?;

        let outputs = self
            .session
            .run(inputs)
            .map_err(|e| InferenceError(e.to_string()))?;
        let (_, labels) = outputs[0]
            .try_extract_raw_tensor::<i64>()
            .map_err(|e| InferenceError(e.to_string()))?;
        labels
            .first()
            .copied()
            .ok_or_else(|| InferenceError("label tensor is empty".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FEATURE_COLUMNS;

    fn columns() -> Vec<String> {
        FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect()
    }

    fn input(name: &str, ty: TensorElementType) -> GraphInput {
        GraphInput {
            name: name.to_string(),
            ty: Some(ty),
        }
    }

    #[test]
    fn graph_inputs_must_be_columns() {
        let p = Path::new("m.onnx");
        let ok = vec![
            input("raw_text", TensorElementType::String),
            input("sentiment_score", TensorElementType::Float32),
        ];
        assert!(check_inputs(p, &ok, &columns()).is_ok());

        let bad = vec![input("sender_length", TensorElementType::Float32)];
        assert!(matches!(
            check_inputs(p, &bad, &columns()),
            Err(ConfigurationFault::SchemaMismatch(_))
        ));
        assert!(check_inputs(p, &[], &columns()).is_err());
    }

    #[test]
    fn graph_input_types_must_match_columns() {
        let p = Path::new("m.onnx");
        let int_count = vec![input("phishing_keyword_count", TensorElementType::Int64)];
        assert!(matches!(
            check_inputs(p, &int_count, &columns()),
            Err(ConfigurationFault::SchemaMismatch(m)) if m.contains("phishing_keyword_count")
        ));

        let float_text = vec![input("raw_text", TensorElementType::Float32)];
        assert!(matches!(
            check_inputs(p, &float_text, &columns()),
            Err(ConfigurationFault::SchemaMismatch(_))
        ));

        let not_tensor = vec![GraphInput {
            name: "sentiment_score".to_string(),
            ty: None,
        }];
        assert!(check_inputs(p, &not_tensor, &columns()).is_err());
    }
}
