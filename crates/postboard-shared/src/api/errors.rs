use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::ValidationErrors;

/// One entry of the `errors` array returned for 4xx responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl ApiError {
    pub fn msg(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: None,
            location: None,
            value: None,
        }
    }

    pub fn field(param: impl Into<String>, msg: impl Into<String>, value: Value) -> Self {
        Self {
            msg: msg.into(),
            param: Some(param.into()),
            location: Some("body".to_string()),
            value: Some(value),
        }
    }

    /// Flattens validator output into one entry per failed rule, ordered by
    /// field name so responses are stable.
    pub fn from_validation(errors: &ValidationErrors) -> Vec<Self> {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        fields
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |e| {
                    let msg = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {}", field));
                    let value = e.params.get("value").cloned().unwrap_or(Value::Null);
                    ApiError::field(field.clone(), msg, value)
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub errors: Vec<ApiError>,
}

impl ErrorBody {
    pub fn single(msg: impl Into<String>) -> Self {
        Self {
            errors: vec![ApiError::msg(msg)],
        }
    }
}
