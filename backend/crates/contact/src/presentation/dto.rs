//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::application::SubmitContactInput;

/// Request body for POST /api/contact
///
/// Every field is optional at this layer; defaults and token checks are
/// applied by the use case. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default, deserialize_with = "truthy_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub token: Option<String>,
}

impl From<ContactRequest> for SubmitContactInput {
    fn from(req: ContactRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            message: req.message,
            token: req.token,
        }
    }
}

/// Accept any JSON value for a text field.
///
/// `null`, `false`, `0` and `""` count as absent. Other scalars are
/// stringified; arrays and objects keep their JSON text.
fn truthy_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    };
    Ok(text)
}
