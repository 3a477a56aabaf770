//! Wire types for the bfhl service.
//!
//! The request body is parsed into [`BfhlRequest`] at the boundary so that
//! handler logic never inspects raw JSON values.

use serde::Serialize;
use serde_json::Value;
use service_core::error::AppError;

/// Uniform success wrapper returned by every endpoint.
///
/// Failure responses are rendered by [`AppError`] and carry
/// `{is_success: false, error}` with no email field.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub is_success: bool,
    pub official_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    /// Success envelope with a payload, as returned by `/bfhl`.
    pub fn success(official_email: &str, data: Value) -> Self {
        Self {
            is_success: true,
            official_email: official_email.to_string(),
            data: Some(data),
        }
    }

    /// Payload-less success envelope, as returned by `/health`.
    pub fn ok(official_email: &str) -> Self {
        Self {
            is_success: true,
            official_email: official_email.to_string(),
            data: None,
        }
    }
}

/// A validated `/bfhl` request: the body's sole key selects the variant and
/// its value has already been checked against the handler's payload type.
#[derive(Debug, Clone, PartialEq)]
pub enum BfhlRequest {
    /// Number of sequence terms requested, at least 1.
    Fibonacci(u64),
    /// Raw array elements; non-integer entries are dropped by the handler,
    /// not rejected here.
    Prime(Vec<Value>),
    /// Non-empty list of integers to reduce by least common multiple.
    Lcm(Vec<i64>),
    /// Non-empty list of integers to reduce by greatest common divisor.
    Hcf(Vec<i64>),
    /// Free-text prompt forwarded to the text provider.
    Ai(String),
}

impl BfhlRequest {
    /// Parse a request body.
    ///
    /// The body must be a JSON object with exactly one key; anything else is
    /// a 422. Per-key payload violations are 400s with the messages listed
    /// in the endpoint contract.
    pub fn parse(body: &Value) -> Result<Self, AppError> {
        let entry = body
            .as_object()
            .filter(|object| object.len() == 1)
            .and_then(|object| object.iter().next());

        let (key, value) = match entry {
            Some(entry) => entry,
            None => {
                return Err(AppError::UnprocessableEntity(
                    "Exactly one key is required".to_string(),
                ))
            }
        };

        match key.as_str() {
            "fibonacci" => value
                .as_u64()
                .filter(|&n| n >= 1)
                .map(BfhlRequest::Fibonacci)
                .ok_or_else(|| {
                    AppError::BadRequest("Fibonacci value must be a positive integer".to_string())
                }),
            "prime" => value
                .as_array()
                .cloned()
                .map(BfhlRequest::Prime)
                .ok_or_else(|| AppError::BadRequest("Prime input must be an array".to_string())),
            "lcm" => integer_array(value, "LCM input must be a non-empty array")
                .map(BfhlRequest::Lcm),
            "hcf" => integer_array(value, "HCF input must be a non-empty array")
                .map(BfhlRequest::Hcf),
            "AI" => value
                .as_str()
                .map(|prompt| BfhlRequest::Ai(prompt.to_string()))
                .ok_or_else(|| AppError::BadRequest("AI input must be a string".to_string())),
            _ => Err(AppError::BadRequest("Invalid key".to_string())),
        }
    }
}

/// Reject anything that is not a non-empty array of integers.
fn integer_array(value: &Value, message: &str) -> Result<Vec<i64>, AppError> {
    value
        .as_array()
        .filter(|items| !items.is_empty())
        .and_then(|items| {
            items
                .iter()
                .map(Value::as_i64)
                .collect::<Option<Vec<i64>>>()
        })
        .ok_or_else(|| AppError::BadRequest(message.to_string()))
}
