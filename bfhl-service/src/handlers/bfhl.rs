//! The multiplexed `/bfhl` endpoint.
//!
//! The body's sole key picks one of five behaviors; four are pure arithmetic
//! and one forwards the prompt to the configured text provider. Validation
//! happens in [`BfhlRequest::parse`], so each arm below only sees payloads of
//! the right shape.

use crate::models::{BfhlRequest, Envelope};
use crate::services::math::{fibonacci, gcd, is_prime, lcm};
use crate::startup::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use service_core::error::AppError;

/// Returned for AI replies that contain no usable token.
const FALLBACK_ANSWER: &str = "No answer";

/// POST /bfhl
pub async fn dispatch(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Envelope>, AppError> {
    let request = BfhlRequest::parse(&body)?;

    let data = match request {
        BfhlRequest::Fibonacci(n) => {
            let terms = fibonacci(n)
                .ok_or_else(|| anyhow::anyhow!("fibonacci term exceeds u64 range (n = {n})"))?;
            json!(terms)
        }
        BfhlRequest::Prime(values) => {
            let primes: Vec<Value> = values
                .iter()
                .filter_map(Value::as_i64)
                .filter(|&n| is_prime(n))
                .map(Value::from)
                .collect();
            Value::Array(primes)
        }
        BfhlRequest::Lcm(nums) => json!(reduce_lcm(&nums)?),
        BfhlRequest::Hcf(nums) => json!(reduce_hcf(&nums)),
        BfhlRequest::Ai(prompt) => {
            let response = state.text_provider.generate(&prompt).await.map_err(|e| {
                tracing::error!(error = %e, "Gemini request failed");
                AppError::Upstream("AI service failed".to_string())
            })?;

            let answer = response.text.unwrap_or_default();
            let first_token = answer.split_whitespace().next().unwrap_or(FALLBACK_ANSWER);
            json!(first_token)
        }
    };

    Ok(Json(Envelope::success(
        &state.config.service.official_email,
        data,
    )))
}

/// Left-to-right LCM reduction; a single element is returned unchanged.
/// The parser guarantees a non-empty slice.
fn reduce_lcm(nums: &[i64]) -> Result<i64, AppError> {
    let (first, rest) = nums
        .split_first()
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("empty array reached lcm reduction")))?;
    rest.iter().try_fold(*first, |acc, &n| {
        lcm(acc, n).ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!("lcm reduction overflowed i64 at {acc} x {n}"))
        })
    })
}

/// Left-to-right GCD reduction; a single element is returned unchanged.
fn reduce_hcf(nums: &[i64]) -> i64 {
    let mut iter = nums.iter().copied();
    let first = iter.next().unwrap_or(0);
    iter.fold(first, gcd)
}
