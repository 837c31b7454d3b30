//! Generic REST gateway client.
//!
//! One network round trip per call: no retry, no timeout, no caching here
//! (staleness is the query cache's job). Attaches the bearer token when one
//! is persisted, serializes bodies as JSON and normalizes failures into
//! [`ApiError`].

use contracts::shared::envelope::ApiEnvelope;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_base::api_url;
use crate::system::auth::storage;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Non-2xx HTTP status. `message` is extracted from the payload's
    /// `message` field when the body is JSON.
    Http {
        status: u16,
        message: String,
        payload: Option<serde_json::Value>,
    },
    /// HTTP 2xx but the envelope's success flag is false.
    Business { code: i32, message: String },
    /// The request never produced a response.
    Network(String),
    /// The response body could not be decoded.
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401 | 403, .. })
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Http {
                status, message, ..
            } => write!(f, "请求失败 ({}): {}", status, message),
            ApiError::Business { message, .. } => write!(f, "{}", message),
            ApiError::Network(e) => write!(f, "网络错误: {}", e),
            ApiError::Decode(e) => write!(f, "响应解析失败: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

/// Serialize query parameters, omitting `None` fields.
pub fn build_query<P: Serialize>(params: &P) -> Result<String, ApiError> {
    serde_qs::to_string(params).map_err(|e| ApiError::Decode(format!("query: {}", e)))
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

fn url_with_query<P: Serialize>(path: &str, query: Option<&P>) -> Result<String, ApiError> {
    let url = api_url(path);
    match query {
        Some(params) => {
            let qs = build_query(params)?;
            if qs.is_empty() {
                Ok(url)
            } else {
                Ok(format!("{}?{}", url, qs))
            }
        }
        None => Ok(url),
    }
}

async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let is_json = response
        .headers()
        .get("content-type")
        .map(|ct| ct.contains("application/json"))
        .unwrap_or(false);

    if !response.ok() {
        let (message, payload) = if is_json {
            match response.json::<serde_json::Value>().await {
                Ok(value) => {
                    let message = value
                        .get("message")
                        .and_then(|m| m.as_str())
                        .unwrap_or("服务器错误")
                        .to_string();
                    (message, Some(value))
                }
                Err(_) => ("服务器错误".to_string(), None),
            }
        } else {
            let text = response.text().await.unwrap_or_default();
            (text, None)
        };
        log::error!("request failed: HTTP {} {}", status, message);
        return Err(ApiError::Http {
            status,
            message,
            payload,
        });
    }

    if is_json {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        // Non-JSON success bodies are handed over as their text form.
        let text = response.text().await.unwrap_or_default();
        serde_json::from_value(serde_json::Value::String(text))
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

pub async fn get_json<T, P>(path: &str, query: Option<&P>) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    P: Serialize,
{
    let url = url_with_query(path, query)?;
    let response = with_auth(Request::get(&url))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    handle_response(response).await
}

pub async fn post_json<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let response = with_auth(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Decode(format!("body: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    handle_response(response).await
}

pub async fn put_json<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let response = with_auth(Request::put(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Decode(format!("body: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    handle_response(response).await
}

pub async fn delete_json<T>(path: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let response = with_auth(Request::delete(&api_url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    handle_response(response).await
}

/// Unwrap the standard envelope, mapping a false success flag to a business
/// failure carrying the server-provided message.
pub fn unwrap_envelope<T>(env: ApiEnvelope<T>) -> Result<Option<T>, ApiError> {
    if env.success {
        Ok(env.data)
    } else {
        Err(ApiError::Business {
            code: env.code,
            message: env.message,
        })
    }
}

/// Like [`unwrap_envelope`] but treats a missing `data` as a decode failure.
/// For endpoints whose success responses always carry a payload.
pub fn expect_data<T>(env: ApiEnvelope<T>) -> Result<T, ApiError> {
    unwrap_envelope(env)?.ok_or_else(|| ApiError::Decode("响应缺少 data 字段".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::envelope::ListQuery;

    #[test]
    fn test_build_query_omits_none() {
        let q = ListQuery {
            page: 2,
            size: 10,
            keyword: Some("张".into()),
            ..Default::default()
        };
        let qs = build_query(&q).unwrap();
        assert!(qs.contains("page=2"));
        assert!(qs.contains("size=10"));
        assert!(qs.contains("keyword="));
        assert!(!qs.contains("storeId"));
        assert!(!qs.contains("memberId"));
    }

    #[test]
    fn test_unwrap_envelope_business_failure() {
        let env: ApiEnvelope<i32> = ApiEnvelope {
            code: 4001,
            success: false,
            message: "房间已被预定".into(),
            data: None,
        };
        match unwrap_envelope(env) {
            Err(ApiError::Business { code, message }) => {
                assert_eq!(code, 4001);
                assert_eq!(message, "房间已被预定");
            }
            other => panic!("expected business error, got {:?}", other),
        }
    }

    #[test]
    fn test_unwrap_envelope_success() {
        let env: ApiEnvelope<i32> = ApiEnvelope {
            code: 0,
            success: true,
            message: String::new(),
            data: Some(7),
        };
        assert_eq!(unwrap_envelope(env).unwrap(), Some(7));
    }

    #[test]
    fn test_unauthorized_detection() {
        let err = ApiError::Http {
            status: 401,
            message: "token expired".into(),
            payload: None,
        };
        assert!(err.is_unauthorized());
        assert_eq!(err.status(), Some(401));
        assert!(!ApiError::Network("offline".into()).is_unauthorized());
    }
}
