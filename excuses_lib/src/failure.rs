//! Classification of anything that went wrong before extraction ran.
//!
//! A failure either exposes a readable message or it doesn't. Errors from the
//! client always do; a panic inside the fetch task carries an arbitrary payload
//! and is kept as a structured value instead.

use std::any::Any;
use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::client::ExcuseClient;
use crate::error::FetchError;
use crate::extract::ExcuseOutcome;

const NETWORK_PREFIX: &str = "Error fetching excuse: ";
const OPAQUE_PREFIX: &str = "Exception fetching excuse: ";

/// A failed fetch, reduced to what gets reported.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchFailure {
    /// The failure exposed a human-readable message.
    Network { message: String },
    /// The failure carried no message; `value` is rendered as JSON.
    Opaque { value: Value },
}

impl FetchFailure {
    /// The message is the error followed by each of its sources, joined with
    /// `": "`, so transport failures keep their cause.
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        let message = err.to_string();
        if message.is_empty() {
            return Self::Opaque {
                value: Value::String(format!("{:?}", err)),
            };
        }

        let mut parts = vec![message];
        let mut source = err.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !text.is_empty() && parts.last() != Some(&text) {
                parts.push(text);
            }
            source = cause.source();
        }
        Self::Network {
            message: parts.join(": "),
        }
    }

    /// Panic payloads are never treated as messages, even when they are
    /// strings; they are reported through the opaque branch.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let value = if let Some(s) = payload.downcast_ref::<&str>() {
            Value::String((*s).to_string())
        } else if let Some(s) = payload.downcast_ref::<String>() {
            Value::String(s.clone())
        } else {
            Value::Null
        };
        Self::Opaque { value }
    }

    /// Fixed label printed before the detail.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Network { .. } => NETWORK_PREFIX,
            Self::Opaque { .. } => OPAQUE_PREFIX,
        }
    }

    /// The message, or the value pretty-printed with a one-space indent.
    pub fn detail(&self) -> String {
        match self {
            Self::Network { message } => message.clone(),
            Self::Opaque { value } => pretty_json(value),
        }
    }
}

fn pretty_json(value: &Value) -> String {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    match value.serialize(&mut ser) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(_) => value.to_string(),
    }
}

/// Runs one fetch of `url` and folds every way it can fail into a
/// [`FetchFailure`], including client construction errors and panics.
pub async fn fetch_excuse(
    url: &str,
    timeout: Option<Duration>,
) -> Result<ExcuseOutcome, FetchFailure> {
    let url = url.to_string();
    run_guarded(async move {
        let client = ExcuseClient::with_url(&url, timeout)?;
        client.fetch_excuse().await
    })
    .await
}

async fn run_guarded<F>(fetch: F) -> Result<ExcuseOutcome, FetchFailure>
where
    F: Future<Output = Result<ExcuseOutcome, FetchError>> + Send + 'static,
{
    match tokio::spawn(fetch).await {
        Ok(Ok(outcome)) => Ok(outcome),
        Ok(Err(e)) => Err(FetchFailure::from_error(&e)),
        Err(join_err) => match join_err.try_into_panic() {
            Ok(payload) => Err(FetchFailure::from_panic(payload)),
            Err(join_err) => Err(FetchFailure::from_error(&join_err)),
        },
    }
}
