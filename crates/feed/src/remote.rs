use crate::source::FetchError;
use chrono::{Local, NaiveDateTime};
use livetemp_core::{Reading, TIMESTAMP_FORMAT};
use serde::Deserialize;
use std::time::Duration;

/// Remote sample source: fetches the latest reading for a location key
/// over HTTP.
///
/// Only status 200 is treated as success.  Transport failures, other
/// statuses, and malformed bodies all surface as [`FetchError`] — the
/// scheduler renders those ticks as "N/A" rather than halting.
#[derive(Debug)]
pub struct RemoteSource {
    client: reqwest::Client,
    base_url: String,
    zip_code: String,
}

/// JSON shape returned by the `recent_data` endpoint.
#[derive(Debug, Deserialize)]
struct RemotePayload {
    temperature: f64,
    timestamp: String,
}

impl RemoteSource {
    /// Build a source for `{base_url}/recent_data?zip_code={zip_code}` with
    /// a bounded request timeout so a stalled fetch delays at most one tick.
    pub fn new(
        base_url: impl Into<String>,
        zip_code: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            zip_code: zip_code.into(),
        })
    }

    /// Fetch one reading for the current tick.
    pub async fn produce(&self) -> Result<Reading, FetchError> {
        let url = format!("{}/recent_data", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("zip_code", self.zip_code.as_str())])
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let payload: RemotePayload = response
            .json()
            .await
            .map_err(|e| FetchError::Payload(e.to_string()))?;

        reading_from_payload(payload)
    }
}

fn reading_from_payload(payload: RemotePayload) -> Result<Reading, FetchError> {
    let naive = NaiveDateTime::parse_from_str(&payload.timestamp, TIMESTAMP_FORMAT)
        .map_err(|e| FetchError::Payload(format!("bad timestamp '{}': {e}", payload.timestamp)))?;

    let timestamp = naive
        .and_local_timezone(Local)
        .single()
        .ok_or_else(|| FetchError::Payload(format!("ambiguous timestamp '{}'", payload.timestamp)))?;

    Ok(Reading::at(payload.temperature, timestamp))
}
