/// AirKorea 시도별 실시간 측정정보 API client.
///
/// Handles URL construction, JSON envelope parsing, and the single blocking
/// fetch against:
///   http://apis.data.go.kr/B552584/ArpltnInforInqireSvc/getCtprvnRltmMesureDnsty
///
/// Exactly one request is made per invocation — no retry, no backoff. The
/// caller is responsible for checking the credential first; see
/// `store::AirQualityStore::begin_fetch`. See `fixtures.rs` for annotated
/// examples of the response structure.

use crate::model::{FetchError, StationReading};
use crate::regions::Region;
use serde::Deserialize;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Serde structures for envelope deserialization
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct MeasureResponse {
    response: ResponseEnvelope,
}

#[derive(Deserialize)]
struct ResponseEnvelope {
    header: ResponseHeader,
    // Error envelopes carry no body at all.
    body: Option<ResponseBody>,
}

#[derive(Deserialize)]
struct ResponseHeader {
    #[serde(rename = "resultCode")]
    result_code: String,
    #[serde(rename = "resultMsg")]
    result_msg: String,
}

#[derive(Deserialize)]
struct ResponseBody {
    #[serde(default)]
    items: Option<Vec<StationReading>>,
    #[serde(rename = "totalCount", default)]
    #[allow(dead_code)]
    total_count: Option<u32>,
}

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

const MEASURE_BASE_URL: &str =
    "http://apis.data.go.kr/B552584/ArpltnInforInqireSvc/getCtprvnRltmMesureDnsty";

/// Result code the API uses for a successful response.
const RESULT_OK: &str = "00";

/// Default page size; 100 covers every 시도 including 경기 (the largest).
pub const DEFAULT_NUM_OF_ROWS: u32 = 100;

/// Builds a measurement request URL for the given region.
///
/// The service key is appended verbatim: issued keys are already
/// percent-encoded, and re-encoding them breaks authentication. The Korean
/// region name, on the other hand, must be percent-encoded. The URL always
/// requests JSON and pins the response schema to version 1.5.
pub fn build_measure_url(
    service_key: &str,
    region: &Region,
    page_no: u32,
    num_of_rows: u32,
) -> String {
    format!(
        "{}?serviceKey={}&sidoName={}&pageNo={}&numOfRows={}&returnType=json&ver=1.5",
        MEASURE_BASE_URL,
        service_key,
        urlencoding::encode(region.api_name),
        page_no,
        num_of_rows
    )
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses a measurement API JSON response body into the station reading
/// list.
///
/// # Errors
/// - `FetchError::Parse` — malformed or unexpected JSON structure.
/// - `FetchError::Api` — the envelope's `resultCode` is not `"00"`,
///   regardless of HTTP status; carries the server's message and code.
///
/// A successful envelope with no items is a valid empty list.
pub fn parse_measure_response(json: &str) -> Result<Vec<StationReading>, FetchError> {
    let response: MeasureResponse = serde_json::from_str(json)
        .map_err(|e| FetchError::Parse(format!("JSON deserialization failed: {}", e)))?;

    let header = response.response.header;
    if header.result_code != RESULT_OK {
        return Err(FetchError::Api {
            code: header.result_code,
            message: header.result_msg,
        });
    }

    Ok(response
        .response
        .body
        .and_then(|b| b.items)
        .unwrap_or_default())
}

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

/// Builds the blocking HTTP client with an explicit request deadline so a
/// slow upstream cannot hang the caller indefinitely. Deadline-exceeded
/// surfaces as a `Transport` error, classified `network`.
pub fn http_client(timeout: Duration) -> reqwest::Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder().timeout(timeout).build()
}

/// Fetches the current readings for one region. Exactly one attempt.
///
/// # Errors
/// - `FetchError::Transport` — the request failed, timed out, or the server
///   returned a non-2xx status.
/// - `FetchError::Api` / `FetchError::Parse` — see `parse_measure_response`.
pub fn fetch_measurements(
    client: &reqwest::blocking::Client,
    service_key: &str,
    region: &Region,
) -> Result<Vec<StationReading>, FetchError> {
    let url = build_measure_url(service_key, region, 1, DEFAULT_NUM_OF_ROWS);

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        return Err(FetchError::Transport(format!(
            "HTTP status {}",
            response.status()
        )));
    }

    let body = response
        .text()
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    parse_measure_response(&body)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
