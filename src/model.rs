/// Core data types for the air-quality monitoring client.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no I/O — only types and their classification helpers.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Station reading
// ---------------------------------------------------------------------------

/// One monitoring station's measurement snapshot, as returned by the
/// 시도별 실시간 측정정보 API (version 1.5).
///
/// Concentration and grade fields arrive as JSON strings; the API reports a
/// missing measurement as `null`, `""`, or `"-"`, so every numeric field is
/// an `Option<String>` and callers go through [`StationReading::is_present`]
/// before treating a value as real. A reading is immutable once received and
/// the whole list is replaced wholesale on each fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationReading {
    #[serde(rename = "stationName")]
    pub station_name: String,
    #[serde(rename = "stationCode", default)]
    pub station_code: Option<String>,
    /// 측정망 (monitoring network) name, e.g. "도시대기".
    #[serde(rename = "mangName", default)]
    pub mang_name: Option<String>,
    #[serde(rename = "sidoName")]
    pub sido_name: String,
    /// Measurement timestamp, e.g. "2024-05-01 14:00".
    #[serde(rename = "dataTime", default)]
    pub data_time: Option<String>,

    // Pollutant concentrations. SO2/CO/O3/NO2 in ppm, PM in ㎍/㎥.
    #[serde(rename = "so2Value", default)]
    pub so2_value: Option<String>,
    #[serde(rename = "coValue", default)]
    pub co_value: Option<String>,
    #[serde(rename = "o3Value", default)]
    pub o3_value: Option<String>,
    #[serde(rename = "no2Value", default)]
    pub no2_value: Option<String>,
    #[serde(rename = "pm10Value", default)]
    pub pm10_value: Option<String>,
    /// PM10 24-hour moving average.
    #[serde(rename = "pm10Value24", default)]
    pub pm10_value24: Option<String>,
    #[serde(rename = "pm25Value", default)]
    pub pm25_value: Option<String>,
    /// PM2.5 24-hour moving average.
    #[serde(rename = "pm25Value24", default)]
    pub pm25_value24: Option<String>,

    // 통합대기환경지수 (aggregate air-quality index).
    #[serde(rename = "khaiValue", default)]
    pub khai_value: Option<String>,
    #[serde(rename = "khaiGrade", default)]
    pub khai_grade: Option<String>,

    // Per-pollutant grade codes ("1".."4", or absent).
    #[serde(rename = "so2Grade", default)]
    pub so2_grade: Option<String>,
    #[serde(rename = "coGrade", default)]
    pub co_grade: Option<String>,
    #[serde(rename = "o3Grade", default)]
    pub o3_grade: Option<String>,
    #[serde(rename = "no2Grade", default)]
    pub no2_grade: Option<String>,
    /// PM10 24-hour grade.
    #[serde(rename = "pm10Grade", default)]
    pub pm10_grade: Option<String>,
    /// PM2.5 24-hour grade.
    #[serde(rename = "pm25Grade", default)]
    pub pm25_grade: Option<String>,
    #[serde(rename = "pm10Grade1h", default)]
    pub pm10_grade_1h: Option<String>,
    #[serde(rename = "pm25Grade1h", default)]
    pub pm25_grade_1h: Option<String>,

    // 측정자료 상태정보 flags, e.g. "통신장애" when a sensor is down.
    #[serde(rename = "so2Flag", default)]
    pub so2_flag: Option<String>,
    #[serde(rename = "coFlag", default)]
    pub co_flag: Option<String>,
    #[serde(rename = "o3Flag", default)]
    pub o3_flag: Option<String>,
    #[serde(rename = "no2Flag", default)]
    pub no2_flag: Option<String>,
    #[serde(rename = "pm10Flag", default)]
    pub pm10_flag: Option<String>,
    #[serde(rename = "pm25Flag", default)]
    pub pm25_flag: Option<String>,
}

impl StationReading {
    /// True when the field holds an actual measurement rather than one of
    /// the API's placeholder spellings (`null`, `""`, `"-"`).
    pub fn is_present(value: &Option<String>) -> bool {
        match value {
            Some(v) => !v.is_empty() && v != "-",
            None => false,
        }
    }

    /// True when this station reports at least one particulate value
    /// (PM10 or PM2.5). Drives the default-selection fallback.
    pub fn has_particulate_value(&self) -> bool {
        Self::is_present(&self.pm10_value) || Self::is_present(&self.pm25_value)
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching or parsing measurement data.
#[derive(Debug, PartialEq)]
pub enum FetchError {
    /// The service key is absent or empty. No network call is attempted.
    MissingCredential,
    /// The request could not complete, timed out, or the server returned
    /// a non-2xx HTTP status.
    Transport(String),
    /// The server answered but the envelope's result code was not "00".
    Api { code: String, message: String },
    /// The response body could not be deserialized.
    Parse(String),
}

impl FetchError {
    /// Coarse classification used for store state and display lookup.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::MissingCredential => ErrorKind::MissingCredential,
            FetchError::Transport(_) => ErrorKind::Network,
            FetchError::Api { .. } | FetchError::Parse(_) => ErrorKind::Application,
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::MissingCredential => write!(f, "Service key is not configured"),
            FetchError::Transport(msg) => write!(f, "Transport error: {}", msg),
            FetchError::Api { code, message } => {
                write!(f, "API error: {} (code: {})", message, code)
            }
            FetchError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Display-facing error classification. The store keeps only this key;
/// localized text is looked up from the i18n tables at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingCredential,
    Network,
    /// Server responded but signaled failure, or the body was unusable.
    Application,
    /// Catch-all for failures outside the accessor taxonomy.
    General,
}
