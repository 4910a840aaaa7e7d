/// aqmon_service: Korean air-quality monitoring client.
///
/// # Module structure
///
/// ```text
/// aqmon_service
/// ├── model       — shared data types (StationReading, FetchError, ErrorKind)
/// ├── regions     — 시도 registry (the canonical region list)
/// ├── grade       — ordinal grade code → display color mapping
/// ├── ingest
/// │   ├── airkorea — AirKorea measurement API: URL construction + JSON parsing
/// │   └── fixtures (test only) — representative API response payloads
/// ├── store       — reconciling state container (idle/loading/ready/error)
/// ├── persist     — durable preference records (selection, language, theme)
/// ├── i18n        — ko/en/ja string tables
/// ├── theme       — light/dark palettes
/// └── config      — credential (.env) and service settings (aqmon.toml)
/// ```

/// Public modules
pub mod config;
pub mod grade;
pub mod i18n;
pub mod ingest;
pub mod model;
pub mod persist;
pub mod regions;
pub mod store;
pub mod theme;
