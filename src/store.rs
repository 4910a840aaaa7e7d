/// Reconciling air-quality store.
///
/// Owns the authoritative in-memory reading list, the selected region and
/// station, loading/error state, and the last-updated timestamp. Persists
/// only the user's region/station selection (through `persist::StateStore`)
/// and reconciles it against each freshly fetched list: a remembered station
/// name is re-selected when it still exists, otherwise selection falls back
/// to a heuristic default.
///
/// The store is constructed explicitly and handed to the presentation layer;
/// there is no global instance. Fetching is gated on hydration so defaults
/// are never acted on before the persisted selection has been loaded, and a
/// generation counter invalidates in-flight responses when a newer trigger
/// fires, so a stale completion can never overwrite a fresh one.

use chrono::{DateTime, Utc};

use crate::ingest::airkorea;
use crate::model::{ErrorKind, FetchError, StationReading};
use crate::persist::{SavedSelection, StateStore};
use crate::regions::{self, Region};

// ---------------------------------------------------------------------------
// Store state
// ---------------------------------------------------------------------------

/// Lifecycle of the store's dataset. Perpetually re-enterable: `Ready` and
/// `Error` both return to `Loading` on the next trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Error,
}

/// Proof that a fetch was begun; pairs a begin with exactly one complete.
/// Carries the generation stamped at begin time — `complete_fetch` discards
/// the result if a newer fetch has begun since.
#[derive(Debug)]
pub struct FetchTicket {
    generation: u64,
    pub region: &'static Region,
}

/// Why a fetch could not begin. `MissingCredential` has already moved the
/// store to the error phase; the caller must not issue a network call.
#[derive(Debug, PartialEq, Eq)]
pub enum BeginFetchError {
    /// Persisted state has not been loaded yet.
    NotHydrated,
    MissingCredential,
}

impl std::fmt::Display for BeginFetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BeginFetchError::NotHydrated => {
                write!(f, "Store is not hydrated; load persisted state first")
            }
            BeginFetchError::MissingCredential => write!(f, "Service key is not configured"),
        }
    }
}

impl std::error::Error for BeginFetchError {}

/// Transient user-facing event, queued by the store and drained by the
/// presentation layer. Fire-and-forget; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    FetchSucceeded {
        region: String,
        station: Option<String>,
    },
    FetchFailed {
        kind: ErrorKind,
    },
}

// ---------------------------------------------------------------------------
// Selection algorithm
// ---------------------------------------------------------------------------

/// Picks the selected entry of a freshly fetched list, given the remembered
/// station name (if any):
/// 1. the entry whose name is exactly the remembered name, else
/// 2. the first entry with a non-placeholder PM10 or PM2.5 value, else
/// 3. the first entry, or none on an empty list.
pub fn reconcile_selection(items: &[StationReading], remembered: Option<&str>) -> Option<usize> {
    if let Some(name) = remembered {
        if let Some(i) = items.iter().position(|r| r.station_name == name) {
            return Some(i);
        }
    }
    if let Some(i) = items.iter().position(|r| r.has_particulate_value()) {
        return Some(i);
    }
    if items.is_empty() { None } else { Some(0) }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

pub struct AirQualityStore {
    region: &'static Region,
    remembered_station: Option<String>,
    items: Vec<StationReading>,
    selected: Option<usize>,
    phase: Phase,
    error: Option<ErrorKind>,
    last_updated: Option<DateTime<Utc>>,
    hydrated: bool,
    generation: u64,
    notifications: Vec<Notification>,
    persister: StateStore,
}

impl AirQualityStore {
    /// Creates an un-hydrated store over the given persistence backend.
    /// Call [`hydrate`](Self::hydrate) before the first fetch.
    pub fn new(persister: StateStore) -> Self {
        AirQualityStore {
            region: regions::default_region(),
            remembered_station: None,
            items: Vec::new(),
            selected: None,
            phase: Phase::Idle,
            error: None,
            last_updated: None,
            hydrated: false,
            generation: 0,
            notifications: Vec::new(),
            persister,
        }
    }

    // --- accessors ----------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn error(&self) -> Option<ErrorKind> {
        self.error
    }

    pub fn region(&self) -> &'static Region {
        self.region
    }

    pub fn items(&self) -> &[StationReading] {
        &self.items
    }

    /// The selected station, if any. While a fetch is loading this still
    /// points into the previous list.
    pub fn selected_station(&self) -> Option<&StationReading> {
        self.selected.map(|i| &self.items[i])
    }

    pub fn remembered_station(&self) -> Option<&str> {
        self.remembered_station.as_deref()
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Drains the pending notification queue.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    // --- hydration ----------------------------------------------------------

    /// Loads the persisted region/station selection and marks the store
    /// ready to fetch. A missing record leaves the defaults in place; an
    /// unreadable record is reported and treated as missing.
    pub fn hydrate(&mut self) {
        match self.persister.load_selection() {
            Ok(Some(saved)) => {
                if let Some(region) = regions::find_region(&saved.region) {
                    self.region = region;
                } else {
                    eprintln!(
                        "Warning: persisted region '{}' is unknown, using {}",
                        saved.region,
                        self.region.api_name
                    );
                }
                self.remembered_station = saved.station;
            }
            Ok(None) => {}
            Err(e) => {
                eprintln!("Warning: failed to load persisted selection: {}", e);
            }
        }
        self.hydrated = true;
    }

    // --- fetch lifecycle ----------------------------------------------------

    /// Begins a fetch for the current region.
    ///
    /// With an empty credential the store moves straight to the error phase
    /// with the `missing-credential` classification and no network call may
    /// be made. Otherwise the store enters `Loading` (clearing any previous
    /// error flag) and returns a ticket for [`complete_fetch`](Self::complete_fetch).
    pub fn begin_fetch(&mut self, service_key: &str) -> Result<FetchTicket, BeginFetchError> {
        if !self.hydrated {
            return Err(BeginFetchError::NotHydrated);
        }
        if service_key.trim().is_empty() {
            self.phase = Phase::Error;
            self.error = Some(ErrorKind::MissingCredential);
            self.notifications.push(Notification::FetchFailed {
                kind: ErrorKind::MissingCredential,
            });
            return Err(BeginFetchError::MissingCredential);
        }

        self.generation += 1;
        self.phase = Phase::Loading;
        self.error = None;
        Ok(FetchTicket {
            generation: self.generation,
            region: self.region,
        })
    }

    /// Applies a fetch outcome.
    ///
    /// A ticket from a superseded fetch is discarded outright. On success the
    /// reading list is replaced, the selection reconciled, the remembered
    /// name updated and persisted (best-effort), and a success notification
    /// queued. On failure the previous list and selection stay untouched and
    /// only the error classification changes.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<StationReading>, FetchError>,
    ) {
        if ticket.generation != self.generation {
            // A newer trigger superseded this response.
            return;
        }

        match result {
            Ok(items) => {
                let selected = reconcile_selection(&items, self.remembered_station.as_deref());
                self.items = items;
                self.selected = selected;
                self.remembered_station =
                    selected.map(|i| self.items[i].station_name.clone());
                self.phase = Phase::Ready;
                self.error = None;
                self.last_updated = Some(Utc::now());
                self.persist_selection_quiet();
                self.notifications.push(Notification::FetchSucceeded {
                    region: self.region.api_name.to_string(),
                    station: self.remembered_station.clone(),
                });
            }
            Err(e) => {
                self.phase = Phase::Error;
                self.error = Some(e.kind());
                self.notifications
                    .push(Notification::FetchFailed { kind: e.kind() });
            }
        }
    }

    /// Convenience: begin → one accessor call → complete.
    pub fn fetch_via(
        &mut self,
        client: &reqwest::blocking::Client,
        service_key: &str,
    ) -> Result<(), BeginFetchError> {
        let ticket = self.begin_fetch(service_key)?;
        let result = airkorea::fetch_measurements(client, service_key, ticket.region);
        self.complete_fetch(ticket, result);
        Ok(())
    }

    // --- user actions -------------------------------------------------------

    /// Switches region: clears the current selection immediately (optimistic
    /// reset) and persists the region choice. The remembered station name is
    /// left untouched until the next completed fetch reconciles it. The
    /// caller triggers the fetch.
    pub fn set_region(&mut self, region: &'static Region) {
        self.region = region;
        self.selected = None;
        self.persist_selection_quiet();
    }

    /// Explicit user pick from the current list. Returns false (and changes
    /// nothing) if no station of that name is currently held.
    pub fn select_station(&mut self, name: &str) -> bool {
        match self.items.iter().position(|r| r.station_name == name) {
            Some(i) => {
                self.selected = Some(i);
                self.remembered_station = Some(self.items[i].station_name.clone());
                self.persist_selection_quiet();
                true
            }
            None => false,
        }
    }

    fn persist_selection_quiet(&self) {
        self.persister.save_selection_quiet(&SavedSelection {
            region: self.region.api_name.to_string(),
            station: self.remembered_station.clone(),
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
