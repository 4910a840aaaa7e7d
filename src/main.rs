//! Air Quality Monitor - CLI front end
//!
//! A thin presentation consumer over the library's state layer:
//! 1. Loads configuration and persisted preferences (selection, language, theme)
//! 2. Hydrates the reconciling store, then runs a single fetch
//! 3. Prints a station dashboard with grades and a recommendation
//!
//! Usage:
//!   cargo run --release                       # fetch for the persisted region
//!   cargo run --release -- --region 부산       # switch region (persisted)
//!   cargo run --release -- --station 중구      # pick a station (persisted)
//!   cargo run --release -- --lang en          # switch UI language
//!   cargo run --release -- --toggle-theme     # flip light/dark
//!
//! Environment:
//!   AIRKOREA_SERVICE_KEY - issued data.go.kr service key (.env supported)

use aqmon_service::config::{Config, SERVICE_KEY_ENV};
use aqmon_service::grade::grade_info;
use aqmon_service::i18n::Language;
use aqmon_service::ingest::airkorea;
use aqmon_service::model::StationReading;
use aqmon_service::persist::StateStore;
use aqmon_service::regions;
use aqmon_service::store::{AirQualityStore, BeginFetchError, Notification, Phase};
use aqmon_service::theme::Theme;
use std::env;

fn main() {
    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();
    let mut region_arg: Option<String> = None;
    let mut station_arg: Option<String> = None;
    let mut lang_arg: Option<String> = None;
    let mut toggle_theme = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--region" => {
                if i + 1 < args.len() {
                    region_arg = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: --region requires a region name");
                    std::process::exit(1);
                }
            }
            "--station" => {
                if i + 1 < args.len() {
                    station_arg = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: --station requires a station name");
                    std::process::exit(1);
                }
            }
            "--lang" => {
                if i + 1 < args.len() {
                    lang_arg = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: --lang requires a code (ko|en|ja)");
                    std::process::exit(1);
                }
            }
            "--toggle-theme" => {
                toggle_theme = true;
                i += 1;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                eprintln!(
                    "Usage: {} [--region NAME] [--station NAME] [--lang ko|en|ja] [--toggle-theme]",
                    args[0]
                );
                std::process::exit(1);
            }
        }
    }

    let config = Config::load();

    let state = match StateStore::open(&config.state_dir) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Cannot open state directory {}: {}", config.state_dir.display(), e);
            std::process::exit(1);
        }
    };

    // Preference records load independently; a broken one falls back to its
    // default rather than blocking the dashboard.
    let mut language = state.load_language().unwrap_or_else(|e| {
        eprintln!("Warning: failed to load language: {}", e);
        None
    }).unwrap_or_default();

    let mut theme = state.load_theme().unwrap_or_else(|e| {
        eprintln!("Warning: failed to load theme: {}", e);
        None
    }).unwrap_or_default();

    if let Some(code) = lang_arg {
        match Language::from_code(&code) {
            Some(picked) => {
                language = picked;
                if let Err(e) = state.save_language(language) {
                    eprintln!("Warning: failed to save language: {}", e);
                }
            }
            None => {
                eprintln!("Unknown language '{}'. Expected ko, en, or ja.", code);
                std::process::exit(1);
            }
        }
    }

    if toggle_theme {
        theme = theme.toggle();
        if let Err(e) = state.save_theme(theme) {
            eprintln!("Warning: failed to save theme: {}", e);
        }
    }

    let strings = language.strings();

    let mut store = AirQualityStore::new(state);
    store.hydrate();

    if let Some(name) = region_arg {
        match regions::find_region(&name) {
            Some(region) => store.set_region(region),
            None => {
                eprintln!("Unknown region '{}'. Valid regions:", name);
                eprintln!("  {}", regions::all_region_names().join(" "));
                std::process::exit(1);
            }
        }
    }

    println!("🌫  {} — {} ({})", strings.app_name, store.region().api_name, store.region().label_en);
    println!("================================\n");

    let client = match airkorea::http_client(config.request_timeout) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    println!("📡 {}", strings.loading_data);
    match store.fetch_via(&client, config.service_key_or_empty()) {
        Ok(()) => {}
        Err(BeginFetchError::MissingCredential) => {
            // Store already holds the classification; add the setup hint.
            eprintln!("   Set {} in the environment or .env", SERVICE_KEY_ENV);
        }
        Err(BeginFetchError::NotHydrated) => {
            eprintln!("❌ Internal error: store was not hydrated");
            std::process::exit(1);
        }
    }

    if let Some(name) = station_arg {
        if !store.select_station(&name) {
            eprintln!("Warning: no station named '{}' in {}", name, store.region().api_name);
        }
    }

    // Drain fire-and-forget notifications as toast-style lines.
    for notification in store.take_notifications() {
        match notification {
            Notification::FetchSucceeded { region, station } => {
                println!(
                    "✓ {} — {} ({}{})",
                    strings.data_update_success,
                    strings.data_update_success_message,
                    region,
                    station.map(|s| format!(" / {}", s)).unwrap_or_default()
                );
            }
            Notification::FetchFailed { kind } => {
                println!("❌ {} — {}", strings.data_load_fail, strings.error_text(kind));
            }
        }
    }
    println!();

    match store.phase() {
        Phase::Ready => {
            print_dashboard(&store, language, theme);
        }
        Phase::Error => {
            if let Some(kind) = store.error() {
                eprintln!("❌ {}", strings.error_text(kind));
            }
            // Previous dataset, if any, stays visible (stale-but-present).
            if store.selected_station().is_some() {
                print_dashboard(&store, language, theme);
            }
            std::process::exit(1);
        }
        Phase::Idle | Phase::Loading => {
            // One-shot flow always completes the fetch before reaching here.
        }
    }
}

fn print_dashboard(store: &AirQualityStore, language: Language, theme: Theme) {
    let strings = language.strings();
    let palette = theme.palette();

    let Some(station) = store.selected_station() else {
        println!("   (no stations reported for {})", store.region().api_name);
        return;
    };

    println!("📍 {} — {}", station.station_name, store.region().api_name);
    if let Some(time) = &station.data_time {
        println!("   {}: {}", strings.measurement_time, time);
    }

    let khai = grade_info(station.khai_grade.as_deref());
    println!(
        "\n   {} {}: {} ({})",
        strings.air_quality,
        strings.index_label,
        strings.grade_label(khai.grade),
        khai.color
    );
    println!("   {}\n", strings.recommendation(khai.grade));

    print_pollutant(strings.pm10, &station.pm10_value, &station.pm10_grade, strings.unit, strings);
    print_pollutant(strings.pm25, &station.pm25_value, &station.pm25_grade, strings.unit, strings);
    print_pollutant("SO₂", &station.so2_value, &station.so2_grade, "ppm", strings);
    print_pollutant("NO₂", &station.no2_value, &station.no2_grade, "ppm", strings);
    print_pollutant("O₃", &station.o3_value, &station.o3_grade, "ppm", strings);
    print_pollutant("CO", &station.co_value, &station.co_grade, "ppm", strings);

    println!("\n   {} stations in {}", store.items().len(), store.region().api_name);
    if let Some(updated) = store.last_updated() {
        println!("   {}: {}", strings.last_update, updated.format("%H:%M"));
    }
    println!(
        "   theme: {} (bg {}, text {})",
        theme.code(),
        palette.background,
        palette.text
    );
}

fn print_pollutant(
    label: &str,
    value: &Option<String>,
    grade_code: &Option<String>,
    unit: &str,
    strings: &aqmon_service::i18n::Strings,
) {
    let info = grade_info(grade_code.as_deref());
    let shown = if StationReading::is_present(value) {
        format!("{} {}", value.as_deref().unwrap_or("-"), unit)
    } else {
        "-".to_string()
    };
    println!(
        "   {:<6} {:>12}  {} ({})",
        label,
        shown,
        strings.grade_label(info.grade),
        info.color
    );
}
