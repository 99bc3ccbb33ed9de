//! booking - tripkit demo
//!
//! Runs one flight search through the full engine:
//! 1. CLI args become a `SearchQuery`
//! 2. `Submit` is dispatched to the search store
//! 3. The declared fetch effect is handed to the `TaskManager`
//! 4. The result action re-enters the loop and updates the store
//! 5. The offer list (or error) is printed from store state
//!
//! Theme/language flags exercise the application store and its settings
//! mirror on the way.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p booking-cli -- KBP LHR --date 2026-09-01
//! cargo run -p booking-cli -- KBP LHR --date 2026-09-01 \
//!     --return-date 2026-09-10 --adults 2 --cabin business --theme dark
//! ```

use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;
use tokio::sync::mpsc;

use tripkit::prelude::*;
use tripkit::state::search::CabinClass;

/// Flight search demo for the tripkit state engine
#[derive(Parser, Debug)]
#[command(name = "booking")]
#[command(about = "Search flights through the tripkit state engine")]
struct Args {
    /// Origin airport code (e.g. KBP)
    origin: String,

    /// Destination airport code (e.g. LHR)
    destination: String,

    /// Departure date (YYYY-MM-DD)
    #[arg(long)]
    date: NaiveDate,

    /// Return date; makes the trip a round trip
    #[arg(long)]
    return_date: Option<NaiveDate>,

    /// Adult passengers
    #[arg(long, default_value = "1")]
    adults: u8,

    /// Cabin class: economy, premium-economy, business, first
    #[arg(long, default_value = "economy")]
    cabin: String,

    /// Direct flights only
    #[arg(long)]
    direct: bool,

    /// Date tolerance in days (1-7)
    #[arg(long, default_value = "1")]
    tolerance: u8,

    /// Search API base URL
    #[arg(long, default_value = "https://api.tripkit.dev/v1")]
    base_url: String,

    /// Persisted theme preference: light or dark
    #[arg(long)]
    theme: Option<String>,

    /// Persisted interface language
    #[arg(long)]
    language: Option<String>,
}

/// One action type for the whole loop; each store keeps its own half
#[derive(Clone, Debug)]
enum BookingAction {
    App(AppAction),
    Search(SearchAction),
}

impl Action for BookingAction {
    fn name(&self) -> &'static str {
        match self {
            BookingAction::App(action) => action.name(),
            BookingAction::Search(action) => action.name(),
        }
    }
}

fn parse_cabin(s: &str) -> CabinClass {
    match s {
        "premium-economy" => CabinClass::PremiumEconomy,
        "business" => CabinClass::Business,
        "first" => CabinClass::First,
        _ => CabinClass::Economy,
    }
}

fn build_query(args: &Args) -> SearchQuery {
    let leg = Leg {
        origin: args.origin.clone(),
        destination: args.destination.clone(),
        date: args.date,
    };
    let plan = match args.return_date {
        Some(return_date) => TripPlan::RoundTrip { leg, return_date },
        None => TripPlan::OneWay { leg },
    };
    SearchQuery::new(plan)
        .with_passengers(Passengers::new(args.adults, 0, 0))
        .with_cabin(parse_cabin(&args.cabin))
        .direct_only(args.direct)
        .with_tolerance_days(args.tolerance)
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    let args = Args::parse();
    let query = build_query(&args);

    let settings_store = SettingsStore::at_default_location();
    let settings = settings_store.load();

    let mut app = StoreWithMiddleware::new(
        AppState::default(),
        app_reducer,
        LoggingMiddleware::new(),
    );
    hydrate_app_state(app.state_mut(), &settings);

    // Summary logging: a DidLoad can carry hundreds of offers
    let mut search = StoreWithMiddleware::new(
        SearchState::default(),
        search_reducer,
        SummaryLoggingMiddleware,
    );

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<BookingAction>();
    let mut tasks = TaskManager::new(action_tx.clone());
    let flights = FlightsClient::new(args.base_url.clone());

    // Preference flags go through the app store so the settings mirror
    // sees them as effects, same as a settings page would
    if let Some(theme) = args.theme.as_deref() {
        let theme = if theme == "dark" { Theme::Dark } else { Theme::Light };
        let _ = action_tx.send(BookingAction::App(AppAction::SetTheme(theme)));
    }
    if let Some(language) = &args.language {
        let _ = action_tx.send(BookingAction::App(AppAction::SetLanguage(language.clone())));
    }

    let _ = action_tx.send(BookingAction::Search(SearchAction::Submit(query)));

    while let Some(action) = action_rx.recv().await {
        match action {
            BookingAction::App(action) => {
                let result = app.dispatch(action);
                for effect in result.effects {
                    match &effect {
                        AppEffect::ApplyTheme(theme) => {
                            println!("theme: {}", theme.as_str());
                        }
                        _ => persist_app_effect(&settings_store, &effect),
                    }
                }
            }
            BookingAction::Search(action) => {
                let done = matches!(
                    action,
                    SearchAction::DidLoad { .. } | SearchAction::DidError { .. }
                );
                let result = search.dispatch(action);
                for effect in result.effects {
                    let SearchEffect::Fetch { generation, query } = effect;
                    let client = flights.clone();
                    tasks.spawn("flight_search", async move {
                        match client.search(&query).await {
                            Ok(offers) => BookingAction::Search(SearchAction::DidLoad {
                                generation,
                                offers,
                            }),
                            Err(e) => BookingAction::Search(SearchAction::DidError {
                                generation,
                                message: e.user_message(),
                            }),
                        }
                    });
                }
                if done {
                    break;
                }
            }
        }
    }

    let state = search.state();
    if let Some(message) = &state.error {
        // Same surface a page would use: error banner + notification
        app.dispatch(AppAction::NotificationPush {
            kind: NotificationKind::Error,
            title: "Search failed".into(),
            body: message.clone(),
        });
        eprintln!("error: {}", message);
        return ExitCode::FAILURE;
    }

    let offers = state.visible_offers();
    if offers.is_empty() {
        println!("No flights found.");
        return ExitCode::SUCCESS;
    }

    println!(
        "{} offers for {} -> {}:",
        offers.len(),
        args.origin,
        args.destination
    );
    for offer in offers {
        println!(
            "  {:<8} {}  {} -> {}  dep {}  {} stop(s)  {} {}",
            offer.flight_number,
            offer.carrier,
            offer.origin,
            offer.destination,
            offer.departure.format("%Y-%m-%d %H:%M"),
            offer.stops,
            offer.price,
            offer.currency,
        );
    }

    ExitCode::SUCCESS
}
