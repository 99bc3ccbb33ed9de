//! The search store: query, results, draft, display filters

pub mod action;
pub mod effect;
pub mod filter;
pub mod query;
pub mod reducer;
pub mod state;

pub use action::SearchAction;
pub use effect::SearchEffect;
pub use filter::{apply_filters, FilterSet, PriceRange, TimeWindow};
pub use query::{
    CabinClass, Leg, Passengers, SearchQuery, TripPlan, TripType, TOLERANCE_DAYS_MAX,
    TOLERANCE_DAYS_MIN,
};
pub use reducer::search_reducer;
pub use state::{DraftStatus, FlightOffer, SearchDraft, SearchState};
