//! Search state - submitted query, results, draft, filters
//!
//! Loading, results, and error are deliberately independent fields: a
//! failed refresh keeps the last good results visible under the error
//! banner. Only [`SearchAction::Clear`](super::action::SearchAction) resets
//! them together.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::filter::FilterSet;
use super::query::{CabinClass, Leg, SearchQuery, TripType};

/// One bookable flight option returned by the search collaborator
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlightOffer {
    pub id: String,
    pub carrier: String,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure: DateTime<Utc>,
    pub arrival: DateTime<Utc>,
    pub stops: u8,
    pub cabin: CabinClass,
    pub price: Decimal,
    pub currency: String,
}

/// Where the form draft is in its lifecycle.
///
/// `Loading` is active while a previously saved draft is being replayed
/// into a form; draft changes arriving then are echoes of the hydration
/// itself and are dropped, which is what breaks the save loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DraftStatus {
    #[default]
    Idle,
    Loading,
    Dirty,
}

/// All-optional mirror of an in-progress search form
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchDraft {
    pub trip_type: Option<TripType>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub depart_date: Option<chrono::NaiveDate>,
    pub return_date: Option<chrono::NaiveDate>,
    /// Multi-city rows; used instead of origin/destination when
    /// `trip_type` is `MultiCity`
    pub legs: Option<Vec<Leg>>,
    pub adults: Option<u8>,
    pub children: Option<u8>,
    pub infants: Option<u8>,
    pub cabin: Option<CabinClass>,
    pub direct_only: Option<bool>,
    pub tolerance_days: Option<u8>,
}

/// Search store state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    /// Last submitted query, verbatim
    pub query: Option<SearchQuery>,

    /// Results of the most recent completed search
    pub offers: Option<Vec<FlightOffer>>,

    pub loading: bool,

    pub error: Option<String>,

    /// In-progress form snapshot, kept across navigation
    pub draft: Option<SearchDraft>,

    pub draft_status: DraftStatus,

    /// Display refinement; None until a filter sidebar mounts
    pub filters: Option<FilterSet>,

    /// Generation of the latest dispatched search. Result actions carrying
    /// an older generation are stale and get discarded.
    pub generation: u64,
}

impl SearchState {
    /// Offers after applying the current filters (all offers when no
    /// filters are set). Pure projection; state is untouched.
    pub fn visible_offers(&self) -> Vec<&FlightOffer> {
        match (&self.offers, &self.filters) {
            (Some(offers), Some(filters)) => super::filter::apply_filters(offers, filters),
            (Some(offers), None) => offers.iter().collect(),
            (None, _) => Vec::new(),
        }
    }
}
