//! Submitted-search value types
//!
//! The trip plan is a sum type, so which date fields exist is decided by the
//! variant: a round trip always has a return date, a one-way never does, and
//! a multi-city trip is just its ordered legs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One flight leg: where from, where to, when
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    /// IATA airport or city code
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
}

/// Trip shape discriminant, for drafts and wire payloads
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripType {
    OneWay,
    RoundTrip,
    MultiCity,
}

/// The trip being searched for
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "trip_type", rename_all = "snake_case")]
pub enum TripPlan {
    OneWay {
        #[serde(flatten)]
        leg: Leg,
    },
    RoundTrip {
        #[serde(flatten)]
        leg: Leg,
        return_date: NaiveDate,
    },
    MultiCity {
        legs: Vec<Leg>,
    },
}

impl TripPlan {
    pub fn trip_type(&self) -> TripType {
        match self {
            TripPlan::OneWay { .. } => TripType::OneWay,
            TripPlan::RoundTrip { .. } => TripType::RoundTrip,
            TripPlan::MultiCity { .. } => TripType::MultiCity,
        }
    }

    /// Legs in travel order, whatever the trip shape.
    pub fn legs(&self) -> Vec<&Leg> {
        match self {
            TripPlan::OneWay { leg } | TripPlan::RoundTrip { leg, .. } => vec![leg],
            TripPlan::MultiCity { legs } => legs.iter().collect(),
        }
    }
}

/// Passenger counts; adults is clamped to at least one
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passengers {
    pub adults: u8,
    pub children: u8,
    pub infants: u8,
}

impl Passengers {
    pub fn new(adults: u8, children: u8, infants: u8) -> Self {
        Self {
            adults: adults.max(1),
            children,
            infants,
        }
    }

    pub fn total(&self) -> u16 {
        self.adults as u16 + self.children as u16 + self.infants as u16
    }
}

impl Default for Passengers {
    fn default() -> Self {
        Self {
            adults: 1,
            children: 0,
            infants: 0,
        }
    }
}

/// Cabin class preference
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CabinClass {
    #[default]
    Economy,
    PremiumEconomy,
    Business,
    First,
}

/// Date-tolerance bounds for flexible searches
pub const TOLERANCE_DAYS_MIN: u8 = 1;
pub const TOLERANCE_DAYS_MAX: u8 = 7;

/// One submitted flight search
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(flatten)]
    pub plan: TripPlan,
    pub passengers: Passengers,
    pub cabin: CabinClass,
    pub direct_only: bool,
    /// +/- days around the requested dates, within 1..=7
    pub tolerance_days: u8,
}

impl SearchQuery {
    pub fn new(plan: TripPlan) -> Self {
        Self {
            plan,
            passengers: Passengers::default(),
            cabin: CabinClass::default(),
            direct_only: false,
            tolerance_days: TOLERANCE_DAYS_MIN,
        }
    }

    pub fn with_passengers(mut self, passengers: Passengers) -> Self {
        self.passengers = passengers;
        self
    }

    pub fn with_cabin(mut self, cabin: CabinClass) -> Self {
        self.cabin = cabin;
        self
    }

    pub fn direct_only(mut self, direct_only: bool) -> Self {
        self.direct_only = direct_only;
        self
    }

    /// Clamps into 1..=7.
    pub fn with_tolerance_days(mut self, days: u8) -> Self {
        self.tolerance_days = days.clamp(TOLERANCE_DAYS_MIN, TOLERANCE_DAYS_MAX);
        self
    }
}
