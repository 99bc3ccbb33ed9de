//! Display filters over search results
//!
//! Filtering never touches the store: it is a pure projection from the
//! offer list and a [`FilterSet`] to the offers a results view should
//! show. The sidebar resets to [`FilterSet::default`] when it mounts.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

use super::query::CabinClass;
use super::state::FlightOffer;

/// Inclusive price bounds
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    pub fn contains(&self, price: Decimal) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Inclusive time-of-day window, e.g. 06:00..=12:00
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeWindow {
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time <= self.end
    }
}

/// User-adjustable refinement of displayed results
///
/// `None` fields mean "no restriction". Allow-lists restrict to their
/// members; an empty allow-list hides everything, which mirrors a sidebar
/// with every checkbox cleared.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterSet {
    pub price: Option<PriceRange>,
    pub departure_window: Option<TimeWindow>,
    pub arrival_window: Option<TimeWindow>,
    /// Carriers to show
    pub carriers: Option<Vec<String>>,
    /// Stop counts to show (0 = direct)
    pub stops: Option<Vec<u8>>,
    pub cabin: Option<CabinClass>,
    /// Which leg of a multi-leg trip the sidebar currently refines
    pub active_leg: usize,
}

fn time_of_day(dt: &chrono::DateTime<chrono::Utc>) -> NaiveTime {
    NaiveTime::from_hms_opt(dt.hour(), dt.minute(), dt.second()).unwrap_or_default()
}

/// Project the offers a results view should display.
///
/// Survivor order matches input order.
pub fn apply_filters<'a>(offers: &'a [FlightOffer], filters: &FilterSet) -> Vec<&'a FlightOffer> {
    offers
        .iter()
        .filter(|offer| {
            if let Some(price) = &filters.price {
                if !price.contains(offer.price) {
                    return false;
                }
            }
            if let Some(window) = &filters.departure_window {
                if !window.contains(time_of_day(&offer.departure)) {
                    return false;
                }
            }
            if let Some(window) = &filters.arrival_window {
                if !window.contains(time_of_day(&offer.arrival)) {
                    return false;
                }
            }
            if let Some(carriers) = &filters.carriers {
                if !carriers.iter().any(|c| c == &offer.carrier) {
                    return false;
                }
            }
            if let Some(stops) = &filters.stops {
                if !stops.contains(&offer.stops) {
                    return false;
                }
            }
            if let Some(cabin) = &filters.cabin {
                if offer.cabin != *cabin {
                    return false;
                }
            }
            true
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn offer(id: &str, carrier: &str, price: i64, stops: u8, depart_hour: u32) -> FlightOffer {
        FlightOffer {
            id: id.into(),
            carrier: carrier.into(),
            flight_number: format!("{}100", carrier),
            origin: "KBP".into(),
            destination: "LHR".into(),
            departure: chrono::Utc
                .with_ymd_and_hms(2026, 9, 1, depart_hour, 0, 0)
                .unwrap(),
            arrival: chrono::Utc
                .with_ymd_and_hms(2026, 9, 1, depart_hour + 4, 0, 0)
                .unwrap(),
            stops,
            cabin: CabinClass::Economy,
            price: Decimal::from(price),
            currency: "USD".into(),
        }
    }

    #[test]
    fn test_no_filters_passes_everything() {
        let offers = vec![offer("a", "PS", 100, 0, 8), offer("b", "BA", 300, 1, 14)];

        let visible = apply_filters(&offers, &FilterSet::default());

        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn test_price_range_excludes_outliers() {
        let offers = vec![offer("a", "PS", 100, 0, 8), offer("b", "BA", 300, 0, 9)];
        let filters = FilterSet {
            price: Some(PriceRange {
                min: Decimal::from(50),
                max: Decimal::from(200),
            }),
            ..Default::default()
        };

        let visible = apply_filters(&offers, &filters);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "a");
    }

    #[test]
    fn test_carrier_allow_list() {
        let offers = vec![offer("a", "PS", 100, 0, 8), offer("b", "BA", 100, 0, 9)];
        let filters = FilterSet {
            carriers: Some(vec!["BA".into()]),
            ..Default::default()
        };

        let visible = apply_filters(&offers, &filters);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].carrier, "BA");
    }

    #[test]
    fn test_empty_carrier_list_hides_everything() {
        let offers = vec![offer("a", "PS", 100, 0, 8)];
        let filters = FilterSet {
            carriers: Some(vec![]),
            ..Default::default()
        };

        assert!(apply_filters(&offers, &filters).is_empty());
    }

    #[test]
    fn test_stops_and_departure_window() {
        let offers = vec![
            offer("direct-early", "PS", 100, 0, 7),
            offer("direct-late", "PS", 100, 0, 20),
            offer("one-stop", "PS", 100, 1, 8),
        ];
        let filters = FilterSet {
            stops: Some(vec![0]),
            departure_window: Some(TimeWindow {
                start: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
                end: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            }),
            ..Default::default()
        };

        let visible = apply_filters(&offers, &filters);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "direct-early");
    }

    #[test]
    fn test_survivor_order_is_stable() {
        let offers = vec![
            offer("c", "PS", 300, 0, 8),
            offer("a", "PS", 100, 0, 9),
            offer("b", "PS", 200, 0, 10),
        ];
        let filters = FilterSet {
            price: Some(PriceRange {
                min: Decimal::from(100),
                max: Decimal::from(300),
            }),
            ..Default::default()
        };

        let ids: Vec<&str> = apply_filters(&offers, &filters)
            .iter()
            .map(|o| o.id.as_str())
            .collect();

        assert_eq!(ids, vec!["c", "a", "b"]);
    }
}
