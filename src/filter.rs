//! Case-insensitive list filtering for the trip browser and dashboard.

use std::collections::HashSet;

use crate::api::{Trip, UserId};

/// `true` when `field` contains `query`, ignoring case. Empty query matches.
pub fn matches_query(field: &str, query: &str) -> bool {
    query.is_empty() || field.to_lowercase().contains(&query.to_lowercase())
}

/// Items whose `field` contains `query`, in their original order.
pub fn filter_by<'a, T, F>(items: &'a [T], query: &str, field: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    if query.is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| field(item).to_lowercase().contains(&needle))
        .collect()
}

/// Distinct destinations in first-seen order.
pub fn unique_destinations(trips: &[Trip]) -> Vec<String> {
    let mut seen = HashSet::new();
    trips
        .iter()
        .filter(|trip| seen.insert(trip.destination_point.as_str()))
        .map(|trip| trip.destination_point.clone())
        .collect()
}

/// Trips `user` offers as driver.
pub fn added_by(trips: &[Trip], user: UserId) -> Vec<Trip> {
    trips.iter().filter(|t| t.is_driven_by(user)).cloned().collect()
}

/// Trips `user` has a seat on.
pub fn booked_by(trips: &[Trip], user: UserId) -> Vec<Trip> {
    trips.iter().filter(|t| t.is_booked_by(user)).cloned().collect()
}
