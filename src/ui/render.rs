//! Plain-text rendering of screen state for the terminal.

use std::fmt::Write;

use crate::api::{Trip, User};
use crate::rating::StarBreakdown;
use crate::ui::dashboard::DashboardState;
use crate::ui::notice::Notice;
use crate::ui::rating::RatingDialogState;
use crate::ui::trips::{TripBrowserState, TripView};

const NOTHING_FOUND: &str = "  (none)";

/// One trip line: id, route, schedule, seats and driver stars.
pub fn trip_line(trip: &Trip, max_stars: u32) -> String {
    let stars = StarBreakdown::compute(trip.driver_rating.unwrap_or(0.0), max_stars);
    let mut line = format!(
        "#{:<4} {}  {} {}  seats: {}  {}",
        trip.id,
        trip.route(),
        trip.date,
        trip.time,
        trip.available_space,
        stars.render()
    );
    if let Some(status) = trip.status {
        let _ = write!(line, "  [{status:?}]");
    }
    line
}

fn trip_view_line(view: &TripView, max_stars: u32) -> String {
    let mut line = trip_line(&view.trip, max_stars);
    if view.trip.is_ongoing() {
        let _ = write!(line, " {}%", view.progress);
    }
    line
}

pub fn notice(notice: &Notice) -> String {
    if notice.is_error() {
        format!("✗ {notice}")
    } else {
        format!("✓ {notice}")
    }
}

pub fn trip_browser(state: &TripBrowserState, max_stars: u32) -> String {
    let board = match state {
        TripBrowserState::Loading => return "Loading trips...".to_string(),
        TripBrowserState::Failed { message } => return message.clone(),
        TripBrowserState::Ready(board) => board,
    };

    let mut out = String::new();
    if let Some(n) = &board.notice {
        let _ = writeln!(out, "{}\n", notice(n));
    }

    let _ = writeln!(out, "Deliveries");
    let destinations = board.visible_destinations();
    if destinations.is_empty() {
        let _ = writeln!(out, "{NOTHING_FOUND}");
    }
    for destination in destinations {
        let _ = writeln!(out, "  {destination}");
    }

    let _ = writeln!(out, "\nTrips");
    let trips = board.visible_trips();
    if trips.is_empty() {
        let _ = writeln!(out, "{NOTHING_FOUND}");
    }
    for view in trips {
        let _ = writeln!(out, "  {}", trip_view_line(view, max_stars));
    }
    out
}

pub fn dashboard(state: &DashboardState, max_stars: u32) -> String {
    let board = match state {
        DashboardState::Loading => return "Loading dashboard...".to_string(),
        DashboardState::Failed { message } => return message.clone(),
        DashboardState::Ready(board) => board,
    };

    let mut out = String::from("My Dashboard\n");
    if let Some(n) = &board.notice {
        let _ = writeln!(out, "{}", notice(n));
    }
    for (title, trips) in [("Added Trips", &board.added), ("Booked Trips", &board.booked)] {
        let _ = writeln!(out, "\n{title}");
        if trips.is_empty() {
            let _ = writeln!(out, "{NOTHING_FOUND}");
        }
        for trip in trips {
            let _ = writeln!(out, "  {}", trip_line(trip, max_stars));
        }
    }
    if let RatingDialogState::Open {
        trip_id, target, ..
    } = &board.rating
    {
        let _ = writeln!(out, "\nRating user {target} for trip #{trip_id}");
    }
    out
}

pub fn user(user: &User) -> String {
    let mut out = format!("{} <{}>\n  id: {}", user.display_name(), user.email, user.id);
    if let Some(phone) = &user.phone {
        let _ = write!(out, "\n  phone: {phone}");
    }
    if !user.roles.is_empty() {
        let _ = write!(out, "\n  roles: {}", user.roles.join(", "));
    }
    out
}
