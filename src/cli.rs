//! Command-line front-end: argument parsing and command execution.

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::{Args, Parser, Subcommand};

use crate::api::{TripId, TripService, UserId};
use crate::app::{self, App, LOGIN_FAILED_TITLE, TRIPS_LOAD_FAILED};
use crate::config::Config;
use crate::geocode::Coordinate;
use crate::ui::add_trip::{LocationField, TripForm, TRIP_ADDED, TRIP_ADD_FAILED};
use crate::ui::landing::{
    call_to_action, LandingSearch, TRACKING_PLACEHOLDER, TRACKING_TITLE, WELCOME_SUBTITLE,
    WELCOME_TITLE,
};
use crate::ui::notice::Notice;
use crate::ui::profile::PROFILE_SAVED;
use crate::ui::register::{RegistrationForm, REGISTERED};
use crate::ui::render;
use crate::ui::trips::TripBrowserIntent;

#[derive(Debug, Parser)]
#[command(name = "cargonaut")]
#[command(about = "MyCargonaut: find or offer rides and freight-sharing", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config dir/cargonaut/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Create an account (must be 18 or older)
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// YYYY-MM-DD
        #[arg(long)]
        birthdate: String,
    },

    /// Show the signed-in user
    Whoami,

    /// Show or edit your profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Browse and manage trips
    Trips {
        #[command(subcommand)]
        action: TripsCommand,
    },

    /// Book a seat on a trip
    Book {
        trip: TripId,
    },

    /// Trips you added or booked
    Dashboard,

    /// Rate a user for a trip
    Rate {
        #[arg(long)]
        trip: TripId,
        /// User to rate (default: the driver of a trip you booked)
        #[arg(long)]
        user: Option<u64>,
        /// Stars, 1 to 5
        #[arg(long, allow_negative_numbers = true)]
        value: i64,
    },

    /// Quick search from the landing page
    Search {
        #[arg(long, default_value = "")]
        from: String,
        #[arg(long, default_value = "")]
        to: String,
        #[arg(long, default_value = "")]
        date: String,
    },

    /// Address lookup
    Geocode {
        #[command(subcommand)]
        action: GeocodeCommand,
    },

    /// Live trip tracking
    Track,
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    Show,
    /// Change name and/or phone; omitted fields keep their value
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum TripsCommand {
    /// List trips, optionally filtered
    List {
        /// Filter trips by start point
        #[arg(long)]
        from: Option<String>,
        /// Filter the destination list
        #[arg(long)]
        to: Option<String>,
    },
    Show {
        id: TripId,
    },
    /// Offer a new trip as the signed-in driver
    Add(TripArgs),
    Update {
        id: TripId,
        #[command(flatten)]
        trip: TripArgs,
    },
    Delete {
        id: TripId,
    },
}

#[derive(Debug, Clone, Args)]
pub struct TripArgs {
    #[arg(long)]
    pub from: String,
    #[arg(long)]
    pub to: String,
    #[arg(long)]
    pub date: String,
    #[arg(long)]
    pub time: String,
    /// Free seats
    #[arg(long, default_value_t = 1)]
    pub seats: u32,
    /// Keep the typed addresses instead of the first geocoding match
    #[arg(long)]
    pub no_geocode: bool,
}

#[derive(Debug, Subcommand)]
pub enum GeocodeCommand {
    Search {
        query: String,
    },
    Reverse {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
}

/// Execute a parsed command line.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    // Tracking needs neither config nor backend.
    if let Command::Track = cli.command {
        track();
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    let app = App::bootstrap(config)?;

    match cli.command {
        Command::Login { email, password } => {
            let user = app
                .account()
                .login(&email, &password)
                .await
                .map_err(|e| anyhow!(Notice::error_titled(LOGIN_FAILED_TITLE, e.to_string())))?;
            println!("Signed in as {}", user.display_name());
        }
        Command::Logout => {
            app.account().logout().await?;
            println!("Signed out.");
        }
        Command::Register {
            email,
            password,
            birthdate,
        } => {
            let form = RegistrationForm {
                email,
                password,
                birthdate,
            };
            let today = chrono::Local::now().date_naive();
            app.account().register(&form, today).await?;
            println!("{REGISTERED}");
        }
        Command::Whoami => match app.session.user() {
            Some(user) => println!("{}", render::user(&user)),
            None => println!("Not signed in."),
        },
        Command::Profile { action } => profile(&app, action).await?,
        Command::Trips { action } => trips(&app, action).await?,
        Command::Book { trip } => {
            let mut browser = app.trip_browser();
            browser.load().await.context(TRIPS_LOAD_FAILED)?;
            if let Err(err) = browser.book(trip).await {
                // `book` logs the cause.
                return Err(match browser.state().notice() {
                    Some(notice) => anyhow!(notice.message.clone()),
                    None => anyhow::Error::new(err),
                });
            }
            if let Some(notice) = browser.state().notice() {
                println!("{}", render::notice(notice));
            }
            if let Some(seats) = browser.state().available_space(trip) {
                println!("Seats left on #{trip}: {seats}");
            }
        }
        Command::Dashboard => {
            let mut dashboard = app.dashboard();
            dashboard.load().await?;
            print!("{}", render::dashboard(dashboard.state(), app.max_stars()));
        }
        Command::Rate { trip, user, value } => {
            let mut dashboard = app.dashboard();
            dashboard.load().await?;
            let target = user
                .map(UserId)
                .or_else(|| dashboard.default_target(trip))
                .ok_or_else(|| anyhow!("No one to rate for trip #{trip}; pass --user"))?;
            dashboard.open_rating(trip, target);
            dashboard.select(value);
            dashboard.submit_rating().await?;
            if let Some(notice) = dashboard.state().notice() {
                println!("{}", render::notice(notice));
            }
        }
        Command::Search { from, to, date } => {
            let search = LandingSearch { from, to, date };
            let trips = app.api.list_trips().await.context(TRIPS_LOAD_FAILED)?;
            println!("{WELCOME_TITLE}\n{WELCOME_SUBTITLE}\n");
            let hits = search.apply(&trips);
            if hits.is_empty() {
                println!("No trips found.");
            }
            for trip in hits {
                println!("{}", render::trip_line(trip, app.max_stars()));
            }
            println!("\n{}", call_to_action(app.session.is_authenticated()));
        }
        Command::Geocode { action } => geocode(&app, action).await?,
        Command::Track => track(),
    }
    Ok(())
}

fn track() {
    println!("{TRACKING_TITLE}\n{TRACKING_PLACEHOLDER}");
}

async fn profile(app: &App, action: ProfileCommand) -> anyhow::Result<()> {
    let account = app.account();
    let mut form = account.load_profile().await?;
    match action {
        ProfileCommand::Show => {
            println!("Name:  {}", form.name);
            println!("Email: {}", form.email);
            println!("Phone: {}", form.phone);
        }
        ProfileCommand::Update { name, phone } => {
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(phone) = phone {
                form.phone = phone;
            }
            let user = account.update_profile(&form).await?;
            println!("{PROFILE_SAVED}");
            println!("{}", render::user(&user));
        }
    }
    Ok(())
}

async fn trips(app: &App, action: TripsCommand) -> anyhow::Result<()> {
    match action {
        TripsCommand::List { from, to } => {
            let mut browser = app.trip_browser();
            browser.load().await.context(TRIPS_LOAD_FAILED)?;
            if let Some(from) = from {
                browser.dispatch(TripBrowserIntent::TripFilterChanged(from));
            }
            if let Some(to) = to {
                browser.dispatch(TripBrowserIntent::DestinationFilterChanged(to));
            }
            print!("{}", render::trip_browser(browser.state(), app.max_stars()));
        }
        TripsCommand::Show { id } => {
            let trip = app.api.get_trip(id).await?;
            println!("{}", render::trip_line(&trip, app.max_stars()));
        }
        TripsCommand::Add(args) => {
            let form = trip_form(app, args).await?;
            let trip = app::add_trip(&*app.api, &app.session, form)
                .await
                .context(TRIP_ADD_FAILED)?;
            println!("{TRIP_ADDED}");
            println!("{}", render::trip_line(&trip, app.max_stars()));
        }
        TripsCommand::Update { id, trip } => {
            let form = trip_form(app, trip).await?;
            let trip = app::update_trip(&*app.api, &app.session, id, form).await?;
            println!("{}", render::trip_line(&trip, app.max_stars()));
        }
        TripsCommand::Delete { id } => {
            app.api.delete_trip(id).await?;
            println!("Trip #{id} deleted.");
        }
    }
    Ok(())
}

/// Fill the trip form, pinning each address to its first geocoding match.
async fn trip_form(app: &App, args: TripArgs) -> anyhow::Result<TripForm> {
    let mut start = LocationField::typed(args.from);
    let mut destination = LocationField::typed(args.to);

    if !args.no_geocode {
        for field in [&mut start, &mut destination] {
            match app.geocoding.search(&field.text).await {
                Ok(suggestions) => {
                    if let Some(first) = suggestions.first() {
                        field.apply_suggestion(first);
                    }
                }
                Err(err) => {
                    tracing::warn!(query = %field.text, error = %err, "Keeping typed address");
                }
            }
        }
    }

    Ok(TripForm {
        start,
        destination,
        date: args.date,
        time: args.time,
        available_space: args.seats,
    })
}

async fn geocode(app: &App, action: GeocodeCommand) -> anyhow::Result<()> {
    match action {
        GeocodeCommand::Search { query } => {
            let suggestions = app.geocoding.search(&query).await?;
            if suggestions.is_empty() {
                println!("No suggestions.");
            }
            for s in suggestions {
                println!("{} ({:.5}, {:.5})", s.display_name, s.lat, s.lon);
            }
        }
        GeocodeCommand::Reverse { lat, lon } => {
            let name = app.geocoding.reverse(Coordinate { lat, lon }).await?;
            println!("{name}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trip_filters() {
        let cli = Cli::try_parse_from(["cargonaut", "trips", "list", "--from", "gie"]).unwrap();
        match cli.command {
            Command::Trips {
                action: TripsCommand::List { from, to },
            } => {
                assert_eq!(from.as_deref(), Some("gie"));
                assert_eq!(to, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn trip_id_must_be_numeric() {
        assert!(Cli::try_parse_from(["cargonaut", "book", "seven"]).is_err());
        let cli = Cli::try_parse_from(["cargonaut", "book", "7"]).unwrap();
        assert!(matches!(cli.command, Command::Book { trip: TripId(7) }));
    }

    #[test]
    fn rating_value_is_not_range_checked_by_parser() {
        let cli = Cli::try_parse_from([
            "cargonaut", "rate", "--trip", "7", "--value", "-1",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Rate { value: -1, .. }));
    }

    #[test]
    fn config_flag_is_global() {
        let cli =
            Cli::try_parse_from(["cargonaut", "dashboard", "--config", "/tmp/c.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
    }
}
