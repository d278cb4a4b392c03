//! Client library and command-line front-end for the MyCargonaut
//! ride/freight-sharing backend.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod filter;
pub mod geocode;
pub mod logging;
pub mod rating;
pub mod session;
pub mod ui;
pub mod validation;
