//! Screens as MVI state machines plus their text rendering.

pub mod add_trip;
pub mod dashboard;
pub mod landing;
pub mod mvi;
pub mod notice;
pub mod profile;
pub mod rating;
pub mod register;
pub mod render;
pub mod trips;
