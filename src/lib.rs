//! Maps tools for a travel assistant agent: restaurant, attraction and hotel
//! search, directions and address lookup backed by the Google Maps web
//! services, each answering with compact JSON text.

pub mod config;
pub mod controller;
pub mod errors;
pub mod helpers;
pub mod models;
pub mod repositories;
pub mod tools;
