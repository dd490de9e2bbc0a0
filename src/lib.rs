//! Postal code geocoding and distance service.
//!
//! The request path is [`services::address::AddressService`]: a postal code is
//! resolved through a [`services::geocode::Geocoder`], the first match is fed
//! to [`services::distance`], and the lookup is appended to an
//! [`access_log::AccessLogStore`].

pub mod access_log;
pub mod cli;
pub mod config;
pub mod models;
pub mod repository;
pub mod schema;
pub mod server;
pub mod services;
