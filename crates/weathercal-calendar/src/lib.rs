//! Google Calendar integration for weathercal.
//!
//! Creates and refreshes one all-day event per forecast day, keyed by the
//! event's start date so repeated runs never produce duplicates. The caller
//! supplies a valid bearer token; obtaining and refreshing tokens is out of
//! scope.

pub mod client;
pub mod error;
pub mod types;

pub use client::CalendarClient;
pub use error::CalendarError;
pub use types::Event;
