//! Season-wide EPA ratings for FIRST Tech Challenge events.
//!
//! Match results come from the FTC Events API ([`ftc`]), are rated event by event
//! with the [`epa`] crate ([`season`]) and printed as tables ([`report`]).

pub mod config;
pub mod ftc;
pub mod internal_clients;
pub mod prompt;
pub mod report;
pub mod season;
