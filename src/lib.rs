//! donate-cli - Terminal-based used-clothes donation intake
//!
//! This library implements the donor-facing donation flow for Akhuwat USA:
//! a seven-step wizard that collects what is being donated, where it is,
//! how it reaches the collection network, contact details, and an optional
//! operational contribution, then submits the finished session to the
//! donations service.
//!
//! # Architecture
//!
//! - `config`: settings and path management
//! - `error`: custom error types
//! - `models`: the donation domain (session record, money, reference catalog)
//! - `wizard`: the step state machine with gating and submission lifecycle
//! - `services`: the async submission boundary (mocked in this repository)
//! - `display`: table output for the non-interactive commands
//! - `tui`: the ratatui wizard interface

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod tui;
pub mod wizard;

pub use error::{DonateError, DonateResult};
