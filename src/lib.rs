//! Drink Tally - a shared ledger for group drink orders
//!
//! Orders and members live in external record stores. This crate derives the
//! read models over them (store suggestions, a calendar, filtered history and
//! a leaderboard) and stages new orders before they are written back.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod views;

pub use application::Application;
pub use error::{Error, Result};
