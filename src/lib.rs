//! Football Stats API Library
//!
//! CRUD and aggregation endpoints over team-season statistics records,
//! with the domain types, store contract and SQLite adapter behind them.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
