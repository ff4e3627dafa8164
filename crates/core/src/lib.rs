//! Domain types and rules shared by the card store, the HTTP API and the
//! client fetch layer. This crate performs no I/O.

pub mod card;
pub mod error;
pub mod query;
