// QuoteDeck - core/mod.rs
//
// Core business logic layer: ingestion/repair, date normalisation,
// filtering/sorting, display cleaning, export.
// Must NOT depend on: ui, app, or any I/O beyond Write trait objects.

pub mod date;
pub mod export;
pub mod filter;
pub mod ingest;
pub mod model;
pub mod text;
