// QuoteDeck - app/mod.rs
//
// Application layer: dataset transport and orchestration.
// Dependencies: core layer. Must NOT depend on: ui.

pub mod load;
