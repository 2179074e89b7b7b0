// QuoteDeck - ui/mod.rs
//
// Presentation layer: text rendering of cards, summaries, tag panels,
// and repair diagnostics. Dependencies: core layer.

pub mod render;
