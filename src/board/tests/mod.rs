//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `initial.rs` - Starting position facts
//! - `movement.rs` - Knight, slider and king move patterns
//! - `pawns.rs` - Pawn pushes, captures, en passant and promotion
//! - `castling.rs` - Castle availability and execution
//! - `mates.rs` - Check, checkmate and stalemate detection
//! - `edge_cases.rs` - Special positions and transition outcomes
//! - `perft.rs` - Move generation node counts
//! - `proptest.rs` - Property-based tests

mod initial;
mod perft;
mod proptest;
