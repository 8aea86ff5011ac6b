//! Interactive logic circuits: gates, switches and lights wired together on a board
//! and re-evaluated once per frame.

pub mod app;
pub mod board;
pub mod circuits;
pub mod config;
pub mod containers;
pub mod simulation;
pub mod vector;
