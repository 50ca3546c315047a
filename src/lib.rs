//! Discussion Forum View (dfv)
//!
//! Pure view-composition core for a course discussion forum embedded in a
//! larger learning platform. Given the current navigation location, this
//! crate resolves route parameters from a fixed ordered route table, derives
//! which panels are visible (chrome, sidebar, content pane, empty-state),
//! and drives the thread-comments view that differentiates discussion vs
//! question thread semantics.
//!
//! Rendering, data fetching, and persistence are collaborators behind
//! traits; everything in this crate is recomputed synchronously from its
//! inputs (Pure Core / Impure Shell).

pub mod config;
pub mod data;
pub mod logging;
pub mod model;
pub mod routing;
pub mod state;
