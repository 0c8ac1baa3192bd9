//! МетодКопилка - GUI Library
//!
//! This module exposes the application state machine and views for testing.

pub mod app;
pub mod state;
pub mod theme;
pub mod views;
