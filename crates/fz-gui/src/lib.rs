//! macroquad client for Forbidden Zone, the abandoned-hospital escape room.
//!
//! Draws the main menu and the play screen on a fixed 1280x720 virtual
//! canvas scaled to the window, forwards clicks to a [`fz_core::GameSession`],
//! and re-reads the session every frame.

pub mod app;
pub mod error;
pub mod input;
pub mod layout;
pub mod screen;
pub mod theme;
pub mod widget;
