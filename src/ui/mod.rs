//! User interface rendering.
//!
//! This module provides all drawing for the application:
//!
//! - **renderer**: full-screen layout (header bar, transcript viewport,
//!   input line, status bar)
//! - **card**: the decorative ID-card panel shown beside the terminal
//!
//! The card panel is purely decorative: it reads nothing from the session
//! and produces no events.

pub mod card;
pub mod renderer;

pub use renderer::Renderer;
