//! Rendering seam for the Cubeclock widget
//!
//! This crate provides:
//! - `Canvas` trait for anything that can draw lines, points, arcs and text
//! - Color palette of the widget
//! - `paint_widget`, which draws one frame (rings, cube, time text)
//! - `TextScreen`, a character-grid canvas for terminals and tests
//!
//! # Architecture
//!
//! The painter only reads values: a `FaceSnapshot` from the timer machine,
//! smoothed ring angles, projected cube points and the cube animation frame.
//! Producing those is the host's job, so the same painter serves any
//! backend that implements `Canvas`.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod palette;
pub mod scene;
pub mod screen;

// Re-export key types
pub use backend::{Canvas, CanvasError, Cap, Color, Paint, Stroke};
pub use scene::{paint_widget, SceneLayout};
pub use screen::{TextScreen, CELL_HEIGHT, CELL_WIDTH};
