//! Scene drawing for the On Air sign
//!
//! This crate provides:
//! - [`draw_scene`] - draws a [`Scene`](onair_core::scene::Scene) onto any
//!   `embedded-graphics` draw target
//! - [`FrameBuffer`] - an off-screen RGB canvas used as the back buffer
//!
//! # Architecture
//!
//! The core crate describes *what* each state looks like (text, colors,
//! frame style). This crate owns the artwork geometry and turns a scene
//! into pixels. Panel drivers only ever see finished frame buffers.

#![no_std]

pub mod artwork;
pub mod framebuffer;

// Re-export key types
pub use artwork::{draw_scene, palette_rgb};
pub use framebuffer::FrameBuffer;

/// Matrix width in pixels
pub const MATRIX_WIDTH: usize = 32;

/// Matrix height in pixels
pub const MATRIX_HEIGHT: usize = 16;

/// Frame buffer sized for the sign's panel
pub type MatrixFrame = FrameBuffer<MATRIX_WIDTH, MATRIX_HEIGHT>;
