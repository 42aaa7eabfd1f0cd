//! Hardware driver implementations for the On Air sign
//!
//! This crate provides concrete implementations of the traits
//! defined in `onair-core`, built on the pin traits of `onair-hal`.
//!
//! # Drivers
//!
//! - **Input**: GPIO switch with polarity and glitch rejection, fixed level
//! - **Matrix**: bit-banged HUB75 RGB panel with binary code modulation

#![no_std]

pub mod input;
pub mod matrix;
