//! RP2040-specific HAL for the On Air sign firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `onair-hal` traits on top of `embassy-rp`:
//!
//! - [`gpio::RpInput`] - switch input (implements `onair_hal::InputPin`)
//! - [`gpio::RpOutput`] - matrix data/control lines (implements `onair_hal::OutputPin`)

#![no_std]

pub mod gpio;

pub use gpio::{RpInput, RpOutput};
