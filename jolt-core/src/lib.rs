//! Board-agnostic core logic for the Jolt reaction game
//!
//! This crate contains all game logic that does not depend on specific
//! hardware implementations:
//!
//! - Collaborator traits (accelerometer, input, presenter, indicator, clock)
//! - Motion classifier (filtering, gravity compensation, gesture gating)
//! - Game state machine, sessions, and timed rounds
//! - Gameplay constants and configuration types

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod game;
pub mod motion;
pub mod traits;
