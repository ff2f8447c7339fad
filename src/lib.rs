//! # Starbase Bridge Library
//!
//! Bridge StarbaseSim rocket telemetry to render-ready dashboard view models.
//!
//! This library provides the decoding and derivation core of a launch
//! telemetry dashboard: raw per-vehicle records come in, immutable view
//! models (speed, altitude, propellant levels, attitude angles, per-engine
//! state) come out. Transport and rendering are the host's concern.

pub mod clock;
pub mod config;
pub mod error;
pub mod telemetry;
