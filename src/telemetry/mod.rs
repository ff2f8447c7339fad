//! # Telemetry Module
//!
//! Telemetry decoding and derivation for the launch dashboard.
//!
//! This module handles:
//! - Decoding raw snapshot records from the simulator feed
//! - Quaternion to Euler angle conversion for attitude display
//! - Engine run/stop decoding from the running-engines bitmask
//! - Engine-icon layout geometry per vehicle class
//! - Projecting records into per-vehicle view models

pub mod attitude;
pub mod engines;
pub mod layout;
pub mod projector;
pub mod record;
pub mod vehicle;
