//! # Engine State Decoder
//!
//! Decodes per-engine run/stop state from the running-engines bitmask.
//!
//! The simulator reports up to 33 independently numbered engines in a single
//! integer, with bit (n - 1) encoding engine number n. The mask is held as
//! `u64`: engine 33 lives at bit 32, past the range an ordinary 32-bit
//! integer can address, and a float-backed number must never hold it.

use crate::error::{Result, StarbaseBridgeError};

/// Highest engine number addressable in the mask (bit 63).
pub const MAX_ENGINE_NUMBER: u32 = 64;

/// Check whether a numbered engine is firing
///
/// # Arguments
///
/// * `bitmask` - Running-engines bitmask, bit (n - 1) encodes engine n
/// * `engine_number` - Engine number, 1-based
///
/// # Returns
///
/// * `Result<bool>` - true iff the engine's bit is set in the mask
///
/// # Errors
///
/// Returns `InvalidEngineIndex` if `engine_number` is 0 or greater than
/// [`MAX_ENGINE_NUMBER`].
///
/// # Examples
///
/// ```
/// use starbase_bridge::telemetry::engines::is_engine_running;
///
/// assert!(is_engine_running(0b1010, 2).unwrap());
/// assert!(!is_engine_running(0b1010, 1).unwrap());
/// ```
pub fn is_engine_running(bitmask: u64, engine_number: u32) -> Result<bool> {
    if engine_number == 0 || engine_number > MAX_ENGINE_NUMBER {
        return Err(StarbaseBridgeError::InvalidEngineIndex {
            index: engine_number,
            limit: MAX_ENGINE_NUMBER,
        });
    }

    let bit_position = engine_number - 1;
    Ok(bitmask & (1u64 << bit_position) != 0)
}

/// Decode run/stop flags for engines 1..=engine_count, in engine order
///
/// `engine_count` comes from the vehicle class layout and never exceeds
/// [`MAX_ENGINE_NUMBER`], so the per-engine lookup cannot fail.
pub fn running_flags(bitmask: u64, engine_count: u32) -> Vec<bool> {
    debug_assert!(engine_count <= MAX_ENGINE_NUMBER);

    (1..=engine_count.min(MAX_ENGINE_NUMBER))
        .map(|n| bitmask & (1u64 << (n - 1)) != 0)
        .collect()
}

/// List the numbers of all firing engines, ascending
pub fn running_engine_numbers(bitmask: u64, engine_count: u32) -> Vec<u32> {
    running_flags(bitmask, engine_count)
        .iter()
        .enumerate()
        .filter_map(|(i, &on)| on.then_some(i as u32 + 1))
        .collect()
}
