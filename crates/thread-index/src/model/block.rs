//! Child blocks: one reply's time offset from the conversation start.

use rand::Rng;

/// One reply event, positioned relative to the thread's header timestamp.
///
/// The stored `time_difference` is post-quantization: it is always exactly
/// representable by the 31-bit wire field selected by `time_flag`, so
/// re-encoding a block reproduces its wire bytes bit for bit. Precision
/// lost to quantization is part of the format, not a defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildBlock {
    /// Selects which of the two quantization windows the delta uses.
    pub time_flag: bool,
    /// Quantized time elapsed since the header timestamp, in nanoseconds.
    pub time_difference: i64,
    /// Entropy distinguishing near-simultaneous blocks (4-bit range).
    pub random_num: u8,
    /// Ordering disambiguator (4-bit range); 0 for freshly created blocks.
    pub sequence_count: u8,
}

impl ChildBlock {
    /// Builds a block for a reply that arrived `delta_ns` nanoseconds after
    /// the thread started.
    ///
    /// The delta is quantized through the selected window before it is
    /// stored. `random_num` is drawn from the process-wide generator;
    /// `sequence_count` starts at 0.
    pub fn from_delta(delta_ns: i64) -> Self {
        let time_flag = select_time_flag(delta_ns);
        let ticks = (delta_ns / 100) as u64;
        let quantized = restore_ticks(time_flag, quantize_ticks(time_flag, ticks));

        ChildBlock {
            time_flag,
            time_difference: (quantized * 100) as i64,
            random_num: rand::thread_rng().gen_range(0..15),
            sequence_count: 0,
        }
    }
}

/// Picks the quantization window for a fresh block.
///
/// This reproduces the legacy producer's branch chain literally, including
/// the unreachable `years > 56` arm: deltas past two years already take the
/// first branch, so in practice the flag is set exactly for deltas in
/// (0.02s, 1s]. Wire compatibility requires the same branching, not a
/// simplified equivalent.
fn select_time_flag(delta_ns: i64) -> bool {
    let secs = delta_ns as f64 / 1e9;
    let years = secs / 3600.0 / 24.0 / 365.0;

    if secs <= 0.02 || years > 2.0 {
        false
    } else if secs <= 1.0 || years > 56.0 {
        true
    } else {
        false
    }
}

/// Quantizes a tick delta into the 31-bit wire field.
///
/// Flag 0 discards the high 15 and low 18 bits of the 64-bit tick value;
/// flag 1 discards the high 10 and low 23.
pub(crate) fn quantize_ticks(time_flag: bool, ticks: u64) -> u32 {
    if time_flag {
        (ticks << 10 >> (10 + 23)) as u32
    } else {
        (ticks << 15 >> (15 + 18)) as u32
    }
}

/// Restores tick units from a 31-bit wire field at the window's precision.
///
/// The discarded high bits are gone for good: this recovers a lower
/// precision tick count, not the pre-quantization input.
pub(crate) fn restore_ticks(time_flag: bool, field: u32) -> u64 {
    if time_flag {
        u64::from(field) << 23
    } else {
        u64::from(field) << 18
    }
}
