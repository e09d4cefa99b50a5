//! FILETIME tick conversions.
//!
//! Converts between the legacy timestamp unit used by the conversation-index
//! wire format (100-nanosecond ticks counted from 1601-01-01T00:00:00Z) and
//! nanoseconds since the Unix epoch. Both directions are pure arithmetic:
//! out-of-range input wraps instead of failing, and nanoseconds not aligned
//! to a 100ns tick lose the remainder permanently.

/// Number of 100ns ticks between 1601-01-01T00:00:00Z (the FILETIME epoch)
/// and 1970-01-01T00:00:00Z (the Unix epoch).
const EPOCH_DIFFERENCE_TICKS: i64 = 116_444_736_000_000_000;

/// Converts a FILETIME tick count to nanoseconds since the Unix epoch.
///
/// Ticks smaller than the epoch-difference constant (dates before 1970)
/// wrap through `u64`; the result is well-defined but not a calendar time.
pub fn ticks_to_unix_nanos(ticks: u64) -> u64 {
    ticks
        .wrapping_sub(EPOCH_DIFFERENCE_TICKS as u64)
        .wrapping_mul(100)
}

/// Converts nanoseconds since the Unix epoch to a FILETIME tick count.
///
/// Inverse of [`ticks_to_unix_nanos`] up to tick resolution: the sub-100ns
/// remainder is truncated, not rounded.
pub fn unix_nanos_to_ticks(nanos: i64) -> i64 {
    nanos / 100 + EPOCH_DIFFERENCE_TICKS
}

/// A FILETIME value split into the two 32-bit halves of the Windows
/// structure of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filetime {
    /// Low-order 32 bits of the tick count.
    pub low: u32,
    /// High-order 32 bits of the tick count.
    pub high: u32,
}

impl Filetime {
    /// Splits a Unix-nanosecond timestamp into FILETIME halves.
    pub fn from_unix_nanos(nanos: i64) -> Self {
        let ticks = unix_nanos_to_ticks(nanos);
        Self {
            low: (ticks & 0xFFFF_FFFF) as u32,
            high: ((ticks >> 32) & 0xFFFF_FFFF) as u32,
        }
    }

    /// Returns the value as nanoseconds since the Unix epoch.
    pub fn unix_nanos(&self) -> i64 {
        let ticks = (i64::from(self.high) << 32) | i64::from(self.low);
        ticks
            .wrapping_sub(EPOCH_DIFFERENCE_TICKS)
            .wrapping_mul(100)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_ticks_to_unix_nanos_vectors() {
        let vectors: [(u64, u64, &str); 5] = [
            (128166372003061629, 1172163600306162900, "2007-02-22T17:00:00.306Z"),
            (128166372016382155, 1172163601638215500, "2007-02-22T17:00:01.638Z"),
            (128166372026382245, 1172163602638224500, "2007-02-22T17:00:02.638Z"),
            (130016196641685504, 1357146064168550400, "2013-01-02T17:01:04.168Z"),
            (132202644759904256, 1575790875990425600, "2019-12-08T07:41:15.990Z"),
        ];

        for (ticks, nanos, when) in vectors {
            assert_eq!(ticks_to_unix_nanos(ticks), nanos, "mismatch for {}", when);
        }
    }

    #[test]
    fn test_unix_nanos_to_ticks_vectors() {
        assert_eq!(unix_nanos_to_ticks(1357146064168550400), 130016196641685504);
        assert_eq!(unix_nanos_to_ticks(1575790875990425600), 132202644759904256);
    }

    #[test]
    fn test_sub_tick_precision_is_truncated() {
        assert_eq!(unix_nanos_to_ticks(199), unix_nanos_to_ticks(100));
        assert_ne!(unix_nanos_to_ticks(200), unix_nanos_to_ticks(199));
    }

    #[test]
    fn test_epoch_boundary() {
        // the Unix epoch itself
        assert_eq!(ticks_to_unix_nanos(116_444_736_000_000_000), 0);
        assert_eq!(unix_nanos_to_ticks(0), 116_444_736_000_000_000);

        // one tick before 1970 wraps rather than failing
        assert_eq!(
            ticks_to_unix_nanos(116_444_735_999_999_999),
            0u64.wrapping_sub(100)
        );
    }

    #[test]
    fn test_filetime_split_roundtrip() {
        let nanos = 1575790875990425600i64;
        let ft = Filetime::from_unix_nanos(nanos);
        assert_eq!(ft.unix_nanos(), nanos);

        // the halves carry the full tick value
        let ticks = unix_nanos_to_ticks(nanos);
        assert_eq!(ft.low, (ticks & 0xFFFF_FFFF) as u32);
        assert_eq!(ft.high, (ticks >> 32) as u32);
    }

    proptest! {
        /// Converting ticks to nanoseconds and back is stable for any tick
        /// value on the calendar side of the Unix epoch: a second pass
        /// reproduces the first exactly.
        #[test]
        fn roundtrip_is_exact_for_calendar_ticks(
            ticks in 116_444_736_000_000_000u64..=200_000_000_000_000_000,
        ) {
            let nanos = ticks_to_unix_nanos(ticks);
            let again = ticks_to_unix_nanos(unix_nanos_to_ticks(nanos as i64) as u64);
            prop_assert_eq!(again, nanos);
        }

        /// Filetime halves always reassemble into the nanoseconds they were
        /// split from, up to tick truncation.
        #[test]
        fn filetime_roundtrip(nanos in 0i64..=4_000_000_000_000_000_000) {
            let aligned = nanos - nanos % 100;
            prop_assert_eq!(Filetime::from_unix_nanos(nanos).unix_nanos(), aligned);
        }
    }
}
