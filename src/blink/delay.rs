//! Blink delay derivation
//!
//! Maps the startup computation result to a millisecond delay. The result is
//! interpreted as seconds and widened before the multiply, so the full `i32`
//! range is handled without overflow. A floor clamp is the only sanitization:
//! zero and negative results are accepted and clamped up to the minimum, not
//! rejected.

/// Minimum blink delay in milliseconds
pub const MIN_DELAY_MS: u64 = 50;

/// Milliseconds per computation result unit
const MS_PER_UNIT: i64 = 1000;

/// Derive the blink delay from a computation result
///
/// The delay is `result * 1000` milliseconds, clamped to a floor of
/// [`MIN_DELAY_MS`]. There is no upper bound beyond the input range. Pure
/// function: the same result always yields the same delay.
pub fn derive_delay_ms(result: i32) -> u64 {
    let ms = i64::from(result) * MS_PER_UNIT;
    if ms < MIN_DELAY_MS as i64 {
        MIN_DELAY_MS
    } else {
        ms as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_result_clamps_to_floor() {
        assert_eq!(derive_delay_ms(0), 50);
    }

    #[test]
    fn test_one_second_result() {
        assert_eq!(derive_delay_ms(1), 1000);
    }

    #[test]
    fn test_non_negative_results_scale_linearly() {
        for r in [2, 3, 10, 60] {
            assert_eq!(derive_delay_ms(r), (r as u64) * 1000);
        }
    }

    #[test]
    fn test_negative_results_clamp_to_floor() {
        assert_eq!(derive_delay_ms(-1), 50);
        assert_eq!(derive_delay_ms(-1000), 50);
        assert_eq!(derive_delay_ms(i32::MIN), 50);
    }

    #[test]
    fn test_large_result_does_not_overflow() {
        assert_eq!(derive_delay_ms(i32::MAX), i32::MAX as u64 * 1000);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        for r in [-5, 0, 1, 42] {
            assert_eq!(derive_delay_ms(r), derive_delay_ms(r));
        }
    }
}
