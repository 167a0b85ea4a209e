//! Computation provider capability
//!
//! The blink delay is derived from a single integer obtained from an
//! external computation routine. The routine is opaque to this crate: it
//! takes no arguments, has no error channel, and may return any integer,
//! including zero or negative values. It is called exactly once at startup
//! and must return promptly; a blocking provider blocks everything that
//! follows.
//!
//! Modeling the routine as a trait lets tests and demos substitute a
//! deterministic stand-in for the externally linked implementation.

/// Source of the startup computation result
pub trait ComputeProvider {
    /// Produce the computation result
    ///
    /// Called exactly once, synchronously. There is no error channel; any
    /// `i32` is a valid return value.
    fn compute(&mut self) -> i32;
}

/// Deterministic provider returning a fixed result
///
/// Stand-in for the external routine in tests and demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedCompute {
    result: i32,
}

impl FixedCompute {
    /// Create a provider that always returns `result`
    pub fn new(result: i32) -> Self {
        Self { result }
    }
}

impl ComputeProvider for FixedCompute {
    fn compute(&mut self) -> i32 {
        self.result
    }
}

#[cfg(feature = "pico_w")]
extern "C" {
    /// Externally linked computation routine
    ///
    /// Provided by a separately assembled object linked into the firmware
    /// image. Takes no arguments, returns promptly, cannot fail.
    fn asm_compute() -> i32;
}

/// Provider backed by the externally linked `asm_compute` routine
///
/// # Linking
///
/// Firmware builds must link an object that defines the `asm_compute`
/// symbol with the C ABI `() -> i32`.
#[cfg(feature = "pico_w")]
#[derive(Debug, Clone, Copy, Default)]
pub struct AsmCompute;

#[cfg(feature = "pico_w")]
impl AsmCompute {
    /// Create a provider bound to the external routine
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "pico_w")]
impl ComputeProvider for AsmCompute {
    fn compute(&mut self) -> i32 {
        // Symbol contract: no arguments, no side effects visible to us,
        // always returns.
        unsafe { asm_compute() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_compute_returns_value() {
        let mut provider = FixedCompute::new(7);
        assert_eq!(provider.compute(), 7);
    }

    #[test]
    fn test_fixed_compute_accepts_any_integer() {
        assert_eq!(FixedCompute::new(0).compute(), 0);
        assert_eq!(FixedCompute::new(-3).compute(), -3);
        assert_eq!(FixedCompute::new(i32::MAX).compute(), i32::MAX);
    }
}
