//! OfferCompErrorCode trait for host-boundary conversion.

/// Every error enum implements this to provide a structured
/// error code string for a TypeScript host.
pub trait OfferCompErrorCode {
    /// Returns the error code string (e.g., "INVALID_OFFER").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted host string: `[ERROR_CODE] message`.
    fn host_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the host boundary.
pub const INVALID_OFFER: &str = "INVALID_OFFER";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SCENARIO_ERROR: &str = "SCENARIO_ERROR";
