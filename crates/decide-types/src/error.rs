// ─────────────────────────────────────────────────────────────────────
// Launch Interceptor — DECIDE Kernel Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for input handling around the DECIDE kernel.
///
/// The decision itself is total and never produces one of these: an
/// out-of-range parameter only turns its LIC false. Errors exist for the
/// layers that build a `DecideInput` from the outside world.
#[derive(Error, Debug)]
pub enum DecideError {
    /// Input document could not be read.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Input document is not well-formed JSON or has the wrong shape
    /// (missing fields, fractional counts, LCM not 15×15 or PUV not 15
    /// entries when read from JSON).
    #[error("parse error: {0}")]
    Parse(String),

    /// Input is well-formed but carries values the kernel is not total
    /// over (NaN or infinite coordinates and thresholds), or an LCM or
    /// PUV built outside JSON has the wrong shape (`lcm_from_rows`,
    /// `puv_from_slice`).
    #[error("validation error: {0}")]
    Validation(String),
}

pub type DecideResult<T> = Result<T, DecideError>;
