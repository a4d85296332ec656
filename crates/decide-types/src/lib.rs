// ─────────────────────────────────────────────────────────────────────
// Launch Interceptor — DECIDE Kernel Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Data model, input document, and error hierarchy for the DECIDE
//! launch interceptor kernel.

pub mod error;
pub mod input;
pub mod parameters;
pub mod report;

pub use error::{DecideError, DecideResult};
pub use input::{lcm_from_rows, puv_from_slice, Connector, DecideInput, Lcm, Point};
pub use parameters::{Parameters, PredicateMode};
pub use report::{Cmv, DecisionReport, Fuv, Pum, Puv, LIC_COUNT, LIC_NAMES};
