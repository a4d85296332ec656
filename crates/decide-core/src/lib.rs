// ─────────────────────────────────────────────────────────────────────
// Launch Interceptor — DECIDE Kernel Core Engine
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Geometry primitives, the fifteen Launch Interceptor Conditions, and
//! the CMV → PUM → FUV → launch reduction.
//!
//! # Invariants
//!
//! 1. **Total**: no combination of finite points, parameters, LCM and
//!    PUV makes the decision fail or panic. An out-of-range parameter
//!    turns its LIC false; a sequence shorter than a window has no
//!    windows and the LIC is false.
//!
//! 2. **Pure**: CMV, PUM, FUV and the decision depend only on the
//!    inputs. Nothing is cached between calls.
//!
//! 3. **Order-free**: every LIC reads immutable inputs and writes its
//!    own CMV slot, so sequential and `parallel` evaluation agree.

pub mod engine;
pub mod geometry;
pub mod lic;
pub mod window;

pub use engine::{
    decide, evaluate, final_unlocking_vector, launch_decision, preliminary_unlocking_matrix,
    DecideKernel,
};
pub use lic::{all_conditions_met, condition_met_vector, LicEvaluator, LIC_TABLE};
