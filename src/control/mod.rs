//! # Steering control
//!
//! A PID controller turns the horizontal offset between the traced line and
//! the image centre into a scalar steering correction. Time enters through the
//! [`Clock`] trait so runs can be replayed deterministically.
//!
//! ## Modules
//!
//! - [`clock`] - time sources for the controller.
//! - [`pid`] - the PID controller and its persistent state.

pub mod clock;
pub mod pid;

pub use clock::{Clock, FixedStepClock, MonotonicClock};
pub use pid::{PidController, PidGains, PidState};
