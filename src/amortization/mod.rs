//! The amortization engine.
//!
//! This module contains the pure computation at the center of the crate:
//! the closed-form monthly payment and the month-by-month schedule of
//! equity and balance derived from it. Nothing here performs I/O.

mod payment;
mod schedule;

pub use payment::{MONTHS_PER_YEAR, compute_for, compute_payment, monthly_rate};
pub use schedule::{ScheduleIter, build_schedule};
