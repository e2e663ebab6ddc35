//! Month-by-month amortization schedule.
//!
//! The schedule is produced by [`ScheduleIter`], a lazy iterator that walks
//! from month 0 (before any payment) to the final month inclusive. It must be
//! fed the monthly rate and payment of a prior valid
//! [`compute_payment`](super::compute_payment) call so that the schedule and
//! the displayed payment agree exactly.

use std::iter::FusedIterator;

use crate::models::{LoanResult, ScheduleEntry};

/// Lazy iterator over the entries of an amortization schedule.
///
/// Yields `num_months + 1` entries for a non-negative month count and none
/// for a negative one.
///
/// # Example
///
/// ```
/// use loan_engine::amortization::{compute_payment, ScheduleIter};
///
/// let result = compute_payment(12000.0, 12.0, 1.0).unwrap();
/// let mut schedule = ScheduleIter::from_result(&result);
/// assert_eq!(schedule.len(), 13);
///
/// let first = schedule.next().unwrap();
/// assert_eq!(first.month_index, 0);
/// assert_eq!(first.equity, 0.0);
/// assert_eq!(first.remaining_balance, 12000.0);
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleIter {
    principal: f64,
    monthly_rate: f64,
    monthly_payment: f64,
    len: u32,
    next_index: u32,
    equity: f64,
    remaining_balance: f64,
}

impl ScheduleIter {
    /// Creates a schedule iterator from explicit loan parameters.
    ///
    /// `num_months` is the value produced by the payment calculation. Counts
    /// beyond the `u32` range are truncated.
    pub fn new(principal: f64, monthly_rate: f64, monthly_payment: f64, num_months: f64) -> Self {
        let len = if num_months >= 0.0 {
            // saturating cast, then one extra entry for month 0
            (num_months.min(f64::from(u32::MAX - 1)) as u32) + 1
        } else {
            0
        };

        Self {
            principal,
            monthly_rate,
            monthly_payment,
            len,
            next_index: 0,
            equity: 0.0,
            remaining_balance: principal,
        }
    }

    /// Creates a schedule iterator for a computed [`LoanResult`].
    pub fn from_result(result: &LoanResult) -> Self {
        Self::new(
            result.principal,
            result.monthly_rate,
            result.monthly_payment,
            result.num_months,
        )
    }
}

impl Iterator for ScheduleIter {
    type Item = ScheduleEntry;

    fn next(&mut self) -> Option<ScheduleEntry> {
        if self.next_index >= self.len {
            return None;
        }

        let month_index = self.next_index;
        if month_index == 0 {
            self.equity = 0.0;
            self.remaining_balance = self.principal;
        } else {
            self.equity +=
                self.monthly_payment - (self.principal - self.equity) * self.monthly_rate;
            self.remaining_balance -=
                self.monthly_payment - self.remaining_balance * self.monthly_rate;
        }
        self.next_index += 1;

        Some(ScheduleEntry {
            month_index,
            cumulative_interest_paid: f64::from(month_index) * self.monthly_payment,
            equity: self.equity,
            remaining_balance: self.remaining_balance,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.len - self.next_index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScheduleIter {}

impl FusedIterator for ScheduleIter {}

/// Builds the full amortization schedule.
///
/// # Arguments
///
/// * `principal` - The amount borrowed
/// * `monthly_rate` - The monthly rate used to compute the payment
/// * `monthly_payment` - The payment returned by the payment calculation
/// * `num_months` - The number of payments
///
/// # Examples
///
/// ```
/// use loan_engine::amortization::{build_schedule, compute_payment};
///
/// let result = compute_payment(100000.0, 6.0, 30.0).unwrap();
/// let schedule = build_schedule(
///     result.principal,
///     result.monthly_rate,
///     result.monthly_payment,
///     result.num_months,
/// );
/// assert_eq!(schedule.len(), 361);
/// assert!(schedule[360].remaining_balance.abs() < 0.01);
/// ```
pub fn build_schedule(
    principal: f64,
    monthly_rate: f64,
    monthly_payment: f64,
    num_months: f64,
) -> Vec<ScheduleEntry> {
    ScheduleIter::new(principal, monthly_rate, monthly_payment, num_months).collect()
}
