//! Loan Engine
//!
//! This crate computes fixed-payment loan amortization: the monthly payment,
//! total payment and total interest of a loan, and the month-by-month
//! schedule of equity and balance used to chart it. Around that core it
//! persists the last inputs, looks up affiliated lenders and serves
//! everything over an HTTP API.

#![warn(missing_docs)]

pub mod amortization;
pub mod api;
pub mod calculator;
pub mod config;
pub mod error;
pub mod lenders;
pub mod models;
pub mod persistence;
pub mod presentation;
