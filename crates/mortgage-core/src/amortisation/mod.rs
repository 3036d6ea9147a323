//! The amortisation core: fixed monthly payment, first-payment split, and
//! a bounded schedule preview.

pub mod payment;
pub mod split;

#[cfg(feature = "schedule")]
pub mod schedule;
