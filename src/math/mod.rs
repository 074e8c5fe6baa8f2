//! Integer arithmetic primitives for pool pricing.
//!
//! Every ratio the engine computes — implied deposit amounts, LP mint
//! and burn shares, swap outputs — reduces to `a × b / d` with a `u128`
//! intermediate and an explicit [`Rounding`](crate::domain::Rounding)
//! direction. This module is the only place that widening and narrowing
//! happen; callers deal exclusively in domain newtypes.

mod mul_div;

pub use mul_div::{div_wide, mul_div};
