//! Fundamental domain value types used throughout the pool engine.
//!
//! Every quantity the engine touches is a newtype with a validated
//! constructor: raw token amounts, LP share units, fee rates in basis
//! points, mint identifiers, and the input/receipt types of the four
//! operations. Arithmetic on these types is checked and every division
//! takes an explicit [`Rounding`] direction.

mod amount;
mod basis_points;
mod liquidity_outcome;
mod lp_tokens;
mod mint_id;
mod mint_pair;
mod rounding;
mod swap_direction;
mod swap_outcome;

pub use amount::Amount;
pub use basis_points::BasisPoints;
pub use liquidity_outcome::{DepositOutcome, WithdrawOutcome};
pub use lp_tokens::LpTokens;
pub use mint_id::MintId;
pub use mint_pair::MintPair;
pub use rounding::Rounding;
pub use swap_direction::SwapDirection;
pub use swap_outcome::SwapOutcome;
