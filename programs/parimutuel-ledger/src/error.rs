//! Error types for the parimutuel ledger

use num_derive::FromPrimitive;
use num_traits::FromPrimitive as _;
use thiserror::Error;

/// Result alias used by every ledger operation.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Custom error type for the parimutuel ledger
#[derive(Clone, Copy, Debug, Eq, Error, FromPrimitive, PartialEq)]
pub enum LedgerError {
    // Authorization errors (6000-6009)
    #[error("Unauthorized")]
    Unauthorized = 6000,

    // Slot lifecycle errors (6010-6019)
    #[error("Close time must be after open time")]
    InvalidTimeWindow = 6010,

    #[error("Slot already exists")]
    SlotAlreadyExists = 6011,

    #[error("Slot not found")]
    SlotNotFound = 6012,

    #[error("Slot already resolved")]
    SlotAlreadyResolved = 6013,

    #[error("Slot not resolved")]
    SlotNotResolved = 6014,

    #[error("Invalid option list")]
    InvalidOptionList = 6015,

    // Staking errors (6020-6029)
    #[error("Betting window closed")]
    BettingWindowClosed = 6020,

    #[error("Duplicate stake")]
    DuplicateStake = 6021,

    #[error("Invalid option index")]
    InvalidOption = 6022,

    #[error("Invalid stake amount")]
    InvalidStakeAmount = 6023,

    #[error("Insufficient funds")]
    InsufficientFunds = 6024,

    // Claim errors (6030-6039)
    #[error("No winners for this slot")]
    NoWinners = 6030,

    #[error("Prediction not found")]
    PredictionNotFound = 6031,

    #[error("Reward already claimed")]
    AlreadyClaimed = 6032,

    #[error("Not a winner")]
    NotAWinner = 6033,

    // Accounting invariant errors (6040-6049)
    #[error("Insufficient vault balance")]
    InsufficientVaultBalance = 6040,

    #[error("Arithmetic overflow")]
    ArithmeticOverflow = 6041,

    #[error("Division by zero")]
    DivisionByZero = 6042,
}

impl LedgerError {
    /// Stable numeric code, e.g. for host-side error tables.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Decode a stored numeric code back into an error.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::from_u32(code)
    }

    /// Errors in this class indicate a broken accounting invariant rather
    /// than a rejected request, and should be escalated by the host.
    pub fn is_invariant_violation(self) -> bool {
        matches!(
            self,
            Self::InsufficientVaultBalance | Self::ArithmeticOverflow | Self::DivisionByZero
        )
    }
}
