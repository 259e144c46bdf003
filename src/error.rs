// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

/// Rejections raised at the boundary between the host and the pure core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Salary amount must be positive, got {0}")]
    InvalidSalary(Decimal),
    #[error("Pay day must be between 1 and 31, got {0}")]
    InvalidPayDay(u32),
    #[error("Opening balance cannot be negative, got {0}")]
    NegativeBalance(Decimal),
    #[error("Transaction amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),
    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),
}
