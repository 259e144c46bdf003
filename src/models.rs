// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ValidationError;
use crate::lexicon::Category;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Expense,
    Income,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub amount: Decimal,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub r#type: TransactionType,
    pub date: NaiveDateTime,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.r#type == TransactionType::Expense
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryConfig {
    pub amount: Decimal,
    pub pay_day: u32,
    pub balance: Decimal,
}

impl SalaryConfig {
    /// First-time configuration: the opening balance must not be negative.
    pub fn new(amount: Decimal, pay_day: u32, balance: Decimal) -> Result<Self, ValidationError> {
        if balance < Decimal::ZERO {
            return Err(ValidationError::NegativeBalance(balance));
        }
        Self::with_balance(amount, pay_day, balance)
    }

    /// Configuration carrying a running balance, which may already be
    /// overdrawn.
    pub fn with_balance(
        amount: Decimal,
        pay_day: u32,
        balance: Decimal,
    ) -> Result<Self, ValidationError> {
        let cfg = SalaryConfig {
            amount,
            pay_day,
            balance,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks that hold for stored state as well as new entries. The balance
    /// is signed and is not checked here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidSalary(self.amount));
        }
        if !(1..=31).contains(&self.pay_day) {
            return Err(ValidationError::InvalidPayDay(self.pay_day));
        }
        Ok(())
    }

    /// Apply a recorded transaction to the running balance. The balance may go
    /// negative once spending exceeds it.
    pub fn record(&mut self, tx: &Transaction) {
        match tx.r#type {
            TransactionType::Expense => self.balance -= tx.amount,
            TransactionType::Income => self.balance += tx.amount,
        }
    }
}

/// Candidate produced by the quick-add parser. Nothing is persisted until the
/// host turns it into a [`Transaction`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedExpense {
    pub amount: Decimal,
    pub category: Category,
    pub description: String,
}

impl ParsedExpense {
    pub fn is_valid(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn into_transaction(
        self,
        id: i64,
        r#type: TransactionType,
        date: NaiveDateTime,
    ) -> Result<Transaction, ValidationError> {
        if !self.is_valid() {
            return Err(ValidationError::NonPositiveAmount(self.amount));
        }
        Ok(Transaction {
            id,
            amount: self.amount,
            category: self.category.to_string(),
            description: self.description,
            r#type,
            date,
        })
    }
}
