//! Immutable bank account ledger
//!
//! Every operation returns a new value; an `AccountHistory` pairs the current
//! account snapshot with the append-only list of transactions that led to it.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::value_objects::{Money, TransactionId};
use crate::error::{LibraryError, LibraryResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankAccount {
    number: String,
    owner: String,
    balance: Money,
}

impl BankAccount {
    pub fn new(number: impl Into<String>, owner: impl Into<String>, balance: Money) -> LibraryResult<Self> {
        let number = number.into();
        if number.trim().is_empty() {
            return Err(LibraryError::BlankField {
                field: "account number",
            });
        }
        Ok(Self {
            number,
            owner: owner.into(),
            balance,
        })
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn deposit(&self, amount: Money) -> LibraryResult<Self> {
        if amount.is_zero() {
            return Err(LibraryError::NonPositiveAmount {
                operation: "deposit",
            });
        }
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LibraryError::BalanceOverflow {
                balance: self.balance.to_string(),
                deposit: amount.to_string(),
            })?;
        Ok(Self {
            balance,
            ..self.clone()
        })
    }

    pub fn withdraw(&self, amount: Money) -> LibraryResult<Self> {
        if amount.is_zero() {
            return Err(LibraryError::NonPositiveAmount {
                operation: "withdrawal",
            });
        }
        let balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| LibraryError::InsufficientFunds {
                balance: self.balance.to_string(),
                requested: amount.to_string(),
            })?;
        Ok(Self {
            balance,
            ..self.clone()
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,
    pub account_number: String,
    pub amount: Money,
    pub kind: TransactionKind,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountHistory {
    account: BankAccount,
    transactions: Vec<Transaction>,
}

impl AccountHistory {
    pub fn new(account: BankAccount) -> Self {
        Self {
            account,
            transactions: Vec::new(),
        }
    }

    pub fn account(&self) -> &BankAccount {
        &self.account
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn add_transaction(&self, transaction: Transaction) -> Self {
        let mut transactions = self.transactions.clone();
        transactions.push(transaction);
        Self {
            account: self.account.clone(),
            transactions,
        }
    }

    pub fn with_account(&self, account: BankAccount) -> Self {
        Self {
            account,
            transactions: self.transactions.clone(),
        }
    }

    /// Deposit into the account and record it
    pub fn deposit(&self, amount: Money, at: DateTime<Utc>) -> LibraryResult<Self> {
        let account = self.account.deposit(amount)?;
        Ok(self
            .with_account(account)
            .add_transaction(self.transaction(amount, TransactionKind::Deposit, at)))
    }

    /// Withdraw from the account and record it
    pub fn withdraw(&self, amount: Money, at: DateTime<Utc>) -> LibraryResult<Self> {
        let account = self.account.withdraw(amount)?;
        Ok(self
            .with_account(account)
            .add_transaction(self.transaction(amount, TransactionKind::Withdrawal, at)))
    }

    fn transaction(&self, amount: Money, kind: TransactionKind, at: DateTime<Utc>) -> Transaction {
        Transaction {
            id: TransactionId::generate(),
            account_number: self.account.number.clone(),
            amount,
            kind,
            timestamp: at,
        }
    }
}
