/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of a portfolio transaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Adds units of the asset to the portfolio
    #[default]
    Buy,
    /// Removes units of the asset from the portfolio
    Sell,
}

/// Classification tag attached to a transaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    /// Listed equity
    #[default]
    Stock,
    /// Fixed income instrument or bond ETF
    Bond,
    /// Mutual fund share class
    MutualFund,
}

/// Movement applied to a settlement account
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SettlementAction {
    /// Credit the account
    #[default]
    Add,
    /// Debit the account
    Withdraw,
}

impl TransactionType {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => "buy",
            TransactionType::Sell => "sell",
        }
    }
}

impl AssetType {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Stock => "stock",
            AssetType::Bond => "bond",
            AssetType::MutualFund => "mutual_fund",
        }
    }
}

impl SettlementAction {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SettlementAction::Add => "add",
            SettlementAction::Withdraw => "withdraw",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SettlementAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
