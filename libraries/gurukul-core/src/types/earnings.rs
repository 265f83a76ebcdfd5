//! Earnings and payout types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of ledger transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money earned from courses or events
    Earning,
    /// Payout to the partner's account
    Withdrawal,
}

impl TransactionKind {
    /// Convert kind to its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Earning => "earning",
            TransactionKind::Withdrawal => "withdrawal",
        }
    }
}

/// Settlement status of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Not yet settled
    Pending,
    /// Settled
    Completed,
    /// Settlement failed
    Failed,
}

impl TransactionStatus {
    /// Convert status to its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Failed => "failed",
        }
    }
}

/// A ledger transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique transaction identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Earning or withdrawal
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Amount in the platform currency
    pub amount: f64,

    /// Settlement status
    pub status: TransactionStatus,

    /// When the transaction was recorded
    pub created_at: DateTime<Utc>,

    /// Backend-defined extra detail
    pub meta: Option<serde_json::Value>,
}

/// Earnings aggregated for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAmount {
    /// Month label, e.g. "2024-03"
    pub month: String,

    /// Amount earned in that month
    pub amount: f64,
}

/// Earnings summary for the partner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Earnings {
    /// Lifetime earnings
    pub total_earnings: f64,

    /// Balance currently available for withdrawal
    pub available_balance: f64,

    /// Per-month breakdown
    #[serde(default)]
    pub monthly_earnings: Vec<MonthlyAmount>,

    /// Recent transactions
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_earnings_summary() {
        let json = r#"{
            "totalEarnings": 52000.0,
            "availableBalance": 8100.5,
            "monthlyEarnings": [{"month": "2024-02", "amount": 4000.0}],
            "transactions": [{
                "_id": "t-1",
                "type": "withdrawal",
                "amount": 2500.0,
                "status": "completed",
                "createdAt": "2024-02-20T08:00:00.000Z"
            }]
        }"#;

        let earnings: Earnings = serde_json::from_str(json).unwrap();
        assert_eq!(earnings.monthly_earnings[0].month, "2024-02");
        assert_eq!(earnings.transactions[0].kind, TransactionKind::Withdrawal);
        assert_eq!(earnings.transactions[0].status, TransactionStatus::Completed);
    }

    #[test]
    fn transaction_kind_uses_type_on_the_wire() {
        let tx = Transaction {
            id: "t-2".to_string(),
            kind: TransactionKind::Earning,
            amount: 100.0,
            status: TransactionStatus::Pending,
            created_at: Utc::now(),
            meta: None,
        };

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "earning");
    }
}
