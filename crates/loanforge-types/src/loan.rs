use serde::{Deserialize, Serialize};

/// The loan a generated contract encodes.
///
/// Built once at startup from the `[loan]` table of the config file and passed
/// by reference into every request. Any field left out of the table falls back
/// to the sample record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanRecord {
    /// Name the generated `contract` declaration must carry.
    pub contract_name: String,
    pub borrower: Borrower,
    /// Principal in whole currency units; the currency itself is implicit.
    pub amount: u64,
    /// Free-text loan category ("Home Loan", "Auto Loan", ...).
    pub loan_type: String,
    /// Calendar date (YYYY-MM-DD) by which the loan should complete.
    pub desired_timeline: String,
}

/// Contact details for the borrower named in the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Borrower {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl LoanRecord {
    /// Contract name used when no `[loan]` table is configured.
    pub const DEFAULT_CONTRACT_NAME: &'static str = "CustomMortgageLoan";
}

impl Default for LoanRecord {
    fn default() -> Self {
        Self {
            contract_name: Self::DEFAULT_CONTRACT_NAME.to_string(),
            borrower: Borrower::default(),
            amount: 200_000,
            loan_type: "Home Loan".to_string(),
            desired_timeline: "2025-06-30".to_string(),
        }
    }
}

impl Default for Borrower {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            phone: "+1-555-0100".to_string(),
            email: "john.doe@example.com".to_string(),
            address: "123 Main Street, Springfield, IL 62701".to_string(),
        }
    }
}
