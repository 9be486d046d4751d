//! Prompt builder for contract generation.
//!
//! Both styles interpolate every loan field and the same feature list; they
//! differ only in how strictly they forbid text around the code.
//!
//! Layout:
//! ```text
//! {intro}
//!
//! Contract name: ...
//! Borrower name: ... (phone, email, address)
//! Loan amount / Loan type / Desired timeline
//!
//! The contract must include:
//! 1. ... 6. ...
//!
//! {closing instructions}
//! ```

use loanforge_types::loan::LoanRecord;

/// Which request flow the prompt is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    /// Preview flow: the model may wrap or annotate the code.
    Preview,
    /// Deploy flow: the response is written straight to disk and compiled.
    Deploy,
}

/// Features every generated contract must implement.
const REQUIRED_FEATURES: &[&str] = &[
    "A `LoanStatus` enum with exactly four states: Pending, Active, Repaid, Defaulted",
    "An admin address set in the constructor and an `onlyAdmin` modifier guarding status changes",
    "Admin-only functions to approve the loan, record repayment, and mark a default",
    "Timeline validation that rejects a completion deadline in the past",
    "An `// SPDX-License-Identifier: MIT` license header as the first line",
    "A `pragma solidity ^0.8.0;` version pragma",
];

/// Build the generation prompt for `loan`.
pub fn build_prompt(loan: &LoanRecord, style: PromptStyle) -> String {
    let mut sections = Vec::with_capacity(4);

    sections.push(match style {
        PromptStyle::Preview => {
            "Write a Solidity smart contract for the following loan agreement.".to_string()
        }
        PromptStyle::Deploy => "Generate a complete, compilable Solidity smart contract \
            for the following loan agreement."
            .to_string(),
    });

    sections.push(format!(
        "Contract name: {}\n\
         Borrower name: {}\n\
         Borrower phone: {}\n\
         Borrower email: {}\n\
         Borrower address: {}\n\
         Loan amount: {}\n\
         Loan type: {}\n\
         Desired timeline: {}",
        loan.contract_name,
        loan.borrower.name,
        loan.borrower.phone,
        loan.borrower.email,
        loan.borrower.address,
        loan.amount,
        loan.loan_type,
        loan.desired_timeline,
    ));

    let features = REQUIRED_FEATURES
        .iter()
        .enumerate()
        .map(|(i, feature)| format!("{}. {feature}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");
    sections.push(format!("The contract must include:\n{features}"));

    sections.push(match style {
        PromptStyle::Preview => format!(
            "Name the contract `{}`. Include brief comments where helpful.",
            loan.contract_name
        ),
        PromptStyle::Deploy => format!(
            "The contract MUST be declared exactly as `contract {}`. \
             Respond with ONLY the Solidity source code. Do not include explanations, \
             notes, headings, or any text before or after the code.",
            loan.contract_name
        ),
    });

    sections.join("\n\n")
}
