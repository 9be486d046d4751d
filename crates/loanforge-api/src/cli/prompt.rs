//! `loanforge prompt`: render the generation prompt without calling out.

use loanforge_core::prompt::{PromptStyle, build_prompt};
use loanforge_types::loan::LoanRecord;

pub fn print_prompt(loan: &LoanRecord, style: PromptStyle) {
    println!("{}", build_prompt(loan, style));
}
