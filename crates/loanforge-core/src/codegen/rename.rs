//! Contract declaration renaming.
//!
//! Locates the `contract` keyword followed by whitespace and the exact base
//! identifier, and swaps in the qualified name. Anything else that merely
//! contains the base name (`BaseNameV2`, `subcontract BaseName`, a bare
//! `BaseName` reference) is left alone. Occurrences inside comments or string
//! literals are still rewritten; this is a scanner, not a parser.

const KEYWORD: &str = "contract";

/// Rewrite every `contract <base_name>` declaration to `contract <qualified_name>`.
///
/// Whitespace between the keyword and the identifier is preserved.
pub fn qualify_contract_name(source: &str, base_name: &str, qualified_name: &str) -> String {
    if base_name.is_empty() {
        return source.to_string();
    }

    let mut out = String::with_capacity(source.len() + qualified_name.len());
    let mut copied_up_to = 0;
    let mut search_from = 0;

    while let Some(offset) = source[search_from..].find(KEYWORD) {
        let keyword_start = search_from + offset;
        let keyword_end = keyword_start + KEYWORD.len();
        search_from = keyword_end;

        if source[..keyword_start].chars().next_back().is_some_and(is_ident_char) {
            continue;
        }

        let after_keyword = &source[keyword_end..];
        let gap = after_keyword.len() - after_keyword.trim_start().len();
        if gap == 0 {
            continue;
        }

        let name_start = keyword_end + gap;
        if !source[name_start..].starts_with(base_name) {
            continue;
        }

        let name_end = name_start + base_name.len();
        if source[name_end..].chars().next().is_some_and(is_ident_char) {
            continue;
        }

        out.push_str(&source[copied_up_to..name_start]);
        out.push_str(qualified_name);
        copied_up_to = name_end;
        search_from = name_end;
    }

    out.push_str(&source[copied_up_to..]);
    out
}

/// Solidity identifiers are `[a-zA-Z0-9_$]`; Unicode letters are treated the same.
fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
