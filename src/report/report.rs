use std::{collections::BTreeMap, fmt::Write};

use crate::{
    lexer::{lexer::ScanResult, tokens::{Token, TokenCategory}},
    registry::registry::IdentifierRegistry,
};

const WIDTH: usize = 80;

fn rule(out: &mut String, c: char) {
    out.extend(std::iter::repeat(c).take(WIDTH));
    out.push('\n');
}

fn heading(out: &mut String, title: &str) {
    rule(out, '=');
    out.push_str(title);
    out.push('\n');
    rule(out, '=');
}

/// Numbered listing of every token, one per line.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    heading(&mut out, "TOKENS");

    for (number, token) in tokens.iter().enumerate() {
        let _ = writeln!(out, "{:4}. {}", number + 1, token);
    }

    rule(&mut out, '=');
    let _ = writeln!(out, "Total tokens: {}", tokens.len());
    rule(&mut out, '=');
    out
}

/// Identifier table ordered by name.
pub fn render_identifiers(registry: &IdentifierRegistry) -> String {
    let mut out = String::new();
    heading(&mut out, "IDENTIFIER TABLE");
    let _ = writeln!(
        out,
        "{:5} | {:20} | {:15} | {:6} | {:7} | {:12}",
        "NUM", "IDENTIFIER", "CATEGORY", "ROW", "COLUMN", "USES"
    );
    rule(&mut out, '-');

    for entry in registry.snapshot() {
        let (row, column) = entry.first_occurrence;
        let _ = writeln!(
            out,
            "{:5} | {:20} | {:15} | {:6} | {:7} | {:12}",
            entry.sequence,
            entry.name,
            TokenCategory::Identifier,
            row,
            column,
            entry.occurrence_count
        );
    }

    rule(&mut out, '=');
    let _ = writeln!(out, "Unique identifiers: {}", registry.len());
    rule(&mut out, '=');
    out
}

/// Token counts per category, keyed and ordered by category label.
///
/// Categories that never occur are left out.
pub fn category_counts(tokens: &[Token]) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.category.label()).or_insert(0) += 1;
    }
    counts
}

pub fn render_summary(tokens: &[Token]) -> String {
    let mut out = String::new();
    heading(&mut out, "SUMMARY");

    for (label, count) in category_counts(tokens) {
        let _ = writeln!(out, "{:20}: {:5}", label, count);
    }

    rule(&mut out, '=');
    out
}

/// Token listing, identifier table and summary, in that order.
pub fn render_report(result: &ScanResult) -> String {
    let mut out = render_tokens(&result.tokens);
    out.push('\n');
    out.push_str(&render_identifiers(&result.identifiers));
    out.push('\n');
    out.push_str(&render_summary(&result.tokens));
    out
}
