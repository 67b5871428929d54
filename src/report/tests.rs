use crate::lexer::lexer::{scan, scan_with_registry};

use super::report::{category_counts, render_identifiers, render_report, render_summary, render_tokens};

#[test]
fn test_render_tokens_numbers_lines() {
    let rendered = render_tokens(&scan("x = 1;"));

    assert!(rendered.contains("   1. Token(IDENTIFIER     , 'x                   ', Row:   1, Col:   1)"));
    assert!(rendered.contains("   4. Token(SEPARATOR      , ';                   ', Row:   1, Col:   6)"));
    assert!(rendered.contains("Total tokens: 4"));
}

#[test]
fn test_render_identifiers_table() {
    let result = scan_with_registry("b = a + b;");
    let rendered = render_identifiers(&result.identifiers);

    let rows: Vec<&str> = rendered
        .lines()
        .filter(|line| line.contains(" | IDENTIFIER      | "))
        .collect();
    assert_eq!(rows.len(), 2);
    // Ordered by name, so `a` comes first even though `b` was seen first
    assert!(rows[0].starts_with("    2 | a "));
    assert!(rows[1].starts_with("    1 | b "));
    assert!(rows[1].trim_end().ends_with('2'));
    assert!(rendered.contains("Unique identifiers: 2"));
}

#[test]
fn test_category_counts() {
    let counts = category_counts(&scan("int x = 1 + 2.5; @"));

    assert_eq!(counts.get("RESERVED"), Some(&1));
    assert_eq!(counts.get("IDENTIFIER"), Some(&1));
    assert_eq!(counts.get("OPERATOR"), Some(&2));
    assert_eq!(counts.get("INTEGER"), Some(&1));
    assert_eq!(counts.get("DECIMAL"), Some(&1));
    assert_eq!(counts.get("SEPARATOR"), Some(&1));
    assert_eq!(counts.get("UNRECOGNIZED"), Some(&1));
    assert_eq!(counts.get("TEXT_LITERAL"), None);

    let labels: Vec<&str> = counts.keys().copied().collect();
    let mut sorted = labels.clone();
    sorted.sort();
    assert_eq!(labels, sorted);
}

#[test]
fn test_render_summary() {
    let rendered = render_summary(&scan("'a' 'b'"));
    assert!(rendered.contains(&format!("{:20}: {:5}", "TEXT_LITERAL", 2)));
}

#[test]
fn test_render_report_sections_in_order() {
    let rendered = render_report(&scan_with_registry("y = y * 2;"));

    let tokens = rendered.find("TOKENS").unwrap();
    let identifiers = rendered.find("IDENTIFIER TABLE").unwrap();
    let summary = rendered.find("SUMMARY").unwrap();
    assert!(tokens < identifiers);
    assert!(identifiers < summary);
}

#[test]
fn test_render_empty_scan() {
    let rendered = render_report(&scan_with_registry(""));

    assert!(rendered.contains("Total tokens: 0"));
    assert!(rendered.contains("Unique identifiers: 0"));
}
