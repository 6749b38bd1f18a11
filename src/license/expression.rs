//! Top-level splitting of license expressions at `AND` / `OR` boundaries.
//!
//! The grammar is deliberately small: opaque identifiers, the connectives
//! `AND` and `OR` (each surrounded by whitespace), and parentheses. Nothing is
//! validated; unbalanced parentheses simply leave the depth counter off zero
//! and suppress further splits.

/// A connective word an expression can be split on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    fn keyword(self) -> &'static str {
        match self {
            Connective::And => "AND",
            Connective::Or => "OR",
        }
    }
}

/// How each output part is trimmed before it is emitted.
#[derive(Debug, Clone, Copy)]
enum PartTrim {
    /// AND-parts keep their own parenthesised OR-groups for the next pass.
    Whitespace,
    /// OR-parts are meant to be bare identifiers.
    ParensAndWhitespace,
}

impl PartTrim {
    fn apply(self, part: &str) -> &str {
        match self {
            PartTrim::Whitespace => part.trim(),
            PartTrim::ParensAndWhitespace => trim_parens(part),
        }
    }
}

/// Strip stray parentheses and whitespace from both ends of `s`.
pub fn trim_parens(s: &str) -> &str {
    s.trim_matches(|c| matches!(c, '(' | ')' | ' ' | '\t' | '\n' | '\r'))
}

/// Split on `AND` at nesting depth zero.
///
/// `(Apache-2.0 OR MIT) AND BSD-3-Clause` → `["(Apache-2.0 OR MIT)", "BSD-3-Clause"]`
pub fn split_top_level_and(expr: &str) -> Vec<String> {
    split_top_level(expr, Connective::And, PartTrim::Whitespace)
}

/// Split on `OR` at nesting depth zero.
///
/// One wrapping pair of parentheses is removed first when the input both
/// starts with `(` and ends with `)`. The pair is not checked for matching,
/// so `(A) OR (B)` is read as `A) OR (B`.
///
/// `(Apache-2.0 OR MIT)` → `["Apache-2.0", "MIT"]`
pub fn split_top_level_or(expr: &str) -> Vec<String> {
    let inner = expr
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(expr);
    split_top_level(inner, Connective::Or, PartTrim::ParensAndWhitespace)
}

/// Single-pass depth-tracking scanner shared by both splitters.
fn split_top_level(expr: &str, on: Connective, trim: PartTrim) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth: i32 = 0;

    let mut flush = |current: &mut String| {
        let part = trim.apply(current);
        if !part.is_empty() {
            parts.push(part.to_string());
        }
        current.clear();
    };

    for piece in pieces(expr) {
        match piece.trim() {
            "" => continue,
            "(" => depth += 1,
            ")" => depth -= 1,
            word if depth == 0 && word == on.keyword() => {
                flush(&mut current);
                continue;
            }
            _ => {}
        }
        current.push_str(piece);
    }
    flush(&mut current);

    parts
}

/// Break `expr` into raw pieces: single parentheses, connectives together
/// with their surrounding whitespace, and the opaque text between them.
///
/// Pieces are slices of the input, so concatenating them yields `expr`.
fn pieces(expr: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while let Some(c) = expr[pos..].chars().next() {
        let token_len = match c {
            '(' | ')' => Some(1),
            c if c.is_whitespace() => connective_len(&expr[pos..]),
            _ => None,
        };

        match token_len {
            Some(len) => {
                if text_start < pos {
                    pieces.push(&expr[text_start..pos]);
                }
                pieces.push(&expr[pos..pos + len]);
                pos += len;
                text_start = pos;
            }
            None => pos += c.len_utf8(),
        }
    }

    if text_start < expr.len() {
        pieces.push(&expr[text_start..]);
    }
    pieces
}

/// Byte length of a `<ws>+KEYWORD<ws>+` run at the start of `s`, if any.
fn connective_len(s: &str) -> Option<usize> {
    let lead = whitespace_len(s);
    let after_lead = &s[lead..];

    let keyword = [Connective::And, Connective::Or]
        .into_iter()
        .map(Connective::keyword)
        .find(|kw| after_lead.starts_with(*kw))?;

    let trail = whitespace_len(&after_lead[keyword.len()..]);
    (lead > 0 && trail > 0).then_some(lead + keyword.len() + trail)
}

fn whitespace_len(s: &str) -> usize {
    s.len() - s.trim_start().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_split_keeps_or_group_intact() {
        assert_eq!(
            split_top_level_and("(Apache-2.0 OR MIT) AND BSD-3-Clause"),
            vec!["(Apache-2.0 OR MIT)", "BSD-3-Clause"]
        );
    }

    #[test]
    fn test_bare_identifier_is_single_part() {
        assert_eq!(split_top_level_and("MIT"), vec!["MIT"]);
        assert_eq!(split_top_level_or("MIT"), vec!["MIT"]);
    }

    #[test]
    fn test_empty_expression() {
        assert!(split_top_level_and("").is_empty());
        assert!(split_top_level_or("").is_empty());
        assert!(split_top_level_and("   ").is_empty());
    }

    #[test]
    fn test_and_ignores_top_level_or() {
        assert_eq!(split_top_level_and("A OR B AND C"), vec!["A OR B", "C"]);
    }

    #[test]
    fn test_nested_parentheses() {
        assert_eq!(
            split_top_level_and("((A AND B) OR C) AND D"),
            vec!["((A AND B) OR C)", "D"]
        );
        assert_eq!(
            split_top_level_or("(A OR (B AND C))"),
            vec!["A", "B AND C"]
        );
    }

    #[test]
    fn test_or_split_unwraps_and_trims() {
        assert_eq!(
            split_top_level_or("(Apache-2.0 OR MIT)"),
            vec!["Apache-2.0", "MIT"]
        );
        assert_eq!(
            split_top_level_or("Apache-2.0 OR MIT OR Zlib"),
            vec!["Apache-2.0", "MIT", "Zlib"]
        );
    }

    #[test]
    fn test_or_split_unwrap_is_syntactic() {
        // The outer pair is stripped without checking it matches.
        assert_eq!(split_top_level_or("(A) OR (B)"), vec!["A) OR (B"]);
    }

    #[test]
    fn test_and_split_only_trims_whitespace() {
        assert_eq!(split_top_level_and("  (A OR B)  "), vec!["(A OR B)"]);
    }

    #[test]
    fn test_connective_requires_surrounding_whitespace() {
        assert_eq!(split_top_level_and("A AND(B)"), vec!["A AND(B)"]);
        assert_eq!(split_top_level_and("BANDIT AND MIT"), vec!["BANDIT", "MIT"]);
        assert_eq!(split_top_level_or("ORACLE OR MIT"), vec!["ORACLE", "MIT"]);
    }

    #[test]
    fn test_mixed_whitespace_around_connective() {
        assert_eq!(split_top_level_and("A\tAND\nB"), vec!["A", "B"]);
        assert_eq!(split_top_level_and("A   AND  B"), vec!["A", "B"]);
    }

    #[test]
    fn test_bare_keyword_between_parentheses_splits() {
        assert_eq!(split_top_level_and("(A)AND(B)"), vec!["(A)", "(B)"]);
    }

    #[test]
    fn test_unbalanced_parentheses_suppress_splitting() {
        assert_eq!(split_top_level_and(") A AND B"), vec![") A AND B"]);
        assert_eq!(split_top_level_and("(A AND B"), vec!["(A AND B"]);
    }

    #[test]
    fn test_and_split_join_round_trip() {
        for expr in [
            "MIT",
            "A AND B AND C",
            "(Apache-2.0 OR MIT) AND BSD-3-Clause",
            "(A OR C) AND (B OR D)",
            "((A AND B) OR C) AND D",
        ] {
            let parts = split_top_level_and(expr);
            let rejoined = parts.join(" AND ");
            assert_eq!(split_top_level_and(&rejoined), parts, "{expr}");
        }
    }

    #[test]
    fn test_pieces_cover_input() {
        let expr = "(Apache-2.0 OR MIT)  AND\tBSD-3-Clause";
        assert_eq!(pieces(expr).concat(), expr);
        assert_eq!(
            pieces(expr),
            vec!["(", "Apache-2.0", " OR ", "MIT", ")", "  AND\t", "BSD-3-Clause"]
        );
    }
}
