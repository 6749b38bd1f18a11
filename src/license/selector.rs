use std::collections::BTreeSet;

use super::expression::{split_top_level_and, split_top_level_or, trim_parens};

/// Outcome of resolving one license expression against a preference list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every AND-part was covered; holds the license chosen for each part.
    Satisfied(BTreeSet<String>),
    /// `part` is the first AND-part none of whose alternatives is acceptable.
    Unsatisfied { part: String },
}

/// Resolve `expression` to the set of licenses the publisher relies on.
///
/// The expression is split on top-level `AND`; every AND-part must be
/// covered. Within a part, the alternatives from the top-level `OR` split
/// are matched against `preferences` in preference order, so an earlier
/// preference wins even when it appears later in the expression text.
///
/// Resolution stops at the first AND-part that cannot be covered.
pub fn select_licenses<S: AsRef<str>>(expression: &str, preferences: &[S]) -> Selection {
    let mut chosen = BTreeSet::new();

    for part in split_top_level_and(expression) {
        let alternatives = split_top_level_or(&part);
        match pick(&alternatives, preferences) {
            Some(license) => {
                chosen.insert(license.to_string());
            }
            None => return Selection::Unsatisfied { part },
        }
    }

    Selection::Satisfied(chosen)
}

fn pick<'a, S: AsRef<str>>(alternatives: &'a [String], preferences: &[S]) -> Option<&'a str> {
    preferences.iter().find_map(|wanted| {
        alternatives
            .iter()
            .map(|alt| trim_parens(alt))
            .find(|candidate| *candidate == wanted.as_ref())
    })
}
