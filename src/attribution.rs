use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::license::selector::{select_licenses, Selection};
use crate::models::{Dependency, ExcludedDependency, LicenseGroup};

/// Dependencies grouped by the license the publisher relies on.
#[derive(Debug, Default, Serialize)]
pub struct Attribution {
    /// One group per chosen license, in preference-list order.
    pub groups: Vec<LicenseGroup>,
    /// Names of dependencies that declared no license at all.
    pub unlicensed: Vec<String>,
    /// Dependencies whose expression no preference can satisfy.
    pub excluded: Vec<ExcludedDependency>,
    /// Number of dependencies listed in at least one group.
    pub attributed: usize,
}

/// Run the selector over every dependency and group the results.
///
/// A dependency chosen under several licenses (an `AND` expression) is
/// listed in each of those groups.
pub fn attribute<S: AsRef<str>>(deps: &[Dependency], preferences: &[S]) -> Attribution {
    let mut by_license: HashMap<String, Vec<String>> = HashMap::new();
    let mut unlicensed = Vec::new();
    let mut excluded = Vec::new();
    let mut attributed = 0;

    for dep in deps {
        let Some(expression) = dep.license_expression() else {
            unlicensed.push(dep.name.clone());
            continue;
        };

        match select_licenses(expression, preferences) {
            Selection::Satisfied(licenses) => {
                debug!(dependency = %dep.name, source = %dep.source, expression, ?licenses, "license selected");
                // a keyword-only expression such as `AND` selects nothing
                if !licenses.is_empty() {
                    attributed += 1;
                }
                for license in licenses {
                    by_license.entry(license).or_default().push(dep.name.clone());
                }
            }
            Selection::Unsatisfied { part } => {
                debug!(dependency = %dep.name, expression, unsatisfied = %part, "dependency excluded");
                excluded.push(ExcludedDependency {
                    name: dep.name.clone(),
                    license: expression.to_string(),
                    unsatisfied: part,
                });
            }
        }
    }

    let groups = preferences
        .iter()
        .filter_map(|wanted| {
            let wanted = wanted.as_ref();
            by_license.remove(wanted).map(|dependencies| LicenseGroup {
                license: wanted.to_string(),
                dependencies,
            })
        })
        .collect();

    Attribution {
        groups,
        unlicensed,
        excluded,
        attributed,
    }
}
