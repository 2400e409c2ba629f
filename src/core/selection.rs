use crate::domain::codes::CodeTable;
use std::collections::HashSet;

pub const ALL_SELECTOR: &str = "all";

/// Resolves user selectors like `all`, `A`, `gluten` or `süß` into table codes.
///
/// A selector equal to a code (case-insensitive) selects just that code;
/// any other selector selects every code whose description contains it
/// (case-insensitive). Selectors that match nothing add nothing.
pub fn select_codes<S: AsRef<str>>(selectors: &[S], table: &CodeTable) -> HashSet<String> {
    if selectors
        .iter()
        .any(|s| s.as_ref().trim().eq_ignore_ascii_case(ALL_SELECTOR))
    {
        return table.codes().map(str::to_string).collect();
    }

    let mut selected = HashSet::new();
    for selector in selectors {
        let needle = selector.as_ref().trim().to_lowercase();
        if needle.is_empty() {
            continue;
        }

        let before = selected.len();
        if let Some(code) = table.codes().find(|code| code.to_lowercase() == needle) {
            selected.insert(code.to_string());
        } else {
            for (code, description) in table.iter() {
                if description.to_lowercase().contains(&needle) {
                    selected.insert(code.to_string());
                }
            }
        }

        if selected.len() == before {
            tracing::debug!("Selector '{}' matched no new codes", selector.as_ref());
        }
    }
    selected
}
