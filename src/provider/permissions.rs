//! Reconciliation of role permissions with what the API stores.
//!
//! The API grants `<X>Read` implicitly with `<X>Modify` and drops the
//! explicit `<X>Read` from the role it returns. Sending the configured list
//! through [`filter_implied_permissions`] and passing what comes back
//! through [`restore_implied_permissions`] keeps the stored list equal to
//! the configuration.
//!
//! ```rust
//! use panther_api::provider::permissions::{filter_implied_permissions, restore_implied_permissions};
//!
//! let configured = vec!["RuleRead".to_string(), "RuleModify".to_string()];
//! let sent = filter_implied_permissions(&configured);
//! assert_eq!(sent, vec!["RuleModify"]);
//!
//! let stored = restore_implied_permissions(&sent, &configured);
//! assert_eq!(stored, vec!["RuleModify", "RuleRead"]);
//! ```

use std::collections::BTreeSet;

const READ_SUFFIX: &str = "Read";
const MODIFY_SUFFIX: &str = "Modify";

/// The `<X>Modify` permission that implies `permission`, if it is a `<X>Read`.
fn implying_permission(permission: &str) -> Option<String> {
    permission
        .strip_suffix(READ_SUFFIX)
        .map(|base| format!("{base}{MODIFY_SUFFIX}"))
}

/// Drops every `<X>Read` whose `<X>Modify` is also requested.
///
/// The result is sorted and free of duplicates.
#[must_use]
pub fn filter_implied_permissions(requested: &[String]) -> Vec<String> {
    let requested: BTreeSet<&str> = requested.iter().map(String::as_str).collect();

    requested
        .iter()
        .filter(|permission| {
            implying_permission(permission)
                .map_or(true, |modify| !requested.contains(modify.as_str()))
        })
        .map(|permission| (*permission).to_string())
        .collect()
}

/// Adds back every `<X>Read` from `prior` that `returned` lacks while
/// holding its `<X>Modify`.
///
/// The result is sorted and free of duplicates.
#[must_use]
pub fn restore_implied_permissions(returned: &[String], prior: &[String]) -> Vec<String> {
    let mut restored: BTreeSet<&str> = returned.iter().map(String::as_str).collect();

    let implied: Vec<&str> = prior
        .iter()
        .map(String::as_str)
        .filter(|permission| !restored.contains(permission))
        .filter(|permission| {
            implying_permission(permission)
                .is_some_and(|modify| restored.contains(modify.as_str()))
        })
        .collect();
    restored.extend(implied);

    restored.into_iter().map(str::to_string).collect()
}
