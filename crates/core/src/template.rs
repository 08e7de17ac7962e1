// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `${key}` token substitution

use crate::properties::Properties;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::warn;

// Matches ${key} and the escaped form $${key}
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\$?)\$\{([^${}]+)\}").expect("constant regex pattern is valid")
});

/// Replace `${key}` placeholders with values from `vars`
///
/// Unknown keys are left as-is. `$${key}` yields a literal `${key}`.
/// Values that contain placeholders are expanded in turn; a reference
/// that would loop back onto itself is left unexpanded.
pub fn substitute(text: &str, vars: &Properties) -> String {
    if vars.is_empty() && !text.contains("$$") {
        return text.to_string();
    }
    let mut stack = Vec::new();
    expand(text, vars, &mut stack)
}

fn expand(text: &str, vars: &Properties, stack: &mut Vec<String>) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures| {
            let key = &caps[2];
            if !caps[1].is_empty() {
                return format!("${{{}}}", key);
            }
            let Some(value) = vars.get(key) else {
                return caps[0].to_string();
            };
            if stack.iter().any(|k| k == key) {
                warn!(key, chain = %stack.join(" -> "), "cyclic token reference left unexpanded");
                return caps[0].to_string();
            }
            stack.push(key.to_string());
            let expanded = expand(value, vars, stack);
            stack.pop();
            expanded
        })
        .into_owned()
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
