//! Named-placeholder substitution for query templates.
//!
//! A template may contain `{name}` placeholders (names are alphanumeric plus
//! underscore). [`render`] replaces each placeholder with the matching value
//! from the parameter mapping. A placeholder with no matching parameter is
//! left verbatim, so partial substitution is well-defined.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Replaces `{name}` placeholders in `template` with values from `parameters`.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use query_manager_core::template::render;
///
/// let mut params = HashMap::new();
/// params.insert("field".to_string(), "first_name".to_string());
///
/// assert_eq!(
///     render("SELECT {field} FROM users;", &params),
///     "SELECT first_name FROM users;"
/// );
/// // Unknown placeholders pass through unchanged.
/// assert_eq!(render("SELECT {other};", &params), "SELECT {other};");
/// ```
pub fn render(template: &str, parameters: &HashMap<String, String>) -> String {
    static PLACEHOLDER: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("static regex must compile"));

    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match parameters.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
