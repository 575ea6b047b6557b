//! Declaration formatting.
//!
//! The palette and theme layers never concatenate CSS text themselves. They
//! collect `(property, value)` pairs into [`Declarations`] and hand each pair
//! to a [`DeclarationFormatter`], which produces either `property:value;` or
//! a custom property `--{prefix}-property:value;`.

use std::collections::HashMap;

/// Turns one property/value pair into CSS text.
pub trait DeclarationFormatter {
    /// Format a single declaration.
    ///
    /// With `var_prefix = None` the result is `property:value;`, otherwise
    /// `--{prefix}-property:value;`.
    fn format(&self, property: &str, value: &str, var_prefix: Option<&str>) -> String;
}

/// The default formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssFormatter;

impl DeclarationFormatter for CssFormatter {
    fn format(&self, property: &str, value: &str, var_prefix: Option<&str>) -> String {
        match var_prefix.and_then(normalize_prefix) {
            Some(prefix) => format!("--{prefix}-{property}:{value};"),
            None => format!("{property}:{value};"),
        }
    }
}

/// Normalize a custom-property prefix.
///
/// Leading dashes are dropped, whitespace becomes `-`, and the result is
/// lower-cased. Blank prefixes normalize to `None`.
pub fn normalize_prefix(prefix: &str) -> Option<String> {
    let trimmed = prefix.trim().trim_start_matches('-').trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(
        trimmed
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase(),
    )
}

/// An ordered list of CSS declarations.
///
/// Empty values are skipped on insertion, so callers can push optional
/// values without checking them first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    entries: Vec<(String, String)>,
}

impl Declarations {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration. Blank values are ignored.
    pub fn push(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            return;
        }
        self.entries.push((property.into(), value));
    }

    /// Append a declaration when `value` is present.
    pub fn push_opt<T: ToString>(&mut self, property: &str, value: Option<T>) {
        if let Some(value) = value {
            self.push(property, value.to_string());
        }
    }

    /// Append all declarations from another list.
    pub fn extend(&mut self, other: Declarations) {
        self.entries.extend(other.entries);
    }

    /// Look up the last value pushed for a property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render with a custom formatter.
    pub fn render(&self, formatter: &dyn DeclarationFormatter, var_prefix: Option<&str>) -> String {
        self.entries
            .iter()
            .map(|(property, value)| formatter.format(property, value, var_prefix))
            .collect()
    }

    /// Render with [`CssFormatter`].
    pub fn to_css(&self, var_prefix: Option<&str>) -> String {
        self.render(&CssFormatter, var_prefix)
    }

    /// Collect into a custom-property lookup keyed by `{prefix}-{property}`.
    pub fn to_variables(&self, prefix: &str) -> CssVariables {
        let prefix = normalize_prefix(prefix);
        let mut vars = CssVariables::new();
        for (property, value) in self.iter() {
            match &prefix {
                Some(prefix) => vars.set(format!("{prefix}-{property}"), value),
                None => vars.set(property, value),
            }
        }
        vars
    }
}

/// CSS custom properties (variables).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssVariables {
    variables: HashMap<String, String>,
}

impl CssVariables {
    /// Create empty variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        // Remove leading "--" if present
        let name = name.strip_prefix("--").unwrap_or(&name).to_string();
        self.variables.insert(name, value.into());
    }

    /// Get a variable value.
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.strip_prefix("--").unwrap_or(name);
        self.variables.get(name).map(|s| s.as_str())
    }

    /// Check if a variable exists.
    pub fn contains(&self, name: &str) -> bool {
        let name = name.strip_prefix("--").unwrap_or(name);
        self.variables.contains_key(name)
    }

    /// Iterate over all variables.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether there are no variables.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
