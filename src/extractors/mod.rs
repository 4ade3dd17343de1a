//! Section extractors: one per part of a BeerXML recipe.
//!
//! Each extractor reads from the normalized attribute tree, coerces text to
//! numbers and flags, applies unit conversions and fills in derived values.

use crate::config::ImportOptions;
use crate::error::ImportError;
use crate::model::UnknownVariant;
use serde_json::Value;
use std::str::FromStr;

mod equipment;
mod fermentables;
mod hops;
mod mash;
mod recipe;
mod specifications;
mod yeasts;

pub use equipment::EquipmentExtractor;
pub use fermentables::FermentablesExtractor;
pub use hops::HopsExtractor;
pub use mash::MashExtractor;
pub use recipe::{RecipeFields, RecipeFieldsExtractor};
pub use specifications::SpecificationsExtractor;
pub use yeasts::YeastsExtractor;

/// Input shared by all extractors: the `recipe` node and the import options.
pub struct ExtractionContext<'a> {
    pub recipe: NodeRef<'a>,
    pub options: &'a ImportOptions,
}

pub trait SectionExtractor {
    type Output;

    fn extract(&self, context: &ExtractionContext) -> Result<Self::Output, ImportError>;
}

/// A node of the attribute tree together with its dotted path, used for error reporting.
#[derive(Debug, Clone)]
pub struct NodeRef<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> NodeRef<'a> {
    pub fn new(value: &'a Value, path: impl Into<String>) -> Self {
        NodeRef {
            value,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    fn child_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    /// Look up a child without failing. Leaf nodes have no children.
    pub fn get(&self, key: &str) -> Option<NodeRef<'a>> {
        self.value
            .as_object()
            .and_then(|map| map.get(key))
            .map(|value| NodeRef::new(value, self.child_path(key)))
    }

    pub fn child(&self, key: &str) -> Result<NodeRef<'a>, ImportError> {
        self.get(key)
            .ok_or_else(|| ImportError::missing(self.child_path(key)))
    }

    /// A repeatable child as a list: a lone element becomes a one-element list.
    pub fn list(&self, key: &str) -> Result<Vec<NodeRef<'a>>, ImportError> {
        let node = self.child(key)?;
        let value: &'a Value = node.value;
        Ok(match value {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| NodeRef::new(item, format!("{}[{}]", node.path, i)))
                .collect(),
            _ => vec![node],
        })
    }

    fn as_text(&self) -> Result<&'a str, ImportError> {
        match self.value {
            Value::String(text) => Ok(text.as_str()),
            Value::Array(_) => Err(ImportError::shape(&self.path, "a single value")),
            _ => Err(ImportError::shape(&self.path, "a text value")),
        }
    }

    pub fn text(&self, key: &str) -> Result<&'a str, ImportError> {
        self.child(key)?.as_text()
    }

    pub fn optional_text(&self, key: &str) -> Result<Option<&'a str>, ImportError> {
        self.get(key).map(|node| node.as_text()).transpose()
    }

    pub fn number(&self, key: &str) -> Result<f64, ImportError> {
        let node = self.child(key)?;
        parse_number(&node.path, node.as_text()?)
    }

    pub fn optional_number(&self, key: &str) -> Result<Option<f64>, ImportError> {
        self.get(key)
            .map(|node| parse_number(&node.path, node.as_text()?))
            .transpose()
    }

    /// A BeerXML boolean. Absence reads as `false`.
    pub fn flag(&self, key: &str) -> Result<bool, ImportError> {
        Ok(self.optional_text(key)?.map_or(false, parse_bool))
    }

    pub fn enumerated<T>(&self, key: &str) -> Result<T, ImportError>
    where
        T: FromStr<Err = UnknownVariant>,
    {
        let node = self.child(key)?;
        node.as_text()?
            .parse()
            .map_err(|err: UnknownVariant| ImportError::InvalidValue {
                path: node.path.clone(),
                value: err.value,
                expected: err.expected.join(", "),
            })
    }
}

/// Parse the leading decimal number of `text`, ignoring any trailing unit
/// (`"4.2 %"`, `"9.0 SRM"`). Text without a leading number is rejected.
pub fn parse_number(path: &str, text: &str) -> Result<f64, ImportError> {
    leading_decimal(text.trim())
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ImportError::InvalidNumber {
            path: path.to_string(),
            value: text.to_string(),
        })
}

/// Longest prefix of the form `[+-]digits[.digits][(e|E)[+-]digits]`.
/// Empty when no digit is found before the first other character.
fn leading_decimal(text: &str) -> &str {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end > end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits |= frac_end > end + 1;
        end = frac_end;
    }
    if !mantissa_digits {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        // A dangling `e` belongs to the unit
        if exp_end > exp {
            end = exp_end;
        }
    }

    &text[..end]
}

/// Only the literal `TRUE` is true.
pub fn parse_bool(text: &str) -> bool {
    text == "TRUE"
}

/// Percent (0-100) to fraction (0-1).
pub fn percent_to_fraction(percent: f64) -> f64 {
    percent * 0.01
}

/// Cancel floating-point noise left by [`percent_to_fraction`], e.g. `70 * 0.01`.
/// Only used for efficiency and evaporation rate.
pub fn dirty_round(n: f64) -> f64 {
    (n * 1e11).round() / 1e11
}

/// Specific gravity contribution estimated from a fermentable's yield percent.
pub fn potential_from_yield(yield_percent: f64) -> f64 {
    yield_percent * 0.01 * 46.0 / 1000.0 + 1.0
}
