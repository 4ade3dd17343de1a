//! Generic XML handling: parsing into an attribute tree and tag-name normalization.
//!
//! Nothing in here knows about BeerXML. The extractors consume the tree this
//! module produces.

mod reader;
mod tag;

pub use reader::read_tree;
pub use tag::camel_case;

use crate::error::ImportError;
use serde_json::Value;

/// Parse XML text into an attribute tree whose keys are camel-cased tag names.
///
/// Names are rewritten while reading, so siblings spelled in different cases
/// still merge in document order.
pub fn parse_normalized(xml: &str) -> Result<Value, ImportError> {
    reader::read_tree_with(xml, camel_case)
}
