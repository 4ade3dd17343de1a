use crate::error::ImportError;
use log::trace;
use roxmltree::{Document, Node, ParsingOptions};
use serde_json::{Map, Value};

/// Parse XML text into a generic attribute tree.
///
/// The returned value is the content of the document's root element:
/// - an element without child elements becomes `Value::String` holding its
///   trimmed text (CDATA included, entities decoded)
/// - an element with child elements becomes `Value::Object` keyed by child tag name
/// - a tag name repeated among siblings becomes `Value::Array` in document order
///
/// Tag names are kept as written. Attributes, comments and processing
/// instructions are dropped.
pub fn read_tree(xml: &str) -> Result<Value, ImportError> {
    read_tree_with(xml, str::to_string)
}

/// Like [`read_tree`], with every tag name passed through `rename` before
/// siblings are grouped. Tags that rename to the same key share one array.
pub(super) fn read_tree_with(xml: &str, rename: fn(&str) -> String) -> Result<Value, ImportError> {
    let mut options = ParsingOptions::default();
    // Some producers emit a DOCTYPE line
    options.allow_dtd = true;

    let document = Document::parse_with_options(xml, options)?;
    let root = document.root_element();
    trace!("Reading XML tree rooted at <{}>", root.tag_name().name());

    Ok(element_to_value(root, rename))
}

fn element_to_value(element: Node, rename: fn(&str) -> String) -> Value {
    let mut children = element.children().filter(|n| n.is_element()).peekable();

    if children.peek().is_none() {
        return Value::String(text_content(element));
    }

    let mut map = Map::new();
    for child in children {
        insert_child(
            &mut map,
            rename(child.tag_name().name()),
            element_to_value(child, rename),
        );
    }
    Value::Object(map)
}

/// Insert a child under `key`, turning a repeated key into an array.
///
/// Element values are never arrays themselves, so an existing array under
/// `key` always means the key was already repeated.
fn insert_child(map: &mut Map<String, Value>, key: String, value: Value) {
    match map.get_mut(&key) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            map.insert(key, value);
        }
    }
}

fn text_content(element: Node) -> String {
    element
        .children()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_leaf_elements_become_strings() {
        let tree = read_tree("<RECIPES><NAME> Pale Ale </NAME><EMPTY/></RECIPES>").unwrap();
        assert_eq!(tree, json!({ "NAME": "Pale Ale", "EMPTY": "" }));
    }

    #[test]
    fn test_repeated_siblings_become_array() {
        let xml = r#"
            <HOPS>
                <HOP><NAME>Cascade</NAME></HOP>
                <HOP><NAME>Centennial</NAME></HOP>
                <HOP><NAME>Chinook</NAME></HOP>
            </HOPS>
        "#;
        let tree = read_tree(xml).unwrap();
        assert_eq!(
            tree,
            json!({ "HOP": [
                { "NAME": "Cascade" },
                { "NAME": "Centennial" },
                { "NAME": "Chinook" }
            ]})
        );
    }

    #[test]
    fn test_single_child_stays_singleton() {
        let tree = read_tree("<HOPS><HOP><NAME>Cascade</NAME></HOP></HOPS>").unwrap();
        assert!(tree.get("HOP").unwrap().is_object());
    }

    #[test]
    fn test_keys_keep_document_order() {
        let tree = read_tree("<R><ZETA>1</ZETA><ALPHA>2</ALPHA><MID>3</MID></R>").unwrap();
        let keys: Vec<&String> = tree.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["ZETA", "ALPHA", "MID"]);
    }

    #[test]
    fn test_cdata_and_entities() {
        let tree =
            read_tree("<R><NOTES><![CDATA[Mash <hot>]]></NOTES><NAME>Fish &amp; Chips</NAME></R>")
                .unwrap();
        assert_eq!(tree.get("NOTES").unwrap(), "Mash <hot>");
        assert_eq!(tree.get("NAME").unwrap(), "Fish & Chips");
    }

    #[test]
    fn test_comments_and_declaration_are_ignored() {
        let xml = r#"<?xml version="1.0"?>
            <!-- exported -->
            <RECIPES><RECIPE><NAME>A</NAME><!-- note --></RECIPE></RECIPES>"#;
        let tree = read_tree(xml).unwrap();
        assert_eq!(tree, json!({ "RECIPE": { "NAME": "A" } }));
    }

    #[test]
    fn test_renamed_siblings_keep_document_order() {
        let xml = "<R><STEP>1</STEP><Step>2</Step><STEP>3</STEP><step>4</step></R>";

        let tree = read_tree_with(xml, |name| name.to_lowercase()).unwrap();
        assert_eq!(tree, json!({ "step": ["1", "2", "3", "4"] }));

        let raw = read_tree(xml).unwrap();
        assert_eq!(raw, json!({ "STEP": ["1", "3"], "Step": "2", "step": "4" }));
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        let result = read_tree("<RECIPES><RECIPE></RECIPES>");
        assert!(matches!(result, Err(ImportError::Xml(_))));
    }
}
