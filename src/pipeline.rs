//! The import pipeline: parse, normalize tag names, extract sections, assemble.

use crate::config::ImportOptions;
use crate::error::ImportError;
use crate::extractors::{
    EquipmentExtractor, ExtractionContext, FermentablesExtractor, HopsExtractor, MashExtractor,
    NodeRef, RecipeFields, RecipeFieldsExtractor, SectionExtractor, SpecificationsExtractor,
    YeastsExtractor,
};
use crate::model::{BeerXmlImport, Equipment, Fermentable, Hop, Mash, Recipe, Specifications, Yeast};
use crate::xml::parse_normalized;
use log::debug;
use serde_json::Value;

/// Run the whole import over one BeerXML document.
pub fn process(xml: &str, options: &ImportOptions) -> Result<BeerXmlImport, ImportError> {
    let tree = parse_normalized(xml)?;
    let recipe = recipe_node(&tree)?;

    let context = ExtractionContext {
        recipe,
        options,
    };

    let fermentables = FermentablesExtractor.extract(&context)?;
    let hops = HopsExtractor.extract(&context)?;
    let mash = MashExtractor.extract(&context)?;
    let yeasts = YeastsExtractor.extract(&context)?;
    let fields = RecipeFieldsExtractor.extract(&context)?;
    let equipment = EquipmentExtractor.extract(&context)?;
    let specifications = SpecificationsExtractor.extract(&context)?;

    debug!("Imported recipe '{}'", fields.name);

    Ok(assemble(
        fields,
        fermentables,
        hops,
        mash,
        yeasts,
        equipment,
        specifications,
    ))
}

/// The single `recipe` element under the document root.
fn recipe_node(tree: &Value) -> Result<NodeRef<'_>, ImportError> {
    let root = NodeRef::new(tree, "");
    let recipe = root.child("recipe")?;

    match tree.get("recipe") {
        Some(Value::Object(_)) => Ok(recipe),
        Some(Value::Array(items)) => Err(ImportError::shape(
            recipe.path(),
            format!("a single recipe element, found {}", items.len()),
        )),
        _ => Err(ImportError::shape(recipe.path(), "a recipe element with children")),
    }
}

/// Combine extracted sections into the final result. No computation happens here.
pub fn assemble(
    fields: RecipeFields,
    fermentables: Vec<Fermentable>,
    hops: Vec<Hop>,
    mash: Mash,
    yeasts: Vec<Yeast>,
    equipment: Option<Equipment>,
    specifications: Specifications,
) -> BeerXmlImport {
    BeerXmlImport {
        recipe: Recipe {
            name: fields.name,
            brewer: fields.brewer,
            batch_size: fields.batch_size,
            boil_size: fields.boil_size,
            boil_time: fields.boil_time,
            efficiency: fields.efficiency,
            recipe_type: fields.recipe_type,
            fermentables,
            hops,
            mash,
            yeasts,
        },
        equipment,
        specifications,
    }
}
