pub mod builder;
pub mod config;
pub mod error;
pub mod extractors;
pub mod model;
pub mod pipeline;
pub mod uniffi_bindings;
pub mod xml;

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

use std::path::Path;

pub use builder::{BeerXmlImporter, BeerXmlImporterBuilder, InputSource};
pub use config::{ImportConfig, ImportOptions, YeastMode};
pub use error::ImportError;
pub use model::{
    BeerXmlImport, Equipment, Fermentable, FermentableType, Hop, HopForm, HopUse, IbuMethod, Mash,
    MashStep, MashStepType, Recipe, RecipeType, Specifications, Yeast, YeastForm, YeastType,
};

/// Import a BeerXML document with default options.
///
/// # Example
/// ```no_run
/// # fn main() -> Result<(), beerxml_import::ImportError> {
/// let xml = std::fs::read_to_string("burton-ale.xml")?;
/// let import = beerxml_import::import_beer_xml(&xml)?;
/// println!("{} by {}", import.recipe.name, import.recipe.brewer);
/// # Ok(())
/// # }
/// ```
pub fn import_beer_xml(xml: &str) -> Result<BeerXmlImport, ImportError> {
    pipeline::process(xml, &ImportOptions::default())
}

pub fn import_beer_xml_with_options(
    xml: &str,
    options: &ImportOptions,
) -> Result<BeerXmlImport, ImportError> {
    pipeline::process(xml, options)
}

/// Read a BeerXML file and import it with default options.
pub fn import_beer_xml_file(path: impl AsRef<Path>) -> Result<BeerXmlImport, ImportError> {
    BeerXmlImporter::builder()
        .file(path.as_ref())
        .build()
}
