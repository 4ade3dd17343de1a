use std::path::PathBuf;

use crate::config::{ImportConfig, ImportOptions, YeastMode};
use crate::{pipeline, BeerXmlImport, ImportError};

/// Represents the input source for a BeerXML document
#[derive(Debug, Clone)]
pub enum InputSource {
    /// BeerXML text already in memory
    Xml(String),
    /// Path to a BeerXML file
    File(PathBuf),
}

/// Builder for configuring and executing BeerXML imports
#[derive(Debug, Default)]
pub struct BeerXmlImporterBuilder {
    source: Option<InputSource>,
    options: ImportOptions,
}

impl BeerXmlImporterBuilder {
    /// Set the input source to BeerXML text
    ///
    /// # Example
    /// ```
    /// use beerxml_import::BeerXmlImporter;
    ///
    /// let builder = BeerXmlImporter::builder()
    ///     .xml("<RECIPES><RECIPE>...</RECIPE></RECIPES>");
    /// ```
    pub fn xml(mut self, xml: impl Into<String>) -> Self {
        self.source = Some(InputSource::Xml(xml.into()));
        self
    }

    /// Set the input source to a BeerXML file
    ///
    /// # Example
    /// ```
    /// use beerxml_import::BeerXmlImporter;
    ///
    /// let builder = BeerXmlImporter::builder()
    ///     .file("recipes/burton-ale.xml");
    /// ```
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(InputSource::File(path.into()));
        self
    }

    /// Choose how yeast elements are imported
    ///
    /// # Example
    /// ```
    /// use beerxml_import::{BeerXmlImporter, YeastMode};
    ///
    /// let builder = BeerXmlImporter::builder()
    ///     .yeast_mode(YeastMode::All);
    /// ```
    pub fn yeast_mode(mut self, mode: YeastMode) -> Self {
        self.options.yeast_mode = mode;
        self
    }

    /// Import every yeast instead of only the first one
    pub fn all_yeasts(self) -> Self {
        self.yeast_mode(YeastMode::All)
    }

    /// Build and execute the import
    ///
    /// # Errors
    /// Returns `ImportError` if:
    /// - No input source was specified
    /// - The file cannot be read
    /// - The document is not well-formed XML
    /// - A required field is missing or holds an invalid value
    pub fn build(self) -> Result<BeerXmlImport, ImportError> {
        let source = self.source.ok_or_else(|| {
            ImportError::BuilderError("No input source specified. Use .xml() or .file()".to_string())
        })?;

        match source {
            InputSource::Xml(xml) => pipeline::process(&xml, &self.options),
            InputSource::File(path) => {
                let xml = std::fs::read_to_string(&path)?;
                pipeline::process(&xml, &self.options)
            }
        }
    }
}

/// Main entry point for the builder API
pub struct BeerXmlImporter;

impl BeerXmlImporter {
    /// Creates a new builder for importing BeerXML
    ///
    /// # Example
    /// ```
    /// use beerxml_import::BeerXmlImporter;
    ///
    /// let builder = BeerXmlImporter::builder();
    /// ```
    pub fn builder() -> BeerXmlImporterBuilder {
        BeerXmlImporterBuilder::default()
    }

    /// Creates a builder preset from loaded configuration
    pub fn from_config(config: &ImportConfig) -> BeerXmlImporterBuilder {
        BeerXmlImporterBuilder {
            source: None,
            options: config.options(),
        }
    }
}
