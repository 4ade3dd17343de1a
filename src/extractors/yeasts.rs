use super::{percent_to_fraction, ExtractionContext, NodeRef, SectionExtractor};
use crate::config::YeastMode;
use crate::error::ImportError;
use crate::model::Yeast;
use log::{debug, warn};

pub struct YeastsExtractor;

impl YeastsExtractor {
    fn yeast(node: &NodeRef) -> Result<Yeast, ImportError> {
        Ok(Yeast {
            name: node.text("name")?.to_string(),
            amount: node.number("amount")?,
            attenuation: node.optional_number("attenuation")?.map(percent_to_fraction),
            culture_date: node.optional_text("cultureDate")?.map(str::to_string),
            form: node.enumerated("form")?,
            yeast_type: node.enumerated("type")?,
        })
    }
}

impl SectionExtractor for YeastsExtractor {
    type Output = Vec<Yeast>;

    fn extract(&self, context: &ExtractionContext) -> Result<Vec<Yeast>, ImportError> {
        let nodes = context.recipe.child("yeasts")?.list("yeast")?;

        let limit = match context.options.yeast_mode {
            YeastMode::First => {
                if nodes.len() > 1 {
                    warn!(
                        "Document has {} yeasts, importing only the first",
                        nodes.len()
                    );
                }
                1
            }
            YeastMode::All => nodes.len(),
        };

        let yeasts = nodes
            .iter()
            .take(limit)
            .map(Self::yeast)
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Extracted {} yeasts", yeasts.len());
        Ok(yeasts)
    }
}
