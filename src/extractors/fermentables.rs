use super::{potential_from_yield, ExtractionContext, NodeRef, SectionExtractor};
use crate::error::ImportError;
use crate::model::Fermentable;
use log::debug;

pub struct FermentablesExtractor;

impl FermentablesExtractor {
    fn fermentable(node: &NodeRef) -> Result<Fermentable, ImportError> {
        let yield_percent = node.number("yield")?;
        let potential = match node.optional_number("potential")? {
            Some(potential) => potential,
            None => {
                let derived = potential_from_yield(yield_percent);
                debug!(
                    "{}: no potential, derived {} from yield {}",
                    node.path(),
                    derived,
                    yield_percent
                );
                derived
            }
        };

        Ok(Fermentable {
            name: node.text("name")?.to_string(),
            add_after_boil: node.flag("addAfterBoil")?,
            amount: node.number("amount")?,
            color: node.number("color")?,
            potential,
            yield_percent,
            fermentable_type: node.enumerated("type")?,
        })
    }
}

impl SectionExtractor for FermentablesExtractor {
    type Output = Vec<Fermentable>;

    fn extract(&self, context: &ExtractionContext) -> Result<Vec<Fermentable>, ImportError> {
        let fermentables = context
            .recipe
            .child("fermentables")?
            .list("fermentable")?
            .iter()
            .map(Self::fermentable)
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Extracted {} fermentables", fermentables.len());
        Ok(fermentables)
    }
}
