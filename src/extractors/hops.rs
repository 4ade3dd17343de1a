use super::{percent_to_fraction, ExtractionContext, NodeRef, SectionExtractor};
use crate::error::ImportError;
use crate::model::Hop;
use log::debug;

pub struct HopsExtractor;

fn hop(node: &NodeRef) -> Result<Hop, ImportError> {
    Ok(Hop {
        name: node.text("name")?.to_string(),
        alpha: percent_to_fraction(node.number("alpha")?),
        amount: node.number("amount")?,
        form: node.enumerated("form")?,
        hop_use: node.enumerated("use")?,
        time: node.number("time")?,
    })
}

impl SectionExtractor for HopsExtractor {
    type Output = Vec<Hop>;

    fn extract(&self, context: &ExtractionContext) -> Result<Vec<Hop>, ImportError> {
        let hops = context
            .recipe
            .child("hops")?
            .list("hop")?
            .iter()
            .map(hop)
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Extracted {} hops", hops.len());
        Ok(hops)
    }
}
