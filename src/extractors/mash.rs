use super::{ExtractionContext, NodeRef, SectionExtractor};
use crate::error::ImportError;
use crate::model::{Mash, MashStep};
use log::debug;

pub struct MashExtractor;

fn mash_step(node: &NodeRef) -> Result<MashStep, ImportError> {
    Ok(MashStep {
        name: node.text("name")?.to_string(),
        end_temp: node.number("endTemp")?,
        infuse_amount: node.number("infuseAmount")?,
        ramp_time: node.number("rampTime")?,
        step_temp: node.number("stepTemp")?,
        step_time: node.number("stepTime")?,
        step_type: node.enumerated("type")?,
    })
}

impl SectionExtractor for MashExtractor {
    type Output = Mash;

    fn extract(&self, context: &ExtractionContext) -> Result<Mash, ImportError> {
        let mash = context.recipe.child("mash")?;

        // Steps are applied in document order
        let mash_steps = mash
            .child("mashSteps")?
            .list("mashStep")?
            .iter()
            .map(mash_step)
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Extracted mash with {} steps", mash_steps.len());

        Ok(Mash {
            grain_temp: mash.number("grainTemp")?,
            tun_temp: mash.number("tunTemp")?,
            equip_adjust: mash.flag("equipAdjust")?,
            sparge_temp: mash.number("spargeTemp")?,
            mash_steps,
        })
    }
}
