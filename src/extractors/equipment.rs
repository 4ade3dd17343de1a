use super::{dirty_round, percent_to_fraction, ExtractionContext, SectionExtractor};
use crate::error::ImportError;
use crate::model::Equipment;
use log::debug;

pub struct EquipmentExtractor;

/// Brew-in-a-bag is not an equipment field in BeerXML; it is read off the mash name.
fn is_biab(mash_name: &str) -> bool {
    mash_name.contains("BIAB")
}

impl SectionExtractor for EquipmentExtractor {
    type Output = Option<Equipment>;

    fn extract(&self, context: &ExtractionContext) -> Result<Option<Equipment>, ImportError> {
        let Some(equipment) = context.recipe.get("equipment") else {
            debug!("No equipment section");
            return Ok(None);
        };

        let mash_name = context.recipe.child("mash")?.text("name")?;

        Ok(Some(Equipment {
            name: equipment.text("name")?.to_string(),
            batch_size: equipment.number("batchSize")?,
            boil_size: equipment.number("boilSize")?,
            tun_weight: equipment.number("tunWeight")?,
            // TODO: confirm with BeerXML producers whether TUN_VOLUME should be read here
            tun_volume: equipment.number("tunSpecificHeat")?,
            tun_specific_heat: equipment.number("tunSpecificHeat")?,
            cooling_loss_pct: percent_to_fraction(equipment.number("coolingLossPct")?),
            evap_rate: dirty_round(percent_to_fraction(equipment.number("evapRate")?)),
            lauter_deadspace: equipment.number("lauterDeadspace")?,
            top_up_kettle: equipment.number("topUpKettle")?,
            trub_chiller_loss: equipment.number("trubChillerLoss")?,
            biab: is_biab(mash_name),
        }))
    }
}
