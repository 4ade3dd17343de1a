use super::{dirty_round, percent_to_fraction, ExtractionContext, SectionExtractor};
use crate::error::ImportError;
use crate::model::RecipeType;

/// Top-level scalar fields of a recipe, before the sections are attached
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeFields {
    pub name: String,
    pub brewer: String,
    pub batch_size: f64,
    pub boil_size: f64,
    pub boil_time: f64,
    pub efficiency: f64,
    pub recipe_type: RecipeType,
}

pub struct RecipeFieldsExtractor;

impl SectionExtractor for RecipeFieldsExtractor {
    type Output = RecipeFields;

    fn extract(&self, context: &ExtractionContext) -> Result<RecipeFields, ImportError> {
        let recipe = &context.recipe;

        Ok(RecipeFields {
            name: recipe.text("name")?.to_string(),
            brewer: recipe.text("brewer")?.to_string(),
            batch_size: recipe.number("batchSize")?,
            boil_size: recipe.number("boilSize")?,
            boil_time: recipe.number("boilTime")?,
            efficiency: dirty_round(percent_to_fraction(recipe.number("efficiency")?)),
            recipe_type: recipe.enumerated("type")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ImportOptions;
    use crate::extractors::test_support::with_recipe;

    fn extract(efficiency: &str) -> Result<RecipeFields, ImportError> {
        let xml = format!(
            "<RECIPES><RECIPE>
                <NAME>Burton Ale</NAME>
                <TYPE>All Grain</TYPE>
                <BREWER>Brad Smith</BREWER>
                <BATCH_SIZE>18.93</BATCH_SIZE>
                <BOIL_SIZE>20.82</BOIL_SIZE>
                <BOIL_TIME>60</BOIL_TIME>
                <EFFICIENCY>{}</EFFICIENCY>
            </RECIPE></RECIPES>",
            efficiency
        );
        with_recipe(&xml, &ImportOptions::default(), |context| {
            RecipeFieldsExtractor.extract(context)
        })
    }

    #[test]
    fn test_recipe_fields() {
        let fields = extract("70").unwrap();
        assert_eq!(fields.name, "Burton Ale");
        assert_eq!(fields.brewer, "Brad Smith");
        assert_eq!(fields.recipe_type, RecipeType::AllGrain);
        assert_eq!(fields.batch_size, 18.93);
        assert_eq!(fields.boil_size, 20.82);
        assert_eq!(fields.boil_time, 60.0);
        assert_eq!(fields.efficiency, 0.7);
    }

    #[test]
    fn test_efficiency_is_rounded() {
        for percent in ["72.5", "68", "75.3"] {
            let fields = extract(percent).unwrap();
            let fraction = percent.parse::<f64>().unwrap() * 0.01;
            assert_eq!(fields.efficiency, (fraction * 1e11).round() / 1e11);
        }
    }
}
