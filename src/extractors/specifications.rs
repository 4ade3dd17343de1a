use super::{percent_to_fraction, ExtractionContext, SectionExtractor};
use crate::error::ImportError;
use crate::model::Specifications;
use log::debug;

/// Estimated figures stored as scalars directly under `recipe`
pub struct SpecificationsExtractor;

impl SectionExtractor for SpecificationsExtractor {
    type Output = Specifications;

    fn extract(&self, context: &ExtractionContext) -> Result<Specifications, ImportError> {
        let recipe = &context.recipe;

        let specifications = Specifications {
            og: recipe.number("og")?,
            fg: recipe.number("fg")?,
            abv: percent_to_fraction(recipe.number("abv")?),
            color: recipe.number("estColor")?,
            ibu_method: recipe.enumerated("ibuMethod")?,
            ibu: recipe.number("ibu")?,
            calories: recipe.number("calories")?,
        };

        debug!(
            "Specifications: OG {} FG {} ABV {}",
            specifications.og, specifications.fg, specifications.abv
        );
        Ok(specifications)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ImportOptions;
    use crate::extractors::test_support::{assert_close, with_recipe};
    use crate::model::IbuMethod;

    const SPECIFICATIONS: &str = "<RECIPES><RECIPE>
            <OG>1.056</OG>
            <FG>1.012</FG>
            <ABV>6.0</ABV>
            <EST_COLOR>12.5</EST_COLOR>
            <IBU_METHOD>Tinseth</IBU_METHOD>
            <IBU>32.4</IBU>
            <CALORIES>185</CALORIES>
        </RECIPE></RECIPES>";

    fn extract(xml: &str) -> Result<Specifications, ImportError> {
        with_recipe(xml, &ImportOptions::default(), |context| {
            SpecificationsExtractor.extract(context)
        })
    }

    #[test]
    fn test_specifications() {
        let specifications = extract(SPECIFICATIONS).unwrap();
        assert_eq!(specifications.og, 1.056);
        assert_eq!(specifications.fg, 1.012);
        assert_close(specifications.abv, 0.06);
        assert_eq!(specifications.color, 12.5);
        assert_eq!(specifications.ibu_method, IbuMethod::Tinseth);
        assert_eq!(specifications.ibu, 32.4);
        assert_eq!(specifications.calories, 185.0);
    }

    #[test]
    fn test_color_reads_est_color() {
        let xml = SPECIFICATIONS.replace("<EST_COLOR>12.5</EST_COLOR>", "<COLOR>12.5</COLOR>");
        match extract(&xml) {
            Err(ImportError::MissingField { path }) => assert_eq!(path, "recipe.estColor"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
