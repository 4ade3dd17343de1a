//! Shared BeerXML fixtures for the integration tests.
//!
//! Use `mod common;` at the top of a test file. Not every test file uses
//! every helper.
#![allow(dead_code)]

pub const FERMENTABLE: &str = "<FERMENTABLE><NAME>Maris Otter</NAME><TYPE>Grain</TYPE>\
    <AMOUNT>5</AMOUNT><YIELD>81</YIELD><COLOR>3</COLOR></FERMENTABLE>";

pub const HOP: &str = "<HOP><NAME>Challenger</NAME><ALPHA>7.5</ALPHA><AMOUNT>0.035</AMOUNT>\
    <USE>Boil</USE><TIME>60</TIME><FORM>Pellet</FORM></HOP>";

pub const MASH_STEP: &str = "<MASH_STEP><NAME>Mash In</NAME><TYPE>Infusion</TYPE>\
    <INFUSE_AMOUNT>15</INFUSE_AMOUNT><STEP_TEMP>66</STEP_TEMP><STEP_TIME>60</STEP_TIME>\
    <RAMP_TIME>2</RAMP_TIME><END_TEMP>65</END_TEMP></MASH_STEP>";

pub const YEAST: &str = "<YEAST><NAME>London ESB</NAME><TYPE>Ale</TYPE><FORM>Liquid</FORM>\
    <AMOUNT>0.125</AMOUNT></YEAST>";

/// Pieces of a one-recipe BeerXML document, each replaceable by a test.
#[derive(Debug, Clone)]
pub struct RecipeXml {
    pub fields: String,
    pub fermentables: String,
    pub hops: String,
    pub mash_name: String,
    pub mash_steps: String,
    pub yeasts: String,
    pub equipment: String,
    pub specifications: String,
}

impl Default for RecipeXml {
    fn default() -> Self {
        RecipeXml {
            fields: "<NAME>Best Bitter</NAME><TYPE>All Grain</TYPE><BREWER>Alex</BREWER>\
                <BATCH_SIZE>23</BATCH_SIZE><BOIL_SIZE>28</BOIL_SIZE><BOIL_TIME>60</BOIL_TIME>\
                <EFFICIENCY>75</EFFICIENCY>"
                .to_string(),
            fermentables: FERMENTABLE.to_string(),
            hops: HOP.to_string(),
            mash_name: "Single Infusion".to_string(),
            mash_steps: MASH_STEP.to_string(),
            yeasts: YEAST.to_string(),
            equipment: String::new(),
            specifications: "<OG>1.042</OG><FG>1.010</FG><ABV>4.2</ABV><EST_COLOR>9</EST_COLOR>\
                <IBU_METHOD>Tinseth</IBU_METHOD><IBU>35</IBU><CALORIES>140</CALORIES>"
                .to_string(),
        }
    }
}

impl RecipeXml {
    pub fn render(&self) -> String {
        format!(
            "<?xml version=\"1.0\"?>\n<RECIPES><RECIPE>{fields}\
             <FERMENTABLES>{fermentables}</FERMENTABLES>\
             <HOPS>{hops}</HOPS>\
             <MASH><NAME>{mash_name}</NAME><GRAIN_TEMP>20</GRAIN_TEMP><TUN_TEMP>20</TUN_TEMP>\
             <SPARGE_TEMP>76</SPARGE_TEMP><MASH_STEPS>{mash_steps}</MASH_STEPS></MASH>\
             <YEASTS>{yeasts}</YEASTS>{equipment}{specifications}</RECIPE></RECIPES>",
            fields = self.fields,
            fermentables = self.fermentables,
            hops = self.hops,
            mash_name = self.mash_name,
            mash_steps = self.mash_steps,
            yeasts = self.yeasts,
            equipment = self.equipment,
            specifications = self.specifications,
        )
    }
}

pub fn default_recipe() -> String {
    RecipeXml::default().render()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} to be close to {}",
        actual,
        expected
    );
}
