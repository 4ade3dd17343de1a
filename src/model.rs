use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares a BeerXML enumeration whose variants serialize to the exact
/// spelling used in BeerXML documents and parse case-insensitively.
macro_rules! beer_xml_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// All accepted spellings, in declaration order
            pub const VARIANTS: &'static [&'static str] = &[$($text),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $(
                    if s.eq_ignore_ascii_case($text) {
                        return Ok($name::$variant);
                    }
                )+
                Err(UnknownVariant {
                    value: s.to_string(),
                    expected: Self::VARIANTS,
                })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// A value that matched none of an enumeration's spellings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub value: String,
    pub expected: &'static [&'static str],
}

beer_xml_enum!(FermentableType {
    Grain => "Grain",
    Extract => "Extract",
    Sugar => "Sugar",
    DryExtract => "Dry Extract",
    Adjunct => "Adjunct",
});

beer_xml_enum!(HopForm {
    Pellet => "Pellet",
    Leaf => "Leaf",
    Plug => "Plug",
});

beer_xml_enum!(HopUse {
    Boil => "Boil",
    DryHop => "Dry Hop",
    Mash => "Mash",
    FirstWort => "First Wort",
    Aroma => "Aroma",
});

beer_xml_enum!(MashStepType {
    Infusion => "Infusion",
    Temperature => "Temperature",
    Decoction => "Decoction",
});

beer_xml_enum!(YeastForm {
    Liquid => "Liquid",
    Dry => "Dry",
    Slant => "Slant",
    Culture => "Culture",
});

beer_xml_enum!(YeastType {
    Ale => "Ale",
    Lager => "Lager",
    Wheat => "Wheat",
    Wine => "Wine",
    Champagne => "Champagne",
});

beer_xml_enum!(RecipeType {
    Extract => "Extract",
    PartialMash => "Partial Mash",
    AllGrain => "All Grain",
});

beer_xml_enum!(
    /// Bitterness formula the source software used for `ibu`
    IbuMethod {
        Rager => "Rager",
        Tinseth => "Tinseth",
        Garetz => "Garetz",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(rename_all = "camelCase")]
pub struct Fermentable {
    pub name: String,
    pub add_after_boil: bool,
    /// Kilograms
    pub amount: f64,
    pub color: f64,
    /// Specific gravity contribution, derived from `yield` when the source omits it
    pub potential: f64,
    /// Percent, 0-100
    #[serde(rename = "yield")]
    pub yield_percent: f64,
    #[serde(rename = "type")]
    pub fermentable_type: FermentableType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(rename_all = "camelCase")]
pub struct Hop {
    pub name: String,
    /// Alpha acid as a fraction, 0-1
    pub alpha: f64,
    /// Kilograms
    pub amount: f64,
    pub form: HopForm,
    #[serde(rename = "use")]
    pub hop_use: HopUse,
    /// Minutes
    pub time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(rename_all = "camelCase")]
pub struct MashStep {
    pub name: String,
    pub end_temp: f64,
    /// Liters
    pub infuse_amount: f64,
    /// Minutes
    pub ramp_time: f64,
    pub step_temp: f64,
    /// Minutes
    pub step_time: f64,
    #[serde(rename = "type")]
    pub step_type: MashStepType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(rename_all = "camelCase")]
pub struct Mash {
    pub grain_temp: f64,
    pub tun_temp: f64,
    pub equip_adjust: bool,
    pub sparge_temp: f64,
    /// Steps in the order they are applied
    pub mash_steps: Vec<MashStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(rename_all = "camelCase")]
pub struct Yeast {
    pub name: String,
    pub amount: f64,
    /// Fraction, 0-1. Absent when the source has no attenuation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attenuation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub culture_date: Option<String>,
    pub form: YeastForm,
    #[serde(rename = "type")]
    pub yeast_type: YeastType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub name: String,
    pub batch_size: f64,
    pub boil_size: f64,
    pub tun_weight: f64,
    pub tun_volume: f64,
    pub tun_specific_heat: f64,
    pub cooling_loss_pct: f64,
    pub evap_rate: f64,
    pub lauter_deadspace: f64,
    pub top_up_kettle: f64,
    pub trub_chiller_loss: f64,
    /// Brew-in-a-bag, inferred from the mash name
    #[serde(rename = "BIAB")]
    pub biab: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(rename_all = "camelCase")]
pub struct Specifications {
    pub og: f64,
    pub fg: f64,
    /// Fraction, 0-1
    pub abv: f64,
    pub color: f64,
    pub ibu_method: IbuMethod,
    pub ibu: f64,
    pub calories: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub brewer: String,
    /// Liters
    pub batch_size: f64,
    /// Liters
    pub boil_size: f64,
    /// Minutes
    pub boil_time: f64,
    /// Fraction, 0-1
    pub efficiency: f64,
    #[serde(rename = "type")]
    pub recipe_type: RecipeType,
    pub fermentables: Vec<Fermentable>,
    pub hops: Vec<Hop>,
    pub mash: Mash,
    pub yeasts: Vec<Yeast>,
}

/// Everything imported from one BeerXML document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct BeerXmlImport {
    pub recipe: Recipe,
    pub equipment: Option<Equipment>,
    pub specifications: Specifications,
}
