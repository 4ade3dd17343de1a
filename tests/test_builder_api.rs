mod common;

use beerxml_import::{
    import_beer_xml, import_beer_xml_file, BeerXmlImporter, ImportConfig, ImportError, YeastMode,
};
use common::{default_recipe, RecipeXml, YEAST};
use std::io::Write;

fn two_yeast_recipe() -> String {
    RecipeXml {
        yeasts: format!("{}{}", YEAST, YEAST.replace("London ESB", "S-04")),
        ..Default::default()
    }
    .render()
}

#[test]
fn test_builder_xml_matches_convenience_function() {
    let xml = default_recipe();
    let from_builder = BeerXmlImporter::builder().xml(xml.as_str()).build().unwrap();
    assert_eq!(from_builder, import_beer_xml(&xml).unwrap());
}

#[test]
fn test_builder_without_source() {
    let result = BeerXmlImporter::builder().build();
    match result {
        Err(ImportError::BuilderError(message)) => assert!(message.contains(".xml()")),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_builder_yeast_mode() {
    let import = BeerXmlImporter::builder()
        .xml(two_yeast_recipe())
        .yeast_mode(YeastMode::All)
        .build()
        .unwrap();
    assert_eq!(import.recipe.yeasts.len(), 2);

    let import = BeerXmlImporter::builder()
        .xml(two_yeast_recipe())
        .all_yeasts()
        .build()
        .unwrap();
    assert_eq!(import.recipe.yeasts[1].name, "S-04");
}

#[test]
fn test_builder_from_config() {
    let config = ImportConfig {
        yeast_mode: YeastMode::All,
        ..Default::default()
    };
    let import = BeerXmlImporter::from_config(&config)
        .xml(two_yeast_recipe())
        .build()
        .unwrap();
    assert_eq!(import.recipe.yeasts.len(), 2);
}

#[test]
fn test_builder_file_source() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(default_recipe().as_bytes()).unwrap();

    let import = BeerXmlImporter::builder().file(file.path()).build().unwrap();
    assert_eq!(import.recipe.name, "Best Bitter");

    let import = import_beer_xml_file(file.path()).unwrap();
    assert_eq!(import.recipe.brewer, "Alex");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = import_beer_xml_file(dir.path().join("missing.xml"));
    assert!(matches!(result, Err(ImportError::Io(_))));
}
