//! Import a BeerXML file and print a short brew-day summary
//!
//! Run with: cargo run --example import_file -- path/to/recipe.xml

use beerxml_import::BeerXmlImporter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .ok_or("Please provide a BeerXML file as an argument")?;

    let import = BeerXmlImporter::builder().file(path).all_yeasts().build()?;
    let recipe = &import.recipe;

    println!("{} ({}) by {}", recipe.name, recipe.recipe_type, recipe.brewer);
    println!(
        "Batch {:.1} L, boil {:.0} min, efficiency {:.0}%",
        recipe.batch_size,
        recipe.boil_time,
        recipe.efficiency * 100.0
    );

    println!("\nFermentables:");
    for fermentable in &recipe.fermentables {
        println!(
            "  {:.2} kg {} (potential {:.3})",
            fermentable.amount, fermentable.name, fermentable.potential
        );
    }

    println!("\nHops:");
    for hop in &recipe.hops {
        println!(
            "  {:.0} g {} {:.1}% AA, {} {:.0} min",
            hop.amount * 1000.0,
            hop.name,
            hop.alpha * 100.0,
            hop.hop_use,
            hop.time
        );
    }

    println!("\nMash:");
    for step in &recipe.mash.mash_steps {
        println!("  {} {:.1} for {:.0} min", step.name, step.step_temp, step.step_time);
    }

    for yeast in &recipe.yeasts {
        println!("\nYeast: {} ({}, {})", yeast.name, yeast.yeast_type, yeast.form);
    }

    let specs = &import.specifications;
    println!(
        "\nOG {:.3} FG {:.3} ABV {:.1}% IBU {:.0} ({})",
        specs.og,
        specs.fg,
        specs.abv * 100.0,
        specs.ibu,
        specs.ibu_method
    );

    if let Some(equipment) = &import.equipment {
        println!(
            "Equipment: {}{}",
            equipment.name,
            if equipment.biab { " (BIAB)" } else { "" }
        );
    }

    Ok(())
}
