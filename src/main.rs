use beerxml_import::{import_beer_xml_with_options, ImportConfig, ImportError, YeastMode};
use log::{debug, error};
use std::env;
use std::io::Read;
use std::process::ExitCode;

const USAGE: &str = "Usage: beerxml-import [--all-yeasts] [--compact] <FILE|->";

struct Args {
    input: String,
    all_yeasts: bool,
    compact: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut input = None;
    let mut all_yeasts = false;
    let mut compact = false;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--all-yeasts" => all_yeasts = true,
            "--compact" => compact = true,
            "-h" | "--help" => return Err(USAGE.to_string()),
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown option: {}\n{}", flag, USAGE))
            }
            _ if input.is_some() => return Err(format!("Only one input is accepted\n{}", USAGE)),
            _ => input = Some(arg),
        }
    }

    Ok(Args {
        input: input.ok_or_else(|| USAGE.to_string())?,
        all_yeasts,
        compact,
    })
}

fn read_input(input: &str) -> Result<String, ImportError> {
    if input == "-" {
        let mut xml = String::new();
        std::io::stdin().read_to_string(&mut xml)?;
        Ok(xml)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}

fn run(args: Args) -> Result<String, ImportError> {
    let config = ImportConfig::load()?;
    debug!("Loaded configuration: {:?}", config);

    let mut options = config.options();
    if args.all_yeasts {
        options.yeast_mode = YeastMode::All;
    }

    let xml = read_input(&args.input)?;
    let import = import_beer_xml_with_options(&xml, &options)?;

    let json = if config.pretty && !args.compact {
        serde_json::to_string_pretty(&import)?
    } else {
        serde_json::to_string(&import)?
    };
    Ok(json)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Import failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
