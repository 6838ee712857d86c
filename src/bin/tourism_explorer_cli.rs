use std::fs;
use std::path::PathBuf;

use tourism_explorer::api::{ExplorerConfig, ExplorerEngine};
use tourism_explorer::core::{Measure, Selection};
use tourism_explorer::render::NullRenderer;
use tourism_explorer::telemetry;

const USAGE: &str = "usage: tourism_explorer_cli --input <csv> [--region <name|all>] [--country <name|all>] [--measure <absolute|growth|growthRate|perCapita>] [--years <min:max>] [--focus <key>] [--config <json>]";

#[derive(Debug, Default)]
struct CliArgs {
    input: PathBuf,
    config: Option<PathBuf>,
    region: Option<Selection>,
    country: Option<Selection>,
    measure: Option<Measure>,
    years: Option<(i32, i32)>,
    focus: Option<String>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let _ = telemetry::init_default_tracing();
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ExplorerConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ExplorerConfig::default(),
    };

    let mut engine =
        ExplorerEngine::new(NullRenderer::default(), config).map_err(|err| err.to_string())?;
    engine
        .load_csv_path(&args.input)
        .map_err(|err| format!("failed to load `{}`: {err}", args.input.display()))?;

    if let Some(region) = args.region {
        engine.set_region(region);
    }
    if let Some(country) = args.country {
        engine.set_country(country);
    }
    if let Some(measure) = args.measure {
        engine.set_measure(measure);
    }
    if let Some((year_min, year_max)) = args.years {
        engine.set_year_range(year_min, year_max);
    }
    if let Some(focus) = &args.focus {
        engine.toggle_focus(focus);
    }

    engine.render().map_err(|err| err.to_string())?;
    let json = engine
        .snapshot()
        .to_json_contract_v1_pretty()
        .map_err(|err| err.to_string())?;
    println!("{json}");
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut parsed = CliArgs::default();
    let mut input = None::<PathBuf>;

    while let Some(flag) = args.next() {
        let mut value = || {
            args.next()
                .ok_or_else(|| format!("missing value for `{flag}`"))
        };
        match flag.as_str() {
            "--input" => input = Some(PathBuf::from(value()?)),
            "--config" => parsed.config = Some(PathBuf::from(value()?)),
            "--region" => parsed.region = Some(Selection::parse(&value()?)),
            "--country" => parsed.country = Some(Selection::parse(&value()?)),
            "--measure" => {
                parsed.measure = Some(value()?.parse().map_err(|err| format!("{err}"))?);
            }
            "--years" => parsed.years = Some(parse_years(&value()?)?),
            "--focus" => parsed.focus = Some(value()?),
            "-h" | "--help" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`\n{USAGE}")),
        }
    }

    parsed.input = input.ok_or_else(|| format!("missing --input\n{USAGE}"))?;
    Ok(parsed)
}

fn parse_years(raw: &str) -> Result<(i32, i32), String> {
    let (min, max) = raw
        .split_once(':')
        .ok_or_else(|| format!("invalid --years `{raw}`, expected <min:max>"))?;
    let min = min
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("invalid start year `{min}`: {err}"))?;
    let max = max
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("invalid end year `{max}`: {err}"))?;
    Ok((min, max))
}
