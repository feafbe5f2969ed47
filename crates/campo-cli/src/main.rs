use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::io::Write;
use std::path::PathBuf;

use campo_cli::demo::{run_demo, run_gradient};
use campo_cli::input::{load_driver_config, parse_region, parse_shape, DriverConfig, ElementKind};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("CAMPO_LOG", "warn,campo=info"))
        .init();

    let element_arg = || {
        Arg::new("element")
            .short('e')
            .long("element")
            .help("Element type of the grid: f32, f64, i32, i64 or all")
            .value_parser(clap::builder::NonEmptyStringValueParser::new())
    };
    let config_arg = || {
        Arg::new("config")
            .short('c')
            .long("config")
            .help("Path to a JSON driver configuration file")
            .value_parser(clap::value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath)
    };

    let matches = Command::new("campo")
        .version(clap::crate_version!())
        .about("Generic 2D field simulator")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("demo")
                .about("Run the scripted float and integer field demonstration")
                .arg(config_arg())
                .arg(element_arg()),
        )
        .subcommand(
            Command::new("gradient")
                .about("Compute the mean gradient of a grid given on the command line")
                .arg(
                    Arg::new("shape")
                        .short('s')
                        .long("shape")
                        .required(true)
                        .help("Grid shape as ROWSxCOLS, e.g. 3x3")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                )
                .arg(
                    Arg::new("values")
                        .short('v')
                        .long("values")
                        .required(true)
                        .allow_hyphen_values(true)
                        .help("Comma separated cell values in row-major order")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                )
                .arg(
                    Arg::new("region")
                        .short('r')
                        .long("region")
                        .help("Half-open region R0:R1,C0:C1. Defaults to the whole grid")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                )
                .arg(config_arg())
                .arg(element_arg()),
        )
        .get_matches();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match matches.subcommand() {
        Some(("demo", sub_m)) => {
            let config = driver_config(sub_m)?;
            log::info!("Running demo with element type {}", config.element);
            run_demo(&config, &mut out)?;
        }
        Some(("gradient", sub_m)) => {
            let config = driver_config(sub_m)?;
            let shape = parse_shape(required(sub_m, "shape")?)?;
            let values = required(sub_m, "values")?;
            let region = sub_m
                .get_one::<String>("region")
                .map(|r| parse_region(r))
                .transpose()?;
            let display = &config.display;
            match config.element {
                ElementKind::F32 => run_gradient::<f32, _>(shape, values, region, display, &mut out)?,
                ElementKind::F64 | ElementKind::All => {
                    run_gradient::<f64, _>(shape, values, region, display, &mut out)?
                }
                ElementKind::I32 => run_gradient::<i32, _>(shape, values, region, display, &mut out)?,
                ElementKind::I64 => run_gradient::<i64, _>(shape, values, region, display, &mut out)?,
            }
        }
        _ => unreachable!(),
    }
    out.flush()?;

    Ok(())
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .ok_or_else(|| anyhow::anyhow!("Missing required argument: {}", id))
}

/// Loads the optional config file, then applies `--element` on top of it.
fn driver_config(matches: &ArgMatches) -> Result<DriverConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => load_driver_config(path)?,
        None => DriverConfig::default(),
    };
    if let Some(element) = matches.get_one::<String>("element") {
        config.element = element.parse::<ElementKind>().map_err(anyhow::Error::msg)?;
    }
    Ok(config)
}
