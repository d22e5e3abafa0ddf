#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;

use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::Shell;
use ctwire_core::evaluate;
use ctwire_core::CtTerminal;
use ctwire_core::Mapping;
use ctwire_core::Outcome;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

/// What the binary should do once the command line was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Startup {
    Ui,
    Exit(i32),
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub mapping: Mapping,
    pub outcome: Outcome,
    pub message: &'static str,
}

fn arg_config_file() -> Arg {
    return Arg::new(ConfigKey::ConfigFile.to_string())
        .long(ConfigKey::ConfigFile.to_string())
        .env("CTWIRE_CONFIG_FILE")
        .num_args(1)
        .help(format!(
            "Path to configuration file [default: {}]",
            Config::default(ConfigKey::ConfigFile)
        ));
}

fn arg_log_file() -> Arg {
    return Arg::new(ConfigKey::LogFile.to_string())
        .long(ConfigKey::LogFile.to_string())
        .env("CTWIRE_LOG_FILE")
        .num_args(1)
        .help("File the trainer writes its log to");
}

fn arg_log_level() -> Arg {
    return Arg::new(ConfigKey::LogLevel.to_string())
        .long(ConfigKey::LogLevel.to_string())
        .env("CTWIRE_LOG_LEVEL")
        .num_args(1)
        .value_parser(PossibleValuesParser::new([
            "error", "warn", "info", "debug", "trace",
        ]))
        .help("Lowest log level written to the log file");
}

fn arg_marker() -> Arg {
    return Arg::new(ConfigKey::Marker.to_string())
        .long(ConfigKey::Marker.to_string())
        .env("CTWIRE_MARKER")
        .num_args(1)
        .value_parser(PossibleValuesParser::new([
            "braille",
            "dot",
            "block",
            "half-block",
        ]))
        .help("Symbol set used to draw the diagram");
}

fn arg_meter_terminal(name: &'static str) -> Arg {
    return Arg::new(name)
        .long(name)
        .num_args(1)
        .value_parser(PossibleValuesParser::new(["S1", "S2"]))
        .ignore_case(true)
        .help(format!(
            "CT terminal wired to {}, leave out for not connected",
            name.to_uppercase()
        ));
}

fn subcommand_check() -> Command {
    return Command::new("check")
        .about("Checks a wiring without opening the trainer.")
        .arg(arg_meter_terminal("m1"))
        .arg(arg_meter_terminal("l1"))
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the result as JSON"),
        );
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand_required(true)
        .subcommand(Command::new("default").about("Prints the default configuration file."))
        .subcommand(Command::new("path").about("Prints the path to the configuration file."));
}

pub fn build() -> Command {
    let about = "Practice wiring a current transformer secondary (S1, S2) to a single-phase meter (M1, L1).\n\nCorrect wiring is S1 → M1 and S2 → L1.";

    return Command::new("ctwire")
        .about(about)
        .version(env!("CARGO_PKG_VERSION"))
        .arg(arg_config_file())
        .arg(arg_log_file())
        .arg(arg_log_level())
        .arg(arg_marker())
        .subcommand(subcommand_check())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config());
}

fn parse_ct(matches: &ArgMatches, name: &str) -> Result<Option<CtTerminal>> {
    let Some(val) = matches.get_one::<String>(name) else {
        return Ok(None);
    };

    return Ok(Some(val.parse::<CtTerminal>()?));
}

/// Evaluates the wiring given by `--m1` and `--l1`.
pub fn check_report(matches: &ArgMatches) -> Result<CheckReport> {
    let mapping = Mapping::new(parse_ct(matches, "m1")?, parse_ct(matches, "l1")?);
    let outcome = evaluate(&mapping);

    return Ok(CheckReport {
        mapping,
        outcome,
        message: outcome.message(),
    });
}

fn run_check(matches: &ArgMatches) -> Result<Startup> {
    let report = check_report(matches)?;
    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.message);
    }

    if report.outcome == Outcome::CorrectPolarity {
        return Ok(Startup::Exit(0));
    }

    return Ok(Startup::Exit(1));
}

pub async fn parse() -> Result<Startup> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("check", subcmd_matches)) => {
            return run_check(subcmd_matches);
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                clap_complete::generate(completions, &mut app, "ctwire", &mut io::stdout());
            }
            return Ok(Startup::Exit(0));
        }
        Some(("config", subcmd_matches)) => {
            match subcmd_matches.subcommand() {
                Some(("default", _)) => {
                    println!("{}", Config::serialize_default(build()));
                }
                Some(("path", _)) => {
                    Config::load(build(), vec![&matches]).await?;
                    println!("{}", Config::get(ConfigKey::ConfigFile));
                }
                _ => (),
            }
            return Ok(Startup::Exit(0));
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(Startup::Ui);
}
