use std::io::Write;

use anyhow::Result;
use tempfile::NamedTempFile;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

fn config_file(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    return Ok(file);
}

// The config store is process wide, so every load scenario runs in one test.
#[tokio::test]
async fn it_loads_with_file_then_flag_precedence() -> Result<()> {
    let missing = "/nonexistent/ctwire/config.toml";
    let matches = cli::build().try_get_matches_from(vec!["ctwire", "--config-file", missing])?;
    Config::load(cli::build(), vec![&matches]).await?;
    assert_eq!(Config::get(ConfigKey::ConfigFile), missing);
    assert_eq!(Config::get(ConfigKey::LogLevel), "info");
    assert_eq!(Config::get(ConfigKey::Marker), "braille");

    let file = config_file("log-level = \"debug\"\nmarker = \"dot\"\n")?;
    let path = file.path().to_string_lossy().to_string();
    let matches = cli::build().try_get_matches_from(vec!["ctwire", "--config-file", path.as_str()])?;
    Config::load(cli::build(), vec![&matches]).await?;
    assert_eq!(Config::get(ConfigKey::LogLevel), "debug");
    assert_eq!(Config::get(ConfigKey::Marker), "dot");

    let matches = cli::build().try_get_matches_from(vec![
        "ctwire",
        "--config-file",
        path.as_str(),
        "--marker",
        "block",
    ])?;
    Config::load(cli::build(), vec![&matches]).await?;
    assert_eq!(Config::get(ConfigKey::LogLevel), "debug");
    assert_eq!(Config::get(ConfigKey::Marker), "block");

    let file = config_file("marker = \"sparkle\"\n")?;
    let path = file.path().to_string_lossy().to_string();
    let matches = cli::build().try_get_matches_from(vec!["ctwire", "--config-file", path.as_str()])?;
    let err = Config::load(cli::build(), vec![&matches])
        .await
        .unwrap_err()
        .to_string();
    assert!(err.contains("invalid value for key 'marker': sparkle"));
    assert!(err.contains("braille, dot, block, half-block"));

    return Ok(());
}

#[test]
fn it_serializes_default_config() {
    let log_file = Config::default(ConfigKey::LogFile);
    let toml_str = Config::serialize_default(cli::build()).replace(&log_file, "[log-file]");

    insta::assert_snapshot!(toml_str, @r###"
    # File the trainer writes its log to
    log-file = "[log-file]"

    # Lowest log level written to the log file [possible values: error, warn, info, debug, trace]
    log-level = "info"

    # Symbol set used to draw the diagram [possible values: braille, dot, block, half-block]
    marker = "braille"
    "###);
    assert!(toml_str.parse::<toml_edit::Document>().is_ok());
}
