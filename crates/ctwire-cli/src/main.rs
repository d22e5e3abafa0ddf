use anyhow::Result;
use ctwire_term::application::cli;
use ctwire_term::destruct_terminal_for_panic;
use ctwire_term::Config;
use ctwire_term::ConfigKey;
use ctwire_term::Startup;

mod logging;
mod terminal_ui;

#[tokio::main]
async fn main() -> Result<()> {
    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    if let Startup::Exit(code) = cli::parse().await? {
        if code != 0 {
            std::process::exit(code);
        }
        return Ok(());
    }

    let _guard = logging::init(
        &Config::get(ConfigKey::LogFile),
        &Config::get(ConfigKey::LogLevel),
    )?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting trainer");

    let result = terminal_ui::start_ui().await;
    if let Err(err) = &result {
        tracing::error!(error = %err, "trainer failed");
        destruct_terminal_for_panic();
    }

    return result;
}
