//! Command-line entry point.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Print usage and exit on `help`.
//! 3. Load [`AppConfig`] from disk (default when absent) and overlay the
//!    environment.
//! 4. Validate the configuration; print usage and exit 1 when it is
//!    incomplete.
//! 5. Run the suite on a single-threaded tokio runtime.
//! 6. Print the report; exit 0 only when every test passed.

use std::process::ExitCode;

use anyhow::Context;
use speech_endpoint_tester::{
    config::{AppConfig, ENV_ENDPOINT, ENV_KEY, ENV_REGION},
    http::ReqwestClient,
    report::{closing_message, Report},
    suite::TestSuite,
};

fn usage() -> String {
    format!(
        "\
Azure Speech Service Endpoint Tester

Usage:
    speech-endpoint-tester [help]

Environment Variables:
    {ENV_KEY}       Your Azure Speech Service subscription key (required)
    {ENV_REGION}    Azure region (e.g., eastus, westus2, westeurope)
    {ENV_ENDPOINT}  Custom endpoint URL (optional, overrides region)

Example:
    export {ENV_KEY}=\"your-subscription-key\"
    export {ENV_REGION}=\"eastus\"
    speech-endpoint-tester

Common regions:
    eastus, eastus2, westus, westus2, centralus, northeurope, westeurope,
    southeastasia, eastasia, japaneast, australiaeast, uksouth

Endpoint format:
    https://{{region}}.api.cognitive.microsoft.com/sts/v1.0/issuetoken

Settings file (optional): timeouts, STT cases and TTS samples are read from
settings.toml in the platform config directory."
    )
}

fn is_help(arg: &str) -> bool {
    matches!(arg, "-h" | "--help" | "help")
}

fn main() -> anyhow::Result<ExitCode> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 2. Help
    if std::env::args().skip(1).any(|arg| is_help(&arg)) {
        println!("{}", usage());
        return Ok(ExitCode::SUCCESS);
    }

    // 3. Configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });
    config.apply_env(|name| std::env::var(name).ok());

    // 4. Validation
    let client = ReqwestClient::new();
    let suite = match TestSuite::new(&client, &config) {
        Ok(suite) => suite,
        Err(e) => {
            log::error!("{e}");
            println!("{}", usage());
            return Ok(ExitCode::FAILURE);
        }
    };

    // 5. Run (probes are strictly sequential)
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?;
    let run = rt.block_on(suite.run());

    // 6. Report
    let summary = run.summary();
    println!("{}", Report(&run));
    println!();
    println!("{}", closing_message(&summary));

    Ok(if summary.overall_success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
