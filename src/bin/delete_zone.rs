use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use getopts::Options;
use log::{error, info};

use tinydns_route::auth::credentials::EnvCredentialManager;
use tinydns_route::cli;
use tinydns_route::core::provider::DNSProvider;
use tinydns_route::config::{self, Config};
use tinydns_route::providers::hosted::{HostedConfig, HostedProvider, map_error};
use tinydns_route::{Error, Result, delete};

async fn run(config: &Config, zone: &str) -> Result<()> {
    let provider = HostedProvider::new(
        HostedConfig::new(config.api_url.as_str()),
        Arc::new(EnvCredentialManager),
    )
    .map_err(map_error)?;

    info!("Using {} provider at {}", provider.name(), config.api_url);

    if delete::delete_zone(&provider, zone, config.zone_list_limit)
        .await?
        .is_none()
    {
        println!("No hosted zone named {zone}");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    cli::init_logging();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("delete-zone");

    let mut opts = Options::new();
    opts.optflag("h", "help", "print this help menu");
    opts.optopt(
        "z",
        "zone",
        &format!(
            "hosted zone to delete, with its records (default: $ZONE_NAME or {})",
            config::DEFAULT_ZONE_NAME
        ),
        "FQDN",
    );

    let matches = match cli::parse_args(&opts, args.get(1..).unwrap_or_default()) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{e}");
            eprint!("{}", cli::usage(program, &opts));
            return ExitCode::from(2);
        }
    };

    if matches.opt_present("h") {
        print!("{}", cli::usage(program, &opts));
        return ExitCode::SUCCESS;
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", Error::InvalidInput(format!("DNS_API_URL: {e}")));
            return ExitCode::FAILURE;
        }
    };
    let zone = matches
        .opt_str("z")
        .unwrap_or_else(|| config.zone_name.clone());

    match run(&config, &zone).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
