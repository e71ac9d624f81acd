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
use tinydns_route::{Error, Result, reconcile, resolver, zonefile};

async fn run(config: &Config, file: &str) -> Result<()> {
    let mut zone = zonefile::load_file(file).await?;
    // Fail on a missing SOA before anything talks to the provider
    resolver::zone_domain(&zone)?;

    let provider = HostedProvider::new(
        HostedConfig::new(config.api_url.as_str()),
        Arc::new(EnvCredentialManager),
    )
    .map_err(map_error)?;

    info!("Using {} provider at {}", provider.name(), config.api_url);

    let hosted = resolver::resolve_zone(&provider, &zone, config.zone_list_limit).await?;
    let summaries =
        reconcile::reconcile_zone(&provider, &hosted, &mut zone, config.default_ttl).await?;

    for (record_type, summary) in summaries {
        info!(
            "{record_type}: {} created, {} updated",
            summary.created, summary.updated
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    cli::init_logging();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("update-zone");

    let mut opts = Options::new();
    opts.optflag("h", "help", "print this help menu");
    opts.optopt(
        "f",
        "file",
        &format!(
            "tinydns data file to publish (default: $ZONE_FILE or {})",
            config::DEFAULT_ZONE_FILE
        ),
        "PATH",
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
    let file = matches
        .opt_str("f")
        .unwrap_or_else(|| config.zone_file.clone());

    match run(&config, &file).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
