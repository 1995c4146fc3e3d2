//! Quantum oracle service entry point

use clap::Parser;
use shared::{ServiceId, logging, service_info};
use tokio::signal;

use quantum_oracle::{
    OracleConfig, OracleResult, OracleServer, RandomSource, SeededRandomSource,
    ThreadRandomSource,
    config::{DEFAULT_HOST, DEFAULT_PORT},
};

/// Command line arguments, each with an environment fallback
#[derive(Parser, Debug)]
#[command(name = "quantum-oracle")]
#[command(about = "Simulated quantum prediction and launch optimization API")]
struct Args {
    /// Interface address or hostname to bind the HTTP server to
    #[arg(long, env = "ORACLE_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Port for the HTTP server
    #[arg(long, env = "ORACLE_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Name reported by the health endpoint
    #[arg(long, env = "ORACLE_SERVICE_NAME", default_value = shared::DEFAULT_SERVICE_NAME)]
    service_name: String,

    /// Seed for reproducible outputs (thread-local entropy when omitted)
    #[arg(long, env = "ORACLE_SEED")]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "ORACLE_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> OracleResult<()> {
    // A missing .env file is not an error
    let _ = dotenv::dotenv();

    let args = Args::parse();

    let config = OracleConfig::new(&args.host, args.port, &args.service_name)?
        .with_seed(args.seed);

    let service_id = ServiceId::init(config.service_name.clone());
    logging::init_tracing_with_level(Some(&args.log_level))?;

    logging::log_startup(service_id, &format!("quantum oracle on {}", config.bind_address));

    let result = match config.seed {
        Some(seed) => {
            service_info!(service_id, "🎲 Using seeded random source ({})", seed);
            launch(config, SeededRandomSource::new(seed)).await
        }
        None => launch(config, ThreadRandomSource::new()).await,
    };

    match &result {
        Ok(()) => logging::log_success(service_id, "Quantum oracle stopped gracefully"),
        Err(e) => logging::log_error(service_id, "Quantum oracle", e),
    }

    result
}

async fn launch<R>(config: OracleConfig, rng: R) -> OracleResult<()>
where
    R: RandomSource + 'static,
{
    let server = OracleServer::new(config, rng);

    let shutdown_sender = server.get_shutdown_sender();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                let _ = shutdown_sender.send(()).await;
            }
            Err(err) => {
                logging::log_error(ServiceId::current(), "Signal handling", &err);
            }
        }
    });

    server.run().await
}
