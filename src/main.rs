use clap::Parser;
use pexels_client::core::ConfigProvider;
use pexels_client::utils::logger;
use pexels_client::{CliConfig, PexelsClient, PexelsError, PhotoEngine, Topic};

#[tokio::main]
async fn main() {
    // .env 不存在時直接忽略
    dotenvy::dotenv().ok();

    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli).await {
        tracing::error!("❌ Request failed: {} (status: {:?})", e, e.status());
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: &CliConfig) -> Result<(), PexelsError> {
    let Some(request) = cli.request() else {
        for topic in Topic::ALL {
            println!("{}", topic);
        }
        return Ok(());
    };

    let config = cli.load_config()?;
    let client = PexelsClient::from_config(&config)?;
    let engine = PhotoEngine::new(client).with_defaults(config.default_options());

    let body = engine.run(request).await?;
    println!("{}", body);
    Ok(())
}
