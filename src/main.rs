use clap::Parser;
use hello_client::utils::logger::{self, LogFormat};
use hello_client::utils::validation::Validate;
use hello_client::{CliConfig, HelloClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    let format = if config.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(format, config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置並建立客戶端
    let client = match config.validate().and_then(|_| config.build_client()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    match client.hello(&config.application_name).await {
        Ok(body) => {
            tracing::info!(
                "✅ {} answered for '{}' ({} bytes)",
                client.spec().service_name(),
                config.application_name,
                body.len()
            );
            println!("{}", config.format_body(&body));
        }
        Err(e) => {
            tracing::error!("❌ Call failed: {} (Category: {:?})", e, e.category());
            if let hello_client::HelloClientError::RemoteFailure { body, .. } = &e {
                if !body.is_empty() {
                    tracing::debug!("Remote error body: {}", body);
                }
            }

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
