use clap::Parser;
use hello_evolution::domain::ports::MessageSink;
use hello_evolution::utils::{logger, validation::Validate};
use hello_evolution::{CliConfig, HelloWorldOrchestrator, StdoutSink};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.debug);

    tracing::debug!("Starting hello-evolution CLI");
    if config.debug {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 建立協調者與輸出
    let orchestrator = HelloWorldOrchestrator::global();
    let sink = StdoutSink::new();

    match orchestrator.run(&config).await {
        Ok(message) => {
            tracing::debug!("✅ Evolution pipeline completed");
            sink.deliver(&message).await?;
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Evolution failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                hello_evolution::utils::error::ErrorSeverity::Low => 0,
                hello_evolution::utils::error::ErrorSeverity::Medium => 2,
                hello_evolution::utils::error::ErrorSeverity::High => 1,
                hello_evolution::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
