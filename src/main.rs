use anniversary::utils::{logger, validation::Validate};
use anniversary::{AnniversaryEngine, AppConfig, CliConfig, Clock, FixedClock, Notifier, SystemClock};
use clap::{CommandFactory, Parser};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 沒有指定 --print 或 --email 時只顯示用法
    if !config.has_delivery() {
        if let Err(e) = CliConfig::command().print_help() {
            eprintln!("❌ {}", e);
        }
        println!();
        return;
    }

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting anniversary CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(config).await {
        tracing::error!(
            "❌ Anniversary run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: CliConfig) -> anniversary::Result<()> {
    cli.validate_path()?;
    let today = cli
        .today_override()?
        .unwrap_or_else(|| SystemClock.today());

    // 載入並驗證 TOML 配置
    tracing::info!("📁 Loading configuration from: {}", cli.config);
    let app_config = AppConfig::from_file(&cli.config)?;
    app_config.validate()?;
    let event = app_config.event()?;

    // 先建立所有通知管道, 設定錯誤在輸出任何內容前就失敗
    let mut notifiers = Vec::new();
    if cli.print {
        notifiers.push(Notifier::console());
    }
    if cli.email {
        notifiers.push(Notifier::email(&app_config)?);
    }

    let engine = AnniversaryEngine::new(event, FixedClock(today));
    let (report, deliveries) = engine.run(&notifiers).await?;

    tracing::info!(
        "✅ Delivered {} day / {} week / {} month report through {} channel(s)",
        report.days_elapsed,
        report.weeks_elapsed,
        report.months_elapsed,
        deliveries.len()
    );
    Ok(())
}
