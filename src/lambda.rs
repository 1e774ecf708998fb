#[cfg(feature = "lambda")]
use anniversary::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use anniversary::{
    AnniversaryEngine, AppConfig, LambdaConfig, LambdaResponse, Notifier, SystemClock,
};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

/// 事件內容不使用; 每次呼叫都會發佈到設定的 SNS topic
#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<serde_json::Value>) -> Result<LambdaResponse, Error> {
    tracing::info!(
        request_id = %event.context.request_id,
        "Starting anniversary Lambda function"
    );

    let lambda_config = LambdaConfig::from_env();
    lambda_config.validate()?;

    let app_config = AppConfig::from_file(&lambda_config.config_path)?;
    app_config.validate()?;
    let topic_arn = lambda_config.resolve_topic_arn(&app_config)?;

    let notifier = Notifier::sns(topic_arn, lambda_config.region.clone()).await;
    let engine = AnniversaryEngine::new(app_config.event()?, SystemClock);

    let report = engine.report()?;
    let delivery = engine.deliver(&notifier, &report).await?;

    tracing::info!("Anniversary Lambda function completed successfully");
    Ok(LambdaResponse {
        message: report.rendered_text,
        notification_response: delivery,
    })
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
