#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use lotto_draw::core::ConfigProvider;
#[cfg(feature = "lambda")]
use lotto_draw::utils::logger;
#[cfg(feature = "lambda")]
use lotto_draw::{DrawEngine, DrawError, DrawOutcome, LambdaConfig};
#[cfg(feature = "lambda")]
use serde::Serialize;
#[cfg(feature = "lambda")]
use serde_json::Value;
#[cfg(feature = "lambda")]
use std::collections::HashMap;

#[cfg(feature = "lambda")]
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

/// API Gateway 事件的 body 是字串，直接呼叫則是請求物件本身
#[cfg(feature = "lambda")]
fn outcome_for(payload: &Value, config: &LambdaConfig) -> DrawOutcome {
    let mut engine = DrawEngine::from_config(config);
    match payload.get("body") {
        Some(Value::String(body)) => engine.handle_bytes(body.as_bytes()),
        Some(Value::Null) => DrawOutcome::from_error(&DrawError::invalid_input(
            "No combinations provided.",
        )),
        _ => engine.handle(payload),
    }
}

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<Value>) -> Result<Response, Error> {
    tracing::info!("Starting draw Lambda function");

    let config = LambdaConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let outcome = outcome_for(&event.payload, &config);
    let body = if config.pretty_output() {
        serde_json::to_string_pretty(&outcome.body)?
    } else {
        serde_json::to_string(&outcome.body)?
    };

    let headers = HashMap::from([("Content-Type".to_string(), "application/json".to_string())]);

    tracing::info!("Draw Lambda function finished with status {}", outcome.status);
    Ok(Response {
        status_code: outcome.status,
        headers,
        body,
    })
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
