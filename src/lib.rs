use lambda_runtime::error::HandlerError;
use lambda_runtime::Context;
use serde_json::Value;
use std::env;

pub const GREETING: &str = "hello world";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

pub fn handler(_event: Value, context: Context) -> Result<String, HandlerError> {
    log::info!("Handling request {}", context.aws_request_id);
    Ok(GREETING.to_owned())
}

pub fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.map(str::trim)
        .and_then(|s| s.parse().ok())
        .unwrap_or(log::Level::Info)
}

pub fn log_level() -> log::Level {
    parse_log_level(env::var(LOG_LEVEL_VAR).ok().as_deref())
}
