use crate::core::RequestSource;
use crate::domain::model::DrawOutcome;
use crate::utils::error::Result;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

#[derive(Debug, Clone)]
pub enum LocalSource {
    File(PathBuf),
    Stdin,
}

impl LocalSource {
    pub fn new(path: Option<&str>) -> Self {
        match path {
            Some(path) => Self::File(PathBuf::from(path)),
            None => Self::Stdin,
        }
    }
}

impl RequestSource for LocalSource {
    async fn read_request(&self) -> Result<Vec<u8>> {
        match self {
            Self::File(path) => {
                tracing::debug!("Reading request from {}", path.display());
                Ok(tokio::fs::read(path).await?)
            }
            Self::Stdin => {
                tracing::debug!("Reading request from stdin");
                let mut body = Vec::new();
                tokio::io::stdin().read_to_end(&mut body).await?;
                Ok(body)
            }
        }
    }
}

/// 將結果序列化為輸出字串
pub fn render_outcome(outcome: &DrawOutcome, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(&outcome.body)?
    } else {
        serde_json::to_string(&outcome.body)?
    };
    Ok(rendered)
}

/// Exit code for a finished request: 0 ok, 2 rejected input, 1 server failure.
pub fn exit_code(outcome: &DrawOutcome) -> i32 {
    match outcome.status {
        200..=299 => 0,
        400..=499 => 2,
        _ => 1,
    }
}
