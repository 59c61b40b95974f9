use thiserror::Error;

use crate::engine::types::BodyHandle;

/// 설정 로드/검증 오류
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported config format: {path}")]
    UnsupportedFormat { path: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// 평가 로그 (evaluation_results.txt) 오류
///
/// 틱 도중에는 절대 전파되지 않는다. 호출 지점에서 로깅 후 삼킴.
#[derive(Error, Debug)]
pub enum EvalLogError {
    #[error("Failed to open evaluation log {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to append to evaluation log {path}: {source}")]
    Append {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 알 수 없는 학습 정책 문자열 (`TrainingPolicy::from_str`)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown training policy: {0}")]
pub struct UnknownPolicy(pub String);

/// 매치 셋업 오류 (로스터 구성 시점에만 발생)
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Body not found in physics world: {0:?}")]
    MissingBody(BodyHandle),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue { field, reason: reason.into() }
    }
}
