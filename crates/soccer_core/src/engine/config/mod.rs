//! # Environment Configuration Module
//!
//! 튜닝 가능한 값을 한곳에서 관리하는 설정 시스템.
//!
//! ## 구성
//! - `EnvConfig`: 에피소드 길이, 평가 로그, 리셋 지터
//! - `SoccerSettings`: 이동 속도
//! - `PolicyConfig`: 학습 정책 (자동 감지 실패 시 기본값)
//!
//! ## 사용법
//! ```rust
//! use soccer_core::engine::config::ExperimentConfig;
//!
//! let config = ExperimentConfig::from_yaml("env:\n  max_environment_steps: 5000\n").unwrap();
//! assert_eq!(config.env.max_environment_steps, 5000);
//! ```

mod env_config;
mod policy_config;
mod settings;

pub use env_config::{EnvConfig, ResetConfig};
pub use policy_config::PolicyConfig;
pub use settings::SoccerSettings;

use std::path::Path;
use std::{env, fs};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;

/// 설정 파일 경로를 지정하는 환경 변수
pub const ENV_CONFIG_PATH_ENV: &str = "SOCCER_ENV_CONFIG_PATH";

/// 전체 실험 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub env: EnvConfig,
    pub settings: SoccerSettings,
    pub policy: PolicyConfig,
    /// behavior name 기반 정책 자동 감지 (기본: true)
    pub auto_detect_policy: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            env: EnvConfig::default(),
            settings: SoccerSettings::default(),
            policy: PolicyConfig::default(),
            auto_detect_policy: true,
        }
    }
}

impl ExperimentConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// 확장자(.json / .yaml / .yml)로 포맷 판별
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content),
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Err(ConfigError::UnsupportedFormat { path: path.display().to_string() }),
        }
    }

    /// `SOCCER_ENV_CONFIG_PATH`가 설정되어 있으면 로드, 아니면 None
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        let Ok(path) = env::var(ENV_CONFIG_PATH_ENV) else {
            return Ok(None);
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(None);
        }

        let config = Self::load(Path::new(path))?;
        info!(%path, "loaded experiment config from {ENV_CONFIG_PATH_ENV}");
        Ok(Some(config))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.env.validate()?;
        if !self.settings.agent_run_speed.is_finite() || self.settings.agent_run_speed < 0.0 {
            return Err(ConfigError::invalid("settings.agent_run_speed", "must be finite and >= 0"));
        }
        if !self.settings.rotation_speed_deg.is_finite() {
            return Err(ConfigError::invalid("settings.rotation_speed_deg", "must be finite"));
        }
        Ok(())
    }
}
