//! Environment (episode) configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// 에피소드 코디네이터 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// 리셋 전 최대 스텝 (0이면 타임아웃 없음) (기본: 25000)
    pub max_environment_steps: u32,
    /// 평가 로그 활성화 (추론 모드에서만 실제 기록) (기본: false)
    pub enable_evaluation_logging: bool,
    /// 평가 로그 경로 (기본: "evaluation_results.txt")
    pub evaluation_log_path: String,
    /// 리셋 지터 범위
    pub reset: ResetConfig,
    /// 리셋 RNG 시드 (None이면 entropy)
    pub seed: Option<u64>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            max_environment_steps: 25_000,
            enable_evaluation_logging: false,
            evaluation_log_path: "evaluation_results.txt".to_string(),
            reset: ResetConfig::default(),
            seed: None,
        }
    }
}

impl EnvConfig {
    /// 존재 보상 크기: 1 / max_environment_steps
    ///
    /// 타임아웃이 꺼져 있으면 0.
    pub fn existential_rate(&self) -> f32 {
        if self.max_environment_steps == 0 {
            0.0
        } else {
            1.0 / self.max_environment_steps as f32
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enable_evaluation_logging && self.evaluation_log_path.trim().is_empty() {
            return Err(ConfigError::invalid(
                "evaluation_log_path",
                "must be set when evaluation logging is enabled",
            ));
        }
        self.reset.validate()
    }
}

/// 리셋 시 랜덤 배치 범위
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResetConfig {
    /// 에이전트 x축 지터 ±범위 (기본: 5.0)
    pub agent_jitter: f32,
    /// 리셋 yaw 범위 (도), 팀별 부호가 곱해짐 (기본: 80 ~ 100)
    pub yaw_min_deg: f32,
    pub yaw_max_deg: f32,
    /// 공 x/z 평면 지터 ±범위 (기본: 2.5)
    pub ball_jitter: f32,
    /// 초기 위치의 팀별 x 오프셋 (Blue -, Purple +) (기본: 5.0)
    pub spawn_offset: f32,
    /// 에이전트 스폰 높이 (기본: 0.5)
    pub spawn_height: f32,
}

impl Default for ResetConfig {
    fn default() -> Self {
        Self {
            agent_jitter: 5.0,
            yaw_min_deg: 80.0,
            yaw_max_deg: 100.0,
            ball_jitter: 2.5,
            spawn_offset: 5.0,
            spawn_height: 0.5,
        }
    }
}

impl ResetConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("reset.agent_jitter", self.agent_jitter),
            ("reset.yaw_min_deg", self.yaw_min_deg),
            ("reset.yaw_max_deg", self.yaw_max_deg),
            ("reset.ball_jitter", self.ball_jitter),
            ("reset.spawn_offset", self.spawn_offset),
            ("reset.spawn_height", self.spawn_height),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, format!("must be finite, got {value}")));
            }
        }

        if self.agent_jitter < 0.0 {
            return Err(ConfigError::invalid("reset.agent_jitter", "must be >= 0"));
        }
        if self.ball_jitter < 0.0 {
            return Err(ConfigError::invalid("reset.ball_jitter", "must be >= 0"));
        }
        if self.yaw_min_deg > self.yaw_max_deg {
            return Err(ConfigError::invalid(
                "reset.yaw_min_deg",
                format!("{} > yaw_max_deg {}", self.yaw_min_deg, self.yaw_max_deg),
            ));
        }
        Ok(())
    }
}
