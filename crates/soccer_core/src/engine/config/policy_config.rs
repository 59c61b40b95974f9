//! Training policy configuration

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::engine::policy::TrainingPolicy;

/// 학습 정책 설정
///
/// behavior name 자동 감지가 꺼져 있거나 감지에 실패하면 이 값이 그대로 쓰인다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// 학습 정책 (기본: SAC)
    #[serde(deserialize_with = "lenient_policy")]
    pub policy_type: TrainingPolicy,
    /// complex shaped reward 사용 여부 (SAC에서만 의미 있음) (기본: true)
    pub use_complex_rewards: bool,
    /// 트레이너 behavior name (YAML 설정과 일치해야 함) (기본: "SoccerTwos")
    pub behavior_name: String,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            policy_type: TrainingPolicy::SAC,
            use_complex_rewards: true,
            behavior_name: "SoccerTwos".to_string(),
        }
    }
}

impl PolicyConfig {
    pub fn new(policy_type: TrainingPolicy, use_complex_rewards: bool) -> Self {
        Self { policy_type, use_complex_rewards, ..Self::default() }
    }
}

/// 알 수 없는 정책 문자열은 기본값(SAC)으로 대체
fn lenient_policy<'de, D>(deserializer: D) -> Result<TrainingPolicy, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.parse().unwrap_or_else(|_| {
        let fallback = PolicyConfig::default().policy_type;
        warn!(value = %raw, ?fallback, "unknown policy_type in config, using default");
        fallback
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sac_complex() {
        let cfg = PolicyConfig::default();
        assert_eq!(cfg.policy_type, TrainingPolicy::SAC);
        assert!(cfg.use_complex_rewards);
        assert_eq!(cfg.behavior_name, "SoccerTwos");
    }

    #[test]
    fn test_case_insensitive_policy_parse() {
        let cfg: PolicyConfig =
            serde_json::from_str(r#"{"policy_type": "ppo", "use_complex_rewards": false}"#).unwrap();
        assert_eq!(cfg.policy_type, TrainingPolicy::PPO);
        assert!(!cfg.use_complex_rewards);
    }

    #[test]
    fn test_unknown_policy_falls_back() {
        let cfg: PolicyConfig = serde_json::from_str(r#"{"policy_type": "dqn"}"#).unwrap();
        assert_eq!(cfg.policy_type, TrainingPolicy::SAC);
    }
}
