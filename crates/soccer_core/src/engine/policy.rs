//! Training Policy Classifier
//!
//! behavior name(또는 명시적 설정)으로부터 학습 정책을 결정한다.
//!
//! - POCA / PPO: 동일한 simple 보상 구조
//! - SAC: `use_complex_rewards`가 켜져 있으면 shaped 보상 구조
//!
//! 에이전트 초기화 시 한 번만 호출된다. 매 프레임 문자열 검사 없음.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::config::PolicyConfig;
use crate::error::UnknownPolicy;

/// 학습 정책 종류
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingPolicy {
    /// 그룹 보상 + simple 보상 구조
    POCA,
    /// 개인 보상 + POCA와 동일한 구조
    PPO,
    /// 개인 보상 + complex shaped 보상
    SAC,
}

impl TrainingPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            TrainingPolicy::POCA => "POCA",
            TrainingPolicy::PPO => "PPO",
            TrainingPolicy::SAC => "SAC",
        }
    }
}

impl fmt::Display for TrainingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainingPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "poca" => Ok(TrainingPolicy::POCA),
            "ppo" => Ok(TrainingPolicy::PPO),
            "sac" => Ok(TrainingPolicy::SAC),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

/// 분류 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySelection {
    pub policy: TrainingPolicy,
    /// SAC가 아니면 의미 없음
    pub use_complex_rewards: bool,
}

impl PolicySelection {
    pub fn new(policy: TrainingPolicy, use_complex_rewards: bool) -> Self {
        Self { policy, use_complex_rewards }
    }

    /// shaped 보상 구조 사용 여부 (SAC + complex 플래그)
    pub fn uses_shaped_rewards(&self) -> bool {
        self.policy == TrainingPolicy::SAC && self.use_complex_rewards
    }
}

impl From<&PolicyConfig> for PolicySelection {
    fn from(config: &PolicyConfig) -> Self {
        Self::new(config.policy_type, config.use_complex_rewards)
    }
}

/// behavior name 키워드 (우선순위 순)
const KEYWORDS: [(&[&str], TrainingPolicy, bool); 3] = [
    (&["sac", "soft"], TrainingPolicy::SAC, true),
    (&["ppo", "proximal"], TrainingPolicy::PPO, false),
    (&["poca", "coord"], TrainingPolicy::POCA, false),
];

/// 정책 분류
///
/// # Arguments
/// * `behavior_name` - 트레이너 behavior name (없으면 설정값 사용)
/// * `config` - 명시적 설정 (fallback)
/// * `auto_detect` - false면 설정값 그대로 반환
///
/// 결정적이며 항상 값을 반환한다.
pub fn classify(behavior_name: Option<&str>, config: &PolicyConfig, auto_detect: bool) -> PolicySelection {
    let fallback = PolicySelection::from(config);
    if !auto_detect {
        return fallback;
    }
    let Some(name) = behavior_name else {
        return fallback;
    };

    let name = name.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(needles, _, _)| needles.iter().any(|needle| name.contains(needle)))
        .map(|&(_, policy, complex)| PolicySelection::new(policy, complex))
        .unwrap_or(fallback)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(name: &str) -> PolicySelection {
        classify(Some(name), &PolicyConfig::default(), true)
    }

    #[test]
    fn test_sac_detection() {
        assert_eq!(detect("SAC_Striker_v2"), PolicySelection::new(TrainingPolicy::SAC, true));
        assert_eq!(detect("SoftActorCritic"), PolicySelection::new(TrainingPolicy::SAC, true));
    }

    #[test]
    fn test_priority_ppo_over_poca() {
        // "ppo"와 "coord" 모두 포함 → ppo 우선
        assert_eq!(detect("PPO-coord-1"), PolicySelection::new(TrainingPolicy::PPO, false));
        assert_eq!(detect("ProximalTeam"), PolicySelection::new(TrainingPolicy::PPO, false));
    }

    #[test]
    fn test_priority_sac_over_everything() {
        assert_eq!(detect("poca_ppo_sac"), PolicySelection::new(TrainingPolicy::SAC, true));
    }

    #[test]
    fn test_poca_detection() {
        assert_eq!(detect("SoccerTwosPOCA"), PolicySelection::new(TrainingPolicy::POCA, false));
        assert_eq!(detect("MA-Coordinated"), PolicySelection::new(TrainingPolicy::POCA, false));
    }

    #[test]
    fn test_fallback_to_config() {
        assert_eq!(detect("random_name"), PolicySelection::new(TrainingPolicy::SAC, true));

        let cfg = PolicyConfig::new(TrainingPolicy::PPO, true);
        assert_eq!(
            classify(Some("random_name"), &cfg, true),
            PolicySelection::new(TrainingPolicy::PPO, true)
        );
    }

    #[test]
    fn test_auto_detect_disabled_returns_config_verbatim() {
        let cfg = PolicyConfig::new(TrainingPolicy::POCA, true);
        assert_eq!(
            classify(Some("SAC_Striker"), &cfg, false),
            PolicySelection::new(TrainingPolicy::POCA, true)
        );
    }

    #[test]
    fn test_missing_behavior_name() {
        let cfg = PolicyConfig::new(TrainingPolicy::PPO, false);
        assert_eq!(classify(None, &cfg, true), PolicySelection::new(TrainingPolicy::PPO, false));
    }

    #[test]
    fn test_complex_flag_only_matters_for_sac() {
        assert!(PolicySelection::new(TrainingPolicy::SAC, true).uses_shaped_rewards());
        assert!(!PolicySelection::new(TrainingPolicy::SAC, false).uses_shaped_rewards());
        assert!(!PolicySelection::new(TrainingPolicy::PPO, true).uses_shaped_rewards());
        assert!(!PolicySelection::new(TrainingPolicy::POCA, true).uses_shaped_rewards());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Sac".parse::<TrainingPolicy>(), Ok(TrainingPolicy::SAC));
        assert_eq!(" poca ".parse::<TrainingPolicy>(), Ok(TrainingPolicy::POCA));
        let err = "a2c".parse::<TrainingPolicy>().unwrap_err();
        assert_eq!(err, UnknownPolicy("a2c".to_string()));
        assert_eq!(err.to_string(), "unknown training policy: a2c");
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: 키워드 없는 이름은 항상 설정값으로 fallback
            #[test]
            fn prop_no_keyword_falls_back(name in "[b-nq-rt-z_0-9]{0,16}") {
                let cfg = PolicyConfig::new(TrainingPolicy::POCA, true);
                prop_assert_eq!(classify(Some(&name), &cfg, true), PolicySelection::from(&cfg));
            }

            /// Property: 분류는 결정적
            #[test]
            fn prop_deterministic(name in ".{0,24}") {
                let cfg = PolicyConfig::default();
                prop_assert_eq!(classify(Some(&name), &cfg, true), classify(Some(&name), &cfg, true));
            }
        }
    }
}
