//! SoccerSettings - scene-wide movement tuning

use serde::{Deserialize, Serialize};

/// 씬 공용 이동 파라미터
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoccerSettings {
    /// 에이전트 달리기 속도 (VelocityChange 배율) (기본: 2.0)
    pub agent_run_speed: f32,
    /// 회전 속도 (도/초) (기본: 100.0)
    pub rotation_speed_deg: f32,
}

impl Default for SoccerSettings {
    fn default() -> Self {
        Self { agent_run_speed: 2.0, rotation_speed_deg: 100.0 }
    }
}
