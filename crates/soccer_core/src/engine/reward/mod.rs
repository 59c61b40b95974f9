//! Reward - SoccerTwos Reward Framework
//!
//! 정책/포지션별 보상 계산.
//!
//! ## 구성 요소
//!
//! - `RewardTracker`: 에이전트별 추적 상태 (이전 공 거리, 이전 공 위치, 골대 위치)
//! - `RewardEngine`: 스텝 보상 / 충돌 보상 계산
//! - `RewardScheme`: Simple (POCA/PPO) / Shaped (SAC + complex)
//! - `EpisodeMetrics`: 에피소드 통계
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use soccer_core::engine::reward::{RewardEngine, RewardScheme, RewardTracker};
//!
//! let engine = RewardEngine::new(RewardScheme::Shaped, Position::Striker);
//! let mut tracker = RewardTracker::new(Team::Blue, 1.0 / 25_000.0);
//! tracker.try_bind(&world, agent_pose.position);
//!
//! // 매 틱: 보상이 항별로 sink에 추가됨
//! let step = engine.step_reward(&mut tracker, &agent_pose, ball_pos, &mut runtime);
//! ```

mod engine;
mod episode;
mod tracker;

pub use engine::{kick_direction, kick_force, CollisionReward, RewardEngine, StepReward};
pub use episode::{EpisodeMetrics, MatchOutcome, MatchSummary, TerminationReason};
pub use tracker::{Binding, GoalPositions, RewardTracker};

use serde::{Deserialize, Serialize};

use crate::engine::physics_constants::{outcome, shaping};
use crate::engine::policy::PolicySelection;
use crate::engine::types::Position;

// ============================================================================
// RewardScheme
// ============================================================================

/// 보상 구조 (에이전트 초기화 시 1회 선택)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewardScheme {
    /// POCA / PPO / complex 플래그 없는 SAC: 존재 보상만
    Simple,
    /// SAC + complex: 거리/방향/진행 shaping 포함
    Shaped,
}

impl RewardScheme {
    pub fn from_selection(selection: &PolicySelection) -> Self {
        if selection.uses_shaped_rewards() {
            RewardScheme::Shaped
        } else {
            RewardScheme::Simple
        }
    }
}

impl From<PolicySelection> for RewardScheme {
    fn from(selection: PolicySelection) -> Self {
        Self::from_selection(&selection)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Simple scheme 존재 보상
///
/// Goalie `+rate`, Striker `-rate`, Generic 0.
/// 보상 엔진이 아직 없는 에이전트의 fallback으로도 쓰인다.
pub fn simple_existential(position: Position, existential: f32) -> f32 {
    match position {
        Position::Goalie => existential,
        Position::Striker => -existential,
        Position::Generic => 0.0,
    }
}

/// 공 터치 보상
///
/// 바이어스가 0이면 고정 0.2, 아니면 0.2 × 바이어스.
pub fn touch_reward(ball_touch_bias: f32) -> f32 {
    if ball_touch_bias == 0.0 {
        shaping::TOUCH_REWARD
    } else {
        shaping::TOUCH_REWARD * ball_touch_bias
    }
}

/// 득점 팀 보상: max(1, 2 - step / max_steps)
///
/// 빨리 넣을수록 크다. `max_steps`가 0이면 하한값.
pub fn winning_reward(step_count: u32, max_steps: u32) -> f32 {
    if max_steps == 0 {
        return outcome::MIN_WINNING_REWARD;
    }
    let elapsed = step_count as f32 / max_steps as f32;
    outcome::MIN_WINNING_REWARD.max(outcome::MAX_WINNING_REWARD - elapsed)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::policy::TrainingPolicy;

    #[test]
    fn test_scheme_selection() {
        let shaped = PolicySelection::new(TrainingPolicy::SAC, true);
        assert_eq!(RewardScheme::from(shaped), RewardScheme::Shaped);

        for selection in [
            PolicySelection::new(TrainingPolicy::SAC, false),
            PolicySelection::new(TrainingPolicy::PPO, true),
            PolicySelection::new(TrainingPolicy::POCA, false),
        ] {
            assert_eq!(RewardScheme::from(selection), RewardScheme::Simple);
        }
    }

    #[test]
    fn test_touch_reward() {
        // 첫 터치 (바이어스 0) → 0.2
        assert!((touch_reward(0.0) - 0.2).abs() < 1e-6);
        // 바이어스 0.5 → 0.1
        assert!((touch_reward(0.5) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_winning_reward() {
        assert!((winning_reward(0, 25_000) - 2.0).abs() < 1e-6);
        assert!((winning_reward(20_000, 25_000) - 1.2).abs() < 1e-5);
        // 후반에는 하한 1.0
        assert!((winning_reward(25_000, 25_000) - 1.0).abs() < 1e-6);
        assert!((winning_reward(10, 0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_simple_existential() {
        let rate = 1.0 / 25_000.0;
        assert_eq!(simple_existential(Position::Goalie, rate), rate);
        assert_eq!(simple_existential(Position::Striker, rate), -rate);
        assert_eq!(simple_existential(Position::Generic, rate), 0.0);
    }
}
