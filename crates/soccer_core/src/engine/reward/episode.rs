//! EpisodeMetrics - SoccerTwos episode statistics
//!
//! 에피소드 단위 통계와 매치 결과 집계.
//!
//! ## 메트릭 구성
//!
//! - 기본 통계: 틱 수, 공 터치 수
//! - 종료 사유: 타임아웃 / 득점
//! - 결과: 무승부(0) / Blue 승(1) / Purple 승(2) - 평가 로그 코드와 동일
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! let mut metrics = EpisodeMetrics::new();
//! metrics.record_tick();
//! metrics.finish(TerminationReason::GoalScored, MatchOutcome::BlueWin);
//! summary.record(&metrics);
//! ```

use serde::{Deserialize, Serialize};

use crate::engine::types::Team;

// ============================================================================
// TerminationReason
// ============================================================================

/// 에피소드 종료 사유
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// 최대 스텝 도달 (무승부)
    TimeUp,
    /// 골 득점
    GoalScored,
    /// 진행 중
    #[default]
    InProgress,
}

impl TerminationReason {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TerminationReason::InProgress)
    }
}

// ============================================================================
// MatchOutcome
// ============================================================================

/// 매치 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    Draw,
    BlueWin,
    PurpleWin,
}

impl MatchOutcome {
    pub fn win_for(team: Team) -> Self {
        match team {
            Team::Blue => MatchOutcome::BlueWin,
            Team::Purple => MatchOutcome::PurpleWin,
        }
    }

    /// 평가 로그 정수 코드
    pub fn code(self) -> u8 {
        match self {
            MatchOutcome::Draw => 0,
            MatchOutcome::BlueWin => 1,
            MatchOutcome::PurpleWin => 2,
        }
    }

    pub fn winner(self) -> Option<Team> {
        match self {
            MatchOutcome::Draw => None,
            MatchOutcome::BlueWin => Some(Team::Blue),
            MatchOutcome::PurpleWin => Some(Team::Purple),
        }
    }
}

// ============================================================================
// EpisodeMetrics
// ============================================================================

/// 에피소드 메트릭
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EpisodeMetrics {
    /// 총 틱 수
    pub total_ticks: u64,

    /// 공 터치 횟수 (Blue, Purple)
    pub ball_touches: (u32, u32),

    /// 종료 사유
    pub termination_reason: TerminationReason,

    /// 결과 (종료 전 None)
    pub outcome: Option<MatchOutcome>,

    /// 팀 그룹 보상 (Blue, Purple)
    pub group_rewards: (f32, f32),
}

impl EpisodeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_tick(&mut self) {
        self.total_ticks += 1;
    }

    pub fn record_touch(&mut self, team: Team) {
        match team {
            Team::Blue => self.ball_touches.0 += 1,
            Team::Purple => self.ball_touches.1 += 1,
        }
    }

    pub fn record_group_reward(&mut self, team: Team, reward: f32) {
        match team {
            Team::Blue => self.group_rewards.0 += reward,
            Team::Purple => self.group_rewards.1 += reward,
        }
    }

    pub fn finish(&mut self, reason: TerminationReason, outcome: MatchOutcome) {
        self.termination_reason = reason;
        self.outcome = Some(outcome);
    }

    pub fn is_finished(&self) -> bool {
        self.termination_reason.is_terminal()
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

// ============================================================================
// MatchSummary
// ============================================================================

/// 여러 에피소드 결과 집계
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub episodes: u32,
    pub blue_wins: u32,
    pub purple_wins: u32,
    pub draws: u32,
    pub total_ticks: u64,
    pub total_touches: u64,
}

impl MatchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// 종료된 에피소드만 반영
    pub fn record(&mut self, metrics: &EpisodeMetrics) {
        let Some(outcome) = metrics.outcome else {
            return;
        };

        self.episodes += 1;
        self.total_ticks += metrics.total_ticks;
        self.total_touches += u64::from(metrics.ball_touches.0 + metrics.ball_touches.1);
        match outcome {
            MatchOutcome::Draw => self.draws += 1,
            MatchOutcome::BlueWin => self.blue_wins += 1,
            MatchOutcome::PurpleWin => self.purple_wins += 1,
        }
    }

    pub fn mean_episode_length(&self) -> f32 {
        if self.episodes == 0 {
            0.0
        } else {
            self.total_ticks as f32 / self.episodes as f32
        }
    }

    /// Blue 승률 (무승부 포함 분모)
    pub fn blue_win_rate(&self) -> f32 {
        if self.episodes == 0 {
            0.0
        } else {
            self.blue_wins as f32 / self.episodes as f32
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
