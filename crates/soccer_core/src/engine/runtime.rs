//! RL runtime collaborator interfaces
//!
//! 보상 누적기는 RL 런타임 소유. 코어는 `add_reward`로만 쓰고 읽거나 리셋하지 않는다.
//!
//! - `RewardSink`: 스칼라 보상 추가
//! - `AgentRuntime`: 개인 에이전트 (보상 + 에피소드 종료)
//! - `GroupRuntime`: 팀 그룹 (그룹 보상 + 그룹 에피소드 종료/중단)
//! - `EnvironmentParameters`: 키 기반 리셋 파라미터 조회
//!
//! `RewardLedger` / `GroupLedger`는 기록만 하는 기본 구현 (헤드리스 실행, 테스트용).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::engine::types::AgentId;

// ============================================================================
// Traits
// ============================================================================

/// 보상 추가 전용 싱크
pub trait RewardSink {
    fn add_reward(&mut self, reward: f32);
}

/// 개인 에이전트 런타임
pub trait AgentRuntime: RewardSink {
    /// 에피소드 종료 (누적 보상 정산은 런타임 책임)
    fn end_episode(&mut self);
}

/// 팀 그룹 런타임 (multi-agent group)
pub trait GroupRuntime {
    fn register_agent(&mut self, agent: AgentId);
    fn add_group_reward(&mut self, reward: f32);
    /// 정상 종료 (득점)
    fn end_group_episode(&mut self);
    /// 중단 (타임아웃)
    fn group_episode_interrupted(&mut self);
}

/// 리셋 파라미터 조회 (커리큘럼 값 등)
pub trait EnvironmentParameters {
    fn get_with_default(&self, key: &str, default: f32) -> f32;
}

impl EnvironmentParameters for HashMap<String, f32> {
    fn get_with_default(&self, key: &str, default: f32) -> f32 {
        self.get(key).copied().unwrap_or(default)
    }
}

/// 단순 합산 (테스트/로컬 계산용)
impl RewardSink for f32 {
    fn add_reward(&mut self, reward: f32) {
        *self += reward;
    }
}

/// 항 단위 기록
impl RewardSink for Vec<f32> {
    fn add_reward(&mut self, reward: f32) {
        self.push(reward);
    }
}

// ============================================================================
// RewardLedger
// ============================================================================

/// 개인 보상 장부
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RewardLedger {
    /// 현재 에피소드 누적 보상
    cumulative_reward: f32,
    /// 종료된 에피소드별 누적 보상
    episode_returns: Vec<f32>,
}

impl RewardLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cumulative_reward(&self) -> f32 {
        self.cumulative_reward
    }

    pub fn episode_returns(&self) -> &[f32] {
        &self.episode_returns
    }

    pub fn completed_episodes(&self) -> usize {
        self.episode_returns.len()
    }
}

impl RewardSink for RewardLedger {
    fn add_reward(&mut self, reward: f32) {
        self.cumulative_reward += reward;
    }
}

impl AgentRuntime for RewardLedger {
    fn end_episode(&mut self) {
        self.episode_returns.push(self.cumulative_reward);
        self.cumulative_reward = 0.0;
    }
}

// ============================================================================
// GroupLedger
// ============================================================================

/// 그룹 에피소드 종료 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupEpisodeEnd {
    Ended,
    Interrupted,
}

/// 팀 그룹 보상 장부
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupLedger {
    members: Vec<AgentId>,
    group_reward: f32,
    /// (종료 방식, 그룹 누적 보상)
    history: Vec<(GroupEpisodeEnd, f32)>,
}

impl GroupLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn members(&self) -> &[AgentId] {
        &self.members
    }

    pub fn group_reward(&self) -> f32 {
        self.group_reward
    }

    pub fn history(&self) -> &[(GroupEpisodeEnd, f32)] {
        &self.history
    }

    fn close(&mut self, end: GroupEpisodeEnd) {
        self.history.push((end, self.group_reward));
        self.group_reward = 0.0;
    }
}

impl GroupRuntime for GroupLedger {
    fn register_agent(&mut self, agent: AgentId) {
        if !self.members.contains(&agent) {
            self.members.push(agent);
        }
    }

    fn add_group_reward(&mut self, reward: f32) {
        self.group_reward += reward;
    }

    fn end_group_episode(&mut self) {
        self.close(GroupEpisodeEnd::Ended);
    }

    fn group_episode_interrupted(&mut self) {
        self.close(GroupEpisodeEnd::Interrupted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_episode_close() {
        let mut ledger = RewardLedger::new();
        ledger.add_reward(0.5);
        ledger.add_reward(-0.2);
        assert!((ledger.cumulative_reward() - 0.3).abs() < 1e-6);

        ledger.end_episode();
        assert_eq!(ledger.cumulative_reward(), 0.0);
        assert_eq!(ledger.completed_episodes(), 1);
        assert!((ledger.episode_returns()[0] - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_group_register_is_idempotent() {
        let mut group = GroupLedger::new();
        group.register_agent(AgentId(1));
        group.register_agent(AgentId(1));
        group.register_agent(AgentId(2));
        assert_eq!(group.members(), &[AgentId(1), AgentId(2)]);
    }

    #[test]
    fn test_group_end_vs_interrupt() {
        let mut group = GroupLedger::new();
        group.add_group_reward(2.0);
        group.end_group_episode();
        group.group_episode_interrupted();

        assert_eq!(
            group.history(),
            &[(GroupEpisodeEnd::Ended, 2.0), (GroupEpisodeEnd::Interrupted, 0.0)]
        );
    }

    #[test]
    fn test_parameters_default() {
        let mut params = HashMap::new();
        params.insert("ball_touch".to_string(), 0.5);
        assert_eq!(params.get_with_default("ball_touch", 0.0), 0.5);
        assert_eq!(params.get_with_default("missing", 1.5), 1.5);
    }
}
