//! RewardTracker - per-agent shaping state
//!
//! 에이전트 전용 추적 상태. 다른 에이전트와 공유하지 않는다.
//!
//! ## 바인딩 상태 머신
//!
//! ```text
//! Unbound ──try_bind (공 발견)──▶ Bound
//!    ▲                              │
//!    └──── 공 참조 유실 ─────────────┘
//! ```
//!
//! `Bound`로 진입할 때마다 이전 공 거리/위치를 현재 스냅샷으로 재계산한다.
//! 골대 위치는 찾을 때까지 매 틱 재시도 (lazy binding), 골대가 해결되는 틱에도 재시드.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::types::{distance, BodyHandle, SceneTag, Team, Vec3};
use crate::engine::world::PhysicsWorld;

/// 공 참조 바인딩 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Binding {
    #[default]
    Unbound,
    Bound { ball: BodyHandle },
}

/// 자기/상대 골대 위치
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalPositions {
    pub own: Vec3,
    pub opposing: Vec3,
}

/// 에이전트별 보상 추적 상태
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardTracker {
    team: Team,
    binding: Binding,
    previous_ball_distance: f32,
    previous_ball_position: Vec3,
    opposing_goal_position: Option<Vec3>,
    own_goal_position: Option<Vec3>,
    ball_touch_bias: f32,
    existential_rate: f32,
}

/// 원점 좌표는 "아직 찾지 못함"으로 취급
fn resolved(position: Vec3) -> Option<Vec3> {
    (position != Vec3::zeros()).then_some(position)
}

impl RewardTracker {
    pub fn new(team: Team, existential_rate: f32) -> Self {
        Self {
            team,
            binding: Binding::Unbound,
            previous_ball_distance: 0.0,
            previous_ball_position: Vec3::zeros(),
            opposing_goal_position: None,
            own_goal_position: None,
            ball_touch_bias: 0.0,
            existential_rate,
        }
    }

    /// 명시적 초기화
    ///
    /// 공이 주어지면 `Bound`로 전환하고 추적값을 재계산, 없으면 `Unbound`.
    /// 원점 골대 좌표는 미해결로 취급된다.
    pub fn initialize(
        &mut self,
        existential_rate: f32,
        ball: Option<(BodyHandle, Vec3)>,
        opposing_goal: Vec3,
        own_goal: Vec3,
        agent_position: Vec3,
    ) {
        self.existential_rate = existential_rate;
        self.opposing_goal_position = resolved(opposing_goal);
        self.own_goal_position = resolved(own_goal);

        match ball {
            Some((handle, ball_position)) => {
                self.binding = Binding::Bound { ball: handle };
                self.seed(agent_position, ball_position);
            }
            None => self.binding = Binding::Unbound,
        }
    }

    pub fn set_ball_touch(&mut self, ball_touch_bias: f32) {
        self.ball_touch_bias = ball_touch_bias;
    }

    /// 씬에서 공/골대 참조 해결 (멱등)
    ///
    /// 이미 같은 공에 바인딩되어 있고 골대도 해결되어 있으면 아무것도 하지 않는다.
    /// 공을 찾지 못하면 `Unbound`로 떨어진다.
    ///
    /// # Returns
    /// 호출 후 `Bound` 여부
    pub fn try_bind<W: PhysicsWorld + ?Sized>(&mut self, world: &W, agent_position: Vec3) -> bool {
        // 골대가 이번 호출에서 해결되면 이전 공 위치가 낡았으므로 재시드
        let mut goals_resolved_now = false;
        if self.goals().is_none() {
            self.resolve_goals(world);
            goals_resolved_now = self.goals().is_some();
        }

        let Some((ball, ball_position)) = world.find_position(SceneTag::Ball) else {
            if self.is_bound() {
                debug!(team = ?self.team, "ball reference lost, tracker unbound");
            }
            self.binding = Binding::Unbound;
            return false;
        };

        if self.binding != (Binding::Bound { ball }) {
            self.binding = Binding::Bound { ball };
            self.seed(agent_position, ball_position);
            debug!(
                team = ?self.team,
                distance = self.previous_ball_distance,
                goals_resolved = self.goals().is_some(),
                "tracker bound"
            );
        } else if goals_resolved_now {
            self.seed(agent_position, ball_position);
            debug!(team = ?self.team, "goals resolved, tracker reseeded");
        }
        true
    }

    /// 강제 재바인딩 (에피소드 시작 시)
    pub fn rebind<W: PhysicsWorld + ?Sized>(&mut self, world: &W, agent_position: Vec3) -> bool {
        self.binding = Binding::Unbound;
        self.resolve_goals(world);
        self.try_bind(world, agent_position)
    }

    /// 현재 상태로 이전 공 거리/위치 갱신 (골대 참조는 건드리지 않음)
    ///
    /// `Unbound`면 무시.
    pub fn update_tracking(&mut self, agent_position: Vec3, ball_position: Vec3) {
        if self.is_bound() {
            self.seed(agent_position, ball_position);
        }
    }

    fn seed(&mut self, agent_position: Vec3, ball_position: Vec3) {
        self.previous_ball_distance = distance(&agent_position, &ball_position);
        self.previous_ball_position = ball_position;
    }

    fn resolve_goals<W: PhysicsWorld + ?Sized>(&mut self, world: &W) {
        if let Some((_, own)) = world.find_position(self.team.own_goal_tag()) {
            self.own_goal_position = resolved(own);
        }
        if let Some((_, opposing)) = world.find_position(self.team.opposing_goal_tag()) {
            self.opposing_goal_position = resolved(opposing);
        }
    }

    pub(super) fn set_previous_ball_distance(&mut self, value: f32) {
        self.previous_ball_distance = value;
    }

    pub(super) fn set_previous_ball_position(&mut self, value: Vec3) {
        self.previous_ball_position = value;
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn binding(&self) -> Binding {
        self.binding
    }

    pub fn is_bound(&self) -> bool {
        matches!(self.binding, Binding::Bound { .. })
    }

    pub fn ball(&self) -> Option<BodyHandle> {
        match self.binding {
            Binding::Bound { ball } => Some(ball),
            Binding::Unbound => None,
        }
    }

    pub fn previous_ball_distance(&self) -> f32 {
        self.previous_ball_distance
    }

    pub fn previous_ball_position(&self) -> Vec3 {
        self.previous_ball_position
    }

    pub fn opposing_goal(&self) -> Option<Vec3> {
        self.opposing_goal_position
    }

    pub fn own_goal(&self) -> Option<Vec3> {
        self.own_goal_position
    }

    /// 두 골대가 모두 해결되었을 때만 Some
    pub fn goals(&self) -> Option<GoalPositions> {
        Some(GoalPositions { own: self.own_goal_position?, opposing: self.opposing_goal_position? })
    }

    pub fn ball_touch_bias(&self) -> f32 {
        self.ball_touch_bias
    }

    pub fn existential_rate(&self) -> f32 {
        self.existential_rate
    }
}

// ============================================================================
// Tests
// ============================================================================
