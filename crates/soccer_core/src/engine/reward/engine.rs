//! RewardEngine - step & collision rewards
//!
//! 현재 스냅샷 + 추적 상태로 보상을 계산한다.
//! 발생한 항은 각각 `RewardSink`에 바로 추가되고, 항별 내역을 반환한다.

use serde::{Deserialize, Serialize};

use super::tracker::RewardTracker;
use super::{simple_existential, touch_reward, RewardScheme};
use crate::engine::physics_constants::{kick, shaping};
use crate::engine::runtime::RewardSink;
use crate::engine::types::{distance, normalize_or_zero, Pose, Position, Vec3};

// ============================================================================
// Breakdown types
// ============================================================================

/// 스텝 보상 항별 내역
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StepReward {
    pub existential: f32,
    /// 공 접근 (거리 감소량)
    pub approach: f32,
    /// 공 바라보기
    pub facing: f32,
    /// 공 근접 보너스
    pub proximity: f32,
    /// 공 전진 (상대 골대 방향)
    pub push: f32,
    /// 공 컨트롤 중 전진 추가분 (push × 1.5)
    pub control: f32,
    /// 공 후퇴 페널티 (음수)
    pub regression: f32,
    /// 슈팅 존 보너스
    pub shooting_zone: f32,
}

impl StepReward {
    pub fn total(&self) -> f32 {
        self.existential
            + self.approach
            + self.facing
            + self.proximity
            + self.push
            + self.control
            + self.regression
            + self.shooting_zone
    }
}

/// 충돌 보상 항별 내역
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CollisionReward {
    pub touch: f32,
    /// 슈팅 거리 보상 (shaped 전용)
    pub shoot: f32,
    /// 킥 방향 정렬 보너스 (shaped 전용)
    pub alignment: f32,
}

impl CollisionReward {
    pub fn total(&self) -> f32 {
        self.touch + self.shoot + self.alignment
    }
}

// ============================================================================
// Kick helpers
// ============================================================================

/// 킥 방향: 에이전트 위치 → 접촉점 (정규화)
///
/// 에이전트가 공을 자기 몸 바깥쪽으로 미는 방향.
pub fn kick_direction(agent_position: Vec3, contact_point: Vec3) -> Vec3 {
    normalize_or_zero(contact_point - agent_position)
}

/// 킥 힘 크기
///
/// Goalie는 항상 최대 파워, 나머지는 이번 틱 전진 입력 여부(0 또는 1)에 비례.
pub fn kick_force(position: Position, kick_power: f32) -> f32 {
    match position {
        Position::Goalie => kick::POWER,
        _ => kick::POWER * kick_power,
    }
}

// ============================================================================
// RewardEngine
// ============================================================================

/// 보상 엔진
///
/// 정책 분류 결과(scheme)와 포지션은 생성 시 고정.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardEngine {
    scheme: RewardScheme,
    position: Position,
}

impl RewardEngine {
    pub fn new(scheme: RewardScheme, position: Position) -> Self {
        Self { scheme, position }
    }

    pub fn scheme(&self) -> RewardScheme {
        self.scheme
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// 스텝 보상
    ///
    /// # Arguments
    /// * `tracker` - 에이전트 추적 상태 (갱신됨)
    /// * `agent` - 현재 에이전트 포즈
    /// * `ball` - 현재 공 위치 (`tracker`가 Unbound면 무시)
    /// * `sink` - 항별 보상이 추가될 곳
    pub fn step_reward(
        &self,
        tracker: &mut RewardTracker,
        agent: &Pose,
        ball: Option<Vec3>,
        sink: &mut dyn RewardSink,
    ) -> StepReward {
        match self.scheme {
            RewardScheme::Simple => self.simple_step(tracker, sink),
            RewardScheme::Shaped => {
                let ball = ball.filter(|_| tracker.is_bound());
                self.shaped_step(tracker, agent, ball, sink)
            }
        }
    }

    fn simple_step(&self, tracker: &RewardTracker, sink: &mut dyn RewardSink) -> StepReward {
        let mut reward = StepReward::default();
        if self.position != Position::Generic {
            reward.existential = simple_existential(self.position, tracker.existential_rate());
            sink.add_reward(reward.existential);
        }
        reward
    }

    fn shaped_step(
        &self,
        tracker: &mut RewardTracker,
        agent: &Pose,
        ball: Option<Vec3>,
        sink: &mut dyn RewardSink,
    ) -> StepReward {
        let mut reward = StepReward::default();
        let existential = tracker.existential_rate();

        // 1. 존재 보상
        match self.position {
            Position::Goalie => emit(sink, &mut reward.existential, existential),
            Position::Striker => emit(
                sink,
                &mut reward.existential,
                -existential * shaping::STRIKER_EXISTENTIAL_SCALE,
            ),
            Position::Generic => {}
        }

        let Some(ball) = ball else {
            return reward;
        };

        // 2~4. 공 접근 / 바라보기 / 근접 (Goalie 제외)
        if self.position != Position::Goalie {
            let current_distance = distance(&agent.position, &ball);

            emit(
                sink,
                &mut reward.approach,
                (tracker.previous_ball_distance() - current_distance) * shaping::APPROACH_COEF,
            );

            let to_ball = normalize_or_zero(ball - agent.position);
            emit(sink, &mut reward.facing, agent.forward().dot(&to_ball).max(0.0) * shaping::FACING_COEF);

            tracker.set_previous_ball_distance(current_distance);

            if current_distance < shaping::PROXIMITY_RADIUS {
                emit(
                    sink,
                    &mut reward.proximity,
                    shaping::PROXIMITY_COEF * (shaping::PROXIMITY_FALLOFF - current_distance)
                        / shaping::PROXIMITY_FALLOFF,
                );
            }
        }

        // 5~7. 공 진행 / 후퇴 / 슈팅 존 (양 골대 필요, 포지션 무관)
        let Some(goals) = tracker.goals() else {
            return reward;
        };
        let previous_ball = tracker.previous_ball_position();

        let current_to_opposing = distance(&ball, &goals.opposing);
        let progress = distance(&previous_ball, &goals.opposing) - current_to_opposing;
        if progress > 0.0 {
            let push = progress * shaping::PUSH_COEF;
            emit(sink, &mut reward.push, push);

            // 컨트롤 보너스는 기본 push 항에 누적된다 (합계 2.5배)
            if distance(&agent.position, &ball) < shaping::CONTROL_RADIUS {
                emit(sink, &mut reward.control, push * shaping::CONTROL_PUSH_SCALE);
            }
        }

        let regress = distance(&previous_ball, &goals.own) - distance(&ball, &goals.own);
        if regress > 0.0 {
            emit(sink, &mut reward.regression, -regress * shaping::REGRESSION_COEF);
        }

        tracker.set_previous_ball_position(ball);

        if current_to_opposing < shaping::SHOOT_DISTANCE_THRESHOLD {
            emit(
                sink,
                &mut reward.shooting_zone,
                (shaping::SHOOT_DISTANCE_THRESHOLD - current_to_opposing)
                    / shaping::SHOOT_DISTANCE_THRESHOLD
                    * shaping::SHOOT_ZONE_COEF,
            );
        }

        reward
    }

    /// 공 충돌 보상 (공과의 접촉일 때만 호출)
    ///
    /// 터치 보상 후 추적값을 현재 포즈로 갱신하고, shaped scheme이면 슛 보상을 더한다.
    /// 킥 힘 적용은 호출자(에이전트 컨트롤러) 책임.
    pub fn collision_reward(
        &self,
        tracker: &mut RewardTracker,
        agent: &Pose,
        ball: Vec3,
        contact_point: Vec3,
        sink: &mut dyn RewardSink,
    ) -> CollisionReward {
        let mut reward = CollisionReward::default();

        emit(sink, &mut reward.touch, touch_reward(tracker.ball_touch_bias()));
        tracker.update_tracking(agent.position, ball);

        if self.scheme != RewardScheme::Shaped {
            return reward;
        }
        let Some(opposing_goal) = tracker.opposing_goal() else {
            return reward;
        };

        let to_goal = distance(&ball, &opposing_goal);
        if to_goal < shaping::SHOOT_DISTANCE_THRESHOLD {
            let shoot = shaping::SHOOT_REWARD_COEF * (shaping::SHOOT_DISTANCE_THRESHOLD - to_goal)
                / shaping::SHOOT_DISTANCE_THRESHOLD;
            emit(sink, &mut reward.shoot, shoot);

            let ball_to_goal = normalize_or_zero(opposing_goal - ball);
            let alignment = ball_to_goal.dot(&kick_direction(agent.position, contact_point));
            if alignment > shaping::ALIGNMENT_THRESHOLD {
                emit(sink, &mut reward.alignment, shoot * shaping::ALIGNMENT_BONUS_SCALE);
            }
        }

        reward
    }
}

/// 항 기록 + sink 추가
fn emit(sink: &mut dyn RewardSink, slot: &mut f32, value: f32) {
    *slot += value;
    sink.add_reward(value);
}

// ============================================================================
// Tests
// ============================================================================
