//! Arena - headless planar physics world
//!
//! 외부 물리 엔진 없이 코어를 돌리기 위한 최소 구현 (CLI 시뮬레이션, 테스트).
//! XZ 평면 위 원형 바디만 다룬다.
//!
//! ## 적분 순서 (`integrate`)
//! 1. 누적된 `ForceMode::Force` → 속도
//! 2. 위치 적분 + 감쇠
//! 3. 골 입구 통과 판정 → `ArenaEvent::Goal`
//! 4. 벽 반사 / 클램프 (골 입구 앞에서는 x 클램프 없음)
//! 5. 에이전트-공 접촉 → 새 접촉이면 `ArenaEvent::BallContact`

use std::collections::HashSet;

use nalgebra::{Unit, UnitQuaternion};
use serde::{Deserialize, Serialize};

use crate::engine::physics_constants::{body, field};
use crate::engine::types::{normalize_or_zero, BodyHandle, Pose, SceneTag, Team, Vec3};
use crate::engine::world::{Contact, ForceMode, PhysicsWorld};

/// 적분 중 발생한 이벤트
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ArenaEvent {
    /// 에이전트가 공에 새로 닿음 (충돌 진입)
    BallContact { agent: BodyHandle, contact: Contact },
    /// 공이 골 입구를 통과
    Goal { scored_by: Team },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Agent,
    Ball,
    Goal(SceneTag),
}

#[derive(Debug, Clone)]
struct Body {
    kind: BodyKind,
    pose: Pose,
    velocity: Vec3,
    pending_force: Vec3,
    radius: f32,
    mass: f32,
    drag: f32,
}

impl Body {
    fn new(kind: BodyKind, pose: Pose) -> Self {
        let (radius, mass, drag) = match kind {
            BodyKind::Agent => (body::AGENT_RADIUS_M, body::AGENT_MASS_KG, body::AGENT_DRAG),
            BodyKind::Ball => (body::BALL_RADIUS_M, body::BALL_MASS_KG, body::BALL_DRAG),
            BodyKind::Goal(_) => (0.0, f32::INFINITY, 0.0),
        };
        Self { kind, pose, velocity: Vec3::zeros(), pending_force: Vec3::zeros(), radius, mass, drag }
    }

    fn tag(&self) -> Option<SceneTag> {
        match self.kind {
            BodyKind::Agent => None,
            BodyKind::Ball => Some(SceneTag::Ball),
            BodyKind::Goal(tag) => Some(tag),
        }
    }

    fn is_dynamic(&self) -> bool {
        !matches!(self.kind, BodyKind::Goal(_))
    }
}

/// 헤드리스 경기장
#[derive(Debug, Clone, Default)]
pub struct Arena {
    bodies: Vec<Option<Body>>,
    /// 현재 접촉 중인 (에이전트, 공) 쌍
    touching: HashSet<(BodyHandle, BodyHandle)>,
}

impl Arena {
    /// SoccerTwos 기본 배치: 양 골대 + 중앙 공
    pub fn soccer_twos() -> Self {
        let mut arena = Self::default();
        arena.spawn_goal(SceneTag::BlueGoal, Vec3::new(-field::HALF_LENGTH_M, field::BODY_HEIGHT_M, 0.0));
        arena.spawn_goal(SceneTag::PurpleGoal, Vec3::new(field::HALF_LENGTH_M, field::BODY_HEIGHT_M, 0.0));
        arena.spawn_ball(Vec3::new(0.0, field::BODY_HEIGHT_M, 0.0));
        arena
    }

    pub fn spawn_agent(&mut self, pose: Pose) -> BodyHandle {
        self.spawn(Body::new(BodyKind::Agent, pose))
    }

    pub fn spawn_ball(&mut self, position: Vec3) -> BodyHandle {
        self.spawn(Body::new(BodyKind::Ball, Pose::at(position)))
    }

    pub fn spawn_goal(&mut self, tag: SceneTag, position: Vec3) -> BodyHandle {
        self.spawn(Body::new(BodyKind::Goal(tag), Pose::at(position)))
    }

    /// 바디 제거 (핸들은 재사용하지 않음)
    pub fn despawn(&mut self, handle: BodyHandle) {
        if let Some(slot) = self.bodies.get_mut(handle.0 as usize) {
            *slot = None;
        }
        self.touching.retain(|&(agent, ball)| agent != handle && ball != handle);
    }

    pub fn velocity(&self, handle: BodyHandle) -> Option<Vec3> {
        self.body(handle).map(|b| b.velocity)
    }

    /// 다음 `integrate`에서 적용될 누적 힘
    pub fn pending_force(&self, handle: BodyHandle) -> Option<Vec3> {
        self.body(handle).map(|b| b.pending_force)
    }

    /// 한 스텝 적분
    pub fn integrate(&mut self, dt: f32) -> Vec<ArenaEvent> {
        let mut events = Vec::new();
        if dt <= 0.0 {
            return events;
        }

        for b in self.bodies.iter_mut().flatten().filter(|b| b.is_dynamic()) {
            b.velocity += b.pending_force / b.mass * dt;
            b.pending_force = Vec3::zeros();
            b.velocity.y = 0.0;
            b.pose.position += b.velocity * dt;
            b.velocity *= (1.0 - b.drag * dt).max(0.0);
        }

        let goals: Vec<(SceneTag, Vec3)> = self
            .bodies
            .iter()
            .flatten()
            .filter_map(|b| match b.kind {
                BodyKind::Goal(tag) => Some((tag, b.pose.position)),
                _ => None,
            })
            .collect();

        for b in self.bodies.iter_mut().flatten() {
            match b.kind {
                BodyKind::Ball => {
                    if let Some(scored_by) = goal_crossed(&goals, b.pose.position) {
                        events.push(ArenaEvent::Goal { scored_by });
                    } else {
                        // 골 입구 앞에서는 골라인까지 진행 가능
                        let facing_mouth = goals.iter().any(|&(_, goal)| in_goal_mouth(goal, b.pose.position));
                        bounce_off_walls(b, !facing_mouth);
                    }
                }
                BodyKind::Agent => bounce_off_walls(b, true),
                BodyKind::Goal(_) => {}
            }
        }

        self.resolve_contacts(&mut events);
        events
    }

    fn resolve_contacts(&mut self, events: &mut Vec<ArenaEvent>) {
        let handles_of = |kind: BodyKind, bodies: &[Option<Body>]| -> Vec<BodyHandle> {
            bodies
                .iter()
                .enumerate()
                .filter(|(_, b)| b.as_ref().is_some_and(|b| b.kind == kind))
                .map(|(i, _)| BodyHandle(i as u32))
                .collect()
        };
        let agents = handles_of(BodyKind::Agent, &self.bodies);
        let balls = handles_of(BodyKind::Ball, &self.bodies);

        for &agent in &agents {
            for &ball in &balls {
                let (Some(a), Some(b)) = (self.body(agent), self.body(ball)) else {
                    continue;
                };
                let offset = b.pose.position - a.pose.position;
                let reach = a.radius + b.radius;

                if offset.norm() >= reach {
                    self.touching.remove(&(agent, ball));
                    continue;
                }

                let normal = normalize_or_zero(offset);
                let agent_position = a.pose.position;
                let closing = (a.velocity - b.velocity).dot(&normal).max(0.0);
                let point = agent_position + normal * a.radius;

                if let Some(b) = self.body_mut(ball) {
                    b.pose.position = agent_position + normal * reach;
                    b.velocity += normal * closing;
                }

                if self.touching.insert((agent, ball)) {
                    events.push(ArenaEvent::BallContact { agent, contact: Contact { other: ball, point } });
                }
            }
        }
    }

    fn spawn(&mut self, body: Body) -> BodyHandle {
        let handle = BodyHandle(self.bodies.len() as u32);
        self.bodies.push(Some(body));
        handle
    }

    fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle.0 as usize).and_then(Option::as_ref)
    }

    fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle.0 as usize).and_then(Option::as_mut)
    }
}

/// 공이 골대 쪽 반코트에 있고 입구 폭 안쪽인지
fn in_goal_mouth(goal: Vec3, ball: Vec3) -> bool {
    // 원점 골대는 골라인이 정의되지 않음
    if goal.x.abs() < f32::EPSILON {
        return false;
    }
    ball.x * goal.x.signum() > 0.0 && (ball.z - goal.z).abs() < field::GOAL_HALF_WIDTH_M
}

/// 골 입구 통과 시 득점 팀
fn goal_crossed(goals: &[(SceneTag, Vec3)], ball: Vec3) -> Option<Team> {
    goals.iter().find_map(|&(tag, goal)| {
        let past_line = ball.x * goal.x.signum() >= goal.x.abs();
        if !(in_goal_mouth(goal, ball) && past_line) {
            return None;
        }
        match tag {
            SceneTag::BlueGoal => Some(Team::Purple),
            SceneTag::PurpleGoal => Some(Team::Blue),
            SceneTag::Ball => None,
        }
    })
}

fn bounce_off_walls(b: &mut Body, clamp_x: bool) {
    let limit_x = field::HALF_LENGTH_M - b.radius;
    let limit_z = field::HALF_WIDTH_M - b.radius;
    let position = &mut b.pose.position;

    if clamp_x && position.x.abs() > limit_x {
        position.x = position.x.clamp(-limit_x, limit_x);
        b.velocity.x = -b.velocity.x * field::WALL_COR;
    }
    if position.z.abs() > limit_z {
        position.z = position.z.clamp(-limit_z, limit_z);
        b.velocity.z = -b.velocity.z * field::WALL_COR;
    }
}

impl PhysicsWorld for Arena {
    fn pose(&self, handle: BodyHandle) -> Option<Pose> {
        self.body(handle).map(|b| b.pose)
    }

    fn find_with_tag(&self, tag: SceneTag) -> Option<BodyHandle> {
        self.bodies
            .iter()
            .position(|b| b.as_ref().is_some_and(|b| b.tag() == Some(tag)))
            .map(|i| BodyHandle(i as u32))
    }

    fn tag_of(&self, handle: BodyHandle) -> Option<SceneTag> {
        self.body(handle).and_then(Body::tag)
    }

    fn add_force(&mut self, handle: BodyHandle, force: Vec3, mode: ForceMode) {
        let Some(b) = self.body_mut(handle).filter(|b| b.is_dynamic()) else {
            return;
        };
        match mode {
            ForceMode::Force => b.pending_force += force,
            ForceMode::Impulse => b.velocity += force / b.mass,
            ForceMode::VelocityChange => b.velocity += force,
        }
    }

    fn rotate(&mut self, handle: BodyHandle, axis: Vec3, degrees: f32) {
        let Some(b) = self.body_mut(handle) else {
            return;
        };
        if let Some(axis) = Unit::try_new(axis, f32::EPSILON) {
            b.pose.rotation = UnitQuaternion::from_axis_angle(&axis, degrees.to_radians()) * b.pose.rotation;
        }
    }

    fn set_pose(&mut self, handle: BodyHandle, pose: Pose) {
        if let Some(b) = self.body_mut(handle) {
            b.pose = pose;
        }
    }

    fn zero_velocity(&mut self, handle: BodyHandle) {
        if let Some(b) = self.body_mut(handle) {
            b.velocity = Vec3::zeros();
            b.pending_force = Vec3::zeros();
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 0.02;

    #[test]
    fn test_soccer_twos_layout() {
        let arena = Arena::soccer_twos();
        let (_, blue) = arena.find_position(SceneTag::BlueGoal).unwrap();
        let (_, purple) = arena.find_position(SceneTag::PurpleGoal).unwrap();
        let (ball, at) = arena.find_position(SceneTag::Ball).unwrap();

        assert_eq!(blue.x, -16.0);
        assert_eq!(purple.x, 16.0);
        assert_eq!(at, Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(arena.tag_of(ball), Some(SceneTag::Ball));
    }

    #[test]
    fn test_force_applied_on_integrate() {
        let mut arena = Arena::soccer_twos();
        let ball = arena.find_with_tag(SceneTag::Ball).unwrap();

        arena.add_force(ball, Vec3::new(100.0, 0.0, 0.0), ForceMode::Force);
        assert_eq!(arena.velocity(ball), Some(Vec3::zeros()));

        arena.integrate(DT);
        assert_eq!(arena.pending_force(ball), Some(Vec3::zeros()));
        assert!(arena.position(ball).unwrap().x > 0.0);
        assert!(arena.velocity(ball).unwrap().x > 0.0);
    }

    #[test]
    fn test_goals_are_static() {
        let mut arena = Arena::soccer_twos();
        let goal = arena.find_with_tag(SceneTag::PurpleGoal).unwrap();
        arena.add_force(goal, Vec3::new(0.0, 0.0, 50.0), ForceMode::VelocityChange);
        arena.integrate(DT);
        assert_eq!(arena.position(goal), Some(Vec3::new(16.0, 0.5, 0.0)));
    }

    #[test]
    fn test_ball_into_purple_goal_scores_for_blue() {
        let mut arena = Arena::soccer_twos();
        let ball = arena.find_with_tag(SceneTag::Ball).unwrap();
        arena.set_pose(ball, Pose::at(Vec3::new(15.9, 0.5, 0.0)));
        arena.add_force(ball, Vec3::new(20.0, 0.0, 0.0), ForceMode::VelocityChange);

        let events = arena.integrate(DT);
        assert_eq!(events, vec![ArenaEvent::Goal { scored_by: Team::Blue }]);
    }

    #[test]
    fn test_rolling_ball_reaches_goal_line() {
        let mut arena = Arena::soccer_twos();
        let ball = arena.find_with_tag(SceneTag::Ball).unwrap();
        arena.set_pose(ball, Pose::at(Vec3::new(14.0, 0.5, 0.0)));
        arena.add_force(ball, Vec3::new(10.0, 0.0, 0.0), ForceMode::VelocityChange);

        let mut scored = None;
        for _ in 0..200 {
            if let Some(ArenaEvent::Goal { scored_by }) = arena.integrate(DT).into_iter().next() {
                scored = Some(scored_by);
                break;
            }
        }
        assert_eq!(scored, Some(Team::Blue));
    }

    #[test]
    fn test_kicked_ball_scores_in_blue_goal() {
        let mut arena = Arena::soccer_twos();
        let ball = arena.find_with_tag(SceneTag::Ball).unwrap();
        arena.set_pose(ball, Pose::at(Vec3::new(-12.0, 0.5, 1.0)));
        arena.add_force(ball, Vec3::new(-2000.0, 0.0, 0.0), ForceMode::Force);

        let scored = (0..200).find_map(|_| {
            arena.integrate(DT).into_iter().find_map(|event| match event {
                ArenaEvent::Goal { scored_by } => Some(scored_by),
                ArenaEvent::BallContact { .. } => None,
            })
        });
        assert_eq!(scored, Some(Team::Purple));
    }

    #[test]
    fn test_ball_off_mouth_bounces() {
        let mut arena = Arena::soccer_twos();
        let ball = arena.find_with_tag(SceneTag::Ball).unwrap();
        arena.set_pose(ball, Pose::at(Vec3::new(-15.4, 0.5, 6.0)));
        arena.add_force(ball, Vec3::new(-20.0, 0.0, 0.0), ForceMode::VelocityChange);

        let events = arena.integrate(DT);
        assert!(events.is_empty());
        assert!(arena.position(ball).unwrap().x >= -15.5);
        assert!(arena.velocity(ball).unwrap().x > 0.0);
    }

    #[test]
    fn test_contact_event_only_on_enter() {
        let mut arena = Arena::soccer_twos();
        let ball = arena.find_with_tag(SceneTag::Ball).unwrap();
        let agent = arena.spawn_agent(Pose::at(Vec3::new(-0.8, 0.5, 0.0)));

        let events = arena.integrate(DT);
        assert_eq!(events.len(), 1);
        let ArenaEvent::BallContact { agent: who, contact } = events[0] else {
            panic!("expected contact, got {:?}", events[0]);
        };
        assert_eq!(who, agent);
        assert_eq!(contact.other, ball);
        assert!((contact.point - Vec3::new(-0.3, 0.5, 0.0)).norm() < 1e-5);

        // 공은 접촉 거리로 밀려나 있으므로 계속 붙어 있어도 이벤트 없음
        arena.set_pose(ball, Pose::at(Vec3::new(0.0, 0.5, 0.0)));
        assert!(arena.integrate(DT).is_empty());

        // 떨어졌다가 다시 닿으면 새 이벤트
        arena.set_pose(ball, Pose::at(Vec3::new(5.0, 0.5, 0.0)));
        assert!(arena.integrate(DT).is_empty());
        arena.set_pose(ball, Pose::at(Vec3::new(-0.5, 0.5, 0.0)));
        assert_eq!(arena.integrate(DT).len(), 1);
    }

    #[test]
    fn test_rotate_and_zero_velocity() {
        let mut arena = Arena::default();
        let agent = arena.spawn_agent(Pose::default());

        arena.rotate(agent, Vec3::y(), 90.0);
        assert!((arena.pose(agent).unwrap().forward() - Vec3::x()).norm() < 1e-5);

        // 영벡터 축은 무시
        arena.rotate(agent, Vec3::zeros(), 45.0);
        assert!((arena.pose(agent).unwrap().forward() - Vec3::x()).norm() < 1e-5);

        arena.add_force(agent, Vec3::new(1.0, 0.0, 0.0), ForceMode::VelocityChange);
        arena.zero_velocity(agent);
        assert_eq!(arena.velocity(agent), Some(Vec3::zeros()));
    }

    #[test]
    fn test_despawn_removes_tag() {
        let mut arena = Arena::soccer_twos();
        let ball = arena.find_with_tag(SceneTag::Ball).unwrap();
        arena.despawn(ball);
        assert!(arena.find_with_tag(SceneTag::Ball).is_none());
        assert!(arena.pose(ball).is_none());
    }
}
