//! Agent Controller - AgentSoccer
//!
//! 틱마다:
//! 1. 공/골대 참조 lazy 바인딩
//! 2. 보상 엔진 호출 (엔진이 없으면 simple 존재 보상 fallback)
//! 3. 이산 액션 → 이동/회전을 물리 협력자에 전달
//!
//! 공 충돌 시 터치/슛 보상 + 킥 힘 적용.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::engine::actions::{DiscreteActions, MovementIntent};
use crate::engine::config::{EnvConfig, PolicyConfig, SoccerSettings};
use crate::engine::policy::{classify, PolicySelection};
use crate::engine::reward::{
    kick_direction, kick_force, simple_existential, touch_reward, CollisionReward, RewardEngine,
    RewardScheme, RewardTracker,
};
use crate::engine::runtime::{EnvironmentParameters, RewardSink};
use crate::engine::types::{AgentId, BodyHandle, Position, SceneTag, Team, Vec3};
use crate::engine::world::{Contact, ForceMode, PhysicsWorld};

/// 리셋 파라미터 키: 공 터치 보상 바이어스
pub const BALL_TOUCH_KEY: &str = "ball_touch";

/// 에이전트 생성 설정 (생성 후 팀/포지션/정책 고정)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub team: Team,
    pub position: Position,
    /// 트레이너 behavior name (None이면 정책 설정값 사용)
    pub behavior_name: Option<String>,
    pub policy: PolicyConfig,
    pub auto_detect_policy: bool,
    /// 학습된 고정 모델로 구동 중인지 (추론 모드 판정용)
    pub has_model: bool,
}

impl AgentConfig {
    pub fn new(team: Team, position: Position) -> Self {
        Self {
            team,
            position,
            behavior_name: None,
            policy: PolicyConfig::default(),
            auto_detect_policy: true,
            has_model: false,
        }
    }

    pub fn with_behavior_name(mut self, name: impl Into<String>) -> Self {
        self.behavior_name = Some(name.into());
        self
    }

    pub fn with_policy(mut self, policy: PolicyConfig, auto_detect: bool) -> Self {
        self.policy = policy;
        self.auto_detect_policy = auto_detect;
        self
    }

    pub fn with_model(mut self, has_model: bool) -> Self {
        self.has_model = has_model;
        self
    }
}

/// 축구 에이전트
#[derive(Debug, Clone)]
pub struct AgentSoccer {
    id: AgentId,
    body: BodyHandle,
    config: AgentConfig,
    settings: SoccerSettings,
    selection: PolicySelection,
    /// `initialize` 전에는 None
    engine: Option<RewardEngine>,
    tracker: RewardTracker,
    existential: f32,
    kick_power: f32,
    ball_touch: f32,
    initial_pos: Vec3,
    rot_sign: f32,
}

impl AgentSoccer {
    pub fn new(id: AgentId, body: BodyHandle, config: AgentConfig, settings: SoccerSettings) -> Self {
        let selection = PolicySelection::from(&config.policy);
        Self {
            id,
            body,
            tracker: RewardTracker::new(config.team, 0.0),
            rot_sign: config.team.rot_sign(),
            config,
            settings,
            selection,
            engine: None,
            existential: 0.0,
            kick_power: 0.0,
            ball_touch: 0.0,
            initial_pos: Vec3::zeros(),
        }
    }

    /// 초기화 (매치 셋업 시 1회)
    ///
    /// 정책 분류, 존재 보상 크기, 초기 위치 계산, 보상 엔진 생성.
    pub fn initialize<W: PhysicsWorld + ?Sized>(&mut self, world: &W, env: &EnvConfig) {
        self.existential = env.existential_rate();
        if env.max_environment_steps == 0 {
            warn!(agent = self.id.0, "max_environment_steps is 0, existential reward disabled");
        }
        let reset = &env.reset;

        self.selection = classify(
            self.config.behavior_name.as_deref(),
            &self.config.policy,
            self.config.auto_detect_policy,
        );

        let position = world.position(self.body).unwrap_or_else(Vec3::zeros);
        let offset = match self.config.team {
            Team::Blue => -reset.spawn_offset,
            Team::Purple => reset.spawn_offset,
        };
        self.initial_pos = Vec3::new(position.x + offset, reset.spawn_height, position.z);

        let engine = RewardEngine::new(RewardScheme::from_selection(&self.selection), self.config.position);
        let ball = world.find_position(SceneTag::Ball);
        let own_goal = world.find_position(self.config.team.own_goal_tag()).map(|(_, p)| p);
        let opposing_goal = world.find_position(self.config.team.opposing_goal_tag()).map(|(_, p)| p);
        self.tracker.initialize(
            self.existential,
            ball,
            opposing_goal.unwrap_or_else(Vec3::zeros),
            own_goal.unwrap_or_else(Vec3::zeros),
            position,
        );
        self.engine = Some(engine);

        debug!(
            agent = self.id.0,
            team = ?self.config.team,
            position = ?self.config.position,
            policy = %self.selection.policy,
            scheme = ?engine.scheme(),
            "agent initialized"
        );
    }

    /// 액션 수신 (매 틱)
    ///
    /// # Returns
    /// 이번 틱 스텝 보상 합계
    pub fn on_action_received<W: PhysicsWorld + ?Sized>(
        &mut self,
        world: &mut W,
        actions: DiscreteActions,
        dt: f32,
        sink: &mut dyn RewardSink,
    ) -> f32 {
        let Some(pose) = world.pose(self.body) else {
            // 바디가 아직 없음: 존재 보상만
            return self.fallback_step(sink);
        };

        self.tracker.try_bind(&*world, pose.position);

        let reward = match &self.engine {
            Some(engine) => {
                let ball = self.tracker.ball().and_then(|ball| world.position(ball));
                engine.step_reward(&mut self.tracker, &pose, ball, sink).total()
            }
            None => self.fallback_step(sink),
        };

        self.move_agent(world, actions, dt);
        reward
    }

    fn fallback_step(&self, sink: &mut dyn RewardSink) -> f32 {
        let reward = simple_existential(self.config.position, self.existential);
        if reward != 0.0 {
            sink.add_reward(reward);
        }
        reward
    }

    /// 이산 액션 → 힘/회전 적용
    pub fn move_agent<W: PhysicsWorld + ?Sized>(&mut self, world: &mut W, actions: DiscreteActions, dt: f32) {
        let Some(pose) = world.pose(self.body) else {
            return;
        };

        let intent = MovementIntent::from_actions(actions, &pose, self.config.position);
        self.kick_power = intent.kick_power;

        if intent.rotation_axis != Vec3::zeros() {
            world.rotate(self.body, intent.rotation_axis, dt * self.settings.rotation_speed_deg);
        }
        world.add_force(
            self.body,
            intent.direction * self.settings.agent_run_speed,
            ForceMode::VelocityChange,
        );
    }

    /// 충돌 진입
    ///
    /// 공이 아니면 무시 (None).
    pub fn on_collision_enter<W: PhysicsWorld + ?Sized>(
        &mut self,
        world: &mut W,
        contact: &Contact,
        sink: &mut dyn RewardSink,
    ) -> Option<CollisionReward> {
        if world.tag_of(contact.other) != Some(SceneTag::Ball) {
            return None;
        }
        let pose = world.pose(self.body)?;
        let ball = world.position(contact.other).unwrap_or(contact.point);

        let reward = match &self.engine {
            Some(engine) => engine.collision_reward(&mut self.tracker, &pose, ball, contact.point, sink),
            None => {
                let touch = touch_reward(self.ball_touch);
                sink.add_reward(touch);
                CollisionReward { touch, ..CollisionReward::default() }
            }
        };

        let force = kick_force(self.config.position, self.kick_power);
        let direction = kick_direction(pose.position, contact.point);
        world.add_force(contact.other, direction * force, ForceMode::Force);

        if let Some(ball) = world.position(contact.other) {
            self.tracker.update_tracking(pose.position, ball);
        }

        Some(reward)
    }

    /// 에피소드 시작 (리셋 직후)
    ///
    /// 터치 바이어스 재로딩 + 추적 상태 재바인딩.
    pub fn on_episode_begin<W, P>(&mut self, world: &W, params: &P)
    where
        W: PhysicsWorld + ?Sized,
        P: EnvironmentParameters + ?Sized,
    {
        self.ball_touch = params.get_with_default(BALL_TOUCH_KEY, 0.0);
        self.tracker.set_ball_touch(self.ball_touch);

        if let Some(position) = world.position(self.body) {
            self.tracker.rebind(world, position);
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn body(&self) -> BodyHandle {
        self.body
    }

    pub fn team(&self) -> Team {
        self.config.team
    }

    pub fn position(&self) -> Position {
        self.config.position
    }

    pub fn selection(&self) -> PolicySelection {
        self.selection
    }

    pub fn reward_engine(&self) -> Option<&RewardEngine> {
        self.engine.as_ref()
    }

    pub fn tracker(&self) -> &RewardTracker {
        &self.tracker
    }

    pub fn existential(&self) -> f32 {
        self.existential
    }

    pub fn kick_power(&self) -> f32 {
        self.kick_power
    }

    /// 리셋 기준 위치
    pub fn initial_pos(&self) -> Vec3 {
        self.initial_pos
    }

    pub fn rot_sign(&self) -> f32 {
        self.rot_sign
    }

    pub fn has_model(&self) -> bool {
        self.config.has_model
    }
}

// ============================================================================
// Tests
// ============================================================================
