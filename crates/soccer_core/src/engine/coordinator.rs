//! Episode Coordinator - SoccerEnvController
//!
//! 매치 전체의 에피소드 수명주기 담당.
//!
//! ## 상태 머신
//!
//! ```text
//! Running ──(step_count >= max_steps)──► Resetting (Draw, 그룹 중단)
//! Running ──(goal_touched)───────────────► Resetting (승/패 보상, 그룹 종료)
//! Resetting ──(reset_scene + on_episode_begin)──► Running
//! ```
//!
//! 보상 분배는 `RewardChannels`로 그룹/개인 싱크를 선택하는 단일 루틴을 거친다.

use std::collections::HashMap;

use nalgebra::UnitQuaternion;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::engine::actions::DiscreteActions;
use crate::engine::agent::AgentSoccer;
use crate::engine::config::EnvConfig;
use crate::engine::eval_log::EvaluationLog;
use crate::engine::physics_constants::outcome;
use crate::engine::reward::{
    winning_reward, CollisionReward, EpisodeMetrics, MatchOutcome, MatchSummary, TerminationReason,
};
use crate::engine::runtime::{AgentRuntime, GroupRuntime, GroupLedger, RewardLedger};
use crate::engine::types::{AgentId, BodyHandle, Pose, Team, Vec3};
use crate::engine::world::{Contact, PhysicsWorld};
use crate::error::SetupError;

// ============================================================================
// PlayerInfo / RewardChannels
// ============================================================================

/// 로스터 항목
#[derive(Debug, Clone)]
pub struct PlayerInfo<R> {
    pub agent: AgentSoccer,
    /// 셋업 시점 포즈 (코디네이터가 채운다)
    pub starting_pos: Vec3,
    pub starting_rot: UnitQuaternion<f32>,
    /// 에이전트 RL 런타임 (보상 누적기 소유)
    pub runtime: R,
}

impl<R> PlayerInfo<R> {
    pub fn new(agent: AgentSoccer, runtime: R) -> Self {
        Self { agent, starting_pos: Vec3::zeros(), starting_rot: UnitQuaternion::identity(), runtime }
    }
}

/// 종료 보상 전달 경로
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardChannels {
    pub individual: bool,
    pub group: bool,
}

impl RewardChannels {
    pub const BOTH: Self = Self { individual: true, group: true };
    pub const INDIVIDUAL: Self = Self { individual: true, group: false };
    pub const GROUP: Self = Self { individual: false, group: true };
}

impl Default for RewardChannels {
    fn default() -> Self {
        Self::BOTH
    }
}

// ============================================================================
// SoccerEnvController
// ============================================================================

/// 에피소드 코디네이터
#[derive(Debug)]
pub struct SoccerEnvController<R: AgentRuntime = RewardLedger, G: GroupRuntime = GroupLedger> {
    config: EnvConfig,
    players: Vec<PlayerInfo<R>>,
    blue_group: G,
    purple_group: G,
    ball: BodyHandle,
    ball_start: Vec3,
    step_count: u32,
    channels: RewardChannels,
    eval_log: Option<EvaluationLog>,
    reset_params: HashMap<String, f32>,
    rng: ChaCha8Rng,
    metrics: EpisodeMetrics,
    summary: MatchSummary,
}

impl<R: AgentRuntime, G: GroupRuntime> SoccerEnvController<R, G> {
    /// 매치 셋업
    ///
    /// 1. 설정 검증
    /// 2. 공/에이전트 시작 포즈 기록, 에이전트 초기화, 팀 그룹 등록
    /// 3. 추론 모드면 평가 로그 초기화 (실패 시 로깅 비활성)
    /// 4. 첫 리셋 + 에피소드 시작
    pub fn new<W: PhysicsWorld + ?Sized>(
        world: &mut W,
        config: EnvConfig,
        ball: BodyHandle,
        mut players: Vec<PlayerInfo<R>>,
        mut blue_group: G,
        mut purple_group: G,
    ) -> Result<Self, SetupError> {
        config.validate()?;

        let ball_start = world.position(ball).ok_or(SetupError::MissingBody(ball))?;

        for player in &mut players {
            let body = player.agent.body();
            let pose = world.pose(body).ok_or(SetupError::MissingBody(body))?;
            player.starting_pos = pose.position;
            player.starting_rot = pose.rotation;

            player.agent.initialize(&*world, &config);
            match player.agent.team() {
                Team::Blue => blue_group.register_agent(player.agent.id()),
                Team::Purple => purple_group.register_agent(player.agent.id()),
            }
        }

        let inference = players.iter().any(|p| p.agent.has_model());
        let eval_log = if config.enable_evaluation_logging && inference {
            match EvaluationLog::create(&config.evaluation_log_path) {
                Ok(log) => Some(log),
                Err(err) => {
                    error!(%err, "evaluation logging disabled");
                    None
                }
            }
        } else {
            None
        };

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        info!(
            players = players.len(),
            max_steps = config.max_environment_steps,
            eval_log = eval_log.is_some(),
            "soccer environment ready"
        );

        let mut controller = Self {
            config,
            players,
            blue_group,
            purple_group,
            ball,
            ball_start,
            step_count: 0,
            channels: RewardChannels::BOTH,
            eval_log,
            reset_params: HashMap::new(),
            rng,
            metrics: EpisodeMetrics::new(),
            summary: MatchSummary::new(),
        };
        controller.reset_scene(world);
        controller.begin_episodes(&*world);
        Ok(controller)
    }

    pub fn with_channels(mut self, channels: RewardChannels) -> Self {
        self.channels = channels;
        self
    }

    // ========================================================================
    // Tick
    // ========================================================================

    /// 한 틱: 로스터 순서대로 액션 적용 후 `fixed_update`
    ///
    /// `actions`가 로스터보다 짧으면 나머지는 무입력.
    ///
    /// # Returns
    /// 이번 틱에 에피소드가 끝났으면 결과
    pub fn step<W: PhysicsWorld + ?Sized>(
        &mut self,
        world: &mut W,
        actions: &[DiscreteActions],
        dt: f32,
    ) -> Option<MatchOutcome> {
        for (i, player) in self.players.iter_mut().enumerate() {
            let action = actions.get(i).copied().unwrap_or_default();
            player.agent.on_action_received(world, action, dt, &mut player.runtime);
        }
        self.fixed_update(world)
    }

    /// 스텝 카운터 증가 + 타임아웃 처리
    pub fn fixed_update<W: PhysicsWorld + ?Sized>(&mut self, world: &mut W) -> Option<MatchOutcome> {
        self.step_count += 1;
        self.metrics.record_tick();

        let max_steps = self.config.max_environment_steps;
        if max_steps == 0 || self.step_count < max_steps {
            return None;
        }

        info!(steps = self.step_count, "episode timed out");
        self.log_outcome(MatchOutcome::Draw);
        for player in &mut self.players {
            player.runtime.end_episode();
        }
        self.blue_group.group_episode_interrupted();
        self.purple_group.group_episode_interrupted();

        self.finish_episode(world, TerminationReason::TimeUp, MatchOutcome::Draw);
        Some(MatchOutcome::Draw)
    }

    /// 에이전트 충돌 진입 전달
    ///
    /// 로스터에 없는 에이전트거나 공 접촉이 아니면 None.
    pub fn handle_collision<W: PhysicsWorld + ?Sized>(
        &mut self,
        world: &mut W,
        agent: AgentId,
        contact: &Contact,
    ) -> Option<CollisionReward> {
        let player = self.players.iter_mut().find(|p| p.agent.id() == agent)?;
        let reward = player.agent.on_collision_enter(world, contact, &mut player.runtime)?;
        self.metrics.record_touch(player.agent.team());
        Some(reward)
    }

    /// 골 득점 처리
    ///
    /// 득점 팀 `max(1, 2 - step / max_steps)`, 실점 팀 -1.
    pub fn goal_touched<W: PhysicsWorld + ?Sized>(&mut self, world: &mut W, scored_by: Team) -> MatchOutcome {
        let winning = winning_reward(self.step_count, self.config.max_environment_steps);
        let result = MatchOutcome::win_for(scored_by);

        info!(team = ?scored_by, step = self.step_count, reward = winning, "goal scored");
        self.log_outcome(result);

        self.distribute(scored_by, winning, self.channels);
        self.distribute(scored_by.opponent(), outcome::LOSING_REWARD, self.channels);

        self.blue_group.end_group_episode();
        self.purple_group.end_group_episode();
        for player in &mut self.players {
            player.runtime.end_episode();
        }

        self.finish_episode(world, TerminationReason::GoalScored, result);
        result
    }

    // ========================================================================
    // Reset
    // ========================================================================

    /// 씬 리셋: 카운터 0, 에이전트/공 지터 배치, 속도 0
    pub fn reset_scene<W: PhysicsWorld + ?Sized>(&mut self, world: &mut W) {
        self.step_count = 0;
        self.metrics.reset();

        let reset = &self.config.reset;
        for player in &self.players {
            let agent = &player.agent;
            let jitter = self.rng.gen_range(-reset.agent_jitter..=reset.agent_jitter);
            let position = agent.initial_pos() + Vec3::new(jitter, 0.0, 0.0);
            let yaw = agent.rot_sign() * self.rng.gen_range(reset.yaw_min_deg..=reset.yaw_max_deg);

            world.set_pose(agent.body(), Pose::with_yaw(position, yaw));
            world.zero_velocity(agent.body());
        }

        self.reset_ball(world);
        debug!("scene reset");
    }

    /// 공을 시작 위치 근처(x/z 지터)로 이동
    pub fn reset_ball<W: PhysicsWorld + ?Sized>(&mut self, world: &mut W) {
        let jitter = self.config.reset.ball_jitter;
        let offset = Vec3::new(
            self.rng.gen_range(-jitter..=jitter),
            0.0,
            self.rng.gen_range(-jitter..=jitter),
        );
        world.set_pose(self.ball, Pose::at(self.ball_start + offset));
        world.zero_velocity(self.ball);
    }

    /// 리셋 파라미터 설정 (다음 에피소드 시작부터 반영)
    pub fn set_reset_parameter(&mut self, key: impl Into<String>, value: f32) {
        self.reset_params.insert(key.into(), value);
    }

    // ========================================================================
    // Internal
    // ========================================================================

    /// 종료 보상 분배 (팀 단위)
    fn distribute(&mut self, team: Team, reward: f32, channels: RewardChannels) {
        if channels.group {
            match team {
                Team::Blue => self.blue_group.add_group_reward(reward),
                Team::Purple => self.purple_group.add_group_reward(reward),
            }
            self.metrics.record_group_reward(team, reward);
        }
        if channels.individual {
            for player in self.players.iter_mut().filter(|p| p.agent.team() == team) {
                player.runtime.add_reward(reward);
            }
        }
    }

    fn finish_episode<W: PhysicsWorld + ?Sized>(
        &mut self,
        world: &mut W,
        reason: TerminationReason,
        result: MatchOutcome,
    ) {
        self.metrics.finish(reason, result);
        self.summary.record(&self.metrics);

        self.reset_scene(world);
        self.begin_episodes(&*world);
    }

    fn begin_episodes<W: PhysicsWorld + ?Sized>(&mut self, world: &W) {
        for player in &mut self.players {
            player.agent.on_episode_begin(world, &self.reset_params);
        }
    }

    fn log_outcome(&self, result: MatchOutcome) {
        if let Some(log) = &self.eval_log {
            log.record(result);
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    pub fn max_steps(&self) -> u32 {
        self.config.max_environment_steps
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    pub fn channels(&self) -> RewardChannels {
        self.channels
    }

    pub fn players(&self) -> &[PlayerInfo<R>] {
        &self.players
    }

    pub fn player(&self, agent: AgentId) -> Option<&PlayerInfo<R>> {
        self.players.iter().find(|p| p.agent.id() == agent)
    }

    /// 바디 핸들 → 에이전트 (물리 접촉 이벤트 매핑용)
    pub fn agent_for_body(&self, body: BodyHandle) -> Option<AgentId> {
        self.players.iter().find(|p| p.agent.body() == body).map(|p| p.agent.id())
    }

    pub fn group(&self, team: Team) -> &G {
        match team {
            Team::Blue => &self.blue_group,
            Team::Purple => &self.purple_group,
        }
    }

    pub fn ball(&self) -> BodyHandle {
        self.ball
    }

    pub fn ball_start(&self) -> Vec3 {
        self.ball_start
    }

    /// 현재 에피소드 메트릭
    pub fn metrics(&self) -> &EpisodeMetrics {
        &self.metrics
    }

    /// 종료된 에피소드 집계
    pub fn summary(&self) -> &MatchSummary {
        &self.summary
    }

    pub fn evaluation_log(&self) -> Option<&EvaluationLog> {
        self.eval_log.as_ref()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::agent::{AgentConfig, BALL_TOUCH_KEY};
    use crate::engine::arena::Arena;
    use crate::engine::config::SoccerSettings;
    use crate::engine::runtime::GroupEpisodeEnd;
    use crate::engine::types::{Position, SceneTag};

    type Controller = SoccerEnvController<RewardLedger, GroupLedger>;

    fn roster(arena: &mut Arena, configs: Vec<(AgentConfig, Vec3)>) -> Vec<PlayerInfo<RewardLedger>> {
        configs
            .into_iter()
            .enumerate()
            .map(|(i, (config, at))| {
                let body = arena.spawn_agent(Pose::at(at));
                let agent = AgentSoccer::new(AgentId(i as u32), body, config, SoccerSettings::default());
                PlayerInfo::new(agent, RewardLedger::new())
            })
            .collect()
    }

    fn two_vs_two(config: EnvConfig, behavior: &str) -> (Arena, Controller) {
        let mut arena = Arena::soccer_twos();
        let ball = arena.find_with_tag(SceneTag::Ball).unwrap();
        let players = roster(
            &mut arena,
            vec![
                (AgentConfig::new(Team::Blue, Position::Striker).with_behavior_name(behavior), Vec3::new(-3.0, 0.5, 2.0)),
                (AgentConfig::new(Team::Blue, Position::Goalie).with_behavior_name(behavior), Vec3::new(-8.0, 0.5, 0.0)),
                (AgentConfig::new(Team::Purple, Position::Striker).with_behavior_name(behavior), Vec3::new(3.0, 0.5, -2.0)),
                (AgentConfig::new(Team::Purple, Position::Goalie).with_behavior_name(behavior), Vec3::new(8.0, 0.5, 0.0)),
            ],
        );
        let controller =
            Controller::new(&mut arena, config, ball, players, GroupLedger::new(), GroupLedger::new()).unwrap();
        (arena, controller)
    }

    fn seeded(max_steps: u32) -> EnvConfig {
        EnvConfig { max_environment_steps: max_steps, seed: Some(7), ..EnvConfig::default() }
    }

    fn assert_within_reset_bounds(arena: &Arena, controller: &Controller) {
        let reset = &controller.config().reset;
        for player in controller.players() {
            let pose = arena.pose(player.agent.body()).unwrap();
            let offset = pose.position - player.agent.initial_pos();
            assert!(offset.x.abs() <= reset.agent_jitter + 1e-4);
            assert!(offset.y.abs() < 1e-6 && offset.z.abs() < 1e-6);
            assert_eq!(arena.velocity(player.agent.body()), Some(Vec3::zeros()));
        }
        let ball = arena.position(controller.ball()).unwrap() - controller.ball_start();
        assert!(ball.x.abs() <= reset.ball_jitter + 1e-4);
        assert!(ball.z.abs() <= reset.ball_jitter + 1e-4);
        assert!(ball.y.abs() < 1e-6);
    }

    #[test]
    fn test_setup_registers_groups() {
        let (arena, controller) = two_vs_two(seeded(100), "poca");

        assert_eq!(controller.group(Team::Blue).members(), &[AgentId(0), AgentId(1)]);
        assert_eq!(controller.group(Team::Purple).members(), &[AgentId(2), AgentId(3)]);
        assert_eq!(controller.step_count(), 0);
        assert!(controller.evaluation_log().is_none());
        assert_within_reset_bounds(&arena, &controller);
        assert!(controller.players().iter().all(|p| p.agent.tracker().is_bound()));
    }

    #[test]
    fn test_setup_missing_ball() {
        let mut arena = Arena::default();
        let players = roster(&mut arena, vec![(AgentConfig::new(Team::Blue, Position::Goalie), Vec3::zeros())]);
        let result =
            Controller::new(&mut arena, seeded(10), BodyHandle(99), players, GroupLedger::new(), GroupLedger::new());
        assert!(matches!(result, Err(SetupError::MissingBody(BodyHandle(99)))));
    }

    #[test]
    fn test_setup_rejects_invalid_config() {
        let mut arena = Arena::soccer_twos();
        let ball = arena.find_with_tag(SceneTag::Ball).unwrap();
        let mut config = seeded(10);
        config.reset.yaw_min_deg = 120.0;
        let result = Controller::new(&mut arena, config, ball, Vec::new(), GroupLedger::new(), GroupLedger::new());
        assert!(matches!(result, Err(SetupError::Config(_))));
    }

    #[test]
    fn test_timeout_resets_once() {
        let (mut arena, mut controller) = two_vs_two(seeded(10), "poca");

        for tick in 1..10 {
            assert_eq!(controller.fixed_update(&mut arena), None);
            assert_eq!(controller.step_count(), tick);
        }
        assert_eq!(controller.fixed_update(&mut arena), Some(MatchOutcome::Draw));
        assert_eq!(controller.step_count(), 0);

        for team in [Team::Blue, Team::Purple] {
            assert_eq!(controller.group(team).history(), &[(GroupEpisodeEnd::Interrupted, 0.0)]);
        }
        assert!(controller.players().iter().all(|p| p.runtime.completed_episodes() == 1));
        assert_eq!(controller.summary().draws, 1);
        assert_eq!(controller.summary().total_ticks, 10);
        assert_within_reset_bounds(&arena, &controller);
    }

    #[test]
    fn test_no_timeout_when_max_steps_zero() {
        let (mut arena, mut controller) = two_vs_two(seeded(0), "poca");
        for _ in 0..500 {
            assert_eq!(controller.fixed_update(&mut arena), None);
        }
        assert_eq!(controller.step_count(), 500);
        assert_eq!(controller.summary().episodes, 0);
    }

    #[test]
    fn test_goal_at_step_zero() {
        let (mut arena, mut controller) = two_vs_two(seeded(25_000), "poca");

        assert_eq!(controller.goal_touched(&mut arena, Team::Blue), MatchOutcome::BlueWin);

        assert_eq!(controller.group(Team::Blue).history(), &[(GroupEpisodeEnd::Ended, 2.0)]);
        assert_eq!(controller.group(Team::Purple).history(), &[(GroupEpisodeEnd::Ended, -1.0)]);
        for player in controller.players() {
            let expected = if player.agent.team() == Team::Blue { 2.0 } else { -1.0 };
            assert_eq!(player.runtime.episode_returns(), &[expected]);
        }
        assert_eq!(controller.step_count(), 0);
        assert_within_reset_bounds(&arena, &controller);
    }

    #[test]
    fn test_goal_reward_decays_with_time() {
        let (mut arena, mut controller) = two_vs_two(seeded(25_000), "poca");
        for _ in 0..20_000 {
            controller.fixed_update(&mut arena);
        }

        controller.goal_touched(&mut arena, Team::Purple);

        let (_, purple) = controller.group(Team::Purple).history()[0];
        let (_, blue) = controller.group(Team::Blue).history()[0];
        assert!((purple - 1.2).abs() < 1e-5);
        assert_eq!(blue, -1.0);
        assert_eq!(controller.summary().purple_wins, 1);
    }

    #[test]
    fn test_group_only_channels() {
        let (mut arena, controller) = two_vs_two(seeded(25_000), "poca");
        let mut controller = controller.with_channels(RewardChannels::GROUP);

        controller.goal_touched(&mut arena, Team::Blue);

        assert_eq!(controller.group(Team::Blue).history(), &[(GroupEpisodeEnd::Ended, 2.0)]);
        // 개인 싱크에는 종료 보상 없음 (simple 보상도 아직 0틱)
        assert!(controller.players().iter().all(|p| p.runtime.episode_returns() == [0.0]));
    }

    #[test]
    fn test_step_accumulates_simple_rewards() {
        let (mut arena, mut controller) = two_vs_two(seeded(25_000), "ppo");
        let idle = [DiscreteActions::idle(); 4];

        for _ in 0..100 {
            controller.step(&mut arena, &idle, 0.02);
        }

        let rate = 100.0 / 25_000.0;
        for player in controller.players() {
            let expected = match player.agent.position() {
                Position::Goalie => rate,
                _ => -rate,
            };
            assert!((player.runtime.cumulative_reward() - expected).abs() < 1e-5);
        }
        assert_eq!(controller.step_count(), 100);
        assert_eq!(controller.metrics().total_ticks, 100);
    }

    #[test]
    fn test_handle_collision_records_touch() {
        let (mut arena, mut controller) = two_vs_two(seeded(25_000), "poca");
        let ball = controller.ball();
        let striker = controller.players()[0].agent.body();
        let position = arena.position(striker).unwrap();

        let contact = Contact { other: ball, point: position + Vec3::new(0.5, 0.0, 0.0) };
        let reward = controller.handle_collision(&mut arena, AgentId(0), &contact).unwrap();

        assert!((reward.touch - 0.2).abs() < 1e-6);
        assert_eq!(controller.metrics().ball_touches, (1, 0));
        assert!((controller.players()[0].runtime.cumulative_reward() - 0.2).abs() < 1e-6);
        assert!(controller.handle_collision(&mut arena, AgentId(42), &contact).is_none());
        assert_eq!(controller.agent_for_body(striker), Some(AgentId(0)));
    }

    #[test]
    fn test_reset_parameter_applies_next_episode() {
        let (mut arena, mut controller) = two_vs_two(seeded(25_000), "poca");
        controller.set_reset_parameter(BALL_TOUCH_KEY, 0.5);
        assert_eq!(controller.players()[0].agent.tracker().ball_touch_bias(), 0.0);

        controller.goal_touched(&mut arena, Team::Blue);
        assert!(controller.players().iter().all(|p| p.agent.tracker().ball_touch_bias() == 0.5));
    }

    #[test]
    fn test_eval_log_in_inference_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("evaluation_results.txt");
        let config = EnvConfig {
            enable_evaluation_logging: true,
            evaluation_log_path: path.display().to_string(),
            ..seeded(3)
        };

        let mut arena = Arena::soccer_twos();
        let ball = arena.find_with_tag(SceneTag::Ball).unwrap();
        let players = roster(
            &mut arena,
            vec![
                (AgentConfig::new(Team::Blue, Position::Goalie).with_model(true), Vec3::new(-3.0, 0.5, 0.0)),
                (AgentConfig::new(Team::Purple, Position::Goalie), Vec3::new(3.0, 0.5, 0.0)),
            ],
        );
        let mut controller =
            Controller::new(&mut arena, config, ball, players, GroupLedger::new(), GroupLedger::new()).unwrap();

        controller.goal_touched(&mut arena, Team::Purple);
        for _ in 0..3 {
            controller.fixed_update(&mut arena);
        }
        controller.goal_touched(&mut arena, Team::Blue);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "2\n0\n1\n");
    }

    #[test]
    fn test_eval_log_disabled_without_model() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("evaluation_results.txt");
        let config = EnvConfig {
            enable_evaluation_logging: true,
            evaluation_log_path: path.display().to_string(),
            ..seeded(3)
        };
        let mut arena = Arena::soccer_twos();
        let ball = arena.find_with_tag(SceneTag::Ball).unwrap();
        let players = roster(&mut arena, vec![(AgentConfig::new(Team::Blue, Position::Goalie), Vec3::zeros())]);
        let controller =
            Controller::new(&mut arena, config, ball, players, GroupLedger::new(), GroupLedger::new()).unwrap();

        assert!(controller.evaluation_log().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_seeded_resets_are_deterministic() {
        let (arena_a, a) = two_vs_two(seeded(50), "sac");
        let (arena_b, b) = two_vs_two(seeded(50), "sac");
        for (pa, pb) in a.players().iter().zip(b.players()) {
            assert_eq!(arena_a.pose(pa.agent.body()), arena_b.pose(pb.agent.body()));
        }
    }
}
