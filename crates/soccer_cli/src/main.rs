//! SoccerTwos headless runner
//!
//! 헤드리스 Arena 위에서 랜덤 액션 2 vs 2 매치를 돌리고 결과 요약을 JSON으로 출력.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use soccer_core::{
    classify, AgentConfig, AgentId, AgentSoccer, Arena, ArenaEvent, DiscreteActions, ExperimentConfig,
    GroupLedger, MatchOutcome, PlayerInfo, PolicyConfig, Pose, Position, RewardLedger, RewardScheme, SceneTag,
    SoccerEnvController, Team, TrainingPolicy, Vec3,
};
use soccer_core::engine::world::PhysicsWorld;

#[derive(Parser)]
#[command(name = "soccer_cli")]
#[command(about = "Run headless SoccerTwos matches and inspect policy selection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate random-action 2v2 episodes
    Simulate {
        /// Number of finished episodes to run
        #[arg(long, default_value = "10")]
        episodes: u32,

        /// Trainer behavior name used for policy auto-detection
        #[arg(long)]
        behavior_name: Option<String>,

        /// Experiment config file (JSON or YAML)
        #[arg(long)]
        config: Option<PathBuf>,

        /// RNG seed for resets and actions
        #[arg(long)]
        seed: Option<u64>,

        /// Override max environment steps
        #[arg(long)]
        max_steps: Option<u32>,

        /// Write match results here (agents run as frozen models)
        #[arg(long)]
        eval_log: Option<PathBuf>,

        /// Fixed timestep in seconds
        #[arg(long, default_value = "0.02")]
        dt: f32,
    },

    /// Print the policy selection for a behavior name
    Classify {
        /// Behavior name
        name: String,

        /// Fallback policy (poca, ppo, sac)
        #[arg(long, default_value = "sac")]
        policy: String,

        /// Fallback without complex rewards (SAC only)
        #[arg(long, default_value = "false")]
        simple: bool,

        /// Use the fallback only, skipping keyword detection
        #[arg(long, default_value = "false")]
        no_auto_detect: bool,
    },
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("soccer_core=info,info"));

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).with_target(false).finish();

    tracing::subscriber::set_global_default(subscriber).context("failed to install tracing subscriber")?;
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate { episodes, behavior_name, config, seed, max_steps, eval_log, dt } => {
            let mut experiment = match config {
                Some(path) => ExperimentConfig::load(&path)
                    .with_context(|| format!("failed to load config {}", path.display()))?,
                None => ExperimentConfig::from_env()?.unwrap_or_default(),
            };
            if let Some(seed) = seed {
                experiment.env.seed = Some(seed);
            }
            if let Some(max_steps) = max_steps {
                experiment.env.max_environment_steps = max_steps;
            }
            if let Some(path) = &eval_log {
                experiment.env.enable_evaluation_logging = true;
                experiment.env.evaluation_log_path = path.display().to_string();
            }
            if let Some(name) = behavior_name {
                experiment.policy.behavior_name = name;
            }
            experiment.validate()?;

            simulate(&experiment, episodes, dt, eval_log.is_some())?;
        }

        Commands::Classify { name, policy, simple, no_auto_detect } => {
            let policy_type: TrainingPolicy = policy.parse()?;
            let selection = classify(Some(&name), &PolicyConfig::new(policy_type, !simple), !no_auto_detect);
            let scheme = RewardScheme::from_selection(&selection);

            let report = json!({
                "behavior_name": name,
                "policy": selection.policy.as_str(),
                "use_complex_rewards": selection.use_complex_rewards,
                "reward_scheme": format!("{:?}", scheme),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

/// 물리 적분 후 이벤트 전달, 그다음 액션 스텝
///
/// 골이 나면 에피소드가 리셋되므로 이번 틱의 액션 스텝은 건너뛴다.
fn tick(
    controller: &mut SoccerEnvController<RewardLedger, GroupLedger>,
    arena: &mut Arena,
    actions: &[DiscreteActions],
    dt: f32,
) -> Option<MatchOutcome> {
    for event in arena.integrate(dt) {
        match event {
            ArenaEvent::BallContact { agent, contact } => {
                if let Some(id) = controller.agent_for_body(agent) {
                    controller.handle_collision(arena, id, &contact);
                }
            }
            ArenaEvent::Goal { scored_by } => return Some(controller.goal_touched(arena, scored_by)),
        }
    }
    controller.step(arena, actions, dt)
}

/// 2 vs 2 로스터 (팀당 Striker + Goalie)
fn build_roster(arena: &mut Arena, experiment: &ExperimentConfig, has_model: bool) -> Vec<PlayerInfo<RewardLedger>> {
    let lineup = [
        (Team::Blue, Position::Striker, Vec3::new(2.0, 0.5, -1.5)),
        (Team::Blue, Position::Goalie, Vec3::new(-7.0, 0.5, 0.0)),
        (Team::Purple, Position::Striker, Vec3::new(-2.0, 0.5, 1.5)),
        (Team::Purple, Position::Goalie, Vec3::new(7.0, 0.5, 0.0)),
    ];

    lineup
        .into_iter()
        .enumerate()
        .map(|(i, (team, position, at))| {
            let body = arena.spawn_agent(Pose::at(at));
            let config = AgentConfig::new(team, position)
                .with_behavior_name(experiment.policy.behavior_name.clone())
                .with_policy(experiment.policy.clone(), experiment.auto_detect_policy)
                .with_model(has_model);
            let agent = AgentSoccer::new(AgentId(i as u32), body, config, experiment.settings.clone());
            PlayerInfo::new(agent, RewardLedger::new())
        })
        .collect()
}

fn simulate(experiment: &ExperimentConfig, episodes: u32, dt: f32, has_model: bool) -> Result<()> {
    if experiment.env.max_environment_steps == 0 {
        bail!("simulate needs a positive max_environment_steps to guarantee episodes end");
    }
    if dt <= 0.0 {
        bail!("dt must be positive, got {dt}");
    }

    let mut arena = Arena::soccer_twos();
    let ball = arena.find_with_tag(SceneTag::Ball).context("arena has no ball")?;
    let players = build_roster(&mut arena, experiment, has_model);
    let agent_count = players.len();

    let mut controller: SoccerEnvController<RewardLedger, GroupLedger> = SoccerEnvController::new(
        &mut arena,
        experiment.env.clone(),
        ball,
        players,
        GroupLedger::new(),
        GroupLedger::new(),
    )?;

    let mut rng = match experiment.env.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)),
        None => ChaCha8Rng::from_entropy(),
    };

    info!(
        episodes,
        behavior = %experiment.policy.behavior_name,
        policy = %controller.players()[0].agent.selection().policy,
        "simulation started"
    );

    while controller.summary().episodes < episodes {
        let actions: Vec<DiscreteActions> = (0..agent_count)
            .map(|_| DiscreteActions::from_indices([rng.gen_range(0..3), rng.gen_range(0..3), rng.gen_range(0..3)]))
            .collect();

        if let Some(outcome) = tick(&mut controller, &mut arena, &actions, dt) {
            debug!(?outcome, "episode ended");
        }
    }

    let summary = controller.summary();
    info!(
        episodes = summary.episodes,
        blue_win_rate = summary.blue_win_rate(),
        mean_length = summary.mean_episode_length(),
        "simulation finished"
    );
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}
