//! # soccer_core - SoccerTwos Reward & Episode Core
//!
//! 2 vs 2 축구 강화학습 환경의 보상 계산 / 에피소드 수명주기 코어.
//!
//! ## Features
//! - 학습 정책 분류 (POCA / PPO / SAC) - behavior name 기반 자동 감지
//! - 정책/포지션별 스텝 보상, 충돌(터치/슛) 보상
//! - 공 거리/위치 추적 (`Unbound` / `Bound` 바인딩 상태 머신)
//! - 그룹 보상 + 개인 보상 동시 지원 에피소드 코디네이터
//!
//! 물리 엔진과 RL 런타임은 외부 협력자로, `engine::world` / `engine::runtime`
//! 트레이트를 통해서만 접근한다.

// Game engine APIs often require many parameters for physics, state, etc.
#![allow(clippy::too_many_arguments)]
// Doc formatting lints - purely cosmetic, fix incrementally
#![allow(clippy::doc_lazy_continuation)]

pub mod engine;
pub mod error;

pub use engine::actions::DiscreteActions;
pub use engine::agent::{AgentConfig, AgentSoccer};
pub use engine::arena::{Arena, ArenaEvent};
pub use engine::config::{EnvConfig, ExperimentConfig, PolicyConfig, ResetConfig, SoccerSettings};
pub use engine::coordinator::{PlayerInfo, RewardChannels, SoccerEnvController};
pub use engine::policy::{classify, PolicySelection, TrainingPolicy};
pub use engine::reward::{MatchOutcome, MatchSummary, RewardEngine, RewardScheme, RewardTracker};
pub use engine::runtime::{GroupLedger, RewardLedger};
pub use engine::types::{AgentId, BodyHandle, Pose, Position, SceneTag, Team, Vec3};
pub use error::{ConfigError, EvalLogError, SetupError, UnknownPolicy};
