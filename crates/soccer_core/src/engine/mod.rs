//! SoccerTwos engine modules
//!
//! - `policy`: 학습 정책 분류기
//! - `reward`: 보상 추적기 / 보상 엔진 / 에피소드 메트릭
//! - `agent`: 에이전트 컨트롤러 (액션 → 이동, 보상 호출)
//! - `coordinator`: 에피소드 코디네이터 (리셋, 타임아웃, 골)
//! - `world` / `runtime`: 외부 협력자 인터페이스
//! - `arena`: 테스트/CLI용 헤드리스 물리 월드

pub mod actions;
pub mod agent;
pub mod arena;
pub mod config;
pub mod coordinator;
pub mod eval_log;
pub mod physics_constants;
pub mod policy;
pub mod reward;
pub mod runtime;
pub mod types;
pub mod world;
