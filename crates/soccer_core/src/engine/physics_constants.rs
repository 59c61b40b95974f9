//! Physics and reward-shaping constants for the SoccerTwos environment
//!
//! 설정으로 노출하지 않는 고정 상수만 모아둔다.
//! 튜닝 가능한 값은 `engine::config` 참조.

// ============================================================
// Kick
// ============================================================
pub mod kick {
    /// 킥 파워 기본값. Goalie는 항상 이 값으로 찬다.
    pub const POWER: f32 = 2000.0;
}

// ============================================================
// Reward shaping
// ============================================================
pub mod shaping {
    //! 보상 계수
    //!
    //! Simple scheme은 존재 보상만 사용하고
    //! 나머지는 모두 Shaped (SAC + complex) 전용.

    /// Striker 존재 페널티 배율 (shaped scheme)
    pub const STRIKER_EXISTENTIAL_SCALE: f32 = 0.1;

    /// 공 접근 보상 계수 (거리 감소량 × 계수)
    pub const APPROACH_COEF: f32 = 0.05;

    /// 공 바라보기 보상 계수
    pub const FACING_COEF: f32 = 0.005;

    /// 근접 보너스 판정 거리
    pub const PROXIMITY_RADIUS: f32 = 3.0;
    /// 근접 보너스 계수: 0.01 × (5 - d) / 5
    pub const PROXIMITY_COEF: f32 = 0.01;
    pub const PROXIMITY_FALLOFF: f32 = 5.0;

    /// 공 전진 보상 계수 (상대 골대 방향)
    pub const PUSH_COEF: f32 = 0.05;
    /// 공 컨트롤 중 전진 시 추가 배율 (기본 항에 누적, 합계 2.5배)
    pub const CONTROL_PUSH_SCALE: f32 = 1.5;
    /// 컨트롤 판정 거리
    pub const CONTROL_RADIUS: f32 = 3.0;

    /// 공 후퇴 페널티 계수 (자기 골대 방향)
    pub const REGRESSION_COEF: f32 = 0.03;

    /// 슈팅 존 거리 임계값
    pub const SHOOT_DISTANCE_THRESHOLD: f32 = 5.0;
    /// 슈팅 존 스텝 보너스 계수
    pub const SHOOT_ZONE_COEF: f32 = 0.01;

    /// 터치 보상 기본값 (ball_touch 바이어스가 0일 때)
    pub const TOUCH_REWARD: f32 = 0.2;
    /// 슛 보상 최대값: 0.5 × (5 - d) / 5
    pub const SHOOT_REWARD_COEF: f32 = 0.5;
    /// 킥 방향-골 방향 정렬 임계값
    pub const ALIGNMENT_THRESHOLD: f32 = 0.5;
    /// 정렬 보너스 = 슛 보상 × 0.5
    pub const ALIGNMENT_BONUS_SCALE: f32 = 0.5;
}

// ============================================================
// Episode outcome
// ============================================================
pub mod outcome {
    /// 패배 팀 보상 (항상 고정)
    pub const LOSING_REWARD: f32 = -1.0;
    /// 승리 보상 하한
    pub const MIN_WINNING_REWARD: f32 = 1.0;
    /// 승리 보상 상한 (0 스텝 득점)
    pub const MAX_WINNING_REWARD: f32 = 2.0;
}

// ============================================================
// Arena (headless world)
// ============================================================
pub mod field {
    /// 골라인까지 x 거리 (골대 중심 x와 동일)
    pub const HALF_LENGTH_M: f32 = 16.0;
    /// 사이드 벽까지 z 거리
    pub const HALF_WIDTH_M: f32 = 9.0;
    /// 골 입구 반폭 (z)
    pub const GOAL_HALF_WIDTH_M: f32 = 2.5;
    /// 바디 중심 높이
    pub const BODY_HEIGHT_M: f32 = 0.5;
    /// 벽 반발 계수
    pub const WALL_COR: f32 = 0.5;
}

pub mod body {
    pub const AGENT_RADIUS_M: f32 = 0.5;
    pub const AGENT_MASS_KG: f32 = 1.0;
    /// 에이전트 선속도 감쇠 (1/s)
    pub const AGENT_DRAG: f32 = 10.0;

    pub const BALL_RADIUS_M: f32 = 0.5;
    pub const BALL_MASS_KG: f32 = 5.0;
    pub const BALL_DRAG: f32 = 0.5;
}
