//! Core types shared by the reward engine and the episode coordinator
//!
//! 좌표계는 Y-up. 에이전트의 정면은 로컬 +Z, 오른쪽은 로컬 +X.

use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

pub type Vec3 = Vector3<f32>;

// ============================================================================
// Team
// ============================================================================

/// 팀 (에이전트 수명 동안 고정)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Blue = 0,
    Purple = 1,
}

impl Team {
    pub fn opponent(self) -> Self {
        match self {
            Team::Blue => Team::Purple,
            Team::Purple => Team::Blue,
        }
    }

    /// 자기 골대 태그
    pub fn own_goal_tag(self) -> SceneTag {
        match self {
            Team::Blue => SceneTag::BlueGoal,
            Team::Purple => SceneTag::PurpleGoal,
        }
    }

    /// 상대 골대 태그
    pub fn opposing_goal_tag(self) -> SceneTag {
        self.opponent().own_goal_tag()
    }

    /// 리셋 시 회전 부호 (양 팀이 서로 마주 보도록)
    pub fn rot_sign(self) -> f32 {
        match self {
            Team::Blue => 1.0,
            Team::Purple => -1.0,
        }
    }
}

// ============================================================================
// Position (Role)
// ============================================================================

/// 에이전트 포지션
///
/// 존재 보상 방향과 거리 shaping 적용 여부를 결정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Position {
    Striker,
    Goalie,
    #[default]
    Generic,
}

impl Position {
    /// (lateral, forward) 이동 속도 배율
    pub fn speeds(self) -> (f32, f32) {
        match self {
            Position::Goalie => (1.0, 1.0),
            Position::Striker => (0.3, 1.3),
            Position::Generic => (0.3, 1.0),
        }
    }
}

// ============================================================================
// Scene handles
// ============================================================================

/// 물리 월드 바디 핸들 (물리 협력자가 발급)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyHandle(pub u32);

/// 로스터 내 에이전트 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub u32);

/// 씬 조회용 의미 태그
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneTag {
    Ball,
    BlueGoal,
    PurpleGoal,
}

// ============================================================================
// Pose
// ============================================================================

/// 위치 + 방향
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: UnitQuaternion<f32>,
}

impl Pose {
    pub fn new(position: Vec3, rotation: UnitQuaternion<f32>) -> Self {
        Self { position, rotation }
    }

    pub fn at(position: Vec3) -> Self {
        Self::new(position, UnitQuaternion::identity())
    }

    /// Y축 기준 yaw(도)만 가진 포즈
    pub fn with_yaw(position: Vec3, yaw_degrees: f32) -> Self {
        Self::new(position, yaw_rotation(yaw_degrees))
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::z()
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::x()
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::y()
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::at(Vec3::zeros())
    }
}

/// Y축 회전 (도 단위). +90°는 정면(+Z)을 +X로 돌린다.
pub fn yaw_rotation(yaw_degrees: f32) -> UnitQuaternion<f32> {
    UnitQuaternion::from_axis_angle(&Vector3::y_axis(), yaw_degrees.to_radians())
}

/// 정규화, 길이가 0에 가까우면 영벡터
pub fn normalize_or_zero(v: Vec3) -> Vec3 {
    v.try_normalize(f32::EPSILON).unwrap_or_else(Vec3::zeros)
}

pub fn distance(a: &Vec3, b: &Vec3) -> f32 {
    (a - b).norm()
}

// ============================================================================
// Tests
// ============================================================================
