//! Discrete action decoding
//!
//! 3개의 독립 축 (forward/back, strafe, rotate), 각 인덱스 {0, 1, 2}.

use serde::{Deserialize, Serialize};

use crate::engine::types::{Pose, Position, Vec3};

/// 단일 축 입력
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisInput {
    #[default]
    Neutral,
    /// 인덱스 1
    Positive,
    /// 인덱스 2
    Negative,
}

impl AxisInput {
    /// 0/1/2 외의 값은 입력 없음으로 취급
    pub fn from_index(index: i32) -> Self {
        match index {
            1 => AxisInput::Positive,
            2 => AxisInput::Negative,
            _ => AxisInput::Neutral,
        }
    }

    pub fn index(self) -> i32 {
        match self {
            AxisInput::Neutral => 0,
            AxisInput::Positive => 1,
            AxisInput::Negative => 2,
        }
    }
}

/// 한 틱의 이산 액션
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct DiscreteActions {
    pub forward: AxisInput,
    pub lateral: AxisInput,
    pub rotate: AxisInput,
}

impl DiscreteActions {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn from_indices(indices: [i32; 3]) -> Self {
        Self {
            forward: AxisInput::from_index(indices[0]),
            lateral: AxisInput::from_index(indices[1]),
            rotate: AxisInput::from_index(indices[2]),
        }
    }

    pub fn to_indices(self) -> [i32; 3] {
        [self.forward.index(), self.lateral.index(), self.rotate.index()]
    }
}

impl From<[i32; 3]> for DiscreteActions {
    fn from(indices: [i32; 3]) -> Self {
        Self::from_indices(indices)
    }
}

/// 액션 → 이동 의도
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementIntent {
    /// 이동 방향 (속도 배율 포함, run speed 미포함)
    pub direction: Vec3,
    /// 회전 축 (영벡터면 회전 없음)
    pub rotation_axis: Vec3,
    /// 이번 틱 킥 파워 (전진 입력 시 1)
    pub kick_power: f32,
}

impl MovementIntent {
    /// 액션 해석
    ///
    /// strafe 입력은 전후 이동 벡터를 더하지 않고 대체한다.
    pub fn from_actions(actions: DiscreteActions, pose: &Pose, position: Position) -> Self {
        let (lateral_speed, forward_speed) = position.speeds();
        let mut direction = Vec3::zeros();
        let mut kick_power = 0.0;

        match actions.forward {
            AxisInput::Positive => {
                direction = pose.forward() * forward_speed;
                kick_power = 1.0;
            }
            AxisInput::Negative => direction = pose.forward() * -forward_speed,
            AxisInput::Neutral => {}
        }

        match actions.lateral {
            AxisInput::Positive => direction = pose.right() * lateral_speed,
            AxisInput::Negative => direction = pose.right() * -lateral_speed,
            AxisInput::Neutral => {}
        }

        let rotation_axis = match actions.rotate {
            AxisInput::Positive => pose.up() * -1.0,
            AxisInput::Negative => pose.up(),
            AxisInput::Neutral => Vec3::zeros(),
        };

        Self { direction, rotation_axis, kick_power }
    }
}
