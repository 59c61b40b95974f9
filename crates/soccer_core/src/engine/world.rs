//! Physics/engine collaborator interface
//!
//! 강체 적분, 충돌 감지, 트랜스폼 갱신은 모두 외부 엔진 책임.
//! 코어는 아래 프리미티브만 사용한다.

use serde::{Deserialize, Serialize};

use crate::engine::types::{BodyHandle, Pose, SceneTag, Vec3};

/// 힘 적용 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceMode {
    /// 연속 힘 (질량, dt 반영)
    Force,
    /// 순간 충격량 (질량 반영)
    Impulse,
    /// 순간 속도 변화 (질량 무시)
    VelocityChange,
}

/// 충돌 접촉
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// 충돌 상대 바디
    pub other: BodyHandle,
    /// 첫 번째 접촉점 (월드 좌표)
    pub point: Vec3,
}

/// 물리 월드
pub trait PhysicsWorld {
    /// 바디 포즈 (없으면 None - 아직 씬이 준비되지 않음)
    fn pose(&self, body: BodyHandle) -> Option<Pose>;

    /// 태그로 바디 조회
    fn find_with_tag(&self, tag: SceneTag) -> Option<BodyHandle>;

    /// 바디의 태그
    fn tag_of(&self, body: BodyHandle) -> Option<SceneTag>;

    fn add_force(&mut self, body: BodyHandle, force: Vec3, mode: ForceMode);

    /// 월드 축 기준 회전 (도)
    fn rotate(&mut self, body: BodyHandle, axis: Vec3, degrees: f32);

    fn set_pose(&mut self, body: BodyHandle, pose: Pose);

    /// 선속도/각속도 0
    fn zero_velocity(&mut self, body: BodyHandle);

    fn position(&self, body: BodyHandle) -> Option<Vec3> {
        self.pose(body).map(|pose| pose.position)
    }

    /// 태그 조회 + 위치
    fn find_position(&self, tag: SceneTag) -> Option<(BodyHandle, Vec3)> {
        let handle = self.find_with_tag(tag)?;
        self.position(handle).map(|pos| (handle, pos))
    }
}
