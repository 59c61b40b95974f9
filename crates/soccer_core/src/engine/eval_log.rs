//! Evaluation log - append-only match result file
//!
//! 추론 모드(학습된 고정 모델로 구동)에서만 활성화.
//! 매치 종료마다 결과 코드 한 줄 (0 무승부, 1 Blue 승, 2 Purple 승).
//!
//! I/O 실패는 `record`에서 로깅 후 삼킨다. 틱/리셋 흐름을 끊지 않는다.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::engine::reward::MatchOutcome;
use crate::error::EvalLogError;

#[derive(Debug, Clone)]
pub struct EvaluationLog {
    path: PathBuf,
}

impl EvaluationLog {
    /// 로그 파일 생성 (기존 내용 비움)
    pub fn create(path: impl AsRef<Path>) -> Result<Self, EvalLogError> {
        let path = path.as_ref().to_path_buf();
        File::create(&path)
            .map_err(|source| EvalLogError::Open { path: path.display().to_string(), source })?;
        info!(path = %path.display(), "evaluation log initialized");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, outcome: MatchOutcome) -> Result<(), EvalLogError> {
        let append_err =
            |source| EvalLogError::Append { path: self.path.display().to_string(), source };

        let mut file = OpenOptions::new().append(true).create(true).open(&self.path).map_err(append_err)?;
        writeln!(file, "{}", outcome.code()).map_err(append_err)
    }

    /// 결과 기록 (실패 시 로깅만)
    pub fn record(&self, outcome: MatchOutcome) {
        if let Err(err) = self.append(outcome) {
            error!(%err, "failed to log match result");
        }
    }
}
