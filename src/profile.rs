//! 로컬 프로필 저장 (누적 경험치, 플레이 기록)

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::progression::{Difficulty, Experience, XpAward};
use crate::scoring::RoundSummary;

/// 프로필 로드/저장 에러
#[derive(Debug)]
pub enum ProfileError {
    /// 파일 읽기/쓰기 실패
    IoError(std::io::Error),
    /// JSON 파싱/직렬화 실패
    ParseError(String),
}

impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileError::IoError(e) => write!(f, "프로필 파일 오류: {}", e),
            ProfileError::ParseError(s) => write!(f, "프로필 JSON 오류: {}", s),
        }
    }
}

impl std::error::Error for ProfileError {}

impl From<std::io::Error> for ProfileError {
    fn from(e: std::io::Error) -> Self {
        ProfileError::IoError(e)
    }
}

/// 플레이어 프로필
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub experience: Experience,
    /// 완료한 라운드 수
    #[serde(default)]
    pub rounds_played: u64,
    /// 최고 정확도
    #[serde(default)]
    pub best_accuracy: u8,
}

impl Profile {
    /// 라운드 결과를 기록하고 경험치 지급
    pub fn record_round(
        &mut self,
        summary: &RoundSummary,
        raw_xp: f64,
        difficulty: Difficulty,
    ) -> XpAward {
        self.rounds_played = self.rounds_played.saturating_add(1);
        self.best_accuracy = self.best_accuracy.max(summary.accuracy);

        let award = self.experience.award(raw_xp, difficulty);
        if award.leveled_up {
            log::info!("레벨업: {} -> {}", award.level_before, award.level_after);
        }
        award
    }
}

/// 프로필 파일 경로: ~/.config/taja/profile.json
pub fn profile_path() -> PathBuf {
    crate::config::data_dir().join("profile.json")
}

/// 프로필 로드 (파일이 없으면 빈 프로필)
pub fn load_profile(path: &Path) -> Result<Profile, ProfileError> {
    if !path.exists() {
        log::debug!("프로필 없음, 새로 시작: {}", path.display());
        return Ok(Profile::default());
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| ProfileError::ParseError(e.to_string()))
}

/// 프로필 저장
///
/// 같은 디렉토리의 임시 파일에 쓴 뒤 교체하므로
/// 쓰는 도중 중단되어도 기존 프로필은 그대로 남는다.
pub fn save_profile(profile: &Profile, path: &Path) -> Result<(), ProfileError> {
    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer_pretty(&mut writer, profile)
            .map_err(|e| ProfileError::ParseError(e.to_string()))?;
        writer.flush()?;
    }

    temp_file
        .persist(path)
        .map_err(|e| ProfileError::IoError(e.error))?;
    log::debug!("프로필 저장: {}", path.display());
    Ok(())
}

/// 프로필을 불러와 라운드를 기록하고 다시 저장
pub fn record_round_at(
    path: &Path,
    summary: &RoundSummary,
    raw_xp: f64,
    difficulty: Difficulty,
) -> Result<XpAward, ProfileError> {
    let mut profile = load_profile(path)?;
    let award = profile.record_round(summary, raw_xp, difficulty);
    save_profile(&profile, path)?;
    Ok(award)
}
