//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::progression::Difficulty;
use crate::scoring::KeystrokeWeights;

/// 설정 파일 경로를 덮어쓰는 환경 변수
pub const CONFIG_ENV: &str = "TAJA_CONFIG";

/// Taja 설정
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TajaConfig {
    /// 난이도를 지정하지 않았을 때 사용할 기본 난이도
    #[serde(default)]
    pub default_difficulty: Difficulty,
    /// 타수 추정 가중치
    #[serde(default)]
    pub keystroke_weights: KeystrokeWeights,
}

/// 설정 파일 경로: $TAJA_CONFIG 또는 ~/.config/taja/config.json
pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    data_dir().join("config.json")
}

/// 설정/프로필 디렉토리: ~/.config/taja
pub(crate) fn data_dir() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("taja")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> TajaConfig {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> TajaConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용 ({}): {}", path.display(), e);
            TajaConfig::default()
        }),
        Err(_) => {
            log::debug!("설정 파일 없음, 기본값 사용: {}", path.display());
            TajaConfig::default()
        }
    }
}

/// 설정 파일 저장
pub fn save_config(config: &TajaConfig) -> Result<(), String> {
    save_config_to(config, &config_path())
}

/// 지정한 경로에 설정 저장 (임시 파일에 쓴 뒤 교체)
pub fn save_config_to(config: &TajaConfig, path: &Path) -> Result<(), String> {
    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;

    let temp_file =
        NamedTempFile::new_in(parent_dir).map_err(|e| format!("임시 파일 생성 실패: {}", e))?;
    {
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer_pretty(&mut writer, config)
            .map_err(|e| format!("직렬화 실패: {}", e))?;
        writer
            .flush()
            .map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    }

    temp_file
        .persist(path)
        .map_err(|e| format!("설정 파일 저장 실패: {}", e.error))?;
    log::debug!("설정 저장: {}", path.display());
    Ok(())
}
