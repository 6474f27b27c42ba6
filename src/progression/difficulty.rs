//! 난이도별 경험치 배율

use std::fmt;

use serde::{Deserialize, Serialize};

/// 게임 난이도
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 배율 1.0
    Easy,
    /// 배율 1.5
    #[default]
    Normal,
    /// 배율 2.0
    Hard,
}

impl Difficulty {
    /// 난이도 태그 해석
    /// 알 수 없는 태그는 Normal
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "easy" => Difficulty::Easy,
            "normal" => Difficulty::Normal,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Normal,
        }
    }

    /// 난이도 태그
    pub fn tag(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    /// 경험치 배율
    pub fn multiplier(&self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Normal => 1.5,
            Difficulty::Hard => 2.0,
        }
    }
}

impl From<&str> for Difficulty {
    fn from(tag: &str) -> Self {
        Difficulty::from_tag(tag)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// 난이도 배율을 적용한 획득 경험치
///
/// 음수나 NaN 원점수는 0으로 취급한다.
///
/// # Examples
/// ```
/// use taja::{calculate_game_xp, Difficulty};
/// assert_eq!(calculate_game_xp(100.0, Difficulty::Hard), 200);
/// assert_eq!(calculate_game_xp(100.0, "unknown-tag".into()), 150);
/// ```
pub fn calculate_game_xp(raw_xp: f64, difficulty: Difficulty) -> u64 {
    // f64::max는 NaN이 아닌 쪽을 반환
    let raw = raw_xp.max(0.0);
    (raw * difficulty.multiplier()).round() as u64
}
