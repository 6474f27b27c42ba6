//! 누적 경험치 상태
//!
//! 경험치 총량은 호출자가 소유하고 저장합니다.
//! 레벨 계산은 이 값을 인자로 받는 순수 함수로만 이루어집니다.

use serde::{Deserialize, Serialize};

use super::difficulty::{calculate_game_xp, Difficulty};
use super::level::{get_level, get_xp_progress, XpProgress};

/// 누적 경험치
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    /// 누적 XP
    #[serde(default)]
    pub total_xp: u64,
}

/// 한 라운드의 경험치 지급 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpAward {
    /// 획득 XP (난이도 배율 적용 후)
    pub gained: u64,
    /// 지급 전 레벨
    pub level_before: u32,
    /// 지급 후 레벨
    pub level_after: u32,
    /// 레벨업 여부
    pub leveled_up: bool,
}

impl Experience {
    pub fn new(total_xp: u64) -> Self {
        Self { total_xp }
    }

    /// 현재 레벨
    pub fn level(&self) -> u32 {
        get_level(self.total_xp)
    }

    /// 현재 레벨 진행도
    pub fn progress(&self) -> XpProgress {
        get_xp_progress(self.total_xp)
    }

    /// 원점수에 난이도 배율을 적용해 경험치 지급
    pub fn award(&mut self, raw_xp: f64, difficulty: Difficulty) -> XpAward {
        let level_before = self.level();
        let gained = calculate_game_xp(raw_xp, difficulty);
        self.total_xp = self.total_xp.saturating_add(gained);
        let level_after = self.level();

        XpAward {
            gained,
            level_before,
            level_after,
            leveled_up: level_after > level_before,
        }
    }
}
