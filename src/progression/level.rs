//! 경험치 -> 레벨 곡선
//!
//! 레벨 k에서 k+1로 올라가는 데 k * 100 XP가 필요합니다.
//! 따라서 레벨 N에 도달하는 누적 XP는 100 * (1 + 2 + ... + (N-1)) = N(N-1)/2 * 100 입니다.

use serde::{Deserialize, Serialize};

/// 레벨당 XP 단위
const XP_PER_LEVEL_STEP: u64 = 100;

/// 레벨 진행도 (진행 바 표시용)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpProgress {
    /// 현재 레벨 안에서 모은 XP
    pub current: u64,
    /// 현재 레벨을 마치는 데 필요한 XP
    pub needed: u64,
    /// 진행률 (0~100)
    pub percent: u8,
}

/// 레벨 시작 시점의 누적 XP
/// 레벨 1 이하는 0
/// u64 범위를 넘으면 u64::MAX
pub fn xp_for_level(level: u32) -> u64 {
    checked_xp_for_level(level).unwrap_or(u64::MAX)
}

fn checked_xp_for_level(level: u32) -> Option<u64> {
    if level <= 1 {
        return Some(0);
    }
    let n = u64::from(level);
    (n.checked_mul(n - 1)? / 2).checked_mul(XP_PER_LEVEL_STEP)
}

/// 누적 XP에 해당하는 레벨 (항상 1 이상)
///
/// # Examples
/// ```
/// use taja::get_level;
/// assert_eq!(get_level(0), 1);
/// assert_eq!(get_level(99), 1);
/// assert_eq!(get_level(100), 2);
/// assert_eq!(get_level(300), 3);
/// ```
pub fn get_level(total_xp: u64) -> u32 {
    if total_xp == 0 {
        return 1;
    }

    // 삼각수 공식의 역함수: N = floor((1 + sqrt(1 + 8 * xp / 100)) / 2)
    let steps = total_xp as f64 / XP_PER_LEVEL_STEP as f64;
    let estimate = ((1.0 + (1.0 + 8.0 * steps).sqrt()) / 2.0).floor();
    let mut level = (estimate as u32).max(1);

    // 큰 값에서 부동소수점 오차 보정
    while let Some(next) = level.checked_add(1).and_then(checked_xp_for_level) {
        if next > total_xp {
            break;
        }
        level += 1;
    }
    while level > 1 && xp_for_level(level) > total_xp {
        level -= 1;
    }
    level
}

/// 현재 레벨 안에서의 진행도
pub fn get_xp_progress(total_xp: u64) -> XpProgress {
    let level = get_level(total_xp);
    let current = total_xp.saturating_sub(xp_for_level(level));
    let needed = u64::from(level) * XP_PER_LEVEL_STEP;

    let percent = (current as f64 / needed as f64 * 100.0)
        .round()
        .clamp(0.0, 100.0) as u8;

    XpProgress {
        current,
        needed,
        percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xp_for_level() {
        assert_eq!(xp_for_level(0), 0);
        assert_eq!(xp_for_level(1), 0);
        assert_eq!(xp_for_level(2), 100);
        assert_eq!(xp_for_level(3), 300);
        assert_eq!(xp_for_level(4), 600);
        assert_eq!(xp_for_level(10), 4500);
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(get_level(0), 1);
        assert_eq!(get_level(1), 1);
        assert_eq!(get_level(99), 1);
        assert_eq!(get_level(100), 2);
        assert_eq!(get_level(299), 2);
        assert_eq!(get_level(300), 3);
        assert_eq!(get_level(599), 3);
        assert_eq!(get_level(600), 4);
        assert_eq!(get_level(4500), 10);
    }

    #[test]
    fn test_level_matches_cumulative_cost() {
        for level in 1..200u32 {
            let start = xp_for_level(level);
            assert_eq!(get_level(start), level);
            assert_eq!(get_level(xp_for_level(level + 1) - 1), level);
        }
    }

    #[test]
    fn test_level_monotonic() {
        let mut previous = get_level(0);
        for xp in (0..50_000u64).step_by(7) {
            let level = get_level(xp);
            assert!(level >= previous);
            assert!(level >= 1);
            previous = level;
        }
    }

    #[test]
    fn test_level_large_xp() {
        let level = get_level(u64::MAX);
        assert!(level > 1);
        assert!(level >= get_level(u64::MAX / 2));
        assert!(xp_for_level(level) < u64::MAX);
        assert!(get_xp_progress(u64::MAX).percent <= 100);
    }

    #[test]
    fn test_xp_progress() {
        let progress = get_xp_progress(0);
        assert_eq!(
            progress,
            XpProgress {
                current: 0,
                needed: 100,
                percent: 0
            }
        );

        // 레벨 2 (100~299): 150 XP -> 50/200
        let progress = get_xp_progress(150);
        assert_eq!(progress.current, 50);
        assert_eq!(progress.needed, 200);
        assert_eq!(progress.percent, 25);

        let progress = get_xp_progress(99);
        assert_eq!(progress.current, 99);
        assert_eq!(progress.percent, 99);

        // 레벨업 직후는 0%
        let progress = get_xp_progress(300);
        assert_eq!(progress.current, 0);
        assert_eq!(progress.needed, 300);
        assert_eq!(progress.percent, 0);
    }

    #[test]
    fn test_xp_progress_bounds() {
        for xp in (0..20_000u64).step_by(13) {
            let progress = get_xp_progress(xp);
            assert!(progress.percent <= 100);
            assert!(progress.current < progress.needed);
        }
    }
}
