//! 타자 속도와 라운드 요약

use serde::{Deserialize, Serialize};

use super::accuracy::{calculate_accuracy, compare_jamo, count_marks};
use super::keystroke::{count_keystrokes_with, KeystrokeWeights};

/// 분당 타수
///
/// 경과 시간이 0이면 0
pub fn keystrokes_per_minute(keystrokes: u32, elapsed_ms: u64) -> u32 {
    if elapsed_ms == 0 {
        return 0;
    }
    let minutes = elapsed_ms as f64 / 60_000.0;
    (keystrokes as f64 / minutes).round() as u32
}

/// 한 번의 입력 시도에 대한 요약
///
/// 정확도와 속도는 서로 독립적으로 계산된다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// 정확도 (0~100)
    pub accuracy: u8,
    /// 일치한 목표 자모 수
    pub correct: usize,
    /// 불일치한 목표 자모 수
    pub incorrect: usize,
    /// 아직 입력하지 않은 목표 자모 수
    pub pending: usize,
    /// 입력 문자열의 추정 타수
    pub keystrokes: u32,
    /// 분당 타수
    pub keystrokes_per_minute: u32,
    /// 경과 시간 (ms)
    pub elapsed_ms: u64,
}

impl RoundSummary {
    /// 기본 타수 가중치로 요약 계산
    pub fn evaluate(target: &str, input: &str, elapsed_ms: u64) -> Self {
        Self::evaluate_with(target, input, elapsed_ms, &KeystrokeWeights::default())
    }

    /// 지정한 타수 가중치로 요약 계산
    pub fn evaluate_with(
        target: &str,
        input: &str,
        elapsed_ms: u64,
        weights: &KeystrokeWeights,
    ) -> Self {
        let (correct, incorrect, pending) = count_marks(&compare_jamo(target, input));
        let keystrokes = count_keystrokes_with(input, weights);

        Self {
            accuracy: calculate_accuracy(target, input),
            correct,
            incorrect,
            pending,
            keystrokes,
            keystrokes_per_minute: keystrokes_per_minute(keystrokes, elapsed_ms),
            elapsed_ms,
        }
    }

    /// 목표 자모를 모두 입력했는지
    pub fn is_complete(&self) -> bool {
        self.pending == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keystrokes_per_minute() {
        assert_eq!(keystrokes_per_minute(300, 60_000), 300);
        assert_eq!(keystrokes_per_minute(150, 30_000), 300);
        assert_eq!(keystrokes_per_minute(10, 4_000), 150);
    }

    #[test]
    fn test_keystrokes_per_minute_zero_time() {
        assert_eq!(keystrokes_per_minute(100, 0), 0);
        assert_eq!(keystrokes_per_minute(0, 1_000), 0);
    }

    #[test]
    fn test_evaluate_complete_round() {
        let summary = RoundSummary::evaluate("안녕", "안녕", 6_000);
        assert_eq!(summary.accuracy, 100);
        assert_eq!(summary.correct, 6);
        assert_eq!(summary.incorrect, 0);
        assert_eq!(summary.pending, 0);
        assert_eq!(summary.keystrokes, 9);
        assert_eq!(summary.keystrokes_per_minute, 90);
        assert!(summary.is_complete());
    }

    #[test]
    fn test_evaluate_partial_round() {
        let summary = RoundSummary::evaluate("가나", "가", 1_000);
        assert_eq!(summary.accuracy, 50);
        assert_eq!(summary.correct, 2);
        assert_eq!(summary.pending, 2);
        assert!(!summary.is_complete());
    }

    #[test]
    fn test_evaluate_empty_input() {
        let summary = RoundSummary::evaluate("가나", "", 0);
        assert_eq!(summary.accuracy, 0);
        assert_eq!(summary.keystrokes, 0);
        assert_eq!(summary.keystrokes_per_minute, 0);
        assert_eq!(summary.pending, 4);
    }

    #[test]
    fn test_summary_json() {
        let summary = RoundSummary::evaluate("ab", "ab", 1_000);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["accuracy"], 100);
        assert_eq!(json["keystrokes_per_minute"], 120);
    }
}
