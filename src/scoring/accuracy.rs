//! 자모 단위 정확도 계산
//!
//! 목표 문장과 입력을 자모 시퀀스로 분해한 뒤 비교합니다.
//! 한 음절에서 종성 하나만 틀려도 부분 점수를 받을 수 있습니다.

use serde::{Deserialize, Serialize};

use super::distance::edit_distance;
use crate::core::jamo::decompose_str;

/// 목표 자모 한 칸의 입력 상태 (실시간 하이라이트용)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JamoMark {
    /// 입력 자모가 일치
    Correct,
    /// 입력했지만 불일치
    Incorrect,
    /// 아직 입력하지 않음
    Pending,
}

/// 입력의 정확도 (0~100)
///
/// - 입력이 비어 있으면 0
/// - 목표 길이를 넘는 입력 자모는 잘라낸 뒤 편집 거리를 계산
///
/// # Examples
/// ```
/// use taja::calculate_accuracy;
/// assert_eq!(calculate_accuracy("가나", "가나"), 100);
/// assert_eq!(calculate_accuracy("가나", "가"), 50);
/// assert_eq!(calculate_accuracy("가나", ""), 0);
/// ```
pub fn calculate_accuracy(target: &str, input: &str) -> u8 {
    if input.is_empty() {
        return 0;
    }

    let target_jamo = decompose_str(target);
    let input_jamo = decompose_str(input);

    let total = target_jamo.len();
    if total == 0 {
        // 0으로 나누지 않도록 별도 처리
        return if input_jamo.is_empty() { 100 } else { 0 };
    }

    let typed = &input_jamo[..input_jamo.len().min(total)];
    let distance = edit_distance(&target_jamo, typed);

    let ratio = (total as f64 - distance as f64) / total as f64;
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

/// 목표 자모 위치별 입력 상태
///
/// 반환 길이는 항상 목표 문장의 자모 길이와 같다.
/// 점수 계산이 아니므로 입력을 잘라내지 않는다.
pub fn compare_jamo(target: &str, input: &str) -> Vec<JamoMark> {
    let target_jamo = decompose_str(target);
    let input_jamo = decompose_str(input);

    target_jamo
        .iter()
        .enumerate()
        .map(|(i, expected)| match input_jamo.get(i) {
            None => JamoMark::Pending,
            Some(typed) if typed == expected => JamoMark::Correct,
            Some(_) => JamoMark::Incorrect,
        })
        .collect()
}

/// 상태별 개수: (일치, 불일치, 미입력)
pub fn count_marks(marks: &[JamoMark]) -> (usize, usize, usize) {
    marks.iter().fold((0, 0, 0), |(c, i, p), mark| match mark {
        JamoMark::Correct => (c + 1, i, p),
        JamoMark::Incorrect => (c, i + 1, p),
        JamoMark::Pending => (c, i, p + 1),
    })
}
