//! 타수 추정
//!
//! 한글 음절은 자모마다 키를 누르므로 글자 수보다 타수가 많습니다.
//! 자모 위치별 가중치와 음절당 조합 부담을 더해 실제 타수에 가깝게 추정합니다.

use serde::{Deserialize, Serialize};

use crate::core::jamo::{jamo_role, JamoRole};
use crate::core::unicode::{decompose, is_hangul_syllable};

/// 타수 가중치
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeystrokeWeights {
    /// 초성 가중치
    #[serde(default = "default_lead")]
    pub lead: f64,
    /// 중성 가중치
    #[serde(default = "default_vowel")]
    pub vowel: f64,
    /// 종성 가중치
    #[serde(default = "default_tail")]
    pub tail: f64,
    /// 음절당 조합 부담
    #[serde(default = "default_syllable_overhead")]
    pub syllable_overhead: f64,
}

fn default_lead() -> f64 {
    1.2
}

fn default_vowel() -> f64 {
    1.5
}

fn default_tail() -> f64 {
    1.3
}

fn default_syllable_overhead() -> f64 {
    0.5
}

impl Default for KeystrokeWeights {
    fn default() -> Self {
        Self {
            lead: default_lead(),
            vowel: default_vowel(),
            tail: default_tail(),
            syllable_overhead: default_syllable_overhead(),
        }
    }
}

impl KeystrokeWeights {
    /// 한글 음절 하나의 가중 타수
    fn syllable_cost(&self, c: char) -> f64 {
        let jamo_cost: f64 = decompose(c)
            .into_iter()
            .map(|jamo| match jamo_role(jamo) {
                JamoRole::Lead => self.lead,
                JamoRole::Vowel => self.vowel,
                JamoRole::Tail => self.tail,
                JamoRole::Other => 0.0,
            })
            .sum();
        jamo_cost + self.syllable_overhead
    }
}

/// 기본 가중치로 타수 추정
///
/// # Examples
/// ```
/// use taja::count_keystrokes;
/// assert_eq!(count_keystrokes(""), 0);
/// assert_eq!(count_keystrokes("hello"), 5);
/// assert_eq!(count_keystrokes("가"), 3); // 1.2 + 1.5 + 0.5
/// ```
pub fn count_keystrokes(text: &str) -> u32 {
    count_keystrokes_with(text, &KeystrokeWeights::default())
}

/// 지정한 가중치로 타수 추정
/// 공백과 한글이 아닌 문자는 1타
pub fn count_keystrokes_with(text: &str, weights: &KeystrokeWeights) -> u32 {
    let total: f64 = text
        .chars()
        .map(|c| {
            if is_hangul_syllable(c) {
                weights.syllable_cost(c)
            } else {
                1.0
            }
        })
        .sum();

    total.round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = KeystrokeWeights::default();
        assert!((weights.lead - 1.2).abs() < f64::EPSILON);
        assert!((weights.vowel - 1.5).abs() < f64::EPSILON);
        assert!((weights.tail - 1.3).abs() < f64::EPSILON);
        assert!((weights.syllable_overhead - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(count_keystrokes(""), 0);
    }

    #[test]
    fn test_plain_characters() {
        assert_eq!(count_keystrokes("abc"), 3);
        assert_eq!(count_keystrokes("a b"), 3);
        assert_eq!(count_keystrokes("123!?"), 5);
        // 한글 음절이 아닌 문자는 모두 1타
        assert_eq!(count_keystrokes("ㄱㅏ"), 2);
        assert_eq!(count_keystrokes("日本"), 2);
    }

    #[test]
    fn test_hangul_syllables() {
        // 가 = 1.2 + 1.5 + 0.5 = 3.2
        assert_eq!(count_keystrokes("가"), 3);
        // 가나 = 6.4
        assert_eq!(count_keystrokes("가나"), 6);
        // 안녕 = (1.2 + 1.5 + 1.3 + 0.5) * 2 = 9.0
        assert_eq!(count_keystrokes("안녕"), 9);
    }

    #[test]
    fn test_rounds_only_at_end() {
        // 음절마다 반올림하면 3 * 5 = 15, 합산 후 반올림하면 16
        assert_eq!(count_keystrokes("가나다라마"), 16);
    }

    #[test]
    fn test_mixed_text() {
        // hello(5) + 공백(1) + 가(3.2) = 9.2
        assert_eq!(count_keystrokes("hello 가"), 9);
    }

    #[test]
    fn test_hangul_heavier_than_characters() {
        let text = "안녕하세요";
        assert!(count_keystrokes(text) as usize > text.chars().count());
    }

    #[test]
    fn test_custom_weights() {
        let weights = KeystrokeWeights {
            lead: 1.0,
            vowel: 1.0,
            tail: 1.0,
            syllable_overhead: 0.0,
        };
        assert_eq!(count_keystrokes_with("각", &weights), 3);
        assert_eq!(count_keystrokes_with("가 a", &weights), 4);
    }

    #[test]
    fn test_weights_missing_fields() {
        let weights: KeystrokeWeights = serde_json::from_str(r#"{"tail": 2.0}"#).unwrap();
        assert!((weights.tail - 2.0).abs() < f64::EPSILON);
        assert!((weights.lead - 1.2).abs() < f64::EPSILON);
    }
}
