//! 문자열 단위 자모 시퀀스

use crate::core::unicode::decompose;

/// 자모 시퀀스 안에서의 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JamoRole {
    /// 초성
    Lead,
    /// 중성
    Vowel,
    /// 종성
    Tail,
    /// 한글 자모가 아닌 문자 (영문, 숫자, 공백 등)
    Other,
}

/// 첫가끝 자모의 역할 판별
pub fn jamo_role(c: char) -> JamoRole {
    match c as u32 {
        0x1100..=0x1112 => JamoRole::Lead,
        0x1161..=0x1175 => JamoRole::Vowel,
        0x11A8..=0x11C2 => JamoRole::Tail,
        _ => JamoRole::Other,
    }
}

/// 문자열 전체를 평탄한 자모 시퀀스로 분해
///
/// 각 문자의 분해 결과를 순서대로 이어 붙인다.
/// ```
/// use taja::decompose_str;
/// assert_eq!(decompose_str("가a").len(), 3);
/// ```
pub fn decompose_str(text: &str) -> Vec<char> {
    let mut jamo = Vec::with_capacity(text.len());
    for c in text.chars() {
        jamo.extend(decompose(c));
    }
    jamo
}

/// 자모 단위 길이
pub fn jamo_len(text: &str) -> usize {
    text.chars().map(|c| decompose(c).len()).sum()
}
