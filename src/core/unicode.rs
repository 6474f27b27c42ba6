//! 유니코드 한글 음절 분류/분해 유틸리티

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 첫가끝 자모 시작 코드포인트
const CHOSEONG_BASE: u32 = 0x1100;
const JUNGSEONG_BASE: u32 = 0x1161;
/// 종성 인덱스 0은 "종성 없음"이므로 실제 종성은 0x11A8부터
const JONGSEONG_BASE: u32 = 0x11A7;

/// 문자가 완성형 한글 음절(가-힣)인지 확인
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 문자열에 완성형 한글 음절이 하나라도 있는지 확인
pub fn is_hangul_str(text: &str) -> bool {
    text.chars().any(is_hangul_syllable)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_hangul_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 문자 하나를 자모 시퀀스로 분해
///
/// 완성형 한글은 첫가끝 자모 `[초성, 중성]` 또는 `[초성, 중성, 종성]`으로,
/// 그 외 문자는 `[c]` 그대로 반환한다. 혼합 문자열에 일괄 적용할 수 있다.
pub fn decompose(c: char) -> Vec<char> {
    let Some((cho, jung, jong)) = decompose_syllable(c) else {
        return vec![c];
    };

    let mut jamo = Vec::with_capacity(3);
    jamo.extend(char::from_u32(CHOSEONG_BASE + cho));
    jamo.extend(char::from_u32(JUNGSEONG_BASE + jung));
    if jong != 0 {
        jamo.extend(char::from_u32(JONGSEONG_BASE + jong));
    }
    jamo
}

/// 첫가끝 자모를 화면 표시용 호환 자모로 변환
/// 자모가 아니면 그대로 반환
pub fn to_compatibility_jamo(c: char) -> char {
    let code = c as u32;
    let compat = if (CHOSEONG_BASE..CHOSEONG_BASE + CHOSEONG_COUNT).contains(&code) {
        choseong_to_jamo_code(code - CHOSEONG_BASE)
    } else if (JUNGSEONG_BASE..JUNGSEONG_BASE + JUNGSEONG_COUNT).contains(&code) {
        // 호환용 모음 자모: ㅏ(0x314F) ~ ㅣ(0x3163), 중성 순서와 동일
        Some(0x314F + (code - JUNGSEONG_BASE))
    } else if (JONGSEONG_BASE + 1..JONGSEONG_BASE + JONGSEONG_COUNT).contains(&code) {
        jongseong_to_jamo_code(code - JONGSEONG_BASE)
    } else {
        None
    };
    compat.and_then(char::from_u32).unwrap_or(c)
}

/// 초성 인덱스 -> 호환 자모 코드 (초성 순서와 다르므로 직접 매핑)
fn choseong_to_jamo_code(cho: u32) -> Option<u32> {
    #[rustfmt::skip]
    const JAMO_CODES: [u32; 19] = [
        0x3131, // ㄱ
        0x3132, // ㄲ
        0x3134, // ㄴ
        0x3137, // ㄷ
        0x3138, // ㄸ
        0x3139, // ㄹ
        0x3141, // ㅁ
        0x3142, // ㅂ
        0x3143, // ㅃ
        0x3145, // ㅅ
        0x3146, // ㅆ
        0x3147, // ㅇ
        0x3148, // ㅈ
        0x3149, // ㅉ
        0x314A, // ㅊ
        0x314B, // ㅋ
        0x314C, // ㅌ
        0x314D, // ㅍ
        0x314E, // ㅎ
    ];
    JAMO_CODES.get(cho as usize).copied()
}

/// 종성 인덱스(1~27) -> 호환 자모 코드
fn jongseong_to_jamo_code(jong: u32) -> Option<u32> {
    #[rustfmt::skip]
    const JAMO_CODES: [u32; 27] = [
        0x3131, // ㄱ
        0x3132, // ㄲ
        0x3133, // ㄳ
        0x3134, // ㄴ
        0x3135, // ㄵ
        0x3136, // ㄶ
        0x3137, // ㄷ
        0x3139, // ㄹ
        0x313A, // ㄺ
        0x313B, // ㄻ
        0x313C, // ㄼ
        0x313D, // ㄽ
        0x313E, // ㄾ
        0x313F, // ㄿ
        0x3140, // ㅀ
        0x3141, // ㅁ
        0x3142, // ㅂ
        0x3144, // ㅄ
        0x3145, // ㅅ
        0x3146, // ㅆ
        0x3147, // ㅇ
        0x3148, // ㅈ
        0x314A, // ㅊ
        0x314B, // ㅋ
        0x314C, // ㅌ
        0x314D, // ㅍ
        0x314E, // ㅎ
    ];
    let index = jong.checked_sub(1)?;
    JAMO_CODES.get(index as usize).copied()
}
