//! 자모 기반 타자 채점
//!
//! 입력 문자열을 목표 문장과 비교해 정확도와 속도를 계산합니다.
//!
//! # 개요
//!
//! 모든 채점은 한글 음절을 자모 단위로 분해한 뒤 이루어집니다:
//!
//! 1. **편집 거리**: 자모 시퀀스 간 레벤슈타인 거리
//! 2. **정확도**: 목표 자모 수 대비 거리로 0~100 점수
//! 3. **하이라이트**: 목표 자모 위치별 일치/불일치/미입력
//! 4. **타수**: 자모 위치별 가중치로 실제 키 입력 수 추정
//!
//! # 사용 예시
//!
//! ```
//! use taja::scoring::{calculate_accuracy, compare_jamo, count_keystrokes, JamoMark};
//!
//! assert_eq!(calculate_accuracy("안녕", "안녕"), 100);
//! assert_eq!(compare_jamo("가", "")[0], JamoMark::Pending);
//! assert_eq!(count_keystrokes("안녕"), 9);
//! ```
//!
//! 모든 함수는 순수 함수이며 키 입력마다 다시 호출해도 됩니다.

mod accuracy;
mod distance;
mod keystroke;
mod speed;

// 공개 인터페이스
pub use accuracy::{calculate_accuracy, compare_jamo, count_marks, JamoMark};
pub use distance::edit_distance;
pub use keystroke::{count_keystrokes, count_keystrokes_with, KeystrokeWeights};
pub use speed::{keystrokes_per_minute, RoundSummary};
