//! 레벤슈타인 편집 거리
//!
//! 문자, 자모 등 값 비교가 가능한 토큰 시퀀스에 대해 동작합니다.
//! 삽입/삭제/치환 비용은 모두 1입니다.

/// 두 시퀀스 사이의 편집 거리
///
/// `a`를 `b`로 바꾸는 데 필요한 최소 삽입/삭제/치환 횟수.
/// 빈 시퀀스를 포함한 모든 입력에 대해 정의된다.
///
/// # Examples
/// ```
/// use taja::edit_distance;
/// assert_eq!(edit_distance(&["a"], &["a", "b"]), 1);
/// assert_eq!(edit_distance(&['k', 'i', 't'], &['s', 'i', 't']), 1);
/// ```
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // table[i-1][..] 행만 유지: prev[j] = table[i-1][j]
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, x) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, y) in b.iter().enumerate() {
            let cost = if x == y { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1) // 삭제
                .min(curr[j] + 1) // 삽입
                .min(prev[j] + cost); // 치환
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_basic_distance() {
        assert_eq!(edit_distance(&["a"], &["a", "b"]), 1);
        assert_eq!(edit_distance(&["a", "b"], &["a", "c"]), 1);
        assert_eq!(edit_distance(&chars("kitten"), &chars("sitting")), 3);
        assert_eq!(edit_distance(&chars("flaw"), &chars("lawn")), 2);
    }

    #[test]
    fn test_empty_sequences() {
        let empty: [char; 0] = [];
        assert_eq!(edit_distance(&empty, &empty), 0);
        assert_eq!(edit_distance(&empty, &chars("abc")), 3);
        assert_eq!(edit_distance(&chars("abcd"), &empty), 4);
    }

    #[test]
    fn test_identity_and_symmetry() {
        let samples = ["", "a", "가나다", "hello", "안녕하세요", "abcabc"];
        for a in samples {
            assert_eq!(edit_distance(&chars(a), &chars(a)), 0);
            for b in samples {
                let ab = edit_distance(&chars(a), &chars(b));
                let ba = edit_distance(&chars(b), &chars(a));
                assert_eq!(ab, ba, "{a} / {b}");
                if a != b {
                    assert!(ab > 0);
                }
            }
        }
    }

    #[test]
    fn test_triangle_inequality() {
        let samples = ["", "abc", "abd", "xbc", "가나", "가다"];
        for a in samples {
            for b in samples {
                for c in samples {
                    let ac = edit_distance(&chars(a), &chars(c));
                    let ab = edit_distance(&chars(a), &chars(b));
                    let bc = edit_distance(&chars(b), &chars(c));
                    assert!(ac <= ab + bc);
                }
            }
        }
    }

    #[test]
    fn test_bounded_by_longer_length() {
        assert_eq!(edit_distance(&chars("abc"), &chars("xyz")), 3);
        assert_eq!(edit_distance(&chars("ab"), &chars("xyzw")), 4);
    }
}
