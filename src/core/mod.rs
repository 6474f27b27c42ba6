//! 한글 음절 분해 코어

pub mod jamo;
pub mod unicode;

pub use jamo::{decompose_str, jamo_len, jamo_role, JamoRole};
pub use unicode::{decompose, is_hangul_str, is_hangul_syllable, to_compatibility_jamo};
