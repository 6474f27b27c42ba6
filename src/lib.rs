pub mod config;
pub mod core;
pub mod profile;
pub mod progression;
pub mod scoring;

pub use crate::core::{decompose, decompose_str, is_hangul_syllable, to_compatibility_jamo};
pub use progression::{
    calculate_game_xp, get_level, get_xp_progress, Difficulty, Experience, XpAward, XpProgress,
};
pub use scoring::{
    calculate_accuracy, compare_jamo, count_keystrokes, edit_distance, JamoMark, RoundSummary,
};
