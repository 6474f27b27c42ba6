//! 경험치/레벨 진행 곡선
//!
//! 모든 게임이 공유하는 레벨 계산과 난이도별 경험치 배율입니다.
//!
//! ```
//! use taja::progression::{Difficulty, Experience};
//!
//! let mut exp = Experience::default();
//! let award = exp.award(50.0, Difficulty::Hard);
//! assert_eq!(award.gained, 100);
//! assert!(award.leveled_up);
//! assert_eq!(exp.level(), 2);
//! ```

mod difficulty;
mod experience;
mod level;

pub use difficulty::{calculate_game_xp, Difficulty};
pub use experience::{Experience, XpAward};
pub use level::{get_level, get_xp_progress, xp_for_level, XpProgress};
