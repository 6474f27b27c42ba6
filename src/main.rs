//! Taja - 한글 타자 연습 채점 도구

use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use taja::config::load_config;
use taja::core::decompose_str;
use taja::profile::{profile_path, record_round_at};
use taja::progression::{get_level, get_xp_progress, Difficulty, XpProgress};
use taja::scoring::{compare_jamo, count_keystrokes_with, JamoMark, RoundSummary};
use taja::to_compatibility_jamo;

#[derive(Parser, Debug)]
#[command(name = "taja")]
#[command(about = "한글 타자 연습 채점 도구")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 정확도/타수 요약
    Score {
        /// 목표 문장
        target: String,
        /// 입력 문장
        input: String,
        /// 경과 시간 (ms)
        #[arg(default_value_t = 0)]
        elapsed_ms: u64,
    },
    /// 자모별 일치 여부
    Marks {
        target: String,
        input: String,
    },
    /// 추정 타수
    Keys {
        text: String,
    },
    /// 누적 XP의 레벨과 진행도
    Level {
        total_xp: u64,
    },
    /// 라운드 결과를 채점하고 경험치를 지급한 뒤 프로필 저장
    Award {
        /// 원점수 (난이도 배율 적용 전)
        #[arg(allow_negative_numbers = true)]
        raw_xp: f64,
        target: String,
        input: String,
        #[arg(long, default_value_t = 0)]
        elapsed_ms: u64,
        /// 지정하지 않으면 설정 파일의 기본 난이도
        #[arg(long, value_enum)]
        difficulty: Option<Difficulty>,
    },
}

#[derive(Serialize)]
struct LevelReport {
    level: u32,
    progress: XpProgress,
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        log::error!("{}", e);
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), String> {
    let config = load_config();

    match command {
        Commands::Score {
            target,
            input,
            elapsed_ms,
        } => {
            let summary =
                RoundSummary::evaluate_with(&target, &input, elapsed_ms, &config.keystroke_weights);
            log::debug!("채점 결과: {:?}", summary);
            print_json(&summary)
        }
        Commands::Marks { target, input } => {
            let marks = compare_jamo(&target, &input);
            for (jamo, mark) in decompose_str(&target).into_iter().zip(marks) {
                let label = match mark {
                    JamoMark::Correct => "correct",
                    JamoMark::Incorrect => "incorrect",
                    JamoMark::Pending => "pending",
                };
                println!("{}\t{}", to_compatibility_jamo(jamo), label);
            }
            Ok(())
        }
        Commands::Keys { text } => {
            println!("{}", count_keystrokes_with(&text, &config.keystroke_weights));
            Ok(())
        }
        Commands::Level { total_xp } => print_json(&LevelReport {
            level: get_level(total_xp),
            progress: get_xp_progress(total_xp),
        }),
        Commands::Award {
            raw_xp,
            target,
            input,
            elapsed_ms,
            difficulty,
        } => {
            let summary =
                RoundSummary::evaluate_with(&target, &input, elapsed_ms, &config.keystroke_weights);
            let difficulty = difficulty.unwrap_or(config.default_difficulty);
            let award = record_round_at(&profile_path(), &summary, raw_xp, difficulty)
                .map_err(|e| e.to_string())?;
            print_json(&award)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| format!("직렬화 실패: {}", e))?;
    println!("{}", json);
    Ok(())
}
