pub mod bank;
pub mod logger;
pub mod models;
pub mod session;
pub mod timer;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use bank::{BankError, BankSummary, DEFAULT_BANK_ID, list_banks, load_bank};
pub use models::{AppState, ExamBank, Explanation, OptionItem, Phase, Question, ReviewEntry};
pub use session::{ExamSession, PASSING_SCORE, TOTAL_TIME_SECS, handle_exam_input};
pub use timer::ExamTimer;
pub use ui::{draw_exam, draw_finish_confirmation, draw_menu, draw_results};
pub use utils::{format_clock, truncate_string};
