use crate::bank::{self, BankError};
use crate::logger;
use crate::models::{AppState, ExamBank, Phase, Question, ReviewEntry};
use crossterm::event::KeyEvent;

/// Full exam duration in seconds (120 minutes).
pub const TOTAL_TIME_SECS: u32 = 7200;

/// Minimum score (percent) to pass.
pub const PASSING_SCORE: u32 = 70;

/// The exam session state machine: Selecting -> InProgress -> Finished.
///
/// All mutation happens through the operations below; each one guards on the
/// phase and degrades to a no-op when invoked in a phase that does not permit
/// it. `answers` and `flagged` are always index-aligned with the bound bank's
/// question list.
#[derive(Debug)]
pub struct ExamSession {
    bank: Option<ExamBank>,
    answers: Vec<Option<String>>,
    flagged: Vec<bool>,
    current_index: usize,
    time_remaining: u32,
    phase: Phase,
    score: Option<u32>,
}

impl ExamSession {
    /// A fresh session: phase Selecting, no bank bound.
    pub fn new() -> Self {
        Self {
            bank: None,
            answers: Vec::new(),
            flagged: Vec::new(),
            current_index: 0,
            time_remaining: TOTAL_TIME_SECS,
            phase: Phase::Selecting,
            score: None,
        }
    }

    /// Looks up a bank by id and binds it. Unknown ids fall back to the
    /// default bank inside the provider, so the only error is the terminal
    /// "no usable bank at all" case. Valid only while Selecting; re-invocation
    /// replaces the bank and resets answers, flags and position.
    pub fn select_bank(&mut self, id: &str) -> Result<(), BankError> {
        if self.phase != Phase::Selecting {
            logger::log(&format!("select_bank('{id}') ignored outside Selecting"));
            return Ok(());
        }
        let bank = bank::load_bank(id)?;
        self.set_bank(bank);
        Ok(())
    }

    /// Binds an already-loaded bank. Same contract as `select_bank`.
    pub fn set_bank(&mut self, bank: ExamBank) {
        if self.phase != Phase::Selecting {
            return;
        }
        self.answers = vec![None; bank.len()];
        self.flagged = vec![false; bank.len()];
        self.current_index = 0;
        self.bank = Some(bank);
    }

    /// Selecting -> InProgress. Resets the countdown to the full total.
    /// No-op without a bound bank or outside Selecting.
    pub fn start(&mut self) {
        if self.phase != Phase::Selecting || self.bank.is_none() {
            return;
        }
        self.time_remaining = TOTAL_TIME_SECS;
        self.phase = Phase::InProgress;
    }

    /// Records `label` as the answer for the current question, overwriting
    /// any prior choice. Labels that do not name one of the current
    /// question's options are rejected without mutation.
    pub fn select_answer(&mut self, label: &str) {
        if self.phase != Phase::InProgress {
            return;
        }
        let Some(question) = self.current_question() else {
            return;
        };
        if !question.options.iter().any(|o| o.label == label) {
            return;
        }
        self.answers[self.current_index] = Some(label.to_string());
    }

    /// Jumps to `index`. Out-of-range indices are rejected as a no-op rather
    /// than clamped, so caller bugs stay visible.
    pub fn go_to(&mut self, index: usize) {
        if self.phase != Phase::InProgress {
            return;
        }
        if index < self.question_count() {
            self.current_index = index;
        }
    }

    /// Moves forward one question; no-op at the last question.
    pub fn next(&mut self) {
        if self.phase != Phase::InProgress {
            return;
        }
        if self.current_index + 1 < self.question_count() {
            self.current_index += 1;
        }
    }

    /// Moves back one question; no-op at the first question.
    pub fn previous(&mut self) {
        if self.phase != Phase::InProgress {
            return;
        }
        if self.current_index > 0 {
            self.current_index -= 1;
        }
    }

    /// Flips the advisory flag on the current question. No scoring effect.
    pub fn toggle_flag(&mut self) {
        if self.phase != Phase::InProgress {
            return;
        }
        self.flagged[self.current_index] = !self.flagged[self.current_index];
    }

    /// One second elapsed. Floored at zero; reaching zero finishes the exam
    /// with the same contract as a manual finish. A tick that was already in
    /// flight when the exam ended is absorbed here.
    pub fn tick(&mut self) {
        if self.phase != Phase::InProgress {
            return;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.finish();
        }
    }

    /// InProgress -> Finished. Scores the attempt: percentage of questions
    /// whose recorded answer equals the answer key, rounded to the nearest
    /// integer. An unanswered question never counts as correct.
    pub fn finish(&mut self) {
        if self.phase != Phase::InProgress {
            return;
        }
        let total = self.question_count();
        let correct = self.correct_count();
        let score = if total == 0 {
            0
        } else {
            ((correct as f64 / total as f64) * 100.0).round() as u32
        };
        self.score = Some(score);
        self.phase = Phase::Finished;
        logger::log(&format!("exam finished: {correct}/{total} -> {score}%"));
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn bank(&self) -> Option<&ExamBank> {
        self.bank.as_ref()
    }

    pub fn question_count(&self) -> usize {
        self.bank.as_ref().map_or(0, |b| b.len())
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.bank.as_ref()?.questions.get(self.current_index)
    }

    pub fn answer_at(&self, index: usize) -> Option<&str> {
        self.answers.get(index)?.as_deref()
    }

    pub fn is_flagged(&self, index: usize) -> bool {
        self.flagged.get(index).copied().unwrap_or(false)
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Count of answered questions, independent of answer order or
    /// overwrites.
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// Progress is navigation position, not answered fraction. The answered
    /// counter next to the gauge shows completion.
    pub fn progress_percent(&self) -> f64 {
        let total = self.question_count();
        if total == 0 {
            0.0
        } else {
            (self.current_index as f64 / total as f64) * 100.0
        }
    }

    /// Defined only once Finished.
    pub fn score(&self) -> Option<u32> {
        self.score
    }

    pub fn is_passed(&self) -> bool {
        self.score.is_some_and(|s| s >= PASSING_SCORE)
    }

    /// Per-question comparison of chosen vs. correct option. Only produced
    /// once the session is Finished.
    pub fn review(&self) -> Option<Vec<ReviewEntry>> {
        if self.phase != Phase::Finished {
            return None;
        }
        let bank = self.bank.as_ref()?;
        Some(
            bank.questions
                .iter()
                .zip(&self.answers)
                .map(|(q, chosen)| ReviewEntry {
                    chosen: chosen.clone(),
                    correct: q.answer.clone(),
                    is_correct: chosen.as_deref() == Some(q.answer.as_str()),
                })
                .collect(),
        )
    }

    fn correct_count(&self) -> usize {
        let Some(bank) = &self.bank else {
            return 0;
        };
        bank.questions
            .iter()
            .zip(&self.answers)
            .filter(|(q, a)| a.as_deref() == Some(q.answer.as_str()))
            .count()
    }
}

impl Default for ExamSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Key dispatch for the exam screen. Letters pick an option, arrows and
/// Enter navigate, `f` flags, Esc asks for confirmation before finishing.
pub fn handle_exam_input(session: &mut ExamSession, key: KeyEvent, app_state: &mut AppState) {
    use crossterm::event::KeyCode;

    match key.code {
        KeyCode::Char(c @ ('a'..='e' | 'A'..='E')) => {
            session.select_answer(&c.to_ascii_uppercase().to_string());
        }
        KeyCode::Left | KeyCode::Up => {
            session.previous();
        }
        KeyCode::Right | KeyCode::Down => {
            session.next();
        }
        KeyCode::Enter => {
            if session.current_index() + 1 == session.question_count() {
                *app_state = AppState::FinishConfirm;
            } else {
                session.next();
            }
        }
        KeyCode::Home => {
            session.go_to(0);
        }
        KeyCode::End => {
            let count = session.question_count();
            if count > 0 {
                session.go_to(count - 1);
            }
        }
        KeyCode::PageDown => {
            let last = session.question_count().saturating_sub(1);
            session.go_to((session.current_index() + 10).min(last));
        }
        KeyCode::PageUp => {
            session.go_to(session.current_index().saturating_sub(10));
        }
        KeyCode::Char('f') => {
            session.toggle_flag();
        }
        KeyCode::Esc => {
            *app_state = AppState::FinishConfirm;
        }
        _ => {}
    }
}
