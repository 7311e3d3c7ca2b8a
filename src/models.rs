use serde::{Deserialize, Serialize};

/// One selectable option of a question. `label` is the short identifier
/// shown to the user ("A", "B", ...), unique within its question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionItem {
    pub label: String,
    pub text: String,
}

/// Bilingual explanation shown in the post-exam review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub en: String,
    pub vi: String,
}

/// A single multiple-choice question. `answer` holds the label of the
/// correct option. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub question: String,
    pub options: Vec<OptionItem>,
    pub answer: String,
    pub explanation: Explanation,
}

/// A named, ordered set of questions loaded as a unit. Question order is
/// significant: navigation, answers and flags are all index-aligned with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamBank {
    #[serde(skip)]
    pub id: String,
    pub title: String,
    pub questions: Vec<Question>,
}

impl ExamBank {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Coarse lifecycle state of an exam session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Selecting,
    InProgress,
    Finished,
}

/// Which screen the terminal is showing. Mirrors the session phase, with an
/// extra state for the manual finish confirmation popup (timeout bypasses it).
#[derive(Debug, PartialEq)]
pub enum AppState {
    Menu,
    Exam,
    FinishConfirm,
    Results,
}

/// Per-question entry of the post-finish review.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewEntry {
    pub chosen: Option<String>,
    pub correct: String,
    pub is_correct: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> Question {
        Question {
            id: 1,
            question: "Which command inserts a single document?".to_string(),
            options: vec![
                OptionItem {
                    label: "A".to_string(),
                    text: "insertOne".to_string(),
                },
                OptionItem {
                    label: "B".to_string(),
                    text: "addOne".to_string(),
                },
            ],
            answer: "A".to_string(),
            explanation: Explanation {
                en: "insertOne inserts a single document.".to_string(),
                vi: "insertOne chèn một tài liệu.".to_string(),
            },
        }
    }

    #[test]
    fn question_deserializes_from_bank_document_fields() {
        let json = r#"
        {
            "id": 7,
            "question": "What does $match do?",
            "options": [
                { "label": "A", "text": "Filters documents" },
                { "label": "B", "text": "Renames fields" }
            ],
            "answer": "A",
            "explanation": {
                "en": "$match filters documents in a pipeline.",
                "vi": "$match lọc tài liệu trong pipeline."
            }
        }
        "#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.id, 7);
        assert_eq!(q.options.len(), 2);
        assert_eq!(q.options[0].label, "A");
        assert_eq!(q.answer, "A");
        assert_eq!(q.explanation.vi, "$match lọc tài liệu trong pipeline.");
    }

    #[test]
    fn question_round_trips_with_option_order_preserved() {
        let q = sample_question();
        let encoded = serde_json::to_string(&q).unwrap();
        let decoded: Question = serde_json::from_str(&encoded).unwrap();
        assert_eq!(q, decoded);
        assert_eq!(decoded.options[0].label, "A");
        assert_eq!(decoded.options[1].label, "B");
    }

    #[test]
    fn bank_len_counts_questions() {
        let bank = ExamBank {
            id: "default".to_string(),
            title: "Default Exam".to_string(),
            questions: vec![sample_question()],
        };
        assert_eq!(bank.len(), 1);
        assert!(!bank.is_empty());
    }
}
