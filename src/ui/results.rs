use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::session::{ExamSession, PASSING_SCORE};
use crate::ui::layout::calculate_results_chunks;
use crate::utils::truncate_string;

pub fn draw_results(f: &mut Frame, session: &ExamSession, scroll: u16) {
    let Some(bank) = session.bank() else {
        return;
    };
    let Some(review) = session.review() else {
        return;
    };
    let layout = calculate_results_chunks(f.area());

    let score = session.score().unwrap_or(0);
    let passed = session.is_passed();
    let correct_count = review.iter().filter(|r| r.is_correct).count();

    let title = Paragraph::new(format!("Exam Results - {}", bank.title))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let verdict = if passed {
        Span::styled(
            "Congratulations! You passed!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            "Try again. You did not pass.",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    };
    let score_lines = vec![
        Line::from(Span::styled(
            format!("{}%", score),
            Style::default()
                .fg(if passed { Color::Green } else { Color::Red })
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(verdict),
        Line::from(format!(
            "You answered {} out of {} questions correctly.",
            correct_count,
            bank.len()
        )),
        Line::from(format!("Passing score: {}%", PASSING_SCORE)),
    ];
    let score_card = Paragraph::new(score_lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(score_card, layout.score_area);

    let review_text = build_review_text(session, f.area().width.saturating_sub(6) as usize);
    let review_widget = Paragraph::new(review_text)
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Review Your Answers"),
        );
    f.render_widget(review_widget, layout.review_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "↑/↓",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Scroll  "),
        Span::styled(
            "m",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Take Exam Again  "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

/// Per-question review body: verdict glyph, each option annotated with
/// chosen/correct markers, then the bilingual explanation.
fn build_review_text(session: &ExamSession, max_width: usize) -> Text<'static> {
    let mut text = Text::default();
    let Some(bank) = session.bank() else {
        return text;
    };
    let Some(review) = session.review() else {
        return text;
    };

    for (idx, (question, entry)) in bank.questions.iter().zip(review.iter()).enumerate() {
        let (glyph, glyph_style) = if entry.is_correct {
            ("[✓]", Style::default().fg(Color::Green))
        } else {
            ("[✗]", Style::default().fg(Color::Red))
        };
        text.push_line(Line::from(vec![
            Span::styled(glyph.to_string(), glyph_style.add_modifier(Modifier::BOLD)),
            Span::from(format!(
                " Q{}. {}",
                idx + 1,
                truncate_string(&question.question, max_width.saturating_sub(9))
            )),
        ]));

        for opt in &question.options {
            let picked = entry.chosen.as_deref() == Some(opt.label.as_str());
            let is_key = opt.label == entry.correct;
            let (marker, style) = match (picked, is_key) {
                (true, true) => ("✓ your answer", Style::default().fg(Color::Green)),
                (true, false) => ("✗ your answer", Style::default().fg(Color::Red)),
                (false, true) => ("→ correct answer", Style::default().fg(Color::Blue)),
                (false, false) => ("", Style::default()),
            };
            let line = format!(
                "    {}. {}  {}",
                opt.label,
                truncate_string(&opt.text, max_width.saturating_sub(12)),
                marker
            );
            text.push_line(Line::from(Span::styled(line, style)));
        }

        if entry.chosen.is_none() {
            text.push_line(Line::from(Span::styled(
                "    (not answered)".to_string(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }

        text.push_line(Line::from(Span::styled(
            "    Explanation:".to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(format!("    EN: {}", question.explanation.en)));
        text.push_line(Line::from(format!("    VI: {}", question.explanation.vi)));
        text.push_line(Line::from(""));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExamBank, Explanation, OptionItem, Question};

    fn two_question_bank() -> ExamBank {
        ExamBank {
            id: "test".to_string(),
            title: "Test".to_string(),
            questions: (1..=2)
                .map(|id| Question {
                    id,
                    question: format!("prompt {id}"),
                    options: vec![
                        OptionItem {
                            label: "A".to_string(),
                            text: "first".to_string(),
                        },
                        OptionItem {
                            label: "B".to_string(),
                            text: "second".to_string(),
                        },
                    ],
                    answer: "A".to_string(),
                    explanation: Explanation {
                        en: "english text".to_string(),
                        vi: "tiếng Việt".to_string(),
                    },
                })
                .collect(),
        }
    }

    #[test]
    fn review_text_is_empty_before_finish() {
        let mut session = ExamSession::new();
        session.set_bank(two_question_bank());
        session.start();
        assert_eq!(build_review_text(&session, 80).lines.len(), 0);
    }

    #[test]
    fn review_text_marks_chosen_and_correct_options() {
        let mut session = ExamSession::new();
        session.set_bank(two_question_bank());
        session.start();
        session.select_answer("B"); // wrong on q1, q2 left unanswered
        session.finish();

        let text = build_review_text(&session, 80);
        let flat: Vec<String> = text
            .lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect();

        assert!(flat.iter().any(|l| l.contains("[✗] Q1.")));
        assert!(flat.iter().any(|l| l.contains("✗ your answer")));
        assert!(flat.iter().any(|l| l.contains("→ correct answer")));
        assert!(flat.iter().any(|l| l.contains("(not answered)")));
        assert!(flat.iter().any(|l| l.contains("EN: english text")));
        assert!(flat.iter().any(|l| l.contains("VI: tiếng Việt")));
    }
}
