use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

use crate::session::ExamSession;
use crate::ui::layout::calculate_exam_chunks;
use crate::utils::format_clock;

fn clock_color(time_remaining: u32) -> Color {
    if time_remaining < 300 {
        Color::Red
    } else if time_remaining < 600 {
        Color::Yellow
    } else {
        Color::Cyan
    }
}

pub fn draw_exam(f: &mut Frame, session: &ExamSession) {
    let Some(question) = session.current_question() else {
        return;
    };
    let Some(bank) = session.bank() else {
        return;
    };
    let layout = calculate_exam_chunks(f.area());

    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(12)])
        .split(layout.header_area);

    let title = Paragraph::new(bank.title.clone())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, header_chunks[0]);

    let clock = Paragraph::new(format_clock(session.time_remaining()))
        .style(
            Style::default()
                .fg(clock_color(session.time_remaining()))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Time"));
    f.render_widget(clock, header_chunks[1]);

    let status_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(layout.status_area);

    // position through the bank, not answered fraction
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio((session.progress_percent() / 100.0).clamp(0.0, 1.0));
    f.render_widget(gauge, status_chunks[0]);

    let counters = Paragraph::new(format!(
        "Question {} of {}   Answered {}/{}",
        session.current_index() + 1,
        session.question_count(),
        session.answered_count(),
        session.question_count(),
    ))
    .style(
        if session.answered_count() == session.question_count() {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        },
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(counters, status_chunks[1]);

    let question_title = if session.is_flagged(session.current_index()) {
        format!("Question {} ⚑ flagged", session.current_index() + 1)
    } else {
        format!("Question {}", session.current_index() + 1)
    };
    let prompt = Paragraph::new(Text::from(question.question.as_str()))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(question_title));
    f.render_widget(prompt, layout.question_area);

    let chosen = session.answer_at(session.current_index());
    let option_items: Vec<ListItem> = question
        .options
        .iter()
        .map(|opt| {
            let picked = chosen == Some(opt.label.as_str());
            let marker = if picked { "(•)" } else { "( )" };
            let style = if picked {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("{} {}. {}", marker, opt.label, opt.text)).style(style)
        })
        .collect();

    let options = List::new(option_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Options (press a-e)"),
    );
    f.render_widget(options, layout.options_area);

    let mut navigator_spans: Vec<Span> = Vec::new();
    for idx in 0..session.question_count() {
        let style = if idx == session.current_index() {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else if session.is_flagged(idx) {
            Style::default().fg(Color::Yellow)
        } else if session.answer_at(idx).is_some() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        navigator_spans.push(Span::styled(format!("{:>3}", idx + 1), style));
        navigator_spans.push(Span::from(" "));
    }
    let navigator = Paragraph::new(Line::from(navigator_spans))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Navigator  (current / flagged / answered)"),
        );
    f.render_widget(navigator, layout.navigator_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "a-e",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Answer  "),
        Span::styled(
            "←/→",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Navigate  "),
        Span::styled(
            "PgUp/PgDn",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Jump 10  "),
        Span::styled(
            "f",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Flag  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" End Exam"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

/// Full-screen confirmation before a manual finish. The timeout path never
/// goes through this screen.
pub fn draw_finish_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("End Exam")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Are you sure you want to end the exam and see your results?")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Finish and Score)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Keep Going)"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
