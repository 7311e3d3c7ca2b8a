use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::bank::BankSummary;
use crate::session::{ExamSession, PASSING_SCORE, TOTAL_TIME_SECS};

pub fn draw_menu(
    f: &mut Frame,
    banks: &[BankSummary],
    selected_index: usize,
    session: &ExamSession,
    load_error: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(6),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("MongoDB Associate Developer Exam")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let items: Vec<ListItem> = if banks.is_empty() {
        vec![ListItem::new("No exam banks bundled").style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        banks
            .iter()
            .enumerate()
            .map(|(i, bank)| {
                let style = if i == selected_index {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(bank.title.clone()).style(style)
            })
            .collect()
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Select Exam"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(list, chunks[1]);

    let details: Vec<Line> = if let Some(error) = load_error {
        vec![
            Line::from(Span::styled(
                "Failed to load exam questions",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(error.to_string(), Style::default().fg(Color::Red))),
            Line::from("Press any key to dismiss"),
        ]
    } else if let Some(bank) = session.bank() {
        vec![
            Line::from(format!("Selected: {}", bank.title)),
            Line::from(format!("Questions: {}", bank.len())),
            Line::from(format!(
                "Duration: {} minutes    Passing score: {}%",
                TOTAL_TIME_SECS / 60,
                PASSING_SCORE
            )),
            Line::from("Press Enter when you're ready."),
        ]
    } else {
        vec![Line::from("No exam selected")]
    };

    let details = Paragraph::new(details)
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL).title("Details"));
    f.render_widget(details, chunks[2]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "↑/↓",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Choose Exam  "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Start  "),
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
    f.render_widget(help, chunks[3]);
}
