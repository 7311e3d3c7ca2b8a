use crossbeam_channel::{Receiver, never, select, unbounded};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use exam_sim::bank::{self, BankSummary};
use exam_sim::models::{AppState, Phase};
use exam_sim::session::{ExamSession, handle_exam_input};
use exam_sim::timer::ExamTimer;
use exam_sim::{logger, ui};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::thread;

/// Forwards crossterm events into a channel so the main loop can select
/// over keyboard input and timer ticks at once.
fn spawn_input_thread() -> Receiver<Event> {
    let (tx, rx) = unbounded();
    thread::Builder::new()
        .name("exam-sim::input".to_string())
        .spawn(move || {
            loop {
                match event::read() {
                    Ok(ev) => {
                        if tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
        })
        .expect("failed to spawn input thread");
    rx
}

fn main() -> io::Result<()> {
    logger::init();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let banks: Vec<BankSummary> = bank::list_banks();
    let mut selected_bank_index: usize = 0;
    let mut session = ExamSession::new();
    let mut load_error: Option<String> = None;

    // bind the initially highlighted bank, like the dropdown default
    if let Some(summary) = banks.first()
        && let Err(e) = session.select_bank(&summary.id)
    {
        load_error = Some(e.to_string());
    }

    let mut app_state = AppState::Menu;
    let mut timer: Option<ExamTimer> = None;
    let mut review_scroll: u16 = 0;

    let input_rx = spawn_input_thread();
    let idle = never::<()>();

    loop {
        terminal.draw(|f| match app_state {
            AppState::Menu => {
                ui::draw_menu(
                    f,
                    &banks,
                    selected_bank_index,
                    &session,
                    load_error.as_deref(),
                );
            }
            AppState::Exam => ui::draw_exam(f, &session),
            AppState::FinishConfirm => ui::draw_finish_confirmation(f),
            AppState::Results => ui::draw_results(f, &session, review_scroll),
        })?;

        let ticks = timer
            .as_ref()
            .map(|t| t.ticks().clone())
            .unwrap_or_else(|| idle.clone());

        select! {
            recv(input_rx) -> ev => {
                let key = match ev {
                    Ok(Event::Key(key)) => key,
                    Ok(_) => continue, // resize etc: redraw happens anyway
                    Err(_) => break,
                };

                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    break;
                }

                match app_state {
                    AppState::Menu => {
                        if load_error.is_some() {
                            load_error = None;
                            continue;
                        }
                        match key.code {
                            KeyCode::Up => {
                                if selected_bank_index > 0 {
                                    selected_bank_index -= 1;
                                    switch_bank(&mut session, &banks, selected_bank_index, &mut load_error);
                                }
                            }
                            KeyCode::Down => {
                                if selected_bank_index + 1 < banks.len() {
                                    selected_bank_index += 1;
                                    switch_bank(&mut session, &banks, selected_bank_index, &mut load_error);
                                }
                            }
                            KeyCode::Enter => {
                                if session.bank().is_some() {
                                    session.start();
                                    timer = Some(ExamTimer::start());
                                    app_state = AppState::Exam;
                                    logger::log("exam started");
                                }
                            }
                            KeyCode::Char('q') | KeyCode::Esc => break,
                            _ => {}
                        }
                    }
                    AppState::Exam => {
                        handle_exam_input(&mut session, key, &mut app_state);
                    }
                    AppState::FinishConfirm => match key.code {
                        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                            session.finish();
                            if let Some(mut t) = timer.take() {
                                t.stop();
                            }
                            review_scroll = 0;
                            app_state = AppState::Results;
                        }
                        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                            app_state = AppState::Exam;
                        }
                        _ => {}
                    },
                    AppState::Results => match key.code {
                        KeyCode::Up => review_scroll = review_scroll.saturating_sub(1),
                        KeyCode::Down => {
                            review_scroll = review_scroll
                                .saturating_add(1)
                                .min(review_scroll_limit(&session));
                        }
                        KeyCode::PageUp => review_scroll = review_scroll.saturating_sub(10),
                        KeyCode::PageDown => {
                            review_scroll = review_scroll
                                .saturating_add(10)
                                .min(review_scroll_limit(&session));
                        }
                        KeyCode::Char('m') => {
                            // sessions are never reused after Finished
                            session = ExamSession::new();
                            if let Some(summary) = banks.get(selected_bank_index)
                                && let Err(e) = session.select_bank(&summary.id)
                            {
                                load_error = Some(e.to_string());
                            }
                            review_scroll = 0;
                            app_state = AppState::Menu;
                        }
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        _ => {}
                    },
                }
            }
            recv(ticks) -> tick => {
                if tick.is_ok() {
                    session.tick();
                    // timeout finishes without confirmation
                    if session.phase() == Phase::Finished {
                        if let Some(mut t) = timer.take() {
                            t.stop();
                        }
                        review_scroll = 0;
                        app_state = AppState::Results;
                        logger::log("exam finished by timeout");
                    }
                }
            }
        }
    }

    // cancel-on-exit: a live timer must never outlast its session
    if let Some(mut t) = timer.take() {
        t.stop();
    }

    Ok(())
}

fn switch_bank(
    session: &mut ExamSession,
    banks: &[BankSummary],
    index: usize,
    load_error: &mut Option<String>,
) {
    if let Some(summary) = banks.get(index)
        && let Err(e) = session.select_bank(&summary.id)
    {
        logger::log(&format!("bank load failed: {e}"));
        *load_error = Some(e.to_string());
    }
}

/// Rough upper bound for review scrolling: each question renders its prompt,
/// options, explanation block and a spacer.
fn review_scroll_limit(session: &ExamSession) -> u16 {
    let per_question = 12;
    (session.question_count() * per_question).min(u16::MAX as usize) as u16
}
