mod app;
mod ui;

use anyhow::Result;
use chrono::Utc;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use murmur_runtime::{FeedController, PendingPost};
use murmur_types::View;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::Duration;

use app::App;

/// Run the two-panel TUI until the user quits.
///
/// The loop is single-threaded; the only background work is the simulated
/// persistence latency of a post, which runs on a short-lived worker thread
/// and reports back over a channel.
pub fn run(controller: FeedController, prompts: Vec<String>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let result = run_loop(&mut terminal, App::new(controller, prompts));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<()> {
    // Worker -> loop channel for submissions leaving their latency window.
    let (tx, rx) = mpsc::channel::<PendingPost>();

    let tick_rate = Duration::from_millis(250);
    let mut last_tick = std::time::Instant::now();

    while !app.should_quit {
        terminal.draw(|f| {
            ui::draw(f, &mut app);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                handle_key(&mut app, key, &tx);
            }
        }

        // Commit any submission whose latency window has elapsed.
        for pending in rx.try_iter() {
            app.controller.commit_submit(pending, Utc::now());
            app.snap_selection_to_head();
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = std::time::Instant::now();
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent, tx: &Sender<PendingPost>) {
    match app.controller.state().active_view() {
        View::Write => handle_write_key(app, key, tx),
        View::Feed => handle_feed_key(app, key),
    }
}

fn handle_write_key(app: &mut App, key: KeyEvent, tx: &Sender<PendingPost>) {
    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Tab => {
            let other = app.controller.state().active_view().other();
            app.controller.switch_view(other);
        }
        KeyCode::Enter => {
            start_submit(app, tx);
        }
        KeyCode::Backspace => {
            app.controller.pop_char();
        }
        KeyCode::Down => {
            app.next_prompt();
        }
        KeyCode::Up => {
            app.previous_prompt();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.controller.edit_draft("");
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.controller.push_char(c);
        }
        _ => {}
    }
}

fn handle_feed_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Tab => {
            let other = app.controller.state().active_view().other();
            app.controller.switch_view(other);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous();
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_selected_like();
        }
        _ => {}
    }
}

/// Begin a submission and park its latency on a worker thread.
///
/// `begin_submit` enforces the precondition (valid draft, nothing already in
/// flight), so mashing Enter while a post is releasing drops the extra
/// presses instead of queueing them.
fn start_submit(app: &mut App, tx: &Sender<PendingPost>) {
    if let Some(pending) = app.controller.begin_submit() {
        let tx = tx.clone();
        let delay = app.controller.latency();
        thread::spawn(move || {
            thread::sleep(delay);
            // The loop may have exited already; the post is lost with the
            // session either way.
            let _ = tx.send(pending);
        });
    }
}
