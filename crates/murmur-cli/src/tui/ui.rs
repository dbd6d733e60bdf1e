use chrono::Utc;
use murmur_types::{MAX_THOUGHT_CHARS, NEAR_LIMIT_CHARS, View, time_ago};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap},
};

use super::app::App;

pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header (title + tagline)
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Active panel
            Constraint::Length(1), // Footer (key hints)
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_tabs(f, chunks[1], app);

    match app.controller.state().active_view() {
        View::Write => render_write(f, chunks[2], app),
        View::Feed => render_feed(f, chunks[2], app),
    }

    render_footer(f, chunks[3], app);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "murmur",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "unfiltered. anonymous. free.",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    f.render_widget(header, area);
}

fn render_tabs(f: &mut Frame, area: Rect, app: &App) {
    let selected = match app.controller.state().active_view() {
        View::Write => 0,
        View::Feed => 1,
    };

    let tabs = Tabs::new(vec!["Write", "Feed"])
        .select(selected)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn render_write(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Draft
            Constraint::Length(1), // Counter + status
            Constraint::Length(2), // Spark prompts
        ])
        .split(area);

    let draft = app.controller.state().draft();
    let body = if draft.is_empty() {
        Text::from(Span::styled(
            "let it out... no logic needed",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Text::raw(draft)
    };

    let editor = Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Anonymous "));
    f.render_widget(editor, chunks[0]);

    render_counter_line(f, chunks[1], app);
    render_prompts(f, chunks[2], app);
}

fn render_counter_line(f: &mut Frame, area: Rect, app: &App) {
    let len = app.controller.state().draft().chars().count();
    let counter_style = if len > NEAR_LIMIT_CHARS {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let status = if app.controller.state().is_submitting() {
        Span::styled("releasing...", Style::default().fg(Color::Magenta))
    } else if app.controller.can_submit_draft() {
        Span::styled("[Enter] release", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("[Enter] release", Style::default().fg(Color::DarkGray))
    };

    let line = Line::from(vec![
        Span::styled(format!("{}/{}", len, MAX_THOUGHT_CHARS), counter_style),
        Span::raw("  "),
        status,
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_prompts(f: &mut Frame, area: Rect, app: &App) {
    if app.prompts.is_empty() {
        return;
    }

    let mut spans = vec![Span::styled(
        "need a spark? [↑/↓] ",
        Style::default().fg(Color::DarkGray),
    )];
    for (i, prompt) in app.prompts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::raw(prompt.as_str()));
    }

    let prompts = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true });
    f.render_widget(prompts, area);
}

fn render_feed(f: &mut Frame, area: Rect, app: &mut App) {
    let state = app.controller.state();

    if state.thoughts().is_empty() {
        let empty = Paragraph::new(Span::styled(
            "thoughts drift away into the void...",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    let now = Utc::now();
    let items: Vec<ListItem> = state
        .thoughts()
        .iter()
        .map(|thought| {
            let liked = state.is_liked(thought.id);
            let heart_style = if liked {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let meta = Line::from(vec![
                Span::styled(
                    time_ago(thought.timestamp, now),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                Span::styled(format!("♥ {}", thought.like_count), heart_style),
            ]);

            ListItem::new(Text::from(vec![
                Line::raw(thought.content.clone()),
                meta,
                Line::raw(""),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_symbol("> ")
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));
    f.render_stateful_widget(list, area, &mut app.feed_list);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let hints = match app.controller.state().active_view() {
        View::Write => vec![
            Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
            Span::raw("feed "),
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::raw("release "),
            Span::styled("[↑/↓]", Style::default().fg(Color::Yellow)),
            Span::raw("spark "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw("quit"),
        ],
        View::Feed => vec![
            Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
            Span::raw("write "),
            Span::styled("[j/k]", Style::default().fg(Color::Yellow)),
            Span::raw("scroll "),
            Span::styled("[Space]", Style::default().fg(Color::Yellow)),
            Span::raw("like "),
            Span::styled("[q]", Style::default().fg(Color::Yellow)),
            Span::raw("uit"),
        ],
    };

    f.render_widget(Paragraph::new(Line::from(hints)), area);
}
