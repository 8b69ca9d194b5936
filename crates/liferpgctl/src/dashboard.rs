//! Read-only terminal dashboard.
//!
//! Renders a freshly loaded profile snapshot: daily score, areas grouped by
//! category, habit streaks, income progress, and milestones. It never
//! mutates state; `r` reloads the snapshot from disk, picking up changes
//! made by CLI invocations in another terminal.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use liferpg_common::{levels, scoring};
use liferpg_common::profile::Profile;
use liferpg_common::{ProfileStore, Settings};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Dashboard state: the store it snapshots from and the latest snapshot.
struct Dashboard {
    store: ProfileStore,
    settings: Settings,
    profile: Option<Profile>,
    today: NaiveDate,
    last_update: Instant,
    should_quit: bool,
}

impl Dashboard {
    fn new(store: ProfileStore, settings: Settings) -> Self {
        Self {
            store,
            settings,
            profile: None,
            today: Local::now().date_naive(),
            last_update: Instant::now(),
            should_quit: false,
        }
    }

    /// Reload the snapshot from disk.
    fn update(&mut self) -> Result<()> {
        self.profile = self.store.load()?;
        self.today = Local::now().date_naive();
        self.last_update = Instant::now();
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                    KeyCode::Char('r') => {
                        let _ = self.update();
                    }
                    _ => {}
                }
            }
        }
    }

    fn score_color(score: u8) -> Color {
        match score {
            80..=100 => Color::Green,
            60..=79 => Color::Yellow,
            40..=59 => Color::LightRed,
            _ => Color::Red,
        }
    }
}

fn draw(f: &mut Frame, dashboard: &Dashboard) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Daily score
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Footer
        ])
        .split(f.size());

    draw_header(f, chunks[0], dashboard);
    draw_score(f, chunks[1], dashboard);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);

    draw_areas(f, main_chunks[0], dashboard);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Habits
            Constraint::Length(3), // Income
            Constraint::Min(5),    // Milestones
        ])
        .split(main_chunks[1]);

    draw_habits(f, side_chunks[0], dashboard);
    draw_income(f, side_chunks[1], dashboard);
    draw_milestones(f, side_chunks[2], dashboard);

    draw_footer(f, chunks[3]);
}

fn draw_header(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "  Life RPG ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::Gray),
        ),
        Span::raw("  |  "),
        Span::styled(
            dashboard.today.format("%Y-%m-%d").to_string(),
            Style::default().fg(Color::Gray),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    )
    .alignment(Alignment::Left);

    f.render_widget(header, area);
}

fn draw_score(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let (score, grade) = match &dashboard.profile {
        Some(profile) => scoring::daily_score(profile, &dashboard.settings, dashboard.today),
        None => (0, "F"),
    };
    let color = Dashboard::score_color(score);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(" Today's Score "),
        )
        .gauge_style(Style::default().fg(color))
        .label(format!("{}/100 - {}", score, grade))
        .ratio(score as f64 / 100.0);

    f.render_widget(gauge, area);
}

fn draw_areas(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let Some(profile) = &dashboard.profile else {
        let hint = Paragraph::new("No profile yet - run any liferpgctl command to start one.")
            .block(Block::default().borders(Borders::ALL).title(" Life Areas "))
            .wrap(Wrap { trim: true });
        f.render_widget(hint, area);
        return;
    };

    let mut items: Vec<ListItem> = Vec::new();
    for (category, areas) in profile.areas_by_category() {
        items.push(ListItem::new(Line::from(Span::styled(
            category.to_uppercase(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))));
        for (name, stats) in areas {
            let filled = (levels::xp_into_level(stats.xp) / 15) as usize;
            let bar = format!("{}{}", "#".repeat(filled), ".".repeat(10 - filled));
            items.push(ListItem::new(Line::from(vec![
                Span::raw(format!("  {:20}", name.short())),
                Span::styled(
                    format!(" Lv {:3} ", stats.level),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(format!("[{}] ", bar)),
                Span::styled(
                    format!("{} to next", levels::xp_to_next_level(stats.xp)),
                    Style::default().fg(Color::Gray),
                ),
            ])));
        }
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(" Life Areas "),
    );

    f.render_widget(list, area);
}

fn draw_habits(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let mut lines = Vec::new();
    if let Some(profile) = &dashboard.profile {
        let mark = |done: bool| if done { "[x]" } else { "[ ]" };
        lines.push(Line::from(format!(
            "  {} Shower   {} day streak",
            mark(profile.habits.shower.done_on(dashboard.today)),
            profile.habits.shower.streak
        )));
        lines.push(Line::from(format!(
            "  {} Workout  {} day streak",
            mark(profile.habits.workout.record.done_on(dashboard.today)),
            profile.habits.workout.record.streak
        )));
        if let Some(last) = profile.habits.workout.pushup_history.last() {
            lines.push(Line::from(Span::styled(
                format!("      last: {} push-ups on {}", last.count, last.date),
                Style::default().fg(Color::Gray),
            )));
        }
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(" Habits "),
    );
    f.render_widget(paragraph, area);
}

fn draw_income(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let (ratio, label) = match &dashboard.profile {
        Some(profile) => {
            let income = &profile.income;
            let percent = income.progress_percent();
            (
                (percent / 100.0).clamp(0.0, 1.0),
                format!(
                    "{} / {} ({:.1}%)",
                    income.current_month_earnings, income.monthly_goal, percent
                ),
            )
        }
        None => (0.0, "no data".to_string()),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .title(" Income "),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .label(label)
        .ratio(ratio);

    f.render_widget(gauge, area);
}

fn draw_milestones(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let items: Vec<ListItem> = match &dashboard.profile {
        Some(profile) => profile
            .epic_milestones
            .values()
            .map(|m| {
                let (mark, color) = if m.completed {
                    ("[x]", Color::Green)
                } else {
                    ("[ ]", Color::Gray)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", mark), Style::default().fg(color)),
                    Span::raw(m.description.clone()),
                    Span::styled(
                        format!("  (+{} XP)", m.xp_reward),
                        Style::default().fg(Color::Gray),
                    ),
                ]))
            })
            .collect(),
        None => Vec::new(),
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" Epic Milestones "),
    );
    f.render_widget(list, area);
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(" q/Esc ", Style::default().fg(Color::Black).bg(Color::Gray)),
        Span::raw(" Quit  "),
        Span::styled(" r ", Style::default().fg(Color::Black).bg(Color::Gray)),
        Span::raw(" Reload  "),
        Span::raw("  Snapshot refresh: 2s"),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray)),
    )
    .alignment(Alignment::Left);

    f.render_widget(footer, area);
}

/// Run the dashboard until the user quits.
pub fn run(store: ProfileStore, settings: Settings) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut dashboard = Dashboard::new(store, settings);
    if let Err(e) = dashboard.update() {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        return Err(e);
    }

    let tick_rate = Duration::from_millis(100);
    let refresh_rate = Duration::from_secs(2);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| draw(f, &dashboard))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let event = event::read()?;
            dashboard.handle_event(event);
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        // Pick up writes from other terminals
        if dashboard.last_update.elapsed() >= refresh_rate {
            let _ = dashboard.update();
        }

        if dashboard.should_quit {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
