use crate::app::App;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Alignment, Color, Line, Modifier, Span, Style, Stylize};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;
use skirmish_core::{text_keys, AttackMode, AttackView, SacrificeOffer};

pub fn draw(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(8),
        ])
        .split(frame.area());

    draw_header(frame, root[0], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(root[1]);

    draw_hand(frame, middle[0], app);
    draw_opponent(frame, middle[1], app);
    draw_events(frame, root[2], app);

    if let Some(view) = app.attack.view() {
        draw_attack_popup(frame, app, &view);
    }
    if app.result_visible() {
        draw_result_popup(frame, app);
    }
    if app.show_help {
        draw_help_popup(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let store = &app.store;
    let summary = format!(
        "{:?}  {}: {}s  {}: {}  seed {}  {}",
        store.phase,
        app.text(text_keys::TIME_REMAINING),
        store.turn_time_remaining,
        app.text(text_keys::HEALTH),
        store.opponent_health,
        app.seed,
        if store.sacrifice_mode { "[sacrifice]" } else { "" }
    );
    let lines = vec![
        Line::from(summary.bold()),
        Line::from(format!("status: {}", app.status_line)),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Skirmish ({})", app.locale.code()));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_hand(frame: &mut Frame, area: Rect, app: &App) {
    let mut items: Vec<ListItem> = app
        .store
        .hand
        .iter()
        .enumerate()
        .map(|(idx, card)| {
            let cursor = if idx == app.hand_cursor { ">" } else { " " };
            let mark = if app.store.selected == Some(idx) { "*" } else { " " };
            let mut style = Style::default();
            if idx == app.hand_cursor {
                style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
            }
            ListItem::new(format!("{cursor}{mark} {}", card.label())).style(style)
        })
        .collect();

    match app.sacrifice_offer() {
        SacrificeOffer::Hidden => {}
        offer => {
            let style = if offer == SacrificeOffer::Enabled {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            items.push(ListItem::new(""));
            items.push(
                ListItem::new(format!(
                    "[s] {} - {}",
                    app.text(text_keys::SACRIFICE_LABEL),
                    app.text(text_keys::SACRIFICE_TITLE)
                ))
                .style(style),
            );
        }
    }

    let block = Block::default().borders(Borders::ALL).title("Hand");
    frame.render_widget(List::new(items).block(block), area);
}

fn draw_opponent(frame: &mut Frame, area: Rect, app: &App) {
    let mut items = vec![ListItem::new(format!(
        "❤ {}: {}",
        app.text(text_keys::HEALTH),
        app.store.opponent_health
    ))];
    items.extend(
        app.store
            .opponent_cards
            .iter()
            .map(|card| ListItem::new(format!("  {}", card.label()))),
    );
    let block = Block::default().borders(Borders::ALL).title("Opponent");
    frame.render_widget(List::new(items).block(block), area);
}

fn draw_events(frame: &mut Frame, area: Rect, app: &App) {
    let visible = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = app
        .event_log
        .iter()
        .rev()
        .take(visible)
        .rev()
        .map(|line| Line::from(line.as_str()))
        .collect();
    let block = Block::default().borders(Borders::ALL).title("Events");
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn draw_attack_popup(frame: &mut Frame, app: &App, view: &AttackView) {
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let option = |mode: AttackMode, label: &str, detail: String| {
        let marker = if view.mode == mode { "(*)" } else { "( )" };
        let style = if view.mode == mode {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Line::styled(format!("{marker} {label}  {detail}"), style)
    };

    let mut lines = vec![
        Line::from(format!(
            "{}: {}s",
            app.text(text_keys::TIME_REMAINING),
            view.remaining
        )),
        Line::from(""),
        option(
            AttackMode::Health,
            &format!("[h] {}", app.text(text_keys::ATTACK_HEALTH)),
            format!("{}: {}", app.text(text_keys::DAMAGE_POINTS), view.damage),
        ),
        option(
            AttackMode::Unit,
            &format!("[u] {}", app.text(text_keys::ATTACK_UNIT)),
            app.text(text_keys::SELECT_TARGET),
        ),
    ];

    if view.mode == AttackMode::Unit {
        lines.push(Line::from(""));
        lines.push(Line::from(app.text(text_keys::SELECT_TARGET).bold()));
        if view.no_valid_targets() {
            lines.push(Line::from(app.text(text_keys::NO_VALID_TARGETS).italic()));
        }
        for row in &view.targets {
            let (marker, style) = if row.selected {
                (">", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            } else {
                (" ", Style::default())
            };
            lines.push(Line::styled(format!("{marker} {}", row.label), style));
        }
    }

    lines.push(Line::from(""));
    let confirm_style = if view.confirm_enabled {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    lines.push(Line::from(vec![
        format!("[Esc] {}   ", app.text(text_keys::CANCEL)).into(),
        Span::styled(
            format!("[Enter] {}", app.text(text_keys::CONFIRM)),
            confirm_style,
        ),
    ]));

    let title = match view.attacker {
        Some(card) => format!("{} - {}", app.text(text_keys::CHOOSE_ATTACK), card.label()),
        None => app.text(text_keys::CHOOSE_ATTACK),
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

fn draw_result_popup(frame: &mut Frame, app: &App) {
    let Some(popup) = app.result.as_ref() else {
        return;
    };
    let summary = popup.summary();
    let area = centered_rect(40, 25, frame.area());
    frame.render_widget(Clear, area);
    let title_style = if summary.blocked_message_key.is_some() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    };
    let mut lines = vec![
        Line::styled(summary.title(&app.locale), title_style),
        Line::from(summary.matchup(&app.locale)),
    ];
    if let Some(message) = summary.blocked_message(&app.locale) {
        lines.push(Line::from(message.italic()));
    }
    let block = Block::default().borders(Borders::ALL);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(50, 60, frame.area());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from("Left/Right  move hand cursor"),
        Line::from("Space       select card"),
        Line::from("a / Enter   attack with card"),
        Line::from("h / u / Tab choose attack mode"),
        Line::from("Up/Down     choose target"),
        Line::from("Enter       confirm attack"),
        Line::from("Esc         cancel"),
        Line::from("s           sacrifice selected face card"),
        Line::from("n           next phase"),
        Line::from("+ / -       change turn time"),
        Line::from("q           quit"),
    ];
    let block = Block::default().borders(Borders::ALL).title("Help");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
