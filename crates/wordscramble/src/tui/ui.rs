//! Stateless UI rendering for the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use super::app::{Alert, App};

/// Renders the whole screen.
pub fn draw<D, R>(frame: &mut Frame, app: &App<D, R>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word and score
            Constraint::Length(3), // Input
            Constraint::Min(3),    // Accepted words
            Constraint::Length(3), // Status
        ])
        .split(area);

    draw_header(frame, chunks[0], app);
    draw_input(frame, chunks[1], app);
    draw_words(frame, chunks[2], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Enter: submit | Ctrl+N: new word | Esc: quit"),
        );
    frame.render_widget(status, chunks[3]);

    if let Some(alert) = app.alert() {
        draw_alert(frame, area, alert);
    }
}

fn draw_header<D, R>(frame: &mut Frame, area: Rect, app: &App<D, R>) {
    let session = app.session();
    let line = Line::from(vec![
        Span::styled(
            session.root_word().to_uppercase(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    Score: "),
        Span::styled(
            session.score().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);

    let header = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Word Scramble"));
    frame.render_widget(header, area);
}

fn draw_input<D, R>(frame: &mut Frame, area: Rect, app: &App<D, R>) {
    let input = Paragraph::new(app.input())
        .block(Block::default().borders(Borders::ALL).title("Enter your word"));
    frame.render_widget(input, area);

    if app.alert().is_none() {
        let width = u16::try_from(app.input().chars().count()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(width)
            .min(area.right().saturating_sub(2));
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn draw_words<D, R>(frame: &mut Frame, area: Rect, app: &App<D, R>) {
    let items: Vec<ListItem> = app
        .session()
        .accepted_words()
        .iter()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("({}) ", word.chars().count()),
                    Style::default().fg(Color::Green),
                ),
                Span::raw(word.as_str()),
            ]))
        })
        .collect();

    let title = format!("Words ({})", items.len());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

fn draw_alert(frame: &mut Frame, area: Rect, alert: Alert) {
    let popup = center_rect(area, 44, 6);
    let text = vec![
        Line::from(""),
        Line::from(alert.message),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(alert.title)
                .style(Style::default().fg(Color::Red)),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
