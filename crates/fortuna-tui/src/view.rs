//! Frame layout: menu, utility face, result history, and status bar.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};

use fortuna_core::{Rendering, UtilityKind};

use crate::app::TuiApp;

/// Draw the whole screen.
pub fn draw(frame: &mut Frame, app: &mut TuiApp) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " Fortuna ",
            Style::default().fg(Color::Black).bg(Color::Yellow).bold(),
        ),
        Span::styled(
            "  dice \u{b7} coin \u{b7} cards",
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(title, rows[0]);

    let mut constraints = Vec::new();
    if app.display.menu_visible {
        constraints.push(Constraint::Length(18));
    }
    constraints.push(Constraint::Percentage(50));
    constraints.push(Constraint::Min(20));
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(rows[1]);

    let mut next = 0;
    if app.display.menu_visible {
        draw_menu(frame, app.session.active_kind(), cols[0]);
        next = 1;
    }
    draw_face(frame, app, cols[next]);
    draw_history(frame, app, cols[next + 1]);

    let status = match &app.message {
        Some(msg) => Paragraph::new(format!("error: {msg}"))
            .style(Style::default().fg(Color::White).bg(Color::Red)),
        None => Paragraph::new(app.status_hint())
            .style(Style::default().fg(Color::Black).bg(Color::White)),
    };
    frame.render_widget(status, rows[2]);

    if app.show_help {
        draw_help_popup(frame);
    }
}

/// Side menu listing the utilities.
fn draw_menu(frame: &mut Frame, active: UtilityKind, area: Rect) {
    let items: Vec<ListItem> = UtilityKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let style = if *kind == active {
                Style::default().fg(Color::Black).bg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(
                format!(" [{}] {kind} ", i + 1),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Utility ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );
    frame.render_widget(list, area);
}

/// The current face with its alt text and asset reference.
fn draw_face(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let face = &app.display.face;
    let block = Block::default()
        .title(format!(" {} ", face.kind))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 3 || inner.width < 10 {
        return;
    }

    let glyph_style = if face.is_placeholder() {
        Style::default().fg(Color::DarkGray).bold()
    } else {
        Style::default().fg(Color::Yellow).bold()
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(glyph(face), glyph_style)).centered(),
        Line::from(""),
        Line::from(Span::styled(
            face.alt_text.clone(),
            Style::default().fg(Color::White),
        ))
        .centered(),
        Line::from(Span::styled(
            app.session.assets().resolve(face),
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
        Line::from(""),
        Line::from(Span::styled(
            format!("Press Space to {}!", face.kind.verb()),
            Style::default().fg(Color::Green),
        ))
        .centered(),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Short text picture of a face.
pub fn glyph(face: &Rendering) -> String {
    match face.kind {
        UtilityKind::Dice => match face.image_key.as_str() {
            "1" => "\u{2680}",
            "2" => "\u{2681}",
            "3" => "\u{2682}",
            "4" => "\u{2683}",
            "5" => "\u{2684}",
            _ => "\u{2685}",
        }
        .to_string(),
        UtilityKind::Coin if face.image_key == "heads" => "( H )".to_string(),
        UtilityKind::Coin => "( T )".to_string(),
        UtilityKind::Card => match face.image_key.split_once("_of_") {
            Some((rank, suit)) => format!("[ {}{} ]", rank_name(rank), suit_symbol(suit)),
            None => "[ ?? ]".to_string(),
        },
    }
}

fn rank_name(rank: &str) -> &str {
    match rank {
        "1" => "A",
        "11" => "J",
        "12" => "Q",
        "13" => "K",
        other => other,
    }
}

fn suit_symbol(suit: &str) -> &'static str {
    match suit {
        "clubs" => "\u{2663}",
        "diamonds" => "\u{2666}",
        "hearts" => "\u{2665}",
        _ => "\u{2660}",
    }
}

/// Result list, pinned to the newest entry unless scrolled.
fn draw_history(frame: &mut Frame, app: &mut TuiApp, area: Rect) {
    let block = Block::default()
        .title(format!(" Results ({}) ", app.display.lines.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    app.display.set_view_height(inner.height as usize);
    let offset = app.display.offset();

    let items: Vec<ListItem> = app
        .display
        .lines
        .iter()
        .enumerate()
        .skip(offset)
        .take(inner.height as usize)
        .map(|(i, line)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>3} ", i + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(line.clone()),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items), inner);
}

/// Create a centered rectangle as a percentage of the given area.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("  1 / 2 / 3   Select dice / coin / card"),
        Line::from("  h / l       Previous / next utility"),
        Line::from("  Space Enter Use the active utility"),
        Line::from("  j / k       Scroll results"),
        Line::from("  g / G       Oldest / newest result"),
        Line::from("  m           Toggle the menu"),
        Line::from(""),
        Line::from("  ?           Toggle this help"),
        Line::from("  q / Ctrl+C  Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
