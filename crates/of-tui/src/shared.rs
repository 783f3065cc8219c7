//! Shared utilities for the TUI: palette, layout helpers, and popups.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Four-shade handheld palette, darkest first.
pub mod palette {
    use ratatui::style::Color;

    /// Outlines and text.
    pub const DARKEST: Color = Color::Rgb(15, 56, 15);
    /// Secondary text and disabled widgets.
    pub const DARK: Color = Color::Rgb(48, 98, 48);
    /// Highlights.
    pub const LIGHT: Color = Color::Rgb(139, 172, 15);
    /// Background.
    pub const LIGHTEST: Color = Color::Rgb(155, 188, 15);
}

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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

/// Standard bordered block in the palette.
pub fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette::DARKEST))
        .style(Style::default().fg(palette::DARKEST).bg(palette::LIGHTEST))
}

/// Draw the help popup overlay for a game of `max_turns` turns.
pub fn draw_help_popup(frame: &mut Frame, max_turns: u32) {
    let area = centered_rect(60, 70, frame.area());

    let help_text = vec![
        Line::from("How to play").style(Style::default().bold()),
        Line::from(""),
        Line::from("The ojisan makes a remark each turn. Pick the"),
        Line::from("response that defuses it. Wrong answers raise your"),
        Line::from("stress, and mistakes in a row hit twice as hard."),
        Line::from(format!("Last {max_turns} turns without maxing out to win.")),
        Line::from(""),
        Line::from("Keys:").style(Style::default().bold()),
        Line::from("  1-4         Answer directly"),
        Line::from("  Arrow keys  Move selection"),
        Line::from("  Enter       Begin / answer / restart"),
        Line::from("  r           Restart after the game ends"),
        Line::from("  Click       Begin or press a button"),
        Line::from(""),
        Line::from("  ?           Toggle this help"),
        Line::from("  q / Esc     Quit"),
        Line::from("  Ctrl+C      Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(panel(" Help ").border_style(Style::default().fg(palette::DARK)))
        .style(Style::default().fg(palette::DARKEST).bg(palette::LIGHTEST));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
