//! Rendering of the game screen.

use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Gauge, Paragraph, Wrap};

use of_core::ResponseCategory;
use of_core::narration::{self, Mood};

use crate::app::GameApp;
use crate::shared::{self, palette};

const TITLE: &str = "OTAMESHI FIGHTERS: OFFICE";

/// Screen regions, shared by drawing and mouse hit-testing.
#[derive(Debug, Clone, Copy)]
pub struct Areas {
    /// Title row.
    pub title: Rect,
    /// Stress gauge.
    pub gauge: Rect,
    /// The ojisan.
    pub scene: Rect,
    /// Message box.
    pub message: Rect,
    /// Response buttons in category order.
    pub buttons: [Rect; 4],
    /// Turn counter and key hints.
    pub footer: Rect,
}

/// Split the screen into its regions.
pub fn areas(area: Rect) -> Areas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Stress gauge
            Constraint::Length(7), // Scene
            Constraint::Min(4),    // Message
            Constraint::Length(6), // Buttons
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let button_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(rows[4]);
    let halves = |r: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(r)
    };
    let top = halves(button_rows[0]);
    let bottom = halves(button_rows[1]);

    Areas {
        title: rows[0],
        gauge: rows[1],
        scene: rows[2],
        message: rows[3],
        buttons: [top[0], top[1], bottom[0], bottom[1]],
        footer: rows[5],
    }
}

/// Index of the button containing the given cell.
pub fn button_at(area: Rect, column: u16, row: u16) -> Option<usize> {
    let pos = Position::new(column, row);
    areas(area).buttons.iter().position(|r| r.contains(pos))
}

/// Draw the whole screen.
pub fn draw(frame: &mut Frame, app: &GameApp) {
    let layout = areas(frame.area());
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::LIGHTEST)),
        frame.area(),
    );

    let title = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette::DARKEST).bold());
    frame.render_widget(title, layout.title);

    draw_gauge(frame, app, layout.gauge);
    draw_scene(frame, app, layout.scene);

    let message = Paragraph::new(app.message.as_str())
        .block(shared::panel(""))
        .wrap(Wrap { trim: false });
    frame.render_widget(message, layout.message);

    draw_buttons(frame, app, &layout.buttons);

    let state = app.session().state();
    let footer = Line::from(vec![
        Span::styled(
            format!(" Turn {}/{} ", state.turn(), app.session().rules().max_turns),
            Style::default().bold(),
        ),
        Span::raw(" "),
        Span::raw(app.status_hint()),
    ]);
    frame.render_widget(
        Paragraph::new(footer).style(Style::default().fg(palette::LIGHTEST).bg(palette::DARKEST)),
        layout.footer,
    );

    if app.show_help {
        shared::draw_help_popup(frame, app.session().rules().max_turns);
    }
}

fn draw_gauge(frame: &mut Frame, app: &GameApp, area: Rect) {
    let percent = app
        .session()
        .state()
        .stress_percent(app.session().rules().stress_ceiling);
    let gauge = Gauge::default()
        .block(shared::panel(" Stress "))
        .gauge_style(Style::default().fg(palette::DARK).bg(palette::LIGHT))
        .percent(percent.min(100) as u16)
        .label(format!("{percent}% {}", narration::status_label(percent)));
    frame.render_widget(gauge, area);
}

fn draw_scene(frame: &mut Frame, app: &GameApp, area: Rect) {
    let animation = app.animation();
    let gloating = app.show_victory_effect();
    let lines: Vec<Line> = ojisan_art(animation.mood(), animation.offset(), gloating)
        .into_iter()
        .map(Line::from)
        .collect();
    let scene = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette::DARKEST));
    frame.render_widget(scene, area);
}

fn draw_buttons(frame: &mut Frame, app: &GameApp, areas: &[Rect; 4]) {
    let enabled = app.inputs_enabled();
    let statement = app.session().state().current_statement();

    for category in ResponseCategory::ALL {
        let index = category.index();
        let caption = if app.finished {
            "Play again"
        } else {
            statement.map_or(category.label(), |s| s.response(category))
        };
        let style = if !enabled && !app.finished {
            Style::default().fg(palette::DARK)
        } else if index == app.selected {
            Style::default().fg(palette::LIGHTEST).bg(palette::DARKEST).bold()
        } else {
            Style::default().fg(palette::DARKEST)
        };
        let button = Paragraph::new(format!("{}) {caption}", index + 1))
            .block(shared::panel("").style(style))
            .style(style)
            .wrap(Wrap { trim: true });
        frame.render_widget(button, areas[index]);
    }
}

/// The ojisan's face, shifted by `offset` cells. Every line has the same
/// width so centering keeps the shift.
fn ojisan_art(mood: Mood, offset: i16, gloating: bool) -> Vec<String> {
    let (eyes, mouth) = match mood {
        Mood::Neutral => ("o   o", " --- "),
        Mood::Angry => ("\\   /", " ^^^ "),
        Mood::Happy => ("^   ^", " \\_/ "),
    };
    let face = [
        "  .-------.  ".to_string(),
        format!(" (  {eyes}  ) "),
        " (    <    ) ".to_string(),
        format!(" (  {mouth}  ) "),
        "  `-------'  ".to_string(),
    ];
    let (left, right) = if gloating { ("* ", " *") } else { ("  ", "  ") };
    let top = if gloating { "HA! HA! HA!" } else { "" };

    let pad = usize::try_from(2 + offset.clamp(-2, 2)).unwrap_or(0);
    let shift = |s: &str| format!("{}{s}{}", " ".repeat(pad), " ".repeat(4 - pad));

    let mut lines = vec![shift(&format!("{top:^17}"))];
    lines.extend(face.iter().map(|l| shift(&format!("{left}{l}{right}"))));
    lines
}
