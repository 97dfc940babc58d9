//! Property details screen — placeholder for the second section of the form.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::{Action, ScreenState};

/// State for the property details screen. Holds nothing yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyDetailsState;

impl ScreenState for PropertyDetailsState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::FocusTabs,
            _ => Action::None,
        }
    }
}

/// Renders the property details placeholder.
#[mutants::skip]
pub fn draw_property_details(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Property Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        Line::from(""),
        Line::from("Property details are not captured yet."),
        Line::from("Owner details are saved from the first tab."),
        Line::from(""),
        Line::styled("Esc: tabs", Style::default().fg(Color::DarkGray)),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
