//! Toast widget — the live notification, drawn over the top-right corner.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::controller::{Notification, Severity};

const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 3;

/// Area of a toast anchored to the top-right corner of `area`.
pub fn toast_area(area: Rect) -> Rect {
    let width = TOAST_WIDTH.min(area.width);
    let height = TOAST_HEIGHT.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height,
    }
}

/// Renders `notification` as a bordered toast, or nothing when there is none.
#[mutants::skip]
pub fn draw_toast(notification: Option<&Notification>, frame: &mut Frame, area: Rect) {
    let Some(notification) = notification else {
        return;
    };

    let color = match notification.severity {
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
    };

    let block = Block::default()
        .title(" Ctrl-X ✕ ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let text = Paragraph::new(Line::from(Span::styled(
        notification.message.as_str(),
        Style::default().fg(color),
    )))
    .block(block);

    let area = toast_area(area);
    frame.render_widget(Clear, area);
    frame.render_widget(text, area);
}
