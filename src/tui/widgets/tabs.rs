//! Tab bar widget.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Tabs};

use crate::controller::{Tab, TabState};

/// Renders the tab bar; a yellow border marks it as focused.
#[mutants::skip]
pub fn draw_tabs(tabs: &TabState, focused: bool, frame: &mut Frame, area: Rect) {
    let border = if focused { Color::Yellow } else { Color::Cyan };
    let titles: Vec<String> = Tab::all()
        .iter()
        .map(|t| format!("{} {}", t.index() + 1, t.title()))
        .collect();

    let widget = Tabs::new(titles)
        .select(tabs.index())
        .block(
            Block::default()
                .title(" Property Valuation ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    #[test]
    fn renders_both_titles() {
        let backend = TestBackend::new(60, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_tabs(&TabState::new(), true, frame, frame.area()))
            .unwrap();
        let buf = terminal.backend().buffer();
        let mut output = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                output.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
        }
        assert!(output.contains("1 Owner Details"));
        assert!(output.contains("2 Property Details"));
    }
}
