//! Owner details screen — the valuation entry form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::client::ReportKind;
use crate::controller::SubmissionController;
use crate::model::Field;
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::form::{FieldFocus, FormView, ROW_HEIGHT, draw_form};

/// State for the owner details screen.
#[derive(Debug, Clone, Default)]
pub struct OwnerDetailsState {
    controller: SubmissionController,
    focus: FieldFocus,
}

impl OwnerDetailsState {
    /// Creates the screen with an empty entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The submission controller backing the form.
    pub fn controller(&self) -> &SubmissionController {
        &self.controller
    }

    /// Mutable access for the app to drive submissions.
    pub fn controller_mut(&mut self) -> &mut SubmissionController {
        &mut self.controller
    }

    /// The focused field.
    pub fn focused_field(&self) -> Field {
        self.focus.field()
    }

    /// Starts a new entry and moves focus back to the first field.
    pub fn start_new_entry(&mut self) -> bool {
        let started = self.controller.start_new_entry();
        if started {
            self.focus.reset();
        }
        started
    }

    fn handle_control(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Char('p') => Action::OpenReport(ReportKind::Preview),
            KeyCode::Char('d') => Action::OpenReport(ReportKind::Pdf),
            KeyCode::Char('n') => Action::NewEntry,
            _ => Action::None,
        }
    }
}

impl ScreenState for OwnerDetailsState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.handle_control(key.code);
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus.next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus.prev();
                Action::None
            }
            KeyCode::Backspace => {
                self.controller.pop_char(self.focus.field());
                Action::None
            }
            KeyCode::Char(ch) => {
                self.controller.push_char(self.focus.field(), ch);
                Action::None
            }
            KeyCode::Enter => Action::Submit,
            KeyCode::Esc => Action::FocusTabs,
            _ => Action::None,
        }
    }
}

/// Renders the owner details screen. `focused` is `false` while the tab bar
/// has focus.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_owner_details(state: &OwnerDetailsState, focused: bool, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Owner Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form_height = ROW_HEIGHT * Field::all().len() as u16;
    let [form_area, submit_area, saved_area, error_area, _spacer, footer_area] =
        Layout::vertical([
            Constraint::Length(form_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

    let controller = state.controller();
    draw_form(
        FormView {
            fields: controller.fields(),
            errors: controller.errors(),
            focus: focused.then(|| state.focused_field()),
            enabled: controller.inputs_enabled(),
        },
        frame,
        form_area,
    );

    let submit = if controller.is_saving() {
        Span::styled("[ Saving... ]", Style::default().fg(Color::Yellow))
    } else if controller.inputs_enabled() {
        Span::styled(
            "[ Submit ]",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("[ Submit ]", Style::default().fg(Color::DarkGray))
    };
    frame.render_widget(Paragraph::new(Line::from(submit)), submit_area);

    if let Some(saved) = controller.saved()
        && controller.post_save_actions_available()
    {
        let mut spans = vec![Span::styled(
            format!("Saved ID: {}", saved.id),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(created) = saved.created_at_display() {
            spans.push(Span::styled(
                format!(" ({created})"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("Ctrl-P: {}  Ctrl-D: {}", ReportKind::Preview.label(), ReportKind::Pdf.label()),
            Style::default().fg(Color::Cyan),
        ));
        frame.render_widget(Paragraph::new(Line::from(spans)), saved_area);
    }

    let red = Style::default().fg(Color::Red);
    let mut error_lines: Vec<Line> = Vec::new();
    if let Some(err) = controller.global_error() {
        error_lines.push(Line::from(Span::styled(err, red)));
    }
    if !controller.errors().unattributed().is_empty() {
        error_lines.push(Line::from(Span::styled(
            controller.errors().unattributed().join("; "),
            red,
        )));
    }
    frame.render_widget(Paragraph::new(error_lines), error_area);

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  Enter: submit  Ctrl-N: new entry  Ctrl-X: dismiss  Esc: tabs",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
