//! Status bar widget — one-line service and submission context.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::controller::{EntryMode, SubmissionState};

/// Data passed to the status bar; decoupled from the controller so it can be
/// built in tests without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBarContext {
    /// The service base address.
    pub api_base: String,
    /// Whether the entry is still being edited.
    pub mode: EntryMode,
    /// The submission state of the current entry.
    pub state: SubmissionState,
    /// The submission-level error currently shown under the form.
    pub global_error: Option<String>,
}

/// Renders the status bar.
///
/// Display format: `http://localhost:8080  NEW ENTRY  Idle`, where the last
/// segment is `Saving...` (Yellow), `Saved #42` (Green), or `Save failed` (Red).
/// A failed save whose error was cleared by a later attempt shows `Not saved`.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);

    let mode = match ctx.mode {
        EntryMode::Editing => "NEW ENTRY",
        EntryMode::ReadOnlyAfterSave => "SUBMITTED",
    };

    let (state, style) = match &ctx.state {
        SubmissionState::Idle => ("Idle".to_string(), Style::default().fg(Color::DarkGray)),
        SubmissionState::Saving => ("Saving...".to_string(), Style::default().fg(Color::Yellow)),
        SubmissionState::Succeeded(id) => (format!("Saved #{id}"), Style::default().fg(Color::Green)),
        SubmissionState::Failed(_) if ctx.global_error.is_some() => {
            ("Save failed".to_string(), Style::default().fg(Color::Red))
        }
        SubmissionState::Failed(_) => ("Not saved".to_string(), Style::default().fg(Color::DarkGray)),
    };

    let spans = vec![
        Span::styled(ctx.api_base.clone(), cyan),
        Span::styled("  ", cyan),
        Span::styled(mode, cyan),
        Span::styled("  ", cyan),
        Span::styled(state, style),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render_status_bar(ctx: &StatusBarContext, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_status_bar(ctx, frame, frame.area());
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn ctx(mode: EntryMode, state: SubmissionState) -> StatusBarContext {
        let global_error = match &state {
            SubmissionState::Failed(reason) => Some(reason.clone()),
            _ => None,
        };
        StatusBarContext {
            api_base: "http://localhost:8080".into(),
            mode,
            state,
            global_error,
        }
    }

    #[test]
    fn renders_idle_new_entry() {
        let output = render_status_bar(&ctx(EntryMode::Editing, SubmissionState::Idle), 60);
        assert!(output.contains("http://localhost:8080"), "should show service");
        assert!(output.contains("NEW ENTRY"));
        assert!(output.contains("Idle"));
    }

    #[test]
    fn renders_saving() {
        let output = render_status_bar(
            &ctx(EntryMode::ReadOnlyAfterSave, SubmissionState::Saving),
            60,
        );
        assert!(output.contains("SUBMITTED"));
        assert!(output.contains("Saving..."));
    }

    #[test]
    fn renders_saved_id() {
        let output = render_status_bar(
            &ctx(
                EntryMode::ReadOnlyAfterSave,
                SubmissionState::Succeeded("42".into()),
            ),
            60,
        );
        assert!(output.contains("Saved #42"));
    }

    #[test]
    fn renders_failure() {
        let output = render_status_bar(
            &ctx(
                EntryMode::ReadOnlyAfterSave,
                SubmissionState::Failed("Network error while saving valuation".into()),
            ),
            60,
        );
        assert!(output.contains("Save failed"));
    }

    #[test]
    fn failure_with_cleared_error_is_not_shown_as_failed() {
        let mut context = ctx(
            EntryMode::ReadOnlyAfterSave,
            SubmissionState::Failed("Network error while saving valuation".into()),
        );
        context.global_error = None;
        let output = render_status_bar(&context, 60);
        assert!(!output.contains("Save failed"));
        assert!(output.contains("Not saved"));
    }
}
