//! Form widget: field focus and rendering of values with inline errors.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Field, FormFields, ValidationErrors};

/// Height of one field row, borders included.
pub const ROW_HEIGHT: u16 = 3;

/// Which field has keyboard focus. Cycles through [`Field::all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldFocus {
    index: usize,
}

impl FieldFocus {
    /// Focus on the first field.
    pub fn new() -> Self {
        Self::default()
    }

    /// The focused field.
    pub fn field(&self) -> Field {
        Field::all()[self.index]
    }

    /// Moves focus to the next field, wrapping around.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % Field::all().len();
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn prev(&mut self) {
        let len = Field::all().len();
        self.index = (self.index + len - 1) % len;
    }

    /// Returns focus to the first field.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

/// What [`draw_form`] needs to render the fields.
#[derive(Debug, Clone, Copy)]
pub struct FormView<'a> {
    pub fields: &'a FormFields,
    pub errors: &'a ValidationErrors,
    /// The focused field, or `None` when focus is elsewhere (e.g. the tab bar).
    pub focus: Option<Field>,
    pub enabled: bool,
}

/// Renders every field as a bordered row, with its error over the bottom border.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(view: FormView<'_>, frame: &mut Frame, area: Rect) {
    let constraints: Vec<Constraint> = Field::all()
        .iter()
        .map(|_| Constraint::Length(ROW_HEIGHT))
        .collect();
    let rows = Layout::vertical(constraints).split(area);

    for (i, &field) in Field::all().iter().enumerate() {
        let is_focused = view.enabled && view.focus == Some(field);
        let error = view.errors.get(field);

        let border_color = if error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let label = if field.is_required() {
            format!("{} *", field.label())
        } else {
            field.label().to_string()
        };

        let block = Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let value = view.fields.get(field);
        let mut spans = if value.is_empty() && !is_focused {
            vec![Span::styled(
                field.placeholder(),
                Style::default().fg(Color::DarkGray),
            )]
        } else if view.enabled {
            vec![Span::raw(value)]
        } else {
            vec![Span::styled(value, Style::default().fg(Color::DarkGray))]
        };
        if is_focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), rows[i]);

        // Squeezed rows have no bottom border to draw the error over.
        if let Some(err) = error
            && rows[i].height >= ROW_HEIGHT
        {
            let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
            let err_area = Rect {
                x: rows[i].x.saturating_add(2),
                y: rows[i].y + ROW_HEIGHT - 1,
                width: rows[i].width.saturating_sub(4),
                height: 1,
            }
            .intersection(rows[i])
            .intersection(frame.area());
            if !err_area.is_empty() {
                frame.render_widget(error_line, err_area);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    mod focus {
        use super::*;

        #[test]
        fn starts_on_owner_name() {
            assert_eq!(FieldFocus::new().field(), Field::OwnerName);
        }

        #[test]
        fn next_advances_and_wraps() {
            let mut focus = FieldFocus::new();
            for &expected in &Field::all()[1..] {
                focus.next();
                assert_eq!(focus.field(), expected);
            }
            focus.next();
            assert_eq!(focus.field(), Field::OwnerName);
        }

        #[test]
        fn prev_wraps_to_last() {
            let mut focus = FieldFocus::new();
            focus.prev();
            assert_eq!(focus.field(), Field::Possession);
        }

        #[test]
        fn reset_returns_to_first() {
            let mut focus = FieldFocus::new();
            focus.next();
            focus.next();
            focus.reset();
            assert_eq!(focus.field(), Field::OwnerName);
        }
    }

    mod rendering {
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

        fn render_sized(view: FormView<'_>, width: u16, height: u16) -> String {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| draw_form(view, frame, frame.area()))
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        fn render(view: FormView<'_>) -> String {
            render_sized(view, 50, 15)
        }

        #[test]
        fn renders_labels_and_required_marker() {
            let fields = FormFields::new();
            let errors = ValidationErrors::new();
            let output = render(FormView {
                fields: &fields,
                errors: &errors,
                focus: Some(Field::OwnerName),
                enabled: true,
            });
            assert!(output.contains("Owner Name *"), "required marker");
            assert!(output.contains("Carpet Area (sq.ft)"));
            assert!(!output.contains("Possession *"));
        }

        #[test]
        fn renders_placeholder_for_unfocused_empty_field() {
            let fields = FormFields::new();
            let errors = ValidationErrors::new();
            let output = render(FormView {
                fields: &fields,
                errors: &errors,
                focus: Some(Field::OwnerName),
                enabled: true,
            });
            assert!(output.contains("Enter mobile number"));
        }

        #[test]
        fn renders_values_and_errors() {
            let mut fields = FormFields::new();
            fields.set(Field::CarpetArea, "abc");
            let errors: ValidationErrors = [(Field::CarpetArea, "Carpet area must be a number")]
                .into_iter()
                .collect();
            let output = render(FormView {
                fields: &fields,
                errors: &errors,
                focus: None,
                enabled: true,
            });
            assert!(output.contains("abc"));
            assert!(output.contains("Carpet area must be a number"));
        }

        #[test]
        fn short_area_with_errors_does_not_overflow() {
            let fields = FormFields::new();
            let errors: ValidationErrors = [
                (Field::OwnerName, "Owner name is required"),
                (Field::CarpetArea, "Carpet area must be a number"),
            ]
            .into_iter()
            .collect();
            for (width, height) in [(20, 6), (20, 4), (3, 2), (1, 1), (50, 14)] {
                let view = FormView {
                    fields: &fields,
                    errors: &errors,
                    focus: Some(Field::OwnerName),
                    enabled: true,
                };
                let output = render_sized(view, width, height);
                assert_eq!(output.lines().count(), height as usize);
            }
        }

        #[test]
        fn full_height_rows_still_show_errors() {
            let fields = FormFields::new();
            let errors: ValidationErrors =
                [(Field::Possession, "bad")].into_iter().collect();
            let output = render(FormView {
                fields: &fields,
                errors: &errors,
                focus: None,
                enabled: true,
            });
            assert!(output.contains("bad"));
        }
    }
}
