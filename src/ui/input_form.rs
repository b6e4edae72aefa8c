use crate::app::Snapshot;
use crate::domain::{FormField, TaskForm};
use crate::ui::{
    layout::{create_modal_area, form_rows_area, scroll_offset},
    styles::{
        delete_style, error_style, hint_style, marked_style, modal_bg_style, modal_title_style,
        selected_style,
    },
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// One text input: label line plus "> value█"
fn text_field<'a>(label: &'a str, value: &'a str, focused: bool) -> [Line<'a>; 2] {
    let label_line = if focused {
        Line::raw(format!("{} (editing)", label))
    } else {
        Line::raw(label)
    };

    let value_line = Line::from(vec![
        Span::raw("> "),
        Span::styled(value, modal_title_style()),
        if focused {
            Span::styled("█", modal_title_style()) // Cursor
        } else {
            Span::raw("")
        },
    ]);

    [label_line, value_line]
}

/// Render the create-or-edit task form
pub fn render_input_form(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    if let Some(form) = &snapshot.form {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();

        lines.push(Line::raw(""));
        lines.extend(text_field("Task Name:", &form.name, form.field == FormField::Name));
        lines.push(Line::raw(""));
        lines.extend(text_field(
            "Task Description:",
            &form.description,
            form.field == FormField::Description,
        ));
        lines.push(Line::raw(""));

        if let Some(error) = &form.error {
            lines.push(Line::styled(error.clone(), error_style()));
            lines.push(Line::raw(""));
        }

        // Submit / cancel
        lines.push(Line::from(vec![
            Span::styled("[Enter]", modal_title_style()),
            Span::raw(format!(" {}  ", form.submit_label())),
            Span::styled("[Esc]", modal_title_style()),
            Span::raw(" Cancel  "),
            Span::styled("[Tab]", modal_title_style()),
            Span::raw(" Next field"),
        ]));
        lines.push(Line::raw(""));

        let visible = form_rows_area(modal_area, form.error.is_some()).height as usize;
        lines.extend(task_rows(snapshot, form, visible));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(format!(" {} ", form.title()), modal_title_style()))
                .style(modal_bg_style()),
        );

        f.render_widget(paragraph, modal_area);
    }
}

/// Task list inside the form, each row with a delete control.
/// At most `visible` rows are returned, scrolled to keep the list cursor shown.
fn task_rows(snapshot: &Snapshot, form: &TaskForm, visible: usize) -> Vec<Line<'static>> {
    let list_focused = form.field == FormField::List;
    let mut lines = Vec::new();

    let header = if list_focused {
        "Tasks: (editing)  ↑/↓ move  Del delete"
    } else {
        "Tasks:"
    };
    lines.push(Line::raw(header));

    if snapshot.tasks.is_empty() {
        lines.push(Line::styled("  (no tasks)", hint_style()));
    }

    let offset = scroll_offset(form.list_cursor, snapshot.tasks.len(), visible);
    for (idx, task) in snapshot
        .tasks
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
    {
        let style = if list_focused && idx == form.list_cursor {
            selected_style()
        } else if snapshot.selected_index == Some(idx) {
            marked_style()
        } else {
            hint_style()
        };

        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("[x]", delete_style()),
            Span::styled(format!(" {}", task.name), style),
        ]));
    }

    lines
}
