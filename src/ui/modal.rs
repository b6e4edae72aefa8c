use crate::app::Snapshot;
use crate::ui::{
    layout::{create_modal_area, scroll_offset, selector_rows_area},
    styles::{hint_style, modal_bg_style, modal_title_style, selected_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Number key shown next to a selector row; only the first nine have one
fn row_key(index: usize) -> String {
    if index < 9 {
        format!("[{}]", index + 1)
    } else {
        "   ".to_string()
    }
}

/// Render the task selector modal ("Edit Task" step one)
pub fn render_selector(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let modal_area = create_modal_area(area);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let mut lines = Vec::new();
    lines.push(Line::raw(""));
    lines.push(Line::raw("  Pick a task to edit:"));
    lines.push(Line::raw(""));

    if snapshot.tasks.is_empty() {
        lines.push(Line::styled("  (no tasks)", hint_style()));
    }

    // Only the rows that fit, scrolled so the cursor stays visible
    let visible = selector_rows_area(modal_area).height as usize;
    let offset = scroll_offset(snapshot.selector_cursor, snapshot.tasks.len(), visible);

    for (idx, task) in snapshot
        .tasks
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
    {
        let text = format!("  {} {}", row_key(idx), task.summary());
        if idx == snapshot.selector_cursor {
            lines.push(Line::styled(text, selected_style()));
        } else {
            lines.push(Line::raw(text));
        }
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  [Enter]", modal_title_style()),
        Span::raw(" Select  "),
        Span::styled("[Esc]", modal_title_style()),
        Span::raw(" Cancel"),
    ]));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Edit Task ", modal_title_style()))
            .style(modal_bg_style()),
    );

    f.render_widget(paragraph, modal_area);
}
