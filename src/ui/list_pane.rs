use crate::app::Snapshot;
use crate::domain::Task;
use crate::ui::styles::{
    border_style, default_style, hint_style, primary_button_style, secondary_button_style,
    title_style,
};
use crate::ui::layout::MainLayout;
use chrono::Local;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the "Create Task" and "Edit Task" buttons
pub fn render_buttons(f: &mut Frame, layout: &MainLayout) {
    render_button(f, "Create Task [c]", primary_button_style(), layout.create_button);
    render_button(f, "Edit Task [e]", secondary_button_style(), layout.edit_button);
}

fn render_button(f: &mut Frame, label: &str, style: Style, area: Rect) {
    let button = Paragraph::new(Line::from(Span::styled(label.to_string(), style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    f.render_widget(button, area);
}

/// Render the task list of the main screen
pub fn render_list_pane(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let date = Local::now().format("%a %b %d").to_string();
    let title = list_title(snapshot.tasks.len(), &date);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));

    if snapshot.tasks.is_empty() {
        let empty = Paragraph::new(Line::styled(
            " No tasks yet. Press c to create one.",
            hint_style(),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = snapshot
        .tasks
        .iter()
        .map(|task| ListItem::new(create_task_line(task)).style(default_style()))
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

/// Format: " Tasks (2) Sun Oct 18 "
fn list_title(count: usize, date: &str) -> String {
    format!(" Tasks ({}) {} ", count, date)
}

/// Format: • Buy milk   2L
fn create_task_line(task: &Task) -> Line<'static> {
    let mut spans = vec![Span::raw(" • "), Span::raw(task.name.clone())];

    if let Some(first) = task.description.lines().next() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(first.to_string(), hint_style()));
    }

    Line::from(spans)
}
