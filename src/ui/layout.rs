use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout
pub struct MainLayout {
    pub create_button: Rect,
    pub edit_button: Rect,
    pub list_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Top row: "Create Task" | "Edit Task" buttons (3 rows, 50/50)
/// - Middle: task list
/// - Bottom bar: keybindings (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Buttons
            Constraint::Min(0),    // Task list
            Constraint::Length(1), // Keybindings bar
        ])
        .split(area);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[0]);

    MainLayout {
        create_button: buttons[0],
        edit_button: buttons[1],
        list_area: main_chunks[1],
        keybindings_area: main_chunks[2],
    }
}

/// Create centered modal area for the dialogs
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

/// Whether a terminal cell lies inside `rect`
pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Lines above the task rows in the selector: blank, prompt, blank
const SELECTOR_HEADER_ROWS: u16 = 3;
/// Lines below the task rows in the selector: blank, hints
const SELECTOR_FOOTER_ROWS: u16 = 2;
/// Lines above the task rows in the form: name, description, hints and list header
const FORM_HEADER_ROWS: u16 = 10;
/// Extra lines taken by a validation error and its spacer
const FORM_ERROR_ROWS: u16 = 2;

/// Columns of the "[x]" delete control, relative to the row's left edge
pub const DELETE_CONTROL: std::ops::Range<u16> = 2..5;

fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Area inside the selector modal where task rows are drawn
pub fn selector_rows_area(modal_area: Rect) -> Rect {
    let inner = inner(modal_area);
    Rect {
        y: inner.y.saturating_add(SELECTOR_HEADER_ROWS),
        height: inner
            .height
            .saturating_sub(SELECTOR_HEADER_ROWS + SELECTOR_FOOTER_ROWS),
        ..inner
    }
}

/// Area inside the form modal where task rows are drawn
pub fn form_rows_area(modal_area: Rect, has_error: bool) -> Rect {
    let inner = inner(modal_area);
    let header = if has_error {
        FORM_HEADER_ROWS + FORM_ERROR_ROWS
    } else {
        FORM_HEADER_ROWS
    };
    Rect {
        y: inner.y.saturating_add(header),
        height: inner.height.saturating_sub(header),
        ..inner
    }
}

/// First visible row of a list of `len` rows shown `visible` at a time,
/// chosen so that `cursor` is on screen
pub fn scroll_offset(cursor: usize, len: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    let offset = (cursor + 1).saturating_sub(visible);
    offset.min(len.saturating_sub(visible))
}

/// List position under terminal row `row`, if any
pub fn row_at(rows: Rect, row: u16, offset: usize, len: usize) -> Option<usize> {
    if row < rows.y || row >= rows.y.saturating_add(rows.height) {
        return None;
    }
    let index = offset + (row - rows.y) as usize;
    (index < len).then_some(index)
}
