use crate::app::Action;
use crate::domain::DialogState;
use crate::screen::Screen;
use crate::ui::layout::{
    create_layout, create_modal_area, form_rows_area, rect_contains, row_at, scroll_offset,
    selector_rows_area, DELETE_CONTROL,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(screen: &mut Screen, key: KeyEvent) -> bool {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match screen.state().dialog {
        DialogState::Hidden => handle_main_screen(screen, key),
        DialogState::ShowingSelector => {
            handle_selector(screen, key);
            false
        }
        DialogState::ShowingForm => {
            handle_form(screen, key);
            false
        }
    }
}

/// Handle keys on the main screen (no dialog open)
fn handle_main_screen(screen: &mut Screen, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') => {
            screen.dispatch(Action::CreateTask);
            false
        }
        KeyCode::Char('e') | KeyCode::Char('E') => {
            screen.dispatch(Action::EditTask);
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

/// Handle keys in the task selector
fn handle_selector(screen: &mut Screen, key: KeyEvent) {
    let action = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::SelectorUp,
        KeyCode::Down | KeyCode::Char('j') => Action::SelectorDown,
        KeyCode::Enter => Action::PickHighlighted,
        KeyCode::Esc => Action::Cancel,

        // Number keys pick a row directly (1-based)
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            Action::Pick(index)
        }

        _ => return,
    };
    screen.dispatch(action);
}

/// Handle keys in the create/edit form
fn handle_form(screen: &mut Screen, key: KeyEvent) {
    let on_list = screen
        .state()
        .form
        .as_ref()
        .is_some_and(|form| !form.field.is_text());

    let action = match key.code {
        KeyCode::Enter => Action::Submit,
        KeyCode::Esc => Action::Cancel,
        KeyCode::Tab => Action::FormNextField,

        // Task list controls
        KeyCode::Up if on_list => Action::FormListUp,
        KeyCode::Down if on_list => Action::FormListDown,
        KeyCode::Delete | KeyCode::Char('d') | KeyCode::Char('x') if on_list => {
            Action::DeleteHighlighted
        }

        // Text input
        KeyCode::Backspace => Action::FormBackspace,
        KeyCode::Char(c) => Action::FormInput(c),

        _ => return,
    };
    screen.dispatch(action);
}

/// Handle mouse input. A left click outside an open dialog dismisses it.
/// Inside the selector a row click picks that task; inside the form a click
/// on a row's [x] deletes it. On the main screen the two buttons are clickable.
pub fn handle_mouse(screen: &mut Screen, mouse: MouseEvent, area: Rect) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    if screen.state().dialog.is_open() {
        let modal_area = create_modal_area(area);
        let action = if rect_contains(modal_area, mouse.column, mouse.row) {
            dialog_click(screen, mouse, modal_area)
        } else {
            Some(Action::Cancel)
        };
        if let Some(action) = action {
            screen.dispatch(action);
        }
        return;
    }

    let layout = create_layout(area);
    if rect_contains(layout.create_button, mouse.column, mouse.row) {
        screen.dispatch(Action::CreateTask);
    } else if rect_contains(layout.edit_button, mouse.column, mouse.row) {
        screen.dispatch(Action::EditTask);
    }
}

/// Map a click inside the open dialog to an action, if it hit a target
fn dialog_click(screen: &Screen, mouse: MouseEvent, modal_area: Rect) -> Option<Action> {
    let state = screen.state();
    let len = state.tasks.len();

    match (state.dialog, &state.form) {
        (DialogState::ShowingSelector, _) => {
            let rows = selector_rows_area(modal_area);
            let offset = scroll_offset(state.selector_cursor, len, rows.height as usize);
            row_at(rows, mouse.row, offset, len).map(Action::Pick)
        }
        (DialogState::ShowingForm, Some(form)) => {
            let rows = form_rows_area(modal_area, form.error.is_some());
            let column = mouse.column.checked_sub(rows.x)?;
            if !DELETE_CONTROL.contains(&column) {
                return None;
            }
            let offset = scroll_offset(form.list_cursor, len, rows.height as usize);
            let index = row_at(rows, mouse.row, offset, len)?;
            state.tasks.get(index).map(|task| Action::Delete(task.name))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::domain::RenamePolicy;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn create_test_screen() -> Screen {
        Screen::new(AppState::new(true, RenamePolicy::InPlace))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn type_text(screen: &mut Screen, text: &str) {
        for c in text.chars() {
            handle_key(screen, key(KeyCode::Char(c)));
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn add_task(screen: &mut Screen, name: &str, description: &str) {
        handle_key(screen, key(KeyCode::Char('c')));
        type_text(screen, name);
        handle_key(screen, key(KeyCode::Tab));
        type_text(screen, description);
        handle_key(screen, key(KeyCode::Enter));
    }

    #[test]
    fn test_handle_quit() {
        let mut screen = create_test_screen();
        assert!(handle_key(&mut screen, key(KeyCode::Char('q'))));
    }

    #[test]
    fn test_q_is_text_inside_form() {
        let mut screen = create_test_screen();
        handle_key(&mut screen, key(KeyCode::Char('c')));
        assert!(!handle_key(&mut screen, key(KeyCode::Char('q'))));
        assert_eq!(screen.state().form.as_ref().unwrap().name, "q");
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut screen = create_test_screen();
        handle_key(&mut screen, key(KeyCode::Char('c')));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key(&mut screen, ctrl_c));
    }

    #[test]
    fn test_handle_add_task() {
        let mut screen = create_test_screen();
        add_task(&mut screen, "Buy milk", "2L");

        let state = screen.state();
        assert_eq!(state.dialog, DialogState::Hidden);
        assert_eq!(state.tasks.get(0).unwrap().description, "2L");
    }

    #[test]
    fn test_handle_edit_via_number_key() {
        let mut screen = create_test_screen();
        add_task(&mut screen, "A", "a");
        add_task(&mut screen, "B", "b");

        handle_key(&mut screen, key(KeyCode::Char('e')));
        assert_eq!(screen.state().dialog, DialogState::ShowingSelector);

        handle_key(&mut screen, key(KeyCode::Char('2')));
        assert_eq!(screen.state().selected_index, Some(1));
        assert_eq!(screen.state().form.as_ref().unwrap().name, "B");
    }

    #[test]
    fn test_handle_selector_navigation() {
        let mut screen = create_test_screen();
        add_task(&mut screen, "A", "a");
        add_task(&mut screen, "B", "b");

        handle_key(&mut screen, key(KeyCode::Char('e')));
        handle_key(&mut screen, key(KeyCode::Down));
        assert_eq!(screen.state().selector_cursor, 1);
        handle_key(&mut screen, key(KeyCode::Up));
        assert_eq!(screen.state().selector_cursor, 0);
        handle_key(&mut screen, key(KeyCode::Enter));
        assert_eq!(screen.state().selected_index, Some(0));
    }

    #[test]
    fn test_handle_escape_cancels() {
        let mut screen = create_test_screen();
        handle_key(&mut screen, key(KeyCode::Char('e')));
        assert!(!handle_key(&mut screen, key(KeyCode::Esc)));
        assert_eq!(screen.state().dialog, DialogState::Hidden);

        handle_key(&mut screen, key(KeyCode::Char('c')));
        assert!(!handle_key(&mut screen, key(KeyCode::Esc)));
        assert_eq!(screen.state().dialog, DialogState::Hidden);
    }

    #[test]
    fn test_handle_delete_from_list() {
        let mut screen = create_test_screen();
        add_task(&mut screen, "A", "a");
        add_task(&mut screen, "B", "b");

        handle_key(&mut screen, key(KeyCode::Char('c')));
        // 'd' is text while a text field has focus
        handle_key(&mut screen, key(KeyCode::Char('d')));
        assert_eq!(screen.state().form.as_ref().unwrap().name, "d");

        handle_key(&mut screen, key(KeyCode::Tab));
        handle_key(&mut screen, key(KeyCode::Tab));
        handle_key(&mut screen, key(KeyCode::Down));
        handle_key(&mut screen, key(KeyCode::Delete));

        let state = screen.state();
        assert_eq!(state.dialog, DialogState::Hidden);
        assert_eq!(state.tasks.len(), 1);
        assert!(state.tasks.contains("A"));
    }

    #[test]
    fn test_click_outside_dialog_cancels() {
        let mut screen = create_test_screen();
        let area = Rect::new(0, 0, 100, 40);

        handle_key(&mut screen, key(KeyCode::Char('c')));
        let modal_area = create_modal_area(area);
        handle_mouse(&mut screen, click(modal_area.x + 1, modal_area.y + 1), area);
        assert_eq!(screen.state().dialog, DialogState::ShowingForm);

        handle_mouse(&mut screen, click(0, area.height - 1), area);
        assert_eq!(screen.state().dialog, DialogState::Hidden);
    }

    #[test]
    fn test_click_buttons() {
        let mut screen = create_test_screen();
        let area = Rect::new(0, 0, 100, 40);
        let layout = create_layout(area);

        handle_mouse(&mut screen, click(layout.edit_button.x + 1, layout.edit_button.y), area);
        assert_eq!(screen.state().dialog, DialogState::ShowingSelector);

        handle_key(&mut screen, key(KeyCode::Esc));
        handle_mouse(&mut screen, click(layout.create_button.x + 1, layout.create_button.y), area);
        assert_eq!(screen.state().dialog, DialogState::ShowingForm);
    }

    #[test]
    fn test_click_selector_row_picks_task() {
        let mut screen = create_test_screen();
        let area = Rect::new(0, 0, 100, 40);
        add_task(&mut screen, "A", "a");
        add_task(&mut screen, "B", "b");

        handle_key(&mut screen, key(KeyCode::Char('e')));
        let rows = selector_rows_area(create_modal_area(area));

        // Below the last task: nothing happens
        handle_mouse(&mut screen, click(rows.x + 4, rows.y + 2), area);
        assert_eq!(screen.state().dialog, DialogState::ShowingSelector);

        handle_mouse(&mut screen, click(rows.x + 4, rows.y + 1), area);
        assert_eq!(screen.state().selected_index, Some(1));
        assert_eq!(screen.state().form.as_ref().unwrap().name, "B");
    }

    #[test]
    fn test_click_delete_control_in_form() {
        let mut screen = create_test_screen();
        let area = Rect::new(0, 0, 100, 40);
        add_task(&mut screen, "A", "a");
        add_task(&mut screen, "B", "b");

        handle_key(&mut screen, key(KeyCode::Char('c')));
        let rows = form_rows_area(create_modal_area(area), false);

        // On the row but off the [x]: the form stays open
        handle_mouse(&mut screen, click(rows.x + 8, rows.y), area);
        assert_eq!(screen.state().dialog, DialogState::ShowingForm);
        assert_eq!(screen.state().tasks.len(), 2);

        handle_mouse(&mut screen, click(rows.x + DELETE_CONTROL.start, rows.y + 1), area);
        let state = screen.state();
        assert_eq!(state.dialog, DialogState::Hidden);
        assert_eq!(state.tasks.len(), 1);
        assert!(state.tasks.contains("A"));
    }

    #[test]
    fn test_click_delete_control_on_scrolled_list() {
        let mut screen = create_test_screen();
        let area = Rect::new(0, 0, 100, 40);
        for i in 0..30 {
            add_task(&mut screen, &format!("T{}", i), "");
        }

        handle_key(&mut screen, key(KeyCode::Char('c')));
        handle_key(&mut screen, key(KeyCode::Tab));
        handle_key(&mut screen, key(KeyCode::Tab));
        for _ in 0..25 {
            handle_key(&mut screen, key(KeyCode::Down));
        }

        // The cursor row is the last visible row once the list has scrolled
        let rows = form_rows_area(create_modal_area(area), false);
        let last_row = rows.y + rows.height - 1;
        handle_mouse(&mut screen, click(rows.x + DELETE_CONTROL.start, last_row), area);

        let state = screen.state();
        assert_eq!(state.tasks.len(), 29);
        assert!(!state.tasks.contains("T25"));
    }
}
