pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod styles;

#[cfg(test)]
pub mod test_helpers;

use crate::app::Snapshot;
use crate::domain::DialogState;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::{render_buttons, render_list_pane};
use modal::render_selector;
use ratatui::Frame;

/// Main render function - draws the entire UI from a snapshot
pub fn render(f: &mut Frame, snapshot: &Snapshot) {
    let size = f.size();
    let layout = create_layout(size);

    render_buttons(f, &layout);
    render_list_pane(f, snapshot, layout.list_area);
    render_keybindings(f, snapshot.dialog, layout.keybindings_area);

    // At most one dialog on top
    match snapshot.dialog {
        DialogState::Hidden => {}
        DialogState::ShowingSelector => render_selector(f, snapshot, size),
        DialogState::ShowingForm => render_input_form(f, snapshot, size),
    }
}
