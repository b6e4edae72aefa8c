use crate::domain::DialogState;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Hints for the surface that currently has focus
fn hints_for(dialog: DialogState) -> Vec<Span<'static>> {
    match dialog {
        DialogState::Hidden => vec![
            Span::raw(" c create   "),
            Span::raw("e edit   "),
            Span::raw("click a button   "),
            Span::raw("q quit"),
        ],
        DialogState::ShowingSelector => vec![
            Span::raw(" ↑/↓ select   "),
            Span::raw("Enter / 1-9 edit   "),
            Span::raw("Esc cancel"),
        ],
        DialogState::ShowingForm => vec![
            Span::raw(" Tab next field   "),
            Span::raw("Enter submit   "),
            Span::raw("Del delete (list)   "),
            Span::raw("Esc cancel"),
        ],
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, dialog: DialogState, area: Rect) {
    let paragraph = Paragraph::new(Line::from(hints_for(dialog))).style(hint_style());
    f.render_widget(paragraph, area);
}
