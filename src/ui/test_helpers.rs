use crate::app::Snapshot;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

pub const TERM_W: u16 = 100;
pub const TERM_H: u16 = 40;

/// Render a snapshot into an in-memory buffer and return plain text (no styles)
pub fn render_snapshot(snapshot: &Snapshot, w: u16, h: u16) -> String {
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| super::render(f, snapshot)).unwrap();

    let buf = terminal.backend().buffer().clone();
    let width = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(width)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    lines.join("\n")
}
