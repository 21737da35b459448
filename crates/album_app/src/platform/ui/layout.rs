use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct BrowserLayout {
    pub search: Rect,
    pub cards: Rect,
    pub content: Rect,
    pub status: Rect,
}

pub fn compute_layout(area: Rect) -> BrowserLayout {
    // Search box | main content | status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    // Card list on the left, detail or results on the right
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(30)])
        .split(rows[1]);

    BrowserLayout {
        search: rows[0],
        cards: columns[0],
        content: columns[1],
        status: rows[2],
    }
}
