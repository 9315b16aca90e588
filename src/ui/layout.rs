use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub header_area: Rect,
    pub content_area: Rect,
    pub status_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Header: screen title and wall clock (3 rows)
/// - Content: the current screen
/// - Bottom bar: status message (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Screen content
            Constraint::Length(1), // Status line
        ])
        .split(area);

    MainLayout {
        keybindings_area: chunks[0],
        header_area: chunks[1],
        content_area: chunks[2],
        status_area: chunks[3],
    }
}

/// Module screen split: exercise on the left (60%), side panel on the right (40%)
pub fn split_module(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Create a centered area `height` rows tall and `width_pct` percent wide
pub fn create_centered_area(area: Rect, width_pct: u16, height: u16) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let side = (100 - width_pct.min(100)) / 2;
    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(side),
            Constraint::Percentage(width_pct),
            Constraint::Percentage(side),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = create_layout(area);

        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.content_area.height, 45);
        assert_eq!(layout.status_area.y, 49);
    }

    #[test]
    fn test_split_module() {
        let (main, side) = split_module(Rect::new(0, 0, 100, 40));
        assert_eq!(main.width, 60);
        assert_eq!(side.width, 40);
        assert_eq!(side.x, 60);
    }

    #[test]
    fn test_create_centered_area() {
        let area = Rect::new(0, 0, 100, 50);
        let centered = create_centered_area(area, 60, 16);

        assert!(centered.width < area.width);
        assert_eq!(centered.height, 16);
        assert!(centered.x > 0);
    }
}
