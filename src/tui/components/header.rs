//! # Header Component
//!
//! Top bar showing the app title and how many tasks exist.
//!
//! Stateless: both props come from the parent every frame, and the header
//! doesn't care where. The count is `Home::task_count()`, the title comes
//! from `[ui] title` in the config.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::component::Component;

/// Height of the rendered header (text row + bottom rule + spacing).
pub const HEADER_HEIGHT: u16 = 2;

pub struct Header {
    pub title: String,
    pub tasks_counter: usize,
}

impl Header {
    pub fn new(title: String, tasks_counter: usize) -> Self {
        Self {
            title,
            tasks_counter,
        }
    }

    /// "You have 1 task" / "You have 3 tasks"
    pub fn counter_text(&self) -> String {
        let noun = if self.tasks_counter == 1 { "task" } else { "tasks" };
        format!("You have {} {}", self.tasks_counter, noun)
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::DIM));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, counter_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Min(0)]).areas(inner);

        let title = Paragraph::new(Span::styled(
            format!(" {}", self.title),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(title, title_area);

        let counter = Paragraph::new(Line::from(vec![
            Span::raw(self.counter_text()),
            Span::raw(" "),
        ]))
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::White));
        frame.render_widget(counter, counter_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(header: &mut Header) -> String {
        let backend = TestBackend::new(60, HEADER_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| header.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_counter_pluralization() {
        assert_eq!(Header::new("to.do".into(), 0).counter_text(), "You have 0 tasks");
        assert_eq!(Header::new("to.do".into(), 1).counter_text(), "You have 1 task");
        assert_eq!(Header::new("to.do".into(), 12).counter_text(), "You have 12 tasks");
    }

    #[test]
    fn test_header_renders_title_and_count() {
        let mut header = Header::new("to.do".into(), 3);
        let text = render_text(&mut header);
        assert!(text.contains("to.do"));
        assert!(text.contains("You have 3 tasks"));
    }

    #[test]
    fn test_props_are_mutable() {
        let mut header = Header::new("to.do".into(), 0);
        header.tasks_counter = 1;
        header.title = "chores".into();
        let text = render_text(&mut header);
        assert!(text.contains("chores"));
        assert!(text.contains("You have 1 task"));
    }
}
