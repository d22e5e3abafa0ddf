use ctwire_core::StatusColor;
use ctwire_core::StatusDisplay;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

/// Status display rendered as a single line under the diagram.
#[derive(Debug, Default)]
pub struct StatusLine {
    text: String,
    color: StatusColor,
    changed: bool,
}

impl StatusLine {
    pub fn text(&self) -> &str {
        return &self.text;
    }

    pub fn color(&self) -> StatusColor {
        return self.color;
    }

    pub fn take_changed(&mut self) -> bool {
        return std::mem::replace(&mut self.changed, false);
    }

    pub fn style(&self) -> Style {
        let fg = match self.color {
            StatusColor::Neutral => Color::Reset,
            StatusColor::Success => Color::Green,
            StatusColor::Warning => Color::Rgb(255, 165, 0),
            StatusColor::Error => Color::Red,
        };

        return Style::default().fg(fg);
    }

    pub fn widget(&self) -> Paragraph<'_> {
        return Paragraph::new(Line::from(Span::styled(self.text.as_str(), self.style())));
    }
}

impl StatusDisplay for StatusLine {
    fn show(&mut self, text: &str, color: StatusColor) {
        tracing::debug!(text, %color, "status");
        self.text = text.to_string();
        self.color = color;
        self.changed = true;
    }
}
