//! Mood picker shown in the control strip.

use moodboard_core::Mood;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Dropdown-style picker: a highlighted mood that only takes effect when set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoodSelector {
    highlighted: Mood,
}

impl MoodSelector {
    /// Start with `mood` highlighted, normally the saved mood.
    pub fn new(mood: Mood) -> Self {
        Self { highlighted: mood }
    }

    pub fn highlighted(&self) -> Mood {
        self.highlighted
    }

    pub fn next(&mut self) {
        self.highlighted = self.highlighted.next();
    }

    pub fn previous(&mut self) {
        self.highlighted = self.highlighted.previous();
    }

    /// Highlight by 1-based position. Out-of-range digits are ignored.
    pub fn pick(&mut self, position: usize) {
        if let Some(mood) = position.checked_sub(1).and_then(|i| Mood::ALL.get(i)) {
            self.highlighted = *mood;
        }
    }

    /// Render the options, reversing the highlighted one and marking `current`.
    pub fn line(&self, current: Mood) -> Line<'static> {
        let mut spans = vec![Span::raw("Mood: ")];
        for (i, mood) in Mood::ALL.into_iter().enumerate() {
            let marker = if mood == current { "●" } else { " " };
            let label = format!(" {}{} {} ", i + 1, marker, mood);
            let style = Style::new().fg(mood_color(mood));
            let span = if mood == self.highlighted {
                Span::styled(label, style.reversed().bold())
            } else {
                Span::styled(label, style)
            };
            spans.push(span);
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

/// Accent colour for a mood label.
pub fn mood_color(mood: Mood) -> Color {
    match mood {
        Mood::Happy => Color::Rgb(230, 180, 60),
        Mood::Sad => Color::Rgb(100, 150, 255),
        Mood::Anxious => Color::Rgb(150, 100, 100),
        Mood::Excited => Color::Rgb(230, 200, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        let mut selector = MoodSelector::new(Mood::Happy);
        selector.previous();
        assert_eq!(selector.highlighted(), Mood::Excited);
        selector.next();
        selector.next();
        assert_eq!(selector.highlighted(), Mood::Sad);
    }

    #[test]
    fn test_pick_by_position() {
        let mut selector = MoodSelector::default();
        selector.pick(3);
        assert_eq!(selector.highlighted(), Mood::Anxious);
        selector.pick(0);
        selector.pick(5);
        assert_eq!(selector.highlighted(), Mood::Anxious);
    }

    #[test]
    fn test_line_marks_current_and_highlight() {
        let selector = MoodSelector::new(Mood::Sad);
        let line = selector.line(Mood::Excited);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains(" 4● excited "));
        assert!(text.contains(" 2  sad "));

        let sad = line
            .spans
            .iter()
            .find(|s| s.content.contains("sad"))
            .unwrap();
        assert!(sad.style.add_modifier.contains(ratatui::style::Modifier::REVERSED));
    }
}
