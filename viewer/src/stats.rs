use std::fmt::Write;

use engine::{
    graphics::{DEFAULT_TEXT_SCALE, Renderer2d},
    ui::{Insets, Rect},
};

use crate::{model::Model, palette::Theme};

const CLEAR_LABELS: [&str; 4] = ["Single:", "Double:", "Triple:", "Quad:"];
const LABEL_WIDTH: usize = 8;

/// Formats the engine counters as a seven-line text block (six labeled lines around one
/// blank separator).
pub fn format_stats(clear_counts: [u32; 4], total_lines: u32, total_steps: u32) -> String {
    let mut out = String::new();
    for (label, count) in CLEAR_LABELS.iter().zip(clear_counts) {
        let _ = writeln!(out, "{label:<width$}{count}", width = LABEL_WIDTH);
    }
    out.push('\n');
    let _ = writeln!(out, "{:<width$}{total_lines}", "Lines:", width = LABEL_WIDTH);
    let _ = write!(out, "{:<width$}{total_steps}", "Pieces:", width = LABEL_WIDTH);
    out
}

pub fn format_model_stats<M: Model + ?Sized>(model: &M) -> String {
    format_stats(model.clear_counts(), model.total_lines(), model.total_steps())
}

/// Draws the stats text into its own region beside the board surface.
#[derive(Debug, Clone, Copy)]
pub struct StatsPanel {
    region: Rect,
    padding: u32,
}

impl StatsPanel {
    pub fn new(region: Rect, padding: u32) -> Self {
        Self { region, padding }
    }

    pub fn region(&self) -> Rect {
        self.region
    }

    pub fn render(&self, gfx: &mut dyn Renderer2d, theme: &Theme, text: &str) {
        if self.region.is_empty() {
            return;
        }
        gfx.fill_rect(self.region, theme.background);
        let inner = self.region.inset(Insets::all(self.padding));
        gfx.draw_text_scaled(inner.x, inner.y, text, theme.text, DEFAULT_TEXT_SCALE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_labeled_counters_in_order() {
        let text = format_stats([3, 1, 0, 2], 12, 500);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Single: 3",
                "Double: 1",
                "Triple: 0",
                "Quad:   2",
                "",
                "Lines:  12",
                "Pieces: 500",
            ]
        );
    }

    #[test]
    fn wide_counters_are_not_truncated() {
        let text = format_stats([123456, 0, 0, 0], 4_000_000, 1);
        assert!(text.starts_with("Single: 123456\n"));
        assert!(text.contains("Lines:  4000000"));
    }
}
