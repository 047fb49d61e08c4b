use crate::arena::display::DisplayMode;
use ratatui::style::{Color, Modifier, Style};

/// Palette for one frame, derived from the display mode. Built fresh at
/// draw time so no widget keeps its own idea of light or dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub bg: Color,
    pub panel: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub danger: Color,
    pub selection: Color,
}

impl Theme {
    pub fn for_mode(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Light => Self {
                bg: Color::Rgb(243, 244, 246),
                panel: Color::White,
                fg: Color::Black,
                muted: Color::Rgb(75, 85, 99),
                accent: Color::Rgb(249, 115, 22),
                danger: Color::Rgb(220, 38, 38),
                selection: Color::Rgb(194, 65, 12),
            },
            DisplayMode::Dark => Self {
                bg: Color::Rgb(17, 24, 39),
                panel: Color::Rgb(31, 41, 55),
                fg: Color::White,
                muted: Color::Rgb(156, 163, 175),
                accent: Color::Rgb(249, 115, 22),
                danger: Color::Rgb(239, 68, 68),
                selection: Color::Rgb(251, 146, 60),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn panel(&self) -> Style {
        Style::default().fg(self.fg).bg(self.panel)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// The view behind the welcome overlay: still drawn, visibly inactive.
    pub fn dimmed(&self) -> Style {
        Style::default().fg(self.muted).add_modifier(Modifier::DIM)
    }
}
