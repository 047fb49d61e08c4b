/// Global light/dark switch. Views read it through `Theme::for_mode` at draw
/// time and never hold their own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == DisplayMode::Dark
    }

    /// Label of the toggle control: names the mode it switches *to*.
    pub fn toggle_label(self) -> &'static str {
        match self {
            DisplayMode::Light => "Dark Mode",
            DisplayMode::Dark => "Light Mode",
        }
    }
}
