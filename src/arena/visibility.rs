/// Which top-level view is in front.
///
/// This is stored state, not a function of the lane list: the welcome
/// overlay hides on the first successful add and comes back only when the
/// user asks for it (logo), whether or not lanes exist. Clearing every lane
/// leaves it hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    welcome_visible: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            welcome_visible: true,
        }
    }
}

impl Visibility {
    pub fn welcome_visible(&self) -> bool {
        self.welcome_visible
    }

    /// The arena takes input only while the overlay is hidden.
    pub fn arena_interactive(&self) -> bool {
        !self.welcome_visible
    }

    pub fn show_welcome(&mut self) {
        self.welcome_visible = true;
    }

    pub fn hide_welcome(&mut self) {
        self.welcome_visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_visible_at_startup() {
        let v = Visibility::default();
        assert!(v.welcome_visible());
        assert!(!v.arena_interactive());
    }

    #[test]
    fn test_hide_and_show() {
        let mut v = Visibility::default();
        v.hide_welcome();
        assert!(v.arena_interactive());
        v.show_welcome();
        assert!(v.welcome_visible());
        v.show_welcome();
        assert!(v.welcome_visible());
    }
}
