//! Component-local UI state. Each value lives in exactly one component's signal.

/// Mobile menu, owned by the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Any nav link activation closes the menu.
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// The enlarged gallery image, if any. Owned by the home page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LightboxState {
    selected: Option<String>,
}

impl LightboxState {
    /// Show `src`, replacing whatever is already open.
    pub fn open(&mut self, src: impl Into<String>) {
        self.selected = Some(src.into());
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn menu_toggles_back_to_closed() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn menu_close_is_unconditional() {
        let mut menu = MenuState::default();
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn lightbox_open_replace_close() {
        let mut lightbox = LightboxState::default();
        assert_eq!(lightbox.selected(), None);

        lightbox.open("https://cdn.example/a.jpg");
        assert_eq!(lightbox.selected(), Some("https://cdn.example/a.jpg"));

        lightbox.open("https://cdn.example/b.jpg");
        assert_eq!(lightbox.selected(), Some("https://cdn.example/b.jpg"));

        lightbox.close();
        assert!(!lightbox.is_open());
    }
}
