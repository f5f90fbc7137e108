//! Three-state theme preference for the rendered page.
//!
//! The server only emits the toggle markup and the initial state; the
//! transitions and persistence live in a small inline script shipped with
//! the page (localStorage-backed), outside this crate's logic.

/// Theme preference offered by the page's toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Initial state on first load.
    #[default]
    Light,
    Dark,
    /// Follow the operating system preference.
    System,
}

impl Theme {
    /// All selectable states, in menu order.
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    /// Value stored by the toggle script and carried in `data-theme`.
    pub fn key(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::System => "System",
        }
    }
}
