//! Theme management module for the application.
//!
//! Provides a context-based light/dark theme. The current theme lives in
//! [`ThemeContext`]; subscribers (reactive effects) write it to the
//! `data-bs-theme` attribute of `<html>` and to the `thaw` config provider.

pub mod theme_switch;

use leptos::prelude::*;
use thaw::ConfigProvider;
use web_sys::window;

pub use theme_switch::ThemeSwitchButton;

/// Attribute on the root element read by the stylesheets.
pub const THEME_ATTRIBUTE: &str = "data-bs-theme";

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the theme name as written to the root attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    fn to_thaw(self) -> thaw::Theme {
        match self {
            Theme::Light => thaw::Theme::light(),
            Theme::Dark => thaw::Theme::dark(),
        }
    }
}

/// Two-state toggle control.
///
/// Holds the theme the next activation applies. The control shows the
/// `checked` marker while that theme is [`Theme::Light`], so a fresh switch
/// is checked and its activations apply `light`, `dark`, `light`, ...
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ThemeSwitch {
    armed: Theme,
}

impl ThemeSwitch {
    /// Switch in its initial "checked" state.
    pub fn checked() -> Self {
        Self {
            armed: Theme::Light,
        }
    }

    pub fn is_checked(&self) -> bool {
        self.armed == Theme::Light
    }

    /// Theme the next activation will apply.
    pub fn armed(&self) -> Theme {
        self.armed
    }

    /// Single transition: returns the theme to apply and flips the marker.
    pub fn activate(&mut self) -> Theme {
        let applied = self.armed;
        self.armed = applied.toggled();
        applied
    }
}

/// Write the theme to the root element. No document, no effect.
fn apply_theme_attribute(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        log::warn!("no document element, theme {} not applied", theme.as_str());
        return;
    };
    let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
    /// State of the toggle control.
    pub switch: RwSignal<ThemeSwitch>,
}

impl ThemeContext {
    pub fn new() -> Self {
        Self {
            theme: RwSignal::new(Theme::default()),
            switch: RwSignal::new(ThemeSwitch::checked()),
        }
    }

    /// The only setter; subscribers react to the signal.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
    }

    /// Get the current theme.
    pub fn get_theme(&self) -> Theme {
        self.theme.get_untracked()
    }

    /// Activation of the toggle control.
    pub fn activate_switch(&self) -> Theme {
        let mut applied = Theme::default();
        self.switch.update(|switch| applied = switch.activate());
        self.set_theme(applied);
        log::info!("Switched to {}", applied.as_str());
        applied
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let context = ThemeContext::new();
    provide_context(context);

    // Subscriber: root attribute for the stylesheets
    Effect::new(move |_| apply_theme_attribute(context.theme.get()));

    // Subscriber: thaw components
    let thaw_theme = RwSignal::new(context.get_theme().to_thaw());
    Effect::new(move |_| thaw_theme.set(context.theme.get().to_thaw()));

    view! {
        <ConfigProvider theme=thaw_theme>
            {children()}
        </ConfigProvider>
    }
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}
