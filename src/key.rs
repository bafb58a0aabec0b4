//! Minimal key-binding support for datalist and pager keymaps.
//!
//! A [`Binding`] associates one or more [`KeyCode`]s with a help label and a
//! short description, and can be matched against the [`KeyMsg`] events that
//! bubbletea-rs delivers to `update`. Components collect their bindings into
//! keymap structs (see [`crate::datalist::DataListKeyMap`] and
//! [`crate::pager::PagerKeyMap`]) so applications can rebind keys without
//! touching component internals.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_datalist::key::Binding;
//! use crossterm::event::KeyCode;
//!
//! let next = Binding::new(vec![KeyCode::Right, KeyCode::Char('l')])
//!     .with_help("→/l", "next page");
//! assert_eq!(next.help, "→/l");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// A single logical action bound to one or more keys.
///
/// The `help` field is the compact key label shown to users (for example
/// `"→/l"`), and `description` is the action name (for example
/// `"next page"`). Both are display-only; matching considers only `keys`.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Key codes that trigger this binding.
    pub keys: Vec<KeyCode>,
    /// Compact key label for help displays.
    pub help: String,
    /// Short action description for help displays.
    pub description: String,
}

impl Binding {
    /// Creates a binding for the given key codes with empty help text.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: String::new(),
            description: String::new(),
        }
    }

    /// Sets the key label and action description (builder pattern).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_datalist::key::Binding;
    /// use crossterm::event::KeyCode;
    ///
    /// let b = Binding::new(vec![KeyCode::Char('r')]).with_help("r", "refresh");
    /// assert_eq!(b.description, "refresh");
    /// ```
    pub fn with_help(mut self, help: impl Into<String>, description: impl Into<String>) -> Self {
        self.help = help.into();
        self.description = description.into();
        self
    }

    /// Returns true if the key message matches one of the bound key codes.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.keys.contains(&msg.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_matches_any_bound_key() {
        let binding = Binding::new(vec![KeyCode::Right, KeyCode::Char('l')]);

        let right = KeyMsg {
            key: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
        };
        let ell = KeyMsg {
            key: KeyCode::Char('l'),
            modifiers: KeyModifiers::NONE,
        };
        let other = KeyMsg {
            key: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
        };

        assert!(binding.matches(&right));
        assert!(binding.matches(&ell));
        assert!(!binding.matches(&other));
    }

    #[test]
    fn test_with_help_sets_labels() {
        let binding = Binding::new(vec![KeyCode::Char('a')]).with_help("a", "select all");
        assert_eq!(binding.help, "a");
        assert_eq!(binding.description, "select all");
    }
}
