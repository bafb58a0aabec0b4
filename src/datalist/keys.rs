//! Key bindings for the datalist component.

use crate::key::Binding;
use crossterm::event::KeyCode;

/// Key bindings for datalist navigation and actions.
///
/// All fields are public so applications can rebind individual actions:
///
/// ```
/// use bubbletea_datalist::datalist::DataListKeyMap;
/// use bubbletea_datalist::key::Binding;
/// use crossterm::event::KeyCode;
///
/// let mut keymap = DataListKeyMap::default();
/// keymap.refresh = Binding::new(vec![KeyCode::F(5)]).with_help("F5", "refresh");
/// ```
#[derive(Debug, Clone)]
pub struct DataListKeyMap {
    /// Go to the previous page.
    pub prev_page: Binding,
    /// Go to the next page.
    pub next_page: Binding,
    /// Select every record when any is unselected, otherwise deselect all.
    pub toggle_select_all: Binding,
    /// Deselect every record.
    pub clear_selection: Binding,
    /// Re-fetch the record set with the current filter.
    pub refresh: Binding,
    /// Delete the selected records (after confirmation).
    pub delete_selection: Binding,
}

impl Default for DataListKeyMap {
    fn default() -> Self {
        Self {
            prev_page: Binding::new(vec![KeyCode::PageUp, KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "prev page"),
            next_page: Binding::new(vec![KeyCode::PageDown, KeyCode::Right, KeyCode::Char('l')])
                .with_help("→/l", "next page"),
            toggle_select_all: Binding::new(vec![KeyCode::Char('a')])
                .with_help("a", "select all"),
            clear_selection: Binding::new(vec![KeyCode::Esc]).with_help("esc", "clear selection"),
            refresh: Binding::new(vec![KeyCode::Char('r')]).with_help("r", "refresh"),
            delete_selection: Binding::new(vec![KeyCode::Char('x'), KeyCode::Delete])
                .with_help("x/del", "delete selected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bubbletea_rs::KeyMsg;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_default_bindings_do_not_overlap() {
        let keymap = DataListKeyMap::default();
        let bindings = [
            &keymap.prev_page,
            &keymap.next_page,
            &keymap.toggle_select_all,
            &keymap.clear_selection,
            &keymap.refresh,
            &keymap.delete_selection,
        ];

        for (i, a) in bindings.iter().enumerate() {
            for b in bindings.iter().skip(i + 1) {
                for key in &a.keys {
                    let msg = KeyMsg {
                        key: *key,
                        modifiers: KeyModifiers::NONE,
                    };
                    assert!(!b.matches(&msg), "{:?} bound twice", key);
                }
            }
        }
    }
}
