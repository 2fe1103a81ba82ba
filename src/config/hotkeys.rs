//! Hotkey configuration management.
//!
//! This module defines the hotkey system for the application, including action types,
//! hotkey bindings, and default configurations per input mode.

use crate::state::Mode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Represents all possible actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    // Dashboard actions
    Quit,
    NextPanel,
    PrevPanel,
    ToggleLanguage,
    NextTimezone,
    PrevTimezone,
    EnterSearch,
    EditCountdown,
    StartPauseCountdown,
    ResetCountdown,
    ToggleLog,
    DismissAlert,

    // Search and countdown edit actions
    Submit,
    Cancel,
    DeleteChar,
    NextField,
    PrevField,
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    fn plain(code: KeyCode) -> Self {
        Hotkey {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn char(c: char) -> Self {
        Hotkey::plain(KeyCode::Char(c))
    }
}

/// Custom deserialization for Hotkey.
///
impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct HotkeyHelper {
            code: KeyCodeSerde,
            #[serde(default)]
            char: Option<char>,
            #[serde(default)]
            modifiers: KeyModifiersSerde,
        }

        let helper = HotkeyHelper::deserialize(deserializer)?;
        let code = match helper.code {
            KeyCodeSerde::Char => {
                if let Some(c) = helper.char {
                    KeyCode::Char(c)
                } else {
                    return Err(serde::de::Error::custom(
                        "Char key code requires 'char' field",
                    ));
                }
            }
            KeyCodeSerde::Esc => KeyCode::Esc,
            KeyCodeSerde::Enter => KeyCode::Enter,
            KeyCodeSerde::Backspace => KeyCode::Backspace,
            KeyCodeSerde::Tab => KeyCode::Tab,
            KeyCodeSerde::BackTab => KeyCode::BackTab,
            KeyCodeSerde::Up => KeyCode::Up,
            KeyCodeSerde::Down => KeyCode::Down,
            KeyCodeSerde::Left => KeyCode::Left,
            KeyCodeSerde::Right => KeyCode::Right,
        };
        Ok(Hotkey {
            code,
            modifiers: helper.modifiers.into(),
        })
    }
}

/// Key codes that can be named in the configuration file.
///
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
enum KeyCodeSerde {
    Char,
    Esc,
    Enter,
    Backspace,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
}

/// Modifier flags as named in the configuration file.
///
#[derive(Debug, Clone, Default, Deserialize)]
struct KeyModifiersSerde {
    #[serde(default)]
    control: bool,
    #[serde(default)]
    shift: bool,
    #[serde(default)]
    alt: bool,
}

impl From<KeyModifiersSerde> for KeyModifiers {
    fn from(serde: KeyModifiersSerde) -> Self {
        let mut result = KeyModifiers::empty();
        if serde.control {
            result |= KeyModifiers::CONTROL;
        }
        if serde.shift {
            result |= KeyModifiers::SHIFT;
        }
        if serde.alt {
            result |= KeyModifiers::ALT;
        }
        result
    }
}

/// Maps hotkey actions to their key bindings for each input mode.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    pub dashboard: HashMap<HotkeyAction, Hotkey>,
    pub search: HashMap<HotkeyAction, Hotkey>,
    pub countdown_edit: HashMap<HotkeyAction, Hotkey>,
}

/// Bindings read from the configuration file, layered over the defaults.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct KeymapOverrides {
    #[serde(default)]
    pub dashboard: HashMap<HotkeyAction, Hotkey>,
    #[serde(default)]
    pub search: HashMap<HotkeyAction, Hotkey>,
    #[serde(default)]
    pub countdown_edit: HashMap<HotkeyAction, Hotkey>,
}

impl Default for Keymap {
    fn default() -> Self {
        Keymap {
            dashboard: default_dashboard(),
            search: default_search(),
            countdown_edit: default_countdown_edit(),
        }
    }
}

impl Keymap {
    /// Return the bindings used in the given mode.
    ///
    pub fn for_mode(&self, mode: Mode) -> &HashMap<HotkeyAction, Hotkey> {
        match mode {
            Mode::Dashboard => &self.dashboard,
            Mode::Search => &self.search,
            Mode::CountdownEdit => &self.countdown_edit,
        }
    }

    /// Replace the bindings of every action named in `overrides`.
    ///
    pub fn with_overrides(mut self, overrides: KeymapOverrides) -> Self {
        self.dashboard.extend(overrides.dashboard);
        self.search.extend(overrides.search);
        self.countdown_edit.extend(overrides.countdown_edit);
        self
    }
}

fn default_dashboard() -> HashMap<HotkeyAction, Hotkey> {
    HashMap::from([
        (HotkeyAction::Quit, Hotkey::char('q')),
        (HotkeyAction::NextPanel, Hotkey::plain(KeyCode::Tab)),
        (
            HotkeyAction::PrevPanel,
            Hotkey {
                code: KeyCode::BackTab,
                modifiers: KeyModifiers::SHIFT,
            },
        ),
        (HotkeyAction::ToggleLanguage, Hotkey::char('g')),
        (HotkeyAction::NextTimezone, Hotkey::char('z')),
        (
            HotkeyAction::PrevTimezone,
            Hotkey {
                code: KeyCode::Char('Z'),
                modifiers: KeyModifiers::SHIFT,
            },
        ),
        (HotkeyAction::EnterSearch, Hotkey::char('/')),
        (HotkeyAction::EditCountdown, Hotkey::char('e')),
        (HotkeyAction::StartPauseCountdown, Hotkey::char('s')),
        (HotkeyAction::ResetCountdown, Hotkey::char('r')),
        (
            HotkeyAction::ToggleLog,
            Hotkey {
                code: KeyCode::Char('L'),
                modifiers: KeyModifiers::SHIFT,
            },
        ),
        (HotkeyAction::DismissAlert, Hotkey::plain(KeyCode::Enter)),
    ])
}

fn default_search() -> HashMap<HotkeyAction, Hotkey> {
    HashMap::from([
        (HotkeyAction::Submit, Hotkey::plain(KeyCode::Enter)),
        (HotkeyAction::Cancel, Hotkey::plain(KeyCode::Esc)),
        (HotkeyAction::DeleteChar, Hotkey::plain(KeyCode::Backspace)),
    ])
}

fn default_countdown_edit() -> HashMap<HotkeyAction, Hotkey> {
    HashMap::from([
        (HotkeyAction::Submit, Hotkey::plain(KeyCode::Enter)),
        (HotkeyAction::Cancel, Hotkey::plain(KeyCode::Esc)),
        (HotkeyAction::DeleteChar, Hotkey::plain(KeyCode::Backspace)),
        (HotkeyAction::NextField, Hotkey::plain(KeyCode::Tab)),
        (
            HotkeyAction::PrevField,
            Hotkey {
                code: KeyCode::BackTab,
                modifiers: KeyModifiers::SHIFT,
            },
        ),
    ])
}

/// Checks if a KeyEvent matches a Hotkey.
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    if event.code != hotkey.code {
        return false;
    }
    // Terminals disagree on whether shifted characters carry SHIFT
    let shift_implied = matches!(event.code, KeyCode::Char(_) | KeyCode::BackTab);
    event.modifiers == hotkey.modifiers
        || (shift_implied && (event.modifiers ^ hotkey.modifiers) == KeyModifiers::SHIFT)
}

/// Gets the action for a KeyEvent in a specific mode.
///
pub fn get_action_for_event(event: &KeyEvent, mode: Mode, keymap: &Keymap) -> Option<HotkeyAction> {
    keymap
        .for_mode(mode)
        .iter()
        .find(|(_, hotkey)| matches_hotkey(event, hotkey))
        .map(|(action, _)| *action)
}

/// Builds a footer text string from hotkey configurations.
/// Takes a list of tuples: (action, description, optional_second_action_for_paired_keys)
///
pub fn build_footer_text(
    hotkeys: &HashMap<HotkeyAction, Hotkey>,
    actions: &[(HotkeyAction, &str, Option<HotkeyAction>)],
) -> String {
    let mut parts = Vec::new();

    for (action, description, paired_action) in actions {
        if let Some(hotkey) = hotkeys.get(action) {
            match paired_action.and_then(|paired| hotkeys.get(&paired)) {
                Some(paired_hotkey) => parts.push(format!(
                    " {}/{}: {}",
                    format_hotkey_display(hotkey),
                    format_hotkey_display(paired_hotkey),
                    description
                )),
                None => parts.push(format!(
                    " {}: {}",
                    format_hotkey_display(hotkey),
                    description
                )),
            }
        }
    }

    parts.join(",")
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match &hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        // Shifted characters already show their case
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}
