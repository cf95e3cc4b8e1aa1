/// Keys the demo reacts to. Everything else arrives as [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    I,
    J,
    K,
    L,
    Escape,
    Other,
}

impl Key {
    /// Map a script character to a key. `q` and `Q` stand for Escape.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'i' => Some(Key::I),
            'j' => Some(Key::J),
            'k' => Some(Key::K),
            'l' => Some(Key::L),
            'q' => Some(Key::Escape),
            _ => None,
        }
    }
}

/// A window event, already translated out of the windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The window was asked to close.
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    /// Anything the demo ignores (mouse, focus, ...).
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseKeyError {
    #[error("unknown key '{ch}' at position {at} (expected one of i, j, k, l, q)")]
    UnknownKey { ch: char, at: usize },
}

/// Turn a script such as `"JLL"` into key-down events. Whitespace is skipped.
pub fn parse_key_script(script: &str) -> Result<Vec<InputEvent>, ParseKeyError> {
    script
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(at, ch)| {
            Key::from_char(ch)
                .map(InputEvent::KeyDown)
                .ok_or(ParseKeyError::UnknownKey { ch, at })
        })
        .collect()
}
