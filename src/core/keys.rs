/// What a key press does. Keys are matched on `KeyboardEvent.key`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleMode,
    ToggleMute,
    ToggleGesture,
    ToggleOverlay,
    ToggleFullscreen,
    ExitFullscreen,
}

impl KeyAction {
    /// Whether the browser's default handling should be suppressed.
    #[inline]
    pub fn prevents_default(self) -> bool {
        matches!(
            self,
            KeyAction::ToggleMode | KeyAction::ToggleFullscreen | KeyAction::ToggleOverlay
        )
    }
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        " " | "Spacebar" => Some(KeyAction::ToggleMode),
        "m" | "M" => Some(KeyAction::ToggleMute),
        "g" | "G" => Some(KeyAction::ToggleGesture),
        "h" | "H" => Some(KeyAction::ToggleOverlay),
        "Enter" => Some(KeyAction::ToggleFullscreen),
        "Escape" => Some(KeyAction::ExitFullscreen),
        _ => None,
    }
}
