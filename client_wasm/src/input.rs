//! Keyboard and pointer input handling

use game_core::PaddleIntent;

/// Handle key down event; returns true if the key controls the paddle
pub fn handle_key_down(key: &str, keys: &mut PaddleIntent) -> bool {
    match key {
        "ArrowUp" | "w" | "W" => keys.up = true,
        "ArrowDown" | "s" | "S" => keys.down = true,
        _ => return false,
    }
    true
}

/// Handle key up event; returns true if the key controls the paddle
pub fn handle_key_up(key: &str, keys: &mut PaddleIntent) -> bool {
    match key {
        "ArrowUp" | "w" | "W" => keys.up = false,
        "ArrowDown" | "s" | "S" => keys.down = false,
        _ => return false,
    }
    true
}

/// `MouseEvent.button` value for the primary button
pub fn is_primary_button(button: i16) -> bool {
    button == 0
}
