use dioxus::prelude::Key;

/// Everything the learner can do, from a keypad button or the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrillAction {
    Digit(u8),
    Decimal,
    Clear,
    Backspace,
    Submit,
    Restart,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeypadKey {
    pub label: &'static str,
    pub action: DrillAction,
}

const fn digit(label: &'static str, value: u8) -> KeypadKey {
    KeypadKey {
        label,
        action: DrillAction::Digit(value),
    }
}

/// On-screen keypad, top row first.
pub const KEYPAD: [[KeypadKey; 3]; 4] = [
    [digit("7", 7), digit("8", 8), digit("9", 9)],
    [digit("4", 4), digit("5", 5), digit("6", 6)],
    [digit("1", 1), digit("2", 2), digit("3", 3)],
    [
        digit("0", 0),
        KeypadKey {
            label: ".",
            action: DrillAction::Decimal,
        },
        KeypadKey {
            label: "C",
            action: DrillAction::Clear,
        },
    ],
];

/// Map a physical key press to an action. Unrelated keys return `None`.
#[must_use]
pub fn action_for_key(key: &Key) -> Option<DrillAction> {
    match key {
        Key::Enter => Some(DrillAction::Submit),
        Key::Backspace => Some(DrillAction::Backspace),
        Key::Escape | Key::Delete => Some(DrillAction::Clear),
        Key::Character(value) => {
            let mut chars = value.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                return None;
            };
            match ch {
                '0'..='9' => ch
                    .to_digit(10)
                    .and_then(|d| u8::try_from(d).ok())
                    .map(DrillAction::Digit),
                '.' | ',' => Some(DrillAction::Decimal),
                'c' | 'C' => Some(DrillAction::Clear),
                _ => None,
            }
        }
        _ => None,
    }
}
