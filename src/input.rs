use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Buttons of a gamepad with the standard layout that act as confirm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StandardButton {
    RightBottom,
    RightRight,
    Other,
}

/// A "just pressed" edge from any input device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Space,
    Fire,
    Quit,
    MouseLeft,
    TouchDown,
    StandardGamepad(StandardButton),
    /// Gamepad without a known layout; buttons 0 and 1 are taken as A/B.
    RawGamepad(u8),
}

impl InputEvent {
    pub fn is_confirm(self) -> bool {
        match self {
            InputEvent::Space | InputEvent::MouseLeft | InputEvent::TouchDown => true,
            InputEvent::StandardGamepad(b) => {
                matches!(b, StandardButton::RightBottom | StandardButton::RightRight)
            }
            InputEvent::RawGamepad(n) => n <= 1,
            InputEvent::Fire | InputEvent::Quit => false,
        }
    }
}

/// Everything pressed since the previous frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub confirm: bool,
    pub fire: bool,
    pub quit: bool,
}

impl FrameInput {
    pub const NONE: FrameInput = FrameInput {
        confirm: false,
        fire: false,
        quit: false,
    };

    pub const CONFIRM: FrameInput = FrameInput {
        confirm: true,
        fire: false,
        quit: false,
    };

    pub const FIRE: FrameInput = FrameInput {
        confirm: false,
        fire: true,
        quit: false,
    };

    pub fn push(&mut self, ev: InputEvent) {
        self.confirm |= ev.is_confirm();
        self.fire |= ev == InputEvent::Fire;
        self.quit |= ev == InputEvent::Quit;
    }
}

/// Maps a terminal event to a game input, ignoring key releases and repeats.
pub fn translate(ev: &Event) -> Option<InputEvent> {
    match ev {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                Some(InputEvent::Quit)
            }
            KeyCode::Char(' ') => Some(InputEvent::Space),
            KeyCode::Char('e') | KeyCode::Char('E') => Some(InputEvent::Fire),
            KeyCode::Char('q') | KeyCode::Esc => Some(InputEvent::Quit),
            _ => None,
        },
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            ..
        }) => Some(InputEvent::MouseLeft),
        _ => None,
    }
}
