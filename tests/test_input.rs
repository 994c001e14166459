use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use takuman::input::*;

fn key(code: KeyCode, kind: KeyEventKind) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    })
}

fn press(code: KeyCode) -> Event {
    key(code, KeyEventKind::Press)
}

#[test]
fn confirm_sources() {
    assert!(InputEvent::Space.is_confirm());
    assert!(InputEvent::MouseLeft.is_confirm());
    assert!(InputEvent::TouchDown.is_confirm());
    assert!(InputEvent::StandardGamepad(StandardButton::RightBottom).is_confirm());
    assert!(InputEvent::StandardGamepad(StandardButton::RightRight).is_confirm());
    assert!(InputEvent::RawGamepad(0).is_confirm());
    assert!(InputEvent::RawGamepad(1).is_confirm());
}

#[test]
fn non_confirm_sources() {
    assert!(!InputEvent::StandardGamepad(StandardButton::Other).is_confirm());
    assert!(!InputEvent::RawGamepad(2).is_confirm());
    assert!(!InputEvent::Fire.is_confirm());
    assert!(!InputEvent::Quit.is_confirm());
}

#[test]
fn terminal_keys_translate() {
    assert_eq!(translate(&press(KeyCode::Char(' '))), Some(InputEvent::Space));
    assert_eq!(translate(&press(KeyCode::Char('e'))), Some(InputEvent::Fire));
    assert_eq!(translate(&press(KeyCode::Char('E'))), Some(InputEvent::Fire));
    assert_eq!(translate(&press(KeyCode::Esc)), Some(InputEvent::Quit));
    assert_eq!(translate(&press(KeyCode::Char('q'))), Some(InputEvent::Quit));
    assert_eq!(translate(&press(KeyCode::Char('x'))), None);
}

#[test]
fn ctrl_c_quits() {
    let ev = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(translate(&ev), Some(InputEvent::Quit));
}

#[test]
fn only_presses_count() {
    assert_eq!(translate(&key(KeyCode::Char(' '), KeyEventKind::Release)), None);
    assert_eq!(translate(&key(KeyCode::Char(' '), KeyEventKind::Repeat)), None);
}

#[test]
fn left_click_confirms() {
    let click = |button| {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(button),
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        })
    };
    assert_eq!(translate(&click(MouseButton::Left)), Some(InputEvent::MouseLeft));
    assert_eq!(translate(&click(MouseButton::Right)), None);
}

#[test]
fn frame_input_collects_edges() {
    let mut input = FrameInput::default();
    assert_eq!(input, FrameInput::NONE);
    input.push(InputEvent::Fire);
    input.push(InputEvent::RawGamepad(1));
    assert!(input.confirm && input.fire && !input.quit);
    input.push(InputEvent::Quit);
    assert!(input.quit);
}
