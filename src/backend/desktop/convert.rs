use winit::event::DeviceEvent;
use winit::event::ElementState;
use winit::event::MouseButton;
use winit::event::MouseScrollDelta;
use winit::event::VirtualKeyCode;
use winit::event::WindowEvent;

use crate::Key;
use crate::Point;
use crate::SystemEvent;

/// Number of pixels in one notch of the mouse wheel.
const PIXELS_PER_NOTCH: f64 = 120.0;

/// Convert a winit window event to a [`SystemEvent`].
///
/// Returns `None` for events that have no listener callback.
pub fn convert_window_event(event: &WindowEvent<'_>) -> Option<SystemEvent> {
	match event {
		WindowEvent::KeyboardInput { input, .. } => {
			let key = convert_key_code(input.virtual_keycode?)?;
			Some(SystemEvent::key(key, input.state == ElementState::Pressed))
		},
		WindowEvent::MouseInput { state, button, .. } => {
			let key = convert_mouse_button(*button)?;
			Some(SystemEvent::key(key, *state == ElementState::Pressed))
		},
		WindowEvent::ReceivedCharacter(chr) => Some(SystemEvent::Char(*chr)),
		WindowEvent::MouseWheel { delta, .. } => {
			match convert_scroll_delta(*delta) {
				0 => None,
				motion => Some(SystemEvent::WheelMotion(motion)),
			}
		},
		WindowEvent::CursorMoved { position, .. } => Some(SystemEvent::LocalMotion(round_point(position.x, position.y))),
		WindowEvent::CloseRequested => Some(SystemEvent::Quit),
		_ => None,
	}
}

/// Convert a winit device event to a [`SystemEvent`].
///
/// Only mouse motion is translated, to [`SystemEvent::GlobalMotion`].
pub fn convert_device_event(event: &DeviceEvent) -> Option<SystemEvent> {
	match event {
		DeviceEvent::MouseMotion { delta: (x, y) } => {
			let motion = round_point(*x, *y);
			if motion == Point::ZERO {
				None
			} else {
				Some(SystemEvent::GlobalMotion(motion))
			}
		},
		_ => None,
	}
}

/// Convert a scroll delta to a number of wheel notches.
fn convert_scroll_delta(delta: MouseScrollDelta) -> i32 {
	match delta {
		MouseScrollDelta::LineDelta(_x, y) => y.round() as i32,
		MouseScrollDelta::PixelDelta(position) => (position.y / PIXELS_PER_NOTCH).round() as i32,
	}
}

fn round_point(x: f64, y: f64) -> Point {
	Point::new(x.round() as i32, y.round() as i32)
}

/// Platform button numbers of the "back" mouse button.
#[cfg(windows)]
const BACK_BUTTONS: &[u16] = &[1];
#[cfg(target_os = "macos")]
const BACK_BUTTONS: &[u16] = &[3];
#[cfg(not(any(windows, target_os = "macos")))]
const BACK_BUTTONS: &[u16] = &[8, 0x113];

/// Platform button numbers of the "forward" mouse button.
#[cfg(windows)]
const FORWARD_BUTTONS: &[u16] = &[2];
#[cfg(target_os = "macos")]
const FORWARD_BUTTONS: &[u16] = &[4];
#[cfg(not(any(windows, target_os = "macos")))]
const FORWARD_BUTTONS: &[u16] = &[9, 0x114];

/// Convert a winit mouse button to a [`Key`].
///
/// X11 reports button numbers and Wayland reports evdev codes, so both are accepted on unix.
pub fn convert_mouse_button(button: MouseButton) -> Option<Key> {
	match button {
		MouseButton::Left => Some(Key::LButton),
		MouseButton::Right => Some(Key::RButton),
		MouseButton::Middle => Some(Key::MButton),
		MouseButton::Other(x) if BACK_BUTTONS.contains(&x) => Some(Key::XButton1),
		MouseButton::Other(x) if FORWARD_BUTTONS.contains(&x) => Some(Key::XButton2),
		MouseButton::Other(_) => None,
	}
}

/// Convert a winit virtual key code to a [`Key`].
///
/// Returns `None` for keys without a counterpart.
pub fn convert_key_code(key: VirtualKeyCode) -> Option<Key> {
	use VirtualKeyCode as V;
	let key = match key {
		V::Key0 => Key::D0,
		V::Key1 => Key::D1,
		V::Key2 => Key::D2,
		V::Key3 => Key::D3,
		V::Key4 => Key::D4,
		V::Key5 => Key::D5,
		V::Key6 => Key::D6,
		V::Key7 => Key::D7,
		V::Key8 => Key::D8,
		V::Key9 => Key::D9,

		V::A => Key::A,
		V::B => Key::B,
		V::C => Key::C,
		V::D => Key::D,
		V::E => Key::E,
		V::F => Key::F,
		V::G => Key::G,
		V::H => Key::H,
		V::I => Key::I,
		V::J => Key::J,
		V::K => Key::K,
		V::L => Key::L,
		V::M => Key::M,
		V::N => Key::N,
		V::O => Key::O,
		V::P => Key::P,
		V::Q => Key::Q,
		V::R => Key::R,
		V::S => Key::S,
		V::T => Key::T,
		V::U => Key::U,
		V::V => Key::V,
		V::W => Key::W,
		V::X => Key::X,
		V::Y => Key::Y,
		V::Z => Key::Z,

		V::F1 => Key::F1,
		V::F2 => Key::F2,
		V::F3 => Key::F3,
		V::F4 => Key::F4,
		V::F5 => Key::F5,
		V::F6 => Key::F6,
		V::F7 => Key::F7,
		V::F8 => Key::F8,
		V::F9 => Key::F9,
		V::F10 => Key::F10,
		V::F11 => Key::F11,
		V::F12 => Key::F12,

		V::Escape => Key::Escape,
		V::Back => Key::Back,
		V::Tab => Key::Tab,
		V::Return | V::NumpadEnter => Key::Return,
		V::Space => Key::Space,
		V::Pause => Key::Pause,
		V::Capital => Key::Capital,
		V::Snapshot => Key::Snapshot,
		V::Sysrq => Key::Print,
		V::Insert => Key::Insert,
		V::Delete => Key::Delete,
		V::Home => Key::Home,
		V::End => Key::End,
		V::PageUp => Key::PageUp,
		V::PageDown => Key::PageDown,
		V::Left => Key::Left,
		V::Up => Key::Up,
		V::Right => Key::Right,
		V::Down => Key::Down,

		V::Numpad0 => Key::Keypad0,
		V::Numpad1 => Key::Keypad1,
		V::Numpad2 => Key::Keypad2,
		V::Numpad3 => Key::Keypad3,
		V::Numpad4 => Key::Keypad4,
		V::Numpad5 => Key::Keypad5,
		V::Numpad6 => Key::Keypad6,
		V::Numpad7 => Key::Keypad7,
		V::Numpad8 => Key::Keypad8,
		V::Numpad9 => Key::Keypad9,
		V::NumpadMultiply => Key::KeypadMultiply,
		V::NumpadAdd => Key::KeypadPlus,
		V::NumpadComma => Key::KeypadSeparator,
		V::NumpadSubtract => Key::KeypadMinus,
		V::NumpadDecimal => Key::KeypadDecimal,
		V::NumpadDivide => Key::KeypadDivide,
		V::Numlock => Key::NumLock,
		V::Scroll => Key::ScrollLock,

		V::LShift => Key::LShift,
		V::RShift => Key::RShift,
		V::LControl => Key::LControl,
		V::RControl => Key::RControl,
		V::LAlt => Key::LMenu,
		V::RAlt => Key::RMenu,
		V::LWin => Key::LWin,
		V::RWin => Key::RWin,

		V::Plus => Key::Plus,
		V::Comma => Key::Comma,
		V::Minus => Key::Minus,
		V::Period => Key::Period,

		_ => return None,
	};
	Some(key)
}

#[cfg(test)]
#[allow(deprecated)]
mod test {
	use super::*;
	use assert2::assert;
	use winit::dpi::PhysicalPosition;
	use winit::event::DeviceId;
	use winit::event::KeyboardInput;
	use winit::event::ModifiersState;
	use winit::event::TouchPhase;

	fn device_id() -> DeviceId {
		// SAFETY: the dummy ID is only compared, never passed to the platform.
		unsafe { DeviceId::dummy() }
	}

	fn keyboard_input(key: Option<VirtualKeyCode>, state: ElementState) -> WindowEvent<'static> {
		WindowEvent::KeyboardInput {
			device_id: device_id(),
			input: KeyboardInput {
				scancode: 0,
				state,
				virtual_keycode: key,
				modifiers: ModifiersState::empty(),
			},
			is_synthetic: false,
		}
	}

	fn mouse_wheel(delta: MouseScrollDelta) -> WindowEvent<'static> {
		WindowEvent::MouseWheel {
			device_id: device_id(),
			delta,
			phase: TouchPhase::Moved,
			modifiers: ModifiersState::empty(),
		}
	}

	#[test]
	fn keyboard_input_to_key_events() {
		assert!(convert_window_event(&keyboard_input(Some(VirtualKeyCode::A), ElementState::Pressed)) == Some(SystemEvent::KeyDown(Key::A)));
		assert!(convert_window_event(&keyboard_input(Some(VirtualKeyCode::Escape), ElementState::Released)) == Some(SystemEvent::KeyUp(Key::Escape)));
		assert!(convert_window_event(&keyboard_input(None, ElementState::Pressed)) == None);
		assert!(convert_window_event(&keyboard_input(Some(VirtualKeyCode::Mute), ElementState::Pressed)) == None);
	}

	#[test]
	fn mouse_buttons_to_key_events() {
		let event = WindowEvent::MouseInput {
			device_id: device_id(),
			state: ElementState::Pressed,
			button: MouseButton::Right,
			modifiers: ModifiersState::empty(),
		};
		assert!(convert_window_event(&event) == Some(SystemEvent::KeyDown(Key::RButton)));
		assert!(convert_mouse_button(MouseButton::Other(12)) == None);
	}

	#[test]
	fn extra_mouse_buttons() {
		for &button in BACK_BUTTONS {
			assert!(convert_mouse_button(MouseButton::Other(button)) == Some(Key::XButton1));
		}
		for &button in FORWARD_BUTTONS {
			assert!(convert_mouse_button(MouseButton::Other(button)) == Some(Key::XButton2));
		}

		let event = WindowEvent::MouseInput {
			device_id: device_id(),
			state: ElementState::Released,
			button: MouseButton::Other(BACK_BUTTONS[0]),
			modifiers: ModifiersState::empty(),
		};
		assert!(convert_window_event(&event) == Some(SystemEvent::KeyUp(Key::XButton1)));
	}

	#[test]
	fn characters_and_close() {
		assert!(convert_window_event(&WindowEvent::ReceivedCharacter('ß')) == Some(SystemEvent::Char('ß')));
		assert!(convert_window_event(&WindowEvent::CloseRequested) == Some(SystemEvent::Quit));
		assert!(convert_window_event(&WindowEvent::Focused(true)) == None);
	}

	#[test]
	fn wheel_motion() {
		assert!(convert_window_event(&mouse_wheel(MouseScrollDelta::LineDelta(0.0, 1.0))) == Some(SystemEvent::WheelMotion(1)));
		assert!(convert_window_event(&mouse_wheel(MouseScrollDelta::LineDelta(0.0, -2.4))) == Some(SystemEvent::WheelMotion(-2)));
		assert!(convert_window_event(&mouse_wheel(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 240.0)))) == Some(SystemEvent::WheelMotion(2)));
		assert!(convert_window_event(&mouse_wheel(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 10.0)))) == None);
	}

	#[test]
	fn cursor_and_device_motion() {
		let event = WindowEvent::CursorMoved {
			device_id: device_id(),
			position: PhysicalPosition::new(10.4, 20.6),
			modifiers: ModifiersState::empty(),
		};
		assert!(convert_window_event(&event) == Some(SystemEvent::LocalMotion(Point::new(10, 21))));

		let motion = DeviceEvent::MouseMotion { delta: (1.6, -3.0) };
		assert!(convert_device_event(&motion) == Some(SystemEvent::GlobalMotion(Point::new(2, -3))));
		assert!(convert_device_event(&DeviceEvent::MouseMotion { delta: (0.2, 0.1) }) == None);
	}

	#[test]
	fn key_codes() {
		assert!(convert_key_code(VirtualKeyCode::Key5) == Some(Key::D5));
		assert!(convert_key_code(VirtualKeyCode::NumpadEnter) == Some(Key::Return));
		assert!(convert_key_code(VirtualKeyCode::LAlt) == Some(Key::LMenu));
		assert!(convert_key_code(VirtualKeyCode::F12) == Some(Key::F12));
		assert!(convert_key_code(VirtualKeyCode::F13) == None);
	}
}
