//! Event types.

use crate::Key;

/// A position or motion in integer pixel coordinates.
pub type Point = glam::IVec2;

/// A size in pixels.
pub type Size = glam::UVec2;

macro_rules! impl_from_variant {
	($for:ident::$variant:ident($from:ty)) => {
		impl From<$from> for $for {
			fn from(other: $from) -> Self {
				Self::$variant(other)
			}
		}
	};
}

/// An event reported by a window backend.
///
/// Backends append these events when the window pumps them,
/// after which the window posts each one to its listeners.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SystemEvent {
	/// A key or mouse button was pressed.
	KeyDown(Key),

	/// A key or mouse button was released.
	KeyUp(Key),

	/// A character was typed.
	Char(char),

	/// The mouse wheel was moved by the given number of notches.
	WheelMotion(i32),

	/// The mouse cursor moved to a new position relative to the client area.
	LocalMotion(Point),

	/// The mouse was physically moved by the given amount.
	///
	/// This is raw motion that is not bound to the cursor position or the client area.
	GlobalMotion(Point),

	/// The user asked to close the window.
	Quit,
}

impl_from_variant!(SystemEvent::Char(char));

impl SystemEvent {
	/// Create a key down or key up event.
	pub fn key(key: Key, pressed: bool) -> Self {
		if pressed {
			Self::KeyDown(key)
		} else {
			Self::KeyUp(key)
		}
	}

	/// Check if the event is a quit request.
	pub fn is_quit(&self) -> bool {
		matches!(self, Self::Quit)
	}
}
