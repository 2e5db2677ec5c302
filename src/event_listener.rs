use crate::Key;
use crate::Point;
use crate::Window;

/// A receiver of window and input notifications.
///
/// Register a listener with [`Window::add_listener`].
/// Every method has a default implementation, so a listener only implements the callbacks it cares about.
///
/// The window holds a shared reference to each listener,
/// so callbacks take `&self`.
/// Use interior mutability (such as [`std::cell::Cell`] or [`std::cell::RefCell`]) to keep state.
///
/// Callbacks receive the window that posted the event.
/// They may add or remove listeners on that window:
/// the change takes effect for the next posted event.
pub trait EventListener {
	/// Called when the window (or the render context attached to it) was reset.
	fn on_reset(&self, sender: &mut Window) {
		let _ = sender;
	}

	/// Called when a key or mouse button was pressed.
	fn on_key_down(&self, sender: &mut Window, key: Key) {
		let _ = (sender, key);
	}

	/// Called when a key or mouse button was released.
	fn on_key_up(&self, sender: &mut Window, key: Key) {
		let _ = (sender, key);
	}

	/// Called when a character was typed.
	fn on_char(&self, sender: &mut Window, chr: char) {
		let _ = (sender, chr);
	}

	/// Called when the mouse wheel was moved.
	fn on_wheel_motion(&self, sender: &mut Window, motion: i32) {
		let _ = (sender, motion);
	}

	/// Called when the mouse cursor moved inside the window.
	///
	/// The position is relative to the client area.
	fn on_local_motion(&self, sender: &mut Window, position: Point) {
		let _ = (sender, position);
	}

	/// Called with the raw physical motion of the mouse.
	fn on_global_motion(&self, sender: &mut Window, motion: Point) {
		let _ = (sender, motion);
	}

	/// Called when the window is asked to quit.
	///
	/// Return `false` to veto.
	/// The window only quits if every registered listener returns `true`,
	/// after which [`Window::process_events`] returns `false` forever.
	fn on_quit(&self, sender: &mut Window) -> bool {
		let _ = sender;
		true
	}
}
