use std::rc::Rc;

use raw_window_handle::RawWindowHandle;

use crate::EventDispatcher;
use crate::EventListener;
use crate::Key;
use crate::Point;
use crate::Size;
use crate::SystemEvent;
use crate::backend::WindowBackend;
use crate::error::CreateWindowError;

/// Options for creating a window.
#[derive(Debug, Clone, Default)]
pub struct WindowDescriptor {
	/// The window title.
	pub title: String,

	/// The position of the client area in screen coordinates.
	///
	/// Ignored if [`Self::centered`] is true.
	pub position: Point,

	/// The size of the client area in pixels.
	pub size: Size,

	/// Show the window immediately.
	pub visible: bool,

	/// Create the window without decorations (title bar and borders).
	pub borderless: bool,

	/// Allow the user to resize the window.
	///
	/// This may be ignored by a window manager.
	pub resizable: bool,

	/// Accept files dragged onto the window.
	pub accept_drop_files: bool,

	/// Keep the system from entering power save mode while the window exists.
	pub prevent_for_power_save: bool,

	/// Place the window in the middle of the primary monitor.
	pub centered: bool,

	/// Create the window as child of another native window.
	parent_window: Option<RawWindowHandle>,
}

impl WindowDescriptor {
	/// Create a descriptor with a title and client area size.
	pub fn new(title: impl Into<String>, size: impl Into<Size>) -> Self {
		Self {
			title: title.into(),
			size: size.into(),
			..Default::default()
		}
	}

	/// Set the window title.
	///
	/// This function consumes and returns `self` to allow daisy chaining.
	pub fn set_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Set the initial position of the client area.
	///
	/// This function consumes and returns `self` to allow daisy chaining.
	pub fn set_position(mut self, position: impl Into<Point>) -> Self {
		self.position = position.into();
		self
	}

	/// Set the initial size of the client area.
	///
	/// This function consumes and returns `self` to allow daisy chaining.
	pub fn set_size(mut self, size: impl Into<Size>) -> Self {
		self.size = size.into();
		self
	}

	/// Show the window immediately, or not.
	///
	/// This function consumes and returns `self` to allow daisy chaining.
	pub fn set_visible(mut self, visible: bool) -> Self {
		self.visible = visible;
		self
	}

	/// Create the window without decorations, or not.
	///
	/// This function consumes and returns `self` to allow daisy chaining.
	pub fn set_borderless(mut self, borderless: bool) -> Self {
		self.borderless = borderless;
		self
	}

	/// Make the window resizable or not.
	///
	/// This property may be ignored by a window manager.
	///
	/// This function consumes and returns `self` to allow daisy chaining.
	pub fn set_resizable(mut self, resizable: bool) -> Self {
		self.resizable = resizable;
		self
	}

	/// Accept files dropped on the window, or not.
	///
	/// This function consumes and returns `self` to allow daisy chaining.
	pub fn set_accept_drop_files(mut self, accept_drop_files: bool) -> Self {
		self.accept_drop_files = accept_drop_files;
		self
	}

	/// Prevent power save mode while the window exists, or not.
	///
	/// This function consumes and returns `self` to allow daisy chaining.
	pub fn set_prevent_for_power_save(mut self, prevent_for_power_save: bool) -> Self {
		self.prevent_for_power_save = prevent_for_power_save;
		self
	}

	/// Center the window on the primary monitor, or not.
	///
	/// This function consumes and returns `self` to allow daisy chaining.
	pub fn set_centered(mut self, centered: bool) -> Self {
		self.centered = centered;
		self
	}

	/// Set the native parent window.
	///
	/// This function consumes and returns `self` to allow daisy chaining.
	///
	/// # Safety
	/// The handle must refer to a valid native window that outlives every window created from this descriptor.
	pub unsafe fn set_parent_window(mut self, parent_window: Option<RawWindowHandle>) -> Self {
		self.parent_window = parent_window;
		self
	}

	/// Get the native parent window, if any.
	pub fn parent_window(&self) -> Option<RawWindowHandle> {
		self.parent_window
	}
}

/// A window with a list of event listeners.
///
/// The platform specific work is done by a [`WindowBackend`].
/// The window itself only dispatches events and negotiates shutdown:
/// a call to [`Self::process_events`] pumps the backend,
/// posts every pumped event to the registered listeners,
/// and reports whether the window should keep running.
pub struct Window {
	/// The platform backend.
	backend: Box<dyn WindowBackend>,

	/// The registered listeners and the quit state.
	dispatcher: EventDispatcher,

	/// Reused buffer for pumped events.
	pending: Vec<SystemEvent>,
}

impl Window {
	/// Create a native window using the desktop backend.
	///
	/// The first window must be created on the main thread, which then owns the event loop.
	/// Creating a window on any other thread returns [`CreateWindowError::EventLoop`].
	#[cfg(any(windows, target_os = "macos", target_os = "linux", target_os = "dragonfly", target_os = "freebsd", target_os = "netbsd", target_os = "openbsd"))]
	pub fn create(descriptor: &WindowDescriptor) -> Result<Self, CreateWindowError> {
		let backend = crate::backend::WinitBackend::new(descriptor)?;
		Ok(Self::with_backend(backend))
	}

	/// Create a native window using the desktop backend.
	///
	/// The desktop backend is not available on this platform, so this always fails.
	#[cfg(not(any(windows, target_os = "macos", target_os = "linux", target_os = "dragonfly", target_os = "freebsd", target_os = "netbsd", target_os = "openbsd")))]
	pub fn create(descriptor: &WindowDescriptor) -> Result<Self, CreateWindowError> {
		let _ = descriptor;
		Err(crate::error::UnsupportedPlatformError.into())
	}

	/// Create a window on top of a custom backend.
	pub fn with_backend<B: WindowBackend + 'static>(backend: B) -> Self {
		Self::with_boxed_backend(Box::new(backend))
	}

	/// Create a window on top of a custom backend.
	///
	/// This does the same as [`Self::with_backend`],
	/// but doesn't add another layer of boxing if you already have a boxed backend.
	pub fn with_boxed_backend(backend: Box<dyn WindowBackend>) -> Self {
		Self {
			backend,
			dispatcher: EventDispatcher::new(),
			pending: Vec::new(),
		}
	}

	/// Move the client area to a new position in screen coordinates.
	pub fn set_position(&mut self, position: Point) {
		self.backend.set_position(position);
	}

	/// Get the position of the client area in screen coordinates.
	pub fn position(&self) -> Point {
		self.backend.position()
	}

	/// Resize the window.
	///
	/// If `use_client_area` is true, the size is that of the client area.
	/// Otherwise it is the size of the whole window, including decorations.
	pub fn set_size(&mut self, size: Size, use_client_area: bool) {
		self.backend.set_size(size, use_client_area);
	}

	/// Get the size of the client area or of the whole window.
	pub fn size(&self, use_client_area: bool) -> Size {
		self.backend.size(use_client_area)
	}

	/// Set the window title.
	pub fn set_title(&mut self, title: &str) {
		self.backend.set_title(title);
	}

	/// Get the window title.
	pub fn title(&self) -> String {
		self.backend.title()
	}

	/// Show or hide the window.
	pub fn show(&mut self, show: bool) {
		self.backend.show(show);
	}

	/// Check if the window is visible.
	pub fn is_shown(&self) -> bool {
		self.backend.is_shown()
	}

	/// Get the native handle of the window.
	///
	/// Returns `None` for backends without a native window.
	pub fn native_handle(&self) -> Option<RawWindowHandle> {
		self.backend.native_handle()
	}

	/// Pump and dispatch all pending events of the backend.
	///
	/// Returns `false` once the window has quit, and keeps returning `false` from then on.
	pub fn process_events(&mut self) -> bool {
		let mut pending = std::mem::take(&mut self.pending);
		self.backend.process_system_events(&mut pending);
		for event in pending.drain(..) {
			self.post_event(event);
		}
		self.pending = pending;
		!self.has_quit()
	}

	/// Check if the window has quit.
	pub fn has_quit(&self) -> bool {
		self.dispatcher.has_quit()
	}

	/// Register a listener.
	///
	/// Listeners are invoked in registration order.
	/// Registering the same listener twice makes it receive every event twice.
	pub fn add_listener(&mut self, listener: Rc<dyn EventListener>) {
		self.dispatcher.add_listener(listener);
	}

	/// Unregister every registration of a listener.
	///
	/// Does nothing if the listener is not registered.
	pub fn remove_listener(&mut self, listener: &dyn EventListener) {
		self.dispatcher.remove_listener(listener);
	}

	/// Get the number of listener registrations, counting duplicates.
	pub fn listener_count(&self) -> usize {
		self.dispatcher.len()
	}

	/// Post an event reported by a backend to the listeners.
	pub fn post_event(&mut self, event: SystemEvent) {
		match event {
			SystemEvent::KeyDown(key) => self.post_key_down(key),
			SystemEvent::KeyUp(key) => self.post_key_up(key),
			SystemEvent::Char(chr) => self.post_char(chr),
			SystemEvent::WheelMotion(motion) => self.post_wheel_motion(motion),
			SystemEvent::LocalMotion(position) => self.post_local_motion(position),
			SystemEvent::GlobalMotion(motion) => self.post_global_motion(motion),
			SystemEvent::Quit => self.post_quit(),
		}
	}

	/// Notify all listeners that the window was reset.
	pub fn post_reset(&mut self) {
		for listener in self.dispatcher.snapshot() {
			listener.on_reset(self);
		}
	}

	/// Notify all listeners that a key was pressed.
	pub fn post_key_down(&mut self, key: Key) {
		for listener in self.dispatcher.snapshot() {
			listener.on_key_down(self, key);
		}
	}

	/// Notify all listeners that a key was released.
	pub fn post_key_up(&mut self, key: Key) {
		for listener in self.dispatcher.snapshot() {
			listener.on_key_up(self, key);
		}
	}

	/// Notify all listeners that a character was typed.
	pub fn post_char(&mut self, chr: char) {
		for listener in self.dispatcher.snapshot() {
			listener.on_char(self, chr);
		}
	}

	/// Notify all listeners that the mouse wheel was moved.
	pub fn post_wheel_motion(&mut self, motion: i32) {
		for listener in self.dispatcher.snapshot() {
			listener.on_wheel_motion(self, motion);
		}
	}

	/// Notify all listeners that the cursor moved inside the client area.
	pub fn post_local_motion(&mut self, position: Point) {
		for listener in self.dispatcher.snapshot() {
			listener.on_local_motion(self, position);
		}
	}

	/// Notify all listeners of raw mouse motion.
	pub fn post_global_motion(&mut self, motion: Point) {
		for listener in self.dispatcher.snapshot() {
			listener.on_global_motion(self, motion);
		}
	}

	/// Ask all listeners if the window may quit.
	///
	/// Every listener is asked, even after one of them refused.
	/// The window quits only if all listeners agree,
	/// so a window without listeners always quits.
	///
	/// Once the window has quit, the listeners are not asked again.
	pub fn post_quit(&mut self) {
		if self.has_quit() {
			return;
		}

		let mut can_quit = true;
		for listener in self.dispatcher.snapshot() {
			if !listener.on_quit(self) {
				can_quit = false;
			}
		}

		if can_quit {
			log::debug!("all event listeners agreed to quit");
			self.dispatcher.set_quit();
		} else {
			log::debug!("quit request was vetoed by an event listener");
		}
	}
}

impl std::fmt::Debug for Window {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.debug_struct("Window")
			.field("dispatcher", &self.dispatcher)
			.finish_non_exhaustive()
	}
}
