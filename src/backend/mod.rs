//! Platform backends for [`Window`](crate::Window).

use raw_window_handle::RawWindowHandle;

use crate::Point;
use crate::Size;
use crate::SystemEvent;

mod headless;
pub use headless::EventInjector;
pub use headless::HeadlessBackend;

#[cfg(any(windows, target_os = "macos", target_os = "linux", target_os = "dragonfly", target_os = "freebsd", target_os = "netbsd", target_os = "openbsd"))]
mod desktop;

#[cfg(any(windows, target_os = "macos", target_os = "linux", target_os = "dragonfly", target_os = "freebsd", target_os = "netbsd", target_os = "openbsd"))]
#[cfg_attr(feature = "nightly", doc(cfg(any(windows, target_os = "macos", target_os = "linux", target_os = "dragonfly", target_os = "freebsd", target_os = "netbsd", target_os = "openbsd"))))]
pub use desktop::WinitBackend;

/// The platform specific part of a window.
///
/// A backend owns the native window (if any) and collects its input.
/// It never talks to event listeners:
/// the [`Window`](crate::Window) that owns the backend does that with the events it pumps.
pub trait WindowBackend {
	/// Move the client area to a new position in screen coordinates.
	fn set_position(&mut self, position: Point);

	/// Get the position of the client area in screen coordinates.
	fn position(&self) -> Point;

	/// Resize the client area (if `use_client_area` is true) or the whole window.
	fn set_size(&mut self, size: Size, use_client_area: bool);

	/// Get the size of the client area (if `use_client_area` is true) or the whole window.
	fn size(&self, use_client_area: bool) -> Size;

	/// Set the window title.
	fn set_title(&mut self, title: &str);

	/// Get the window title.
	fn title(&self) -> String;

	/// Show or hide the window.
	fn show(&mut self, show: bool);

	/// Check if the window is visible.
	fn is_shown(&self) -> bool;

	/// Get the native window handle, if the backend has a native window.
	fn native_handle(&self) -> Option<RawWindowHandle>;

	/// Collect all pending events without blocking.
	///
	/// Events are appended to `events` in the order they occurred.
	fn process_system_events(&mut self, events: &mut Vec<SystemEvent>);
}
