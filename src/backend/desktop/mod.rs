use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Mutex;
use std::thread::ThreadId;

use indexmap::IndexMap;
use raw_window_handle::HasRawWindowHandle;
use raw_window_handle::RawWindowHandle;
use winit::event::Event;
use winit::event_loop::ControlFlow;
use winit::event_loop::EventLoop;
use winit::event_loop::EventLoopWindowTarget;
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::WindowId;

use crate::Point;
use crate::Size;
use crate::SystemEvent;
use crate::WindowDescriptor;
use crate::error::CreateWindowError;
use crate::error::EventLoopError;
use super::WindowBackend;

mod convert;

/// The thread that created the winit event loop.
///
/// winit allows one event loop per process, so every other thread is refused.
static EVENT_LOOP_THREAD: Mutex<Option<ThreadId>> = Mutex::new(None);

thread_local! {
	/// The event loop, on the thread that created it. It is never dropped.
	static SHARED_EVENT_LOOP: RefCell<Option<Rc<SharedEventLoop>>> = RefCell::new(None);
}

/// A winit event loop shared by all windows.
///
/// Pumping the loop on behalf of one window also collects the events of all other windows.
/// Those are kept in per-window queues until their own window is pumped.
struct SharedEventLoop {
	/// The winit event loop.
	event_loop: RefCell<EventLoop<()>>,

	/// Pending events for each live window, in window creation order.
	queues: RefCell<IndexMap<WindowId, Vec<SystemEvent>>>,
}

impl SharedEventLoop {
	/// Get the event loop, creating it if needed.
	///
	/// Fails if the calling thread can not own the event loop or if winit fails to initialize.
	fn current() -> Result<Rc<Self>, EventLoopError> {
		if let Some(shared) = SHARED_EVENT_LOOP.with(|shared| shared.borrow().clone()) {
			return Ok(shared);
		}

		let mut owner = EVENT_LOOP_THREAD.lock().unwrap_or_else(|e| e.into_inner());
		let thread = std::thread::current();
		check_event_loop_thread(*owner, thread.id(), thread.name())?;
		check_display()?;

		log::debug!("creating winit event loop");
		let event_loop = std::panic::catch_unwind(EventLoop::<()>::new).map_err(|payload| {
			let message = panic_message(&*payload);
			log::error!("failed to initialize winit event loop: {}", message);
			EventLoopError::Platform(message)
		})?;
		*owner = Some(thread.id());

		let shared = Rc::new(Self {
			event_loop: RefCell::new(event_loop),
			queues: RefCell::new(IndexMap::new()),
		});
		SHARED_EVENT_LOOP.with(|slot| *slot.borrow_mut() = Some(shared.clone()));
		Ok(shared)
	}

	/// Run the event loop until all pending events are handled, without blocking.
	fn pump(&self) {
		let mut event_loop = self.event_loop.borrow_mut();
		let mut queues = self.queues.borrow_mut();
		event_loop.run_return(|event, _event_loop, control_flow| {
			*control_flow = ControlFlow::Poll;
			match event {
				Event::WindowEvent { window_id, event } => {
					let queue = match queues.get_mut(&window_id) {
						Some(x) => x,
						None => return,
					};
					if let Some(event) = convert::convert_window_event(&event) {
						queue.push(event);
					}
				},
				Event::DeviceEvent { event, .. } => {
					if let Some(event) = convert::convert_device_event(&event) {
						for queue in queues.values_mut() {
							queue.push(event);
						}
					}
				},
				Event::MainEventsCleared => {
					*control_flow = ControlFlow::Exit;
				},
				_ => {},
			}
		});
	}

	/// Move the pending events of a window into `events`.
	fn take_events(&self, window_id: WindowId, events: &mut Vec<SystemEvent>) {
		if let Some(queue) = self.queues.borrow_mut().get_mut(&window_id) {
			events.append(queue);
		}
	}
}

/// A native desktop window backed by winit.
///
/// All windows share one event loop, owned by the thread that created the first window.
/// That must be the main thread, and all later windows must be created on it too.
pub struct WinitBackend {
	/// The winit window.
	window: winit::window::Window,

	/// The event loop that delivers events for the window.
	shared: Rc<SharedEventLoop>,

	/// The last title set on the window, for platforms that can not report it.
	title: String,

	/// The last visibility set on the window, for platforms that can not report it.
	visible: bool,
}

impl WinitBackend {
	/// Create a native window.
	pub fn new(descriptor: &WindowDescriptor) -> Result<Self, CreateWindowError> {
		let shared = SharedEventLoop::current()?;

		let window = {
			let event_loop = shared.event_loop.borrow();
			let event_loop: &EventLoopWindowTarget<()> = &event_loop;
			build_window(event_loop, descriptor)?
		};

		shared.queues.borrow_mut().insert(window.id(), Vec::new());
		log::debug!("created window {:?} with title {:?}", window.id(), descriptor.title);

		let mut backend = Self {
			window,
			shared,
			title: descriptor.title.clone(),
			visible: descriptor.visible,
		};

		if !descriptor.centered {
			backend.set_position(descriptor.position);
		}

		Ok(backend)
	}

	/// Get the winit window ID.
	pub fn id(&self) -> WindowId {
		self.window.id()
	}

	/// Get the offset of the client area relative to the outer window.
	fn client_offset(&self) -> Point {
		match (self.window.inner_position(), self.window.outer_position()) {
			(Ok(inner), Ok(outer)) => Point::new(inner.x - outer.x, inner.y - outer.y),
			_ => Point::ZERO,
		}
	}
}

impl WindowBackend for WinitBackend {
	fn set_position(&mut self, position: Point) {
		let outer = position - self.client_offset();
		self.window.set_outer_position(winit::dpi::PhysicalPosition::new(outer.x, outer.y));
	}

	fn position(&self) -> Point {
		match self.window.inner_position().or_else(|_| self.window.outer_position()) {
			Ok(position) => Point::new(position.x, position.y),
			Err(_) => Point::ZERO,
		}
	}

	fn set_size(&mut self, size: Size, use_client_area: bool) {
		let inner = if use_client_area {
			size
		} else {
			let outer = self.window.outer_size();
			let current = self.window.inner_size();
			let border_x = outer.width.saturating_sub(current.width);
			let border_y = outer.height.saturating_sub(current.height);
			Size::new(size.x.saturating_sub(border_x), size.y.saturating_sub(border_y))
		};
		self.window.set_inner_size(winit::dpi::PhysicalSize::new(inner.x, inner.y));
	}

	fn size(&self, use_client_area: bool) -> Size {
		let size = if use_client_area {
			self.window.inner_size()
		} else {
			self.window.outer_size()
		};
		Size::new(size.width, size.height)
	}

	fn set_title(&mut self, title: &str) {
		self.window.set_title(title);
		self.title = title.to_string();
	}

	fn title(&self) -> String {
		reported_title(self.window.title(), &self.title)
	}

	fn show(&mut self, show: bool) {
		self.window.set_visible(show);
		self.visible = show;
	}

	fn is_shown(&self) -> bool {
		reported_visibility(self.window.is_visible(), self.visible)
	}

	fn native_handle(&self) -> Option<RawWindowHandle> {
		Some(self.window.raw_window_handle())
	}

	fn process_system_events(&mut self, events: &mut Vec<SystemEvent>) {
		self.shared.pump();
		self.shared.take_events(self.window.id(), events);
	}
}

impl Drop for WinitBackend {
	fn drop(&mut self) {
		self.shared.queues.borrow_mut().shift_remove(&self.window.id());
		log::debug!("destroyed window {:?}", self.window.id());
	}
}

/// Build a winit window from a descriptor.
fn build_window(event_loop: &EventLoopWindowTarget<()>, descriptor: &WindowDescriptor) -> Result<winit::window::Window, winit::error::OsError> {
	let mut builder = winit::window::WindowBuilder::new()
		.with_title(&descriptor.title)
		.with_visible(descriptor.visible)
		.with_decorations(!descriptor.borderless)
		.with_resizable(descriptor.resizable);

	if descriptor.size.x > 0 && descriptor.size.y > 0 {
		builder = builder.with_inner_size(winit::dpi::PhysicalSize::new(descriptor.size.x, descriptor.size.y));
	}

	if descriptor.centered {
		match centered_position(event_loop, descriptor.size) {
			Some(position) => builder = builder.with_position(winit::dpi::PhysicalPosition::new(position.x, position.y)),
			None => log::warn!("no monitor found to center window {:?} on", descriptor.title),
		}
	}

	if let Some(parent) = descriptor.parent_window() {
		// SAFETY: `WindowDescriptor::set_parent_window` requires the handle to be valid for the lifetime of the new window.
		builder = unsafe { builder.with_parent_window(Some(parent)) };
	}

	#[cfg(windows)]
	{
		use winit::platform::windows::WindowBuilderExtWindows;
		builder = builder.with_drag_and_drop(descriptor.accept_drop_files);
	}

	if descriptor.prevent_for_power_save {
		log::warn!("preventing power save mode is not supported, ignoring it for window {:?}", descriptor.title);
	}

	builder.build(event_loop)
}

/// Check that the calling thread may create or use the event loop.
///
/// The event loop must be created on the main thread, and is then bound to it.
fn check_event_loop_thread(owner: Option<ThreadId>, current: ThreadId, name: Option<&str>) -> Result<(), EventLoopError> {
	match owner {
		Some(owner) if owner != current => Err(EventLoopError::ForeignThread),
		Some(_) => Ok(()),
		None if name == Some("main") => Ok(()),
		None => Err(EventLoopError::NotMainThread),
	}
}

/// Check that a display server is advertised before winit tries to connect to one.
#[cfg(all(unix, not(target_os = "macos")))]
fn check_display() -> Result<(), EventLoopError> {
	let display_vars = ["DISPLAY", "WAYLAND_DISPLAY", "WAYLAND_SOCKET"];
	if display_vars.iter().any(|name| std::env::var_os(name).is_some()) {
		Ok(())
	} else {
		Err(EventLoopError::NoDisplay)
	}
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn check_display() -> Result<(), EventLoopError> {
	Ok(())
}

/// Get the message of a caught panic.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
	if let Some(message) = payload.downcast_ref::<&str>() {
		message.to_string()
	} else if let Some(message) = payload.downcast_ref::<String>() {
		message.clone()
	} else {
		"unknown error".to_string()
	}
}

/// Prefer the title reported by the platform, some report an empty string instead.
fn reported_title(reported: String, cached: &str) -> String {
	if reported.is_empty() {
		cached.to_string()
	} else {
		reported
	}
}

/// Prefer the visibility reported by the platform, so changes made by the window manager are seen.
fn reported_visibility(reported: Option<bool>, cached: bool) -> bool {
	reported.unwrap_or(cached)
}

/// Compute the position that centers a window of the given size on the primary monitor.
fn centered_position(event_loop: &EventLoopWindowTarget<()>, size: Size) -> Option<Point> {
	let monitor = event_loop.primary_monitor().or_else(|| event_loop.available_monitors().next())?;
	let monitor_position = monitor.position();
	let monitor_size = monitor.size();
	Some(Point::new(
		monitor_position.x + centered_offset(monitor_size.width, size.x),
		monitor_position.y + centered_offset(monitor_size.height, size.y),
	))
}

/// Offset that centers a span of `inner` pixels in a span of `outer` pixels.
fn centered_offset(outer: u32, inner: u32) -> i32 {
	(i64::from(outer) - i64::from(inner)).div_euclid(2) as i32
}
