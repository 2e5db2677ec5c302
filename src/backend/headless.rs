use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::rc::Weak;

use raw_window_handle::RawWindowHandle;

use crate::Point;
use crate::Size;
use crate::SystemEvent;
use crate::WindowDescriptor;
use super::WindowBackend;

/// A backend without a native window.
///
/// All window properties are kept in memory.
/// Input is fed in through an [`EventInjector`] and handed out on the next pump.
/// The client area and the whole window are the same size, since there are no decorations.
#[derive(Debug)]
pub struct HeadlessBackend {
	/// The window title.
	title: String,

	/// The position of the client area.
	position: Point,

	/// The size of the client area.
	size: Size,

	/// The visibility flag.
	visible: bool,

	/// Events waiting for the next pump.
	queue: Rc<RefCell<VecDeque<SystemEvent>>>,
}

/// Handle to queue events for a [`HeadlessBackend`].
///
/// The injector can be cloned freely and outlive the backend.
/// Events injected after the backend was dropped are discarded.
#[derive(Debug, Clone)]
pub struct EventInjector {
	queue: Weak<RefCell<VecDeque<SystemEvent>>>,
}

impl HeadlessBackend {
	/// Create a headless backend from a window descriptor.
	pub fn new(descriptor: &WindowDescriptor) -> Self {
		if descriptor.parent_window().is_some() {
			log::warn!("headless backend ignores the parent window of {:?}", descriptor.title);
		}

		Self {
			title: descriptor.title.clone(),
			position: descriptor.position,
			size: descriptor.size,
			visible: descriptor.visible,
			queue: Default::default(),
		}
	}

	/// Get a handle to queue events for this backend.
	pub fn injector(&self) -> EventInjector {
		EventInjector {
			queue: Rc::downgrade(&self.queue),
		}
	}
}

impl EventInjector {
	/// Queue an event.
	pub fn inject(&self, event: impl Into<SystemEvent>) {
		if let Some(queue) = self.queue.upgrade() {
			queue.borrow_mut().push_back(event.into());
		}
	}

	/// Queue a list of events, in order.
	pub fn inject_all(&self, events: impl IntoIterator<Item = SystemEvent>) {
		if let Some(queue) = self.queue.upgrade() {
			queue.borrow_mut().extend(events);
		}
	}

	/// Get the number of events waiting for the next pump.
	pub fn pending(&self) -> usize {
		self.queue.upgrade().map_or(0, |queue| queue.borrow().len())
	}
}

impl WindowBackend for HeadlessBackend {
	fn set_position(&mut self, position: Point) {
		self.position = position;
	}

	fn position(&self) -> Point {
		self.position
	}

	fn set_size(&mut self, size: Size, _use_client_area: bool) {
		self.size = size;
	}

	fn size(&self, _use_client_area: bool) -> Size {
		self.size
	}

	fn set_title(&mut self, title: &str) {
		self.title = title.to_string();
	}

	fn title(&self) -> String {
		self.title.clone()
	}

	fn show(&mut self, show: bool) {
		self.visible = show;
	}

	fn is_shown(&self) -> bool {
		self.visible
	}

	fn native_handle(&self) -> Option<RawWindowHandle> {
		None
	}

	fn process_system_events(&mut self, events: &mut Vec<SystemEvent>) {
		events.extend(self.queue.borrow_mut().drain(..));
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::Key;
	use assert2::assert;

	#[test]
	fn properties_from_descriptor() {
		let descriptor = WindowDescriptor::new("headless", Size::new(640, 480))
			.set_position(Point::new(10, 20))
			.set_visible(true);
		let mut backend = HeadlessBackend::new(&descriptor);

		assert!(backend.title() == "headless");
		assert!(backend.position() == Point::new(10, 20));
		assert!(backend.size(true) == Size::new(640, 480));
		assert!(backend.size(false) == Size::new(640, 480));
		assert!(backend.is_shown());
		assert!(backend.native_handle().is_none());

		backend.set_title("renamed");
		backend.show(false);
		backend.set_size(Size::new(100, 50), false);
		assert!(backend.title() == "renamed");
		assert!(!backend.is_shown());
		assert!(backend.size(true) == Size::new(100, 50));
	}

	#[test]
	fn pump_drains_injected_events_in_order() {
		let mut backend = HeadlessBackend::new(&WindowDescriptor::default());
		let injector = backend.injector();
		injector.inject(SystemEvent::KeyDown(Key::A));
		injector.inject('a');
		injector.inject_all([SystemEvent::KeyUp(Key::A), SystemEvent::Quit]);
		assert!(injector.pending() == 4);

		let mut events = Vec::new();
		backend.process_system_events(&mut events);
		assert!(events == [
			SystemEvent::KeyDown(Key::A),
			SystemEvent::Char('a'),
			SystemEvent::KeyUp(Key::A),
			SystemEvent::Quit,
		]);
		assert!(injector.pending() == 0);

		backend.process_system_events(&mut events);
		assert!(events.len() == 4);
	}

	#[test]
	fn injector_outlives_backend() {
		let backend = HeadlessBackend::new(&WindowDescriptor::default());
		let injector = backend.injector();
		injector.inject(SystemEvent::Quit);
		assert!(injector.pending() == 1);
		drop(backend);
		assert!(injector.pending() == 0);
		injector.inject(SystemEvent::Quit);
		assert!(injector.pending() == 0);
	}
}
