use std::rc::Rc;

use crate::EventListener;

/// The listener registry and quit state of a window.
///
/// The dispatcher keeps listeners in registration order, which is also the dispatch order.
/// It does not invoke listeners itself: the owning [`Window`](crate::Window) takes a [`snapshot`](Self::snapshot)
/// and calls each listener with a mutable reference to itself.
#[derive(Default)]
pub struct EventDispatcher {
	/// The registered listeners, in registration order.
	listeners: Vec<Rc<dyn EventListener>>,

	/// Set once all listeners agreed to quit. Never cleared.
	quit: bool,
}

impl EventDispatcher {
	/// Create a dispatcher without listeners.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a listener.
	///
	/// Adding the same listener more than once is allowed:
	/// it will then be invoked once per registration for each event.
	pub fn add_listener(&mut self, listener: Rc<dyn EventListener>) {
		self.listeners.push(listener);
		log::trace!("added event listener, {} registered", self.listeners.len());
	}

	/// Remove every registration of a listener.
	///
	/// Listeners are compared by identity.
	/// Removing a listener that was never added does nothing.
	///
	/// Returns the number of removed registrations.
	pub fn remove_listener(&mut self, listener: &dyn EventListener) -> usize {
		let before = self.listeners.len();
		self.listeners.retain(|registered| !is_same_listener(registered, listener));
		let removed = before - self.listeners.len();
		if removed > 0 {
			log::trace!("removed {} registration(s) of event listener, {} registered", removed, self.listeners.len());
		}
		removed
	}

	/// Check if a listener is registered at least once.
	pub fn contains(&self, listener: &dyn EventListener) -> bool {
		self.listeners.iter().any(|registered| is_same_listener(registered, listener))
	}

	/// Get the number of registrations, counting duplicates.
	pub fn len(&self) -> usize {
		self.listeners.len()
	}

	/// Check if no listener is registered.
	pub fn is_empty(&self) -> bool {
		self.listeners.is_empty()
	}

	/// Copy the current listener list.
	///
	/// Dispatching iterates over a snapshot,
	/// so listeners can safely add or remove listeners while an event is being delivered.
	pub fn snapshot(&self) -> Vec<Rc<dyn EventListener>> {
		self.listeners.clone()
	}

	/// Check if the quit negotiation succeeded.
	pub fn has_quit(&self) -> bool {
		self.quit
	}

	/// Enter the quit state.
	///
	/// The quit state is never left again.
	pub(crate) fn set_quit(&mut self) {
		self.quit = true;
	}
}

impl std::fmt::Debug for EventDispatcher {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.debug_struct("EventDispatcher")
			.field("listeners", &self.listeners.len())
			.field("quit", &self.quit)
			.finish()
	}
}

/// Check if a registered listener is the same object as `listener`.
///
/// Only the data pointers are compared, vtable pointers are ignored.
fn is_same_listener(registered: &Rc<dyn EventListener>, listener: &dyn EventListener) -> bool {
	let registered = Rc::as_ptr(registered) as *const u8;
	let listener = listener as *const dyn EventListener as *const u8;
	std::ptr::eq(registered, listener)
}

#[cfg(test)]
mod test {
	use super::*;
	use assert2::assert;

	struct Nop;
	impl EventListener for Nop {}

	#[test]
	fn add_keeps_order_and_duplicates() {
		let a = Rc::new(Nop);
		let b = Rc::new(Nop);
		let mut dispatcher = EventDispatcher::new();
		dispatcher.add_listener(a.clone());
		dispatcher.add_listener(b.clone());
		dispatcher.add_listener(a.clone());

		let snapshot = dispatcher.snapshot();
		assert!(snapshot.len() == 3);
		assert!(is_same_listener(&snapshot[0], &*a));
		assert!(is_same_listener(&snapshot[1], &*b));
		assert!(is_same_listener(&snapshot[2], &*a));
	}

	#[test]
	fn remove_drops_all_registrations() {
		let a = Rc::new(Nop);
		let b = Rc::new(Nop);
		let mut dispatcher = EventDispatcher::new();
		dispatcher.add_listener(a.clone());
		dispatcher.add_listener(b.clone());
		dispatcher.add_listener(a.clone());

		assert!(dispatcher.remove_listener(&*a) == 2);
		assert!(dispatcher.len() == 1);
		assert!(!dispatcher.contains(&*a));
		assert!(dispatcher.contains(&*b));
	}

	#[test]
	fn remove_unknown_listener_is_noop() {
		let a = Rc::new(Nop);
		let stranger = Nop;
		let mut dispatcher = EventDispatcher::new();
		dispatcher.add_listener(a.clone());

		assert!(dispatcher.remove_listener(&stranger) == 0);
		assert!(dispatcher.remove_listener(&*Rc::new(Nop)) == 0);
		assert!(dispatcher.len() == 1);
	}

	#[test]
	fn snapshot_is_independent() {
		let a = Rc::new(Nop);
		let mut dispatcher = EventDispatcher::new();
		dispatcher.add_listener(a.clone());

		let snapshot = dispatcher.snapshot();
		dispatcher.remove_listener(&*a);
		assert!(dispatcher.is_empty());
		assert!(snapshot.len() == 1);
	}

	#[test]
	fn dispatcher_holds_shared_claim() {
		let a = Rc::new(Nop);
		let mut dispatcher = EventDispatcher::new();
		dispatcher.add_listener(a.clone());
		assert!(Rc::strong_count(&a) == 2);
		dispatcher.remove_listener(&*a);
		assert!(Rc::strong_count(&a) == 1);
	}

	#[test]
	fn quit_is_sticky() {
		let mut dispatcher = EventDispatcher::new();
		assert!(!dispatcher.has_quit());
		dispatcher.set_quit();
		assert!(dispatcher.has_quit());
		dispatcher.add_listener(Rc::new(Nop));
		assert!(dispatcher.has_quit());
	}
}
