//! `event-canvas` provides windows that deliver input through a list of event listeners.
//!
//! A [`Window`] owns a platform [`backend::WindowBackend`] and an [`EventDispatcher`].
//! Every call to [`Window::process_events`] pumps the backend,
//! posts each event to the registered [`EventListener`]s in registration order,
//! and returns `false` once the window has quit.
//!
//! Quitting is negotiated: a quit request asks every listener,
//! and a single listener returning `false` from [`EventListener::on_quit`] keeps the window alive.
//! Once all listeners agreed, the window stays quit.
//!
//! Listeners may add or remove listeners (including themselves) while an event is being dispatched.
//! Such changes take effect from the next event on.
//!
//! ```no_run
//! # fn main() -> Result<(), event_canvas::error::CreateWindowError> {
//! use std::rc::Rc;
//! use event_canvas::{EventListener, Key, Size, Window, WindowDescriptor};
//!
//! struct EscapeToQuit;
//!
//! impl EventListener for EscapeToQuit {
//!   fn on_key_down(&self, sender: &mut Window, key: Key) {
//!     if key == Key::Escape {
//!       sender.post_quit();
//!     }
//!   }
//! }
//!
//! let mut window = Window::create(&WindowDescriptor::new("demo", Size::new(640, 480)).set_visible(true))?;
//! window.add_listener(Rc::new(EscapeToQuit));
//! while window.process_events() {
//!   // Render a frame.
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The [`backend::HeadlessBackend`] has no native window.
//! It is fed through an [`backend::EventInjector`], which makes it useful for tests.
//!
//! # Features
//!
//! * `nightly`: use nightly-only features to improve the documentation.

#![cfg_attr(feature = "nightly", feature(doc_cfg))]

mod dispatcher;
mod event;
mod event_listener;
mod key;
mod window;

pub mod backend;
pub mod error;
pub mod resource_heap;

pub use dispatcher::EventDispatcher;
pub use event::Point;
pub use event::Size;
pub use event::SystemEvent;
pub use event_listener::EventListener;
pub use key::Key;
pub use window::Window;
pub use window::WindowDescriptor;
