/// An error that can occur while creating a window.
#[derive(Debug)]
pub enum CreateWindowError {
	/// The platform refused to create the window.
	Os(winit::error::OsError),

	/// Native windows are not supported on this platform.
	Unsupported(UnsupportedPlatformError),

	/// The native event loop could not be created or used.
	EventLoop(EventLoopError),
}

/// Native windows are not supported on this platform.
#[derive(Debug, Clone)]
pub struct UnsupportedPlatformError;

/// The native event loop could not be used.
///
/// There is only one native event loop per process.
/// It is created with the first window, which must happen on the main thread.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum EventLoopError {
	/// The first window was created on a thread other than the main thread.
	NotMainThread,

	/// The event loop belongs to another thread.
	ForeignThread,

	/// No display server to connect to.
	NoDisplay,

	/// The platform failed to initialize the event loop.
	Platform(String),
}

impl From<winit::error::OsError> for CreateWindowError {
	fn from(other: winit::error::OsError) -> Self {
		Self::Os(other)
	}
}

impl From<UnsupportedPlatformError> for CreateWindowError {
	fn from(other: UnsupportedPlatformError) -> Self {
		Self::Unsupported(other)
	}
}

impl From<EventLoopError> for CreateWindowError {
	fn from(other: EventLoopError) -> Self {
		Self::EventLoop(other)
	}
}

impl std::error::Error for CreateWindowError {}
impl std::error::Error for UnsupportedPlatformError {}
impl std::error::Error for EventLoopError {}

impl std::fmt::Display for CreateWindowError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Os(e) => write!(f, "failed to create window: {}", e),
			Self::Unsupported(e) => e.fmt(f),
			Self::EventLoop(e) => write!(f, "failed to create window: {}", e),
		}
	}
}

impl std::fmt::Display for EventLoopError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::NotMainThread => write!(f, "the event loop must be created on the main thread"),
			Self::ForeignThread => write!(f, "the event loop belongs to another thread"),
			Self::NoDisplay => write!(f, "no display server found"),
			Self::Platform(message) => write!(f, "failed to initialize the event loop: {}", message),
		}
	}
}

impl std::fmt::Display for UnsupportedPlatformError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "native windows are not supported on this platform")
	}
}
