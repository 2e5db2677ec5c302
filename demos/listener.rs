use std::cell::Cell;
use std::rc::Rc;

use event_canvas::EventListener;
use event_canvas::Key;
use event_canvas::Point;
use event_canvas::Size;
use event_canvas::Window;
use event_canvas::WindowDescriptor;

/// Prints input and refuses the first request to quit.
struct Stubborn {
	refused: Cell<bool>,
}

impl EventListener for Stubborn {
	fn on_key_down(&self, sender: &mut Window, key: Key) {
		println!("key down: {:?}", key);
		if key == Key::Escape {
			sender.post_quit();
		}
	}

	fn on_char(&self, _sender: &mut Window, chr: char) {
		println!("char: {:?}", chr);
	}

	fn on_wheel_motion(&self, _sender: &mut Window, motion: i32) {
		println!("wheel: {}", motion);
	}

	fn on_local_motion(&self, sender: &mut Window, position: Point) {
		sender.set_title(&format!("listener ({}, {})", position.x, position.y));
	}

	fn on_quit(&self, _sender: &mut Window) -> bool {
		if self.refused.replace(true) {
			true
		} else {
			println!("refusing to quit once, ask again to close the window");
			false
		}
	}
}

fn main() -> Result<(), String> {
	env_logger::init();

	let descriptor = WindowDescriptor::new("listener", Size::new(640, 480))
		.set_visible(true)
		.set_resizable(true)
		.set_centered(true);
	let mut window = Window::create(&descriptor).map_err(|e| e.to_string())?;
	window.add_listener(Rc::new(Stubborn { refused: Cell::new(false) }));

	while window.process_events() {
		std::thread::sleep(std::time::Duration::from_millis(10));
	}

	Ok(())
}
