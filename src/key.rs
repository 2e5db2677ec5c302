/// A keyboard key or mouse button.
///
/// Mouse buttons are reported through the same key down and key up events as keyboard keys.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Key {
	/// The left mouse button.
	LButton,

	/// The right mouse button.
	RButton,

	/// The middle mouse button (usually triggered by pressing the scroll wheel).
	MButton,

	/// The first extra mouse button (usually "back").
	XButton1,

	/// The second extra mouse button (usually "forward").
	XButton2,

	/// The backspace key.
	Back,

	/// The tab key.
	Tab,

	/// The return or enter key, including the one on the keypad.
	Return,

	/// The pause or break key.
	Pause,

	/// The caps lock key.
	Capital,

	/// The escape key.
	Escape,

	/// The space bar.
	Space,

	/// The page up key.
	PageUp,

	/// The page down key.
	PageDown,

	/// The end key.
	End,

	/// The home key.
	Home,

	/// The left arrow key.
	Left,

	/// The up arrow key.
	Up,

	/// The right arrow key.
	Right,

	/// The down arrow key.
	Down,

	/// The system request key, which shares a physical key with print screen on most keyboards.
	Print,

	/// The print screen key.
	Snapshot,

	/// The insert key.
	Insert,

	/// The delete key.
	Delete,

	/// The 0 key on the main keyboard.
	D0,

	/// The 1 key on the main keyboard.
	D1,

	/// The 2 key on the main keyboard.
	D2,

	/// The 3 key on the main keyboard.
	D3,

	/// The 4 key on the main keyboard.
	D4,

	/// The 5 key on the main keyboard.
	D5,

	/// The 6 key on the main keyboard.
	D6,

	/// The 7 key on the main keyboard.
	D7,

	/// The 8 key on the main keyboard.
	D8,

	/// The 9 key on the main keyboard.
	D9,

	/// The A key.
	A,

	/// The B key.
	B,

	/// The C key.
	C,

	/// The D key.
	D,

	/// The E key.
	E,

	/// The F key.
	F,

	/// The G key.
	G,

	/// The H key.
	H,

	/// The I key.
	I,

	/// The J key.
	J,

	/// The K key.
	K,

	/// The L key.
	L,

	/// The M key.
	M,

	/// The N key.
	N,

	/// The O key.
	O,

	/// The P key.
	P,

	/// The Q key.
	Q,

	/// The R key.
	R,

	/// The S key.
	S,

	/// The T key.
	T,

	/// The U key.
	U,

	/// The V key.
	V,

	/// The W key.
	W,

	/// The X key.
	X,

	/// The Y key.
	Y,

	/// The Z key.
	Z,

	/// The left "Windows", "Command" or "Super" key.
	LWin,

	/// The right "Windows", "Command" or "Super" key.
	RWin,

	/// The 0 key on the numeric keypad.
	Keypad0,

	/// The 1 key on the numeric keypad.
	Keypad1,

	/// The 2 key on the numeric keypad.
	Keypad2,

	/// The 3 key on the numeric keypad.
	Keypad3,

	/// The 4 key on the numeric keypad.
	Keypad4,

	/// The 5 key on the numeric keypad.
	Keypad5,

	/// The 6 key on the numeric keypad.
	Keypad6,

	/// The 7 key on the numeric keypad.
	Keypad7,

	/// The 8 key on the numeric keypad.
	Keypad8,

	/// The 9 key on the numeric keypad.
	Keypad9,

	/// The multiply key on the numeric keypad.
	KeypadMultiply,

	/// The plus key on the numeric keypad.
	KeypadPlus,

	/// The separator (comma) key on the numeric keypad.
	KeypadSeparator,

	/// The minus key on the numeric keypad.
	KeypadMinus,

	/// The decimal point key on the numeric keypad.
	KeypadDecimal,

	/// The divide key on the numeric keypad.
	KeypadDivide,

	/// Function key F1.
	F1,

	/// Function key F2.
	F2,

	/// Function key F3.
	F3,

	/// Function key F4.
	F4,

	/// Function key F5.
	F5,

	/// Function key F6.
	F6,

	/// Function key F7.
	F7,

	/// Function key F8.
	F8,

	/// Function key F9.
	F9,

	/// Function key F10.
	F10,

	/// Function key F11.
	F11,

	/// Function key F12.
	F12,

	/// The num lock key.
	NumLock,

	/// The scroll lock key.
	ScrollLock,

	/// The left shift key.
	LShift,

	/// The right shift key.
	RShift,

	/// The left control key.
	LControl,

	/// The right control key.
	RControl,

	/// The left alt key.
	LMenu,

	/// The right alt key (alt gr on some layouts).
	RMenu,

	/// The plus key on the main keyboard.
	Plus,

	/// The comma key on the main keyboard.
	Comma,

	/// The minus key on the main keyboard.
	Minus,

	/// The period key on the main keyboard.
	Period,
}

impl Key {
	/// Check if the key is a mouse button.
	pub fn is_mouse_button(self) -> bool {
		matches!(self, Self::LButton | Self::RButton | Self::MButton | Self::XButton1 | Self::XButton2)
	}
}
