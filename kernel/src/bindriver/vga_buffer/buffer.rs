use volatile::Volatile;

use super::helper::ColorCode;

/// Base address of the memory mapped text grid.
pub const VGA_BASE: usize = 0xb8000;

pub const BUFFER_HEIGHT: usize = 25;
pub const BUFFER_WIDTH: usize = 80;

/// One cell on screen: glyph byte first, attribute byte second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct ScreenChar {
    pub ascii_character: u8,
    pub color_code: ColorCode,
}

#[repr(transparent)]
pub struct Buffer {
    pub chars: [[Volatile<ScreenChar>; BUFFER_WIDTH]; BUFFER_HEIGHT],
}

assert_eq_size!(ScreenChar, [u8; 2]);
assert_eq_size!(Buffer, [u8; BUFFER_HEIGHT * BUFFER_WIDTH * 2]);

/// Binds a buffer handle to `base`; the only place the raw address cast
/// happens. `base` must point at `BUFFER_HEIGHT * BUFFER_WIDTH * 2` bytes
/// of writable memory laid out like the text grid, with no other live
/// handle to the same region.
pub unsafe fn buffer_at(base: usize) -> &'static mut Buffer {
    &mut *(base as *mut Buffer)
}
