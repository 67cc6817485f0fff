pub mod buffer;
pub mod helper;

use self::buffer::{ScreenChar, BUFFER_HEIGHT, BUFFER_WIDTH};
use self::helper::{Color, ColorCode};

/// Attribute written by `clear`: white on black, the same for every call
/// regardless of what the writer is currently printing with.
const CLEAR_COLOR: ColorCode = ColorCode::new(Color::White, Color::Black);

pub struct Writer {
    pub cursor_line: usize,
    pub cursor_column: usize,
    pub color_code: ColorCode,
    pub buffer: &'static mut buffer::Buffer,
}

impl Writer {
    /// Blanks every cell of the grid, top row first. The cursor stays
    /// where it was.
    pub fn clear(&mut self) {
        let blank = ScreenChar {
            ascii_character: b' ',
            color_code: CLEAR_COLOR,
        };
        for line in 0..BUFFER_HEIGHT {
            for col in 0..BUFFER_WIDTH {
                self.buffer.chars[line][col].write(blank);
            }
        }
    }

    /// Puts a single byte at the cursor and advances it. Newline only
    /// moves the cursor to the start of the next line; a byte that would
    /// overflow the current line wraps there before being stored.
    pub fn write_byte(&mut self, byte: u8, color: ColorCode) {
        match byte {
            b'\n' => {
                self.cursor_column = 0;
                self.cursor_line += 1;
            }
            byte => {
                if self.cursor_column >= BUFFER_WIDTH {
                    self.cursor_column = 0;
                    self.cursor_line += 1;
                }
                // lines below the visible grid have no backing memory;
                // the cursor keeps advancing but nothing is stored
                if self.cursor_line < BUFFER_HEIGHT {
                    self.buffer.chars[self.cursor_line][self.cursor_column].write(ScreenChar {
                        ascii_character: byte,
                        color_code: color,
                    });
                }
                self.cursor_column += 1;
            }
        }
    }

    /// Writes every byte of `s` with the same attribute.
    pub fn write_string(&mut self, s: &str, color: ColorCode) {
        for byte in s.bytes() {
            self.write_byte(byte, color);
        }
    }
}

use core::fmt;

impl fmt::Write for Writer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let color = self.color_code;
        self.write_string(s, color);
        Ok(())
    }
}

use spin::Mutex;

lazy_static! {
    pub static ref WRITER: Mutex<Writer> = Mutex::new(Writer {
        cursor_line: 0,
        cursor_column: 0,
        color_code: ColorCode::new(Color::White, Color::Black),
        buffer: unsafe { buffer::buffer_at(buffer::VGA_BASE) },
    });
}

pub fn print(args: fmt::Arguments) {
    use core::fmt::Write;
    WRITER.lock().write_fmt(args).unwrap();
}

pub fn print_red(args: fmt::Arguments) {
    use core::fmt::Write;
    unsafe { WRITER.force_unlock() };
    let w = WRITER.try_lock();
    w.and_then(|mut w| {
        let old_color = w.color_code;
        w.color_code = ColorCode::new(Color::White, Color::Red);
        w.write_fmt(args).expect("could not write to vga buffer");
        w.color_code = old_color;
        Some(w)
    }).expect("need to print to vga");
}

macro_rules! vga_print_red {
    ($($arg:tt)*) => {
      $crate::bindriver::vga_buffer::print_red(format_args!($($arg)*))
    };
}

#[allow(unused_macros)]
macro_rules! vga_print {
    ($($arg:tt)*) => {
      $crate::bindriver::vga_buffer::print(format_args!($($arg)*))
    };
}

#[allow(unused_macros)]
macro_rules! vga_println {
    () => (vga_print!("\n"));
    ($fmt:expr) => (vga_print!(concat!($fmt, "\n")));
    ($fmt:expr, $($arg:tt)*) => (vga_print!(concat!($fmt, "\n"), $($arg)*));
}
