#[macro_use]
pub mod vga_buffer;
pub mod serial;
pub mod qemu;

pub fn init() {
  serial::init();
  debug!("serial logger online");
}
