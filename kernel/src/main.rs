#![feature(custom_test_frameworks)]

#![test_runner(crate::test::test_runner)]
#![reexport_test_harness_main = "test_main"]

#![allow(dead_code)]
#![warn(unused_import_braces)]
#![deny(keyword_idents, stable_features)]

#![no_std]
#![no_main]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate static_assertions;
#[macro_use]
extern crate log;

#[macro_use]
mod common;
#[macro_use]
mod bindriver;
mod version;
#[cfg(test)]
mod test;

use crate::bindriver::vga_buffer::helper::{Color, ColorCode};
use crate::bindriver::vga_buffer::WRITER;

bootloader::entry_point!(kernel_main);

fn kernel_main(_boot_info: &'static bootloader::BootInfo) -> ! {
  // init drivers for core hardware
  bindriver::init();
  info!("SlateOS v{}", version::VERSION);

  {
    let mut writer = WRITER.lock();
    writer.clear();
    writer.write_string("\n\n", ColorCode::new(Color::White, Color::Black));
    writer.write_string("Hello World\n", ColorCode::new(Color::White, Color::Red));
  }

  #[cfg(test)]
  {
    info!("Running test harness");
    test_main();
  }

  info!("boot sequence complete");
  hlt_cpu!();
}

use core::panic::PanicInfo;

/// This function is called on panic.
#[panic_handler]
#[no_mangle]
pub fn panic(info: &PanicInfo) -> ! {
  vga_print_red!("\n\n===== PANIC OCCURED IN KERNEL =====\n");
  vga_print_red!("{}\n", info);
  error!("{}", info);
  #[cfg(test)]
  {
    use crate::bindriver::qemu::*;
    exit_qemu(QemuExitCode::Failed);
  }
  hlt_cpu!();
}
