macro_rules! hlt_cpu {
  () => {
    loop {
      ::x86_64::instructions::hlt();
    }
  };
}

#[allow(unused_macros)]
macro_rules! hlt_once {
  () => {
    ::x86_64::instructions::hlt();
  };
}
