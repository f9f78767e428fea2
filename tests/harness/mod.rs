#![allow(dead_code, unused_imports)]

#[cfg(unix)]
pub(crate) mod fake_toolchain;
pub(crate) mod test_context;

#[cfg(unix)]
pub(crate) use fake_toolchain::FakeToolchain;
pub(crate) use test_context::TestContext;
