// tests/support/mod.rs
// Shared between several integration test binaries; each binary only uses a
// slice of it, so dead_code / unused_imports are allowed at the module level.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(unused_imports)]
pub use mocks::*;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use builders::*;
