//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises one slice of the
//! engine through `AppService` and mock adapters.  All tests run on the
//! host with no real hardware required.

mod character_entry_tests;
mod menu_flow_tests;
mod standby_tests;
