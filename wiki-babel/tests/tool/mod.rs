//! Tool page tests

mod roundtrip;
