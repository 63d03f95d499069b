//! Community page tests

mod roundtrip;
