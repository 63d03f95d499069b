//! Listing page tests

mod layout;
mod roundtrip;
