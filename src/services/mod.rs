//! Service layer: everything that talks to the network.
//!
//! ## Service map
//! - `http.rs` — `JsonTransport` seam and its reqwest-backed implementation.
//! - `fetch.rs` — registration call that yields the webhook credential and dataset.
//! - `delivery.rs` — result POST with bounded, linearly backed-off retries.
//!
//! ## Conventions
//! - The HTTP client is built once by `main` and passed down by reference.
//! - Fetch failures are returned as errors; delivery failures are reported.

pub mod delivery;
pub mod fetch;
pub mod http;
