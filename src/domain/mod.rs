//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep wire and result structs in one place.
//! - Make outgoing JSON schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — identity, credential, user record, result structs.
//! - `constants.rs` — fixed endpoint, identity and retry defaults.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no network side effects.
//!
//! ## Compatibility note
//! `WebhookResult` and `Identity` are serialized onto the wire; field renames
//! here change what the remote endpoints receive.

pub mod constants;
pub mod models;
