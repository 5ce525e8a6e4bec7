//! # Photodeck Architecture
//!
//! Photodeck is a **UI-agnostic photo catalog library**. Photos are captured or picked,
//! stored on-device, optionally uploaded, and organized into a gallery and a favorites
//! list. The CLI is one client; a mobile shell or a web view could be another.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, prints notifications and listings      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result<CmdResult> types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Resolves selectors, turns outcomes into notifications    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog (catalog.rs) + Navigation (nav.rs)                 │
//! │  - Keeps files, favorites and the gallery list consistent   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - FileStore + PreferenceStore traits                       │
//! │  - Fs/Json (production), Mem (testing)                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments, returns typed results and
//! never writes to stdout/stderr. Diagnostics go through `tracing`; what the user
//! should see travels back as [`commands::CmdMessage`] notifications.
//!
//! ## Async
//!
//! Store traits are async (`async-trait`) over `tokio::fs`. Every catalog operation is
//! one async unit that fails with a typed [`error::DeckError`].
//!
//! ## Testing Strategy
//!
//! 1. **Catalog** (`catalog.rs`): the lion's share, against in-memory stores with
//!    failure injection.
//! 2. **Commands / API**: dispatch and notification wording.
//! 3. **Integration** (`tests/`): filesystem stores, the upload endpoint (wiremock) and
//!    the binary (assert_cmd).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user-facing operation
//! - [`catalog`]: Reconciliation of files, favorites and gallery
//! - [`nav`]: Pages and the durable gallery hand-off
//! - [`capture`]: Camera / file-picker input resolution
//! - [`upload`]: One-shot multipart upload client
//! - [`store`]: Storage traits and implementations
//! - [`model`]: `PhotoRecord`, `PhotoData`, data URIs
//! - [`naming`]: Collision-free photo names
//! - [`config`]: Configuration management
//! - [`logging`]: Subscriber setup for binaries
//! - [`error`]: Error types

pub mod api;
pub mod capture;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod naming;
pub mod nav;
pub mod store;
pub mod upload;
