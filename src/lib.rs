//! # todo-actor
//!
//! A minimal todo-list manager exposing a CLI and an HTTP API, backed by
//! whole-file JSON persistence. All access to the in-memory list is
//! serialized by a single actor: one sequential worker owning the list,
//! reachable only through message passing. No locks anywhere.
//!
//! ## Module Tour
//!
//! ### The data ([`model`])
//! [`Todo`](model::Todo), its [`Status`](model::Status) cycle, and the pure
//! [`TodoList`](model::TodoList) mutations with index validation. Assumes
//! exclusive access; provides none.
//!
//! ### The core ([`actor`])
//! The sequential access actor. [`TodoRequest`](actor::TodoRequest) is the
//! message protocol (one variant per operation, each with a single-use reply
//! channel); [`TodoActor`](actor::TodoActor) is the loop;
//! [`TodoClient`](actor::TodoClient) is the cloneable caller handle.
//! Operations are totally ordered by arrival, so concurrent callers never
//! lose updates or observe torn state.
//!
//! ### The persistence seam ([`storage`])
//! [`TodoStore`](storage::TodoStore) with the pretty-printed JSON file
//! implementation. Invoked by callers after each mutation and at shutdown,
//! never by the actor.
//!
//! ### The boundaries ([`http`], [`cli`])
//! Thin translation layers: axum handlers and clap flags that turn external
//! requests into client calls plus a save trigger.
//!
//! ### The wiring ([`app`], [`trace`])
//! [`TodoSystem`](app::TodoSystem) handles startup seed, serving, and the
//! shutdown flush. [`TraceId`](trace::TraceId) is the explicit per-request
//! trace context threaded through every call boundary.
//!
//! ## Running
//!
//! ```bash
//! # serve the HTTP API on port 8080
//! RUST_LOG=info cargo run
//!
//! # one-shot CLI commands
//! cargo run -- --add "buy milk"
//! cargo run -- --edit "0:buy oat milk"
//! cargo run -- --toggle 0
//! cargo run -- --list
//! ```

pub mod actor;
pub mod app;
pub mod cli;
pub mod http;
pub mod model;
pub mod storage;
pub mod trace;
