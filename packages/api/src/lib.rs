//! # API crate — data access for the booking app
//!
//! Everything the UI reads or writes goes through this crate. It talks to the
//! hosted table store over PostgREST, or to an in-memory copy when no backend
//! is configured, and translates rows with the wire types from [`store::rows`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`backend`] | [`TableBackend`] trait and the runtime [`Backend`] choice |
//! | [`rest`] | PostgREST client (`reqwest`) |
//! | [`memory`] | In-memory tables for tests and the offline demo |
//! | [`query`] | Filters and ordering shared by both backends |
//! | [`appointments`], [`services`], [`users`] | One module per table |
//! | [`booking`] | Load/save/delete workflow used by the schedule screen |
//! | [`links`] | External links (maps search) |
//!
//! Every failed call is logged with `tracing` where it happens and returned as
//! an [`ApiError`]; the UI decides what toast to show.

pub mod appointments;
pub mod backend;
pub mod booking;
pub mod error;
pub mod links;
pub mod memory;
pub mod query;
pub mod rest;
pub mod services;
pub mod users;

pub use appointments::Appointments;
pub use backend::{Backend, TableBackend};
pub use booking::{Booking, BookingError, SaveOutcome, Snapshot};
pub use error::{ApiError, Result};
pub use memory::MemoryBackend;
pub use query::Query;
pub use rest::RestBackend;
pub use services::Services;
pub use users::Users;
