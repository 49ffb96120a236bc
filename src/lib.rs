//! Console logbook for simulated motorsport driving sessions.
//!
//! Sessions carry a driver, a track, a vehicle class and three generated lap
//! times. They live in a bounded in-memory store for the lifetime of the
//! process and can be exported as a fixed-width table to `report.txt`.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod lap_generator;
pub mod logging;
pub mod report;
pub mod session;
pub mod store;
pub mod ui;

pub use app::App;
pub use error::{InputError, ReportError, StoreError};
pub use session::{Pace, Session, VehicleClass};
pub use store::{SessionStore, MAX_SESSIONS};
