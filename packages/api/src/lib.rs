//! # API crate: the client's side of the backend contract
//!
//! Everything the UI needs to talk to the backend, with no UI dependency so
//! the whole crate unit-tests on the host:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Base URL of the backend and the derived push endpoint |
//! | [`request`] | One authenticated HTTP call: config, overrides, execution |
//! | [`endpoints`] | The backend's route catalogue as request configurations |
//! | [`models`] | Client-side snapshots of the backend-owned entities |
//! | [`events`] | Push events off the live channel, and stat-change notices |
//! | [`validation`] | Client-side form validation with ordered message lists |
//!
//! The backend owns every non-trivial computation (leveling, XP thresholds,
//! HP decay, streaks, ranking); this crate only moves snapshots around.

pub mod config;
pub mod endpoints;
pub mod error;
pub mod events;
pub mod models;
pub mod request;
pub mod validation;

pub use config::ApiConfig;
pub use error::ApiError;
pub use events::{PushEvent, StatChange};
pub use models::{
    Category, CreatedHabitList, CustomHabit, Habit, HabitKind, HabitList, LeaderboardEntry,
    LoginResponse, PresetHabit, User,
};
pub use request::{Method, RequestConfig, RequestOverrides};
