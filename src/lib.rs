//! # courseplan
//!
//! Workflow core for a class-schedule wizard.
//!
//! This crate collects class-scheduling constraints across a multi-step
//! wizard, delegates combinatorial schedule generation to an external solver
//! service, and maps the returned candidates onto a fixed reference week so
//! a calendar renderer can place them.
//!
//! ## Features
//!
//! - **Time Codec**: 12-hour display times <-> 24-hour wire format <->
//!   reference-week timestamps
//! - **Request Building**: weight validation and request assembly from
//!   course/break/preference state
//! - **Response Parsing**: per-day class listings to ordered event
//!   collections, with explicit empty/timeout sentinels
//! - **Carousel Navigation**: cyclic next/previous over generated schedules
//! - **CRN Aggregation**: deduplicated class -> CRN listing with a
//!   clipboard payload
//! - **Wizard State Machine**: step transitions, serialized generation
//!   requests, and stale-response discarding
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Wire DTOs for the solver endpoint
//! - [`models`]: Domain types (time codec, wizard inputs)
//! - [`services`]: Request building, response parsing, and derived views
//! - [`solver`]: The external solver client interface
//! - [`wizard`]: Step state machine and generation orchestration
//!
//! The solver's search and ranking algorithm is an external collaborator;
//! this crate only constructs requests and interprets responses, preserving
//! the service's ranking order.

pub mod api;
pub mod models;
pub mod services;
pub mod solver;
pub mod wizard;
