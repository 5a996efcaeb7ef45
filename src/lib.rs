//! Damped spring-mass networks with semi-implicit Euler integration.
//!
//! `springnet` simulates graphs of point masses connected by damped
//! springs: cloth sheets pinned along an edge, ropes, and arbitrary
//! mass/spring topologies. Designed as a pure, synchronous core for games
//! and visualizations — rendering and input stay on the caller's side of
//! the API.
//!
//! # Features
//!
//! - **Force superposition**: per-mass force accumulators, cleared each tick
//! - **Semi-implicit Euler**: velocity-then-position integration for stability
//! - **Stable topology**: springs reference masses by index, never by pointer
//! - **Bounded containers**: capacity overruns are reported, never fatal
//! - **Grid builder**: cloth-like lattices with a fixed top row
//! - **Observable**: monitor tick phases via the [`StepObserver`] trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! # Example
//!
//! ```
//! use springnet::{GridConfig, NoOpStepObserver, System, SystemConfig, Vec2};
//!
//! let mut system: System<f32> = System::new(SystemConfig::new());
//! system.build_grid(&GridConfig::default()).unwrap();
//!
//! // Fixed-timestep driver loop.
//! for _ in 0..60 {
//!     system.step(1.0 / 60.0, &mut NoOpStepObserver);
//!     // Wind applied after the step persists into the next tick.
//!     system.apply_uniform_force(Vec2::new(10.0, 0.0)).unwrap();
//! }
//! ```

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod float;
pub mod grid;
pub mod mass;
pub mod observer;
pub mod spring;
pub mod system;
pub mod vec;

// Re-export primary API
pub use config::{SystemConfig, DEFAULT_FORCE_CAPACITY, DEFAULT_SYSTEM_CAPACITY};
pub use error::PhysicsError;
pub use float::Float;
pub use grid::GridConfig;
pub use mass::Mass;
pub use observer::{NoOpStepObserver, StepObserver};
pub use spring::Spring;
pub use system::System;
pub use vec::Vec2;
