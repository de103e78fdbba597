// src/ecs/mod.rs

//! ECS task lookup.
//!
//! - [`model`] holds the task/container descriptions the resolver works on.
//! - [`describer`] provides the `TaskDescriber` trait, the single query the
//!   resolver needs from the backend.
//! - [`aws_cli`] is the production describer, driving `aws ecs describe-tasks`.
//! - [`mock`] is an in-memory describer for tests.

pub mod aws_cli;
pub mod describer;
pub mod mock;
pub mod model;

pub use aws_cli::AwsCliTaskDescriber;
pub use describer::{DescribeFuture, TaskDescriber};
pub use mock::StaticTaskDescriber;
pub use model::{ContainerDescription, TaskDescription};
