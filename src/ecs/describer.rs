// src/ecs/describer.rs

//! Pluggable task-lookup abstraction.
//!
//! The resolver talks to a `TaskDescriber` instead of a concrete API client.
//! Production code uses [`super::AwsCliTaskDescriber`]; tests provide
//! [`super::StaticTaskDescriber`] or their own implementation.

use std::future::Future;
use std::pin::Pin;

use crate::ecs::model::TaskDescription;

pub type DescribeFuture<'a> =
    Pin<Box<dyn Future<Output = anyhow::Result<Vec<TaskDescription>>> + Send + 'a>>;

/// Read-only `DescribeTasks` query for a single task id.
pub trait TaskDescriber: Send + Sync {
    /// Return every task the backend reports for `task_id` in `cluster`.
    ///
    /// An unknown task yields an empty list, not an error. More than one
    /// entry breaks the backend contract; the resolver treats it as fatal.
    fn describe_tasks<'a>(&'a self, cluster: &'a str, task_id: &'a str) -> DescribeFuture<'a>;
}
