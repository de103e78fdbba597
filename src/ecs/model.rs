// src/ecs/model.rs

use serde::Deserialize;

/// One ECS task as returned by `DescribeTasks`.
///
/// Only the fields the resolver and logs care about are decoded; everything
/// else in the API response is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDescription {
    pub task_arn: Option<String>,
    pub cluster_arn: Option<String>,
    pub last_status: Option<String>,
    /// Backend order; not a stable way to address a container.
    #[serde(default)]
    pub containers: Vec<ContainerDescription>,
}

/// A container attached to a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDescription {
    pub name: Option<String>,
    /// Absent until the container has actually started.
    pub runtime_id: Option<String>,
    pub last_status: Option<String>,
}

impl ContainerDescription {
    pub fn new(name: impl Into<String>, runtime_id: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            runtime_id: Some(runtime_id.into()),
            last_status: None,
        }
    }

    /// A container that has been registered but has no runtime attached yet.
    pub fn pending(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            runtime_id: None,
            last_status: Some("PENDING".to_string()),
        }
    }

    pub fn name_or_unnamed(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}
