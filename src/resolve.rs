// src/resolve.rs

//! Container runtime-id resolution.
//!
//! Given a task and an optional container name, pick exactly one container
//! and return its runtime id, or fail with an error that says why. Ambiguity
//! is resolved by name only; backend container order is never used to pick a
//! target.

use tracing::{debug, info};

use crate::ecs::{ContainerDescription, TaskDescriber, TaskDescription};
use crate::errors::{EcsExecPfError, Result};

/// Which container of which task to connect to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionQuery {
    pub cluster: String,
    pub task: String,
    pub container: Option<String>,
}

impl ResolutionQuery {
    /// An empty container name is the same as no name at all.
    pub fn new(
        cluster: impl Into<String>,
        task: impl Into<String>,
        container: Option<impl Into<String>>,
    ) -> Self {
        Self {
            cluster: cluster.into(),
            task: task.into(),
            container: container.map(Into::into).filter(|c: &String| !c.is_empty()),
        }
    }
}

/// Look the task up through `describer` and resolve the target container's
/// runtime id. Issues exactly one backend query.
pub async fn resolve_runtime_id<D>(describer: &D, query: &ResolutionQuery) -> Result<String>
where
    D: TaskDescriber + ?Sized,
{
    debug!(cluster = %query.cluster, task = %query.task, "describing task");

    let mut tasks = describer
        .describe_tasks(&query.cluster, &query.task)
        .await
        .map_err(|source| EcsExecPfError::DescribeTasks {
            cluster: query.cluster.clone(),
            task: query.task.clone(),
            source,
        })?;

    let task = match tasks.len() {
        0 => {
            return Err(EcsExecPfError::TaskNotFound {
                cluster: query.cluster.clone(),
                task: query.task.clone(),
            });
        }
        1 => tasks.remove(0),
        count => {
            return Err(EcsExecPfError::InvariantViolation {
                cluster: query.cluster.clone(),
                task: query.task.clone(),
                count,
            });
        }
    };

    let runtime_id = select_runtime_id(&task, query)?.to_string();
    info!(
        cluster = %query.cluster,
        task = %query.task,
        container = query.container.as_deref().unwrap_or(""),
        runtime_id = %runtime_id,
        "resolved container runtime id"
    );
    Ok(runtime_id)
}

/// Pure selection step over an already-fetched task.
///
/// Same task and query always give the same answer.
pub fn select_runtime_id<'t>(task: &'t TaskDescription, query: &ResolutionQuery) -> Result<&'t str> {
    let containers = &task.containers;

    if containers.is_empty() {
        return Err(EcsExecPfError::NoRunningContainers {
            cluster: query.cluster.clone(),
            task: query.task.clone(),
        });
    }

    let container = match query.container.as_deref() {
        None => match containers.as_slice() {
            [only] => only,
            _ => {
                return Err(EcsExecPfError::AmbiguousContainer {
                    cluster: query.cluster.clone(),
                    task: query.task.clone(),
                    count: containers.len(),
                });
            }
        },
        // First match wins; names are expected, not enforced, to be unique.
        Some(name) => containers
            .iter()
            .find(|c| c.name.as_deref() == Some(name))
            .ok_or_else(|| EcsExecPfError::ContainerNotFound {
                cluster: query.cluster.clone(),
                task: query.task.clone(),
                container: name.to_string(),
            })?,
    };

    runtime_id_of(container, query)
}

fn runtime_id_of<'t>(container: &'t ContainerDescription, query: &ResolutionQuery) -> Result<&'t str> {
    container
        .runtime_id
        .as_deref()
        .ok_or_else(|| EcsExecPfError::NoRuntimeId {
            cluster: query.cluster.clone(),
            task: query.task.clone(),
            container: query
                .container
                .clone()
                .unwrap_or_else(|| container.name_or_unnamed().to_string()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(containers: Vec<ContainerDescription>) -> TaskDescription {
        TaskDescription {
            containers,
            ..TaskDescription::default()
        }
    }

    fn query(name: &str) -> ResolutionQuery {
        ResolutionQuery::new("cluster", "task", Some(name))
    }

    #[test]
    fn empty_name_is_no_name() {
        assert_eq!(query("").container, None);
        assert_eq!(query("web").container.as_deref(), Some("web"));
    }

    #[test]
    fn name_match_is_case_sensitive() {
        let t = task(vec![ContainerDescription::new("Web", "r1")]);
        let err = select_runtime_id(&t, &query("web")).unwrap_err();
        assert!(matches!(err, EcsExecPfError::ContainerNotFound { .. }));
    }

    #[test]
    fn duplicate_names_first_wins() {
        let t = task(vec![
            ContainerDescription::new("web", "first"),
            ContainerDescription::new("web", "second"),
        ]);
        assert_eq!(select_runtime_id(&t, &query("web")).unwrap(), "first");
    }

    #[test]
    fn matched_container_without_runtime_is_not_skipped() {
        let t = task(vec![
            ContainerDescription::pending("web"),
            ContainerDescription::new("web", "later"),
        ]);
        let err = select_runtime_id(&t, &query("web")).unwrap_err();
        match err {
            EcsExecPfError::NoRuntimeId { container, .. } => assert_eq!(container, "web"),
            other => panic!("expected NoRuntimeId, got {other:?}"),
        }
    }

    #[test]
    fn unnamed_containers_never_match_a_name() {
        let t = task(vec![ContainerDescription {
            name: None,
            runtime_id: Some("r".into()),
            last_status: None,
        }]);
        let err = select_runtime_id(&t, &query("x")).unwrap_err();
        assert!(matches!(err, EcsExecPfError::ContainerNotFound { .. }));
    }
}
