// src/ecs/mock.rs

use std::sync::{Arc, Mutex};

use anyhow::anyhow;

use super::describer::{DescribeFuture, TaskDescriber};
use super::model::TaskDescription;

/// In-memory describer: answers every query with the same task list and
/// records the `(cluster, task)` pairs it was asked for.
#[derive(Debug, Clone, Default)]
pub struct StaticTaskDescriber {
    tasks: Vec<TaskDescription>,
    fail_with: Option<String>,
    queries: Arc<Mutex<Vec<(String, String)>>>,
}

impl StaticTaskDescriber {
    pub fn new(tasks: Vec<TaskDescription>) -> Self {
        Self {
            tasks,
            ..Self::default()
        }
    }

    /// A describer whose backend call itself fails.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn queries(&self) -> Vec<(String, String)> {
        self.queries.lock().unwrap().clone()
    }
}

impl TaskDescriber for StaticTaskDescriber {
    fn describe_tasks<'a>(&'a self, cluster: &'a str, task_id: &'a str) -> DescribeFuture<'a> {
        self.queries
            .lock()
            .unwrap()
            .push((cluster.to_string(), task_id.to_string()));

        let result = match &self.fail_with {
            Some(msg) => Err(anyhow!("{msg}")),
            None => Ok(self.tasks.clone()),
        };
        Box::pin(async move { result })
    }
}
