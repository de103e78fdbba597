use ecs_exec_pf::ecs::{ContainerDescription, StaticTaskDescriber, TaskDescription};

/// Builder for `TaskDescription` to simplify test setup.
pub struct TaskDescriptionBuilder {
    task: TaskDescription,
}

impl TaskDescriptionBuilder {
    pub fn new() -> Self {
        Self {
            task: TaskDescription {
                last_status: Some("RUNNING".to_string()),
                ..TaskDescription::default()
            },
        }
    }

    /// A started container with a runtime id.
    pub fn with_container(mut self, name: &str, runtime_id: &str) -> Self {
        self.task
            .containers
            .push(ContainerDescription::new(name, runtime_id));
        self
    }

    /// A container that has no runtime id yet.
    pub fn with_pending_container(mut self, name: &str) -> Self {
        self.task.containers.push(ContainerDescription::pending(name));
        self
    }

    pub fn build(self) -> TaskDescription {
        self.task
    }

    /// Describer that reports exactly this task.
    pub fn into_describer(self) -> StaticTaskDescriber {
        StaticTaskDescriber::new(vec![self.build()])
    }
}

impl Default for TaskDescriptionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
