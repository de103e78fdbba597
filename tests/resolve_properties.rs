// tests/resolve_properties.rs

use proptest::prelude::*;

use ecs_exec_pf::ecs::{ContainerDescription, TaskDescription};
use ecs_exec_pf::errors::EcsExecPfError;
use ecs_exec_pf::resolve::{ResolutionQuery, select_runtime_id};

// Small name pool so generated queries hit existing containers often.
const NAMES: &[&str] = &["app", "web", "sidecar", "init"];

fn container_strategy() -> impl Strategy<Value = ContainerDescription> {
    (
        proptest::option::weighted(0.9, proptest::sample::select(NAMES)),
        proptest::option::weighted(0.7, "[a-f0-9]{8}"),
    )
        .prop_map(|(name, runtime_id)| ContainerDescription {
            name: name.map(str::to_string),
            runtime_id,
            last_status: None,
        })
}

fn task_strategy(max_containers: usize) -> impl Strategy<Value = TaskDescription> {
    proptest::collection::vec(container_strategy(), 0..=max_containers).prop_map(|containers| {
        TaskDescription {
            containers,
            ..TaskDescription::default()
        }
    })
}

fn name_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(prop_oneof![
        proptest::sample::select(NAMES).prop_map(str::to_string),
        "[a-z]{1,6}",
    ])
}

fn query(name: Option<String>) -> ResolutionQuery {
    ResolutionQuery::new("cluster", "task", name)
}

proptest! {
    #[test]
    fn empty_task_is_always_no_running_containers(name in name_strategy()) {
        let task = TaskDescription::default();
        let res = select_runtime_id(&task, &query(name));
        prop_assert!(
            matches!(res, Err(EcsExecPfError::NoRunningContainers { .. })),
            "unexpected result"
        );
    }

    #[test]
    fn single_container_without_name(container in container_strategy()) {
        let task = TaskDescription {
            containers: vec![container.clone()],
            ..TaskDescription::default()
        };
        let res = select_runtime_id(&task, &query(None));
        match container.runtime_id {
            Some(id) => prop_assert_eq!(res.ok(), Some(id.as_str())),
            None => prop_assert!(matches!(res, Err(EcsExecPfError::NoRuntimeId { .. })), "unexpected result: {:?}", res),
        }
    }

    #[test]
    fn many_containers_without_name_is_ambiguous(task in task_strategy(6)) {
        prop_assume!(task.containers.len() > 1);
        let res = select_runtime_id(&task, &query(None));
        prop_assert!(matches!(res, Err(EcsExecPfError::AmbiguousContainer { .. })), "unexpected result: {:?}", res);
    }

    #[test]
    fn named_query_follows_first_match(task in task_strategy(6), name in "[a-z]{1,6}") {
        prop_assume!(!task.containers.is_empty());
        let res = select_runtime_id(&task, &query(Some(name.clone())));
        let first = task
            .containers
            .iter()
            .find(|c| c.name.as_deref() == Some(name.as_str()));

        match first {
            None => prop_assert!(matches!(res, Err(EcsExecPfError::ContainerNotFound { .. })), "unexpected result: {:?}", res),
            Some(c) => match &c.runtime_id {
                Some(id) => prop_assert_eq!(res.ok(), Some(id.as_str())),
                None => prop_assert!(matches!(res, Err(EcsExecPfError::NoRuntimeId { .. })), "unexpected result: {:?}", res),
            },
        }
    }

    #[test]
    fn never_returns_an_id_the_task_does_not_have(task in task_strategy(6), name in name_strategy()) {
        if let Ok(id) = select_runtime_id(&task, &query(name)) {
            prop_assert!(task.containers.iter().any(|c| c.runtime_id.as_deref() == Some(id)));
        }
    }

    #[test]
    fn selection_is_deterministic(task in task_strategy(6), name in name_strategy()) {
        let q = query(name);
        let copy = task.clone();
        let a = select_runtime_id(&task, &q).map(str::to_string).map_err(|e| e.to_string());
        let b = select_runtime_id(&copy, &q).map(str::to_string).map_err(|e| e.to_string());
        prop_assert_eq!(a, b);
    }
}
