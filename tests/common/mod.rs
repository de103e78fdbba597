#![allow(unused_imports)]

pub use ecs_exec_pf_test_utils::builders::TaskDescriptionBuilder;
pub use ecs_exec_pf_test_utils::{SharedBuffer, init_tracing, with_timeout};
