// tests/error_handling.rs

use std::io::Write;
use tempfile::NamedTempFile;

use ecs_exec_pf::cli::CliArgs;
use ecs_exec_pf::config::{build_session_options, load_from_path, load_optional};
use ecs_exec_pf::errors::EcsExecPfError;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn defaults_file_fills_missing_flags() {
    let file = write_config(
        r#"
[defaults]
cluster = "production"
container = "app"
region = "eu-west-1"
"#,
    );

    let cfg = load_from_path(file.path()).unwrap();
    let args = CliArgs {
        task: Some("0123abcd".into()),
        port: Some(80),
        local_port: Some(8080),
        ..CliArgs::default()
    };

    let opts = build_session_options(&args, &cfg).unwrap();
    assert_eq!(opts.cluster, "production");
    assert_eq!(opts.container.as_deref(), Some("app"));
    assert_eq!(opts.region.as_deref(), Some("eu-west-1"));
    assert_eq!(opts.profile, None);
}

#[test]
fn unknown_keys_are_rejected() {
    let file = write_config(
        r#"
[defaults]
clutser = "typo"
"#,
    );

    match load_from_path(file.path()) {
        Err(EcsExecPfError::Toml(e)) => assert!(e.to_string().contains("clutser")),
        other => panic!("expected Toml error, got {other:?}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let res = load_optional(Some(std::path::Path::new("/definitely/not/here.toml")));
    assert!(matches!(res, Err(EcsExecPfError::Io(_))));
}

#[test]
fn task_is_never_taken_from_defaults() {
    let file = write_config(
        r#"
[defaults]
cluster = "production"
"#,
    );
    let cfg = load_from_path(file.path()).unwrap();

    let args = CliArgs {
        port: Some(80),
        local_port: Some(8080),
        ..CliArgs::default()
    };

    match build_session_options(&args, &cfg) {
        Err(EcsExecPfError::Config(msg)) => assert_eq!(msg, "'--task' is required"),
        other => panic!("expected Config error, got {other:?}"),
    }
}
