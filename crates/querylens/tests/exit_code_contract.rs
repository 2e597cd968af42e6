use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

const EXIT_SUCCESS: i32 = 0;
const EXIT_RUNTIME_FAILURE: i32 = 1;
const EXIT_REQUEST_REJECTED: i32 = 2;
const EXIT_USAGE_ERROR: i32 = 64;

const SLOW_QUERY_COLUMNS: &str = "Time,Digest,Conn_ID,Query,Query_time";

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("{prefix}-{nanos}"))
}

fn querylens(args: &[&str]) -> Output {
    let temp = unique_temp_dir("querylens-exit");
    std::fs::create_dir_all(&temp).expect("temp dir should be creatable");

    Command::new(env!("CARGO_BIN_EXE_querylens"))
        .arg("--home-dir")
        .arg(&temp)
        .arg("--cwd")
        .arg(&temp)
        .args(args)
        .env_remove("QUERYLENS_DB")
        .output()
        .expect("command should execute")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be a JSON envelope")
}

fn stderr_json(output: &Output) -> Value {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr
        .lines()
        .rev()
        .find(|line| line.starts_with('{'))
        .expect("stderr should carry an error envelope");
    serde_json::from_str(line).expect("error envelope should be JSON")
}

#[test]
fn missing_required_args_exits_with_usage_code() {
    let output = querylens(&["render"]);
    assert_eq!(output.status.code(), Some(EXIT_USAGE_ERROR));
}

#[test]
fn successful_render_exits_zero() {
    let output = querylens(&[
        "render",
        "--domain",
        "slow-query",
        "--fields",
        "query",
        "--desc",
        "--columns",
        SLOW_QUERY_COLUMNS,
    ]);
    assert_eq!(output.status.code(), Some(EXIT_SUCCESS));

    let envelope = stdout_json(&output);
    assert_eq!(envelope["ok"], Value::Bool(true));
    assert_eq!(envelope["command"], "render");
    assert_eq!(envelope["data"]["order_clause"], "Time DESC");
    assert_eq!(envelope["meta"]["schema_source"], "explicit");
}

#[test]
fn dropped_fields_produce_a_warning_not_a_failure() {
    let output = querylens(&[
        "render",
        "--domain",
        "slow-query",
        "--fields",
        "query,disk_max",
        "--columns",
        SLOW_QUERY_COLUMNS,
    ]);
    assert_eq!(output.status.code(), Some(EXIT_SUCCESS));

    let envelope = stdout_json(&output);
    assert_eq!(envelope["warnings"][0]["code"], "fields_dropped");
    assert_eq!(
        envelope["warnings"][0]["details"]["fields"],
        serde_json::json!(["disk_max"])
    );
}

#[test]
fn unknown_sort_key_exits_with_rejected_code() {
    let output = querylens(&[
        "render",
        "--domain",
        "slow-query",
        "--order-by",
        "nonexistent_field",
        "--columns",
        SLOW_QUERY_COLUMNS,
    ]);
    assert_eq!(output.status.code(), Some(EXIT_REQUEST_REJECTED));

    let envelope = stderr_json(&output);
    assert_eq!(envelope["ok"], Value::Bool(false));
    assert_eq!(envelope["error"]["code"], "unknown_column");
    assert_eq!(
        envelope["error"]["message"],
        "unknown order by nonexistent_field"
    );
}

#[test]
fn invalid_field_name_exits_with_rejected_code() {
    let output = querylens(&[
        "render",
        "--domain",
        "statement",
        "--fields",
        "digest;drop",
        "--columns",
        "digest,schema_name,sum_latency",
    ]);
    assert_eq!(output.status.code(), Some(EXIT_REQUEST_REJECTED));
    assert_eq!(stderr_json(&output)["error"]["code"], "invalid_field_name");
}

#[test]
fn unrepresentable_request_exits_with_rejected_code() {
    let output = querylens(&[
        "render",
        "--domain",
        "statement",
        "--columns",
        "Time,Query",
    ]);
    assert_eq!(output.status.code(), Some(EXIT_REQUEST_REJECTED));
    assert_eq!(stderr_json(&output)["error"]["code"], "unknown_column");
}

#[test]
fn columns_reports_supported_and_unsupported_fields() {
    let output = querylens(&[
        "columns",
        "--domain",
        "slow-query",
        "--columns",
        SLOW_QUERY_COLUMNS,
    ]);
    assert_eq!(output.status.code(), Some(EXIT_SUCCESS));

    let envelope = stdout_json(&output);
    let supported = envelope["data"]["supported_fields"]
        .as_array()
        .expect("supported fields should be a list");
    assert_eq!(
        supported.iter().take(5).collect::<Vec<_>>(),
        ["digest", "query", "connection_id", "timestamp", "query_time"]
    );
    assert_eq!(envelope["meta"]["supported_field_count"], 5);
    assert!(
        envelope["data"]["unsupported_fields"]
            .as_array()
            .expect("unsupported fields should be a list")
            .iter()
            .any(|field| field == "disk_max")
    );
}

#[test]
fn mirror_path_from_environment_is_used_without_flag() {
    let temp = unique_temp_dir("querylens-exit-env-db");
    std::fs::create_dir_all(&temp).expect("temp dir should be creatable");
    let db_path = temp.join("absent.sqlite");

    let output = Command::new(env!("CARGO_BIN_EXE_querylens"))
        .arg("--home-dir")
        .arg(&temp)
        .args(["columns", "--domain", "statement"])
        .env("QUERYLENS_DB", &db_path)
        .output()
        .expect("command should execute");

    assert_eq!(output.status.code(), Some(EXIT_RUNTIME_FAILURE));
    let envelope = stderr_json(&output);
    assert_eq!(envelope["error"]["details"]["db_source"], "env");
    assert_eq!(
        envelope["error"]["details"]["db_path"],
        db_path.display().to_string()
    );
}

#[test]
fn directory_as_mirror_path_exits_with_runtime_code() {
    let temp = unique_temp_dir("querylens-exit-dir-db");
    std::fs::create_dir_all(&temp).expect("temp dir should be creatable");

    let output = Command::new(env!("CARGO_BIN_EXE_querylens"))
        .arg("--home-dir")
        .arg(&temp)
        .arg("--db")
        .arg(&temp)
        .args(["columns", "--domain", "statement"])
        .output()
        .expect("command should execute");

    assert_eq!(output.status.code(), Some(EXIT_RUNTIME_FAILURE));
    assert!(String::from_utf8_lossy(&output.stderr).contains("is not a file"));
}

#[test]
fn missing_mirror_database_exits_with_runtime_code() {
    let output = querylens(&["columns", "--domain", "statement"]);
    assert_eq!(output.status.code(), Some(EXIT_RUNTIME_FAILURE));
    assert_eq!(
        stderr_json(&output)["error"]["code"],
        "schema_introspection_failed"
    );
}

#[test]
fn relative_home_dir_exits_with_runtime_code() {
    let output = Command::new(env!("CARGO_BIN_EXE_querylens"))
        .args(["--home-dir", "relative", "columns", "--domain", "statement"])
        .output()
        .expect("command should execute");

    assert_eq!(output.status.code(), Some(EXIT_RUNTIME_FAILURE));
}

#[test]
fn catalog_needs_no_database() {
    let output = querylens(&["catalog", "--domain", "statement"]);
    assert_eq!(output.status.code(), Some(EXIT_SUCCESS));

    let envelope = stdout_json(&output);
    assert_eq!(envelope["data"]["default_order_by"], "sum_latency");
    assert_eq!(envelope["data"]["order_alias"], Value::Null);
}
