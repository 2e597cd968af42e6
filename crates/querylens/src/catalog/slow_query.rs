use crate::projection::{ComputedFieldPolicy, DomainPolicy, Field, OrderAlias};

pub const TABLE: &str = "CLUSTER_SLOW_QUERY";
pub const DEFAULT_ORDER_BY: &str = "timestamp";

pub const POLICY: DomainPolicy = DomainPolicy {
    // Identity of a slow log record: what ran, on which connection, when.
    mandatory_fields: &["digest", "connection_id", "timestamp"],
    order_alias: Some(OrderAlias {
        sort_key: "timestamp",
        column: "Time",
    }),
    computed_fields: ComputedFieldPolicy::AlwaysRenderable,
};

/// Slow log columns across server generations. Rows for columns a given
/// version lacks are dropped at render time.
pub const FIELDS: &[Field] = &[
    Field::column("digest", "Digest"),
    Field::column("query", "Query"),
    Field::column("instance", "INSTANCE"),
    Field::column("db", "DB"),
    Field::column("connection_id", "Conn_ID"),
    Field::column("success", "Succ"),
    Field::computed("timestamp", "timestamp", "(UNIX_TIMESTAMP(Time) + 0E0)")
        .with_related(&["Time"]),
    Field::column("query_time", "Query_time"),
    Field::column("parse_time", "Parse_time"),
    Field::column("compile_time", "Compile_time"),
    Field::column("rewrite_time", "Rewrite_time"),
    Field::column("preproc_subqueries_time", "Preproc_subqueries_time"),
    Field::column("optimize_time", "Optimize_time"),
    Field::column("wait_ts", "Wait_TS"),
    Field::column("cop_time", "Cop_time"),
    Field::column("lock_keys_time", "LockKeys_time"),
    Field::column("write_sql_response_total", "Write_sql_response_total"),
    Field::column("exec_retry_time", "Exec_retry_time"),
    Field::column("exec_retry_count", "Exec_retry_count"),
    Field::column("memory_max", "Mem_max"),
    Field::column("disk_max", "Disk_max"),
    Field::column("txn_start_ts", "Txn_start_ts"),
    Field::column("prev_stmt", "Prev_stmt"),
    Field::column("plan", "Plan"),
    Field::column("plan_digest", "Plan_digest"),
    Field::column("plan_from_cache", "Plan_from_cache"),
    Field::column("plan_from_binding", "Plan_from_binding"),
    Field::column("is_internal", "Is_internal"),
    Field::column("index_names", "Index_names"),
    Field::column("stats", "Stats"),
    Field::column("backoff_types", "Backoff_types"),
    Field::column("backoff_detail", "Backoff_Detail"),
    Field::column("user", "User"),
    Field::column("host", "Host"),
    Field::column("process_time", "Process_time"),
    Field::column("wait_time", "Wait_time"),
    Field::column("backoff_time", "Backoff_time"),
    Field::column("get_commit_ts_time", "Get_commit_ts_time"),
    Field::column("local_latch_wait_time", "Local_latch_wait_time"),
    Field::column("resolve_lock_time", "Resolve_lock_time"),
    Field::column("prewrite_time", "Prewrite_time"),
    Field::column("wait_prewrite_binlog_time", "Wait_prewrite_binlog_time"),
    Field::column("commit_time", "Commit_time"),
    Field::column("commit_backoff_time", "Commit_backoff_time"),
    Field::column("cop_proc_avg", "Cop_proc_avg"),
    Field::column("cop_proc_p90", "Cop_proc_p90"),
    Field::column("cop_proc_max", "Cop_proc_max"),
    Field::column("cop_proc_addr", "Cop_proc_addr"),
    Field::column("cop_wait_avg", "Cop_wait_avg"),
    Field::column("cop_wait_p90", "Cop_wait_p90"),
    Field::column("cop_wait_max", "Cop_wait_max"),
    Field::column("cop_wait_addr", "Cop_wait_addr"),
    Field::column("write_keys", "Write_keys"),
    Field::column("write_size", "Write_size"),
    Field::column("prewrite_region", "Prewrite_region"),
    Field::column("txn_retry", "Txn_retry"),
    Field::column("request_count", "Request_count"),
    Field::column("process_keys", "Process_keys"),
    Field::column("total_keys", "Total_keys"),
    Field::column("result_rows", "Result_rows"),
    Field::column("kv_total", "KV_total"),
    Field::column("pd_total", "PD_total"),
    Field::column("rocksdb_delete_skipped_count", "Rocksdb_delete_skipped_count"),
    Field::column("rocksdb_key_skipped_count", "Rocksdb_key_skipped_count"),
    Field::column("rocksdb_block_cache_hit_count", "Rocksdb_block_cache_hit_count"),
    Field::column("rocksdb_block_read_count", "Rocksdb_block_read_count"),
    Field::column("rocksdb_block_read_byte", "Rocksdb_block_read_byte"),
];
