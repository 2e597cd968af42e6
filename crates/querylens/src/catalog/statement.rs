use crate::projection::{ComputedFieldPolicy, DomainPolicy, Field};

pub const TABLE: &str = "CLUSTER_STATEMENTS_SUMMARY_HISTORY";
pub const DEFAULT_ORDER_BY: &str = "sum_latency";

pub const POLICY: DomainPolicy = DomainPolicy {
    // schema_name and digest form the GROUP BY key; sum_latency is the default sort.
    mandatory_fields: &["schema_name", "digest", "sum_latency"],
    order_alias: None,
    computed_fields: ComputedFieldPolicy::RequireDependencies,
};

/// Statement summary fields aggregated over the summary windows of the
/// requested time range. Averages are re-weighted by `exec_count`.
pub const FIELDS: &[Field] = &[
    Field::aggregated(
        "summary_begin_time",
        "UNIX_TIMESTAMP(MIN(summary_begin_time))",
        &["summary_begin_time"],
    ),
    Field::aggregated(
        "summary_end_time",
        "UNIX_TIMESTAMP(MAX(summary_end_time))",
        &["summary_end_time"],
    ),
    Field::aggregated("digest_text", "ANY_VALUE(digest_text)", &["digest_text"]),
    Field::aggregated("digest", "ANY_VALUE(digest)", &["digest"]),
    Field::aggregated("exec_count", "SUM(exec_count)", &["exec_count"]),
    Field::aggregated("stmt_type", "ANY_VALUE(stmt_type)", &["stmt_type"]),
    Field::aggregated("sum_errors", "SUM(sum_errors)", &["sum_errors"]),
    Field::aggregated("sum_warnings", "SUM(sum_warnings)", &["sum_warnings"]),
    Field::aggregated("sum_latency", "SUM(sum_latency)", &["sum_latency"]),
    Field::aggregated("max_latency", "MAX(max_latency)", &["max_latency"]),
    Field::aggregated("min_latency", "MIN(min_latency)", &["min_latency"]),
    Field::aggregated(
        "avg_latency",
        "CAST(SUM(exec_count * avg_latency) / SUM(exec_count) AS SIGNED)",
        &["exec_count", "avg_latency"],
    ),
    Field::aggregated(
        "avg_parse_latency",
        "CAST(SUM(exec_count * avg_parse_latency) / SUM(exec_count) AS SIGNED)",
        &["exec_count", "avg_parse_latency"],
    ),
    Field::aggregated(
        "max_parse_latency",
        "MAX(max_parse_latency)",
        &["max_parse_latency"],
    ),
    Field::aggregated(
        "avg_compile_latency",
        "CAST(SUM(exec_count * avg_compile_latency) / SUM(exec_count) AS SIGNED)",
        &["exec_count", "avg_compile_latency"],
    ),
    Field::aggregated(
        "max_compile_latency",
        "MAX(max_compile_latency)",
        &["max_compile_latency"],
    ),
    Field::aggregated(
        "sum_cop_task_num",
        "SUM(sum_cop_task_num)",
        &["sum_cop_task_num"],
    ),
    Field::aggregated(
        "max_cop_process_time",
        "MAX(max_cop_process_time)",
        &["max_cop_process_time"],
    ),
    Field::aggregated(
        "max_cop_wait_time",
        "MAX(max_cop_wait_time)",
        &["max_cop_wait_time"],
    ),
    Field::aggregated(
        "avg_process_time",
        "CAST(SUM(exec_count * avg_process_time) / SUM(exec_count) AS SIGNED)",
        &["exec_count", "avg_process_time"],
    ),
    Field::aggregated(
        "max_process_time",
        "MAX(max_process_time)",
        &["max_process_time"],
    ),
    Field::aggregated(
        "avg_wait_time",
        "CAST(SUM(exec_count * avg_wait_time) / SUM(exec_count) AS SIGNED)",
        &["exec_count", "avg_wait_time"],
    ),
    Field::aggregated("max_wait_time", "MAX(max_wait_time)", &["max_wait_time"]),
    Field::aggregated(
        "avg_backoff_time",
        "CAST(SUM(exec_count * avg_backoff_time) / SUM(exec_count) AS SIGNED)",
        &["exec_count", "avg_backoff_time"],
    ),
    Field::aggregated(
        "max_backoff_time",
        "MAX(max_backoff_time)",
        &["max_backoff_time"],
    ),
    Field::aggregated(
        "avg_total_keys",
        "CAST(SUM(exec_count * avg_total_keys) / SUM(exec_count) AS SIGNED)",
        &["exec_count", "avg_total_keys"],
    ),
    Field::aggregated("max_total_keys", "MAX(max_total_keys)", &["max_total_keys"]),
    Field::aggregated(
        "avg_processed_keys",
        "CAST(SUM(exec_count * avg_processed_keys) / SUM(exec_count) AS SIGNED)",
        &["exec_count", "avg_processed_keys"],
    ),
    Field::aggregated(
        "max_processed_keys",
        "MAX(max_processed_keys)",
        &["max_processed_keys"],
    ),
    Field::aggregated(
        "avg_prewrite_time",
        "CAST(SUM(exec_count * avg_prewrite_time) / SUM(exec_count) AS SIGNED)",
        &["exec_count", "avg_prewrite_time"],
    ),
    Field::aggregated(
        "max_prewrite_time",
        "MAX(max_prewrite_time)",
        &["max_prewrite_time"],
    ),
    Field::aggregated(
        "avg_commit_time",
        "CAST(SUM(exec_count * avg_commit_time) / SUM(exec_count) AS SIGNED)",
        &["exec_count", "avg_commit_time"],
    ),
    Field::aggregated("max_commit_time", "MAX(max_commit_time)", &["max_commit_time"]),
    Field::aggregated(
        "avg_get_commit_ts_time",
        "CAST(SUM(exec_count * avg_get_commit_ts_time) / SUM(exec_count) AS SIGNED)",
        &["exec_count", "avg_get_commit_ts_time"],
    ),
    Field::aggregated(
        "max_get_commit_ts_time",
        "MAX(max_get_commit_ts_time)",
        &["max_get_commit_ts_time"],
    ),
    Field::aggregated(
        "avg_commit_backoff_time",
        "CAST(SUM(exec_count * avg_commit_backoff_time) / SUM(exec_count) AS SIGNED)",
        &["exec_count", "avg_commit_backoff_time"],
    ),
    Field::aggregated(
        "avg_resolve_lock_time",
        "CAST(SUM(exec_count * avg_resolve_lock_time) / SUM(exec_count) AS SIGNED)",
        &["exec_count", "avg_resolve_lock_time"],
    ),
    Field::aggregated(
        "avg_local_latch_wait_time",
        "CAST(SUM(exec_count * avg_local_latch_wait_time) / SUM(exec_count) AS SIGNED)",
        &["exec_count", "avg_local_latch_wait_time"],
    ),
    Field::aggregated(
        "avg_write_keys",
        "CAST(SUM(exec_count * avg_write_keys) / SUM(exec_count) AS SIGNED)",
        &["exec_count", "avg_write_keys"],
    ),
    Field::aggregated("max_write_keys", "MAX(max_write_keys)", &["max_write_keys"]),
    Field::aggregated(
        "avg_write_size",
        "CAST(SUM(exec_count * avg_write_size) / SUM(exec_count) AS SIGNED)",
        &["exec_count", "avg_write_size"],
    ),
    Field::aggregated("max_write_size", "MAX(max_write_size)", &["max_write_size"]),
    Field::aggregated(
        "avg_prewrite_regions",
        "CAST(SUM(exec_count * avg_prewrite_regions) / SUM(exec_count) AS SIGNED)",
        &["exec_count", "avg_prewrite_regions"],
    ),
    Field::aggregated(
        "max_prewrite_regions",
        "MAX(max_prewrite_regions)",
        &["max_prewrite_regions"],
    ),
    Field::aggregated(
        "avg_txn_retry",
        "CAST(SUM(exec_count * avg_txn_retry) / SUM(exec_count) AS SIGNED)",
        &["exec_count", "avg_txn_retry"],
    ),
    Field::aggregated("max_txn_retry", "MAX(max_txn_retry)", &["max_txn_retry"]),
    Field::aggregated(
        "sum_backoff_times",
        "SUM(sum_backoff_times)",
        &["sum_backoff_times"],
    ),
    Field::aggregated("backoff_types", "ANY_VALUE(backoff_types)", &["backoff_types"]),
    Field::aggregated(
        "avg_mem",
        "CAST(SUM(exec_count * avg_mem) / SUM(exec_count) AS SIGNED)",
        &["exec_count", "avg_mem"],
    ),
    Field::aggregated("max_mem", "MAX(max_mem)", &["max_mem"]),
    Field::aggregated(
        "avg_disk",
        "CAST(SUM(exec_count * avg_disk) / SUM(exec_count) AS SIGNED)",
        &["exec_count", "avg_disk"],
    ),
    Field::aggregated("max_disk", "MAX(max_disk)", &["max_disk"]),
    Field::aggregated(
        "avg_affected_rows",
        "CAST(SUM(exec_count * avg_affected_rows) / SUM(exec_count) AS SIGNED)",
        &["exec_count", "avg_affected_rows"],
    ),
    Field::aggregated(
        "avg_result_rows",
        "CAST(SUM(exec_count * avg_result_rows) / SUM(exec_count) AS SIGNED)",
        &["exec_count", "avg_result_rows"],
    ),
    Field::aggregated("max_result_rows", "MAX(max_result_rows)", &["max_result_rows"]),
    Field::aggregated(
        "avg_rocksdb_delete_skipped_count",
        "CAST(SUM(exec_count * avg_rocksdb_delete_skipped_count) / SUM(exec_count) AS SIGNED)",
        &["exec_count", "avg_rocksdb_delete_skipped_count"],
    ),
    Field::aggregated(
        "avg_rocksdb_key_skipped_count",
        "CAST(SUM(exec_count * avg_rocksdb_key_skipped_count) / SUM(exec_count) AS SIGNED)",
        &["exec_count", "avg_rocksdb_key_skipped_count"],
    ),
    Field::aggregated(
        "avg_rocksdb_block_cache_hit_count",
        "CAST(SUM(exec_count * avg_rocksdb_block_cache_hit_count) / SUM(exec_count) AS SIGNED)",
        &["exec_count", "avg_rocksdb_block_cache_hit_count"],
    ),
    Field::aggregated(
        "plan_cache_hits",
        "SUM(plan_cache_hits)",
        &["plan_cache_hits"],
    ),
    Field::aggregated(
        "first_seen",
        "UNIX_TIMESTAMP(MIN(first_seen))",
        &["first_seen"],
    ),
    Field::aggregated("last_seen", "UNIX_TIMESTAMP(MAX(last_seen))", &["last_seen"]),
    Field::aggregated("sample_user", "ANY_VALUE(sample_user)", &["sample_user"]),
    Field::aggregated(
        "query_sample_text",
        "ANY_VALUE(query_sample_text)",
        &["query_sample_text"],
    ),
    Field::aggregated(
        "prev_sample_text",
        "ANY_VALUE(prev_sample_text)",
        &["prev_sample_text"],
    ),
    Field::aggregated("schema_name", "ANY_VALUE(schema_name)", &["schema_name"]),
    Field::aggregated("table_names", "ANY_VALUE(table_names)", &["table_names"]),
    Field::aggregated("index_names", "ANY_VALUE(index_names)", &["index_names"]),
    Field::aggregated("plan_count", "COUNT(DISTINCT plan_digest)", &["plan_digest"]),
    Field::aggregated("plan", "ANY_VALUE(plan)", &["plan"]),
    Field::aggregated("plan_digest", "ANY_VALUE(plan_digest)", &["plan_digest"]),
    Field::aggregated("plan_hint", "ANY_VALUE(plan_hint)", &["plan_hint"]),
];
