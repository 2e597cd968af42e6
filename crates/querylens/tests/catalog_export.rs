use querylens::catalog::{Domain, catalog_entries, catalog_entry_json_schema};

#[test]
fn entries_mirror_the_domain_catalog() {
    for domain in Domain::all() {
        let entries = catalog_entries(domain);
        assert_eq!(entries.len(), domain.fields().len());

        let mandatory = entries
            .iter()
            .filter(|entry| entry.mandatory)
            .map(|entry| entry.json_name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(mandatory.len(), domain.policy().mandatory_fields.len());
    }
}

#[test]
fn slow_query_timestamp_entry_exposes_its_expression() {
    let entries = catalog_entries(Domain::SlowQuery);
    let timestamp = entries
        .iter()
        .find(|entry| entry.json_name == "timestamp")
        .expect("timestamp is catalogued");

    insta::assert_json_snapshot!(timestamp, @r#"
    {
      "json_name": "timestamp",
      "column_name": "timestamp",
      "expression": "(UNIX_TIMESTAMP(Time) + 0E0)",
      "related": [
        "Time"
      ],
      "mandatory": true
    }
    "#);
}

#[test]
fn plain_columns_omit_optional_keys() {
    let entries = catalog_entries(Domain::SlowQuery);
    let query = entries
        .iter()
        .find(|entry| entry.json_name == "query")
        .expect("query is catalogued");

    let encoded = serde_json::to_value(query).expect("entry should serialize");
    let object = encoded.as_object().expect("entry should be an object");
    assert!(!object.contains_key("expression"));
    assert!(!object.contains_key("related"));
    assert_eq!(object.get("mandatory"), Some(&serde_json::json!(false)));
}

#[test]
fn json_schema_describes_catalog_entries() {
    let schema = catalog_entry_json_schema();
    let required = schema
        .get("required")
        .and_then(|value| value.as_array())
        .expect("schema should list required keys");

    for key in ["json_name", "column_name", "mandatory"] {
        assert!(
            required.iter().any(|value| value == key),
            "`{key}` should be required"
        );
    }
    assert!(schema.pointer("/properties/expression").is_some());
}
