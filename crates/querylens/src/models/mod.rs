pub mod list_request;
pub mod query_envelope;

pub use list_request::{
    INVALID_FIELD_NAME_CODE, ListRequest, RequestError, parse_field_selection,
};
pub use query_envelope::{
    CommandFailure, EnvelopeNotice, FailureClass, QUERY_ENVELOPE_SCHEMA_VERSION, QueryEnvelope,
};
