//! Serde support (feature-gated)
//!
//! Serializes failures for transport or structured logging. Only
//! `Serialize` is provided: a custom cause is an arbitrary boxed error and
//! cannot be reconstructed from its textual form, so round-tripping is not
//! offered.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::aggregate::AggregateError;
use crate::failure::Failure;

impl Serialize for Failure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Failure", 2)?;
        state.serialize_field("name", &self.name())?;
        state.serialize_field("cause", &self.cause().to_string())?;
        state.end()
    }
}

impl Serialize for AggregateError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AggregateError", 2)?;
        state.serialize_field("message", &self.to_string())?;
        state.serialize_field("failures", &self.failures())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn failure_serializes_name_and_cause() {
        let failure = Failure::named("port", Cause::OutOfRange);
        let json = serde_json::to_string(&failure).unwrap();
        assert_eq!(json, r#"{"name":"port","cause":"value out of range"}"#);
    }

    #[test]
    fn unnamed_failure_serializes_null_name() {
        let failure = Failure::new(Cause::EmptyString);
        let json = serde_json::to_string(&failure).unwrap();
        assert_eq!(json, r#"{"name":null,"cause":"string is empty"}"#);
    }

    #[test]
    fn aggregate_serializes_message_and_failures() {
        let err = begin()
            .run([not_empty("", "host")])
            .finish()
            .unwrap_err();

        let value: serde_json::Value = serde_json::to_value(&err).unwrap();
        assert_eq!(
            value["message"],
            "parameter validation failed:\n  host: string is empty"
        );
        assert_eq!(value["failures"][0]["name"], "host");
    }
}
