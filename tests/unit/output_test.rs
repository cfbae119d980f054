//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use bridge::output::{ErrorOutput, InfoOutput, OutputMode, TransformOutput};
use bridge::TransformError;

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn transform_output_serialization() {
    let result = TransformOutput {
        input: "hello".to_string(),
        output: "[bridge] hello".to_string(),
        steps: vec!["tag".to_string()],
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"input\":\"hello\""));
    assert!(json.contains("\"output\":\"[bridge] hello\""));
    assert!(json.contains("\"steps\":[\"tag\"]"));
}

#[test]
fn info_output_serialization() {
    let result = InfoOutput {
        name: "bridge".to_string(),
        version: "0.1.0".to_string(),
        info: "bridge v0.1.0".to_string(),
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"info\":\"bridge v0.1.0\""));
}

#[test]
fn error_output_from_transform_error() {
    let result = ErrorOutput::new(&TransformError::EmptyInput);
    assert!(!result.success);
    assert_eq!(result.message, "Input cannot be empty");

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":false"));
}
