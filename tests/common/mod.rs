//! Fixture builders shared by the integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;

use serde_json::{json, Value};

pub const LABELS: [&str; 5] = ["A", "C", "G", "T", "*"];

/// One-hot rows decoding to `seq`, with `*` as the gap label
pub fn one_hot(seq: &str) -> Vec<Vec<f32>> {
    seq.chars()
        .map(|c| {
            let idx = LABELS
                .iter()
                .position(|l| l.starts_with(c))
                .unwrap_or_else(|| panic!("no label for {c}"));
            let mut row = vec![0.0_f32; LABELS.len()];
            row[idx] = 1.0;
            row
        })
        .collect()
}

/// A sample over consecutive reference positions starting at `start`
pub fn sample_json(ref_name: &str, start: u64, seq: &str) -> Value {
    let positions: Vec<Value> = (0..seq.chars().count() as u64)
        .map(|i| json!({"major": start + i, "minor": 0}))
        .collect();
    json!({
        "ref_name": ref_name,
        "name": format!("{ref_name}:{start}"),
        "positions": positions,
        "label_probs": one_hot(seq),
    })
}

/// A container with the label decoding embedded
pub fn container(samples: Vec<Value>) -> Value {
    json!({ "label_decoding": LABELS, "samples": samples })
}

/// A container without label decoding metadata
pub fn bare_container(samples: Vec<Value>) -> Value {
    json!({ "samples": samples })
}

pub fn write_json(path: &Path, value: &Value) {
    let mut file = std::fs::File::create(path).unwrap();
    file.write_all(serde_json::to_string(value).unwrap().as_bytes())
        .unwrap();
}
