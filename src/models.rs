use serde::Serialize;

/// The record carried on every request: a text label and a counter.
/// Built ad hoc at each call site and sent immediately; it has no
/// identity or lifecycle beyond the single call.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    pub x: String,
    pub y: u32,
}

impl Record {
    pub fn new(label: &str, counter: u32) -> Self {
        Self {
            x: label.to_string(),
            y: counter,
        }
    }
}
