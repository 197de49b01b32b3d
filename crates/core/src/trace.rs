//! Per-node trace records
//!
//! A record lists the node's declared inputs and outputs with their display
//! values. Sinks are optional; nothing in a calculation depends on them.

use std::fmt::Write as _;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// One variable as seen by a trace record
#[derive(Debug, Clone, PartialEq)]
pub struct TraceValue {
    pub name: &'static str,
    pub value: f64,
    pub units: String,
}

/// Snapshot of one node invocation
#[derive(Debug, Clone, PartialEq)]
pub struct TraceRecord {
    pub function: &'static str,
    pub inputs: Vec<TraceValue>,
    pub outputs: Vec<TraceValue>,
}

impl TraceRecord {
    /// Human-readable form: a header line then one line per value
    ///
    /// ```text
    /// begin proc fMapScale() 1 1
    ///   i vMapFraction 24000 ratio
    ///   o vMapScale 2.64 in/mi
    /// ```
    pub fn render(&self) -> String {
        let mut out = format!(
            "begin proc {}() {} {}\n",
            self.function,
            self.inputs.len(),
            self.outputs.len()
        );
        for (tag, values) in [("i", &self.inputs), ("o", &self.outputs)] {
            for v in values {
                let _ = writeln!(out, "  {tag} {} {} {}", v.name, v.value, v.units);
            }
        }
        out
    }
}

/// Receives a record after each traced node
pub trait TraceSink: Send + Sync {
    fn record(&self, record: &TraceRecord);
}

/// Emits each record as a `tracing` event
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn record(&self, record: &TraceRecord) {
        debug!(
            function = record.function,
            inputs = record.inputs.len(),
            outputs = record.outputs.len(),
            "{}",
            record.render().trim_end()
        );
    }
}

/// Accumulates rendered records in memory
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    buffer: Arc<Mutex<String>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far
    pub fn contents(&self) -> String {
        self.buffer.lock().map(|b| b.clone()).unwrap_or_default()
    }
}

impl TraceSink for BufferSink {
    fn record(&self, record: &TraceRecord) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push_str(&record.render());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TraceRecord {
        TraceRecord {
            function: "fMapScale",
            inputs: vec![TraceValue {
                name: "vMapFraction",
                value: 24000.0,
                units: "ratio".to_string(),
            }],
            outputs: vec![TraceValue {
                name: "vMapScale",
                value: 2.64,
                units: "in/mi".to_string(),
            }],
        }
    }

    #[test]
    fn test_render() {
        assert_eq!(
            record().render(),
            "begin proc fMapScale() 1 1\n  i vMapFraction 24000 ratio\n  o vMapScale 2.64 in/mi\n"
        );
    }

    #[test]
    fn test_buffer_sink_shares_its_buffer() {
        let sink = BufferSink::new();
        let handle = sink.clone();
        sink.record(&record());
        sink.record(&record());
        assert_eq!(handle.contents().matches("begin proc").count(), 2);
    }
}
