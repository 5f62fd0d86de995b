use crate::domain::model::RenderTarget;
use crate::domain::ports::OutputSink;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Prints each replaced region to stdout, labelled with the region name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutput;

impl OutputSink for ConsoleOutput {
    fn replace(&self, target: RenderTarget, content: &str) {
        println!("--- {} ---", target);
        println!("{}", content);
    }
}

/// Holds the last rendered string per region, last write wins. Useful for
/// embedding the client and for tests that need to inspect the regions.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    regions: Arc<Mutex<HashMap<RenderTarget, String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self, target: RenderTarget) -> Option<String> {
        let regions = self
            .regions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        regions.get(&target).cloned()
    }
}

impl OutputSink for MemorySink {
    fn replace(&self, target: RenderTarget, content: &str) {
        let mut regions = self
            .regions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        regions.insert(target, content.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_last_write_wins() {
        let sink = MemorySink::new();
        sink.replace(RenderTarget::Primary, "first");
        sink.replace(RenderTarget::Primary, "second");

        assert_eq!(sink.last(RenderTarget::Primary).unwrap(), "second");
        assert!(sink.last(RenderTarget::Mutation).is_none());
    }
}
