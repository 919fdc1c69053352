use mnemo_core::{DelayPolicy, NullSink, Pipeline, PipelineResult};
use mnemo_store::{MemoryBackend, WorkspaceStore};

pub const SAMPLE_TRANSCRIPT: &str = "User: I'm working on the DataAnalyzer project with Python. \
The budget is $5000 and we need to finish by next Friday.\n\
Assistant: Understood. I'll start with the ingestion layer and keep the total under $5000.";

pub fn memory_store() -> WorkspaceStore {
    WorkspaceStore::open(Box::new(MemoryBackend::new())).unwrap()
}

/// Run a transcript through the pipeline against the active workspace and
/// commit the result, returning what the run produced.
pub fn process_and_commit(store: &mut WorkspaceStore, text: &str) -> PipelineResult {
    let mut pipeline = Pipeline::new(DelayPolicy::None);
    let result = pipeline.run(text, store.active(), &mut NullSink).unwrap();
    store
        .store_conversation(
            result.parsed.clone(),
            result.extracted.clone(),
            result.insights.clone(),
            result.agenda_items.clone(),
        )
        .unwrap();
    result
}
