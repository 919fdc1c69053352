use criterion::{criterion_group, criterion_main, Criterion};
use mnemo_core::{
    extract_information, parse_conversation, synthesize_prompt, DelayPolicy, NullSink, Pipeline,
    ProjectWorkspace,
};
use std::hint::black_box;

const TRANSCRIPT: &str = "User: I'm working on the DataAnalyzer project with Python and React. \
The budget is $5000 and we need to finish by next Friday. We must deliver the dashboard \
and I want to improve the ingestion throughput.\n\
Assistant: Understood. I'll start with the ingestion layer, then wire the dashboard into \
the existing pipeline and keep the total under $5000.";

fn seeded_workspace() -> ProjectWorkspace {
    let mut ws = ProjectWorkspace::default_workspace();
    for i in 0..20 {
        ws.projects.insert(format!("Project{i}"));
        ws.technologies.insert(format!("Tech{i}"));
    }
    ws
}

fn bench_extraction(c: &mut Criterion) {
    let parsed = parse_conversation(TRANSCRIPT);

    c.bench_function("extract_information", |b| {
        b.iter(|| extract_information(black_box(&parsed)));
    });
}

fn bench_prompt_synthesis(c: &mut Criterion) {
    let ws = seeded_workspace();
    let parsed = parse_conversation(TRANSCRIPT);
    let extracted = extract_information(&parsed);

    c.bench_function("synthesize_prompt", |b| {
        b.iter(|| synthesize_prompt(black_box(&parsed), &ws, &extracted, &[]));
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let ws = seeded_workspace();

    c.bench_function("full_pipeline", |b| {
        b.iter(|| {
            let mut pipeline = Pipeline::new(DelayPolicy::None);
            pipeline
                .run(black_box(TRANSCRIPT), &ws, &mut NullSink)
                .unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_extraction,
    bench_prompt_synthesis,
    bench_full_pipeline
);
criterion_main!(benches);
