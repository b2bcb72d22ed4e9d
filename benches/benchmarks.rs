use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use slicestore::{app_store, AppAction, AppState, RenderHandle, Selected};

fn dispatch_benchmark(c: &mut Criterion) {
    let store = app_store();

    c.bench_function("dispatch_click", |b| {
        b.iter(|| {
            black_box(store.dispatch(AppAction::Click)).ok();
        });
    });
}

fn dispatch_noop_benchmark(c: &mut Criterion) {
    let store = app_store();
    let action = AppAction::from_tag("NOOP");

    c.bench_function("dispatch_noop", |b| {
        b.iter(|| {
            black_box(store.dispatch(action.clone())).ok();
        });
    });
}

fn get_state_benchmark(c: &mut Criterion) {
    let store = app_store();

    c.bench_function("get_state", |b| {
        b.iter(|| {
            black_box(store.get_state());
        });
    });
}

fn notify_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("notify_listeners");

    for listener_count in [1, 10, 100].iter() {
        let store = app_store();
        let subscriptions: Vec<_> = (0..*listener_count)
            .map(|_| {
                store.subscribe(|| {
                    // Empty listener
                })
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(listener_count),
            listener_count,
            |b, _| {
                b.iter(|| {
                    black_box(store.dispatch(AppAction::Time)).ok();
                });
            },
        );
        drop(subscriptions);
    }
    group.finish();
}

fn selector_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("selector_rounds");

    for selector_count in [1, 10, 100].iter() {
        let store = app_store();
        let render = RenderHandle::new("bench");
        // Selectors on the untouched slice: every round compares, none render.
        let selected: Vec<_> = (0..*selector_count)
            .map(|_| Selected::new(&store, |s: &AppState| s.clicks, &render))
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(selector_count),
            selector_count,
            |b, _| {
                b.iter(|| {
                    black_box(store.dispatch(AppAction::Time)).ok();
                });
            },
        );
        drop(selected);
    }
    group.finish();
}

criterion_group!(
    benches,
    dispatch_benchmark,
    dispatch_noop_benchmark,
    get_state_benchmark,
    notify_benchmark,
    selector_benchmark,
);
criterion_main!(benches);
