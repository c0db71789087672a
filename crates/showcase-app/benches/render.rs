use criterion::{black_box, criterion_group, criterion_main, Criterion};
use showcase_analytics::Notifier;
use showcase_app::{PageBindings, PageController, TextGrid, TextPager};
use showcase_core::{CardSet, EngineOptions, InputEvent};

fn menu(size: usize) -> CardSet {
    let categories = ["main", "dessert", "sauce", "drink"];
    CardSet::from_entries((0..size).map(|i| (categories[i % categories.len()], format!("Recipe {i}"))))
}

fn bench_category_walk(size: usize, seed: u64) {
    let cards = menu(size);
    let mut controller = PageController::mount(
        PageBindings::new(cards.clone(), TextGrid::new(cards), TextPager::new()),
        EngineOptions::with_seed(seed),
        Notifier::disabled(),
    );
    for category in ["main", "dessert", "all"] {
        let _ = black_box(controller.dispatch(&InputEvent::CategorySelected(category.into())));
        while let showcase_core::Outcome::Rendered(intent) = controller.dispatch(&InputEvent::NextRequested) {
            black_box(intent);
        }
    }
}

fn render_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("category_walk");
    for size in [14usize, 120, 1_000] {
        group.bench_function(format!("cards_{size}"), |b| b.iter(|| bench_category_walk(size, 7)));
    }
    group.finish();
}

criterion_group!(benches, render_bench);
criterion_main!(benches);
