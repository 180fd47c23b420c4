use criterion::{criterion_group, criterion_main, Criterion};
use tile_filter::{filter, run, TileBag};

const WORDS: &[&str] = &[
    "fizz", "FIZZ", "jjj", "quixotic", "razzmatazz", "aardvark", "zyzzyva", "excellent",
    "", "wordfeud", "onomatopoeia", "jukebox",
];

fn bench_can_draw(c: &mut Criterion) {
    let bag = TileBag::standard();
    c.bench_function("tilebag.can_draw", |b| {
        b.iter(|| bag.can_draw("onomatopoeia").unwrap())
    });
}

fn bench_filter(c: &mut Criterion) {
    let bag = TileBag::standard();
    c.bench_function("filter", |b| {
        b.iter(|| filter(bag, WORDS).collect::<Result<Vec<_>, _>>().unwrap())
    });
}

fn bench_run(c: &mut Criterion) {
    let bag = TileBag::standard();
    let input = WORDS.repeat(100).join("\n");
    c.bench_function("run", |b| {
        b.iter(|| {
            let mut output = Vec::new();
            run(bag, input.as_bytes(), &mut output).unwrap()
        })
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_can_draw(c);
    bench_filter(c);
    bench_run(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
