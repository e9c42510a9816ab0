use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rand_congruential::*;

pub fn criterion_benchmark(c: &mut Criterion) {
    let linear = GeneratorConfig::linear(7, 1, 5, 1 << 12);
    c.bench_function("generate linear 4096", move |b| b.iter(|| generate(black_box(&linear))));
    let multiplicative = GeneratorConfig::multiplicative(1, 3, 1 << 12, Formula::Odd5);
    c.bench_function("generate multiplicative 4096", move |b| b.iter(|| generate(black_box(&multiplicative))));
    let mut rng = Congruential::from_config(&GeneratorConfig::multiplicative(1, 3, 1 << 40, Formula::Odd3)).unwrap();
    c.bench_function("Congruential::next_u64", move |b| b.iter(|| rng.next_u64()));
    let mut jumper = rng_for_jump();
    c.bench_function("Congruential::jump", move |b| b.iter(|| jumper.jump(black_box(1 << 60))));
}

fn rng_for_jump() -> Congruential {
    Congruential::from_config(&GeneratorConfig::linear(3, 5, 1, 1 << 62)).unwrap()
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
