use criterion::{black_box, criterion_group, criterion_main, Criterion};
use optionset::{Bits as _, FlagSet};

optionset::flags! {
    #[derive(Debug, Clone, Copy)]
    enum Enum: u32 {
        None = 0,
        Foo = 1,
        Fooz = 4,
        G = 1024,
        J = 8192,
    }
}

fn new(b: &mut Criterion) {
    b.bench_function("new", |b| {
        b.iter(|| FlagSet::new(black_box([Enum::Foo, Enum::Fooz, Enum::G, Enum::J])));
    });
}

fn ceil_power_of_two(b: &mut Criterion) {
    b.bench_function("ceil_power_of_two", |b| {
        b.iter(|| black_box(6543u32).ceil_power_of_two());
    });
}

fn options(b: &mut Criterion) {
    b.bench_function("options", |b| {
        b.iter(|| {
            let set = FlagSet::new(black_box([Enum::Foo, Enum::Fooz, Enum::G, Enum::J]));
            set.options()
        });
    });
}

fn iter(b: &mut Criterion) {
    b.bench_function("iter", |b| {
        b.iter(|| {
            let set = FlagSet::new(black_box([Enum::Foo, Enum::Fooz, Enum::G, Enum::J]));
            set.iter().count()
        });
    });
}

fn options_full_width(b: &mut Criterion) {
    b.bench_function("options_full_width", |b| {
        b.iter(|| optionset::decompose(black_box(u64::MAX), |raw| raw));
    });
}

criterion_group!(
    benches,
    new,
    ceil_power_of_two,
    options,
    iter,
    options_full_width
);
criterion_main!(benches);
