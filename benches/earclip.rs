use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use polytri::algorithms::triangulation::earclip::earclip;
use polytri::data::Polygon;
use rand::SeedableRng;

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = rand::rngs::SmallRng::seed_from_u64(0);
  for n in [10, 100] {
    let polygon = Polygon::random_star(n, &mut rng);
    let normal = polygon.normal();
    c.bench_function(&format!("earclip(star {n})"), |b| {
      b.iter_batched(
        || polygon.clone(),
        |p| earclip(p, black_box(&normal)),
        BatchSize::SmallInput,
      )
    });
  }
  let polygon = Polygon::random_star(20, &mut rng);
  c.bench_function("triangulate(star 20)", |b| {
    b.iter_batched(
      || polygon.clone(),
      polytri::triangulate,
      BatchSize::SmallInput,
    )
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
