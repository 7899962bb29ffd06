use criterion::BenchmarkGroup;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use std::hint::black_box;
use std::panic;
use tackle::Artefact;
use tackle::ArtefactType;
use tackle::Handler;
use tackle::Scope;
use tackle::error::ErrorRef;
use tackle::error::Exception;
use tackle::tackle;

const TARGETS: &[usize] = &[1, 4, 16, 64];

fn bench_matches(criterion: &mut Criterion) {
  let mut group: BenchmarkGroup<_> = criterion.benchmark_group("matches");

  for targets in TARGETS {
    let errors: Vec<ErrorRef> = (0..*targets)
      .map(|index| Exception::shared(format!("error {index}")))
      .collect();

    let handler: Handler = tackle(&errors);
    let last: Artefact = Artefact::Error(errors[errors.len() - 1].clone());
    let miss: Artefact = Artefact::Value(Box::new(7_i32));

    let id: BenchmarkId = BenchmarkId::new("value-hit", targets);

    group.bench_with_input(id, &last, |bench, artefact| {
      bench.iter(|| black_box(handler.matches(black_box(artefact))))
    });

    let id: BenchmarkId = BenchmarkId::new("value-miss", targets);

    group.bench_with_input(id, &miss, |bench, artefact| {
      bench.iter(|| black_box(handler.matches(black_box(artefact))))
    });
  }

  group.finish();
}

fn bench_scope(criterion: &mut Criterion) {
  let mut group: BenchmarkGroup<_> = criterion.benchmark_group("scope");

  group.bench_function("normal-exit", |bench| {
    bench.iter(|| {
      Scope::new()
        .defer(tackle([ArtefactType::error()]).with(|artefact| drop(black_box(artefact))))
        .run(|| black_box(42_u32))
    })
  });

  // Absorbed panics still run the panic hook, silence it for the measurement.
  let hook = panic::take_hook();
  panic::set_hook(Box::new(|_| {}));

  group.bench_function("absorbed", |bench| {
    bench.iter(|| {
      Scope::new()
        .defer(tackle([ArtefactType::of::<u32>()]).with(|artefact| drop(black_box(artefact))))
        .run(|| -> u32 { panic::panic_any(black_box(42_u32)) })
    })
  });

  panic::set_hook(hook);

  group.finish();
}

criterion_group!(benches, bench_matches, bench_scope);
criterion_main!(benches);
