use criterion::{
    BenchmarkId,
    criterion_group,
    criterion_main,
    Criterion,
    Throughput,
};

use splatv::{
    Splat,
    io::codec::SplatvCodec,
    random_splats,
    rank,
};


const SPLAT_COUNTS: [usize; 4] = [
    1000,
    10000,
    84_348,
    1_244_819,
];

fn splatv_encode_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode splatv streams");
    for count in SPLAT_COUNTS.iter() {
        group.throughput(Throughput::Bytes(*count as u64 * std::mem::size_of::<Splat>() as u64));
        group.bench_with_input(
            BenchmarkId::new("encode", count),
            &count,
            |b, &count| {
                let splats = random_splats(*count);

                b.iter(|| splats.encode_splatv());
            },
        );
        group.bench_with_input(
            BenchmarkId::new("rank", count),
            &count,
            |b, &count| {
                let splats = random_splats(*count);

                b.iter(|| rank(&splats));
            },
        );
    }
}

criterion_group!{
    name = io_benches;
    config = Criterion::default().sample_size(10);
    targets = splatv_encode_benchmark
}
criterion_main!(io_benches);
