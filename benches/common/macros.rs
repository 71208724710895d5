// Creates a benchmark of one reducer over every size in `$sizes`.
//
// # Usage
// ```no_run
// benchmark_reduce!(reduce_naive_slice, "naive", REDUCE_INPUT_SIZES, generate_values_random,
//     |data: &[i32]| sum_of_squares_slow(data));
// ```
#[macro_export]
macro_rules! benchmark_reduce {
    ($func_name:ident, $variant:literal, $sizes:expr, $generate:expr, $reduce:expr) => {
        fn $func_name(c: &mut Criterion) {
            let mut group = c.benchmark_group(concat!("reduce-", $variant));
            group.measurement_time(DEFAULT_MEASUREMENT_TIME);
            group.sample_size(DEFAULT_SAMPLE_SIZE);

            for &size in $sizes {
                let data: Vec<i32> = $generate(size);
                if size > 0 {
                    group.throughput(criterion::Throughput::Elements(size as u64));
                }
                group.bench_with_input(BenchmarkId::new($variant, size), &data, |b, data| {
                    b.iter(|| $reduce(black_box(data.as_slice())))
                });
            }

            group.finish();
        }
    };
}
