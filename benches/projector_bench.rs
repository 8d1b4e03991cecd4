use criterion::{black_box, criterion_group, criterion_main, Criterion};

use projector::{Pipeline, Projection};

const N: usize = 100_000;

fn lonlat_grid(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            ((-120.0 + t * 60.0).to_radians(), (20.0 + t * 40.0).to_radians())
        })
        .collect()
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function("new_projection_lcc", |b| {
        b.iter(|| {
            Projection::new(black_box(
                "+proj=lcc +lat_1=33 +lat_2=45 +lat_0=39 +lon_0=-96 +datum=NAD83 +units=us-ft",
            ))
            .unwrap()
        });
    });
}

fn bench_projection_throughput(c: &mut Criterion) {
    let grid = lonlat_grid(N);
    let cases = [
        ("merc_sphere", "+proj=merc +R=6371000"),
        ("merc_ellps", "+proj=merc +ellps=WGS84 +lat_ts=30"),
        ("lcc_ellps", "+proj=lcc +lat_1=33 +lat_2=45 +lat_0=39 +lon_0=-96 +ellps=WGS84"),
        ("eqc", "+proj=eqc +R=6371000 +lat_ts=30"),
    ];

    for (name, def) in cases {
        let proj = Projection::new(def).unwrap();
        let mut coords = grid.clone();

        c.bench_function(&format!("{name}_forward_100k"), |b| {
            b.iter(|| {
                coords.copy_from_slice(&grid);
                proj.forward_batch(&mut coords).unwrap();
            });
        });

        let mut projected = grid.clone();
        proj.forward_batch(&mut projected).unwrap();
        c.bench_function(&format!("{name}_inverse_100k"), |b| {
            b.iter(|| {
                coords.copy_from_slice(&projected);
                proj.inverse_batch(&mut coords).unwrap();
            });
        });
    }
}

fn bench_pipeline(c: &mut Criterion) {
    let pipe = Pipeline::new(
        "+proj=lcc +lat_1=33 +lat_2=45 +lat_0=39 +lon_0=-96 +ellps=WGS84",
        "+proj=merc +ellps=WGS84",
    )
    .unwrap();
    let mut coords: Vec<(f64, f64)> = (0..N)
        .map(|i| {
            let t = i as f64 / N as f64;
            (-8_000_000.0 + t * 16_000_000.0, 2_000_000.0 + t * 5_000_000.0)
        })
        .collect();
    let start = coords.clone();

    c.bench_function("pipeline_merc_to_lcc_100k", |b| {
        b.iter(|| {
            coords.copy_from_slice(&start);
            pipe.transform_inv_batch(&mut coords).unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_construction,
    bench_projection_throughput,
    bench_pipeline
);
criterion_main!(benches);
