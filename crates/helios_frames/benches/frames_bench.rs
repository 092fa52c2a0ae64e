use criterion::{Criterion, black_box, criterion_group, criterion_main};
use helios_frames::{
    AtmosphericConditions, EquatorialCoords, NutationModel, Observer, Refraction,
    apparent_sidereal_time_deg, equatorial_to_horizontal, nutation_meeus63, nutation_two_term,
};

fn bench_nutation(c: &mut Criterion) {
    let t = -0.127_296_372_348;
    c.bench_function("nutation_meeus63", |b| b.iter(|| nutation_meeus63(black_box(t))));
    c.bench_function("nutation_two_term", |b| b.iter(|| nutation_two_term(black_box(t))));
}

fn bench_sidereal(c: &mut Criterion) {
    c.bench_function("apparent_sidereal_time", |b| {
        b.iter(|| apparent_sidereal_time_deg(black_box(2_446_895.5), NutationModel::Meeus63))
    });
}

fn bench_horizontal(c: &mut Criterion) {
    let eq = EquatorialCoords::new(347.319_34, -6.719_892);
    let obs = Observer::new(77.065_556, 38.921_389);
    c.bench_function("equatorial_to_horizontal", |b| {
        b.iter(|| equatorial_to_horizontal(black_box(&eq), black_box(128.737_873), &obs))
    });
}

fn bench_refraction(c: &mut Criterion) {
    let cond = AtmosphericConditions::default();
    c.bench_function("refraction_saemundsson", |b| {
        b.iter(|| Refraction::from_true_altitude(black_box(0.5541), &cond))
    });
}

criterion_group!(
    benches,
    bench_nutation,
    bench_sidereal,
    bench_horizontal,
    bench_refraction
);
criterion_main!(benches);
