use criterion::{black_box, criterion_group, criterion_main, Criterion};
use paradecast::{run, LatLon, OutlookRequest, Parameter, RawSeries};

fn synthetic_raw() -> RawSeries {
    let mut raw = RawSeries::new();
    for year in 1995..2025 {
        for (month, day) in [(10, 3), (10, 4), (10, 5)] {
            let i = (year - 1995) as f64;
            let key = format!("{year}{month:02}{day:02}");
            raw.insert(Parameter::TempAvg, key.clone(), 15.0 + 0.03 * i);
            raw.insert(Parameter::TempMax, key.clone(), 21.0 + 0.05 * i);
            raw.insert(Parameter::TempMin, key.clone(), 9.0 + 0.02 * i);
            raw.insert(Parameter::WindAvg, key.clone(), 3.0 + (i % 3.0));
            raw.insert(Parameter::WindMax, key.clone(), 7.5 + (i % 5.0));
            raw.insert(Parameter::Humidity, key.clone(), 60.0 + (i % 20.0));
            raw.insert(Parameter::Precipitation, key, (i % 7.0) * 1.3);
        }
    }
    raw
}

fn bench_outlook(c: &mut Criterion) {
    let raw = synthetic_raw();
    let request = OutlookRequest {
        raw: &raw,
        month: 10,
        day: 4,
        current_year: 2025,
        location: LatLon(40.4168, -3.7038),
        hour: Some(15),
    };
    c.bench_function("run_outlook", |b| b.iter(|| run(black_box(&request))));
}

criterion_group!(benches, bench_outlook);
criterion_main!(benches);
