criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        generating_match_setup,
        sampling_strategy_moves,
        scoring_single_round,
        replaying_paired_batch,
}

fn generating_match_setup(c: &mut criterion::Criterion) {
    c.bench_function("generate an 8x8 match setup", |b| {
        b.iter(|| Setup::generate(8, 8, false, &Uniform, &mut SmallRng::seed_from_u64(0)))
    });
}

fn sampling_strategy_moves(c: &mut criterion::Criterion) {
    let strategy = Strategy::uniform(64);
    c.bench_function("sample a 100-move list", |b| {
        b.iter(|| strategy.sample_many(8, TRIALS, &mut SmallRng::seed_from_u64(1)))
    });
}

fn scoring_single_round(c: &mut criterion::Criterion) {
    let setup = Setup::generate(8, 8, false, &Uniform, &mut SmallRng::seed_from_u64(2));
    let mut session = Session::from((&setup, true));
    c.bench_function("score one proximity round", |b| {
        b.iter(|| session.play(Spot::from((2, 3)), Spot::from((5, 7))))
    });
}

fn replaying_paired_batch(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(3);
    let setup = Setup::generate(8, 8, false, &Uniform, rng);
    let hiders = setup.hider.sample_many(8, TRIALS, rng);
    let seekers = setup.seeker.sample_many(8, TRIALS, rng);
    let mut session = Session::from((&setup, false));
    c.bench_function("replay a 100-trial batch", |b| {
        b.iter(|| {
            session.reset();
            session.simulate(&hiders, &seekers).unwrap()
        })
    });
}

use hidenseek::TRIALS;
use hidenseek::game::Setup;
use hidenseek::game::Spot;
use hidenseek::game::Strategy;
use hidenseek::game::Uniform;
use hidenseek::session::Session;
use rand::SeedableRng;
use rand::rngs::SmallRng;
