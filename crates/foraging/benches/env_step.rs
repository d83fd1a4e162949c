use criterion::{criterion_group, criterion_main, Criterion};
use foraging::{Action, Env, EnvConfig, ForagingEnv, Params, Turn};

fn bench_env_step(c: &mut Criterion) {
    let config = EnvConfig {
        seed: 11,
        ..EnvConfig::default()
    };
    let mut env = ForagingEnv::new(config, Params::default()).unwrap();
    let action = Action::new(1.0, Turn::Left);

    c.bench_function("env_step", |b| {
        b.iter(|| {
            let (_, _, done) = env.step(&action).unwrap();
            if done {
                env.reset().unwrap();
            }
        });
    });
}

criterion_group!(benches, bench_env_step);
criterion_main!(benches);
