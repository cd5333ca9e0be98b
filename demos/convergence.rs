use inclusion::baseline::{estimator_std_error, inclusion_probability};
use inclusion::simulate_seeded;

fn main() {
    // Worst per-item deviation from m/N shrinks like 1/sqrt(t).
    let (n, m) = (10, 3);
    let p = inclusion_probability(n, m).unwrap();

    println!("N={n} m={m} p={p:.3}");
    println!("{:>8} {:>10} {:>10}", "t", "max_dev", "std_err");
    for t in [100, 1_000, 10_000, 100_000] {
        let mx = simulate_seeded(7, n, m, t).unwrap();
        let worst = mx.max_abs_deviation(p);
        let se = estimator_std_error(n, m, t).unwrap();
        println!("{t:>8} {worst:>10.5} {se:>10.5}");
    }

    let mx = simulate_seeded(7, n, m, 100_000).unwrap();
    assert!(mx.max_abs_deviation(p) < 0.01);
}
