use inclusion::baseline::{estimator_std_error, inclusion_probability};
use inclusion::simulate_seeded;

fn main() {
    // 3-of-10 complete randomization, 10k trials, fixed seed.
    let (n, m, t) = (10, 3, 10_000);
    let mx = simulate_seeded(42, n, m, t).unwrap();

    let p = inclusion_probability(n, m).unwrap();
    let se = estimator_std_error(n, m, t).unwrap();
    let worst = mx.max_abs_deviation(p);

    assert_eq!(mx.items(), n);
    assert_eq!(mx.cols(), t + 1);
    assert!(mx.inclusion_rates().iter().all(|&r| (0.0..=1.0).contains(&r)));
    // Every rate should sit within a few standard errors of m/N.
    assert!(worst < 6.0 * se);

    println!(
        "N={} m={} t={} p=m/N={:.3} grand_mean={:.4} max_dev={:.4} ({:.1} se)",
        n,
        m,
        t,
        p,
        mx.mean_inclusion_rate(),
        worst,
        worst / se
    );
    for (item, &rate) in mx.inclusion_rates().iter().enumerate() {
        println!("  item {item}: rate {rate:.4}");
    }
}
