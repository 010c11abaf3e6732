use perc::{estimate_probability, fill, Error, Percolation, PercolationStats};
use pretty_assertions::assert_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};

////////////////////////////////////////////////////////////////////////////////

#[test]
fn one_by_one_grid() {
    let mut p = Percolation::new(1).unwrap();
    assert!(!p.percolates());
    assert!(!p.is_full(1, 1).unwrap());
    p.open(1, 1).unwrap();
    assert!(p.percolates());

    let s = PercolationStats::run(1, 5, &mut StdRng::seed_from_u64(0)).unwrap();
    assert_eq!(s.samples(), &[1.0; 5]);
    assert_eq!(s.mean(), 1.0);
    assert_eq!(s.stddev(), 0.0);
}

#[test]
fn backwash_after_percolation() {
    let mut p = Percolation::new(5).unwrap();
    for row in 1..=5 {
        p.open(row, 1).unwrap();
    }
    p.open(5, 5).unwrap();
    p.open(4, 5).unwrap();
    p.open(5, 3).unwrap();

    assert!(p.percolates());
    assert!(!p.is_full(5, 5).unwrap());
    assert!(!p.is_full(4, 5).unwrap());
    assert!(!p.is_full(5, 3).unwrap());
    assert!(p.is_full(5, 1).unwrap());
}

#[test]
fn full_implies_open_on_random_fills() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..50 {
        let n = rng.gen_range(1..=12);
        let p = fill(n, &mut rng).unwrap();
        assert!(p.percolates());
        for row in 1..=n {
            for col in 1..=n {
                if !p.is_open(row, col).unwrap() {
                    assert!(!p.is_full(row, col).unwrap());
                }
            }
        }
        assert!((1..=n).any(|col| p.is_full(n, col).unwrap()));
    }
}

#[test]
fn monotonic_under_random_opens() {
    let mut rng = StdRng::seed_from_u64(5);
    let n = 10;
    let mut p = Percolation::new(n).unwrap();
    let mut seen = false;
    for _ in 0..500 {
        p.open(rng.gen_range(1..=n), rng.gen_range(1..=n)).unwrap();
        seen |= p.percolates();
        assert_eq!(p.percolates(), seen);
    }
}

#[test]
fn two_by_two_mean() {
    let s = PercolationStats::run(2, 10000, &mut StdRng::seed_from_u64(17)).unwrap();
    assert!(s.mean() > 0.4 && s.mean() < 1.0, "mean={}", s.mean());
    assert!(s.confidence_low() <= s.mean());
    assert!(s.mean() <= s.confidence_high());
}

#[test]
fn large_grid_threshold() {
    let s = PercolationStats::run_parallel(50, 200, &mut StdRng::seed_from_u64(9)).unwrap();
    assert!(s.mean() > 0.55 && s.mean() < 0.64, "mean={}", s.mean());
    assert!(s.confidence_high() - s.confidence_low() < 0.02);
}

#[test]
fn probability_around_threshold() {
    let mut rng = StdRng::seed_from_u64(3);
    let dense = estimate_probability(20, 0.2, 200, &mut rng).unwrap();
    let sparse = estimate_probability(20, 0.7, 200, &mut rng).unwrap();
    assert!(dense > 0.9, "dense={dense}");
    assert!(sparse < 0.1, "sparse={sparse}");
}

#[test]
fn errors() {
    assert_eq!(
        Percolation::new(0).err(),
        Some(Error::InvalidArgument { name: "n", value: 0 })
    );
    let mut p = Percolation::new(2).unwrap();
    assert_eq!(
        p.open(3, 1),
        Err(Error::OutOfRange { row: 3, col: 1, n: 2 })
    );
}
