//! Input patterns useful for testing and benchmarking sorting algorithms.
//! Currently limited to i32 values.

use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;

use rand::prelude::*;

use zipf::ZipfDistribution;

// --- Public ---

pub fn random(size: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(size)
}

pub fn random_uniform<R>(size: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_rng();
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(size: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    let mut rng = new_rng();
    let dist = ZipfDistribution::new(size, exponent).unwrap();

    (0..size).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn all_equal(size: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..size).map(|_| 66).collect()
}

pub fn ascending(size: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i32).collect()
}

pub fn descending(size: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..size as i32).rev().collect()
}

pub fn saw_mixed(size: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if size == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(size);
    let chunks_size = size / saw_count.max(1);
    let saw_directions = random_uniform((size / chunks_size) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunks_size).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(size: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(size);
    let (first_half, second_half) = vals.split_at_mut(size / 2);

    first_half.sort_unstable();
    second_half.sort_unstable_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Makes every subsequent call to a random derived pattern yield new values.
///
/// By default the seed is picked once per process, so `random(4)` yields the
/// same values for every call. Benchmarks should disable that.
pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

/// The seed all patterns of this process derive from.
///
/// Picked at random once per process, or taken from the `OVERRIDE_SEED` env
/// var to reproduce a failure.
pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(initial_seed)
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

fn initial_seed() -> u64 {
    if let Ok(override_seed) = env::var("OVERRIDE_SEED") {
        u64::from_str(&override_seed).expect("OVERRIDE_SEED must be a valid u64")
    } else {
        thread_rng().gen()
    }
}

fn new_rng() -> StdRng {
    rand::SeedableRng::seed_from_u64(random_init_seed())
}

fn random_vec(size: usize) -> Vec<i32> {
    let mut rng = new_rng();

    (0..size).map(|_| rng.gen::<i32>()).collect()
}
