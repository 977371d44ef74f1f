use rand::Rng;

/// Shuffle `items` in place with Fisher-Yates. Every permutation is equally likely.
pub fn shuffle<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffle a copy of `items` and keep the first `n` (all of them if `n` is larger).
pub fn sample_without_replacement<T: Clone, R: Rng>(rng: &mut R, items: &[T], n: usize) -> Vec<T> {
    let mut pool = items.to_vec();
    shuffle(rng, &mut pool);
    pool.truncate(n.min(items.len()));
    pool
}
