use rand::Rng;

/// Return a uniformly shuffled copy of `items`, leaving the input untouched
pub fn shuffle_array<T: Clone>(items: &[T]) -> Vec<T> {
    let mut rng = rand::rng();
    shuffle_array_with(items, &mut rng)
}

/// Fisher-Yates shuffle of a copy of `items` using the given random source
pub fn shuffle_array_with<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();

    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }

    shuffled
}
