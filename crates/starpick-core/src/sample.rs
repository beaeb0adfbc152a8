// SPDX-License-Identifier: Apache-2.0

//! Uniform random sampling without replacement.

use tracing::debug;

/// Draw up to `count` distinct candidates uniformly at random.
///
/// Returns `min(count, candidates.len())` elements in draw order. An empty
/// candidate list or a `count` of zero yields an empty result.
///
/// # Examples
///
/// ```
/// let items = ["a", "b", "c"];
/// let refs: Vec<&&str> = items.iter().collect();
/// let mut rng = fastrand::Rng::with_seed(7);
///
/// let picked = starpick_core::sample(&refs, 5, &mut rng);
/// assert_eq!(picked.len(), 3);
/// ```
pub fn sample<'a, T>(candidates: &[&'a T], count: usize, rng: &mut fastrand::Rng) -> Vec<&'a T> {
    let take = count.min(candidates.len());
    let mut indices: Vec<usize> = (0..candidates.len()).collect();

    // Partial Fisher-Yates: the first `take` slots end up uniformly drawn.
    for i in 0..take {
        let j = rng.usize(i..indices.len());
        indices.swap(i, j);
    }

    debug!("Sampled {} of {} candidates", take, candidates.len());
    indices[..take].iter().map(|&i| candidates[i]).collect()
}
