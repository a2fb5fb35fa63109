use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha3::{Digest, Sha3_256};
use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

/// Scramble the characters of `input` with a generator seeded from `seed`
///
/// Same input and seed always give the same output. The generator lives
/// only for this call, so interleaved callers never share random state.
/// Characters are extended grapheme clusters, so combining sequences and
/// emoji move as a unit.
pub fn scramble(input: &str, seed: i64) -> String {
    let mut rng = StdRng::from_seed(compute_seed(seed));
    scramble_with(input, &mut rng)
}

/// Scramble `input` by repeatedly drawing a random remaining character
pub fn scramble_with<R: Rng + ?Sized>(input: &str, rng: &mut R) -> String {
    let mut pool: Vec<&str> = input.graphemes(true).collect();
    let mut output = String::with_capacity(input.len());
    trace!(graphemes = pool.len(), "scrambling");

    while !pool.is_empty() {
        let remaining = pool.len();
        let index = if remaining == 1 {
            0
        } else {
            rng.gen_range(0..remaining)
        };
        output.push_str(pool.remove(index));
    }

    output
}

/// Expand a 64-bit seed into a 32-byte generator seed
fn compute_seed(seed: i64) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    hasher.update(seed.to_le_bytes());
    hasher.finalize().into()
}
