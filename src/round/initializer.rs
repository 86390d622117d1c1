//! Round initialization: sample tokens, derive the target, shuffle the pool.

use rustc_hash::FxHashSet;
use tracing::{debug, instrument};

use crate::core::config::range_size;
use crate::core::{ConfigError, LevelConfig, RoundRng, RoundSettings, RoundState, Token};

/// Draw `count` distinct values uniformly from `[minimum, maximum]`.
///
/// Every subset of size `count` is equally likely. The returned order is
/// random as well.
pub fn sample_tokens(
    minimum: i64,
    maximum: i64,
    count: usize,
    rng: &mut RoundRng,
) -> Result<Vec<Token>, ConfigError> {
    if count == 0 {
        return Err(ConfigError::EmptyRound);
    }
    if minimum > maximum {
        return Err(ConfigError::InvertedRange { minimum, maximum });
    }
    let size = range_size(minimum, maximum);
    if count as u128 > size {
        return Err(ConfigError::RangeExhausted {
            minimum,
            maximum,
            requested: count,
        });
    }

    let offsets: Vec<u64> = match usize::try_from(size) {
        Ok(length) => rng
            .sample_indices(length, count)
            .into_iter()
            .map(|offset| offset as u64)
            .collect(),
        // Wider than the address space: at most 2^64 values, so the span fits u64.
        Err(_) => sample_offsets(u64::try_from(size - 1).unwrap_or(u64::MAX), count, rng),
    };
    let tokens = offsets
        .into_iter()
        .map(|offset| Token::new((i128::from(minimum) + i128::from(offset)) as i64))
        .collect();
    Ok(tokens)
}

/// Draw `count` distinct offsets from `0..=span` by rejection.
///
/// Only used for ranges too wide for index sampling, where `count` is tiny
/// next to `span` and repeats are rare. Requires `count <= span + 1`.
fn sample_offsets(span: u64, count: usize, rng: &mut RoundRng) -> Vec<u64> {
    let mut seen = FxHashSet::default();
    let mut offsets = Vec::with_capacity(count);
    while offsets.len() < count {
        let offset = rng.offset(span);
        if seen.insert(offset) {
            offsets.push(offset);
        }
    }
    offsets
}

/// Start a round with `token_count` tokens drawn from `[minimum, maximum]`.
///
/// Slots start empty, correctness false, attempts zero. The pool is shuffled
/// independently of the sampling.
#[instrument(level = "debug", skip(rng))]
pub fn initialize(
    minimum: i64,
    maximum: i64,
    token_count: usize,
    rng: &mut RoundRng,
) -> Result<RoundState, ConfigError> {
    let mut tokens = sample_tokens(minimum, maximum, token_count, rng)?;
    rng.shuffle(&mut tokens);
    let state = RoundState::new(tokens)?;
    debug!(target_sequence = ?state.target(), "round initialized");
    Ok(state)
}

/// Start a round for a catalog level.
pub fn initialize_level(
    level: &LevelConfig,
    settings: &RoundSettings,
    rng: &mut RoundRng,
) -> Result<RoundState, ConfigError> {
    level.validate()?;
    initialize(level.minimum, level.maximum, settings.token_count, rng)
}
