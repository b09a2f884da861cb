use crate::card::CardRef;
use crate::game::GameError;
use crate::rng::{trial_seed, GameRng};
use crate::simulation::engine::{run_trial, TrialConfig, TrialResult};
use crate::simulation::mulligan::{resolve_mulligans, MulliganRule, STARTING_HAND_SIZE};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Smallest hand size studied by [`hand_size_table`]
pub const MIN_HAND_SIZE: usize = 3;

/// Aggregate of a batch of trials
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub config: TrialConfig,
    pub base_seed: u64,
    pub trials: usize,
    /// Trials that assembled the combo before the cap
    pub assembled: usize,
    pub capped: usize,
    /// Trials stopped by an error; not part of any statistic
    pub aborted: usize,
    pub mean_turns: Option<f64>,
    pub median_turns: Option<f64>,
    pub average_mulligans: f64,
    /// Assembly turn -> number of trials
    pub distribution: BTreeMap<u32, usize>,
}

impl BatchSummary {
    /// Fraction of completed trials that assembled the combo by `turn`
    pub fn assembled_by(&self, turn: u32) -> f64 {
        let completed = self.assembled + self.capped;
        if completed == 0 {
            return 0.0;
        }
        let hits: usize = self.distribution.range(..=turn).map(|(_, n)| n).sum();
        hits as f64 / completed as f64
    }
}

fn median(sorted: &[u32]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    if n % 2 == 1 {
        Some(sorted[n / 2] as f64)
    } else {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) as f64 / 2.0)
    }
}

/// Fold trial results into a summary; errors only count as aborted
pub fn summarize(
    config: TrialConfig,
    base_seed: u64,
    results: &[Result<TrialResult, GameError>],
) -> BatchSummary {
    let completed: Vec<&TrialResult> = results.iter().filter_map(|r| r.as_ref().ok()).collect();

    let mut turns: Vec<u32> = completed.iter().filter_map(|r| r.turns).collect();
    turns.sort_unstable();

    let mut distribution = BTreeMap::new();
    for turn in &turns {
        *distribution.entry(*turn).or_insert(0) += 1;
    }

    let mean_turns = if turns.is_empty() {
        None
    } else {
        Some(turns.iter().map(|&t| t as f64).sum::<f64>() / turns.len() as f64)
    };

    let average_mulligans = if completed.is_empty() {
        0.0
    } else {
        completed.iter().map(|r| r.mulligans as f64).sum::<f64>() / completed.len() as f64
    };

    BatchSummary {
        config,
        base_seed,
        trials: results.len(),
        assembled: turns.len(),
        capped: completed.len() - turns.len(),
        aborted: results.len() - completed.len(),
        mean_turns,
        median_turns: median(&turns),
        average_mulligans,
        distribution,
    }
}

fn progress_bar(len: usize, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len} ({eta})") {
        bar.set_style(style.progress_chars("=> "));
    }
    bar
}

/// Run `games` trials in parallel. Trial `i` is seeded with `base_seed + i`,
/// so the summary does not depend on scheduling.
pub fn run_batch(
    deck: &[CardRef],
    config: &TrialConfig,
    games: usize,
    base_seed: u64,
    show_progress: bool,
) -> BatchSummary {
    let bar = progress_bar(games, show_progress);
    bar.set_message(match config.hand_size {
        Some(size) => format!("{} cards", size),
        None => format!("{:?}", config.rule),
    });

    let results: Vec<_> = (0..games)
        .into_par_iter()
        .map(|i| {
            let result = run_trial(deck, config, trial_seed(base_seed, i), false);
            bar.inc(1);
            result
        })
        .collect();
    bar.finish_and_clear();

    summarize(*config, base_seed, &results)
}

/// One batch per fixed hand size, from 7 cards down to 3
pub fn hand_size_table(
    deck: &[CardRef],
    config: &TrialConfig,
    games: usize,
    base_seed: u64,
    show_progress: bool,
) -> Vec<BatchSummary> {
    (MIN_HAND_SIZE..=STARTING_HAND_SIZE)
        .rev()
        .map(|size| {
            let sized = TrialConfig {
                hand_size: Some(size),
                ..*config
            };
            run_batch(deck, &sized, games, base_seed, show_progress)
        })
        .collect()
}

/// Fraction of mulligan sequences that end on a hand worth keeping
pub fn keep_rate(deck: &[CardRef], rule: MulliganRule, games: usize, base_seed: u64) -> Result<f64, GameError> {
    if games == 0 {
        return Ok(0.0);
    }

    let kept = (0..games)
        .into_par_iter()
        .map(|i| {
            let mut rng = GameRng::for_trial(base_seed, i);
            resolve_mulligans(deck, rule, &mut rng).map(|hand| hand.kept)
        })
        .collect::<Result<Vec<bool>, GameError>>()?;

    Ok(kept.iter().filter(|&&k| k).count() as f64 / games as f64)
}
