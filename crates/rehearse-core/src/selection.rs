//! Question selection with an explicit random source.
//!
//! Selection rotates through questions a candidate has not seen yet and
//! only repeats seen ones once the unseen pool is exhausted. Shuffling goes
//! through a [`StdRng`], so a fixed seed reproduces a selection exactly.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::model::{Difficulty, Question, QuestionBank};

/// Which questions are eligible.
#[derive(Debug, Clone, Default)]
pub struct SelectionFilter {
    /// Only questions for this role (case-insensitive).
    pub role: Option<String>,
    pub difficulty: Option<Difficulty>,
    /// Ids already asked; picked only when nothing else is left.
    pub exclude_ids: HashSet<String>,
}

impl SelectionFilter {
    fn matches(&self, q: &Question) -> bool {
        let role_ok = self
            .role
            .as_ref()
            .map_or(true, |r| q.role.eq_ignore_ascii_case(r.trim()));
        let difficulty_ok = self.difficulty.map_or(true, |d| q.difficulty == d);
        role_ok && difficulty_ok
    }
}

/// Picks questions from a bank.
pub struct QuestionSelector {
    rng: StdRng,
}

impl QuestionSelector {
    /// Reproducible selector.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Pick up to `count` matching questions, unseen ones first.
    pub fn select<'a>(
        &mut self,
        bank: &'a QuestionBank,
        filter: &SelectionFilter,
        count: usize,
    ) -> Vec<&'a Question> {
        let (mut unseen, mut seen): (Vec<&Question>, Vec<&Question>) = bank
            .questions
            .iter()
            .filter(|q| filter.matches(q))
            .partition(|q| !filter.exclude_ids.contains(&q.id));

        unseen.shuffle(&mut self.rng);
        let mut picked: Vec<&Question> = unseen.into_iter().take(count).collect();

        if picked.len() < count && !seen.is_empty() {
            tracing::debug!(
                "only {} unseen question(s) available, repeating seen ones",
                picked.len()
            );
            seen.shuffle(&mut self.rng);
            let missing = count - picked.len();
            picked.extend(seen.into_iter().take(missing));
        }

        picked
    }
}
