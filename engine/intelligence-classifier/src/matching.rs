use data_model::PlayerId;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

pub const FUZZY_MATCH_CUTOFF: i64 = 60;

/// A case-folded name index for fuzzy resolution, built once per run from
/// the current player pool.
pub struct PlayerNameIndex {
    entries: Vec<(String, PlayerId)>,
    matcher: SkimMatcherV2,
}

impl PlayerNameIndex {
    pub fn build<'a>(names: impl IntoIterator<Item = (&'a str, PlayerId)>) -> Self {
        PlayerNameIndex {
            entries: names.into_iter().map(|(name, id)| (name.to_lowercase(), id)).collect(),
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Resolves `raw_name` to a player, with the match score that produced
    /// it. Exact case-folded matches score 100; fuzzy matches below
    /// [`FUZZY_MATCH_CUTOFF`] are rejected (`None`, `0.0`).
    pub fn resolve(&self, raw_name: &str) -> (Option<PlayerId>, f64) {
        let needle = raw_name.trim().to_lowercase();
        if needle.is_empty() {
            return (None, 0.0);
        }

        if let Some((_, id)) = self.entries.iter().find(|(name, _)| *name == needle) {
            return (Some(*id), 100.0);
        }

        let mut best: Option<(PlayerId, i64)> = None;
        for (name, id) in &self.entries {
            if let Some(score) = self.matcher.fuzzy_match(name, &needle) {
                if best.map_or(true, |(_, best_score)| score > best_score) {
                    best = Some((*id, score));
                }
            }
        }

        match best {
            Some((id, score)) if score >= FUZZY_MATCH_CUTOFF => (Some(id), score as f64),
            _ => (None, 0.0),
        }
    }
}
