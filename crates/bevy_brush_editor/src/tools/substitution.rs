//! Random substitution among similar templates while dragging

use bevy_brush_core::{ActorTemplate, SimilarityGroups, TemplateCatalog};
use std::sync::Arc;

/// Source of uniform random choices
pub trait RandomSource {
    /// Pick an index in `0..n`. `n` is never zero.
    fn pick(&mut self, n: usize) -> usize;
}

/// `fastrand`-backed random source, seeded once at creation
pub struct FastRandSource {
    rng: fastrand::Rng,
}

impl FastRandSource {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for FastRandSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for FastRandSource {
    fn pick(&mut self, n: usize) -> usize {
        self.rng.usize(..n)
    }
}

/// Picks a visually similar replacement for the held template.
///
/// Candidates are resolved once: every paintable catalog template named in
/// the first similarity group that lists the held template, except the held
/// template itself.
pub struct SubstitutionPicker {
    candidates: Vec<Arc<ActorTemplate>>,
    rng: Box<dyn RandomSource + Send + Sync>,
}

impl SubstitutionPicker {
    pub fn new(
        held: &ActorTemplate,
        groups: &SimilarityGroups,
        catalog: &dyn TemplateCatalog,
        rng: Box<dyn RandomSource + Send + Sync>,
    ) -> Self {
        let candidates = groups
            .group_containing(&held.name)
            .map(|group| {
                catalog
                    .paintable()
                    .into_iter()
                    .filter(|t| t.name != held.name && group.contains(&t.name))
                    .collect()
            })
            .unwrap_or_default();

        Self { candidates, rng }
    }

    /// Templates a drag may substitute
    pub fn candidates(&self) -> &[Arc<ActorTemplate>] {
        &self.candidates
    }

    /// A random substitute, or `None` to keep the held template
    pub fn pick(&mut self) -> Option<Arc<ActorTemplate>> {
        if self.candidates.is_empty() {
            return None;
        }
        let index = self.rng.pick(self.candidates.len());
        self.candidates.get(index).cloned()
    }
}

impl std::fmt::Debug for SubstitutionPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.candidates.iter().map(|t| t.name.as_str()).collect();
        f.debug_struct("SubstitutionPicker")
            .field("candidates", &names)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_brush_core::TemplateRules;

    fn groups(ids: &[&str]) -> SimilarityGroups {
        SimilarityGroups::new(vec![ids.iter().map(|s| s.to_string()).collect()])
    }

    fn rules(names: &[&str]) -> TemplateRules {
        TemplateRules::from_templates(names.iter().map(|n| ActorTemplate::new(*n))).unwrap()
    }

    #[test]
    fn test_single_candidate_is_deterministic() {
        let catalog = rules(&["t01", "t02", "fact"]);
        let held = catalog.template("t01").unwrap();
        let mut picker = SubstitutionPicker::new(
            &held,
            &groups(&["t01", "t02"]),
            &catalog,
            Box::new(FastRandSource::new()),
        );

        for _ in 0..20 {
            assert_eq!(picker.pick().unwrap().name, "t02");
        }
    }

    #[test]
    fn test_never_leaves_group_or_returns_held() {
        let catalog = rules(&["t01", "t02", "t05", "t06", "fact", "e1"]);
        let held = catalog.template("t05").unwrap();
        let group = groups(&["t01", "t02", "t05", "t06"]);
        let mut picker =
            SubstitutionPicker::new(&held, &group, &catalog, Box::new(FastRandSource::with_seed(7)));

        for _ in 0..200 {
            let name = picker.pick().unwrap().name.clone();
            assert_ne!(name, "t05");
            assert!(["t01", "t02", "t06"].contains(&name.as_str()));
        }
    }

    #[test]
    fn test_hidden_and_missing_members_are_skipped() {
        let catalog = rules(&["t01", "^t02"]);
        let held = catalog.template("t01").unwrap();
        let mut picker = SubstitutionPicker::new(
            &held,
            &groups(&["t01", "^t02", "t03"]),
            &catalog,
            Box::new(FastRandSource::new()),
        );

        assert!(picker.candidates().is_empty());
        assert!(picker.pick().is_none());
    }

    #[test]
    fn test_no_group_keeps_original() {
        let catalog = rules(&["fact", "t01"]);
        let held = catalog.template("fact").unwrap();
        let mut picker = SubstitutionPicker::new(
            &held,
            &SimilarityGroups::default(),
            &catalog,
            Box::new(FastRandSource::new()),
        );
        assert!(picker.pick().is_none());
    }

    struct Always(usize);

    impl RandomSource for Always {
        fn pick(&mut self, n: usize) -> usize {
            self.0 % n
        }
    }

    #[test]
    fn test_injected_source_drives_choice() {
        let catalog = rules(&["t01", "t02", "t05"]);
        let held = catalog.template("t01").unwrap();
        let group = groups(&["t01", "t02", "t05"]);

        let mut first = SubstitutionPicker::new(&held, &group, &catalog, Box::new(Always(0)));
        assert_eq!(first.pick().unwrap().name, "t02");

        let mut second = SubstitutionPicker::new(&held, &group, &catalog, Box::new(Always(1)));
        assert_eq!(second.pick().unwrap().name, "t05");
    }
}
