//! Scroll reveal: one-shot fade-in of elements as they enter the viewport.
//!
//! A container hands over its revealable elements when attached. Each frame
//! the page reports where an element sits relative to the visible area; the
//! first report that crosses the threshold marks it revealed for good.
//! Tearing the observer down releases every observation, after which
//! reports are ignored.

use std::collections::BTreeMap;

use crate::config::RevealConfig;
use crate::render::layout::Bounds;

/// Identifies a revealable element.
pub type RevealId = u32;

/// Entry transition of a revealable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    /// Slides up while fading in
    Up,
    /// Slides in from the left
    Left,
    /// Slides in from the right
    Right,
    /// Grows from 95% while fading in
    Scale,
}

/// Visual state of an element part-way through its transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub offset: (f32, f32),
    pub scale: f32,
}

const SLIDE_DISTANCE: f32 = 30.0;

impl RevealKind {
    /// Style at `progress` in [0, 1].
    pub fn style(self, progress: f32) -> RevealStyle {
        let p = ease_out(progress.clamp(0.0, 1.0));
        let rest = (1.0 - p) * SLIDE_DISTANCE;
        let (offset, scale) = match self {
            RevealKind::Up => ((0.0, rest), 1.0),
            RevealKind::Left => ((-rest, 0.0), 1.0),
            RevealKind::Right => ((rest, 0.0), 1.0),
            RevealKind::Scale => ((0.0, 0.0), 1.0 - 0.05 * (1.0 - p)),
        };
        RevealStyle {
            opacity: p,
            offset,
            scale,
        }
    }
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// An element tagged as revealable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTarget {
    pub id: RevealId,
    pub kind: RevealKind,
    /// Seconds between reveal and the start of the transition
    pub delay: f32,
}

impl RevealTarget {
    pub const fn new(id: RevealId, kind: RevealKind) -> Self {
        Self { id, kind, delay: 0.0 }
    }

    pub const fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }
}

/// Stagger of the n-th card in a grid.
pub fn transition_delay(index: usize) -> f32 {
    index as f32 * 0.1
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionOptions {
    /// Visible fraction of the element that counts as intersecting
    pub threshold: f32,
    /// Pixels removed from the bottom of the viewport
    pub bottom_margin: f32,
}

impl Default for IntersectionOptions {
    fn default() -> Self {
        IntersectionOptions::from(&RevealConfig::default())
    }
}

impl From<&RevealConfig> for IntersectionOptions {
    fn from(cfg: &RevealConfig) -> Self {
        Self {
            threshold: cfg.threshold,
            bottom_margin: cfg.bottom_margin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub id: RevealId,
    /// Visible fraction of the element's area
    pub ratio: f32,
    pub is_intersecting: bool,
}

/// Measure how much of `element` is inside `viewport` (after the margin).
pub fn intersection(id: RevealId, element: Bounds, viewport: Bounds, options: &IntersectionOptions) -> IntersectionEntry {
    let root = viewport.inset(0.0, 0.0, options.bottom_margin, 0.0);
    let overlap = element.intersection(&root);
    let area = element.area();
    let ratio = match overlap {
        Some(o) if area > 0.0 => (o.area() / area).clamp(0.0, 1.0),
        // A zero-area element counts as fully visible when it touches the root
        Some(_) => 1.0,
        None => 0.0,
    };
    IntersectionEntry {
        id,
        ratio,
        is_intersecting: overlap.is_some() && ratio >= options.threshold,
    }
}

#[derive(Debug, Clone, Copy)]
struct Observation {
    target: RevealTarget,
    /// Time of the first intersection
    revealed_at: Option<f64>,
}

/// Tracks reveal state for the elements of one container.
#[derive(Debug)]
pub struct RevealObserver {
    options: IntersectionOptions,
    transition_secs: f32,
    observations: BTreeMap<RevealId, Observation>,
}

impl RevealObserver {
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            options: IntersectionOptions::from(config),
            transition_secs: config.transition_secs,
            observations: BTreeMap::new(),
        }
    }

    pub fn options(&self) -> &IntersectionOptions {
        &self.options
    }

    /// Observe every target of `container`. A missing container is a no-op.
    /// Returns the number of new observations.
    pub fn attach(&mut self, container: Option<&[RevealTarget]>) -> usize {
        let Some(targets) = container else {
            log::debug!("Reveal container missing; nothing to observe");
            return 0;
        };
        let mut added = 0;
        for target in targets {
            if !self.observations.contains_key(&target.id) {
                self.observations.insert(
                    target.id,
                    Observation {
                        target: *target,
                        revealed_at: None,
                    },
                );
                added += 1;
            }
        }
        log::debug!("Observing {} reveal targets ({} new)", self.observations.len(), added);
        added
    }

    pub fn observed_count(&self) -> usize {
        self.observations.len()
    }

    /// Apply one intersection report. Returns `true` only on the report
    /// that first reveals the element.
    pub fn on_intersection(&mut self, entry: &IntersectionEntry, now: f64) -> bool {
        let Some(obs) = self.observations.get_mut(&entry.id) else {
            return false;
        };
        if obs.revealed_at.is_some() || !entry.is_intersecting {
            return false;
        }
        obs.revealed_at = Some(now);
        log::trace!("Revealed element {} at ratio {:.2}", entry.id, entry.ratio);
        true
    }

    /// Measure `element` against `viewport` and apply the result.
    pub fn check(&mut self, id: RevealId, element: Bounds, viewport: Bounds, now: f64) -> bool {
        let entry = intersection(id, element, viewport, &self.options);
        self.on_intersection(&entry, now)
    }

    pub fn is_revealed(&self, id: RevealId) -> bool {
        self.observations
            .get(&id)
            .is_some_and(|obs| obs.revealed_at.is_some())
    }

    /// Transition progress of `id` at `now`, in [0, 1].
    ///
    /// Elements that aren't observed are drawn fully visible.
    pub fn progress(&self, id: RevealId, now: f64) -> f32 {
        let Some(obs) = self.observations.get(&id) else {
            return 1.0;
        };
        match obs.revealed_at {
            None => 0.0,
            Some(at) => {
                let since = (now - at) as f32 - obs.target.delay;
                if self.transition_secs <= 0.0 {
                    return if since >= 0.0 { 1.0 } else { 0.0 };
                }
                (since / self.transition_secs).clamp(0.0, 1.0)
            }
        }
    }

    /// Style of `id` at `now`.
    pub fn style(&self, id: RevealId, now: f64) -> RevealStyle {
        let kind = self
            .observations
            .get(&id)
            .map_or(RevealKind::Up, |obs| obs.target.kind);
        kind.style(self.progress(id, now))
    }

    /// Whether any revealed element is still mid-transition.
    pub fn is_animating(&self, now: f64) -> bool {
        self.observations.iter().any(|(id, obs)| {
            obs.revealed_at.is_some() && self.progress(*id, now) < 1.0
        })
    }

    /// Release all observations.
    pub fn teardown(&mut self) {
        if !self.observations.is_empty() {
            log::debug!("Releasing {} reveal observations", self.observations.len());
            self.observations.clear();
        }
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Bounds = Bounds::new(0.0, 0.0, 1000.0, 800.0);

    fn observer_with(ids: &[RevealId]) -> RevealObserver {
        let targets: Vec<RevealTarget> = ids.iter().map(|&id| RevealTarget::new(id, RevealKind::Up)).collect();
        let mut observer = RevealObserver::new(&RevealConfig::default());
        observer.attach(Some(&targets));
        observer
    }

    fn entry(id: RevealId, is_intersecting: bool) -> IntersectionEntry {
        IntersectionEntry {
            id,
            ratio: if is_intersecting { 1.0 } else { 0.0 },
            is_intersecting,
        }
    }

    #[test]
    fn test_threshold_and_bottom_margin() {
        let opts = IntersectionOptions::default();
        // 100px tall element, top 20px inside the viewport but within the margin
        let e = intersection(1, Bounds::new(0.0, 780.0, 100.0, 100.0), VIEWPORT, &opts);
        assert!(!e.is_intersecting, "{:?}", e);

        // 15px above the margin line: 15% visible
        let e = intersection(1, Bounds::new(0.0, 735.0, 100.0, 100.0), VIEWPORT, &opts);
        assert!(e.is_intersecting, "{:?}", e);
        assert!((e.ratio - 0.15).abs() < 1e-4);

        // 5% visible: below threshold
        let e = intersection(1, Bounds::new(0.0, 745.0, 100.0, 100.0), VIEWPORT, &opts);
        assert!(!e.is_intersecting, "{:?}", e);
    }

    #[test]
    fn test_fully_outside() {
        let e = intersection(1, Bounds::new(0.0, 2000.0, 100.0, 100.0), VIEWPORT, &IntersectionOptions::default());
        assert_eq!(e.ratio, 0.0);
        assert!(!e.is_intersecting);
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let mut observer = observer_with(&[1]);
        assert!(!observer.is_revealed(1));
        assert!(!observer.on_intersection(&entry(1, false), 0.0));
        assert!(!observer.is_revealed(1));

        assert!(observer.on_intersection(&entry(1, true), 1.0));
        assert!(observer.is_revealed(1));

        // Leaving the viewport, or entering again, changes nothing
        assert!(!observer.on_intersection(&entry(1, false), 2.0));
        assert!(!observer.on_intersection(&entry(1, true), 3.0));
        assert!(observer.is_revealed(1));
    }

    #[test]
    fn test_missing_container_is_noop() {
        let mut observer = RevealObserver::new(&RevealConfig::default());
        assert_eq!(observer.attach(None), 0);
        assert_eq!(observer.observed_count(), 0);
    }

    #[test]
    fn test_unknown_ids_ignored() {
        let mut observer = observer_with(&[1, 2]);
        assert!(!observer.on_intersection(&entry(99, true), 0.0));
        assert!(!observer.is_revealed(99));
        assert_eq!(observer.progress(99, 0.0), 1.0);
    }

    #[test]
    fn test_attach_twice_does_not_duplicate() {
        let mut observer = observer_with(&[1, 2, 3]);
        let again = [RevealTarget::new(3, RevealKind::Left), RevealTarget::new(4, RevealKind::Right)];
        assert_eq!(observer.attach(Some(&again)), 1);
        assert_eq!(observer.observed_count(), 4);
    }

    #[test]
    fn test_teardown_releases_everything() {
        let mut observer = observer_with(&[1, 2, 3]);
        observer.on_intersection(&entry(1, true), 0.0);
        observer.teardown();
        assert_eq!(observer.observed_count(), 0);
        // Reports after teardown fire nothing
        assert!(!observer.on_intersection(&entry(2, true), 1.0));
        assert!(!observer.is_revealed(2));
    }

    #[test]
    fn test_progress_respects_delay() {
        let targets = [RevealTarget::new(7, RevealKind::Scale).with_delay(transition_delay(3))];
        let mut observer = RevealObserver::new(&RevealConfig::default());
        observer.attach(Some(&targets));
        assert_eq!(observer.progress(7, 0.0), 0.0);

        observer.check(7, Bounds::new(0.0, 0.0, 100.0, 100.0), VIEWPORT, 10.0);
        assert_eq!(observer.progress(7, 10.2), 0.0, "still inside the 0.3s delay");
        assert!(observer.is_animating(10.5));
        assert_eq!(observer.progress(7, 11.5), 1.0);
        assert!(!observer.is_animating(11.5));
    }

    #[test]
    fn test_styles_settle() {
        for kind in [RevealKind::Up, RevealKind::Left, RevealKind::Right, RevealKind::Scale] {
            let start = kind.style(0.0);
            let end = kind.style(1.0);
            assert_eq!(start.opacity, 0.0);
            assert_eq!(end, RevealStyle { opacity: 1.0, offset: (0.0, 0.0), scale: 1.0 });
        }
        assert!(RevealKind::Left.style(0.0).offset.0 < 0.0);
        assert!(RevealKind::Right.style(0.0).offset.0 > 0.0);
    }
}
