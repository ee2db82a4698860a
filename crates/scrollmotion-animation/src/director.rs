//! Visibility-driven phase resolution.

use std::time::Duration;

use crate::transition::{PropertySet, TransitionPhase, TransitionSpec, TransitionTiming};
use crate::visibility::VisibilityTrigger;

/// Start delay for the `index`-th child of a staggered group:
/// `index × interval`.
///
/// Computed declaratively so the visual layer can schedule children itself;
/// no timers run here.
pub fn stagger_delay(index: usize, interval: Duration) -> Duration {
    u32::try_from(index)
        .ok()
        .and_then(|index| interval.checked_mul(index))
        .unwrap_or(Duration::MAX)
}

/// Everything the visual layer needs to play one phase change for one child.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionFrame {
    pub phase: TransitionPhase,
    pub properties: PropertySet,
    pub timing: TransitionTiming,
}

/// Maps visibility reports onto transition phases for one region.
///
/// The director holds the region's [`TransitionSpec`] and nothing else that
/// ticks: feed it a visibility flag, it answers with the phase to apply.
/// Visible always resolves to [`TransitionPhase::Animate`]; hidden resolves
/// to [`TransitionPhase::Exit`] once the region has entered at least once.
/// With `trigger_once` the first entrance is the meaningful one — later
/// exits still resolve to `Exit` so the exit set applies cosmetically, and
/// the caller decides through the trigger's latch whether an entrance
/// replays. Hidden reports before any entrance keep the region `Initial`
/// instead of playing an exit it never entered from.
#[derive(Debug, Clone)]
pub struct AnimationDirector {
    spec: TransitionSpec,
    trigger_once: bool,
    phase: TransitionPhase,
    entered: bool,
}

impl AnimationDirector {
    pub fn new(spec: TransitionSpec) -> Self {
        Self {
            spec,
            trigger_once: false,
            phase: TransitionPhase::Initial,
            entered: false,
        }
    }

    pub fn with_trigger_once(mut self, trigger_once: bool) -> Self {
        self.trigger_once = trigger_once;
        self
    }

    pub fn spec(&self) -> &TransitionSpec {
        &self.spec
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_trigger_once(&self) -> bool {
        self.trigger_once
    }

    /// True once the region has resolved to `Animate` at least once.
    pub fn has_entered(&self) -> bool {
        self.entered
    }

    /// Pure transition rule, independent of any director instance:
    /// visible maps to `Animate`, hidden maps to `Exit`.
    pub fn resolve(visible: bool) -> TransitionPhase {
        if visible {
            TransitionPhase::Animate
        } else {
            TransitionPhase::Exit
        }
    }

    /// Records a visibility report and returns the phase to apply.
    pub fn on_visibility(&mut self, visible: bool) -> TransitionPhase {
        self.phase = match (visible, self.phase) {
            (true, _) => TransitionPhase::Animate,
            (false, TransitionPhase::Initial) => TransitionPhase::Initial,
            (false, _) => TransitionPhase::Exit,
        };
        if self.phase == TransitionPhase::Animate {
            self.entered = true;
        }
        self.phase
    }

    /// Convenience: reads the flag straight off a trigger.
    pub fn on_trigger(&mut self, trigger: &VisibilityTrigger) -> TransitionPhase {
        self.on_visibility(trigger.is_visible())
    }

    /// Snapshot for the current phase with the child's stagger delay folded
    /// into the timing.
    pub fn frame(&self, child_index: usize) -> TransitionFrame {
        let mut timing = self.spec.timing;
        timing.delay = timing
            .delay
            .checked_add(stagger_delay(child_index, self.spec.stagger))
            .unwrap_or(Duration::MAX);
        TransitionFrame {
            phase: self.phase,
            properties: self.spec.properties(self.phase).clone(),
            timing,
        }
    }
}
