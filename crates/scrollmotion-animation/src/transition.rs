//! Declarative transition descriptions.
//!
//! A region declares what its named states look like ({initial, animate,
//! exit}, each a set of visual property targets) plus the timing to move
//! between them. Specs are plain data: defined once per region, never
//! mutated at runtime, and handed to the visual layer which performs the
//! actual interpolation.

use std::time::Duration;

use smallvec::SmallVec;

use crate::easing::Easing;

/// Visual properties a transition may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualProperty {
    /// 0.0 transparent .. 1.0 opaque.
    Opacity,
    /// Horizontal offset in pixels.
    TranslateX,
    /// Vertical offset in pixels; positive moves down.
    TranslateY,
    /// Uniform scale factor, 1.0 = natural size.
    Scale,
    /// Rotation in degrees.
    Rotate,
}

impl VisualProperty {
    pub fn as_str(self) -> &'static str {
        match self {
            VisualProperty::Opacity => "opacity",
            VisualProperty::TranslateX => "translate-x",
            VisualProperty::TranslateY => "translate-y",
            VisualProperty::Scale => "scale",
            VisualProperty::Rotate => "rotate",
        }
    }
}

/// Property target values for one named state.
///
/// Stored inline; states touch a handful of properties at most.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertySet {
    values: SmallVec<[(VisualProperty, f32); 4]>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `property` to `value`, replacing an earlier target for the same
    /// property.
    pub fn set(mut self, property: VisualProperty, value: f32) -> Self {
        if let Some(slot) = self.values.iter_mut().find(|(p, _)| *p == property) {
            slot.1 = value;
        } else {
            self.values.push((property, value));
        }
        self
    }

    pub fn opacity(self, value: f32) -> Self {
        self.set(VisualProperty::Opacity, value)
    }

    pub fn translate_x(self, value: f32) -> Self {
        self.set(VisualProperty::TranslateX, value)
    }

    pub fn translate_y(self, value: f32) -> Self {
        self.set(VisualProperty::TranslateY, value)
    }

    pub fn scale(self, value: f32) -> Self {
        self.set(VisualProperty::Scale, value)
    }

    pub fn rotate(self, value: f32) -> Self {
        self.set(VisualProperty::Rotate, value)
    }

    pub fn get(&self, property: VisualProperty) -> Option<f32> {
        self.values
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| *v)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VisualProperty, f32)> + '_ {
        self.values.iter().copied()
    }
}

/// The three named states a region moves between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    /// Before any visibility signal has fired.
    #[default]
    Initial,
    /// Entering or entered: the animate set applies.
    Animate,
    /// Exiting or exited: the exit set applies.
    Exit,
}

impl TransitionPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            TransitionPhase::Initial => "initial",
            TransitionPhase::Animate => "animate",
            TransitionPhase::Exit => "exit",
        }
    }
}

/// Duration, start delay, and curve for a phase change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTiming {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl TransitionTiming {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            easing: Easing::default(),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self::new(Duration::from_millis(300))
    }
}

/// A region's full transition description.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransitionSpec {
    pub initial: PropertySet,
    pub animate: PropertySet,
    pub exit: PropertySet,
    pub timing: TransitionTiming,
    /// Extra start delay applied per child: child index times this interval.
    /// `Duration::ZERO` means children start together.
    pub stagger: Duration,
}

impl TransitionSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial(mut self, set: PropertySet) -> Self {
        self.initial = set;
        self
    }

    pub fn with_animate(mut self, set: PropertySet) -> Self {
        self.animate = set;
        self
    }

    pub fn with_exit(mut self, set: PropertySet) -> Self {
        self.exit = set;
        self
    }

    pub fn with_timing(mut self, timing: TransitionTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_stagger(mut self, interval: Duration) -> Self {
        self.stagger = interval;
        self
    }

    /// Property set for `phase`.
    pub fn properties(&self, phase: TransitionPhase) -> &PropertySet {
        match phase {
            TransitionPhase::Initial => &self.initial,
            TransitionPhase::Animate => &self.animate,
            TransitionPhase::Exit => &self.exit,
        }
    }

    /// Fade plus upward rise: hidden `rise_px` below its resting position,
    /// settling into place on entrance. The exit state mirrors the initial
    /// one so a region slides back out the way it came in.
    pub fn slide_in_up(rise_px: f32, duration: Duration) -> Self {
        let hidden = PropertySet::new().opacity(0.0).translate_y(rise_px);
        Self::new()
            .with_initial(hidden.clone())
            .with_animate(PropertySet::new().opacity(1.0).translate_y(0.0))
            .with_exit(hidden)
            .with_timing(TransitionTiming::new(duration).with_easing(Easing::EaseOut))
    }

    /// Pure opacity fade.
    pub fn fade(duration: Duration) -> Self {
        Self::new()
            .with_initial(PropertySet::new().opacity(0.0))
            .with_animate(PropertySet::new().opacity(1.0))
            .with_exit(PropertySet::new().opacity(0.0))
            .with_timing(TransitionTiming::new(duration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_existing_property_targets() {
        let set = PropertySet::new().opacity(0.0).opacity(0.8);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(VisualProperty::Opacity), Some(0.8));
    }

    #[test]
    fn properties_selects_the_named_state() {
        let spec = TransitionSpec::slide_in_up(30.0, Duration::from_millis(800));
        assert_eq!(
            spec.properties(TransitionPhase::Initial)
                .get(VisualProperty::TranslateY),
            Some(30.0)
        );
        assert_eq!(
            spec.properties(TransitionPhase::Animate)
                .get(VisualProperty::Opacity),
            Some(1.0)
        );
        assert_eq!(
            spec.properties(TransitionPhase::Exit)
                .get(VisualProperty::Opacity),
            Some(0.0)
        );
    }

    #[test]
    fn slide_in_up_settles_at_rest() {
        let spec = TransitionSpec::slide_in_up(30.0, Duration::from_millis(800));
        assert_eq!(spec.animate.get(VisualProperty::TranslateY), Some(0.0));
        assert_eq!(spec.timing.easing, Easing::EaseOut);
        assert_eq!(spec.timing.duration, Duration::from_millis(800));
    }

    #[test]
    fn specs_compare_and_clone_as_plain_data() {
        let spec = TransitionSpec::fade(Duration::from_millis(200)).with_stagger(Duration::from_millis(80));
        let copy = spec.clone();
        assert_eq!(spec, copy);
        assert_eq!(copy.stagger, Duration::from_millis(80));
    }
}
