//! Event types and sinks for observing field generation.
//!
//! This module defines [`GenerationEvent`] and a set of sinks to emit, collect, or
//! forward events while running [`crate::field::AsteroidField::generate_with_events`].
use crate::sampling::Distribution;
use crate::vector::Vector3;

/// Describes events emitted while a field is generated.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum GenerationEvent {
    /// Emitted before the strategy runs.
    GenerationStarted {
        /// Name of the strategy producing positions.
        strategy: &'static str,
        /// Distribution selected by the configuration.
        distribution: Distribution,
        /// Requested asteroid count.
        amount: usize,
    },

    /// Emitted for every asteroid added to the field.
    AsteroidCreated {
        /// Entity id assigned by the factory.
        id: u64,
        /// Rounded position.
        position: Vector3,
        /// Voxel map the asteroid references.
        voxel_map: String,
    },

    /// Emitted once the field holds its asteroids.
    GenerationFinished {
        /// Number of asteroids in the field.
        count: usize,
    },

    /// Emitted when generation was requested for an already generated field.
    CachedResultReused {
        /// Number of asteroids in the cached field.
        count: usize,
    },

    /// Non-fatal warning raised during generation.
    Warning {
        /// Context string (e.g. strategy name).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// Discriminant of [`GenerationEvent`] used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationEventKind {
    GenerationStarted,
    AsteroidCreated,
    GenerationFinished,
    CachedResultReused,
    Warning,
}

impl GenerationEvent {
    pub fn kind(&self) -> GenerationEventKind {
        match self {
            GenerationEvent::GenerationStarted { .. } => GenerationEventKind::GenerationStarted,
            GenerationEvent::AsteroidCreated { .. } => GenerationEventKind::AsteroidCreated,
            GenerationEvent::GenerationFinished { .. } => GenerationEventKind::GenerationFinished,
            GenerationEvent::CachedResultReused { .. } => GenerationEventKind::CachedResultReused,
            GenerationEvent::Warning { .. } => GenerationEventKind::Warning,
        }
    }
}

/// A generic event sink that accepts [`GenerationEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: GenerationEvent);

    /// Lets callers skip building events nobody listens to.
    fn wants(&self, _kind: GenerationEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: GenerationEvent) {}

    #[inline]
    fn wants(&self, _kind: GenerationEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(GenerationEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(GenerationEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(GenerationEvent),
{
    #[inline]
    fn send(&mut self, event: GenerationEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<GenerationEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<GenerationEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[GenerationEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of collected events of the given kind.
    pub fn count(&self, kind: GenerationEventKind) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: GenerationEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning(context: &str) -> GenerationEvent {
        GenerationEvent::Warning {
            context: context.into(),
            message: "msg".into(),
        }
    }

    #[test]
    fn vec_sink_collects_and_counts_events() {
        let mut sink = VecSink::new();
        assert!(sink.is_empty());
        sink.send(warning("a"));
        sink.send(GenerationEvent::GenerationFinished { count: 3 });
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.count(GenerationEventKind::Warning), 1);
        assert_eq!(sink.count(GenerationEventKind::AsteroidCreated), 0);
        assert!(matches!(
            sink.as_slice()[1],
            GenerationEvent::GenerationFinished { count: 3 }
        ));
    }

    #[test]
    fn fn_sink_invokes_callback() {
        let mut count = 0;
        let mut sink = FnSink::new(|_event| {
            count += 1;
        });
        sink.send(warning("ctx"));
        assert_eq!(count, 1);
    }

    #[test]
    fn unit_sink_wants_nothing() {
        assert!(!().wants(GenerationEventKind::Warning));
        assert!(VecSink::new().wants(GenerationEventKind::Warning));
    }
}
