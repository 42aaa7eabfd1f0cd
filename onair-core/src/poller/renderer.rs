//! Poller/renderer implementation
//!
//! The poller owns the input, the display surface and the only runtime
//! state of the sign. It never sleeps itself: callers pass in the current
//! monotonic time and [`PollerRenderer::tick`] says how long to wait.

use crate::scene::SceneSet;
use crate::state::DisplayState;
use crate::traits::{RenderError, SceneSurface, SignalSource, TransientReadError};

/// Result of one input poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollOutcome {
    /// Input read succeeded
    Read {
        /// Logical input level
        level: bool,
        /// State now on display
        state: DisplayState,
        /// Whether the scene was replaced by this poll
        rendered: bool,
    },
    /// Input read failed; nothing changed, next tick polls again immediately
    ReadFailed(TransientReadError),
    /// Input read succeeded but the new scene could not be shown
    RenderFailed {
        /// Logical input level
        level: bool,
        /// Surface error
        error: RenderError,
    },
}

/// What the poll loop should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tick {
    /// Too early; wait this many milliseconds and tick again
    Wait(u64),
    /// A poll was performed
    Polled(PollOutcome),
}

/// Polls the input signal and keeps the surface showing the matching scene
pub struct PollerRenderer<I, S> {
    input: I,
    surface: S,
    scenes: SceneSet,
    interval_ms: u64,
    /// State currently on display (None until the first render)
    state: Option<DisplayState>,
    /// Time of the last successful read
    last_check_ms: Option<u64>,
    render_count: u32,
}

impl<I: SignalSource, S: SceneSurface> PollerRenderer<I, S> {
    /// Create a poller
    ///
    /// Nothing is read or drawn until [`start`](Self::start).
    pub fn new(input: I, surface: S, scenes: SceneSet, interval_ms: u64) -> Self {
        Self {
            input,
            surface,
            scenes,
            interval_ms,
            state: None,
            last_check_ms: None,
            render_count: 0,
        }
    }

    /// Read the input once and show the initial scene
    ///
    /// If the read fails the input is assumed to sit at its pulled,
    /// inactive level and the off scene is shown. No check time is
    /// recorded, so the first [`tick`](Self::tick) polls straight away.
    pub fn start(&mut self) -> PollOutcome {
        match self.input.read() {
            Ok(level) => self.apply(level),
            Err(e) => match self.render_scene(DisplayState::Off) {
                Ok(()) => PollOutcome::ReadFailed(e),
                Err(error) => PollOutcome::RenderFailed {
                    level: false,
                    error,
                },
            },
        }
    }

    /// Run one loop iteration at monotonic time `now_ms`
    pub fn tick(&mut self, now_ms: u64) -> Tick {
        match self.time_until_due(now_ms) {
            Some(wait_ms) => Tick::Wait(wait_ms),
            None => Tick::Polled(self.poll(now_ms)),
        }
    }

    /// Milliseconds left before the next poll is due, or None if due now
    pub fn time_until_due(&self, now_ms: u64) -> Option<u64> {
        let last = self.last_check_ms?;
        let due = last.saturating_add(self.interval_ms);
        if now_ms < due {
            Some(due - now_ms)
        } else {
            None
        }
    }

    /// Read the input and re-render if the state changed
    ///
    /// Only a successful read records the check time; a failed read
    /// leaves the poller due so the retry is not throttled.
    pub fn poll(&mut self, now_ms: u64) -> PollOutcome {
        match self.input.read() {
            Ok(level) => {
                self.last_check_ms = Some(now_ms);
                self.apply(level)
            }
            Err(e) => PollOutcome::ReadFailed(e),
        }
    }

    /// Show the scene for `state`
    ///
    /// Always draws the whole scene, so calling it again with the same
    /// state leaves the display unchanged. The displayed state is only
    /// updated once the surface accepted the scene.
    pub fn render_scene(&mut self, state: DisplayState) -> Result<(), RenderError> {
        self.surface.render(self.scenes.for_state(state))?;
        self.state = Some(state);
        self.render_count = self.render_count.wrapping_add(1);
        Ok(())
    }

    fn apply(&mut self, level: bool) -> PollOutcome {
        let state = DisplayState::from(level);

        if self.state == Some(state) {
            return PollOutcome::Read {
                level,
                state,
                rendered: false,
            };
        }

        match self.render_scene(state) {
            Ok(()) => PollOutcome::Read {
                level,
                state,
                rendered: true,
            },
            Err(error) => PollOutcome::RenderFailed { level, error },
        }
    }

    /// State currently on display
    pub fn state(&self) -> Option<DisplayState> {
        self.state
    }

    /// Time of the last successful read
    pub fn last_check_ms(&self) -> Option<u64> {
        self.last_check_ms
    }

    /// Number of scenes drawn since creation
    pub fn render_count(&self) -> u32 {
        self.render_count
    }

    /// Minimum time between successful reads
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Borrow the display surface
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{FrameStyle, PaletteColor, Scene};
    use proptest::prelude::*;

    const INTERVAL: u64 = 1000;

    /// Input that replays a fixed script, then repeats its last entry
    struct ScriptedInput {
        reads: Vec<Result<bool, TransientReadError>>,
        next: usize,
    }

    impl ScriptedInput {
        fn new(reads: &[Result<bool, TransientReadError>]) -> Self {
            Self {
                reads: reads.to_vec(),
                next: 0,
            }
        }
    }

    impl SignalSource for ScriptedInput {
        fn read(&mut self) -> Result<bool, TransientReadError> {
            let idx = self.next.min(self.reads.len() - 1);
            self.next += 1;
            self.reads[idx]
        }
    }

    /// Surface that remembers what it was asked to show
    #[derive(Default)]
    struct RecordingSurface {
        renders: u32,
        shown: Option<Scene>,
        fail: bool,
    }

    impl SceneSurface for RecordingSurface {
        fn render(&mut self, scene: &Scene) -> Result<(), RenderError> {
            if self.fail {
                return Err(RenderError::Surface);
            }
            self.renders += 1;
            self.shown = Some(scene.clone());
            Ok(())
        }
    }

    fn poller(
        reads: &[Result<bool, TransientReadError>],
    ) -> PollerRenderer<ScriptedInput, RecordingSurface> {
        PollerRenderer::new(
            ScriptedInput::new(reads),
            RecordingSurface::default(),
            SceneSet::default(),
            INTERVAL,
        )
    }

    fn shown_state(p: &PollerRenderer<ScriptedInput, RecordingSurface>) -> DisplayState {
        p.surface().shown.as_ref().map(|s| s.state).unwrap()
    }

    #[test]
    fn test_startup_off_shows_branding() {
        let mut p = poller(&[Ok(false)]);
        let outcome = p.start();

        assert_eq!(
            outcome,
            PollOutcome::Read {
                level: false,
                state: DisplayState::Off,
                rendered: true
            }
        );
        let shown = p.surface().shown.as_ref().unwrap();
        assert_eq!(*shown, Scene::off());
        assert_eq!(shown.lines[0].text.as_str(), "Shy");
        assert_eq!(shown.wing_color, PaletteColor::Black);
    }

    #[test]
    fn test_startup_on_shows_on_air() {
        let mut p = poller(&[Ok(true)]);
        p.start();

        let shown = p.surface().shown.as_ref().unwrap();
        assert_eq!(shown.state, DisplayState::On);
        assert_eq!(shown.lines[0].text.as_str(), "ON");
        assert_eq!(shown.lines[1].text.as_str(), "AIR");
        assert_eq!(shown.wing_color, PaletteColor::Red);
        assert_eq!(shown.frame, FrameStyle::Closed);
        assert_eq!(p.state(), Some(DisplayState::On));
    }

    #[test]
    fn test_repeated_on_renders_once() {
        let mut p = poller(&[Ok(true), Ok(true), Ok(true)]);
        p.start();
        assert!(matches!(p.tick(0), Tick::Polled(_)));
        assert!(matches!(p.tick(INTERVAL), Tick::Polled(_)));

        assert_eq!(p.render_count(), 1);
        assert_eq!(p.surface().renders, 1);
        assert_eq!(shown_state(&p), DisplayState::On);
    }

    #[test]
    fn test_error_between_changes() {
        let mut p = poller(&[Ok(true), Err(TransientReadError::Pin), Ok(false)]);
        p.start();
        assert_eq!(p.render_count(), 1);

        let tick = p.tick(0);
        assert_eq!(
            tick,
            Tick::Polled(PollOutcome::ReadFailed(TransientReadError::Pin))
        );
        assert_eq!(p.render_count(), 1);
        assert_eq!(p.state(), Some(DisplayState::On));

        // Retry is immediate, not throttled
        match p.tick(1) {
            Tick::Polled(PollOutcome::Read { level, rendered, .. }) => {
                assert!(!level);
                assert!(rendered);
            }
            other => panic!("unexpected tick: {:?}", other),
        }
        assert_eq!(p.render_count(), 2);
        assert_eq!(shown_state(&p), DisplayState::Off);
    }

    #[test]
    fn test_already_off_renders_once() {
        let mut p = poller(&[Ok(false), Ok(false)]);
        p.start();
        p.tick(0);

        assert_eq!(p.render_count(), 1);
        assert_eq!(p.state(), Some(DisplayState::Off));
    }

    #[test]
    fn test_first_tick_does_not_wait() {
        let mut p = poller(&[Ok(false)]);
        p.start();
        assert_eq!(p.last_check_ms(), None);
        assert!(matches!(p.tick(5), Tick::Polled(_)));
        assert_eq!(p.last_check_ms(), Some(5));
    }

    #[test]
    fn test_interval_gates_successful_reads() {
        let mut p = poller(&[Ok(false)]);
        assert_eq!(p.interval_ms(), INTERVAL);
        p.start();
        p.tick(100);

        assert_eq!(p.tick(100), Tick::Wait(INTERVAL));
        assert_eq!(p.tick(600), Tick::Wait(500));
        assert_eq!(p.tick(1099), Tick::Wait(1));
        assert!(matches!(p.tick(1100), Tick::Polled(_)));
        assert_eq!(p.last_check_ms(), Some(1100));
    }

    #[test]
    fn test_failed_read_keeps_last_check() {
        let mut p = poller(&[
            Ok(true),
            Ok(true),
            Err(TransientReadError::Unsettled),
            Ok(true),
        ]);
        p.start();
        p.tick(0);
        assert_eq!(p.last_check_ms(), Some(0));

        assert!(matches!(
            p.tick(INTERVAL),
            Tick::Polled(PollOutcome::ReadFailed(TransientReadError::Unsettled))
        ));
        assert_eq!(p.last_check_ms(), Some(0));
        assert_eq!(p.time_until_due(INTERVAL + 1), None);
    }

    #[test]
    fn test_startup_read_failure_shows_off() {
        let mut p = poller(&[Err(TransientReadError::Pin), Ok(true)]);
        assert_eq!(p.start(), PollOutcome::ReadFailed(TransientReadError::Pin));
        assert_eq!(p.state(), Some(DisplayState::Off));
        assert_eq!(shown_state(&p), DisplayState::Off);

        p.tick(0);
        assert_eq!(p.state(), Some(DisplayState::On));
        assert_eq!(p.render_count(), 2);
    }

    #[test]
    fn test_render_scene_is_idempotent() {
        let mut p = poller(&[Ok(true)]);
        p.render_scene(DisplayState::On).unwrap();
        let first = p.surface().shown.clone();
        p.render_scene(DisplayState::On).unwrap();

        assert_eq!(p.surface().shown, first);
        assert_eq!(p.state(), Some(DisplayState::On));
    }

    #[test]
    fn test_render_failure_retried_on_next_poll() {
        let mut p = poller(&[Ok(false), Ok(true), Ok(true)]);
        p.start();

        p.surface.fail = true;
        assert_eq!(
            p.tick(0),
            Tick::Polled(PollOutcome::RenderFailed {
                level: true,
                error: RenderError::Surface
            })
        );
        assert_eq!(p.state(), Some(DisplayState::Off));
        assert_eq!(shown_state(&p), DisplayState::Off);

        // Read succeeded, so the retry waits out the interval
        assert_eq!(p.tick(1), Tick::Wait(INTERVAL - 1));

        p.surface.fail = false;
        assert!(matches!(
            p.tick(INTERVAL),
            Tick::Polled(PollOutcome::Read { rendered: true, .. })
        ));
        assert_eq!(shown_state(&p), DisplayState::On);
    }

    fn read_strategy() -> impl Strategy<Value = Result<bool, TransientReadError>> {
        prop_oneof![
            4 => any::<bool>().prop_map(Ok::<bool, TransientReadError>),
            1 => Just(Err::<bool, TransientReadError>(TransientReadError::Pin)),
            1 => Just(Err::<bool, TransientReadError>(TransientReadError::Unsettled)),
        ]
    }

    proptest! {
        #[test]
        fn prop_display_tracks_last_good_read(
            reads in proptest::collection::vec(read_strategy(), 1..40)
        ) {
            let mut p = poller(&reads);
            p.start();

            // Startup failure falls back to off
            let mut expected = match reads[0] {
                Ok(level) => DisplayState::from(level),
                Err(_) => DisplayState::Off,
            };
            let mut expected_renders = 1u32;
            prop_assert_eq!(shown_state(&p), expected);

            let mut now = 0u64;
            for read in &reads[1..] {
                match p.tick(now) {
                    Tick::Wait(ms) => {
                        // Only after a success; the next tick must poll
                        now += ms;
                        prop_assert!(matches!(p.tick(now), Tick::Polled(_)));
                    }
                    Tick::Polled(_) => {}
                }

                if let Ok(level) = read {
                    let state = DisplayState::from(*level);
                    if state != expected {
                        expected_renders += 1;
                    }
                    expected = state;
                    now += INTERVAL;
                }

                prop_assert_eq!(shown_state(&p), expected);
                prop_assert_eq!(p.state(), Some(expected));
                prop_assert_eq!(p.render_count(), expected_renders);
            }
        }

        #[test]
        fn prop_failed_read_never_waits(
            wait_after in 0u64..(2 * INTERVAL)
        ) {
            let mut p = poller(&[Ok(true), Ok(true), Err(TransientReadError::Pin), Ok(true)]);
            p.start();
            p.tick(0);
            p.tick(INTERVAL + wait_after);

            // Still due, however little time has passed since the failure
            prop_assert!(matches!(p.tick(INTERVAL + wait_after), Tick::Polled(_)));
            prop_assert_eq!(p.render_count(), 1);
        }
    }
}
