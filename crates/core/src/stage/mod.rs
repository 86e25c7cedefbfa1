//! Composition root wiring every subsystem into one event-driven stage.
//!
//! All raw input funnels through [`ShowcaseStage::handle`]; the host's
//! frame loop calls [`ShowcaseStage::frame`] once per rendered frame. The
//! spring only integrates while a transition is in flight, mirroring an
//! animation-frame loop that self-cancels on settle and is rescheduled on
//! retarget. Dropping the stage drops every session and subscription, so
//! nothing outlives the carousel.

use crate::{
    carousel::{CarouselController, NavCommand},
    catalog::ProjectCatalog,
    config::AppConfig,
    gesture::GestureRecognizer,
    keyboard::{KeyboardNavigator, NavKey},
    progress::ProgressThrottle,
    render::StripFrame,
    spring::SpringInterpolator,
    viewport::ViewportClassifier,
    Result,
};

/// Raw input events at the stage boundary, toolkit-agnostic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Viewport width changed.
    Resize(f32),
    /// Visibility ratio of the carousel section, [0, 1].
    Visibility(f32),
    KeyDown(NavKey),
    TouchStart { x: f32, y: f32, timestamp_ms: u64 },
    TouchMove { x: f32, y: f32 },
    TouchEnd { x: f32, timestamp_ms: u64 },
    /// Direct dot-indicator selection.
    IndicatorTap(usize),
    /// Desktop next/prev arrow buttons.
    Next,
    Prev,
    /// Scroll progress pushed by the hero section.
    HeroScroll(f32),
}

/// Owns the carousel subsystems and routes events between them.
pub struct ShowcaseStage {
    catalog: ProjectCatalog,
    controller: CarouselController,
    spring: SpringInterpolator,
    viewport: ViewportClassifier,
    gesture: GestureRecognizer,
    keyboard: KeyboardNavigator,
    progress: ProgressThrottle,
    animating: bool,
}

impl ShowcaseStage {
    /// Builds a stage for the given catalog at the given initial viewport
    /// width. The panel count is fixed to the catalog length.
    pub fn new(catalog: ProjectCatalog, config: AppConfig, viewport_width: f32) -> Result<Self> {
        let controller = CarouselController::new(catalog.len(), viewport_width)?;
        let spring = SpringInterpolator::new(config.spring, controller.state().target_offset);

        Ok(Self {
            catalog,
            controller,
            spring,
            viewport: ViewportClassifier::new(config.breakpoint_px, viewport_width),
            gesture: GestureRecognizer::new(config.gesture),
            keyboard: KeyboardNavigator::new(config.keyboard),
            progress: ProgressThrottle::new(config.progress),
            animating: false,
        })
    }

    /// Routes one input event. Touch events are dropped entirely outside
    /// compact mode, as if the listeners were never attached.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Resize(width) => self.resize(width),
            InputEvent::Visibility(ratio) => self.keyboard.set_visibility(ratio),
            InputEvent::KeyDown(key) => {
                if let Some(command) = self.keyboard.key_down(key) {
                    self.apply(command);
                }
            }
            InputEvent::TouchStart { x, y, timestamp_ms } => {
                if self.viewport.is_compact() {
                    self.gesture.touch_start(x, y, timestamp_ms);
                }
            }
            InputEvent::TouchMove { x, y } => {
                if self.viewport.is_compact() {
                    self.gesture.touch_move(x, y);
                }
            }
            InputEvent::TouchEnd { x, timestamp_ms } => {
                if self.viewport.is_compact() {
                    if let Some(command) = self.gesture.touch_end(x, timestamp_ms) {
                        self.apply(command);
                    }
                }
            }
            InputEvent::IndicatorTap(index) => self.apply(NavCommand::Jump(index)),
            InputEvent::Next => self.apply(NavCommand::Advance),
            InputEvent::Prev => self.apply(NavCommand::Retreat),
            InputEvent::HeroScroll(value) => self.progress.push(value),
        }
    }

    /// Advances the stage by one rendered frame and returns what the
    /// renderer should draw. `dt` is the frame delta in seconds.
    pub fn frame(&mut self, dt: f32) -> StripFrame {
        // Coalesced delivery: at most one progress update per frame.
        let _ = self.progress.tick();

        if self.animating {
            self.spring.step(dt);
            if self.spring.is_settled() {
                self.animating = false;
            }
        }

        StripFrame::compose(
            self.controller.state(),
            self.spring.position(),
            self.progress.entered(),
            self.viewport.is_compact(),
            self.keyboard.is_in_view(),
        )
    }

    pub fn catalog(&self) -> &ProjectCatalog {
        &self.catalog
    }

    pub fn controller(&self) -> &CarouselController {
        &self.controller
    }

    /// Mutable access for subscribing renderers to state changes.
    pub fn controller_mut(&mut self) -> &mut CarouselController {
        &mut self.controller
    }

    pub fn is_compact(&self) -> bool {
        self.viewport.is_compact()
    }

    /// True while a panel transition is still in flight.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    fn apply(&mut self, command: NavCommand) {
        if self.controller.apply(command) {
            self.spring.retarget(self.controller.state().target_offset);
            self.animating = !self.spring.is_settled();
        }
    }

    fn resize(&mut self, width: f32) {
        let flipped = self.viewport.resize(width);
        if flipped && !self.viewport.is_compact() {
            // Leaving compact mode mid-gesture: the touch listeners are
            // gone, so any open session must not fire later.
            self.gesture.cancel();
        }

        self.controller.set_viewport_width(width);
        let target = self.controller.state().target_offset;
        if (self.spring.target() - target).abs() > f32::EPSILON {
            self.spring.retarget(target);
            self.animating = !self.spring.is_settled();
        }
    }
}

impl std::fmt::Debug for ShowcaseStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShowcaseStage")
            .field("state", self.controller.state())
            .field("compact", &self.viewport.is_compact())
            .field("animating", &self.animating)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn stage(width: f32) -> ShowcaseStage {
        ShowcaseStage::new(ProjectCatalog::builtin(), AppConfig::default(), width).unwrap()
    }

    fn settle(stage: &mut ShowcaseStage) -> StripFrame {
        let mut frame = stage.frame(DT);
        let mut ticks = 0;
        while stage.is_animating() && ticks < 600 {
            frame = stage.frame(DT);
            ticks += 1;
        }
        assert!(!stage.is_animating(), "transition never settled");
        frame
    }

    #[test]
    fn three_next_taps_walk_to_the_last_panel() {
        let mut s = stage(1024.0);

        for expected in 1..=3 {
            s.handle(InputEvent::Next);
            assert_eq!(s.controller().state().current_index, expected);
        }

        let frame = settle(&mut s);
        assert_eq!(frame.current_index, 3);
        assert!(!frame.can_advance);
        assert_eq!(frame.offset, -3.0 * 1024.0);

        // Fourth tap past the end is a no-op.
        s.handle(InputEvent::Next);
        assert_eq!(s.controller().state().current_index, 3);
    }

    #[test]
    fn spring_loop_self_cancels_after_settling() {
        let mut s = stage(1024.0);
        s.handle(InputEvent::Next);
        assert!(s.is_animating());

        settle(&mut s);
        let at_rest = s.frame(DT);
        assert_eq!(at_rest.offset, -1024.0);
        assert!(!s.is_animating());
    }

    #[test]
    fn touch_is_ignored_on_desktop_viewports() {
        let mut s = stage(1024.0);
        s.handle(InputEvent::TouchStart {
            x: 300.0,
            y: 400.0,
            timestamp_ms: 1_000,
        });
        s.handle(InputEvent::TouchEnd {
            x: 200.0,
            timestamp_ms: 1_200,
        });
        assert_eq!(s.controller().state().current_index, 0);
    }

    #[test]
    fn swipe_advances_in_compact_mode() {
        let mut s = stage(500.0);
        assert!(s.is_compact());

        s.handle(InputEvent::TouchStart {
            x: 300.0,
            y: 400.0,
            timestamp_ms: 1_000,
        });
        s.handle(InputEvent::TouchMove { x: 250.0, y: 405.0 });
        s.handle(InputEvent::TouchEnd {
            x: 220.0,
            timestamp_ms: 1_250,
        });

        assert_eq!(s.controller().state().current_index, 1);
        let frame = settle(&mut s);
        assert_eq!(frame.offset, -500.0);
    }

    #[test]
    fn keyboard_only_acts_while_in_view() {
        let mut s = stage(1024.0);

        s.handle(InputEvent::KeyDown(NavKey::ArrowRight));
        assert_eq!(s.controller().state().current_index, 0);

        s.handle(InputEvent::Visibility(0.6));
        s.handle(InputEvent::KeyDown(NavKey::ArrowRight));
        assert_eq!(s.controller().state().current_index, 1);

        s.handle(InputEvent::Visibility(0.0));
        s.handle(InputEvent::KeyDown(NavKey::ArrowRight));
        assert_eq!(s.controller().state().current_index, 1);
    }

    #[test]
    fn resize_across_the_breakpoint_rewires_gestures() {
        let mut s = stage(1024.0);
        s.handle(InputEvent::Resize(500.0));
        assert!(s.is_compact());

        // Now touch works.
        s.handle(InputEvent::TouchStart {
            x: 300.0,
            y: 400.0,
            timestamp_ms: 1_000,
        });
        // Growing back to desktop mid-gesture drops the session.
        s.handle(InputEvent::Resize(1024.0));
        s.handle(InputEvent::TouchEnd {
            x: 100.0,
            timestamp_ms: 1_100,
        });
        assert_eq!(s.controller().state().current_index, 0);
    }

    #[test]
    fn resize_retargets_the_strip_without_changing_the_index() {
        let mut s = stage(1000.0);
        s.handle(InputEvent::IndicatorTap(2));
        settle(&mut s);

        s.handle(InputEvent::Resize(600.0));
        let frame = settle(&mut s);
        assert_eq!(frame.current_index, 2);
        assert_eq!(frame.offset, -1200.0);
    }

    #[test]
    fn hero_progress_gates_panel_entrance() {
        let mut s = stage(1024.0);
        let frame = s.frame(DT);
        assert!(frame.panels.iter().all(|p| !p.entered));

        s.handle(InputEvent::HeroScroll(0.3));
        s.handle(InputEvent::HeroScroll(0.8));
        let frame = s.frame(DT);
        assert!(frame.panels.iter().all(|p| p.entered));
    }

    #[test]
    fn subscribed_renderers_observe_routed_commands() {
        use std::{cell::RefCell, rc::Rc};

        let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();

        let mut s = stage(1024.0);
        s.controller_mut()
            .subscribe(move |state| sink.borrow_mut().push(state.current_index));

        s.handle(InputEvent::Next);
        s.handle(InputEvent::IndicatorTap(3));
        s.handle(InputEvent::Next); // boundary no-op, not observed

        assert_eq!(*seen.borrow(), vec![1, 3]);
    }

    #[test]
    fn indicator_tap_out_of_range_is_a_noop() {
        let mut s = stage(1024.0);
        s.handle(InputEvent::IndicatorTap(9));
        assert_eq!(s.controller().state().current_index, 0);
        assert!(!s.is_animating());
    }
}
