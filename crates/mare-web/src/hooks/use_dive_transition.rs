//! Host for the dive transition state machine.
//!
//! Executes [`AnimatorEffect`]s against the browser: phase timers become gloo
//! `Timeout`s (dropping one cancels it), `Navigate` pushes a route, and
//! `EndTransition` clears the store. At most one timeout is held at a time.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::render::{AnimationFrame, request_animation_frame};
use gloo::timers::callback::Timeout;
use mare_core::{AnimatorEffect, OverlayView, Phase, PhaseToken, TransitionAnimator};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::dom;
use crate::hooks::{TransitionHandle, use_transition};
use crate::routes::Route;

struct DiveDriver {
    animator: RefCell<TransitionAnimator>,
    timer: RefCell<Option<(PhaseToken, Timeout)>>,
    /// `Date.now()` when the current phase began.
    phase_started: Cell<f64>,
    handle: TransitionHandle,
    navigator: RefCell<Option<Navigator>>,
    redraw: Callback<()>,
}

impl DiveDriver {
    fn sync(self: &Rc<Self>) {
        let state = self.handle.state();
        let effects = self.animator.borrow_mut().sync(&state, dom::viewport());
        self.apply(effects);
    }

    fn fire(self: &Rc<Self>, token: PhaseToken) {
        let effects = self.animator.borrow_mut().on_timer(token);
        self.apply(effects);
    }

    fn apply(self: &Rc<Self>, effects: Vec<AnimatorEffect>) {
        if effects.is_empty() {
            return;
        }

        for effect in effects {
            match effect {
                AnimatorEffect::Schedule { token, delay_ms } => {
                    let driver = Rc::clone(self);
                    let timeout = Timeout::new(delay_ms, move || {
                        driver.timer.borrow_mut().take();
                        driver.fire(token);
                    });
                    let replaced = self.timer.borrow_mut().replace((token, timeout));
                    if let Some((stale, _)) = replaced {
                        tracing::warn!(token = stale.id(), "replaced a pending phase timer");
                    }
                }
                AnimatorEffect::Cancel(token) => {
                    let mut slot = self.timer.borrow_mut();
                    if slot.as_ref().is_some_and(|(pending, _)| *pending == token) {
                        slot.take();
                    }
                }
                AnimatorEffect::Navigate { target_id } => {
                    let navigator = self.navigator.borrow().clone();
                    match navigator {
                        Some(navigator) => navigator.push(&Route::Model { id: target_id }),
                        None => tracing::warn!("no router available, cannot open {target_id}"),
                    }
                }
                AnimatorEffect::EndTransition => self.handle.end_transition(),
            }
        }

        self.phase_started.set(js_sys::Date::now());
        self.redraw.emit(());
    }

    fn view(&self) -> OverlayView {
        let elapsed = js_sys::Date::now() - self.phase_started.get();
        self.animator.borrow().view(elapsed.max(0.0))
    }

    fn teardown(&self) {
        self.timer.borrow_mut().take();
        self.animator.borrow_mut().abort();
    }
}

/// Drives the dive transition and returns the overlay to draw.
#[hook]
pub fn use_dive_transition() -> OverlayView {
    let ctx = use_transition();
    let navigator = use_navigator();
    let redraw = use_force_update();

    let driver = {
        let handle = ctx.handle();
        let config = ctx.config;
        let redraw = redraw.clone();
        use_memo((), move |_| {
            DiveDriver {
                animator: RefCell::new(TransitionAnimator::new(
                    config.timings,
                    config.breakpoints,
                )),
                timer: RefCell::new(None),
                phase_started: Cell::new(js_sys::Date::now()),
                handle,
                navigator: RefCell::new(None),
                redraw: Callback::from(move |()| redraw.force_update()),
            }
        })
    };
    *driver.navigator.borrow_mut() = navigator;

    // Reconcile with the store whenever it changes
    {
        let driver = Rc::clone(&driver);
        use_effect_with(ctx.revision(), move |_| {
            driver.sync();
            || ()
        });
    }

    // Unmount: drop the pending timer so nothing fires against a dead tree
    {
        let driver = Rc::clone(&driver);
        use_effect_with((), move |_| move || driver.teardown());
    }

    let view = driver.view();

    // Redraw every frame while the ghost is morphing
    let frame = use_mut_ref(|| None::<AnimationFrame>);
    {
        let expanding = view.phase == Phase::Expanding;
        use_effect(move || {
            if expanding {
                let redraw = redraw.clone();
                *frame.borrow_mut() = Some(request_animation_frame(move |_| {
                    redraw.force_update();
                }));
            } else {
                frame.borrow_mut().take();
            }
            || ()
        });
    }

    view
}
