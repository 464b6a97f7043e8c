//! Dive transition state machine.
//!
//! `Idle -> Expanding -> Navigating -> Settling -> Idle`
//!
//! The animator never touches timers or the router itself. It returns
//! [`AnimatorEffect`]s that the host executes, and it is fed back through
//! [`TransitionAnimator::on_timer`]. Every non-idle state owns exactly one
//! pending [`PhaseToken`]; a timer carrying any other token is stale and is
//! ignored, so teardown is a single `abort()`.

use crate::config::{Breakpoints, TransitionTimings};
use crate::geometry::{Morph, Rect, Viewport};
use crate::store::{ActiveTransition, TransitionState};

/// Identifies one scheduled phase timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhaseToken(u64);

impl PhaseToken {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Public view of the animator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Expanding,
    Navigating,
    Settling,
}

/// Side effect requested by the animator.
#[derive(Debug, Clone, PartialEq)]
pub enum AnimatorEffect {
    /// Call `on_timer(token)` after `delay_ms`.
    Schedule { token: PhaseToken, delay_ms: u32 },
    /// Drop the timer previously scheduled with `token`.
    Cancel(PhaseToken),
    /// Change route to the detail view of `target_id`.
    Navigate { target_id: String },
    /// Clear the transition in the store.
    EndTransition,
}

#[derive(Debug, Clone)]
enum AnimatorState {
    Idle,
    Expanding {
        pending: PhaseToken,
        transition: ActiveTransition,
        morph: Morph,
    },
    Navigating {
        pending: PhaseToken,
        transition: ActiveTransition,
        target: Rect,
    },
    Settling {
        pending: PhaseToken,
        transition: ActiveTransition,
        target: Rect,
    },
}

/// What the overlay should draw right now.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    pub phase: Phase,
    /// Target opacity of the full-screen cover.
    pub cover_opacity: f64,
    /// CSS transition length for the cover opacity.
    pub cover_fade_ms: u32,
    /// Ghost placeholder morphing from the clicked card.
    pub ghost: Option<GhostView>,
}

impl OverlayView {
    pub fn hidden() -> Self {
        Self {
            phase: Phase::Idle,
            cover_opacity: 0.0,
            cover_fade_ms: 0,
            ghost: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Idle
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GhostView {
    pub rect: Rect,
    pub image_url: String,
    pub name: String,
    pub opacity: f64,
}

/// The dive transition state machine.
#[derive(Debug, Clone)]
pub struct TransitionAnimator {
    timings: TransitionTimings,
    breakpoints: Breakpoints,
    state: AnimatorState,
    next_token: u64,
    /// One-shot latch: set once `Navigate` has been emitted for the current
    /// transition.
    navigated: bool,
}

impl TransitionAnimator {
    pub fn new(timings: TransitionTimings, breakpoints: Breakpoints) -> Self {
        Self {
            timings,
            breakpoints,
            state: AnimatorState::Idle,
            next_token: 0,
            navigated: false,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            AnimatorState::Idle => Phase::Idle,
            AnimatorState::Expanding { .. } => Phase::Expanding,
            AnimatorState::Navigating { .. } => Phase::Navigating,
            AnimatorState::Settling { .. } => Phase::Settling,
        }
    }

    /// Token of the single timer this animator is waiting on.
    pub fn pending_timer(&self) -> Option<PhaseToken> {
        match &self.state {
            AnimatorState::Idle => None,
            AnimatorState::Expanding { pending, .. }
            | AnimatorState::Navigating { pending, .. }
            | AnimatorState::Settling { pending, .. } => Some(*pending),
        }
    }

    /// Reconciles the machine with the store.
    ///
    /// Starts the sequence when a transition appears while idle, and hard
    /// aborts when the transition disappears mid-sequence. A different
    /// transition replacing the one in flight (reset and restart landing in
    /// the same update) cancels the current sequence and starts over for the
    /// new target.
    pub fn sync(&mut self, state: &TransitionState, viewport: Viewport) -> Vec<AnimatorEffect> {
        let Some(transition) = &state.active else {
            if self.phase() == Phase::Idle {
                return Vec::new();
            }
            tracing::debug!(phase = ?self.phase(), "transition cleared externally, aborting");
            return self.abort();
        };

        match self.in_flight() {
            None => self.enter_expanding(transition, viewport),
            Some(current) if current == transition => Vec::new(),
            Some(current) => {
                tracing::debug!(
                    replaced = %current.target_id,
                    target_id = %transition.target_id,
                    "transition replaced mid-sequence, restarting"
                );
                let mut effects = self.abort();
                effects.extend(self.enter_expanding(transition, viewport));
                effects
            }
        }
    }

    fn in_flight(&self) -> Option<&ActiveTransition> {
        match &self.state {
            AnimatorState::Idle => None,
            AnimatorState::Expanding { transition, .. }
            | AnimatorState::Navigating { transition, .. }
            | AnimatorState::Settling { transition, .. } => Some(transition),
        }
    }

    /// Advances the machine when a scheduled timer fires.
    pub fn on_timer(&mut self, token: PhaseToken) -> Vec<AnimatorEffect> {
        if self.pending_timer() != Some(token) {
            tracing::trace!(token = token.id(), "ignoring stale phase timer");
            return Vec::new();
        }

        match std::mem::replace(&mut self.state, AnimatorState::Idle) {
            AnimatorState::Idle => Vec::new(),
            AnimatorState::Expanding {
                transition, morph, ..
            } => self.enter_navigating(transition, morph.to),
            AnimatorState::Navigating {
                transition, target, ..
            } => self.enter_settling(transition, target),
            AnimatorState::Settling { .. } => {
                tracing::debug!("dive transition finished");
                self.navigated = false;
                vec![AnimatorEffect::EndTransition]
            }
        }
    }

    /// Resets to `Idle` from any phase, cancelling the pending timer.
    pub fn abort(&mut self) -> Vec<AnimatorEffect> {
        let pending = self.pending_timer();
        self.state = AnimatorState::Idle;
        self.navigated = false;
        pending.map(AnimatorEffect::Cancel).into_iter().collect()
    }

    /// Overlay to render, `elapsed_ms` after the current phase began.
    pub fn view(&self, elapsed_ms: f64) -> OverlayView {
        match &self.state {
            AnimatorState::Idle => OverlayView::hidden(),
            AnimatorState::Expanding {
                transition, morph, ..
            } => OverlayView {
                phase: Phase::Expanding,
                cover_opacity: 1.0,
                cover_fade_ms: self.timings.expand_ms,
                ghost: Some(ghost(transition, morph.frame(elapsed_ms), 1.0)),
            },
            AnimatorState::Navigating {
                transition, target, ..
            } => OverlayView {
                phase: Phase::Navigating,
                cover_opacity: 1.0,
                cover_fade_ms: 0,
                ghost: Some(ghost(transition, *target, 1.0)),
            },
            AnimatorState::Settling {
                transition, target, ..
            } => OverlayView {
                phase: Phase::Settling,
                cover_opacity: 0.0,
                cover_fade_ms: self.timings.fade_out_ms,
                ghost: Some(ghost(transition, *target, 0.0)),
            },
        }
    }

    fn enter_expanding(
        &mut self,
        transition: &ActiveTransition,
        viewport: Viewport,
    ) -> Vec<AnimatorEffect> {
        let target = viewport.transition_target(&self.breakpoints);
        let morph = Morph::new(transition.source_geometry, target, self.timings.expand_ms);
        let pending = self.issue_token();

        tracing::debug!(
            target_id = %transition.target_id,
            ?target,
            "dive transition expanding"
        );

        self.navigated = false;
        self.state = AnimatorState::Expanding {
            pending,
            transition: transition.clone(),
            morph,
        };
        vec![AnimatorEffect::Schedule {
            token: pending,
            delay_ms: self.timings.expand_ms,
        }]
    }

    fn enter_navigating(
        &mut self,
        transition: ActiveTransition,
        target: Rect,
    ) -> Vec<AnimatorEffect> {
        let mut effects = Vec::with_capacity(2);
        if !self.navigated {
            self.navigated = true;
            effects.push(AnimatorEffect::Navigate {
                target_id: transition.target_id.clone(),
            });
        }

        let pending = self.issue_token();
        self.state = AnimatorState::Navigating {
            pending,
            transition,
            target,
        };
        effects.push(AnimatorEffect::Schedule {
            token: pending,
            delay_ms: self.timings.mount_settle_ms,
        });
        effects
    }

    fn enter_settling(
        &mut self,
        transition: ActiveTransition,
        target: Rect,
    ) -> Vec<AnimatorEffect> {
        let pending = self.issue_token();
        self.state = AnimatorState::Settling {
            pending,
            transition,
            target,
        };
        vec![AnimatorEffect::Schedule {
            token: pending,
            delay_ms: self.timings.fade_out_ms,
        }]
    }

    fn issue_token(&mut self) -> PhaseToken {
        self.next_token = self.next_token.wrapping_add(1);
        PhaseToken(self.next_token)
    }
}

impl Default for TransitionAnimator {
    fn default() -> Self {
        Self::new(TransitionTimings::default(), Breakpoints::default())
    }
}

fn ghost(transition: &ActiveTransition, rect: Rect, opacity: f64) -> GhostView {
    GhostView {
        rect,
        image_url: transition.image_url.clone(),
        name: transition.name.clone(),
        opacity,
    }
}
