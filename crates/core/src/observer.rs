//! Viewport observation capability.
//!
//! Browsers provide this through `IntersectionObserver`; the core only needs
//! "tell me when a section first shows at least [`VISIBILITY_THRESHOLD`] of
//! itself". Hosts without a viewport use [`UnsupportedObserver`], tests and
//! headless renderers drive a [`ManualObserver`].

use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

use luxwear_protocol::SectionId;
use thiserror::Error;

use crate::surface::AnchorMap;

/// Fraction of a section's area that must be inside the viewport.
pub const VISIBILITY_THRESHOLD: f64 = 0.2;

/// Slack below [`VISIBILITY_THRESHOLD`] still accepted: browsers round
/// `intersectionRatio`, so a section sitting exactly at 20% can report a
/// hair under it. Anything further below is not visible.
const RATIO_TOLERANCE: f64 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ObserverError {
    #[error("viewport intersection observation is not supported in this environment")]
    UnsupportedEnvironment,
}

/// Invoked with a section id each time that section is at or above the
/// threshold during an intersection check. May repeat for the same id.
pub type VisibleCallback = Box<dyn FnMut(SectionId)>;

pub trait ViewportObserver {
    type Anchor;

    /// Watch every anchor in `anchors`. Starting an observer that is
    /// already running replaces the previous session.
    fn start(
        &mut self,
        anchors: &AnchorMap<Self::Anchor>,
        on_visible: VisibleCallback,
    ) -> Result<(), ObserverError>;

    /// Release all subscriptions. Safe to call repeatedly or before `start`.
    fn stop(&mut self);

    fn is_observing(&self) -> bool;
}

/// Whether an intersection sample counts as "visible".
pub fn crosses_threshold(is_intersecting: bool, ratio: f64) -> bool {
    is_intersecting && ratio + RATIO_TOLERANCE >= VISIBILITY_THRESHOLD
}

/// Observer for hosts that have no viewport at all.
#[derive(Debug)]
pub struct UnsupportedObserver<A> {
    _anchor: PhantomData<fn() -> A>,
}

impl<A> UnsupportedObserver<A> {
    pub fn new() -> Self {
        Self {
            _anchor: PhantomData,
        }
    }
}

impl<A> Default for UnsupportedObserver<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> ViewportObserver for UnsupportedObserver<A> {
    type Anchor = A;

    fn start(
        &mut self,
        _anchors: &AnchorMap<A>,
        _on_visible: VisibleCallback,
    ) -> Result<(), ObserverError> {
        Err(ObserverError::UnsupportedEnvironment)
    }

    fn stop(&mut self) {}

    fn is_observing(&self) -> bool {
        false
    }
}

#[derive(Default)]
struct ManualSession {
    callback: Option<VisibleCallback>,
    watched: Vec<SectionId>,
    /// Bumped by every start/stop so a callback taken out for dispatch is
    /// not put back into a session that ended meanwhile.
    generation: u64,
}

/// Observer whose intersection checks are triggered by hand through a
/// [`ManualHandle`].
pub struct ManualObserver<A> {
    session: Rc<RefCell<ManualSession>>,
    _anchor: PhantomData<fn() -> A>,
}

impl<A> ManualObserver<A> {
    pub fn new() -> Self {
        Self {
            session: Rc::new(RefCell::new(ManualSession::default())),
            _anchor: PhantomData,
        }
    }

    pub fn handle(&self) -> ManualHandle {
        ManualHandle {
            session: Rc::clone(&self.session),
        }
    }
}

impl<A> Default for ManualObserver<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> ViewportObserver for ManualObserver<A> {
    type Anchor = A;

    fn start(
        &mut self,
        anchors: &AnchorMap<A>,
        on_visible: VisibleCallback,
    ) -> Result<(), ObserverError> {
        let mut session = self.session.borrow_mut();
        session.generation += 1;
        session.watched = anchors.ids().collect();
        session.callback = Some(on_visible);
        Ok(())
    }

    fn stop(&mut self) {
        let mut session = self.session.borrow_mut();
        if session.callback.is_some() || !session.watched.is_empty() {
            session.generation += 1;
        }
        session.callback = None;
        session.watched.clear();
    }

    fn is_observing(&self) -> bool {
        self.session.borrow().callback.is_some()
    }
}

/// Drives a [`ManualObserver`] from outside the controller that owns it.
#[derive(Clone)]
pub struct ManualHandle {
    session: Rc<RefCell<ManualSession>>,
}

impl ManualHandle {
    /// Report `id` as crossing the threshold. Returns `false` when nothing
    /// was delivered: the observer is stopped or `id` is not watched.
    pub fn emit(&self, id: SectionId) -> bool {
        let (mut callback, generation) = {
            let mut session = self.session.borrow_mut();
            if !session.watched.contains(&id) {
                return false;
            }
            let Some(callback) = session.callback.take() else {
                return false;
            };
            (callback, session.generation)
        };

        // The callback may stop the observer, so no borrow is held here.
        callback(id);

        let mut session = self.session.borrow_mut();
        if session.generation == generation && session.callback.is_none() {
            session.callback = Some(callback);
        }
        true
    }

    /// Emit one check covering several sections at once, as a fast scroll
    /// would. Returns how many were delivered.
    pub fn emit_batch(&self, ids: impl IntoIterator<Item = SectionId>) -> usize {
        ids.into_iter().filter(|id| self.emit(*id)).count()
    }

    pub fn watched(&self) -> Vec<SectionId> {
        self.session.borrow().watched.clone()
    }

    pub fn is_observing(&self) -> bool {
        self.session.borrow().callback.is_some()
    }
}
