use std::sync::atomic::{AtomicBool, Ordering};

use patterns_observer::{Observable, Observer, Subject, SubjectConfig};
use tracing::{debug, info};

/// The checkbox whose state everyone else follows
#[derive(Debug)]
pub struct ControlCheckbox {
    checked: bool,
    subject: Subject<bool>,
}

impl ControlCheckbox {
    pub fn new(config: SubjectConfig) -> Self { Self { checked: false, subject: Subject::with_config(config) } }

    pub fn is_checked(&self) -> bool { self.checked }

    /// Sets the state and notifies every observer with it. Returns how many were notified.
    pub fn set(&mut self, checked: bool) -> usize {
        self.checked = checked;
        let notified = self.notify(&self.checked);
        info!("control checkbox is now {}, notified {} observers", if checked { "checked" } else { "unchecked" }, notified);
        notified
    }

    pub fn toggle(&mut self) -> usize { self.set(!self.checked) }
}

impl Observable<bool> for ControlCheckbox {
    fn subject(&self) -> &Subject<bool> { &self.subject }
    fn subject_mut(&mut self) -> &mut Subject<bool> { &mut self.subject }
}

/// A checkbox which mirrors the control checkbox once registered with it
#[derive(Debug)]
pub struct Checkbox {
    id: usize,
    checked: AtomicBool,
}

impl Checkbox {
    pub fn new(id: usize) -> Self { Self { id, checked: AtomicBool::new(false) } }

    pub fn id(&self) -> usize { self.id }

    pub fn is_checked(&self) -> bool { self.checked.load(Ordering::Acquire) }

    /// A direct click on this checkbox. Flips only this checkbox and returns its new state.
    pub fn click(&self) -> bool {
        let checked = !self.checked.fetch_xor(true, Ordering::AcqRel);
        info!("checkbox {} clicked", self.id);
        checked
    }
}

impl Observer<bool> for Checkbox {
    fn update(&self, checked: &bool) {
        debug!("checkbox {} <- {}", self.id, checked);
        self.checked.store(*checked, Ordering::Release);
    }
}
