use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub message: String,
    pub toast_type: ToastType,
}

#[derive(Default, Clone)]
pub struct ToastrState {
    pub toasts: Vec<Toast>,
}

impl ToastrState {
    pub fn add_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub fn remove_toast(&mut self, id: u32) {
        self.toasts.retain(|t| t.id != id);
    }
}

type ToastrSubscriber = Rc<RefCell<Option<Box<dyn Fn(Vec<Toast>)>>>>;

/// Outward notification boundary. The core only requests notifications here;
/// rendering is the subscriber's business.
pub struct ToastrService {
    counter: AtomicU32,
    state: Rc<RefCell<ToastrState>>,
    subscriber: ToastrSubscriber,
}

impl Default for ToastrService {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastrService {
    pub fn new() -> Self {
        Self {
            counter: AtomicU32::new(0),
            state: Rc::new(RefCell::new(ToastrState::default())),
            subscriber: Rc::new(RefCell::new(None)),
        }
    }

    pub fn subscribe<F: Fn(Vec<Toast>) + 'static>(&self, callback: F) {
        self.subscriber.borrow_mut().replace(Box::new(callback));
    }

    fn show(&self, title: &str, msg: &str, toast_type: ToastType, duration_ms: u32) {
        let toast = Toast {
            id: self.counter.fetch_add(1, Ordering::AcqRel),
            title: title.to_string(),
            message: msg.to_string(),
            toast_type,
        };
        let toast_id = toast.id;
        // release the state borrow before notifying, subscribers may call
        // back into dismiss
        let toasts = {
            let mut state = self.state.borrow_mut();
            state.add_toast(toast);
            state.toasts.clone()
        };
        if let Some(subscriber) = self.subscriber.borrow().as_ref() {
            subscriber(toasts);
        }

        let state_ref = self.state.clone();
        let subscriber_ref = self.subscriber.clone();
        Timeout::new(duration_ms, move || {
            let toasts = {
                let mut state = state_ref.borrow_mut();
                state.remove_toast(toast_id);
                state.toasts.clone()
            };
            if let Some(subscriber) = subscriber_ref.borrow().as_ref() {
                subscriber(toasts);
            }
        })
        .forget();
    }

    pub fn success(&self, title: &str, msg: &str) {
        self.show(title, msg, ToastType::Success, 3000);
    }

    pub fn error(&self, title: &str, msg: &str) {
        self.show(title, msg, ToastType::Error, 4000);
    }

    // manual close
    pub fn dismiss(&self, id: u32) {
        let toasts = {
            let mut state = self.state.borrow_mut();
            state.remove_toast(id);
            state.toasts.clone()
        };
        if let Some(subscriber) = self.subscriber.borrow().as_ref() {
            subscriber(toasts);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn subscriber_may_call_back_into_dismiss() {
        let service = Rc::new(ToastrService::new());
        let reentered = Rc::new(Cell::new(false));
        {
            let service_ref = Rc::clone(&service);
            let reentered = Rc::clone(&reentered);
            service.subscribe(move |_| {
                if !reentered.get() {
                    reentered.set(true);
                    service_ref.dismiss(0);
                }
            });
        }
        service.dismiss(1);
        assert!(reentered.get());
        assert!(service.state.borrow().toasts.is_empty());
    }
}
