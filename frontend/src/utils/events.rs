use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::EventTarget;

/// A DOM event listener that is removed when dropped.
///
/// Hooks return one of these from their effect so the listener lives exactly
/// as long as the component.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn Fn()>,
}

impl EventListener {
    pub fn window(event: &'static str, callback: impl Fn() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        Self::attach(window.into(), event, callback)
    }

    pub fn document(event: &'static str, callback: impl Fn() + 'static) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Self::attach(document.into(), event, callback)
    }

    fn attach(target: EventTarget, event: &'static str, callback: impl Fn() + 'static) -> Option<Self> {
        let callback = Closure::<dyn Fn()>::new(callback);
        if let Err(err) =
            target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to listen for {}: {:?}", event, err);
            return None;
        }
        Some(Self {
            target,
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {:?}", self.event, err);
        }
    }
}
