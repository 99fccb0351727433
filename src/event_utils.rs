use gloo::events::EventListener;
use leptos::ev::EventDescriptor;
use wasm_bindgen::JsCast;

/// Document-wide listener. Dropping or removing the handle detaches it.
pub struct DocumentEventListenerHandle {
    event_name: String,
    listener: Option<EventListener>,
}

impl DocumentEventListenerHandle {
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    /// Detach now. Safe to call on an already detached handle.
    pub fn detach(&mut self) {
        self.listener.take();
    }

    pub fn remove(mut self) {
        self.detach();
    }
}

/// Listen for `event` on `document` in the bubble phase. Without a document
/// the handle comes back detached.
pub fn document_event_listener<E>(event: E, mut cb: impl FnMut(E::EventType) + 'static) -> DocumentEventListenerHandle
where
    E: EventDescriptor + 'static,
    E::EventType: JsCast,
{
    let event_name = event.name().into_owned();
    let listener = web_sys::window().and_then(|window| window.document()).map(|document| {
        EventListener::new(&document, event_name.clone(), move |ev| {
            cb(ev.clone().unchecked_into::<E::EventType>());
        })
    });

    DocumentEventListenerHandle { event_name, listener }
}
