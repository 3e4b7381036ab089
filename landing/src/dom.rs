//! Browser glue for the pointer hub.

use poststride_ui::{Attachment, Dispatcher, GestureId, Point, PointerEvent, PointerSource, Rect};
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Feeds `document` click events into the hub.
///
/// The listener exists only while the hub has subscribers, i.e. while some
/// overlay is open or a pricing card is selected.
pub struct DocumentSource;

impl PointerSource for DocumentSource {
    fn attach(&self, dispatcher: Dispatcher) -> Attachment {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            warn!("no document available, outside clicks will not be observed");
            return Attachment::new(|| {});
        };

        let listener = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(
            move |event: web_sys::MouseEvent| {
                dispatcher.dispatch(&pointer_event(&event));
            },
        );

        if let Err(err) =
            document.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        {
            warn!(?err, "failed to attach document click listener");
        }

        Attachment::new(move || {
            let _ = document
                .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
            // Detaching usually happens inside this very listener (an outside
            // click closed the last overlay). Free it after it returns.
            wasm_bindgen_futures::spawn_local(async move {
                drop(listener);
            });
        })
    }
}

/// Gesture identity of a DOM event. Every listener the event reaches sees
/// the same timestamp.
pub fn gesture_of(event: &web_sys::Event) -> GestureId {
    GestureId::from_timestamp(event.time_stamp())
}

pub fn pointer_event(event: &web_sys::MouseEvent) -> PointerEvent {
    PointerEvent::new(
        gesture_of(event),
        Point::new(f64::from(event.client_x()), f64::from(event.client_y())),
    )
}

pub fn element_rect(element: &web_sys::Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.x(), rect.y(), rect.width(), rect.height())
}
