//! Leptos DragDrop Utilities
//!
//! Pointer-event drag-and-drop for reorderable Leptos lists.
//! Uses a movement threshold to distinguish click from drag, and hit-tests
//! the element under the pointer so touch drags work without pointer
//! enter/leave events.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Attribute marking a gap before the row with that index
pub const SLOT_ATTR: &str = "data-drop-slot";

/// Attribute marking a row the dragged item can take the place of
pub const ROW_ATTR: &str = "data-drop-row";

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Take the place of the row at this index
    Row(usize),
    /// The gap before this index (`len` = after the last row)
    Slot(usize),
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<usize>>,
    pub dragging_write: WriteSignal<Option<usize>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending row (pointerdown but not yet dragging)
    pub pending_read: ReadSignal<Option<usize>>,
    pub pending_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

impl DndSignals {
    pub fn is_dragging(&self, index: usize) -> bool {
        self.dragging_read.get() == Some(index)
    }

    pub fn is_target(&self, target: DropTarget) -> bool {
        self.drop_target_read.get() == Some(target)
    }

    pub fn any_dragging(&self) -> bool {
        self.dragging_read.get().is_some()
    }
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<usize>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<usize>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_read,
        start_write,
    }
}

// ========================
// Pure helpers
// ========================

/// True once the pointer moved far enough from `start` to count as a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    (current.0 - start.0).abs() > DRAG_THRESHOLD_PX || (current.1 - start.1).abs() > DRAG_THRESHOLD_PX
}

/// Final index for the row dragged from `from`, `None` when nothing moves
pub fn resolve_drop(from: usize, target: DropTarget, len: usize) -> Option<usize> {
    if from >= len {
        return None;
    }
    let to = match target {
        DropTarget::Row(index) => index,
        // removing the row first shifts later gaps up by one
        DropTarget::Slot(slot) if slot > from => slot - 1,
        DropTarget::Slot(slot) => slot,
    };
    let to = to.min(len - 1);
    (to != from).then_some(to)
}

/// Read a drop target from the marker attribute values
pub fn parse_target(slot: Option<&str>, row: Option<&str>) -> Option<DropTarget> {
    if let Some(slot) = slot.and_then(|s| s.parse().ok()) {
        return Some(DropTarget::Slot(slot));
    }
    row.and_then(|r| r.parse().ok()).map(DropTarget::Row)
}

// ========================
// DOM bindings
// ========================

fn hit_test(x: i32, y: i32) -> Option<DropTarget> {
    let doc = web_sys::window()?.document()?;
    let under = doc.element_from_point(x as f32, y as f32)?;
    let marked = under
        .closest(&format!("[{SLOT_ATTR}],[{ROW_ATTR}]"))
        .ok()
        .flatten()?;
    parse_target(
        marked.get_attribute(SLOT_ATTR).as_deref(),
        marked.get_attribute(ROW_ATTR).as_deref(),
    )
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    // swallow the click that follows pointerup on the dragged row
    let clear = dnd.drag_just_ended_write;
    gloo_timers::callback::Timeout::new(100, move || clear.set(false)).forget();
}

/// Create pointerdown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_pointerdown(dnd: DndSignals, index: usize) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 || !ev.is_primary() {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        dnd.pending_write.set(Some(index));
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

fn on_document<F>(event: &str, handler: F)
where
    F: FnMut(web_sys::PointerEvent) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let closure = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(handler);
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Bind document-level pointer handlers; call once per list owner.
///
/// `on_drop` receives the dragged row index and the target under the
/// pointer at release.
pub fn bind_global_pointer_handlers<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(usize, DropTarget) + 'static,
{
    on_document("pointermove", move |ev| {
        let current = (ev.client_x(), ev.client_y());
        match (dnd.pending_read.get_untracked(), dnd.dragging_read.get_untracked()) {
            (Some(pending), None) => {
                if exceeds_threshold(dnd.start_read.get_untracked(), current) {
                    dnd.dragging_write.set(Some(pending));
                }
            }
            (_, Some(_)) => {
                ev.prevent_default();
                let target = hit_test(current.0, current.1);
                if dnd.drop_target_read.get_untracked() != target {
                    dnd.drop_target_write.set(target);
                }
            }
            _ => {}
        }
    });

    on_document("pointerup", move |_ev| {
        let dragging = dnd.dragging_read.get_untracked();
        let target = dnd.drop_target_read.get_untracked();
        dnd.pending_write.set(None);

        match (dragging, target) {
            (Some(dragged), Some(target)) => {
                end_drag(&dnd);
                on_drop(dragged, target);
            }
            (Some(_), None) => end_drag(&dnd),
            // plain click, let it through
            (None, _) => {}
        }
    });

    on_document("pointercancel", move |_ev| {
        if dnd.dragging_read.get_untracked().is_some() || dnd.pending_read.get_untracked().is_some() {
            end_drag(&dnd);
        }
    });
}
