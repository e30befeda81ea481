use crate::i18n::use_i18n;
use ens_core::config::TOAST_LIMIT;
#[cfg(target_arch = "wasm32")]
use ens_core::config::TOAST_TTL_MS;
use std::collections::BTreeSet;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    const fn class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastItem {
    pub id: u32,
    pub kind: ToastKind,
    pub title: AttrValue,
    pub description: Option<AttrValue>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToastAction {
    Push {
        kind: ToastKind,
        title: AttrValue,
        description: Option<AttrValue>,
    },
    Dismiss(u32),
}

/// Visible toasts, oldest first. Ids increase monotonically and are never reused.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u32,
    pub items: Vec<ToastItem>,
}

impl ToastQueue {
    /// Id the next pushed toast will receive.
    #[must_use]
    pub const fn next_id(&self) -> u32 {
        self.next_id
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push {
                kind,
                title,
                description,
            } => {
                next.items.push(ToastItem {
                    id: next.next_id,
                    kind,
                    title,
                    description,
                });
                next.next_id = next.next_id.wrapping_add(1);
                if next.items.len() > TOAST_LIMIT {
                    let overflow = next.items.len() - TOAST_LIMIT;
                    next.items.drain(..overflow);
                }
            }
            ToastAction::Dismiss(id) => {
                if !self.items.iter().any(|item| item.id == id) {
                    return self;
                }
                next.items.retain(|item| item.id != id);
            }
        }
        Rc::new(next)
    }
}

/// Handle for raising toasts from anywhere below a [`ToastProvider`].
#[derive(Clone, PartialEq)]
pub struct Toaster {
    dispatch: Callback<ToastAction>,
}

impl Toaster {
    #[must_use]
    pub const fn new(dispatch: Callback<ToastAction>) -> Self {
        Self { dispatch }
    }

    pub fn success(&self, title: impl Into<AttrValue>, description: Option<AttrValue>) {
        self.push(ToastKind::Success, title.into(), description);
    }

    pub fn error(&self, title: impl Into<AttrValue>) {
        self.push(ToastKind::Error, title.into(), None);
    }

    fn push(&self, kind: ToastKind, title: AttrValue, description: Option<AttrValue>) {
        self.dispatch.emit(ToastAction::Push {
            kind,
            title,
            description,
        });
    }
}

/// The nearest toaster; outside a provider toasts are dropped.
#[hook]
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_else(|| Toaster::new(Callback::noop()))
}

#[derive(Properties, PartialEq)]
pub struct ProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let toaster = {
        let dispatcher = queue.dispatcher();
        use_memo((), move |_| {
            Toaster::new(Callback::from(move |action: ToastAction| dispatcher.dispatch(action)))
        })
    };

    let scheduled = use_mut_ref(BTreeSet::<u32>::new);
    {
        let dispatcher = queue.dispatcher();
        use_effect_with(queue.items.clone(), move |items| {
            let mut scheduled = scheduled.borrow_mut();
            for item in items {
                if scheduled.insert(item.id) {
                    schedule_dismiss(dispatcher.clone(), item.id);
                }
            }
        });
    }

    let on_dismiss = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Toaster> context={(*toaster).clone()}>
            { props.children.clone() }
            <ToastStack toasts={queue.items.clone()} {on_dismiss} />
        </ContextProvider<Toaster>>
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(dispatcher: UseReducerDispatcher<ToastQueue>, id: u32) {
    wasm_bindgen_futures::spawn_local(async move {
        let ttl = i32::try_from(TOAST_TTL_MS).unwrap_or(i32::MAX);
        if crate::dom::sleep_ms(ttl).await.is_ok() {
            dispatcher.dispatch(ToastAction::Dismiss(id));
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_dispatcher: UseReducerDispatcher<ToastQueue>, _id: u32) {}

#[derive(Properties, PartialEq)]
pub struct StackProps {
    pub toasts: Vec<ToastItem>,
    #[prop_or_default]
    pub on_dismiss: Option<Callback<u32>>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &StackProps) -> Html {
    let i18n = use_i18n();
    let dismiss_label = i18n.t("toast.dismiss");
    html! {
        <div class="toast toast-top toast-end" role="status" aria-live="polite">
            { for props.toasts.iter().map(|toast| {
                let dismiss_btn = props.on_dismiss.as_ref().map(|cb| {
                    let id = toast.id;
                    let cb = cb.clone();
                    let on_click = Callback::from(move |_| cb.emit(id));
                    html! {
                        <button class="btn btn-ghost btn-xs" aria-label={dismiss_label.clone()} onclick={on_click}>{"✕"}</button>
                    }
                }).unwrap_or_default();
                html! {
                    <div key={toast.id} class={classes!("alert", toast.kind.class())} data-toast-id={toast.id.to_string()}>
                        <div>
                            <strong>{ toast.title.clone() }</strong>
                            if let Some(description) = &toast.description {
                                <p>{ description.clone() }</p>
                            }
                        </div>
                        { dismiss_btn }
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(title: &'static str) -> ToastAction {
        ToastAction::Push {
            kind: ToastKind::Success,
            title: AttrValue::from(title),
            description: None,
        }
    }

    #[test]
    fn queue_keeps_newest_within_limit() {
        let mut queue = Rc::new(ToastQueue::default());
        for title in ["a", "b", "c", "d"] {
            queue = queue.reduce(push(title));
        }
        let titles: Vec<_> = queue.items.iter().map(|t| t.title.to_string()).collect();
        assert_eq!(titles, ["b", "c", "d"]);
        assert_eq!(queue.next_id(), 4);
    }

    #[test]
    fn dismiss_removes_only_matching_id() {
        let queue = Rc::new(ToastQueue::default())
            .reduce(push("a"))
            .reduce(push("b"));
        let queue = queue.reduce(ToastAction::Dismiss(0));
        assert_eq!(queue.items.len(), 1);
        assert_eq!(queue.items[0].id, 1);
        let unchanged = Rc::clone(&queue).reduce(ToastAction::Dismiss(42));
        assert!(Rc::ptr_eq(&queue, &unchanged));
    }
}
