use gloo_timers::callback::Timeout;
use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastType {
    Success,
    Error,
    Info,
}

impl ToastType {
    fn classes(&self) -> &'static str {
        match self {
            ToastType::Success => "bg-green-500 border-green-600",
            ToastType::Error => "bg-red-500 border-red-600",
            ToastType::Info => "bg-orange-500 border-orange-600",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "✓",
            ToastType::Error => "✕",
            ToastType::Info => "ℹ",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    pub duration: u32,
}

impl Toast {
    /// Messages disappear after five seconds
    pub const DEFAULT_DURATION_MS: u32 = 5_000;

    pub fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            toast_type,
            duration: Self::DEFAULT_DURATION_MS,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Info)
    }

    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<Toast>,
    pub remove_toast: Callback<Uuid>,
}

impl ToastContext {
    pub fn show(&self, toast: Toast) {
        self.add_toast.emit(toast);
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Visible toasts; a reducer so delayed removals see the latest list
#[derive(Clone, Debug, Default, PartialEq)]
struct ToastQueue {
    toasts: Vec<Toast>,
}

enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(Self { toasts })
    }
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);

    let add_toast = {
        let queue = queue.clone();
        Callback::from(move |toast: Toast| {
            let toast_id = toast.id;
            let duration = toast.duration;
            queue.dispatch(ToastAction::Add(toast));

            let queue = queue.clone();
            Timeout::new(duration, move || queue.dispatch(ToastAction::Remove(toast_id))).forget();
        })
    };

    let remove_toast = {
        let queue = queue.clone();
        Callback::from(move |id: Uuid| queue.dispatch(ToastAction::Remove(id)))
    };

    let context = ToastContext {
        toasts: queue.toasts.clone(),
        add_toast,
        remove_toast,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <ToastList />
        </ContextProvider<ToastContext>>
    }
}

#[function_component(ToastList)]
fn toast_list() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-2">
            {toast_context.toasts.iter().map(|toast| {
                html! {
                    <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
                }
            }).collect::<Html>()}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    let on_close = {
        let toast_id = props.toast.id;
        Callback::from(move |_: MouseEvent| {
            toast_context.remove_toast.emit(toast_id);
        })
    };

    html! {
        <div class={classes!(
            "flex", "items-center", "p-4", "rounded-lg", "shadow-lg", "border-l-4", "text-white", "min-w-80", "max-w-md",
            props.toast.toast_type.classes()
        )}>
            <span class="text-lg font-bold mr-3">{props.toast.toast_type.icon()}</span>
            <p class="flex-1 text-sm font-medium">{&props.toast.message}</p>
            <button onclick={on_close} class="ml-3 text-white hover:text-gray-200 focus:outline-none">
                <span class="text-lg">{"×"}</span>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_adds_and_removes() {
        let toast = Toast::info("Loaded 12 records");
        let id = toast.id;
        let queue = Rc::new(ToastQueue::default()).reduce(ToastAction::Add(toast));
        assert_eq!(queue.toasts.len(), 1);
        let queue = queue.reduce(ToastAction::Remove(id));
        assert!(queue.toasts.is_empty());
    }

    #[test]
    fn test_toast_defaults() {
        let toast = Toast::success("GA4 successfully connected!");
        assert_eq!(toast.toast_type, ToastType::Success);
        assert_eq!(toast.duration, Toast::DEFAULT_DURATION_MS);
        assert_ne!(toast.id, Toast::error("x").id);
    }
}
