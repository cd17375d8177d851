use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub tone: Tone,
}

impl Toast {
    pub fn success(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            tone: Tone::Success,
        }
    }

    pub fn info(title: &str, description: &str) -> Self {
        Self {
            tone: Tone::Info,
            ..Self::success(title, description)
        }
    }
}

pub enum ToastAction {
    Push(u32, Toast),
    Dismiss(u32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    pub items: Vec<(u32, Toast)>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut list = (*self).clone();
        match action {
            ToastAction::Push(id, toast) => list.items.push((id, toast)),
            ToastAction::Dismiss(id) => list.items.retain(|(item, _)| *item != id),
        }
        Rc::new(list)
    }
}

/// Sends a toast to the nearest [`ToastHost`].
pub type ToastSender = Callback<Toast>;

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub dismiss_after_ms: u32,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let toasts = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0_u32);

    let sender: ToastSender = {
        let dispatcher = toasts.dispatcher();
        let dismiss_after_ms = props.dismiss_after_ms;
        Callback::from(move |toast: Toast| {
            let id = {
                let mut next = next_id.borrow_mut();
                *next = next.wrapping_add(1);
                *next
            };
            dispatcher.dispatch(ToastAction::Push(id, toast));
            let dispatcher = dispatcher.clone();
            Timeout::new(dismiss_after_ms, move || {
                dispatcher.dispatch(ToastAction::Dismiss(id));
            })
            .forget();
        })
    };

    let dismiss = |id: u32| {
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<ToastSender> context={sender}>
            { for props.children.iter() }
            <div class="toast-stack" aria-live="polite">
                { for toasts.items.iter().map(|(id, toast)| html! {
                    <div key={*id} class={classes!("toast", (toast.tone == Tone::Success).then(|| "toast-success"))}>
                        <div class="toast-body">
                            <p class="toast-title">{&toast.title}</p>
                            <p class="toast-description">{&toast.description}</p>
                        </div>
                        <button class="toast-close" aria-label="Dismiss" onclick={dismiss(*id)}>{"×"}</button>
                    </div>
                }) }
            </div>
        </ContextProvider<ToastSender>>
    }
}
