use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

const TOAST_DISMISS_MS: f64 = 4000.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub message: String,
}

/// Write handle for the single toast slot. Showing a new toast replaces
/// whatever is currently on screen.
#[derive(Clone, Copy)]
pub struct Toasts(WriteSignal<Option<Toast>>);

impl Toasts {
    pub fn show(&self, title: impl Into<String>, message: impl Into<String>) {
        self.0.set(Some(Toast {
            title: title.into(),
            message: message.into(),
        }));
    }
}

/// Installs the toast context and returns the read side for the `Toaster`.
pub fn provide_toasts() -> ReadSignal<Option<Toast>> {
    let (toast, set_toast) = signal(None);
    provide_context(Toasts(set_toast));
    toast
}

#[component]
pub fn Toaster(toast: ReadSignal<Option<Toast>>) -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let UseTimeoutFnReturn { start, stop, .. } =
        use_timeout_fn(move |_: ()| toasts.0.set(None), TOAST_DISMISS_MS);

    // Restart the dismiss timer whenever a new toast lands in the slot.
    Effect::watch(
        move || toast.get(),
        move |current, _, _| {
            stop();
            if current.is_some() {
                start(());
            }
        },
        false,
    );

    view! {
        {move || {
            toast
                .get()
                .map(|t| {
                    view! {
                        <div class="fixed bottom-6 right-6 z-50 max-w-sm rounded-lg border border-zinc-800 bg-zinc-900 px-5 py-4 shadow-2xl section-content">
                            <div class="font-medium text-zinc-100">{t.title}</div>
                            <div class="mt-1 text-sm text-zinc-400">{t.message}</div>
                        </div>
                    }
                })
        }}
    }
}
