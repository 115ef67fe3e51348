use crate::layout::global_context::{AppGlobalContext, Toast};
use leptos::prelude::*;

/// Stack of transient notifications in the bottom-right corner
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="toast-host">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| ctx.dismiss_toast(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
