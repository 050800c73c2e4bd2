//! Transient notice shown after task operations ("Task created", error
//! messages). Auto-dismisses after a few seconds in the browser; clicking
//! dismisses immediately.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
const DISMISS_AFTER_SECS: u64 = 3;

/// Notice banner bound to a shared message signal.
#[component]
pub fn Notice(message: RwSignal<Option<String>>) -> impl IntoView {
    // Schedule an auto-dismiss whenever a new message appears. The timer
    // only clears the message it was armed for, so a newer notice is not
    // cut short by an older timer.
    Effect::new(move || {
        let Some(text) = message.get() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_secs(DISMISS_AFTER_SECS))
                    .await;
                if message.get_untracked().as_deref() == Some(text.as_str()) {
                    message.set(None);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
        }
    });

    view! {
        <Show when=move || message.get().is_some()>
            <div class="notice" on:click=move |_| message.set(None)>
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
