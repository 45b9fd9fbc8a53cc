//! One-slot toast for success and failure notices.

use leptos::prelude::*;

use crate::state::ui::{NoticeKind, UiState};

/// How long a notice stays up before auto-dismissing.
const NOTICE_DISMISS_MS: u64 = 4_000;

fn toast_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "notice-toast notice-toast--success",
        NoticeKind::Error => "notice-toast notice-toast--error",
    }
}

/// Renders the current notice, if any. Click dismisses immediately; a
/// timer dismisses after a few seconds using the notice's sequence token,
/// so a slow timer never clears a newer notice.
#[component]
pub fn NoticeToast() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    Effect::new(move || {
        let state = ui.get();
        if state.notice.is_none() {
            return;
        }
        let seq = state.notice_seq;

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(NOTICE_DISMISS_MS)).await;
            ui.update(|u| u.dismiss_notice(seq));
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = seq;
    });

    view! {
        <Show when=move || ui.get().notice.is_some()>
            <div
                class=move || {
                    ui.get()
                        .notice
                        .map_or("notice-toast", |notice| toast_class(notice.kind))
                }
                on:click=move |_| ui.update(|u| u.notice = None)
            >
                {move || ui.get().notice.map(|notice| notice.text).unwrap_or_default()}
            </div>
        </Show>
    }
}
