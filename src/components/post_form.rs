//! New-spot form: draft fields, location capture, multipart submission.
//!
//! DESIGN
//! ======
//! The draft is plain data in one signal; the chosen photo binary stays in
//! the DOM file input and is read out at submit time. Both async actions
//! (capture, submit) are idempotent while pending: a re-entrant call is
//! dropped by the state gate before any request goes out, on top of the
//! control-level disabling.

#[cfg(test)]
#[path = "post_form_test.rs"]
mod post_form_test;

use leptos::prelude::*;

use crate::state::draft::{DraftState, SubmitGate};
use crate::state::ui::{NoticeKind, UiState};

const PRECONDITION_TEXT: &str = "Add a title, photo, and GPS location before posting.";
const CREATE_SUCCESS_TEXT: &str = "Food spot shared!";
/// Failure copy mentions proximity: the backend rejects posts made too far
/// from the reported spot and the client cannot pre-validate that.
const CREATE_FAILURE_TEXT: &str = "Failed to post. Are you within 100m of the spot?";
const LOCATION_SUCCESS_TEXT: &str = "Location locked.";

fn location_button_label(captured: bool, pending: bool) -> &'static str {
    if pending {
        "Locating..."
    } else if captured {
        "Location Locked"
    } else {
        "Get My GPS Location"
    }
}

fn location_button_class(captured: bool) -> &'static str {
    if captured {
        "post-form__location post-form__location--locked"
    } else {
        "post-form__location"
    }
}

fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Uploading..." } else { "Post Food" }
}

/// Submit control enablement: off while a submission is in flight or any
/// required field is missing.
fn submit_enabled(draft: &DraftState) -> bool {
    !draft.submitting && draft.is_submittable()
}

/// The new-spot form. `on_post_success` fires after the backend accepts a
/// submission so the owner can refresh the feed.
#[component]
pub fn PostForm(on_post_success: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let draft = RwSignal::new(DraftState::default());
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let on_capture_location = move |_| {
        let mut started = false;
        draft.update(|d| started = d.begin_location_capture());
        if !started {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::util::geo::current_position().await {
                Ok(point) => {
                    draft.update(|d| d.apply_location_success(point));
                    ui.update(|u| {
                        u.push_notice(NoticeKind::Success, LOCATION_SUCCESS_TEXT.to_owned());
                    });
                }
                Err(error) => {
                    log::error!("location capture failed: {error:?}");
                    draft.update(|d| d.apply_location_failure());
                    ui.update(|u| {
                        u.push_notice(NoticeKind::Error, error.user_message().to_owned());
                    });
                }
            }
        });
    };

    let on_photo_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;

            let chosen = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
                .map(|file| crate::state::draft::PhotoAttachment { name: file.name() });
            draft.update(|d| d.photo = chosen);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut gate = SubmitGate::Incomplete;
        draft.update(|d| gate = d.begin_submit());
        match gate {
            SubmitGate::AlreadySubmitting => {}
            SubmitGate::Incomplete => {
                ui.update(|u| {
                    u.push_notice(NoticeKind::Error, PRECONDITION_TEXT.to_owned());
                });
            }
            SubmitGate::Ready => {
                #[cfg(feature = "hydrate")]
                {
                    let file = file_input
                        .get()
                        .and_then(|input| input.files())
                        .and_then(|files| files.get(0));
                    let snapshot = draft.get();
                    let (Some(file), Some(location)) = (file, snapshot.location) else {
                        // The picker or capture was cleared between the gate
                        // check and here; settle and re-ask.
                        draft.update(|d| d.finish_submit());
                        ui.update(|u| {
                            u.push_notice(NoticeKind::Error, PRECONDITION_TEXT.to_owned());
                        });
                        return;
                    };

                    leptos::task::spawn_local(async move {
                        let result = crate::net::api::create_food_spot(
                            snapshot.title.trim(),
                            &snapshot.description,
                            &file,
                            location,
                        )
                        .await;

                        match result {
                            Ok(()) => {
                                draft.update(|d| d.apply_submit_success());
                                if let Some(input) = file_input.get() {
                                    input.set_value("");
                                }
                                ui.update(|u| {
                                    u.push_notice(
                                        NoticeKind::Success,
                                        CREATE_SUCCESS_TEXT.to_owned(),
                                    );
                                });
                                on_post_success.run(());
                            }
                            Err(message) => {
                                log::error!("create spot failed: {message}");
                                ui.update(|u| {
                                    u.push_notice(NoticeKind::Error, CREATE_FAILURE_TEXT.to_owned());
                                });
                            }
                        }
                        draft.update(|d| d.finish_submit());
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = on_post_success;
                    draft.update(|d| d.finish_submit());
                }
            }
        }
    };

    view! {
        <form class="post-form" on:submit=on_submit>
            <h2 class="post-form__heading">"Share Free Food"</h2>

            <input
                class="post-form__input"
                type="text"
                placeholder="Title (e.g., Free Pizza)"
                prop:value=move || draft.get().title
                on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
            />

            <textarea
                class="post-form__input post-form__textarea"
                placeholder="Description"
                prop:value=move || draft.get().description
                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
            ></textarea>

            <button
                type="button"
                class=move || location_button_class(draft.get().location.is_some())
                disabled=move || draft.get().location_pending
                on:click=on_capture_location
            >
                {move || {
                    location_button_label(
                        draft.get().location.is_some(),
                        draft.get().location_pending,
                    )
                }}
            </button>

            <label class="post-form__photo">
                <input
                    class="post-form__file"
                    type="file"
                    accept="image/*"
                    node_ref=file_input
                    on:change=on_photo_change
                />
                <span class="post-form__photo-name">
                    {move || {
                        draft.get().photo.map_or_else(|| "No photo chosen".to_owned(), |p| p.name)
                    }}
                </span>
            </label>

            <button
                type="submit"
                class="post-form__submit"
                disabled=move || !submit_enabled(&draft.get())
            >
                {move || submit_label(draft.get().submitting)}
            </button>
        </form>
    }
}
