pub mod view_model;

use contracts::domain::a004_ai_advisor::chat::{ChatMessage, ChatRole, SUGGESTED_QUESTIONS};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::view_model::AiChatVm;
use crate::shared::data::use_api;
use crate::shared::icons::icon;
use crate::shared::mount_guard::MountGuard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

fn bubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.role == ChatRole::User;
    view! {
        <div class="chat__row" class:chat__row--user=is_user>
            {(!is_user).then(|| view! {
                <span class="chat__avatar" class:chat__avatar--error=message.is_error>
                    {icon("pill")}
                </span>
            })}
            <div
                class="chat__bubble"
                class:chat__bubble--user=is_user
                class:chat__bubble--error=message.is_error
            >
                {message.text}
            </div>
        </div>
    }
}

#[component]
pub fn AiChatPage() -> impl IntoView {
    let api = use_api();
    let guard = MountGuard::new();
    let vm = AiChatVm::new();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let scroll_to_bottom = move || {
        if let Some(container) = messages_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    Effect::new(move || {
        vm.messages.track();
        vm.is_sending.track();
        scroll_to_bottom();
    });

    let send = Callback::new(move |question: String| {
        let Some(question) = vm.begin(&question) else {
            return;
        };
        log::info!("Chat question: {}", question);
        let api = api.clone();
        let guard = guard.clone();
        spawn_local(async move {
            let reply = match api.ask(question).await {
                Ok(answer) => ChatMessage::assistant(answer),
                Err(e) => {
                    log::error!("Chat request failed: {}", e);
                    ChatMessage::failure()
                }
            };
            guard.run(|| vm.finish(reply));
        });
    });

    view! {
        <PageFrame page_id="a004_ai_advisor--chat" category=PAGE_CAT_DASHBOARD class="chat">
            <header class="chat__header">
                <h1 class="chat__title">"AI Data Assistant"</h1>
                <p class="text-muted">"Ask questions about your data in plain language."</p>
            </header>

            <div class="chat__messages" node_ref=messages_ref>
                {move || vm.messages.get().into_iter().map(bubble).collect_view()}
                <Show when=move || vm.is_sending.get()>
                    <div class="chat__row">
                        <span class="chat__avatar">{icon("pill")}</span>
                        <div class="chat__bubble chat__typing">
                            <span></span>
                            <span></span>
                            <span></span>
                        </div>
                    </div>
                </Show>
            </div>

            <div class="chat__composer">
                <div class="chat__suggestions">
                    {SUGGESTED_QUESTIONS
                        .into_iter()
                        .map(|q| view! {
                            <button class="chat__suggestion" on:click=move |_| send.run(q.to_string())>
                                {q}
                            </button>
                        })
                        .collect_view()}
                </div>
                <form
                    class="chat__form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        send.run(vm.input.get_untracked());
                    }
                >
                    <input
                        type="text"
                        class="form-input"
                        placeholder="Type your question here..."
                        aria-label="Chat input"
                        prop:value=move || vm.input.get()
                        on:input=move |ev| vm.input.set(event_target_value(&ev))
                        disabled=move || vm.is_sending.get()
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        button_type=ButtonType::Submit
                        disabled=Signal::derive(move || !vm.can_send())
                    >
                        {icon("send")}
                        " Send"
                    </Button>
                </form>
            </div>
        </PageFrame>
    }
}
