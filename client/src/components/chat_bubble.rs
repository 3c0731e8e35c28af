//! Single transcript entry: sender-styled bubble with optional image and
//! analysis.

use chat::model::{ConversationEntry, Sender};
use leptos::prelude::*;

/// One conversation entry. A generated image is clickable so the studio can
/// promote it to the preview pane.
#[component]
pub fn ChatBubble(entry: ConversationEntry, on_image: Callback<String>) -> impl IntoView {
    let class = match entry.sender {
        Sender::User => "chat-bubble chat-bubble--user",
        Sender::Assistant => "chat-bubble chat-bubble--assistant",
    };

    let image = entry.generated_image.map(|url| {
        let promoted = url.clone();
        view! {
            <img
                class="chat-bubble__image"
                src=url
                alt="Generated design"
                on:click=move |_| on_image.run(promoted.clone())
            />
        }
    });

    let analysis = entry.analysis.map(|analysis| {
        view! {
            <div class="chat-bubble__analysis">
                <span class="chat-bubble__analysis-title">{analysis.title}</span>
                <span class="chat-bubble__analysis-detail">{analysis.detail}</span>
            </div>
        }
    });

    view! {
        <div class=class>
            <p class="chat-bubble__text">{entry.prompt}</p>
            {image}
            {analysis}
        </div>
    }
}
