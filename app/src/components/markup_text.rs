use dioxus::prelude::*;
use playerdash_core::Span;

/// Render a list of markup spans as styled `<span>` elements.
#[component]
pub fn MarkupText(spans: Vec<Span>) -> Element {
    rsx! {
        for (index, span) in spans.iter().enumerate() {
            span {
                key: "{index}",
                class: span.class.unwrap_or_default(),
                style: span.css.clone().unwrap_or_default(),
                "{span.text}"
            }
        }
    }
}
