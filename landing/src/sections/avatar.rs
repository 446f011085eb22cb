use leptos::prelude::*;

/// Round avatar: the image when it loads, the fallback text otherwise.
#[component]
pub fn Avatar(
    #[prop(into)] name: String,
    #[prop(into)] src: String,
    /// Text shown when there is no usable image (usually initials)
    #[prop(into)]
    fallback: String,
    #[prop(default = "avatar-md")] size: &'static str,
) -> impl IntoView {
    let (broken, set_broken) = signal(src.is_empty());

    view! {
        <span class=format!("avatar {size}") title=name.clone()>
            <img
                src=src
                alt=name
                class=move || if broken.get() { "is-hidden" } else { "" }
                on:error=move |_| set_broken.set(true)
            />
            <span class=move || if broken.get() { "" } else { "is-hidden" }>{fallback}</span>
        </span>
    }
}
