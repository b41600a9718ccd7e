use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer footer-center p-4 text-base-content/60 text-sm">
            <p>"© School Admin. All rights reserved."</p>
        </footer>
    }
}
