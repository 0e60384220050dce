//! Footer component

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id="contato">
            <div>"© 2025 " {APP_NAME} ". Todos os direitos reservados."</div>
            <div class="footer-links">
                <a href="mailto:contato@viralaffiliate.ai" class="footer-link">
                    "Contato"
                </a>
                <span class="rust-badge">"🦀 Rust + Leptos"</span>
            </div>
        </footer>
    }
}
