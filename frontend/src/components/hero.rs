//! Hero section and the "how it works" steps

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Transforme seus vídeos em conteúdo viral"</h1>
            <p class="subtitle">
                "Faça upload do seu vídeo de marketing de afiliados e nossa IA gerará "
                "automaticamente legendas, descrições otimizadas e palavras-chave para "
                "maximizar seu engajamento."
            </p>
        </div>
    }
}

#[component]
pub fn HowItWorks() -> impl IntoView {
    let steps = [
        ("📹", "1. Upload do Vídeo", "Faça upload do seu vídeo de marketing de afiliados (MP4, MOV, AVI)"),
        ("🤖", "2. Processamento IA", "Nossa IA analisa o conteúdo e gera legendas, descrições e palavras-chave"),
        ("🚀", "3. Conteúdo Viral", "Copie e use o conteúdo otimizado para maximizar seu engajamento"),
    ];

    view! {
        <section id="como-usar" class="how-it-works">
            <h3>"Como funciona"</h3>
            <div class="how-grid">
                {steps.into_iter().map(|(icon, title, text)| view! {
                    <div class="how-step">
                        <div class="how-icon">{icon}</div>
                        <h4>{title}</h4>
                        <p>{text}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}
