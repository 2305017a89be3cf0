use yew::prelude::*;

use crate::components::app_description::AppDescription;
use crate::components::features::Features;
use crate::components::footer::{Download, Footer};
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::preregister_form::PreregisterSection;
use crate::components::reveal::RevealSection;
use crate::components::screenshots::Screenshots;
use crate::components::testimonials::Testimonials;
use crate::context::use_app_data;
use crate::scroll::{use_scroll_depth, use_time_on_page};

#[function_component(Landing)]
pub fn landing() -> Html {
    let data = use_app_data();
    // Scroll to top and report the page view only on initial mount
    {
        let analytics = data.analytics.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                analytics.page_view("/");
                || ()
            },
            (),
        );
    }
    use_scroll_depth(data.analytics.clone());
    use_time_on_page(data.analytics.clone());

    html! {
        <div class="landing-page">
            <style>{ LANDING_CSS }</style>
            <Header />
            <main>
                <Hero />
                <RevealSection id="features" class="features-section">
                    <Features />
                </RevealSection>
                <RevealSection id="screenshots" class="screenshots-section">
                    <h2>{ "See Moneo in action" }</h2>
                    <Screenshots />
                </RevealSection>
                <RevealSection id="app-description" class="app-description-section">
                    <AppDescription />
                </RevealSection>
                <RevealSection id="testimonials" class="testimonials-section">
                    <h2>{ "Loved by early testers" }</h2>
                    <Testimonials />
                </RevealSection>
                <RevealSection id="preregister" class="preregister-section">
                    <PreregisterSection />
                </RevealSection>
                <RevealSection id="download" class="download-section">
                    <Download />
                </RevealSection>
            </main>
            <Footer />
        </div>
    }
}

const LANDING_CSS: &str = r#"
    html {
        scroll-behavior: smooth;
    }
    body {
        margin: 0;
        font-family: 'Inter', system-ui, sans-serif;
        background: #ffffff;
        color: #111827;
    }
    html.dark body {
        background: #0b1120;
        color: #e5e7eb;
    }
    .site-header {
        position: sticky;
        top: 0;
        z-index: 50;
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 1rem 2rem;
        backdrop-filter: blur(12px);
        background: rgba(255, 255, 255, 0.8);
    }
    html.dark .site-header {
        background: rgba(11, 17, 32, 0.8);
    }
    .logo {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-weight: 700;
        color: inherit;
        text-decoration: none;
    }
    .logo img {
        height: 32px;
    }
    .header-nav {
        display: flex;
        gap: 1.5rem;
    }
    .header-nav a,
    .footer-links a {
        color: inherit;
        text-decoration: none;
        opacity: 0.8;
    }
    .header-actions {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }
    .header-cta,
    .hero-cta.primary,
    .preregister-submit,
    .store-button {
        border: none;
        border-radius: 9999px;
        padding: 0.75rem 1.5rem;
        font-weight: 600;
        cursor: pointer;
        color: #ffffff;
        background: linear-gradient(135deg, #3b82f6, #a855f7);
    }
    .hero-cta.secondary {
        border: 1px solid currentColor;
        border-radius: 9999px;
        padding: 0.75rem 1.5rem;
        background: transparent;
        color: inherit;
        cursor: pointer;
    }
    .theme-toggle,
    .burger-menu,
    .autoplay-toggle,
    .carousel-arrow {
        border: none;
        background: transparent;
        color: inherit;
        cursor: pointer;
        font-size: 1.1rem;
    }
    .burger-menu {
        display: none;
    }
    .mobile-menu {
        position: fixed;
        inset: 64px 0 0 0;
        background: inherit;
        padding: 2rem;
    }
    .mobile-menu-links {
        display: flex;
        flex-direction: column;
        gap: 1.25rem;
        font-size: 1.25rem;
    }
    .mobile-menu-links a {
        color: inherit;
        text-decoration: none;
    }
    .hero {
        min-height: 90vh;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
        padding: 0 2rem;
        transform-origin: center top;
    }
    .hero h1 {
        font-size: 3.5rem;
        margin-bottom: 1rem;
    }
    .gradient-text {
        background: linear-gradient(135deg, #3b82f6, #a855f7);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .hero-buttons {
        display: flex;
        justify-content: center;
        gap: 1rem;
        margin-top: 2rem;
    }
    main > section {
        padding: 5rem 2rem;
        max-width: 1100px;
        margin: 0 auto;
    }
    main > section h2 {
        font-size: 2.5rem;
        text-align: center;
    }
    .section-subtitle {
        text-align: center;
        opacity: 0.7;
    }
    .reveal {
        opacity: 0;
        transform: translateY(40px);
        transition: opacity 0.8s ease, transform 0.8s ease;
    }
    .reveal.revealed {
        opacity: 1;
        transform: none;
    }
    .feature-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
        gap: 1.5rem;
        margin-top: 3rem;
    }
    .feature-card {
        border-radius: 1rem;
        padding: 1.5rem;
        border: 1px solid rgba(127, 127, 127, 0.2);
        transition: transform 0.3s ease, box-shadow 0.3s ease;
        cursor: pointer;
        outline: none;
    }
    .feature-card.active {
        transform: translateY(-6px);
        box-shadow: 0 20px 40px rgba(59, 130, 246, 0.2);
    }
    .feature-number {
        font-size: 0.85rem;
        opacity: 0.5;
    }
    .feature-icon {
        width: 48px;
        height: 48px;
        border-radius: 12px;
        display: flex;
        align-items: center;
        justify-content: center;
        color: #ffffff;
        margin: 1rem 0;
    }
    .screenshots-inner {
        display: grid;
        grid-template-columns: 1fr 1fr;
        align-items: center;
        gap: 3rem;
        margin-top: 3rem;
    }
    .screenshot-step {
        font-size: 3rem;
        font-weight: 800;
    }
    .phone-stage,
    .testimonial-stage {
        position: relative;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 2rem;
        padding: 2rem;
        touch-action: pan-y;
        user-select: none;
        cursor: grab;
    }
    .phone-stage.dragging,
    .testimonial-stage.dragging {
        cursor: grabbing;
    }
    .phone-mockup {
        width: 260px;
        border-radius: 2.5rem;
        border: 10px solid #111827;
        overflow: hidden;
        transition: transform 0.2s ease;
    }
    .dragging .phone-mockup,
    .dragging .testimonial-card {
        transition: none;
    }
    .phone-screen {
        display: block;
        width: 100%;
        animation: slide-in 0.5s ease;
    }
    .carousel-arrow.prev {
        position: absolute;
        left: 1rem;
    }
    .carousel-arrow.next {
        position: absolute;
        right: 1rem;
    }
    .carousel-controls {
        grid-column: 1 / -1;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 1rem;
        margin-top: 1.5rem;
    }
    .carousel-dots {
        display: flex;
        gap: 0.5rem;
    }
    .carousel-dot {
        width: 10px;
        height: 10px;
        border-radius: 9999px;
        border: none;
        background: rgba(127, 127, 127, 0.4);
        cursor: pointer;
        transition: width 0.3s ease;
    }
    .carousel-dot.active {
        width: 28px;
        background: #3b82f6;
    }
    .swipe-hint {
        grid-column: 1 / -1;
        text-align: center;
        font-size: 0.85rem;
        opacity: 0.6;
    }
    .testimonial-card {
        max-width: 680px;
        margin: 0;
        text-align: center;
        animation: slide-in 0.5s ease;
    }
    .testimonial-quote {
        font-size: 1.25rem;
        line-height: 1.7;
    }
    .testimonial-author {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.75rem;
    }
    .testimonial-author span {
        display: block;
        opacity: 0.7;
    }
    .testimonial-avatar {
        width: 44px;
        height: 44px;
        border-radius: 9999px;
        display: flex !important;
        align-items: center;
        justify-content: center;
        color: #ffffff;
        background: linear-gradient(135deg, #3b82f6, #a855f7);
        opacity: 1 !important;
    }
    .testimonial-progress {
        height: 3px;
        max-width: 320px;
        margin: 1.5rem auto 0;
        background: rgba(127, 127, 127, 0.2);
        overflow: hidden;
    }
    .testimonial-progress-bar {
        height: 100%;
        background: #3b82f6;
        animation-name: progress-fill;
        animation-timing-function: linear;
        animation-fill-mode: forwards;
    }
    .app-highlights {
        list-style: none;
        padding: 0;
        display: grid;
        gap: 1.5rem;
    }
    .app-highlights li {
        display: flex;
        gap: 1rem;
    }
    .preregister-form {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        max-width: 420px;
        margin: 2rem auto 0;
    }
    .preregister-form input {
        padding: 0.85rem 1rem;
        border-radius: 0.75rem;
        border: 1px solid rgba(127, 127, 127, 0.4);
        background: transparent;
        color: inherit;
    }
    .preregister-submit:disabled {
        opacity: 0.6;
        cursor: not-allowed;
    }
    .form-error {
        color: #ef4444;
        margin: 0;
    }
    .preregister-success {
        text-align: center;
    }
    .preregister-success i {
        font-size: 3rem;
        color: #22c55e;
    }
    .spinner {
        display: inline-block;
        width: 14px;
        height: 14px;
        border: 2px solid rgba(255, 255, 255, 0.4);
        border-top-color: #ffffff;
        border-radius: 50%;
        animation: spin 0.8s linear infinite;
    }
    .store-buttons {
        display: flex;
        justify-content: center;
        gap: 1rem;
        margin-top: 2rem;
    }
    .site-footer {
        padding: 3rem 2rem;
        text-align: center;
        border-top: 1px solid rgba(127, 127, 127, 0.2);
    }
    .footer-brand img {
        height: 32px;
    }
    .footer-links {
        display: flex;
        justify-content: center;
        flex-wrap: wrap;
        gap: 1.25rem;
        margin: 1.5rem 0;
    }
    .footer-copyright {
        font-size: 0.85rem;
        opacity: 0.6;
    }
    @keyframes slide-in {
        from { opacity: 0; transform: translateX(30px); }
        to { opacity: 1; transform: none; }
    }
    @keyframes progress-fill {
        from { width: 0%; }
        to { width: 100%; }
    }
    @keyframes spin {
        to { transform: rotate(360deg); }
    }
    @media (max-width: 767px) {
        .header-nav,
        .header-cta {
            display: none;
        }
        .burger-menu {
            display: block;
        }
        .hero h1 {
            font-size: 2.25rem;
        }
        .screenshots-inner {
            grid-template-columns: 1fr;
        }
        .carousel-arrow.prev,
        .carousel-arrow.next {
            display: none;
        }
    }
"#;
