//! Intro Splash Component
//!
//! Decorative overlay shown until the root's intro timer fires. Glyph
//! timings and droplet positions are computed once here and never again.

use leptos::prelude::*;

use crate::context::use_news_context;
use crate::intro::{logo_glyphs, Particle};

#[component]
pub fn IntroSplash() -> impl IntoView {
    let ctx = use_news_context();
    let (brand, particle_count) = ctx.with_content(|content| {
        (content.site().brand.clone(), content.site().particle_count)
    });
    let glyphs = logo_glyphs(&brand.first, &brand.second);
    let particles = Particle::scatter(particle_count, &mut rand::thread_rng());

    view! {
        <div class="intro-overlay">
            <div class="intro-block">
                <h1 class="intro-logo" aria-label=brand.full_name()>
                    {glyphs
                        .into_iter()
                        .map(|glyph| {
                            view! {
                                <span
                                    class=glyph.word.css_class()
                                    style=format!("animation-delay: {:.1}s", glyph.delay_s)
                                >
                                    {glyph.ch.to_string()}
                                </span>
                            }
                        })
                        .collect_view()}
                </h1>
                {particles
                    .into_iter()
                    .map(|particle| view! { <div class="droplet" style=particle.style()></div> })
                    .collect_view()}
            </div>
        </div>
    }
}
