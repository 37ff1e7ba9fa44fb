//! Header Component
//!
//! Brand, navigation, and a weather readout picked once at mount.

use leptos::prelude::*;

use crate::context::use_news_context;
use crate::weather;

/// Weather readout; the reading is fixed for the component's lifetime
#[component]
fn WeatherWidget() -> impl IntoView {
    let ctx = use_news_context();
    let reading = ctx.with_content(|content| {
        weather::pick(&content.site().weather, &mut rand::thread_rng()).cloned()
    });

    reading.map(|reading| {
        view! {
            <div class="weather-widget" title=reading.condition.clone()>
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="24"
                    height="24"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class="weather-icon"
                >
                    <path d="M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z" />
                </svg>
                <div class="weather-info">
                    <span class="temperature">{reading.display_temperature()}</span>
                    <span class="location">{reading.location.clone()}</span>
                </div>
            </div>
        }
    })
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_news_context();
    let (brand, navigation) = ctx.with_content(|content| {
        (content.site().brand.clone(), content.site().navigation.clone())
    });

    view! {
        <header class="header">
            <div class="header-content">
                <div class="logo">
                    <span class="logo-nummi">{brand.first}</span>
                    <span class="logo-news">{brand.second}</span>
                </div>
                <nav class="navigation">
                    {navigation
                        .into_iter()
                        .enumerate()
                        .map(|(index, label)| {
                            view! {
                                <a href="#" class="nav-link" class:active={index == 0}>
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <WeatherWidget />
            </div>
        </header>
    }
}
