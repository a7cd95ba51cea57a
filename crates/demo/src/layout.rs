use std::sync::Arc;

use leptos::prelude::*;

use sweet_treats::{catalog::StoreInfo, storefront::Storefront};

use crate::cart::toggle_cart;

pub(crate) fn cart_button_label(item_count: u64) -> String {
    format!("🛒 Cart ({item_count})")
}

/// Store header with the cart toggle.
#[component]
pub fn StoreHeader(
    /// Store branding.
    store: Arc<StoreInfo>,
    /// Shopping session.
    storefront: RwSignal<Storefront<'static>>,
) -> impl IntoView {
    let title = format!("🍪 {}", store.name);
    let tagline = store.tagline.clone();

    view! {
        <header class="store-header">
            <div class="container store-header-row">
                <div>
                    <h1 class="store-title">{title}</h1>
                    <p class="store-tagline">{tagline}</p>
                </div>
                <button
                    type="button"
                    class="cart-toggle"
                    on:click=move |_| toggle_cart(storefront)
                >
                    {move || storefront.with(|session| cart_button_label(session.total_item_count()))}
                </button>
            </div>
        </header>
    }
}

/// Hero banner.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="container hero">
            <h2 class="hero-title">"Handcrafted Cookies Made with Love"</h2>
            <p class="hero-text">"Choose from our delicious selection of freshly baked cookies"</p>
        </section>
    }
}

/// Page footer.
#[component]
pub fn StoreFooter(
    /// Store branding.
    store: Arc<StoreInfo>,
) -> impl IntoView {
    let name = format!("🍪 {}", store.name);
    let motto = store.motto.clone();
    let copyright = format!("© 2025 {}. All rights reserved.", store.name);

    view! {
        <footer class="store-footer">
            <div class="container">
                <p class="store-footer-name">{name}</p>
                <p class="store-footer-motto">{motto}</p>
                <p class="store-footer-copyright">{copyright}</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_button_label_shows_count() {
        assert_eq!(cart_button_label(0), "🛒 Cart (0)");
        assert_eq!(cart_button_label(12), "🛒 Cart (12)");
    }
}
