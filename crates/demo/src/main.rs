//! Leptos Sweet Treats Storefront

use std::sync::Arc;

use leptos::prelude::*;
use rusty_money::{Money, iso::Currency};

use sweet_treats::{fixtures, storefront::Storefront};

mod cart;
mod layout;
mod products;

/// Main storefront page.
#[component]
fn App() -> impl IntoView {
    match fixtures::sweet_treats() {
        Ok(catalog) => {
            let store = Arc::new(catalog.store().clone());
            let storefront = RwSignal::new(Storefront::new(catalog));

            view! {
                <div class="page">
                    <layout::StoreHeader store=Arc::clone(&store) storefront=storefront />
                    <cart::CartPanel storefront=storefront />
                    <layout::Hero />
                    <products::ProductGrid storefront=storefront />
                    <layout::StoreFooter store=store />
                </div>
            }
            .into_any()
        }
        Err(error) => view! {
            <main class="page page-error">
                <h1>"Sweet Treats"</h1>
                <p class="error-message">{format!("Failed to load catalog: {error}")}</p>
            </main>
        }
        .into_any(),
    }
}

/// Main entry point
fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}

fn format_money(money: &Money<'_, Currency>) -> String {
    format!("{money}")
}
