use leptos::{logging, prelude::*};

use sweet_treats::{cart::Cart, products::ProductId, storefront::Storefront};

use crate::format_money;

pub(super) mod line_item;

use line_item::{CartLineItem, CartLineRow};

/// Add one unit of a catalog product to the session cart.
pub(crate) fn add_to_cart(storefront: RwSignal<Storefront<'static>>, product_id: ProductId) {
    storefront.update(|session| {
        if let Err(error) = session.add_to_cart(product_id) {
            logging::warn!("{error}");
        }
    });
}

/// Remove one unit of a product from the session cart.
pub(crate) fn remove_from_cart(storefront: RwSignal<Storefront<'static>>, product_id: ProductId) {
    storefront.update(|session| {
        session.remove_from_cart(product_id);
    });
}

pub(crate) fn toggle_cart(storefront: RwSignal<Storefront<'static>>) {
    storefront.update(|session| {
        session.toggle_cart_visibility();
    });
}

pub(crate) fn close_cart(storefront: RwSignal<Storefront<'static>>) {
    storefront.update(Storefront::close_cart);
}

/// Render model for the cart panel body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CartViewModel {
    /// Lines in cart order.
    lines: Vec<CartLineItem>,

    /// Formatted cart total.
    total: String,
}

fn build_cart_view(cart: &Cart<'_>) -> CartViewModel {
    CartViewModel {
        lines: cart.iter().map(CartLineItem::from).collect(),
        total: format_money(&cart.total_price()),
    }
}

#[component]
fn CartBody(cart: CartViewModel, storefront: RwSignal<Storefront<'static>>) -> impl IntoView {
    if cart.lines.is_empty() {
        return view! { <p class="cart-empty">"Your cart is empty"</p> }.into_any();
    }

    view! {
        <div>
            <ul class="cart-lines">
                {cart
                    .lines
                    .into_iter()
                    .map(|line| view! { <CartLineRow line=line storefront=storefront /> })
                    .collect_view()}
            </ul>
            <div class="cart-summary">
                <p class="cart-total-row">
                    <span>"Total:"</span>
                    <span class="cart-total">{cart.total}</span>
                </p>
                // Order submission is not wired up.
                <button type="button" class="button-checkout">
                    "Checkout"
                </button>
            </div>
        </div>
    }
    .into_any()
}

/// Slide-out cart panel component.
#[component]
pub fn CartPanel(
    /// Shopping session.
    storefront: RwSignal<Storefront<'static>>,
) -> impl IntoView {
    view! {
        <Show when=move || storefront.with(Storefront::is_cart_visible)>
            <aside class="cart-panel">
                <div class="cart-panel-header">
                    <h2 class="cart-panel-title">"Your Cart"</h2>
                    <button
                        type="button"
                        class="cart-panel-close"
                        aria-label="Close cart"
                        on:click=move |_| close_cart(storefront)
                    >
                        "✕"
                    </button>
                </div>
                {move || {
                    let cart = storefront.with(|session| build_cart_view(session.cart()));

                    view! { <CartBody cart=cart storefront=storefront /> }
                }}
            </aside>
        </Show>
    }
}
