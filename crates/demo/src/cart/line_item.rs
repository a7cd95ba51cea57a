use leptos::prelude::*;

use sweet_treats::{cart::CartLine, products::ProductId, storefront::Storefront};

use crate::format_money;

use super::{add_to_cart, remove_from_cart};

/// Render model for a line in the cart panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CartLineItem {
    /// Product on this line (used for the -/+ actions).
    pub(crate) product_id: ProductId,

    /// Product glyph.
    pub(crate) glyph: String,

    /// Product name.
    pub(crate) name: String,

    /// Formatted unit price.
    pub(crate) unit_price: String,

    /// Units in the cart.
    pub(crate) quantity: u32,
}

impl From<&CartLine<'_>> for CartLineItem {
    fn from(line: &CartLine<'_>) -> Self {
        let product = line.product();

        CartLineItem {
            product_id: product.id,
            glyph: product.glyph.clone(),
            name: product.name.clone(),
            unit_price: format_money(&product.price),
            quantity: line.quantity(),
        }
    }
}

#[component]
pub(super) fn CartLineRow(
    line: CartLineItem,
    storefront: RwSignal<Storefront<'static>>,
) -> impl IntoView {
    let product_id = line.product_id;
    let remove_label = format!("Remove one {}", line.name);
    let add_label = format!("Add another {}", line.name);

    view! {
        <li class="cart-line">
            <div class="cart-line-product">
                <span class="cart-line-glyph">{line.glyph}</span>
                <div>
                    <h3 class="cart-line-name">{line.name}</h3>
                    <p class="cart-line-price">{line.unit_price}</p>
                </div>
            </div>
            <div class="cart-line-controls">
                <button
                    type="button"
                    class="quantity-button quantity-button-remove"
                    aria-label=remove_label
                    on:click=move |_| remove_from_cart(storefront, product_id)
                >
                    "-"
                </button>
                <span class="cart-line-quantity">{line.quantity}</span>
                <button
                    type="button"
                    class="quantity-button quantity-button-add"
                    aria-label=add_label
                    on:click=move |_| add_to_cart(storefront, product_id)
                >
                    "+"
                </button>
            </div>
        </li>
    }
}
