use leptos::prelude::*;

use sweet_treats::{
    products::{Product, ProductId},
    storefront::Storefront,
};

use crate::{cart::add_to_cart, format_money};

/// UI model for a product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardItem {
    /// Catalog identifier.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Card description.
    pub description: String,

    /// Display price.
    pub price: String,

    /// Display glyph.
    pub glyph: String,
}

impl From<&Product<'_>> for ProductCardItem {
    fn from(product: &Product<'_>) -> Self {
        ProductCardItem {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: format_money(&product.price),
            glyph: product.glyph.clone(),
        }
    }
}

/// Build card models for every catalog product, in catalog order.
pub fn product_cards(storefront: &Storefront<'_>) -> Vec<ProductCardItem> {
    storefront
        .catalog()
        .iter()
        .map(ProductCardItem::from)
        .collect()
}

#[component]
fn ProductCard(
    product: ProductCardItem,
    storefront: RwSignal<Storefront<'static>>,
) -> impl IntoView {
    let product_id = product.id;

    view! {
        <article class="product-card">
            <div class="product-card-glyph">
                <span>{product.glyph}</span>
            </div>
            <div class="product-card-body">
                <h3 class="product-card-name">{product.name}</h3>
                <p class="product-card-description">{product.description}</p>
                <div class="product-card-footer">
                    <span class="product-card-price">{product.price}</span>
                    <button
                        type="button"
                        class="button-primary"
                        on:click=move |_| add_to_cart(storefront, product_id)
                    >
                        "Add to Cart"
                    </button>
                </div>
            </div>
        </article>
    }
}

/// Grid of product cards.
#[component]
pub fn ProductGrid(
    /// Shopping session.
    storefront: RwSignal<Storefront<'static>>,
) -> impl IntoView {
    let cards = storefront.with_untracked(product_cards);

    view! {
        <section class="container product-grid">
            {cards
                .into_iter()
                .map(|product| view! { <ProductCard product=product storefront=storefront /> })
                .collect_view()}
        </section>
    }
}
