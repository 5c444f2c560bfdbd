//! Menu grid with its category sidebar.

use leptos::{ev::MouseEvent, prelude::*, task};
use rustc_hash::FxHashSet;
use scoop::{
    cart::ProductId,
    catalog::{CategoryFilter, MenuView, Product, filter_by_category},
    money::format_price,
};

use crate::{
    SharedController, dom,
    flight::{self, Flight},
};

/// Shown in place of the grid when the menu cannot be fetched.
pub(crate) const MENU_LOAD_ERROR: &str = "Error loading the menu. Please refresh the page.";

/// Loading state of the catalogue.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum MenuState {
    Loading,
    Ready(Vec<Product>),
    Failed,
}

#[component]
pub(crate) fn MenuSection(
    menu: RwSignal<MenuState>,
    controller: SharedController,
    flights: RwSignal<Vec<Flight>>,
) -> impl IntoView {
    view! {
        <section id="menu" class="menu-section">
            <h2 class="section-title">"Our Flavours"</h2>
            {move || match menu.get() {
                MenuState::Loading => {
                    view! { <p class="menu-status">"Loading the menu..."</p> }.into_any()
                }
                MenuState::Failed => {
                    view! { <div class="alert alert-danger">{MENU_LOAD_ERROR}</div> }.into_any()
                }
                MenuState::Ready(products) => {
                    view! { <MenuGrid products=products controller=controller flights=flights /> }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn MenuGrid(
    products: Vec<Product>,
    controller: SharedController,
    flights: RwSignal<Vec<Flight>>,
) -> impl IntoView {
    let filter = RwSignal::new(CategoryFilter::All);
    let catalogue = StoredValue::new(products);
    let menu_view: Memo<MenuView> = Memo::new(move |_| {
        let filter = filter.get();

        catalogue.with_value(|products| filter_by_category(products, &filter))
    });
    let visible_ids = Memo::new(move |_| {
        menu_view.with(|view| view.visible_ids().into_iter().collect::<FxHashSet<ProductId>>())
    });

    view! {
        <div class="menu-layout">
            <div class="list-group category-list" role="group" aria-label="Categories">
                {move || {
                    menu_view
                        .get()
                        .controls
                        .into_iter()
                        .map(|control| {
                            let token = control.token.clone();

                            view! {
                                <a
                                    href="#menu"
                                    class="list-group-item"
                                    class:active=control.active
                                    aria-pressed=control.active.to_string()
                                    data-category=control.token
                                    on:click=move |event: MouseEvent| {
                                        event.prevent_default();
                                        filter.set(CategoryFilter::from_token(&token));
                                    }
                                >
                                    {control.label}
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="product-grid">
                {catalogue
                    .get_value()
                    .into_iter()
                    .map(|product| {
                        let product_id = product.id;
                        let visible =
                            Signal::derive(move || visible_ids.with(|ids| ids.contains(&product_id)));

                        view! {
                            <ProductCard
                                product=product
                                visible=visible
                                controller=controller
                                flights=flights
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProductCard(
    product: Product,
    visible: Signal<bool>,
    controller: SharedController,
    flights: RwSignal<Vec<Flight>>,
) -> impl IntoView {
    let product_id = product.id;
    let sold_out = product.stock == 0;
    let add_label = format!("Add {} to cart", product.name);
    let image = product.image.clone().map(|src| {
        view! { <img class="product-image" src=src alt=product.name.clone() loading="lazy" /> }
    });

    let add_to_cart = move |event: MouseEvent| {
        flight::launch(flights, dom::event_origin(&event));

        let controller = controller.get_value();

        task::spawn_local(async move {
            controller.add_item(product_id).await;
        });
    };

    view! {
        <article
            class="product-card menu-card reveal"
            data-category=product.category
            style:display=move || if visible.get() { "block" } else { "none" }
        >
            {image}
            <div class="product-body">
                <h3 class="product-name">{product.name}</h3>
                <p class="product-description">{product.description.unwrap_or_default()}</p>
                <p class="product-price">{format_price(product.price)}</p>
                <button
                    type="button"
                    class="btn btn-primary add-to-cart"
                    aria-label=add_label
                    disabled=sold_out
                    on:click=add_to_cart
                >
                    {if sold_out { "Sold out" } else { "Add to cart" }}
                </button>
            </div>
        </article>
    }
}
