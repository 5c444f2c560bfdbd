//! Cart overlay.

use leptos::{ev::MouseEvent, prelude::*, task};
use scoop::render::{CartDisplay, CartRow};

use crate::SharedController;

#[component]
pub(crate) fn CartOverlay(
    cart: RwSignal<CartDisplay>,
    open: RwSignal<bool>,
    controller: SharedController,
) -> impl IntoView {
    view! {
        <div
            class="cart-modal"
            class:cart-modal-open=move || open.get()
            role="dialog"
            aria-modal="true"
            aria-labelledby="cart-title"
            aria-hidden=move || (!open.get()).to_string()
        >
            <div class="cart-modal-dialog">
                <header class="cart-modal-header">
                    <h2 id="cart-title">"Your Cart"</h2>
                    <button
                        type="button"
                        class="btn-close"
                        aria-label="Close cart"
                        on:click=move |_| open.set(false)
                    >
                        "×"
                    </button>
                </header>
                <div id="cart-items" class="cart-items">
                    {move || match cart.get() {
                        CartDisplay::Items(view) if view.rows.is_empty() => {
                            view! { <p class="cart-empty">"Your cart is empty."</p> }.into_any()
                        }
                        CartDisplay::Items(view) => {
                            view.rows
                                .into_iter()
                                .map(|row| view! { <CartLine row=row controller=controller /> })
                                .collect_view()
                                .into_any()
                        }
                        CartDisplay::Error(message) => {
                            view! { <div class="alert alert-danger">{message}</div> }.into_any()
                        }
                    }}
                </div>
                <footer class="cart-modal-footer">
                    {move || {
                        cart.with(|display| match display {
                            CartDisplay::Items(view) => Some(view.total.clone()),
                            CartDisplay::Error(_) => None,
                        })
                        .map(|total| {
                            view! {
                                <p class="cart-total">
                                    "Total: ₹" <span id="cart-total">{total}</span>
                                </p>
                            }
                        })
                    }}
                    <a
                        id="checkout-btn"
                        href="/checkout"
                        class="btn btn-primary"
                        style:display=move || {
                            if cart.with(CartDisplay::checkout_visible) { "inline-block" } else { "none" }
                        }
                    >
                        "Checkout"
                    </a>
                </footer>
            </div>
        </div>
    }
}

#[component]
fn CartLine(row: CartRow, controller: SharedController) -> impl IntoView {
    let product_id = row.product_id;
    let caption = row.price_caption();
    let remove_label = row.remove_label();

    let remove = move |_: MouseEvent| {
        let controller = controller.get_value();

        task::spawn_local(async move {
            controller.remove_item(product_id).await;
        });
    };

    view! {
        <div class="cart-line">
            <div class="cart-line-info">
                <h6 class="cart-line-name">{row.name}</h6>
                <small class="text-muted">{caption}</small>
                {row.detail.map(|detail| view! { <small class="cart-line-detail">{detail}</small> })}
            </div>
            <div class="cart-line-actions">
                <span class="cart-line-total">{row.line_total}</span>
                <button
                    type="button"
                    class="btn btn-sm btn-outline-danger remove-from-cart"
                    aria-label=remove_label
                    on:click=remove
                >
                    <i class="fas fa-trash" aria-hidden="true"></i>
                </button>
            </div>
        </div>
    }
}
