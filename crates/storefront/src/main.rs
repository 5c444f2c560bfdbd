//! Scoop storefront: the browser front end for the shop.

use std::rc::Rc;

use leptos::{prelude::*, task};
use scoop::{
    api::{StorefrontApi, http::HttpStorefrontApi},
    controller::CartController,
};
use tracing::warn;

mod cart;
mod contact;
mod dom;
mod flight;
mod menu;
mod navbar;
mod page;
mod reveal;
mod scroll;
mod sections;

use menu::MenuState;
use page::SignalPage;

type Controller = CartController<HttpStorefrontApi, SignalPage>;

/// Controller shared by every component; the browser runs everything on one thread.
type SharedController = StoredValue<Rc<Controller>, LocalStorage>;

/// Storefront shell.
#[component]
fn App() -> impl IntoView {
    match dom::storefront_config() {
        Ok(config) => {
            let token_warning = dom::missing_token_warning(&config);
            if let Some(message) = token_warning {
                dom::console_warn(message);
            }

            let page = SignalPage::new();
            let menu = RwSignal::new(MenuState::Loading);
            let scroll_y = RwSignal::new(0.0_f64);
            let flights = RwSignal::new(Vec::<flight::Flight>::new());

            let controller: SharedController = StoredValue::new_local(Rc::new(
                CartController::new(HttpStorefrontApi::new(config.clone()), page, &config),
            ));

            scroll::install_scroll_listener(scroll_y);
            reveal::install_reveal_observer(menu);

            let initial = controller.get_value();
            task::spawn_local(async move {
                initial.refresh_cart().await;
            });

            let catalogue = controller.get_value();
            task::spawn_local(async move {
                match catalogue.api().catalog().await {
                    Ok(products) => menu.set(MenuState::Ready(products)),
                    Err(error) => {
                        warn!(%error, "failed to load menu");

                        menu.set(MenuState::Failed);
                    }
                }
            });

            view! {
                <navbar::Navbar
                    scroll_y=scroll_y
                    cart=page.cart
                    overlay_open=page.overlay_open
                />
                {token_warning
                    .map(|message| {
                        view! {
                            <div class="alert alert-warning storefront-banner" role="alert">
                                {message}
                            </div>
                        }
                    })}
                <sections::Hero scroll_y=scroll_y />
                <main>
                    <menu::MenuSection menu=menu controller=controller flights=flights />
                    <sections::About />
                    <contact::ContactSection controller=controller />
                </main>
                <cart::CartOverlay cart=page.cart open=page.overlay_open controller=controller />
                <flight::FlightLayer flights=flights />
            }
            .into_any()
        }
        Err(error_message) => view! {
            <main class="storefront-error">
                <h1>"Scoop"</h1>
                <div class="alert alert-danger">
                    <p>{error_message}</p>
                </div>
            </main>
        }
        .into_any(),
    }
}

fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}
