use crate::domain::a001_category::ui::details::CategoryDetails;
use crate::domain::a002_category_sub::ui::details::CategorySubDetails;
use crate::domain::a004_customer::ui::details::CustomerDetails;
use crate::domain::a005_rental::ui::create::RentalCreatePage;
use crate::domain::a005_rental::ui::return_form::RentalReturnPage;
use crate::layout::Shell;
use crate::routes::home::HomePage;
use crate::system::pages::login::LoginPage;
use contracts::shared::form_settings::FormMode;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Shell>
            <div class="form-page">
                <h1>"Page not found"</h1>
                <a href="/">"Back to home"</a>
            </div>
        </Shell>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/") view=|| view! { <Shell><HomePage /></Shell> } />
                <Route
                    path=path!("/categories/new")
                    view=|| view! { <Shell><CategoryDetails mode=FormMode::Create /></Shell> }
                />
                <Route
                    path=path!("/categories/edit")
                    view=|| view! { <Shell><CategoryDetails mode=FormMode::Edit /></Shell> }
                />
                <Route
                    path=path!("/categories-sub/new")
                    view=|| view! { <Shell><CategorySubDetails mode=FormMode::Create /></Shell> }
                />
                <Route
                    path=path!("/categories-sub/edit")
                    view=|| view! { <Shell><CategorySubDetails mode=FormMode::Edit /></Shell> }
                />
                <Route
                    path=path!("/customers/new")
                    view=|| view! { <Shell><CustomerDetails /></Shell> }
                />
                <Route
                    path=path!("/rentals/new")
                    view=|| view! { <Shell><RentalCreatePage /></Shell> }
                />
                <Route
                    path=path!("/rentals/return")
                    view=|| view! { <Shell><RentalReturnPage /></Shell> }
                />
            </Routes>
        </Router>
    }
}
