use crate::shared::icons::icon;
use leptos::prelude::*;

/// (href, title, description, icon)
const ENTRIES: &[(&str, &str, &str, &str)] = &[
    ("/categories/new", "Create Category", "Add a new clothing category", "category"),
    ("/categories-sub/new", "Create Subcategory", "Add an item with location and pictures", "subcategory"),
    ("/customers/new", "Create Customer", "Register a new customer", "customer"),
    ("/rentals/new", "Create Rental", "Rent items to a customer", "rental"),
    ("/rentals/return", "Process Return", "Record returned items", "return"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Clothing Rental Management"</h1>
            <div class="card-grid">
                {ENTRIES
                    .iter()
                    .map(|(href, title, description, icon_name)| {
                        view! {
                            <a class="card" href=*href>
                                {icon(icon_name)}
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
