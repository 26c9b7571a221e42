use crate::domain::vacation::ui::list::VacationList;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <VacationList />
    }
}
