use leptos::prelude::*;

use contracts::domain::vacation::aggregate::VacationRequestDto;

use crate::domain::vacation::api;
use crate::shared::icons::icon;

/// Inline form for submitting a new vacation request.
///
/// On success the form is reset and `on_created` fires; on failure the
/// form keeps its values and the server's error message is shown.
#[component]
#[allow(non_snake_case)]
pub fn VacationCreateForm(on_created: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(VacationRequestDto::default());
    let (error, set_error) = signal::<Option<String>>(None);

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let dto = form.get();
        if dto.employee_name.trim().is_empty()
            || dto.start_date.is_empty()
            || dto.end_date.is_empty()
        {
            set_error.set(Some("Please fill in all fields".to_string()));
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match api::create_vacation(&dto).await {
                Ok(_) => {
                    form.set(VacationRequestDto::default());
                    set_error.set(None);
                    on_created.run(());
                }
                Err(e) => {
                    log::error!("failed to create vacation request: {e}");
                    set_error.set(Some(e));
                }
            }
        });
    };

    view! {
        <div class="create-form">
            <h2 class="create-form__title">{"New Vacation Request"}</h2>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <form class="create-form__fields" on:submit=handle_submit>
                <div class="form__group">
                    <label class="form__label" for="employee-name">{"Employee name"}</label>
                    <input
                        class="form__input"
                        type="text"
                        id="employee-name"
                        placeholder="Full name"
                        prop:value=move || form.get().employee_name
                        on:input=move |ev| {
                            form.update(|f| f.employee_name = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form__group">
                    <label class="form__label" for="start-date">{"Start date"}</label>
                    <input
                        class="form__input"
                        type="date"
                        id="start-date"
                        prop:value=move || form.get().start_date
                        on:input=move |ev| {
                            form.update(|f| f.start_date = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form__group">
                    <label class="form__label" for="end-date">{"End date"}</label>
                    <input
                        class="form__input"
                        type="date"
                        id="end-date"
                        prop:value=move || form.get().end_date
                        on:input=move |ev| {
                            form.update(|f| f.end_date = event_target_value(&ev));
                        }
                    />
                </div>

                <button class="button button--primary" type="submit">
                    {icon("plus")}
                    {"Create"}
                </button>
            </form>
        </div>
    }
}
