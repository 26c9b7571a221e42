use leptos::prelude::*;

use super::view_model::VacationDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

/// Edit modal for one vacation request. Fetches the record on mount,
/// PUTs the three editable fields on save.
#[component]
pub fn VacationDetails(
    id: i64,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = VacationDetailsViewModel::new();
    vm.load(id);

    let form = vm.form;
    let error = vm.error;
    let is_valid = vm.is_form_valid();

    view! {
        <Modal title=format!("Edit Request #{}", id) on_close=on_close>
            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="detail-form">
                <div class="form__group">
                    <label class="form__label" for="edit-employee">{"Employee name"}</label>
                    <input
                        class="form__input"
                        type="text"
                        id="edit-employee"
                        prop:value=move || form.get().employee_name
                        on:input=move |ev| {
                            form.update(|f| f.employee_name = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form__group">
                    <label class="form__label" for="edit-start">{"Start date"}</label>
                    <input
                        class="form__input"
                        type="date"
                        id="edit-start"
                        prop:value=move || form.get().start_date
                        on:input=move |ev| {
                            form.update(|f| f.start_date = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form__group">
                    <label class="form__label" for="edit-end">{"End date"}</label>
                    <input
                        class="form__input"
                        type="date"
                        id="edit-end"
                        prop:value=move || form.get().end_date
                        on:input=move |ev| {
                            form.update(|f| f.end_date = event_target_value(&ev));
                        }
                    />
                </div>
            </div>

            <div class="modal-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| vm.save_command(id, on_saved)
                    disabled=move || !is_valid()
                >
                    {icon("save")}
                    "Save"
                </button>
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
            </div>
        </Modal>
    }
}
