use contracts::domain::vacation::aggregate::VacationRequestDto;
use leptos::prelude::*;

use crate::domain::vacation::api;

/// ViewModel for the vacation edit form
#[derive(Clone, Copy)]
pub struct VacationDetailsViewModel {
    pub form: RwSignal<VacationRequestDto>,
    pub error: RwSignal<Option<String>>,
}

impl VacationDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(VacationRequestDto::default()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool {
        let form = self.form;
        move || {
            let f = form.get();
            !f.employee_name.trim().is_empty()
                && !f.start_date.is_empty()
                && !f.end_date.is_empty()
        }
    }

    /// Load the record into the form
    pub fn load(&self, id: i64) {
        let form = self.form;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_by_id(id).await {
                Ok(v) => {
                    form.set(VacationRequestDto {
                        employee_name: v.employee_name,
                        start_date: v.start_date.to_string(),
                        end_date: v.end_date.to_string(),
                    });
                    error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load vacation {id}: {e}");
                    error.set(Some("Failed to load vacation request".to_string()));
                }
            }
        });
    }

    /// Submit the full edit (PUT) and notify the caller on success
    pub fn save_command(&self, id: i64, on_saved: Callback<()>) {
        let current = self.form.get();

        if current.employee_name.trim().is_empty()
            || current.start_date.is_empty()
            || current.end_date.is_empty()
        {
            self.error
                .set(Some("Please fill in all fields".to_string()));
            return;
        }

        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_vacation(id, &current).await {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("failed to update vacation {id}: {e}");
                    error.set(Some("Failed to update vacation request".to_string()));
                }
            }
        });
    }
}
