mod create_form;

use leptos::prelude::*;

use contracts::domain::vacation::aggregate::{VacationRequest, VacationStatus};
use contracts::domain::vacation::filter::VacationFilter;
use contracts::shared::stats::StatsSummary;

use crate::domain::vacation::api;
use crate::domain::vacation::ui::details::VacationDetails;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::icons::icon;
use create_form::VacationCreateForm;

/// Row view-model: everything pre-formatted for display
#[derive(Clone, Debug)]
pub struct VacationRow {
    pub id: i64,
    pub employee_name: String,
    pub start_date: String,
    pub end_date: String,
    pub status: VacationStatus,
    pub created_at: String,
}

impl From<VacationRequest> for VacationRow {
    fn from(v: VacationRequest) -> Self {
        Self {
            id: v.id,
            employee_name: v.employee_name,
            start_date: format_date(&v.start_date),
            end_date: format_date(&v.end_date),
            status: v.status,
            created_at: format_datetime(&v.created_at),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn VacationList() -> impl IntoView {
    let (rows, set_rows) = signal::<Vec<VacationRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (stats, set_stats) = signal::<Option<StatsSummary>>(None);
    let (editing_id, set_editing_id) = signal::<Option<i64>>(None);
    // Filter state is owned here and applied only when a reload is triggered
    let filter = RwSignal::new(VacationFilter::default());
    // Monotonic sequence: overlapping reloads race, only the newest may render
    let list_seq = StoredValue::new(0u64);

    let load_vacations = move || {
        let current = filter.get_untracked();
        let seq = list_seq.get_value() + 1;
        list_seq.set_value(seq);
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_vacations(&current).await;
            if list_seq.get_value() != seq {
                // a newer reload was started while this one was in flight
                return;
            }
            match result {
                Ok(items) => {
                    set_rows.set(items.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load vacations: {e}");
                    set_error.set(Some("Failed to load vacation requests".to_string()));
                }
            }
        });
    };

    // Stats failures are logged only: the counters are not critical
    let load_stats = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_stats().await {
                Ok(s) => set_stats.set(Some(s)),
                Err(e) => log::error!("failed to load stats: {e}"),
            }
        });
    };

    let reload_all = move || {
        load_vacations();
        load_stats();
    };

    let handle_status = move |id: i64, status: VacationStatus| {
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_status(id, status).await {
                Ok(()) => {
                    load_vacations();
                    load_stats();
                }
                Err(e) => {
                    log::error!("failed to update status of {id}: {e}");
                    set_error.set(Some("Failed to update status".to_string()));
                }
            }
        });
    };

    let handle_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Are you sure you want to delete this request?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_vacation(id).await {
                Ok(()) => {
                    load_vacations();
                    load_stats();
                }
                Err(e) => {
                    log::error!("failed to delete {id}: {e}");
                    set_error.set(Some("Failed to delete vacation request".to_string()));
                }
            }
        });
    };

    let apply_filters = move |_| load_vacations();
    let reset_filters = move |_| {
        filter.set(VacationFilter::default());
        load_vacations();
    };

    reload_all();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Vacation Requests"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| reload_all()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            <div class="stat-cards">
                <StatCard
                    label="Total".to_string()
                    icon_name="calendar".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.total))
                />
                <StatCard
                    label="Pending".to_string()
                    icon_name="calendar".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.pending))
                    modifier="pending".to_string()
                />
                <StatCard
                    label="Approved".to_string()
                    icon_name="check".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.approved))
                    modifier="approved".to_string()
                />
                <StatCard
                    label="Rejected".to_string()
                    icon_name="x".to_string()
                    value=Signal::derive(move || stats.get().map(|s| s.rejected))
                    modifier="rejected".to_string()
                />
            </div>

            <VacationCreateForm on_created=Callback::new(move |_| reload_all()) />

            <div class="filter-panel">
                <div class="filter-panel-header">
                    {icon("filter")}
                    <span class="filter-panel__title">{"Filters"}</span>
                    {move || {
                        let active = filter.get().active_count();
                        (active > 0).then(|| view! {
                            <span class="filter-panel__badge">{active}</span>
                        })
                    }}
                </div>
                <div class="filter-panel-content">
                    <div class="form__group">
                        <label class="form__label" for="employee-filter">{"Employee"}</label>
                        <input
                            class="form__input"
                            type="text"
                            id="employee-filter"
                            placeholder="Name contains..."
                            prop:value=move || filter.get().employee
                            on:input=move |ev| {
                                filter.update(|f| f.employee = event_target_value(&ev));
                            }
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="status-filter">{"Status"}</label>
                        <select
                            class="form__input"
                            id="status-filter"
                            prop:value=move || filter.get().status
                            on:change=move |ev| {
                                filter.update(|f| f.status = event_target_value(&ev));
                            }
                        >
                            <option value="">{"All statuses"}</option>
                            <option value="pending">{"Pending"}</option>
                            <option value="approved">{"Approved"}</option>
                            <option value="rejected">{"Rejected"}</option>
                        </select>
                    </div>
                    <div class="filter-panel__actions">
                        <button class="button button--primary" on:click=apply_filters>
                            {"Apply"}
                        </button>
                        <button class="button button--secondary" on:click=reset_filters>
                            {"Reset"}
                        </button>
                    </div>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"ID"}</th>
                            <th class="table__header-cell">{"Employee"}</th>
                            <th class="table__header-cell">{"Start"}</th>
                            <th class="table__header-cell">{"End"}</th>
                            <th class="table__header-cell">{"Status"}</th>
                            <th class="table__header-cell">{"Created"}</th>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|row| {
                            let id = row.id;
                            let badge_class = format!("status-badge status-{}", row.status.as_str());
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.id}</td>
                                    // Text node: markup in the name renders literally
                                    <td class="table__cell">{row.employee_name}</td>
                                    <td class="table__cell">{row.start_date}</td>
                                    <td class="table__cell">{row.end_date}</td>
                                    <td class="table__cell">
                                        <span class=badge_class>{row.status.display_label()}</span>
                                    </td>
                                    <td class="table__cell">{row.created_at}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--icon action-approve"
                                            title="Approve"
                                            on:click=move |_| handle_status(id, VacationStatus::Approved)
                                        >
                                            {icon("check")}
                                        </button>
                                        <button
                                            class="button button--icon action-reject"
                                            title="Reject"
                                            on:click=move |_| handle_status(id, VacationStatus::Rejected)
                                        >
                                            {icon("x")}
                                        </button>
                                        <button
                                            class="button button--icon action-edit"
                                            title="Edit"
                                            on:click=move |_| set_editing_id.set(Some(id))
                                        >
                                            {icon("edit")}
                                        </button>
                                        <button
                                            class="button button--icon action-delete"
                                            title="Delete"
                                            on:click=move |_| handle_delete(id)
                                        >
                                            {icon("trash")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            {move || editing_id.get().map(|id| view! {
                <VacationDetails
                    id=id
                    on_saved=Callback::new(move |_| {
                        set_editing_id.set(None);
                        reload_all();
                    })
                    on_close=Callback::new(move |_| set_editing_id.set(None))
                />
            })}
        </div>
    }
}
