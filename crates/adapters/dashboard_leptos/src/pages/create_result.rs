//! "Create Result" form page.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use schooldesk_app::notice::Notice;
use schooldesk_app::services::result_form_service::{ResultFormService, settle_submit};
use schooldesk_app::services::roster_service::{FormOptions, RosterService};
use schooldesk_domain::form::ResultForm;
use schooldesk_domain::marks::MarkField;

use crate::api::HttpSchoolApi;
use crate::components::{Loading, use_toasts};
use crate::scope::use_cancel_token;

fn selected<T: ToString>(value: Option<&T>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

/// One `<select>` bound to a form selection.
#[component]
fn Picker(
    #[prop(into)] label: String,
    options: Vec<(String, String)>,
    value: Signal<String>,
    on_pick: Callback<String>,
) -> impl IntoView {
    view! {
        <label>
            {label.clone()}
            <select
                required
                prop:value=move || value.get()
                on:change=move |ev| on_pick.run(event_target_value(&ev))
            >
                <option value="">{format!("Select {label}")}</option>
                {options
                    .into_iter()
                    .map(|(id, text)| view! { <option value=id>{text}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

/// One clamped numeric input.
#[component]
fn MarkInput(field: MarkField, form: RwSignal<ResultForm>) -> impl IntoView {
    view! {
        <label>
            {field.label()}
            <input
                type="number"
                min="0"
                max=field.max().to_string()
                prop:value=move || form.with(|f| f.marks.get(field).to_string())
                on:input=move |ev| form.update(|f| f.set_mark(field, &event_target_value(&ev)))
            />
        </label>
    }
}

/// Form for recording one student's marks in one course.
#[component]
pub fn CreateResult() -> impl IntoView {
    let token = use_cancel_token();
    let toasts = use_toasts();
    let form = RwSignal::new(ResultForm::default());
    let options = RwSignal::new(FormOptions::default());
    let message = RwSignal::new(None::<String>);
    let (loading, set_loading) = signal(true);
    let (submitting, set_submitting) = signal(false);

    toasts.push(Notice::success("Welcome to Create New Result!"));

    {
        let token = token.clone();
        spawn_local(async move {
            match RosterService::new(HttpSchoolApi::default())
                .form_options(&token)
                .await
            {
                Ok(loaded) => {
                    options.try_set(loaded);
                }
                Err(err) if err.is_cancelled() => {}
                Err(err) => {
                    leptos::logging::warn!("failed to load form options: {err}");
                    toasts.push(Notice::error("Failed to fetch required data"));
                }
            }
            set_loading.try_set(false);
        });
    }

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let token = token.clone();
        let snapshot = form.get_untracked();
        let students = options.with_untracked(|o| o.students.clone());
        set_submitting.set(true);
        spawn_local(async move {
            let outcome = ResultFormService::new(HttpSchoolApi::default())
                .submit(&snapshot, &students, &token)
                .await;
            if let Some(feedback) = form.try_update(|f| settle_submit(f, &outcome)) {
                message.set(feedback.inline);
                if let Some(notice) = feedback.notice {
                    toasts.push(notice);
                }
            }
            set_submitting.try_set(false);
        });
    };

    let student_options = Signal::derive(move || {
        options.with(|o| {
            o.students
                .iter()
                .map(|s| (s.id.to_string(), s.label()))
                .collect::<Vec<_>>()
        })
    });
    let class_options = Signal::derive(move || {
        options.with(|o| {
            o.classes
                .iter()
                .map(|c| (c.id.to_string(), c.label()))
                .collect::<Vec<_>>()
        })
    });
    let course_options = Signal::derive(move || {
        options.with(|o| {
            o.courses
                .iter()
                .map(|c| (c.id.to_string(), c.label()))
                .collect::<Vec<_>>()
        })
    });
    let teacher_options = Signal::derive(move || {
        options.with(|o| {
            o.teachers
                .iter()
                .map(|t| (t.id.to_string(), t.name.clone()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div>
            <h1>"Create Result"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <Loading/> }>
                <form class="result-form" on:submit=on_submit.clone()>
                    <Picker
                        label="Student"
                        options=student_options.get()
                        value=Signal::derive(move || form.with(|f| selected(f.student.as_ref())))
                        on_pick=Callback::new(move |raw: String| form.update(|f| f.select_student(&raw)))
                    />
                    <Picker
                        label="Class"
                        options=class_options.get()
                        value=Signal::derive(move || form.with(|f| selected(f.class.as_ref())))
                        on_pick=Callback::new(move |raw: String| form.update(|f| f.select_class(&raw)))
                    />
                    <Picker
                        label="Course"
                        options=course_options.get()
                        value=Signal::derive(move || form.with(|f| selected(f.course.as_ref())))
                        on_pick=Callback::new(move |raw: String| form.update(|f| f.select_course(&raw)))
                    />
                    <Picker
                        label="Teacher"
                        options=teacher_options.get()
                        value=Signal::derive(move || form.with(|f| selected(f.teacher.as_ref())))
                        on_pick=Callback::new(move |raw: String| form.update(|f| f.select_teacher(&raw)))
                    />
                    {MarkField::ALL
                        .into_iter()
                        .map(|field| view! { <MarkInput field=field form=form/> })
                        .collect_view()}
                    <p class="form-total">
                        "Total: " {move || form.with(|f| f.marks.total())}
                        " \u{00B7} " {move || form.with(|f| f.marks.grade().to_string())}
                    </p>
                    <button class="btn btn-primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Saving\u{2026}" } else { "Add Result" }}
                    </button>
                    <Show when=move || message.with(Option::is_some)>
                        <p class="form-message">{move || message.get().unwrap_or_default()}</p>
                    </Show>
                </form>
            </Show>
        </div>
    }
}
