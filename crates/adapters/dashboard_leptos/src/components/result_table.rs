//! Results board table with per-row actions.

use leptos::prelude::*;
use schooldesk_domain::id::ResultId;
use schooldesk_domain::result::ExamResult;

const COLUMNS: usize = 13;

fn row(result: ExamResult, busy: ReadSignal<bool>, on_delete: Callback<ResultId>) -> impl IntoView {
    let total = result.total();
    let grade = result.grade();
    let grade_class = if grade.is_pass() { "grade-pass" } else { "grade-fail" };
    let id = result.id.clone();

    view! {
        <tr>
            <td>{result.student.display(|s| &s.registration_number)}</td>
            <td>{result.student.display(|s| &s.name)}</td>
            <td>{result.course.display(|c| &c.code)}</td>
            <td>{result.course.display(|c| &c.name)}</td>
            <td>{result.teacher.display(|t| &t.name)}</td>
            <td>{result.marks.mid}</td>
            <td>{result.marks.session}</td>
            <td>{result.marks.final_exam}</td>
            <td><strong>{total}</strong></td>
            <td class=grade_class>{grade.to_string()}</td>
            <td>{result.class.display(|c| &c.name)}</td>
            <td>{result.class.display(|c| &c.section)}</td>
            <td>
                // Editing is not offered yet; the button is shown but inert.
                <button class="btn btn-secondary" title="Edit">"Edit"</button>
                <button
                    class="btn btn-danger"
                    disabled=move || busy.get()
                    on:click=move |_| on_delete.run(id.clone())
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

/// The results table, re-rendered whenever `results` changes.
#[component]
pub fn ResultTable(
    results: RwSignal<Vec<ExamResult>>,
    /// Disables row actions while a delete is in flight.
    busy: ReadSignal<bool>,
    on_delete: Callback<ResultId>,
) -> impl IntoView {
    view! {
        <table>
            <thead>
                <tr>
                    <th>"REG_No"</th>
                    <th>"Student Name"</th>
                    <th>"Course Code"</th>
                    <th>"Course Name"</th>
                    <th>"Teacher"</th>
                    <th>"Mid (18)"</th>
                    <th>"Session (6)"</th>
                    <th>"Final (36)"</th>
                    <th>"Total (60)"</th>
                    <th>"Grade"</th>
                    <th>"Class"</th>
                    <th>"Section"</th>
                    <th><span class="sr-only">"Actions"</span></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let rows = results.get();
                    if rows.is_empty() {
                        view! {
                            <tr>
                                <td colspan=COLUMNS.to_string()>"No Results available"</td>
                            </tr>
                        }
                        .into_any()
                    } else {
                        rows.into_iter()
                            .map(|result| row(result, busy, on_delete))
                            .collect_view()
                            .into_any()
                    }
                }}
            </tbody>
        </table>
    }
}
