use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{ApiClient, ExpenseFilter};
use crate::components::layout::page_shell;
use crate::components::notice::{self, NoticeHandle, NoticeKind};
use crate::model::{Category, Expense};
use crate::session::SessionHandle;
use crate::viewmodel::{format_currency, format_date, sort_date_desc, validate_expense};

/// Row actions arrive as explicit commands keyed by expense id; the table
/// itself knows nothing about what editing or deleting entails.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum RowCommand {
    Edit(i64),
    Delete(i64),
}

fn confirm_delete() -> bool {
    web_sys::window()
        .map(|window| {
            window
                .confirm_with_message("Are you sure you want to delete this expense?")
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

#[function_component(ExpensesPage)]
pub fn expenses_page() -> Html {
    let session = use_context::<SessionHandle>().expect("session context not provided");
    let notices = use_context::<NoticeHandle>().expect("notice context not provided");

    let filter_category = use_state(|| None::<Category>);
    let filter_start = use_state(String::new);
    let filter_end = use_state(String::new);
    let loading = use_state(|| true);

    // Edit modal state; populated from the cache when an Edit command fires.
    let editing = use_state(|| None::<i64>);
    let edit_date = use_state(String::new);
    let edit_category = use_state(|| None::<Category>);
    let edit_amount = use_state(String::new);
    let edit_note = use_state(String::new);

    let run_fetch = {
        let session = session.clone();
        let notices = notices.clone();
        let loading = loading.clone();
        Callback::from(move |filter: ExpenseFilter| {
            let session = session.clone();
            let notices = notices.clone();
            let loading = loading.clone();
            loading.set(true);
            spawn_local(async move {
                let api = ApiClient::new(session.token.clone());
                match api.list_expenses(&filter).await {
                    Ok(expenses) => {
                        session.set((*session).clone().with_expenses(expenses));
                    }
                    Err(err) => {
                        notice::show(&notices, NoticeKind::Error, err.to_string());
                    }
                }
                loading.set(false);
            });
        })
    };

    // Reads the filter inputs as they stand; empty dates are not sent.
    let load_current = {
        let filter_category = filter_category.clone();
        let filter_start = filter_start.clone();
        let filter_end = filter_end.clone();
        let run_fetch = run_fetch.clone();
        Callback::from(move |_: ()| {
            let start = filter_start.trim().to_string();
            let end = filter_end.trim().to_string();
            run_fetch.emit(ExpenseFilter {
                category: *filter_category,
                start_date: (!start.is_empty()).then_some(start),
                end_date: (!end.is_empty()).then_some(end),
            });
        })
    };

    {
        let load_current = load_current.clone();
        use_effect_with_deps(
            move |_| {
                load_current.emit(());
                || ()
            },
            (),
        );
    }

    let on_apply = {
        let load_current = load_current.clone();
        Callback::from(move |_| load_current.emit(()))
    };

    let on_clear = {
        let filter_category = filter_category.clone();
        let filter_start = filter_start.clone();
        let filter_end = filter_end.clone();
        let run_fetch = run_fetch.clone();
        Callback::from(move |_| {
            filter_category.set(None);
            filter_start.set(String::new());
            filter_end.set(String::new());
            run_fetch.emit(ExpenseFilter::default());
        })
    };

    let on_row = {
        let session = session.clone();
        let notices = notices.clone();
        let load_current = load_current.clone();
        let editing = editing.clone();
        let edit_date = edit_date.clone();
        let edit_category = edit_category.clone();
        let edit_amount = edit_amount.clone();
        let edit_note = edit_note.clone();
        Callback::from(move |command: RowCommand| match command {
            RowCommand::Edit(id) => {
                if let Some(expense) = session.expenses.iter().find(|e| e.id == id) {
                    edit_date.set(expense.date.to_string());
                    edit_category.set(Some(expense.category));
                    edit_amount.set(expense.amount.to_string());
                    edit_note.set(expense.note.clone().unwrap_or_default());
                    editing.set(Some(id));
                }
            }
            RowCommand::Delete(id) => {
                if !confirm_delete() {
                    return;
                }
                let session = session.clone();
                let notices = notices.clone();
                let load_current = load_current.clone();
                spawn_local(async move {
                    let api = ApiClient::new(session.token.clone());
                    match api.delete_expense(id).await {
                        Ok(()) => {
                            notice::show(
                                &notices,
                                NoticeKind::Success,
                                "Expense deleted successfully!",
                            );
                            load_current.emit(());
                        }
                        Err(err) => {
                            notice::show(&notices, NoticeKind::Error, err.to_string());
                        }
                    }
                });
            }
        })
    };

    let close_modal = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(None))
    };

    let on_edit_submit = {
        let session = session.clone();
        let notices = notices.clone();
        let load_current = load_current.clone();
        let editing = editing.clone();
        let edit_date = edit_date.clone();
        let edit_category = edit_category.clone();
        let edit_amount = edit_amount.clone();
        let edit_note = edit_note.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(id) = *editing else {
                return;
            };
            let draft = match validate_expense(&edit_date, *edit_category, &edit_amount, &edit_note)
            {
                Ok(draft) => draft,
                Err(msg) => {
                    notice::show(&notices, NoticeKind::Warning, msg);
                    return;
                }
            };
            let session = session.clone();
            let notices = notices.clone();
            let load_current = load_current.clone();
            let editing = editing.clone();
            spawn_local(async move {
                let api = ApiClient::new(session.token.clone());
                match api.update_expense(id, &draft).await {
                    Ok(()) => {
                        notice::show(&notices, NoticeKind::Success, "Expense updated successfully!");
                        editing.set(None);
                        load_current.emit(());
                    }
                    Err(err) => {
                        notice::show(&notices, NoticeKind::Error, err.to_string());
                    }
                }
            });
        })
    };

    let expenses = sort_date_desc(session.expenses.clone());
    let count_badge = format!(
        "{} expense{}",
        expenses.len(),
        if expenses.len() == 1 { "" } else { "s" }
    );

    html! {
        { page_shell(
            "Expenses",
            html! {
                <span class="text-sm font-semibold text-slate-500 bg-slate-100 px-3 py-1 rounded-full">
                    { count_badge }
                </span>
            },
            html! {
                <>
                    <div class="bg-white rounded-[10px] border border-slate-200 p-4 flex flex-wrap items-end gap-3">
                        <div class="space-y-1">
                            <label class="text-xs font-medium text-slate-500">{"Category"}</label>
                            <select
                                class="px-3 py-2 border border-slate-300 rounded-lg bg-white text-sm"
                                onchange={{
                                    let filter_category = filter_category.clone();
                                    Callback::from(move |e: Event| {
                                        let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                        filter_category.set(Category::from_label(&select.value()));
                                    })
                                }}
                            >
                                <option value="" selected={filter_category.is_none()}>{"All categories"}</option>
                                { for Category::ALL.iter().map(|c| html! {
                                    <option value={c.as_str()} selected={*filter_category == Some(*c)}>{ c.as_str() }</option>
                                }) }
                            </select>
                        </div>
                        <div class="space-y-1">
                            <label class="text-xs font-medium text-slate-500">{"From"}</label>
                            <input
                                type="date"
                                class="px-3 py-2 border border-slate-300 rounded-lg text-sm"
                                value={(*filter_start).clone()}
                                oninput={{
                                    let filter_start = filter_start.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        filter_start.set(input.value());
                                    })
                                }}
                            />
                        </div>
                        <div class="space-y-1">
                            <label class="text-xs font-medium text-slate-500">{"To"}</label>
                            <input
                                type="date"
                                class="px-3 py-2 border border-slate-300 rounded-lg text-sm"
                                value={(*filter_end).clone()}
                                oninput={{
                                    let filter_end = filter_end.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        filter_end.set(input.value());
                                    })
                                }}
                            />
                        </div>
                        <button onclick={on_apply} class="bg-indigo-600 text-white px-4 py-2 rounded-lg text-sm font-semibold hover:opacity-90">
                            {"Apply"}
                        </button>
                        <button onclick={on_clear} class="bg-slate-100 text-slate-600 px-4 py-2 rounded-lg text-sm font-semibold hover:bg-slate-200">
                            {"Clear"}
                        </button>
                    </div>

                    {
                        if *loading && expenses.is_empty() {
                            html! { <p class="text-sm text-slate-500">{"Loading..."}</p> }
                        } else if expenses.is_empty() {
                            html! {
                                <div class="bg-white rounded-[10px] border border-slate-200 p-10 text-center text-slate-500">
                                    <p class="text-3xl mb-2">{"🧾"}</p>
                                    <p>{"No expenses found."}</p>
                                </div>
                            }
                        } else {
                            expense_table(&expenses, &on_row)
                        }
                    }

                    { edit_modal(
                        *editing,
                        &edit_date,
                        &edit_category,
                        &edit_amount,
                        &edit_note,
                        &on_edit_submit,
                        &close_modal,
                    ) }
                </>
            },
        ) }
    }
}

fn expense_table(expenses: &[Expense], on_row: &Callback<RowCommand>) -> Html {
    html! {
        <div class="bg-white rounded-[10px] border border-slate-200 overflow-hidden">
            <table class="w-full text-sm">
                <thead>
                    <tr class="text-left text-xs uppercase tracking-wide text-slate-500 border-b border-slate-200">
                        <th class="px-6 py-3">{"Date"}</th>
                        <th class="px-6 py-3">{"Category"}</th>
                        <th class="px-6 py-3">{"Amount"}</th>
                        <th class="px-6 py-3">{"Note"}</th>
                        <th class="px-6 py-3 text-right">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-slate-100">
                    { for expenses.iter().map(|expense| {
                        let edit = {
                            let on_row = on_row.clone();
                            let id = expense.id;
                            Callback::from(move |_| on_row.emit(RowCommand::Edit(id)))
                        };
                        let delete = {
                            let on_row = on_row.clone();
                            let id = expense.id;
                            Callback::from(move |_| on_row.emit(RowCommand::Delete(id)))
                        };
                        html! {
                            <tr>
                                <td class="px-6 py-3 text-slate-600">{ format_date(expense.date) }</td>
                                <td class="px-6 py-3">
                                    <span class="inline-flex items-center gap-1 bg-slate-100 rounded-full px-3 py-1 text-xs font-medium text-slate-700">
                                        { expense.category.glyph() }{ " " }{ expense.category.as_str() }
                                    </span>
                                </td>
                                <td class="px-6 py-3 font-bold text-slate-800">{ format_currency(expense.amount) }</td>
                                <td class="px-6 py-3 text-slate-600">{ expense.note.clone().unwrap_or_else(|| "-".to_string()) }</td>
                                <td class="px-6 py-3 text-right space-x-2">
                                    <button onclick={edit} class="text-indigo-600 hover:text-indigo-800 font-semibold">{"Edit"}</button>
                                    <button onclick={delete} class="text-red-500 hover:text-red-700 font-semibold">{"Delete"}</button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}

#[allow(clippy::too_many_arguments)]
fn edit_modal(
    editing: Option<i64>,
    date: &UseStateHandle<String>,
    category: &UseStateHandle<Option<Category>>,
    amount: &UseStateHandle<String>,
    note: &UseStateHandle<String>,
    on_submit: &Callback<SubmitEvent>,
    on_close: &Callback<MouseEvent>,
) -> Html {
    if editing.is_none() {
        return html! {};
    }

    html! {
        <div class="fixed inset-0 z-40 flex items-center justify-center">
            <div class="absolute inset-0 bg-black/40" onclick={on_close.clone()}></div>
            <div class="relative bg-white rounded-2xl shadow-xl p-6 w-full max-w-md">
                <div class="flex items-center justify-between mb-4">
                    <h3 class="text-lg font-bold text-slate-800">{"Edit Expense"}</h3>
                    <button class="text-slate-400 hover:text-slate-600" onclick={on_close.clone()}>{"✕"}</button>
                </div>
                <form class="space-y-4" onsubmit={on_submit.clone()}>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-slate-700">{"Date"}</label>
                        <input
                            type="date"
                            class="w-full px-4 py-2 border border-slate-300 rounded-lg"
                            value={(**date).clone()}
                            oninput={{
                                let date = date.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    date.set(input.value());
                                })
                            }}
                        />
                    </div>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-slate-700">{"Category"}</label>
                        <select
                            class="w-full px-4 py-2 border border-slate-300 rounded-lg bg-white"
                            onchange={{
                                let category = category.clone();
                                Callback::from(move |e: Event| {
                                    let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                    category.set(Category::from_label(&select.value()));
                                })
                            }}
                        >
                            { for Category::ALL.iter().map(|c| html! {
                                <option value={c.as_str()} selected={**category == Some(*c)}>{ c.as_str() }</option>
                            }) }
                        </select>
                    </div>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-slate-700">{"Amount"}</label>
                        <input
                            type="number"
                            step="0.01"
                            min="0"
                            class="w-full px-4 py-2 border border-slate-300 rounded-lg"
                            value={(**amount).clone()}
                            oninput={{
                                let amount = amount.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    amount.set(input.value());
                                })
                            }}
                        />
                    </div>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-slate-700">{"Note"}</label>
                        <input
                            type="text"
                            class="w-full px-4 py-2 border border-slate-300 rounded-lg"
                            value={(**note).clone()}
                            oninput={{
                                let note = note.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    note.set(input.value());
                                })
                            }}
                        />
                    </div>
                    <div class="flex justify-end gap-2 pt-2">
                        <button type="button" class="px-4 py-2 rounded-lg text-sm font-semibold bg-slate-100 text-slate-600 hover:bg-slate-200" onclick={on_close.clone()}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="px-4 py-2 rounded-lg text-sm font-semibold bg-indigo-600 text-white hover:opacity-90">
                            {"Save changes"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
