use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::layout::page_shell;
use crate::components::notice::{self, NoticeHandle, NoticeKind};
use crate::model::Category;
use crate::session::SessionHandle;
use crate::viewmodel::validate_expense;

fn today() -> String {
    chrono::Local::now().date_naive().to_string()
}

#[function_component(AddExpensePage)]
pub fn add_expense_page() -> Html {
    let session = use_context::<SessionHandle>().expect("session context not provided");
    let notices = use_context::<NoticeHandle>().expect("notice context not provided");

    let date = use_state(today);
    let category = use_state(|| None::<Category>);
    let amount = use_state(String::new);
    let note = use_state(String::new);
    let saving = use_state(|| false);

    let on_submit = {
        let session = session.clone();
        let notices = notices.clone();
        let date = date.clone();
        let category = category.clone();
        let amount = amount.clone();
        let note = note.clone();
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let draft = match validate_expense(&date, *category, &amount, &note) {
                Ok(draft) => draft,
                Err(msg) => {
                    notice::show(&notices, NoticeKind::Warning, msg);
                    return;
                }
            };

            saving.set(true);
            let session = session.clone();
            let notices = notices.clone();
            let date = date.clone();
            let category = category.clone();
            let amount = amount.clone();
            let note = note.clone();
            let saving = saving.clone();
            spawn_local(async move {
                let api = ApiClient::new(session.token.clone());
                match api.create_expense(&draft).await {
                    Ok(()) => {
                        notice::show(&notices, NoticeKind::Success, "Expense added successfully!");
                        date.set(today());
                        category.set(None);
                        amount.set(String::new());
                        note.set(String::new());
                    }
                    Err(err) => {
                        notice::show(&notices, NoticeKind::Error, err.to_string());
                    }
                }
                saving.set(false);
            });
        })
    };

    html! {
        { page_shell(
            "Add Expense",
            html! {},
            html! {
                <div class="bg-white rounded-[10px] border border-slate-200 p-6 max-w-xl">
                    <form class="space-y-4" onsubmit={on_submit}>
                        <div class="space-y-1">
                            <label class="text-sm font-medium text-slate-700">{"Date"}</label>
                            <input
                                type="date"
                                class="w-full px-4 py-2 border border-slate-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-indigo-500"
                                value={(*date).clone()}
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
                                class="w-full px-4 py-2 border border-slate-300 rounded-lg bg-white focus:outline-none focus:ring-2 focus:ring-indigo-500"
                                onchange={{
                                    let category = category.clone();
                                    Callback::from(move |e: Event| {
                                        let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                        category.set(Category::from_label(&select.value()));
                                    })
                                }}
                            >
                                <option value="" selected={category.is_none()}>{"Select category"}</option>
                                { for Category::ALL.iter().map(|c| html! {
                                    <option value={c.as_str()} selected={*category == Some(*c)}>
                                        { format!("{} {}", c.glyph(), c.as_str()) }
                                    </option>
                                }) }
                            </select>
                        </div>

                        <div class="space-y-1">
                            <label class="text-sm font-medium text-slate-700">{"Amount"}</label>
                            <input
                                type="number"
                                step="0.01"
                                min="0"
                                placeholder="0.00"
                                class="w-full px-4 py-2 border border-slate-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-indigo-500"
                                value={(*amount).clone()}
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
                            <label class="text-sm font-medium text-slate-700">{"Note (optional)"}</label>
                            <input
                                type="text"
                                placeholder="What was this for?"
                                class="w-full px-4 py-2 border border-slate-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-indigo-500"
                                value={(*note).clone()}
                                oninput={{
                                    let note = note.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        note.set(input.value());
                                    })
                                }}
                            />
                        </div>

                        <button
                            type="submit"
                            class="w-full bg-indigo-600 text-white py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity"
                            disabled={*saving}
                        >
                            { if *saving { "Saving..." } else { "Add Expense" } }
                        </button>
                    </form>
                </div>
            },
        ) }
    }
}
