use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{ApiClient, ExpenseFilter};
use crate::components::layout::page_shell;
use crate::components::notice::{self, NoticeHandle, NoticeKind};
use crate::components::stat_card::{StatCard, StatIcon};
use crate::model::Expense;
use crate::session::SessionHandle;
use crate::viewmodel::{format_currency, format_date, recent, DashboardStats};

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let session = use_context::<SessionHandle>().expect("session context not provided");
    let notices = use_context::<NoticeHandle>().expect("notice context not provided");
    let loading = use_state(|| true);

    {
        let session = session.clone();
        let notices = notices.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let api = ApiClient::new(session.token.clone());
                    match api.list_expenses(&ExpenseFilter::default()).await {
                        Ok(expenses) => {
                            session.set((*session).clone().with_expenses(expenses));
                        }
                        Err(err) => {
                            notice::show(&notices, NoticeKind::Error, err.to_string());
                        }
                    }
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    let expenses = &session.expenses;
    let today = chrono::Local::now().date_naive();
    let stats = DashboardStats::compute(expenses, today);
    let recent_expenses = recent(expenses, 5);

    html! {
        { page_shell(
            "Dashboard",
            html! {},
            html! {
                <>
                    <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                        <StatCard title="Total Spend" value={format_currency(stats.total)} icon={StatIcon::Wallet} />
                        <StatCard title="This Month" value={format_currency(stats.month_total)} icon={StatIcon::CreditCard} />
                        <StatCard title="Average" value={format_currency(stats.average)} icon={StatIcon::TrendingUp} />
                        <StatCard title="Entries" value={stats.count.to_string()} icon={StatIcon::BarChart} />
                    </div>

                    <div class="bg-white rounded-[10px] shadow-sm border border-slate-200 overflow-hidden">
                        <div class="p-6 border-b border-slate-200">
                            <h3 class="font-bold text-slate-800 text-lg">{"Recent Expenses"}</h3>
                        </div>
                        {
                            if *loading && recent_expenses.is_empty() {
                                html! { <p class="p-6 text-sm text-slate-500">{"Loading..."}</p> }
                            } else if recent_expenses.is_empty() {
                                html! {
                                    <div class="p-10 text-center text-slate-500">
                                        <p class="text-3xl mb-2">{"🧾"}</p>
                                        <p>{"No expenses yet. Start tracking!"}</p>
                                    </div>
                                }
                            } else {
                                html! {
                                    <div class="divide-y divide-slate-100">
                                        { for recent_expenses.iter().map(recent_row) }
                                    </div>
                                }
                            }
                        }
                    </div>
                </>
            },
        ) }
    }
}

fn recent_row(expense: &Expense) -> Html {
    let title = expense
        .note
        .clone()
        .unwrap_or_else(|| expense.category.as_str().to_string());
    html! {
        <div class="flex items-center justify-between px-6 py-4">
            <div class="flex items-center gap-3">
                <div class="text-2xl">{ expense.category.glyph() }</div>
                <div>
                    <h4 class="text-sm font-semibold text-slate-800">{ title }</h4>
                    <p class="text-xs text-slate-500">
                        { format!("{} • {}", format_date(expense.date), expense.category.as_str()) }
                    </p>
                </div>
            </div>
            <div class="text-sm font-bold text-slate-800">{ format_currency(expense.amount) }</div>
        </div>
    }
}
