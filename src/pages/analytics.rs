use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::charts;
use crate::components::layout::page_shell;
use crate::components::notice::{self, NoticeHandle, NoticeKind};
use crate::model::glyph_for;
use crate::session::SessionHandle;
use crate::viewmodel::{category_breakdown, format_currency};

#[function_component(AnalyticsPage)]
pub fn analytics_page() -> Html {
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
                    match api.fetch_analytics().await {
                        Ok(snapshot) => {
                            session.set((*session).clone().with_analytics(snapshot));
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

    // Charts draw after the canvases are committed to the DOM.
    {
        let analytics = session.analytics.clone();
        use_effect_with_deps(
            move |snapshot| {
                if let Some(snapshot) = snapshot {
                    if !snapshot.category_summary.is_empty() {
                        charts::render(&snapshot.category_summary);
                    }
                }
                || ()
            },
            analytics,
        );
    }

    let snapshot = session.analytics.clone().unwrap_or_default();
    let rows = category_breakdown(&snapshot);

    html! {
        { page_shell(
            "Analytics",
            html! {},
            html! {
                <>
                    <div class="bg-white rounded-[10px] border border-slate-200 p-6">
                        <p class="text-sm text-slate-500">{"Total Spend"}</p>
                        <p class="text-3xl font-bold text-slate-800">{ format_currency(snapshot.total()) }</p>
                    </div>

                    {
                        if *loading && rows.is_empty() {
                            html! { <p class="text-sm text-slate-500">{"Loading..."}</p> }
                        } else if rows.is_empty() {
                            html! {
                                <div class="bg-white rounded-[10px] border border-slate-200 p-10 text-center text-slate-500">
                                    <p class="text-3xl mb-2">{"📊"}</p>
                                    <p>{"No data to display"}</p>
                                </div>
                            }
                        } else {
                            html! {
                                <>
                                    <div class="bg-white rounded-[10px] border border-slate-200 overflow-hidden">
                                        <div class="p-6 border-b border-slate-200">
                                            <h3 class="font-bold text-slate-800 text-lg">{"By Category"}</h3>
                                        </div>
                                        <div class="divide-y divide-slate-100">
                                            { for rows.iter().map(|row| html! {
                                                <div class="flex items-center justify-between px-6 py-3 text-sm">
                                                    <div class="flex items-center gap-2">
                                                        <span>{ glyph_for(&row.label) }</span>
                                                        <span class="text-slate-700">{ row.label.clone() }</span>
                                                    </div>
                                                    <div class="flex items-center gap-3">
                                                        <span class="font-bold text-slate-800">{ format_currency(row.amount) }</span>
                                                        <span class="text-slate-500">{ format!("({:.1}%)", row.percent) }</span>
                                                    </div>
                                                </div>
                                            }) }
                                        </div>
                                    </div>

                                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                                        <div class="bg-white rounded-[10px] border border-slate-200 p-6 h-80">
                                            <canvas id="category-pie-chart"></canvas>
                                        </div>
                                        <div class="bg-white rounded-[10px] border border-slate-200 p-6 h-80">
                                            <canvas id="category-bar-chart"></canvas>
                                        </div>
                                    </div>
                                </>
                            }
                        }
                    }
                </>
            },
        ) }
    }
}
