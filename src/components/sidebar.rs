use yew::prelude::*;
use yew_router::prelude::*;

use super::icons::{
    icon_bar_chart, icon_credit_card, icon_layout_grid, icon_log_out, icon_plus,
};
use super::notice::{self, NoticeHandle, NoticeKind};
use crate::route::Route;
use crate::session::{clear_token, SessionHandle};

struct NavItem {
    label: &'static str,
    route: Route,
    icon: fn() -> Html,
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active: Route,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let session = use_context::<SessionHandle>().expect("session context not provided");
    let notices = use_context::<NoticeHandle>().expect("notice context not provided");
    let navigator = use_navigator().expect("navigator not available");

    let nav_items = vec![
        NavItem {
            label: "Dashboard",
            route: Route::Dashboard,
            icon: icon_layout_grid,
        },
        NavItem {
            label: "Add Expense",
            route: Route::Add,
            icon: icon_plus,
        },
        NavItem {
            label: "Expenses",
            route: Route::Expenses,
            icon: icon_credit_card,
        },
        NavItem {
            label: "Analytics",
            route: Route::Analytics,
            icon: icon_bar_chart,
        },
    ];

    let on_logout = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            clear_token();
            session.set((*session).clone().cleared());
            notice::show(&notices, NoticeKind::Success, "Logged out successfully");
            navigator.push(&Route::Login);
        })
    };

    html! {
        <div class="w-[220px] h-screen bg-slate-100 p-4 flex flex-col">
            <div class="flex items-center gap-3 px-2 mb-8">
                <div class="w-10 h-10 bg-indigo-600 rounded-full flex items-center justify-center text-white font-black">
                    {"₹"}
                </div>
                <span class="text-slate-800 text-2xl font-black tracking-tight">{"SpendBook"}</span>
            </div>

            <div class="flex-1 bg-slate-800 rounded-[24px] flex flex-col py-6 px-3 shadow-lg">
                <nav class="flex-1 space-y-2">
                    { for nav_items.iter().map(|item| {
                        let is_active = item.route == props.active;
                        let class_name = if is_active {
                            "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium bg-indigo-200 text-slate-900 w-full"
                        } else {
                            "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium text-slate-300 hover:bg-white/5 hover:text-white w-full"
                        };
                        let navigator = navigator.clone();
                        let route = item.route;

                        html! {
                            <button type="button" class={class_name} onclick={Callback::from(move |_| navigator.push(&route))}>
                                <span class="shrink-0">{ (item.icon)() }</span>
                                <span class="truncate whitespace-nowrap text-left">{ item.label }</span>
                            </button>
                        }
                    }) }
                </nav>

                <div class="mt-auto pt-4">
                    <button onclick={on_logout} class="flex items-center gap-3 w-full px-4 py-3 rounded-xl hover:bg-white/10 transition-colors text-[13px] font-medium text-slate-300">
                        { icon_log_out() }
                        <span>{"Log Out"}</span>
                    </button>
                </div>
            </div>
        </div>
    }
}
