use yew::prelude::*;

use super::sidebar::Sidebar;
use crate::route::Route;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub active: Route,
}

/// App chrome for the authenticated routes; public pages render bare.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="flex h-screen bg-slate-50">
            <div class="hidden md:flex">
                <Sidebar active={props.active} />
            </div>

            <div class="flex-1 flex flex-col overflow-hidden">
                <main class="flex-1 overflow-y-auto">
                    { for props.children.iter() }
                </main>
            </div>
        </div>
    }
}

pub fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-8 space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-2xl font-bold text-slate-800">{ title }</h2>
                { actions }
            </div>
            { children }
        </div>
    }
}
