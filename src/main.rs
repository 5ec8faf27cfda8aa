use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod charts;
mod components;
mod model;
mod pages;
mod route;
mod session;
mod viewmodel;

use components::layout::Layout;
use components::notice::{Notice, NoticeHandle, NoticeView};
use pages::add_expense::AddExpensePage;
use pages::analytics::AnalyticsPage;
use pages::dashboard::DashboardPage;
use pages::expenses::ExpensesPage;
use pages::login::LoginPage;
use pages::signup::SignupPage;
use route::{resolve, Route, RouteDecision};
use session::{Session, SessionHandle};

/// Page for a committed route. Public pages render bare; everything else
/// gets the sidebar chrome.
fn committed_view(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::Signup => html! { <SignupPage /> },
        authed => {
            let page = match authed {
                Route::Dashboard => html! { <DashboardPage /> },
                Route::Add => html! { <AddExpensePage /> },
                Route::Expenses => html! { <ExpensesPage /> },
                Route::Analytics => html! { <AnalyticsPage /> },
                // canonicalized away by resolve()
                Route::Home | Route::NotFound | Route::Login | Route::Signup => html! {},
            };
            html! { <Layout active={authed}>{ page }</Layout> }
        }
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    let session = use_context::<SessionHandle>().expect("session context not provided");
    let has_token = session.has_token();

    let render = Callback::from(move |route: Route| match resolve(route, has_token) {
        RouteDecision::Redirect(target) => {
            log::debug!("redirecting {route:?} -> {target:?}");
            html! { <Redirect<Route> to={target} /> }
        }
        RouteDecision::Render(committed) => committed_view(committed),
    });

    html! { <Switch<Route> render={render} /> }
}

#[function_component(App)]
fn app() -> Html {
    let session = use_state(Session::initial);
    let notice = use_state(|| None::<Notice>);

    html! {
        <ContextProvider<SessionHandle> context={session.clone()}>
            <ContextProvider<NoticeHandle> context={notice.clone()}>
                <HashRouter>
                    <AppShell />
                </HashRouter>
                <NoticeView notice={(*notice).clone()} />
            </ContextProvider<NoticeHandle>>
        </ContextProvider<SessionHandle>>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
