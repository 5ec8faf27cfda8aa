use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::components::notice::{self, NoticeHandle, NoticeKind};
use crate::route::Route;
use crate::session::{store_token, SessionHandle};
use crate::viewmodel::validate_login;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_context::<SessionHandle>().expect("session context not provided");
    let notices = use_context::<NoticeHandle>().expect("notice context not provided");
    let navigator = use_navigator().expect("navigator not available");

    let username = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let loading = loading.clone();
        let session = session.clone();
        let notices = notices.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let username_val = username.trim().to_string();
            let password_val = (*password).clone();

            if let Err(msg) = validate_login(&username_val, &password_val) {
                notice::show(&notices, NoticeKind::Warning, msg);
                return;
            }

            loading.set(true);
            let session = session.clone();
            let notices = notices.clone();
            let navigator = navigator.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match ApiClient::new(None).login(&username_val, &password_val).await {
                    Ok(token) => {
                        store_token(&token);
                        session.set((*session).clone().authenticated(token));
                        notice::show(&notices, NoticeKind::Success, "Login successful! Welcome back.");
                        navigator.push(&Route::Dashboard);
                    }
                    Err(err) => {
                        notice::show(&notices, NoticeKind::Error, err.to_string());
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-slate-50">
            <div class="w-full max-w-md bg-white border border-slate-200 rounded-2xl shadow-lg p-8">
                <div class="text-center mb-6">
                    <h1 class="text-2xl font-bold text-slate-800">{"Welcome back"}</h1>
                    <p class="text-sm text-slate-500 mt-2">{"Sign in to keep tracking your spending."}</p>
                </div>

                <form class="space-y-4" onsubmit={on_submit}>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-slate-700">{"Username"}</label>
                        <input
                            type="text"
                            class="w-full px-4 py-2 border border-slate-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-indigo-500"
                            value={(*username).clone()}
                            oninput={{
                                let username = username.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    username.set(input.value());
                                })
                            }}
                        />
                    </div>
                    <div class="space-y-1">
                        <label class="text-sm font-medium text-slate-700">{"Password"}</label>
                        <input
                            type="password"
                            class="w-full px-4 py-2 border border-slate-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-indigo-500"
                            value={(*password).clone()}
                            oninput={{
                                let password = password.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                    password.set(input.value());
                                })
                            }}
                        />
                    </div>

                    <button
                        type="submit"
                        class="w-full bg-indigo-600 text-white py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity"
                        disabled={*loading}
                    >
                        { if *loading { "Please wait..." } else { "Login" } }
                    </button>
                </form>

                <div class="mt-6 text-center text-sm text-slate-500">
                    {"No account?"}
                    <Link<Route> to={Route::Signup} classes="ml-2 text-indigo-600 font-semibold">
                        {"Sign up"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
