use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::components::notice::{self, NoticeHandle, NoticeKind};
use crate::route::Route;
use crate::session::{store_token, SessionHandle};
use crate::viewmodel::{validate_signup, validate_signup_email};

#[derive(Clone, Copy, PartialEq)]
enum SignupStep {
    Email,
    Verify,
}

/// Two-step signup: request a one-time code for an email, then verify it
/// together with the chosen credentials. The email is held in the session
/// between the steps so "Resend code" can reuse it.
#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let session = use_context::<SessionHandle>().expect("session context not provided");
    let notices = use_context::<NoticeHandle>().expect("notice context not provided");
    let navigator = use_navigator().expect("navigator not available");

    let step = use_state(|| SignupStep::Email);
    let email = use_state(String::new);
    let otp = use_state(String::new);
    let username = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let busy = use_state(|| false);

    // Entering the route always lands on step 1 with no leftover email.
    {
        let session = session.clone();
        use_effect_with_deps(
            move |_| {
                if session.pending_signup_email.is_some() {
                    session.set((*session).clone().signup_reset());
                }
                || ()
            },
            (),
        );
    }

    let send_code = {
        let session = session.clone();
        let notices = notices.clone();
        let step = step.clone();
        let busy = busy.clone();
        Callback::from(move |email_val: String| {
            let session = session.clone();
            let notices = notices.clone();
            let step = step.clone();
            let busy = busy.clone();
            busy.set(true);
            spawn_local(async move {
                match ApiClient::new(None).send_otp(&email_val).await {
                    Ok(()) => {
                        session.set((*session).clone().signup_pending(email_val));
                        step.set(SignupStep::Verify);
                        notice::show(
                            &notices,
                            NoticeKind::Success,
                            "Verification code sent to your email!",
                        );
                    }
                    Err(err) => {
                        notice::show(&notices, NoticeKind::Error, err.to_string());
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_send_otp = {
        let email = email.clone();
        let notices = notices.clone();
        let send_code = send_code.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email_val = email.trim().to_string();
            if let Err(msg) = validate_signup_email(&email_val) {
                notice::show(&notices, NoticeKind::Warning, msg);
                return;
            }
            send_code.emit(email_val);
        })
    };

    let on_resend = {
        let session = session.clone();
        let send_code = send_code.clone();
        Callback::from(move |_| {
            if let Some(pending) = session.pending_signup_email.clone() {
                send_code.emit(pending);
            }
        })
    };

    let on_back = {
        let session = session.clone();
        let step = step.clone();
        let email = email.clone();
        let otp = otp.clone();
        let username = username.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        Callback::from(move |_| {
            session.set((*session).clone().signup_reset());
            email.set(String::new());
            otp.set(String::new());
            username.set(String::new());
            password.set(String::new());
            confirm.set(String::new());
            step.set(SignupStep::Email);
        })
    };

    let on_verify = {
        let session = session.clone();
        let notices = notices.clone();
        let otp = otp.clone();
        let username = username.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let email = email.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let otp_val = otp.trim().to_string();
            let username_val = username.trim().to_string();
            let password_val = (*password).clone();
            let confirm_val = (*confirm).clone();

            if let Err(msg) = validate_signup(&otp_val, &username_val, &password_val, &confirm_val) {
                notice::show(&notices, NoticeKind::Warning, msg);
                return;
            }

            let email_val = session
                .pending_signup_email
                .clone()
                .unwrap_or_else(|| email.trim().to_string());

            busy.set(true);
            let session = session.clone();
            let notices = notices.clone();
            let navigator = navigator.clone();
            let busy = busy.clone();
            spawn_local(async move {
                match ApiClient::new(None)
                    .verify_otp_signup(&email_val, &otp_val, &username_val, &password_val)
                    .await
                {
                    Ok(token) => {
                        store_token(&token);
                        session.set((*session).clone().authenticated(token));
                        notice::show(
                            &notices,
                            NoticeKind::Success,
                            "Account created successfully! Welcome!",
                        );
                        navigator.push(&Route::Dashboard);
                    }
                    Err(err) => {
                        notice::show(&notices, NoticeKind::Error, err.to_string());
                    }
                }
                busy.set(false);
            });
        })
    };

    let text_input = |label: &'static str,
                      kind: &'static str,
                      handle: &UseStateHandle<String>|
     -> Html {
        let handle_oninput = handle.clone();
        html! {
            <div class="space-y-1">
                <label class="text-sm font-medium text-slate-700">{ label }</label>
                <input
                    type={kind}
                    class="w-full px-4 py-2 border border-slate-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-indigo-500"
                    value={(**handle).clone()}
                    oninput={Callback::from(move |e: InputEvent| {
                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                        handle_oninput.set(input.value());
                    })}
                />
            </div>
        }
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-slate-50">
            <div class="w-full max-w-md bg-white border border-slate-200 rounded-2xl shadow-lg p-8">
                {
                    if *step == SignupStep::Email {
                        html! {
                            <>
                                <div class="text-center mb-6">
                                    <h1 class="text-2xl font-bold text-slate-800">{"Create account"}</h1>
                                    <p class="text-sm text-slate-500 mt-2">{"We'll email you a verification code."}</p>
                                </div>
                                <form class="space-y-4" onsubmit={on_send_otp}>
                                    { text_input("Email", "email", &email) }
                                    <button
                                        type="submit"
                                        class="w-full bg-indigo-600 text-white py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity"
                                        disabled={*busy}
                                    >
                                        { if *busy { "Sending..." } else { "Send code" } }
                                    </button>
                                </form>
                                <div class="mt-6 text-center text-sm text-slate-500">
                                    {"Already have an account?"}
                                    <Link<Route> to={Route::Login} classes="ml-2 text-indigo-600 font-semibold">
                                        {"Login"}
                                    </Link<Route>>
                                </div>
                            </>
                        }
                    } else {
                        html! {
                            <>
                                <div class="text-center mb-6">
                                    <h1 class="text-2xl font-bold text-slate-800">{"Check your inbox"}</h1>
                                    <p class="text-sm text-slate-500 mt-2">
                                        {"We sent a 6-digit code to "}
                                        <span class="font-semibold text-slate-700">
                                            { session.pending_signup_email.clone().unwrap_or_default() }
                                        </span>
                                    </p>
                                </div>
                                <form class="space-y-4" onsubmit={on_verify}>
                                    { text_input("Verification code", "text", &otp) }
                                    { text_input("Username", "text", &username) }
                                    { text_input("Password", "password", &password) }
                                    { text_input("Confirm password", "password", &confirm) }
                                    <button
                                        type="submit"
                                        class="w-full bg-indigo-600 text-white py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity"
                                        disabled={*busy}
                                    >
                                        { if *busy { "Please wait..." } else { "Verify & create account" } }
                                    </button>
                                </form>
                                <div class="mt-4 flex items-center justify-between text-sm">
                                    <button class="text-slate-500 hover:text-slate-700" onclick={on_back}>
                                        {"Back"}
                                    </button>
                                    <button class="text-indigo-600 font-semibold" onclick={on_resend} disabled={*busy}>
                                        {"Resend code"}
                                    </button>
                                </div>
                            </>
                        }
                    }
                }
            </div>
        </div>
    }
}
