//! Login and signup pages.
//!
//! Both forms drive the mock session store: submit disables the button,
//! awaits the simulated latency and either navigates to the dashboard or
//! shows the validation error inline.

use crate::components::icons::Leaf;
use crate::session::{login, signup, use_session};
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get() {
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            match login(&session, email.get_untracked(), password.get_untracked()).await {
                Ok(()) => router.navigate("/dashboard"),
                Err(err) => set_error_msg.set(Some(err.to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page min-h-screen flex items-center justify-center">
            <div class="card w-full max-w-md shadow-2xl bg-white/95">
                <div class="card-header text-center">
                    <div class="icon-badge bg-green-600">
                        <Leaf attr:class="w-10 h-10 text-white" />
                    </div>
                    <h1 class="text-3xl font-bold">"Welcome Back"</h1>
                    <p class="text-gray-700">"Sign in to your SOMA account"</p>
                </div>
                <form class="card-body space-y-6" on:submit=on_submit>
                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm">
                            {move || error_msg.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <div class="form-control">
                        <label class="label" for="email">
                            "Email Address"
                        </label>
                        <input
                            id="email"
                            type="email"
                            placeholder="Enter your email"
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            prop:value=email
                            class="input input-bordered"
                            required
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            "Password"
                        </label>
                        <input
                            id="password"
                            type="password"
                            placeholder="Enter your password"
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            prop:value=password
                            class="input input-bordered"
                            required
                        />
                    </div>

                    <button class="btn btn-primary w-full" disabled=move || is_submitting.get()>
                        {move || if is_submitting.get() { "Signing In..." } else { "Sign In" }}
                    </button>

                    <div class="text-center">
                        <span class="text-gray-700">"New to SOMA? "</span>
                        <Link to="/signup" class="link font-medium">
                            "Create an account →"
                        </Link>
                    </div>
                    <div class="text-center pt-4 border-t">
                        <Link to="/" class="text-sm link">
                            "← Back to Homepage"
                        </Link>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get() {
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let result = signup(
                &session,
                name.get_untracked(),
                email.get_untracked(),
                password.get_untracked(),
            )
            .await;
            match result {
                Ok(()) => router.navigate("/dashboard"),
                Err(err) => set_error_msg.set(Some(err.to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page min-h-screen flex items-center justify-center">
            <div class="card w-full max-w-md shadow-2xl bg-white/95">
                <div class="card-header text-center">
                    <div class="icon-badge bg-green-600">
                        <Leaf attr:class="w-10 h-10 text-white" />
                    </div>
                    <h1 class="text-2xl font-bold">"Join SOMA"</h1>
                    <p class="text-gray-700">"Start your sustainable farming journey"</p>
                </div>
                <form class="card-body space-y-6" on:submit=on_submit>
                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm">
                            {move || error_msg.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <div class="form-control">
                        <label class="label" for="name">
                            "Full Name"
                        </label>
                        <input
                            id="name"
                            type="text"
                            placeholder="Enter your full name"
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            prop:value=name
                            class="input input-bordered"
                            required
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="email">
                            "Email"
                        </label>
                        <input
                            id="email"
                            type="email"
                            placeholder="Enter your email"
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            prop:value=email
                            class="input input-bordered"
                            required
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            "Password"
                        </label>
                        <input
                            id="password"
                            type="password"
                            placeholder="Create a password"
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            prop:value=password
                            class="input input-bordered"
                            required
                        />
                    </div>

                    <button class="btn btn-primary w-full" disabled=move || is_submitting.get()>
                        {move || if is_submitting.get() { "Creating Account..." } else { "Create Account" }}
                    </button>

                    <div class="text-center">
                        <span class="text-gray-700">"Already have an account? "</span>
                        <Link to="/login" class="link font-medium">
                            "Sign in →"
                        </Link>
                    </div>
                </form>
            </div>
        </div>
    }
}
