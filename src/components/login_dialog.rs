use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginDialogProps {
    pub username: String,
    pub password: String,
    pub error: String,
    pub on_username: Callback<String>,
    pub on_password: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(LoginDialog)]
pub fn login_dialog(props: &LoginDialogProps) -> Html {
    let on_username = {
        let on_username = props.on_username.clone();
        Callback::from(move |event: InputEvent| {
            let target = event.target_unchecked_into::<HtmlInputElement>();
            on_username.emit(target.value());
        })
    };

    let on_password = {
        let on_password = props.on_password.clone();
        Callback::from(move |event: InputEvent| {
            let target = event.target_unchecked_into::<HtmlInputElement>();
            on_password.emit(target.value());
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(());
        })
    };

    let on_close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div
            style="position:fixed; top:0; left:0; width:100%; height:100%; background:rgba(0,0,0,0.5); display:flex; align-items:center; justify-content:center; z-index:1000;"
            onclick={on_close.clone()}
        >
            <div
                style="background:white; width:360px; border-radius:8px; overflow:hidden; box-shadow:0 10px 25px rgba(0,0,0,0.2);"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <div style="background:#4a5568; color:white; padding:1em 1.5em; display:flex; justify-content:space-between; align-items:center;">
                    <h3 style="margin:0; font-size:1.2em;">{ "Login" }</h3>
                    <button
                        onclick={on_close}
                        style="background:none; border:none; color:white; font-size:1.5em; cursor:pointer; padding:0;"
                        class="close-button"
                    >
                        { "×" }
                    </button>
                </div>
                <form onsubmit={on_submit} style="display:flex; flex-direction:column; gap:1em; padding:1.5em;">
                    <div style="display:flex; flex-direction:column; gap:0.5em;">
                        <label for="username" style="font-weight:bold; color:#555;">{ "Username" }</label>
                        <input
                            id="username"
                            type="text"
                            value={props.username.clone()}
                            oninput={on_username}
                            style="padding:0.5em; border:1px solid #ccc; border-radius:4px;"
                        />
                    </div>
                    <div style="display:flex; flex-direction:column; gap:0.5em;">
                        <label for="password" style="font-weight:bold; color:#555;">{ "Password" }</label>
                        <input
                            id="password"
                            type="password"
                            value={props.password.clone()}
                            oninput={on_password}
                            style="padding:0.5em; border:1px solid #ccc; border-radius:4px;"
                        />
                    </div>
                    { if props.error.is_empty() {
                        html! {}
                    } else {
                        html! { <p style="margin:0; color:#dc3545; font-size:0.9em;">{ &props.error }</p> }
                    }}
                    <button
                        type="submit"
                        style="padding:0.7em 0; font-size:1em; background:#007bff; color:white; border:none; border-radius:4px; cursor:pointer;"
                    >
                        { "Log in" }
                    </button>
                </form>
            </div>
        </div>
    }
}
