use chrono::Utc;
use yew::prelude::*;

use crate::analytics::notes_per_day;
use crate::components::{LoginDialog, NoteDetail, NotesChart, NotesList};
use crate::config::Config;
use crate::state::{Action, AppState};
use crate::storage::open_default_store;
use crate::types::{Note, NoteId};

#[function_component(App)]
pub fn app(_props: &()) -> Html {
    let state = use_reducer(|| AppState::new(Config::from_env(), open_default_store()));
    let session = &state.session;
    let store = &state.store;

    let on_open_login = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(Action::OpenLogin))
    };
    let on_logout = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(Action::Logout))
    };
    let on_add = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(Action::AddNote(Utc::now())))
    };
    let on_select = {
        let state = state.clone();
        Callback::from(move |id: NoteId| state.dispatch(Action::SelectNote(id)))
    };
    let on_update = {
        let state = state.clone();
        Callback::from(move |note: Note| state.dispatch(Action::UpdateNote(note)))
    };
    let on_delete = {
        let state = state.clone();
        Callback::from(move |id: NoteId| state.dispatch(Action::DeleteNote(id)))
    };
    let on_username = {
        let state = state.clone();
        Callback::from(move |v: String| state.dispatch(Action::SetUsername(v)))
    };
    let on_password = {
        let state = state.clone();
        Callback::from(move |v: String| state.dispatch(Action::SetPassword(v)))
    };
    let on_login = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(Action::Login))
    };
    let on_close_login = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(Action::CloseLogin))
    };

    let banner = |text: &str| {
        html! {
            <div style="margin-bottom:1em; padding:1em; background:#fff3cd; border:1px solid #ffe69c; border-radius:4px; color:#664d03;">
                { text.to_string() }
            </div>
        }
    };

    html! {
        <div style="max-width:1100px; margin:0 auto; padding:1.5em; font-family:Arial,sans-serif;">
            <header style="display:flex; justify-content:space-between; align-items:center; margin-bottom:1.5em;">
                <h1 style="margin:0; color:#333;">{ "Notes App" }</h1>
                { if session.logged_in {
                    html! { <button onclick={on_logout} style="padding:0.6em 1.2em;">{ "Logout" }</button> }
                } else {
                    html! { <button onclick={on_open_login} style="padding:0.6em 1.2em;">{ "Login" }</button> }
                }}
            </header>

            { store.load_warning().map(banner).unwrap_or_default() }
            { store.persist_error().map(banner).unwrap_or_default() }

            { if session.logged_in {
                html! {
                    <>
                        <div style="display:flex; flex-direction:row; gap:1.5em; flex-wrap:wrap;">
                            <div style="flex:1; min-width:260px;">
                                <button
                                    onclick={on_add}
                                    style="margin-bottom:1em; padding:0.6em 1.2em; background:#007bff; color:white; border:none; border-radius:4px; cursor:pointer;"
                                >
                                    { "+ Add Note" }
                                </button>
                                <NotesList
                                    notes={store.notes().to_vec()}
                                    selected_id={store.selected_id()}
                                    {on_select}
                                />
                            </div>
                            <div style="flex:2; min-width:320px;">
                                { match store.selected_note() {
                                    Some(note) => html! {
                                        <NoteDetail
                                            key={note.id.to_string()}
                                            note={note.clone()}
                                            {on_update}
                                            {on_delete}
                                        />
                                    },
                                    None => html! {},
                                }}
                            </div>
                        </div>
                        <div style="margin-top:2em; border:1px solid #ddd; border-radius:8px; overflow:hidden;">
                            <div style="background:#f5f5f5; padding:0.75em 1em; border-bottom:1px solid #ddd; font-weight:bold;">
                                { "Notes Created Per Day" }
                            </div>
                            <div style="padding:1em;">
                                <NotesChart
                                    data={notes_per_day(store.notes(), state.config.chart_order)}
                                    color={state.config.chart_color.clone()}
                                    height={state.config.chart_height}
                                />
                            </div>
                        </div>
                    </>
                }
            } else {
                html! {
                    <div style="padding:1em; background:#e7f3ff; border:1px solid #b3d9ff; border-radius:4px; color:#0056b3;">
                        { "Please log in to view and manage your notes." }
                    </div>
                }
            }}

            { if session.show_login {
                html! {
                    <LoginDialog
                        username={session.username.clone()}
                        password={session.password.clone()}
                        error={session.login_error.clone()}
                        {on_username}
                        {on_password}
                        on_submit={on_login}
                        on_close={on_close_login}
                    />
                }
            } else {
                html! {}
            }}
        </div>
    }
}
