use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::types::{Note, NoteId, NOTE_PALETTE};

#[derive(Properties, PartialEq)]
pub struct NoteDetailProps {
    pub note: Note,
    pub on_update: Callback<Note>,
    pub on_delete: Callback<NoteId>,
}

const INPUT_STYLE: &str =
    "width:100%; padding:0.5em; border:1px solid #ccc; border-radius:4px; box-sizing:border-box;";
const LABEL_STYLE: &str = "font-weight:bold; color:#555;";

#[function_component(NoteDetail)]
pub fn note_detail(props: &NoteDetailProps) -> Html {
    let tag_input = use_state(String::new);
    let comment_input = use_state(String::new);
    let note = &props.note;

    // Title and body commit on `change`, i.e. when the field loses focus.
    let on_title_change = {
        let note = note.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |event: Event| {
            let target = event.target_unchecked_into::<HtmlInputElement>();
            on_update.emit(note.clone().with_title(target.value()));
        })
    };

    let on_content_change = {
        let note = note.clone();
        let on_update = props.on_update.clone();
        Callback::from(move |event: Event| {
            let target = event.target_unchecked_into::<HtmlTextAreaElement>();
            on_update.emit(note.clone().with_content(target.value()));
        })
    };

    let on_tag_input = {
        let tag_input = tag_input.clone();
        Callback::from(move |event: InputEvent| {
            let target = event.target_unchecked_into::<HtmlInputElement>();
            tag_input.set(target.value());
        })
    };

    let commit_tag = {
        let note = note.clone();
        let on_update = props.on_update.clone();
        let tag_input = tag_input.clone();
        Callback::from(move |_: ()| {
            if tag_input.trim().is_empty() {
                return;
            }
            on_update.emit(note.clone().with_tag(&tag_input));
            tag_input.set(String::new());
        })
    };

    let on_tag_key = {
        let commit_tag = commit_tag.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                event.prevent_default();
                commit_tag.emit(());
            }
        })
    };

    let on_comment_input = {
        let comment_input = comment_input.clone();
        Callback::from(move |event: InputEvent| {
            let target = event.target_unchecked_into::<HtmlTextAreaElement>();
            comment_input.set(target.value());
        })
    };

    let on_add_comment = {
        let note = note.clone();
        let on_update = props.on_update.clone();
        let comment_input = comment_input.clone();
        Callback::from(move |_: MouseEvent| {
            if comment_input.trim().is_empty() {
                return;
            }
            on_update.emit(note.clone().with_comment(&comment_input));
            comment_input.set(String::new());
        })
    };

    let on_delete = {
        let id = note.id;
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(id))
    };

    html! {
        <div style={format!(
            "display:flex; flex-direction:column; gap:1em; padding:1.5em; border:1px solid #ddd; border-radius:8px; background:{};",
            note.color
        )}>
            <div style="display:flex; flex-direction:column; gap:0.5em;">
                <label style={LABEL_STYLE}>{ "Title" }</label>
                <input type="text" value={note.title.clone()} onchange={on_title_change} style={INPUT_STYLE} />
            </div>

            <div style="display:flex; flex-direction:column; gap:0.5em;">
                <label style={LABEL_STYLE}>{ "Content" }</label>
                <textarea
                    rows=8
                    value={note.content.clone()}
                    onchange={on_content_change}
                    placeholder="Write something..."
                    style={format!("{} resize:vertical; font-family:inherit;", INPUT_STYLE)}
                />
            </div>

            <div style="display:flex; flex-direction:column; gap:0.5em;">
                <label style={LABEL_STYLE}>{ "Color" }</label>
                <div style="display:flex; gap:0.5em; flex-wrap:wrap;">
                    { for NOTE_PALETTE.iter().map(|color| {
                        let onclick = {
                            let note = note.clone();
                            let on_update = props.on_update.clone();
                            let color = color.to_string();
                            Callback::from(move |_: MouseEvent| on_update.emit(note.clone().with_color(color.clone())))
                        };
                        let selected = note.color.eq_ignore_ascii_case(color);
                        html! {
                            <button
                                {onclick}
                                title={color.to_string()}
                                style={format!(
                                    "width:1.8em; height:1.8em; border-radius:50%; cursor:pointer; background:{}; border:{};",
                                    color,
                                    if selected { "2px solid #333" } else { "1px solid #bbb" }
                                )}
                            />
                        }
                    }) }
                </div>
            </div>

            <div style="display:flex; flex-direction:column; gap:0.5em;">
                <label style={LABEL_STYLE}>{ "Tags" }</label>
                <div style="display:flex; gap:0.5em; flex-wrap:wrap;">
                    { for note.tags.iter().map(|tag| {
                        let on_remove = {
                            let note = note.clone();
                            let on_update = props.on_update.clone();
                            let tag = tag.clone();
                            Callback::from(move |_: MouseEvent| on_update.emit(note.clone().without_tag(&tag)))
                        };
                        html! {
                            <span style="background:#4a5568; color:white; padding:0.25em 0.75em; border-radius:20px; font-size:0.8em; display:inline-flex; align-items:center; gap:0.4em;">
                                { tag }
                                <button
                                    onclick={on_remove}
                                    title="Remove tag"
                                    style="background:none; border:none; color:white; cursor:pointer; padding:0;"
                                >
                                    { "×" }
                                </button>
                            </span>
                        }
                    }) }
                </div>
                <div style="display:flex; gap:0.5em;">
                    <input
                        type="text"
                        placeholder="Add a tag and press Enter"
                        value={(*tag_input).clone()}
                        oninput={on_tag_input}
                        onkeydown={on_tag_key}
                        style={INPUT_STYLE}
                    />
                    <button onclick={commit_tag.reform(|_: MouseEvent| ())} style="padding:0.5em 1em;">{ "Add" }</button>
                </div>
            </div>

            <div style="display:flex; flex-direction:column; gap:0.5em;">
                <label style={LABEL_STYLE}>{ "Comments" }</label>
                { if note.comments.is_empty() {
                    html! { <div style="color:#888; font-size:0.9em;">{ "No comments yet." }</div> }
                } else {
                    html! {
                        <ul style="margin:0; padding-left:1.2em;">
                            { for note.comments.iter().map(|comment| html! {
                                <li style="margin-bottom:0.25em; white-space:pre-wrap;">{ comment }</li>
                            }) }
                        </ul>
                    }
                }}
                <textarea
                    rows=2
                    placeholder="Add a comment..."
                    value={(*comment_input).clone()}
                    oninput={on_comment_input}
                    style={format!("{} resize:vertical; font-family:inherit;", INPUT_STYLE)}
                />
                <button onclick={on_add_comment} style="align-self:flex-start; padding:0.5em 1em;">{ "Add Comment" }</button>
            </div>

            <div>
                <button
                    onclick={on_delete}
                    style="background:#dc3545; color:white; border:none; padding:0.6em 1.2em; border-radius:4px; cursor:pointer;"
                >
                    { "Delete Note" }
                </button>
            </div>
        </div>
    }
}
