use yew::prelude::*;

use crate::format::{display_date, plural, preview};
use crate::types::{Note, NoteId};

#[derive(Properties, PartialEq)]
pub struct NotesListProps {
    pub notes: Vec<Note>,
    pub selected_id: Option<NoteId>,
    pub on_select: Callback<NoteId>,
}

#[function_component(NotesList)]
pub fn notes_list(props: &NotesListProps) -> Html {
    if props.notes.is_empty() {
        return html! {
            <div style="padding:2em 1em; color:#888; text-align:center; border:1px dashed #ccc; border-radius:6px;">
                { "No notes yet. Click Add Note to create one." }
            </div>
        };
    }

    html! {
        <div style="display:flex; flex-direction:column; gap:0.75em;">
            { for props.notes.iter().map(|note| {
                let is_selected = props.selected_id == Some(note.id);
                let on_click = {
                    let id = note.id;
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(id))
                };
                let summary = preview(&note.content);

                html! {
                    <div
                        key={note.id.to_string()}
                        onclick={on_click}
                        class="note-card"
                        style={format!(
                            "border:{}; border-radius:6px; padding:0.75em; cursor:pointer; background:{};",
                            if is_selected { "2px solid #007bff" } else { "1px solid #ccc" },
                            note.color
                        )}
                    >
                        <div style="font-weight:bold; color:#333; margin-bottom:0.25em;">
                            { &note.title }
                        </div>
                        { if summary.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <div style="font-size:0.85em; color:#555; margin-bottom:0.25em;">{ summary }</div>
                            }
                        }}
                        <div style="font-size:0.75em; color:#888;">
                            { format!(
                                "{} · {} · {}",
                                display_date(&note.created_at),
                                plural(note.tags.len(), "tag"),
                                plural(note.comments.len(), "comment"),
                            ) }
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
