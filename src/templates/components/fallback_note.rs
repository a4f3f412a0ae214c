use crate::render::{FALLBACK_NOTE_ID, FALLBACK_NOTE_TEXT};
use maud::{html, Markup};

pub fn fallback_note() -> Markup {
    html! {
        div
            id=(FALLBACK_NOTE_ID)
            role="status"
            style="text-align: center; margin: 32px 0; font-size: 2rem; color: #ff2134; font-weight: bold;"
        {
            (FALLBACK_NOTE_TEXT)
        }
    }
}
