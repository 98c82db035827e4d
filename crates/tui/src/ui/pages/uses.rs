use super::PageBody;
use crate::ui::theme::Theme;

const HARDWARE: &[(&str, &str)] = &[
    ("Desk", " — a refurbished tower that outlived two laptops"),
    ("Keyboard", " — ortholinear, browns, shamefully loud"),
    ("Recorder", " — pocket PCM with a foam windscreen"),
    ("Display", " — one wide panel, one e-ink panel for the hallway"),
];

const SOFTWARE: &[(&str, &str)] = &[
    ("Editor", " — a terminal editor with too many years of muscle memory"),
    ("Shell", " — plain prompt, no segments, nothing to update"),
    ("Versioning", " — git with mail-based patches where possible"),
    ("Notes", " — driftwood, eating its own dogfood"),
    ("Music", " — a local library and this site's one loop"),
];

pub(super) fn body(theme: &dyn Theme) -> PageBody {
    let mut body = PageBody::new();

    body.blank();
    body.title(theme, "Uses");
    body.muted(theme, "The honest inventory, updated yearly at best.");
    body.blank();

    body.heading(theme, "Hardware");
    body.blank();
    for (name, note) in HARDWARE {
        body.entry(theme, name, note);
    }
    body.blank();

    body.heading(theme, "Software");
    body.blank();
    for (name, note) in SOFTWARE {
        body.entry(theme, name, note);
    }
    body.blank();

    body.muted(theme, "Nothing here is sponsored; everything here is argued with.");
    body.blank();

    body
}
