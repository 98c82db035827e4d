use super::PageBody;
use crate::ui::theme::Theme;

const FRAMES: &[(&str, &str)] = &[
    ("01 · Harbor crane at dusk", "Ilford HP5, pushed one stop"),
    ("02 · Substation geometry", "the hum is almost visible"),
    ("03 · Night train window", "motion blur doing the composing"),
    ("04 · Market before opening", "tarps like sails"),
    ("05 · Stairwell, looking up", "concrete spiral, one bulb"),
    ("06 · Fog over the breakwater", "the gulls refused to pose"),
    ("07 · Switchboard detail", "labels from three owners ago"),
    ("08 · Rooftop antennas", "a skyline of intentions"),
];

pub(super) fn body(theme: &dyn Theme) -> PageBody {
    let mut body = PageBody::new();

    body.blank();
    body.title(theme, "Gallery");
    body.muted(theme, "Scans and stills. Captions are half the photograph.");
    body.blank();

    for (caption, note) in FRAMES {
        body.entry(theme, caption, "");
        body.muted(theme, note);
        body.blank();
    }

    body.muted(theme, "Prints available if you ask nicely.");
    body.blank();

    body
}
