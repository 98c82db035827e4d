use super::PageBody;
use crate::ui::theme::Theme;

const PROJECTS: &[(&str, &str, &str)] = &[
    (
        "atrium",
        "Rust · maintained",
        "The shell around these pages: a floating nav bar, a soundtrack toggle, and a state machine that keeps them honest.",
    ),
    (
        "driftwood",
        "Rust · maintained",
        "Append-only notes with full-text search. Deletion is a lie; driftwood just stops showing you things.",
    ),
    (
        "lanternfish",
        "Rust · on ice",
        "A MIDI sequencer small enough to live in a status bar. Sixteen steps, no mercy.",
    ),
    (
        "gully",
        "Rust · maintained",
        "Static photo galleries from a folder of originals. Zero scripts shipped to the viewer.",
    ),
    (
        "pressgang",
        "shell · maintained",
        "Markdown in, newsletter out, cron in the middle. Unsubscribes handled by grep.",
    ),
    (
        "stippler",
        "Rust · experiment",
        "Error-diffusion playground for e-ink panels. Atkinson dithering has my whole heart.",
    ),
    (
        "quayside",
        "Rust · maintained",
        "Bookmarks with a weekly dead-link sweep. The web rots; quayside keeps receipts.",
    ),
    (
        "moth",
        "Rust · done",
        "An HTTP echo box for webhook debugging. Finished software, a rare pleasure.",
    ),
];

pub(super) fn body(theme: &dyn Theme) -> PageBody {
    let mut body = PageBody::new();

    body.blank();
    body.title(theme, "Projects");
    body.muted(theme, "Everything here is small on purpose.");
    body.blank();

    for (name, status, description) in PROJECTS {
        body.entry(theme, name, "");
        body.muted(theme, status);
        body.text(theme, description);
        body.blank();
    }

    body
}
