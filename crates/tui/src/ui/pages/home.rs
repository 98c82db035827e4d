use super::PageBody;
use crate::ui::theme::Theme;

const SELECTED_WORK: &[(&str, &str)] = &[
    ("atrium", " — this site, a terminal-native shell over routed pages"),
    ("driftwood", " — append-only note store with full-text search"),
    ("lanternfish", " — tiny MIDI sequencer that lives in the status bar"),
    ("gully", " — static gallery generator with zero client scripts"),
    ("pressgang", " — markdown-to-newsletter pipeline, cron-driven"),
    ("stippler", " — dithering playground for e-ink displays"),
    ("quayside", " — self-hosted bookmarks with dead-link sweeps"),
    ("moth", " — minimal HTTP echo box for debugging webhooks"),
];

const RECENT_WRITING: &[(&str, &str)] = &[
    ("Terminal interfaces are underrated", "Jun 2025"),
    ("Notes on owning your music library again", "May 2025"),
    ("A quiet case for boring deploys", "Apr 2025"),
    ("What I learned shipping a sequencer", "Mar 2025"),
    ("E-ink, dithering, and patience", "Feb 2025"),
    ("Reading queues beat reading lists", "Jan 2025"),
    ("The backlog is not a todo list", "Dec 2024"),
    ("Self-hosting without the martyrdom", "Nov 2024"),
    ("On writing changelogs nobody reads", "Oct 2024"),
    ("Small tools, sharpened weekly", "Sep 2024"),
    ("Field recording on a commuter budget", "Aug 2024"),
    ("Why this site hums if you let it", "Jul 2024"),
];

const RECORDINGS: &[(&str, &str)] = &[
    ("Harbor fog, 6am", " — two gulls, one winch"),
    ("Substation hum", " — fifty hertz and weather"),
    ("Night train, rear car", " — rails, rain, a door that will not latch"),
    ("Market teardown", " — crates, tarps, shouted arithmetic"),
];

const TALKS: &[(&str, &str)] = &[
    ("Shells within shells", " — local meetup, spring 2025"),
    ("Append-only by default", " — storage night, winter 2024"),
    ("Dithering for fun", " — graphics hours, fall 2024"),
    ("Webhooks in the wild", " — backend guild, summer 2024"),
];

const BOOKSHELF: &[(&str, &str)] = &[
    ("The Soul of a New Machine", " — Kidder"),
    ("A Philosophy of Software Design", " — Ousterhout"),
    ("The Making of Prince of Persia", " — Mechner"),
    ("Turing's Cathedral", " — Dyson"),
    ("The Art of Doing Science and Engineering", " — Hamming"),
    ("Working in Public", " — Eghbal"),
];

const ELSEWHERE: &[(&str, &str)] = &[
    ("sourcehut", " — where the code lives"),
    ("bandcamp", " — occasional field recordings"),
    ("letterboxd", " — too many three-star reviews"),
    ("rss", " — the only feed that matters"),
    ("archive", " — older iterations of this site"),
];

pub(super) fn body(theme: &dyn Theme) -> PageBody {
    let mut body = PageBody::new();

    body.blank();
    body.title(theme, "Hey, I'm Alex.");
    body.muted(theme, "engineer, writer, occasional field recordist");
    body.blank();
    body.text(theme, "I build small, stubborn software and write about the process.");
    body.text(theme, "Most of it runs in a terminal, some of it runs on an e-ink");
    body.text(theme, "display in my hallway, all of it is documented here.");
    body.blank();
    body.text(theme, "This page scrolls; the bar up top will duck out of the way");
    body.text(theme, "when you head down and come back the moment you scroll up.");
    body.blank();

    body.heading(theme, "Now");
    body.text(theme, "Rebuilding the site shell you are looking at, tightening the");
    body.text(theme, "navigation state machine, and slowly mixing a winter tape.");
    body.text(theme, "Day job is infrastructure; nights are for the projects below.");
    body.muted(theme, "Updated whenever something actually changes.");
    body.blank();

    body.heading(theme, "Selected work");
    body.blank();
    for (name, description) in SELECTED_WORK {
        body.entry(theme, name, description);
        body.blank();
    }

    body.heading(theme, "Recent writing");
    body.muted(theme, "Longer archive lives on the blog page.");
    body.blank();
    for (title, date) in RECENT_WRITING {
        body.entry(theme, title, "");
        body.muted(theme, date);
        body.blank();
    }

    body.heading(theme, "Talks");
    body.blank();
    for (title, venue) in TALKS {
        body.entry(theme, title, venue);
        body.blank();
    }

    body.heading(theme, "Field recordings");
    body.muted(theme, "Short loops, honestly captured.");
    body.blank();
    for (title, note) in RECORDINGS {
        body.entry(theme, title, note);
        body.blank();
    }

    body.heading(theme, "Bookshelf");
    body.muted(theme, "Rereads in heavy rotation.");
    body.blank();
    for (title, author) in BOOKSHELF {
        body.entry(theme, title, author);
    }
    body.blank();

    body.heading(theme, "Colophon");
    body.text(theme, "Typeset in whatever your terminal font is. Colors are a");
    body.text(theme, "near-black palette with one honest accent. No analytics,");
    body.text(theme, "no trackers, one optional instrumental soundtrack.");
    body.blank();

    body.heading(theme, "Elsewhere");
    body.blank();
    for (name, description) in ELSEWHERE {
        body.entry(theme, name, description);
    }
    body.blank();
    body.blank();

    body.anchored_heading(theme, "contact", "Contact");
    body.blank();
    body.text(theme, "The inbox is open: alex@atrium.example");
    body.text(theme, "Mail about the projects above gets answered first.");
    body.text(theme, "If you would rather talk code, patches are welcome on any");
    body.text(theme, "of the repositories, however small.");
    body.blank();
    body.muted(theme, "No newsletters, no scheduling links, just mail.");
    body.blank();

    body
}
