use super::PageBody;
use crate::ui::theme::Theme;

const POSTS: &[(&str, &str, &str)] = &[
    (
        "Terminal interfaces are underrated",
        "Jun 2025",
        "A defense of the grid: latency, legibility, and why a good TUI outlives three redesigns.",
    ),
    (
        "Notes on owning your music library again",
        "May 2025",
        "Ripping, tagging, and the quiet joy of files that do not expire with a subscription.",
    ),
    (
        "A quiet case for boring deploys",
        "Apr 2025",
        "rsync, a systemd unit, and a checklist. The whole pipeline fits on an index card.",
    ),
    (
        "What I learned shipping a sequencer",
        "Mar 2025",
        "Timing is a liar, audio callbacks are a debt collector, and MIDI is older than me.",
    ),
    (
        "E-ink, dithering, and patience",
        "Feb 2025",
        "Sixteen shades of gray, two-second refreshes, and the art of choosing what not to draw.",
    ),
    (
        "Reading queues beat reading lists",
        "Jan 2025",
        "Lists accumulate guilt; queues drain. The difference is a pop operation.",
    ),
    (
        "The backlog is not a todo list",
        "Dec 2024",
        "Backlogs are archives of past enthusiasm. Treating them as obligations ruins both.",
    ),
    (
        "Self-hosting without the martyrdom",
        "Nov 2024",
        "Pick services that fail quietly. A bookmark manager can be down for a week, mail cannot.",
    ),
    (
        "On writing changelogs nobody reads",
        "Oct 2024",
        "Write them anyway. The reader is you, eleven months from now, at two in the morning.",
    ),
    (
        "Small tools, sharpened weekly",
        "Sep 2024",
        "A standing Friday hour for shaving papercuts off my own scripts pays absurd dividends.",
    ),
    (
        "Field recording on a commuter budget",
        "Aug 2024",
        "A pocket recorder, a windscreen, and the discipline to stop narrating over the world.",
    ),
    (
        "Why this site hums if you let it",
        "Jul 2024",
        "There is an instrumental loop behind this site, politely waiting for your first click.",
    ),
];

pub(super) fn body(theme: &dyn Theme) -> PageBody {
    let mut body = PageBody::new();

    body.blank();
    body.title(theme, "Blog");
    body.muted(theme, "Everything longer than a toot ends up here.");
    body.blank();

    for (title, date, summary) in POSTS {
        body.entry(theme, title, "");
        body.muted(theme, date);
        body.text(theme, summary);
        body.blank();
    }

    body.muted(theme, "— end of archive —");
    body.blank();

    body
}
