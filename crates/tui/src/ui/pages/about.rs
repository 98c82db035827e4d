use super::PageBody;
use crate::ui::theme::Theme;

pub(super) fn body(theme: &dyn Theme) -> PageBody {
    let mut body = PageBody::new();

    body.blank();
    body.title(theme, "About");
    body.blank();
    body.text(theme, "I have been paid to write software since the late 2000s and");
    body.text(theme, "have written it for free since long before that. These days I");
    body.text(theme, "work on infrastructure: the plumbing that nobody notices");
    body.text(theme, "until it leaks.");
    body.blank();
    body.text(theme, "Outside work I record ambient sound, maintain a shelf of");
    body.text(theme, "small open-source tools, and slowly digitize a box of family");
    body.text(theme, "cassettes labelled in a handwriting nobody can read.");
    body.blank();

    body.heading(theme, "Principles, loosely held");
    body.text(theme, "Software should be legible to the person on call.");
    body.text(theme, "Boring technology is a feature, not a resignation.");
    body.text(theme, "Every dependency is a small marriage.");
    body.blank();

    body.heading(theme, "This site");
    body.text(theme, "It runs in your terminal, keeps no state between visits, and");
    body.text(theme, "asks nothing of you except maybe one click to start the");
    body.text(theme, "soundtrack. The Contact link on the Home page is the fastest");
    body.text(theme, "way to reach me.");
    body.blank();

    body
}
