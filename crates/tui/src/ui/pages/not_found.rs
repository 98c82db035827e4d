use super::PageBody;
use crate::ui::theme::Theme;

pub(super) fn body(theme: &dyn Theme) -> PageBody {
    let mut body = PageBody::new();

    body.blank();
    body.title(theme, "404 — nothing moors here");
    body.blank();
    body.text(theme, "The path you asked for matches no page on this site.");
    body.text(theme, "The navigation bar above still works; Home is a safe harbor.");
    body.blank();
    body.muted(theme, "If a link brought you here, tell me and I will fix it.");
    body.blank();

    body
}
