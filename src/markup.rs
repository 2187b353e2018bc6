use maud::{Markup, html};

use crate::theme::Theme;

/// Inner HTML of the toggle control while `theme` is shown.
pub fn toggle_icon(theme: Theme) -> Markup {
    html! {
        i class=(theme.toggle_icon_class()) {}
    }
}
