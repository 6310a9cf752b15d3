use crate::{Error, WindowFlags, WindowType, WINDOW_HINTS};

/// Renders the flag value as a readable summary.
///
/// The first line is the name of the window type encoded in the type
/// sub-range. Every active hint adds one `"| "`-prefixed line, in the
/// fixed catalog order. The output depends on nothing but the flag
/// value.
///
/// Fails with [Error::UnrecognizedType] if the type sub-range matches
/// no cataloged window type. That's an invariant violation of whoever
/// built the flags, not something to paper over with a default.
pub fn render_flags(flags: WindowFlags) -> Result<String, Error> {
    let Some(window_type) = WindowType::from_flags(flags) else {
        return Err(Error::UnrecognizedType(flags.window_type_bits()));
    };

    let mut text = String::from(window_type.name());
    for hint in WINDOW_HINTS {
        if flags.contains(hint.bits()) {
            text.push_str("\n| ");
            text.push_str(hint.name());
        }
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::render_flags;
    use crate::{Error, FlagSelection, WindowFlags, WindowHint, WindowType, WINDOW_TYPES};

    #[test]
    fn test_default_renders_bare_type() {
        let sel = FlagSelection::new();
        assert_eq!(render_flags(sel.combined_flags()).unwrap(), "Window");
    }

    #[test]
    fn test_every_type_renders_its_name() {
        for t in WINDOW_TYPES {
            let mut sel = FlagSelection::new();
            sel.set_type(t);
            assert_eq!(render_flags(sel.combined_flags()).unwrap(), t.name());
        }
    }

    #[test]
    fn test_hints_follow_in_catalog_order() {
        let mut sel = FlagSelection::new();
        sel.set_type(WindowType::Dialog);
        // toggled in reverse order, rendered in catalog order.
        sel.toggle_hint(WindowHint::StaysOnTop, true);
        sel.toggle_hint(WindowHint::Title, true);
        assert_eq!(
            render_flags(sel.combined_flags()).unwrap(),
            "Dialog\n| WindowTitleHint\n| WindowStaysOnTopHint"
        );
    }

    #[test]
    fn test_each_active_hint_listed_exactly_once() {
        let mut sel = FlagSelection::new();
        sel.toggle_hint(WindowHint::Frameless, true);
        sel.toggle_hint(WindowHint::Frameless, true);
        sel.toggle_hint(WindowHint::NoDropShadow, true);
        let text = render_flags(sel.combined_flags()).unwrap();
        assert_eq!(
            text,
            "Window\n| FramelessWindowHint\n| NoDropShadowWindowHint"
        );
        assert_eq!(text.matches("FramelessWindowHint").count(), 1);
    }

    #[test]
    fn test_unknown_type_bits_fail() {
        let flags = WindowFlags::from_bits_retain(0x10);
        assert_eq!(render_flags(flags), Err(Error::UnrecognizedType(0x10)));

        // hint bits without any type pattern fail too.
        let flags = WindowFlags::WINDOW_TITLE_HINT;
        assert_eq!(render_flags(flags), Err(Error::UnrecognizedType(0)));
    }
}
