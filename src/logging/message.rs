//! Lazily rendered log messages.
use std::fmt;

type RenderFn = dyn Fn(&mut fmt::Formatter<'_>) -> fmt::Result + Send + Sync;

/// A log message that is rendered only when a sink writes it.
///
/// The message owns its arguments, so it can sit in a [`Tape`](super::Tape)
/// buffer and be replayed later against a different sink. Use the [`msg!`]
/// macro to build one from a format template.
pub struct Message {
    render: Box<RenderFn>,
}

impl Message {
    /// Wraps a render closure. Prefer [`msg!`] over calling this directly.
    pub fn from_fn<F>(render: F) -> Self
    where
        F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result + Send + Sync + 'static,
    {
        Self {
            render: Box::new(render),
        }
    }

    /// Returns a message rendering as `"<prefix> <message>"`.
    ///
    /// The inner message stays unrendered until the result is displayed.
    pub fn prefixed(prefix: impl Into<String>, message: Message) -> Self {
        let prefix = prefix.into();
        Self::from_fn(move |f| {
            f.write_str(&prefix)?;
            f.write_str(" ")?;
            fmt::Display::fmt(&message, f)
        })
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.render)(f)
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Message")
            .field(&format_args!("{self}"))
            .finish()
    }
}

impl From<&'static str> for Message {
    fn from(text: &'static str) -> Self {
        Self::from_fn(move |f| f.write_str(text))
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::from_fn(move |f| f.write_str(&text))
    }
}

/// Builds a [`Message`] from a format template and positional arguments.
///
/// Each argument is evaluated where the macro is invoked and the value is
/// moved into the message; only the formatting waits until a sink renders it.
/// Identifiers captured inline by the template (`"{name}"`) are moved as well.
///
/// ```ignore
/// tape.debug(msg!("users to store: {:?}", users.clone()));
/// ```
macro_rules! msg {
    // Binds the next argument to a fresh local; every expansion step gets its
    // own hygienic `arg`.
    (@bind [$($bound:ident)*] $fmt:literal; $head:expr $(, $rest:expr)*) => {{
        let arg = $head;
        $crate::logging::msg!(@bind [$($bound)* arg] $fmt; $($rest),*)
    }};
    (@bind [$($bound:ident)*] $fmt:literal;) => {
        $crate::logging::Message::from_fn(move |f| ::std::write!(f, $fmt $(, $bound)*))
    };
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::logging::msg!(@bind [] $fmt; $($arg),*)
    };
}

pub(crate) use msg;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Counted(Arc<AtomicUsize>);

    impl fmt::Display for Counted {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.fetch_add(1, Ordering::SeqCst);
            f.write_str("counted")
        }
    }

    #[test]
    fn renders_template_with_arguments() {
        let name = String::from("alice");
        let message = msg!("user {} has {} rows", name, 3);
        assert_eq!(message.to_string(), "user alice has 3 rows");
    }

    #[test]
    fn arguments_are_not_formatted_until_rendered() {
        let renders = Arc::new(AtomicUsize::new(0));
        let message = msg!("value: {}", Counted(renders.clone()));
        assert_eq!(renders.load(Ordering::SeqCst), 0);

        assert_eq!(message.to_string(), "value: counted");
        assert_eq!(renders.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn arguments_are_taken_when_logged() {
        let rows = Arc::new(AtomicUsize::new(1));
        let message = msg!("rows={}", rows.load(Ordering::SeqCst));

        rows.store(99, Ordering::SeqCst);

        assert_eq!(message.to_string(), "rows=1");
    }

    #[test]
    fn accepts_trailing_comma_and_no_arguments() {
        assert_eq!(msg!("plain").to_string(), "plain");
        assert_eq!(msg!("{}-{}", 1, "two",).to_string(), "1-two");
    }

    #[test]
    fn debug_shows_the_rendered_text() {
        assert_eq!(format!("{:?}", msg!("id {}", 7)), "Message(id 7)");
    }

    #[test]
    fn prefix_is_joined_with_a_space() {
        let message = Message::prefixed("(APICall GET /)", msg!("status {}", 200));
        assert_eq!(message.to_string(), "(APICall GET /) status 200");

        let nested = Message::prefixed("outer", Message::prefixed("inner", "text".into()));
        assert_eq!(nested.to_string(), "outer inner text");
    }
}
