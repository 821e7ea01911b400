//! Provides the [`IntoText`] trait and implementations.

use std::borrow::Cow;

use super::{Color, Text};

/// Trait for any data that can be converted to a [`Text`] object.
///
/// Also provides the builder methods used to style text in code.
///
/// # Usage
///
/// ```
/// # use lantern_text::{Color, IntoText};
/// let mut my_text = "".into_text();
/// my_text = my_text.color(Color::RED).bold();
/// my_text = my_text.add_child("CRABBBBB".obfuscated());
/// ```
pub trait IntoText<'a>: Sized {
    /// Converts to a [`Text`] object, either owned or borrowed.
    fn into_cow_text(self) -> Cow<'a, Text>;

    /// Converts to an owned [`Text`] object.
    fn into_text(self) -> Text {
        self.into_cow_text().into_owned()
    }

    fn color(self, color: impl Into<Color>) -> Text {
        let mut value = self.into_text();
        value.color = Some(color.into());
        value
    }

    fn font(self, font: impl Into<Cow<'static, str>>) -> Text {
        let mut value = self.into_text();
        value.font = Some(font.into());
        value
    }

    fn bold(self) -> Text {
        let mut value = self.into_text();
        value.bold = Some(true);
        value
    }

    fn not_bold(self) -> Text {
        let mut value = self.into_text();
        value.bold = Some(false);
        value
    }

    fn italic(self) -> Text {
        let mut value = self.into_text();
        value.italic = Some(true);
        value
    }

    fn not_italic(self) -> Text {
        let mut value = self.into_text();
        value.italic = Some(false);
        value
    }

    fn underlined(self) -> Text {
        let mut value = self.into_text();
        value.underlined = Some(true);
        value
    }

    fn strikethrough(self) -> Text {
        let mut value = self.into_text();
        value.strikethrough = Some(true);
        value
    }

    fn obfuscated(self) -> Text {
        let mut value = self.into_text();
        value.obfuscated = Some(true);
        value
    }

    /// Text inserted into the chat box when this text is shift-clicked.
    fn insertion(self, insertion: impl Into<Cow<'static, str>>) -> Text {
        let mut value = self.into_text();
        value.insertion = Some(insertion.into());
        value
    }

    /// Appends a child. Children inherit the formatting of their parent
    /// unless they override it.
    fn add_child(self, text: impl IntoText<'static>) -> Text {
        let mut value = self.into_text();
        value.extra.push(text.into_text());
        value
    }
}

impl IntoText<'static> for Text {
    fn into_cow_text(self) -> Cow<'static, Text> {
        Cow::Owned(self)
    }
}

impl<'a> IntoText<'a> for &'a Text {
    fn into_cow_text(self) -> Cow<'a, Text> {
        Cow::Borrowed(self)
    }
}

impl IntoText<'static> for String {
    fn into_cow_text(self) -> Cow<'static, Text> {
        Cow::Owned(Text::text(self))
    }
}

impl IntoText<'static> for &'static str {
    fn into_cow_text(self) -> Cow<'static, Text> {
        Cow::Owned(Text::text(self))
    }
}

impl IntoText<'static> for Cow<'static, str> {
    fn into_cow_text(self) -> Cow<'static, Text> {
        Cow::Owned(Text::text(self))
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        value.into_text()
    }
}

impl From<&'static str> for Text {
    fn from(value: &'static str) -> Self {
        value.into_text()
    }
}

macro_rules! impl_primitives {
    ($($primitive:ty),+) => {
        $(
            impl IntoText<'static> for $primitive {
                fn into_cow_text(self) -> Cow<'static, Text> {
                    Cow::Owned(Text::text(self.to_string()))
                }
            }
        )+
    };
}

impl_primitives! {char, bool, f32, f64, i8, i16, i32, i64, u8, u16, u32, u64}
