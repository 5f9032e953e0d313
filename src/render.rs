// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Diagnostic rendering.
//!
//! The [`Display`][std::fmt::Display] output of the maps in this crate
//! looks like `{k1=v1, k2=v2}`, with absent keys and values (`None`)
//! written as `null`. It's meant for logs and error messages, not for
//! parsing.

use std::fmt::{Formatter, Result};

/// A value that can appear in the `{k=v}` rendering of a map.
///
/// Implemented for the primitive types, strings, references and
/// `Option`s of any of those.
pub trait Render {
    fn render(&self, f: &mut Formatter<'_>) -> Result;
}

impl<A: Render> Render for Option<A> {
    fn render(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Some(value) => value.render(f),
            None => f.write_str("null"),
        }
    }
}

impl<A: Render + ?Sized> Render for &A {
    fn render(&self, f: &mut Formatter<'_>) -> Result {
        (**self).render(f)
    }
}

impl<A: Render + ?Sized> Render for Box<A> {
    fn render(&self, f: &mut Formatter<'_>) -> Result {
        (**self).render(f)
    }
}

impl Render for () {
    fn render(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("()")
    }
}

macro_rules! render_display {
    ($($t:ty),*) => {
        $(
            impl Render for $t {
                fn render(&self, f: &mut Formatter<'_>) -> Result {
                    std::fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

render_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String
);

pub(crate) fn render_pairs<'a, K, V, I>(f: &mut Formatter<'_>, pairs: I) -> Result
where
    K: Render + 'a,
    V: Render + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    f.write_str("{")?;
    for (index, (key, value)) in pairs.into_iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        key.render(f)?;
        f.write_str("=")?;
        value.render(f)?;
    }
    f.write_str("}")
}

pub(crate) fn render_items<'a, A, I>(f: &mut Formatter<'_>, items: I) -> Result
where
    A: Render + 'a,
    I: IntoIterator<Item = &'a A>,
{
    f.write_str("[")?;
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        item.render(f)?;
    }
    f.write_str("]")
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fmt;

    struct Pairs(Vec<(Option<&'static str>, Option<i32>)>);

    impl fmt::Display for Pairs {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            render_pairs(f, self.0.iter().map(|(k, v)| (k, v)))
        }
    }

    #[test]
    fn nulls() {
        let pairs = Pairs(vec![(Some("a"), Some(1)), (None, Some(2)), (Some("c"), None)]);
        assert_eq!("{a=1, null=2, c=null}", pairs.to_string());
        assert_eq!("{}", Pairs(vec![]).to_string());
    }
}
