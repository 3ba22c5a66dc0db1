// src/macros.rs

/// `String` shorthand. `s!()` is an empty string, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string slices into a new `String`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Trimmed cell -> `Some(String)` if anything is left, else `None`.
#[macro_export]
macro_rules! non_empty {
    ($cell:expr) => {{
        let cell = $cell;
        let t: &str = ::std::convert::AsRef::<str>::as_ref(&cell).trim();
        if t.is_empty() { None } else { Some(s!(t)) }
    }};
}
