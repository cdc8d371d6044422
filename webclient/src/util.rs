use std::fmt::{self, Display};

use url::Url;

use crate::error::*;

pub fn parse_url(url: impl AsRef<str>) -> Result<Url> {
    match Url::parse(url.as_ref()) {
        Ok(url) => Ok(url),
        Err(e) => Err(Error::InvalidSyntaxUrl {
            url: url.as_ref().to_owned(),
            source: e,
        }),
    }
}

/// Parses `base` as the API root, normalizing it to exactly one trailing slash.
pub fn normalize_base_url(base: &str) -> Result<Url> {
    let url = self::parse_url(format!("{}/", base.trim_end_matches('/')))?;
    if url.cannot_be_a_base() {
        return Err(Error::InvalidSyntaxUrl {
            url: base.to_owned(),
            source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
        });
    }
    Ok(url)
}

/// Appends `segments` below `base`, percent-encoding each one.
/// Empty segments are skipped.
pub fn join_segments<'a>(base: &Url, segments: impl IntoIterator<Item = &'a str>) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty()
            .extend(segments.into_iter().filter(|s| !s.is_empty()));
    }
    url
}

pub fn trim_quotes(s: &str) -> &str {
    s.trim_matches('"')
}

/// Writes `key: value` lines with the keys right-aligned to the longest one.
macro_rules! write_fields {
    ($f:expr, $($key:literal => $value:expr),+ $(,)?) => {{
        let width = [$($key.len()),+].into_iter().max().unwrap_or(0);
        writeln!($f)?;
        $(writeln!($f, "{:>width$}: {}", $key, $value, width = width)?;)+
        ::std::fmt::Result::Ok(())
    }};
}
pub(crate) use write_fields;

/// Displays a list as `[a, b, c]`.
pub struct DisplayList<'a, T>(pub &'a [T]);

impl<'a, T: Display> Display for DisplayList<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        for base in [
            "https://www.domjudge.org/demoweb/api",
            "https://www.domjudge.org/demoweb/api/",
            "https://www.domjudge.org/demoweb/api///",
        ] {
            assert_eq!(
                normalize_base_url(base).unwrap().as_str(),
                "https://www.domjudge.org/demoweb/api/"
            );
        }
        assert!(matches!(
            normalize_base_url("this-does-not-exist"),
            Err(Error::InvalidSyntaxUrl { .. })
        ));
    }

    #[test]
    fn test_join_segments() {
        let base = normalize_base_url("http://localhost:8080/api").unwrap();
        assert_eq!(
            join_segments(&base, ["contests", "nwerc18", "problems"]).as_str(),
            "http://localhost:8080/api/contests/nwerc18/problems"
        );
        // Singleton resources have no id segment
        assert_eq!(
            join_segments(&base, ["contests", "nwerc18", "scoreboard", ""]).as_str(),
            "http://localhost:8080/api/contests/nwerc18/scoreboard"
        );
        assert_eq!(
            join_segments(&base, ["teams", "a b/c"]).as_str(),
            "http://localhost:8080/api/teams/a%20b%2Fc"
        );
    }

    #[test]
    fn test_write_fields() {
        struct X;
        impl Display for X {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write_fields!(f, "id" => "p1", "ordinal" => 3)
            }
        }
        assert_eq!(X.to_string(), "\n     id: p1\nordinal: 3\n");
        assert_eq!(DisplayList(&["a", "b"]).to_string(), "[a, b]");
    }
}
