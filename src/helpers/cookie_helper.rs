use percent_encoding::percent_decode_str;

/// Looks up `name` in a `Cookie` header value (`a=1; b=2`).
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .map(str::to_string)
}

/// Percent-decodes a cookie value. Values that do not decode to UTF-8 are
/// returned as stored.
pub fn decode_cookie_value(value: &str) -> String {
    percent_decode_str(value)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_named_cookie() {
        let header = "sessionid=abc123; csrftoken=tok%3D; theme=dark";
        assert_eq!(cookie_value(header, "csrftoken"), Some("tok%3D".to_string()));
        assert_eq!(cookie_value(header, "sessionid"), Some("abc123".to_string()));
    }

    #[test]
    fn decodes_percent_escapes() {
        assert_eq!(decode_cookie_value("tok%3D"), "tok=");
        assert_eq!(decode_cookie_value("a%20b%2Bc"), "a b+c");
        assert_eq!(decode_cookie_value("plain123"), "plain123");
        assert_eq!(decode_cookie_value("bad%FF"), "bad%FF");
    }

    #[test]
    fn prefix_names_do_not_match() {
        assert_eq!(cookie_value("csrftoken_old=x", "csrftoken"), None);
        assert_eq!(cookie_value("", "csrftoken"), None);
        assert_eq!(cookie_value("xcsrftoken=1", "csrftoken"), None);
    }
}
