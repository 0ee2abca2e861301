//! `key=value` file parsing shared by `.wskprops` and `whisk.properties`

use super::PropertyMap;

/// Parse `key=value` lines.
///
/// Blank lines, `#`/`!` comments and lines without `=` are skipped. The line
/// is split on the first `=` so values may themselves contain `=`. A key
/// that appears twice keeps its last value.
pub fn parse_properties(content: &str) -> PropertyMap {
    let mut map = PropertyMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        map.insert(key, value.trim());
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ValueSource;

    #[test]
    fn parses_wskprops_lines() {
        let map = parse_properties("APIHOST=192.168.9.100:443\nAUTH=uuid:secret\nNAMESPACE=_\n");
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("APIHOST", ""), "192.168.9.100:443");
        assert_eq!(map.get("AUTH", ""), "uuid:secret");
    }

    #[test]
    fn skips_comments_blank_and_malformed_lines() {
        let map = parse_properties("# comment\n! also comment\n\nnot a pair\n=novalue\nkey = value \n");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("key", ""), "value");
    }

    #[test]
    fn keeps_equals_inside_values_and_last_duplicate() {
        let map = parse_properties("APIGW_ACCESS_TOKEN=abc==\nAPIGW_ACCESS_TOKEN=def==\n");
        assert_eq!(map.get("APIGW_ACCESS_TOKEN", ""), "def==");
    }

    #[test]
    fn handles_crlf_line_endings() {
        let map = parse_properties("whisk.api.host.name=localhost\r\ntesting.auth=/tmp/auth\r\n");
        assert_eq!(map.get("whisk.api.host.name", ""), "localhost");
        assert_eq!(map.get("testing.auth", ""), "/tmp/auth");
    }
}
